//! Host environment port.
//!
//! Abstracts the two ambient reads the pipeline depends on so tests can pin
//! them without touching real process state.

use crate::error::FackelResult;

/// Port for reading the identity of the host and its interpreter.
pub trait HostEnvironment: Send + Sync {
    /// The OS identifier in Python `sys.platform` form (`linux`, `darwin`,
    /// `win32`, ...).
    fn os_identifier(&self) -> String;

    /// The dotted version of the target interpreter (e.g. `3.6.1`).
    ///
    /// Implementations may have to run the interpreter to find out, so this
    /// can fail.
    fn interpreter_version(&self) -> FackelResult<String>;
}
