//! System probe implementations.
//!
//! - [`ProcessCommandRunner`] implements `CommandRunner` with real processes
//! - [`SystemEnvironment`] implements `HostEnvironment` for the current host
//!
//! Both should be constructed in the CLI's bootstrap and passed down as
//! trait objects.

mod commands;
mod environment;

pub use commands::ProcessCommandRunner;
pub use environment::{DEFAULT_PYTHON, SystemEnvironment, host_os_identifier};
