//! Port definitions for host access.
//!
//! Core owns the traits, `pyfackel-runtime` owns the implementations and the
//! CLI injects them. Tests substitute deterministic doubles.

mod command_runner;
mod host_environment;

pub use command_runner::{CommandError, CommandOutput, CommandRunner, CommandStatus, Invocation};
pub use host_environment::HostEnvironment;
