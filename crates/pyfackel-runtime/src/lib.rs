//! Host adapters for pyfackel.
//!
//! Implements the `pyfackel-core` ports against the real machine: processes
//! are started with `std::process::Command` and the OS identifier comes from
//! the compile-time target.

#![deny(unsafe_code)]
#![deny(unused_crate_dependencies)]

pub mod system;

pub use system::{ProcessCommandRunner, SystemEnvironment};
