//! Core domain types, ports and the resolution pipeline for pyfackel.
//!
//! The crate is pure with respect to the host: every read of process state
//! (OS identifier, interpreter version) goes through [`HostEnvironment`] and
//! every external command goes through [`CommandRunner`]. Concrete adapters
//! live in `pyfackel-runtime` and are wired together by the CLI.
//!
//! The pipeline is:
//!
//! 1. [`probe::probe_platform`] classifies the OS family
//! 2. [`probe::probe_interpreter`] classifies the interpreter version
//! 3. [`InterpreterTag::wheel_tag`] formats the wheel ABI fragment
//! 4. [`probe::probe_toolchain`] detects the CUDA compiler
//! 5. [`ArtifactUrl`] renders one of the two wheel URL templates
//!
//! [`UrlResolver`] runs these steps in order and [`Installer`] hands the
//! result to `pip`.

#![deny(unused_crate_dependencies)]

pub mod domain;
pub mod error;
pub mod installer;
pub mod ports;
pub mod probe;
pub mod resolver;

pub use domain::{ArtifactUrl, ComputeTag, InterpreterTag, PlatformTag, ToolchainDetection};
pub use error::{FackelError, FackelResult};
pub use installer::Installer;
pub use ports::{
    CommandError, CommandOutput, CommandRunner, CommandStatus, HostEnvironment, Invocation,
};
pub use probe::ProbeConfig;
pub use resolver::{Resolution, UrlResolver};

// Silence unused dev-dependency warnings
#[cfg(test)]
use mockall as _;
#[cfg(test)]
use serde_json as _;
#[cfg(test)]
use tracing_subscriber as _;
