//! Command-line adapter for pyfackel.
//!
//! `main.rs` parses [`Cli`], builds a [`CliContext`] through [`bootstrap`]
//! and dispatches to [`handlers`].

#![deny(unsafe_code)]
#![deny(unused_crate_dependencies)]

// Used by main.rs only
use dotenvy as _;
use tracing_subscriber as _;

pub mod bootstrap;
pub mod commands;
pub mod handlers;
pub mod parser;

// Re-export primary types for convenient access
pub use bootstrap::{CliConfig, CliContext, bootstrap};
pub use commands::Commands;
pub use parser::Cli;
