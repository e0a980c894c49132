//! Command handlers.
//!
//! Each handler takes the composed [`CliContext`](crate::CliContext) and
//! returns `anyhow::Result` so failures reach `main` with context attached.

pub mod install;
pub mod probe;
pub mod url;
