//! Domain tags and the artifact URL.
//!
//! Each tag is a closed enum: a value outside the supported set can never be
//! constructed, so the resolver only ever renders known-good URLs.

mod artifact;
mod compute;
mod interpreter;
mod platform;

pub use artifact::{ArtifactUrl, LINUX_TEMPLATE, MAC_TEMPLATE};
pub use compute::{ComputeTag, ToolchainDetection};
pub use interpreter::InterpreterTag;
pub use platform::PlatformTag;
