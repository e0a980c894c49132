//! Wheel URL templates.
//!
//! The templates are fixed: one mac build without CUDA, one linux build per
//! CUDA release. Placeholders are substituted verbatim.

use serde::Serialize;
use url::Url;

use super::{ComputeTag, InterpreterTag};
use crate::error::FackelResult;

/// Template for the CPU-only macOS wheel.
pub const MAC_TEMPLATE: &str = "http://download.pytorch.org/whl/\
     torch-0.1.12.post2-{interpreter_tag}m-macosx_10_7_x86_64.whl";

/// Template for the CUDA-enabled linux wheels.
pub const LINUX_TEMPLATE: &str = "http://download.pytorch.org/whl/{compute_tag}/\
     torch-0.1.12.post2-{interpreter_tag}m-linux_x86_64.whl";

/// Download location of a prebuilt wheel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ArtifactUrl(Url);

impl ArtifactUrl {
    /// URL of the macOS wheel for the given interpreter.
    pub fn mac(interpreter: InterpreterTag) -> FackelResult<Self> {
        let rendered = MAC_TEMPLATE.replace("{interpreter_tag}", &interpreter.wheel_tag());
        Ok(Self(Url::parse(&rendered)?))
    }

    /// URL of the linux wheel for the given CUDA release and interpreter.
    pub fn linux(compute: ComputeTag, interpreter: InterpreterTag) -> FackelResult<Self> {
        let rendered = LINUX_TEMPLATE
            .replace("{compute_tag}", compute.as_str())
            .replace("{interpreter_tag}", &interpreter.wheel_tag());
        Ok(Self(Url::parse(&rendered)?))
    }

    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }

    pub const fn as_url(&self) -> &Url {
        &self.0
    }
}

impl std::fmt::Display for ArtifactUrl {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
