use serde::Serialize;

use crate::error::{FackelError, FackelResult};

/// Supported Python minor versions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum InterpreterTag {
    #[serde(rename = "27")]
    Py27,
    #[serde(rename = "35")]
    Py35,
    #[serde(rename = "36")]
    Py36,
}

impl InterpreterTag {
    /// Classify a dotted interpreter version.
    ///
    /// Only the first two components are kept and joined without a
    /// separator (`3.6.1` becomes `36`). The result must be in the
    /// allow-list; future, past and malformed versions are all rejected.
    pub fn from_version(version: &str) -> FackelResult<Self> {
        let version = version.trim();
        let short: String = version.split('.').take(2).collect();

        match short.as_str() {
            "27" => Ok(Self::Py27),
            "35" => Ok(Self::Py35),
            "36" => Ok(Self::Py36),
            _ => Err(FackelError::UnsupportedVersion {
                version: version.to_string(),
            }),
        }
    }

    /// The two-digit interpreter tag.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Py27 => "27",
            Self::Py35 => "35",
            Self::Py36 => "36",
        }
    }

    /// The wheel ABI fragment for this interpreter.
    ///
    /// 2.7 wheels were published as `cp27-none`; 3.x wheels repeat the
    /// `cpXY` component (`cp36-cp36`).
    pub fn wheel_tag(self) -> String {
        match self {
            Self::Py27 => "cp27-none".to_string(),
            Self::Py35 | Self::Py36 => vec![format!("cp{}", self.as_str()); 2].join("-"),
        }
    }
}

impl std::fmt::Display for InterpreterTag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
