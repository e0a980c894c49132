use serde::Serialize;

use crate::error::{FackelError, FackelResult};

/// Operating system family a wheel is built for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum PlatformTag {
    #[serde(rename = "linux")]
    Linux,
    #[serde(rename = "macosx")]
    MacOsx,
}

impl PlatformTag {
    /// Classify an OS identifier by prefix.
    ///
    /// `linux*` maps to [`PlatformTag::Linux`] and `darwin*` to
    /// [`PlatformTag::MacOsx`]. Anything else is rejected with the raw
    /// identifier attached.
    pub fn from_os_identifier(identifier: &str) -> FackelResult<Self> {
        if identifier.starts_with("linux") {
            Ok(Self::Linux)
        } else if identifier.starts_with("darwin") {
            Ok(Self::MacOsx)
        } else {
            Err(FackelError::UnsupportedPlatform {
                identifier: identifier.to_string(),
            })
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Linux => "linux",
            Self::MacOsx => "macosx",
        }
    }
}

impl std::fmt::Display for PlatformTag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
