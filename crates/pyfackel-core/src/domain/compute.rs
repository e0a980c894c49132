use serde::Serialize;

use crate::error::{FackelError, FackelResult};

/// CUDA toolkit releases that have published wheels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ComputeTag {
    #[serde(rename = "cu75")]
    Cu75,
    #[serde(rename = "cu80")]
    Cu80,
}

impl ComputeTag {
    /// Map a `X.Y` toolkit release to its tag (`8.0` becomes `cu80`).
    pub fn from_release(release: &str) -> FackelResult<Self> {
        let tag = format!("cu{}", release.replace('.', ""));
        match tag.as_str() {
            "cu75" => Ok(Self::Cu75),
            "cu80" => Ok(Self::Cu80),
            _ => Err(FackelError::UnsupportedToolchainVersion {
                release: release.to_string(),
            }),
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Cu75 => "cu75",
            Self::Cu80 => "cu80",
        }
    }
}

impl std::fmt::Display for ComputeTag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Outcome of probing for the CUDA compiler.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "status", content = "compute_tag", rename_all = "lowercase")]
pub enum ToolchainDetection {
    /// No toolchain on the lookup path.
    Absent,
    /// Toolchain found with a supported release.
    Present(ComputeTag),
}

impl ToolchainDetection {
    /// Tag used when no toolchain is installed.
    ///
    /// Historical default: an absent toolkit still selects the oldest CUDA
    /// build rather than a CPU-only one.
    pub const ABSENT_FALLBACK: ComputeTag = ComputeTag::Cu75;

    /// The compute tag to put in a linux URL.
    pub const fn compute_tag(self) -> ComputeTag {
        match self {
            Self::Absent => Self::ABSENT_FALLBACK,
            Self::Present(tag) => tag,
        }
    }

    pub const fn is_present(self) -> bool {
        matches!(self, Self::Present(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_supported_releases() {
        assert_eq!(ComputeTag::from_release("7.5").unwrap(), ComputeTag::Cu75);
        assert_eq!(ComputeTag::from_release("8.0").unwrap(), ComputeTag::Cu80);
    }

    #[test]
    fn test_unsupported_releases_keep_release() {
        for release in ["7.0", "9.0", "10.0", "12.4"] {
            match ComputeTag::from_release(release) {
                Err(FackelError::UnsupportedToolchainVersion { release: r }) => {
                    assert_eq!(r, release);
                }
                other => panic!("expected unsupported toolchain for {release}, got {other:?}"),
            }
        }
    }

    #[test]
    fn test_absent_falls_back_to_cu75() {
        assert_eq!(ToolchainDetection::Absent.compute_tag(), ComputeTag::Cu75);
        assert_eq!(
            ToolchainDetection::Present(ComputeTag::Cu80).compute_tag(),
            ComputeTag::Cu80
        );
        assert!(!ToolchainDetection::Absent.is_present());
    }

    #[test]
    fn test_detection_serializes_with_status() {
        let json = serde_json::to_value(ToolchainDetection::Present(ComputeTag::Cu80)).unwrap();
        assert_eq!(json["status"], "present");
        assert_eq!(json["compute_tag"], "cu80");

        let json = serde_json::to_value(ToolchainDetection::Absent).unwrap();
        assert_eq!(json["status"], "absent");
    }
}
