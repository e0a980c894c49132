//! Error types for environment probing, URL resolution and installation.
//!
//! Every failure is fatal: errors are raised where they are detected and
//! propagated with `?` to the entry point. Nothing in the pipeline retries or
//! falls back to a default.

use thiserror::Error;

use crate::ports::CommandError;

/// Errors that can occur while resolving or installing a wheel.
#[derive(Debug, Error)]
pub enum FackelError {
    // === Probes ===
    /// The OS identifier does not belong to the linux or darwin family.
    #[error("Only linux and mac are supported but you are on {identifier}")]
    UnsupportedPlatform { identifier: String },

    /// The interpreter version is not in the supported allow-list.
    #[error("Only python versions 2.7, 3.5, 3.6 are supported (found {version})")]
    UnsupportedVersion { version: String },

    /// The CUDA toolchain is installed but its version output was not recognised.
    #[error("Could not parse cuda version from toolchain output: {output}")]
    VersionParse { output: String },

    /// The CUDA toolchain version was parsed but no binaries exist for it.
    #[error("Binaries are only available for cuda 7.5 and 8.0 (found {release})")]
    UnsupportedToolchainVersion { release: String },

    // === Install ===
    /// The package manager exited unsuccessfully.
    #[error("{}", installation_message(.code))]
    Installation { code: Option<i32> },

    // === Plumbing ===
    /// An external command could not be run or reported failure.
    #[error(transparent)]
    Command(#[from] CommandError),

    /// A rendered URL template did not parse.
    #[error("Invalid artifact URL: {0}")]
    InvalidUrl(#[from] url::ParseError),
}

// thiserror hands `.code` over by reference
#[allow(clippy::ref_option)]
fn installation_message(code: &Option<i32>) -> String {
    match code {
        Some(code) => format!("Installation failed: package manager exited with status {code}"),
        None => "Installation failed: package manager was terminated by a signal".to_string(),
    }
}

/// Result type alias for pyfackel operations.
pub type FackelResult<T> = Result<T, FackelError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unsupported_platform_names_identifier() {
        let err = FackelError::UnsupportedPlatform {
            identifier: "win32".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Only linux and mac are supported but you are on win32"
        );
    }

    #[test]
    fn test_installation_message_with_and_without_code() {
        let err = FackelError::Installation { code: Some(1) };
        assert!(err.to_string().contains("status 1"));

        let err = FackelError::Installation { code: None };
        assert!(err.to_string().contains("signal"));
    }

    #[test]
    fn test_command_error_is_transparent() {
        let err: FackelError = CommandError::Spawn {
            program: "nvcc".to_string(),
            reason: "not found".to_string(),
        }
        .into();
        assert_eq!(err.to_string(), "Failed to run nvcc: not found");
    }
}
