//! Environment probes.
//!
//! Each probe reads one signal from a port and classifies it into a domain
//! tag, failing loudly on anything outside the supported set.

mod toolchain;

pub use toolchain::{CUDA_RELEASE_PATTERN, parse_cuda_release, probe_toolchain};

use tracing::debug;

use crate::domain::{InterpreterTag, PlatformTag};
use crate::error::FackelResult;
use crate::ports::HostEnvironment;

/// Default name of the CUDA compiler binary.
pub const DEFAULT_TOOLCHAIN_BINARY: &str = "nvcc";

/// Default program used to look the toolchain up on `PATH`.
pub const DEFAULT_LOOKUP_PROGRAM: &str = "which";

/// Configuration for the toolchain probe.
///
/// # Example
///
/// ```
/// use pyfackel_core::ProbeConfig;
///
/// let config = ProbeConfig::new().with_toolchain_binary("/usr/local/cuda/bin/nvcc");
/// assert_eq!(config.toolchain_binary(), "/usr/local/cuda/bin/nvcc");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProbeConfig {
    toolchain_binary: String,
    lookup_program: String,
}

impl Default for ProbeConfig {
    fn default() -> Self {
        Self {
            toolchain_binary: DEFAULT_TOOLCHAIN_BINARY.to_string(),
            lookup_program: DEFAULT_LOOKUP_PROGRAM.to_string(),
        }
    }
}

impl ProbeConfig {
    /// Create a configuration with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the CUDA compiler binary. Defaults to `nvcc`.
    #[must_use]
    pub fn with_toolchain_binary(mut self, binary: impl Into<String>) -> Self {
        self.toolchain_binary = binary.into();
        self
    }

    /// Set the `which`-style lookup program. Defaults to `which`.
    #[must_use]
    pub fn with_lookup_program(mut self, program: impl Into<String>) -> Self {
        self.lookup_program = program.into();
        self
    }

    pub fn toolchain_binary(&self) -> &str {
        &self.toolchain_binary
    }

    pub fn lookup_program(&self) -> &str {
        &self.lookup_program
    }
}

/// Classify the host's OS family.
pub fn probe_platform(env: &dyn HostEnvironment) -> FackelResult<PlatformTag> {
    let identifier = env.os_identifier();
    let platform = PlatformTag::from_os_identifier(&identifier)?;
    debug!(%identifier, %platform, "Detected platform");
    Ok(platform)
}

/// Classify the target interpreter's version.
pub fn probe_interpreter(env: &dyn HostEnvironment) -> FackelResult<InterpreterTag> {
    let version = env.interpreter_version()?;
    let interpreter = InterpreterTag::from_version(&version)?;
    debug!(version = %version.trim(), %interpreter, "Detected interpreter");
    Ok(interpreter)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::FackelError;
    use mockall::mock;

    mock! {
        Env {}
        impl HostEnvironment for Env {
            fn os_identifier(&self) -> String;
            fn interpreter_version(&self) -> FackelResult<String>;
        }
    }

    fn env_with_os(identifier: &'static str) -> MockEnv {
        let mut env = MockEnv::new();
        env.expect_os_identifier()
            .times(1)
            .returning(move || identifier.to_string());
        env
    }

    fn env_with_version(version: &'static str) -> MockEnv {
        let mut env = MockEnv::new();
        env.expect_interpreter_version()
            .times(1)
            .returning(move || Ok(version.to_string()));
        env
    }

    #[test]
    fn test_probe_platform_linux() {
        let env = env_with_os("linux-ANY_FURTHER_INFORMATION");
        assert_eq!(probe_platform(&env).unwrap(), PlatformTag::Linux);
    }

    #[test]
    fn test_probe_platform_mac() {
        let env = env_with_os("darwin-ANY_FURTHER_INFORMATION");
        assert_eq!(probe_platform(&env).unwrap(), PlatformTag::MacOsx);
    }

    #[test]
    fn test_probe_platform_other() {
        let env = env_with_os("ANY_OTHER_PLATFORM");
        assert!(matches!(
            probe_platform(&env),
            Err(FackelError::UnsupportedPlatform { .. })
        ));
    }

    #[test]
    fn test_probe_interpreter_supported() {
        assert_eq!(
            probe_interpreter(&env_with_version("2.7.1")).unwrap(),
            InterpreterTag::Py27
        );
        assert_eq!(
            probe_interpreter(&env_with_version("3.5.6")).unwrap(),
            InterpreterTag::Py35
        );
        assert_eq!(
            probe_interpreter(&env_with_version("3.6.1\n")).unwrap(),
            InterpreterTag::Py36
        );
    }

    #[test]
    fn test_probe_interpreter_unsupported() {
        for version in ["3.7.1", "3.4.1", "2.6.1"] {
            assert!(matches!(
                probe_interpreter(&env_with_version(version)),
                Err(FackelError::UnsupportedVersion { .. })
            ));
        }
    }

    #[test]
    fn test_probe_interpreter_propagates_env_error() {
        let mut env = MockEnv::new();
        env.expect_interpreter_version().returning(|| {
            Err(FackelError::Command(crate::ports::CommandError::Spawn {
                program: "python".to_string(),
                reason: "No such file or directory".to_string(),
            }))
        });
        assert!(matches!(
            probe_interpreter(&env),
            Err(FackelError::Command(_))
        ));
    }

    #[test]
    fn test_probe_config_defaults() {
        let config = ProbeConfig::new();
        assert_eq!(config.toolchain_binary(), "nvcc");
        assert_eq!(config.lookup_program(), "which");

        let config = config.with_lookup_program("command-v");
        assert_eq!(config.lookup_program(), "command-v");
    }
}
