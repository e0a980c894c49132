//! Wheel URL resolution.
//!
//! Probes run in a fixed order: platform, interpreter, wheel tag, toolchain.
//! The first failing probe aborts resolution and its error is returned.

use serde::Serialize;
use tracing::{debug, info, warn};

use crate::domain::{ArtifactUrl, InterpreterTag, PlatformTag, ToolchainDetection};
use crate::error::FackelResult;
use crate::ports::{CommandRunner, HostEnvironment};
use crate::probe::{ProbeConfig, probe_interpreter, probe_platform, probe_toolchain};

/// Everything one resolution run detected, plus the resulting URL.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Resolution {
    pub platform: PlatformTag,
    pub interpreter: InterpreterTag,
    pub wheel_tag: String,
    pub toolchain: ToolchainDetection,
    pub url: ArtifactUrl,
}

/// Composes the probes into an [`ArtifactUrl`].
pub struct UrlResolver<'a> {
    env: &'a dyn HostEnvironment,
    runner: &'a dyn CommandRunner,
    config: ProbeConfig,
}

impl<'a> UrlResolver<'a> {
    pub fn new(env: &'a dyn HostEnvironment, runner: &'a dyn CommandRunner) -> Self {
        Self {
            env,
            runner,
            config: ProbeConfig::default(),
        }
    }

    /// Use a custom toolchain probe configuration.
    #[must_use]
    pub fn with_config(mut self, config: ProbeConfig) -> Self {
        self.config = config;
        self
    }

    /// Run every probe and build the URL.
    ///
    /// On macOS the toolchain is still probed, so an unsupported or broken
    /// CUDA install fails resolution there too, but the result is not used:
    /// only CPU wheels were published for mac.
    pub fn resolve(&self) -> FackelResult<Resolution> {
        let platform = probe_platform(self.env)?;
        let interpreter = probe_interpreter(self.env)?;
        let wheel_tag = interpreter.wheel_tag();
        let toolchain = probe_toolchain(self.runner, &self.config)?;

        let url = match platform {
            PlatformTag::MacOsx => {
                warn!("No precompiled version with cuda support available for macosx");
                ArtifactUrl::mac(interpreter)?
            }
            PlatformTag::Linux => {
                if !toolchain.is_present() {
                    warn!(
                        compute_tag = %ToolchainDetection::ABSENT_FALLBACK,
                        "No CUDA toolchain found, falling back to the default CUDA build"
                    );
                }
                ArtifactUrl::linux(toolchain.compute_tag(), interpreter)?
            }
        };

        debug!(%platform, %interpreter, %wheel_tag, ?toolchain, "Resolution inputs");
        info!(%url, "Resolved wheel URL");

        Ok(Resolution {
            platform,
            interpreter,
            wheel_tag,
            toolchain,
            url,
        })
    }

    /// Resolve and return only the URL.
    pub fn resolve_url(&self) -> FackelResult<ArtifactUrl> {
        self.resolve().map(|resolution| resolution.url)
    }
}
