//! CLI bootstrap - the composition root.
//!
//! This module is the ONLY place where concrete adapters are instantiated:
//! - Process runner (via pyfackel-runtime)
//! - Host environment (via pyfackel-runtime)
//! - Probe configuration (via pyfackel-core)
//!
//! Command handlers receive the composed [`CliContext`].

use std::sync::Arc;

use pyfackel_core::{CommandRunner, HostEnvironment, Installer, ProbeConfig, UrlResolver};
use pyfackel_runtime::{ProcessCommandRunner, SystemEnvironment};

use crate::parser::Cli;

/// Bootstrap configuration for the CLI.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CliConfig {
    /// Python interpreter to query for its version.
    pub python: String,
    /// CUDA compiler to look up.
    pub nvcc: String,
    /// Pinned OS identifier, if any.
    pub platform: Option<String>,
    /// Pinned interpreter version, if any.
    pub python_version: Option<String>,
}

impl CliConfig {
    /// Take the probe options from parsed arguments.
    pub fn from_cli(cli: &Cli) -> Self {
        Self {
            python: cli.python.clone(),
            nvcc: cli.nvcc.clone(),
            platform: cli.platform.clone(),
            python_version: cli.python_version.clone(),
        }
    }

    fn probe_config(&self) -> ProbeConfig {
        ProbeConfig::new().with_toolchain_binary(&self.nvcc)
    }
}

/// Fully composed context for CLI commands.
pub struct CliContext {
    /// Runner for every external process.
    pub runner: Arc<dyn CommandRunner>,
    /// Source of the OS identifier and interpreter version.
    pub environment: Arc<dyn HostEnvironment>,
    /// Toolchain probe settings.
    pub probe_config: ProbeConfig,
}

impl CliContext {
    /// A resolver over this context's adapters.
    pub fn resolver(&self) -> UrlResolver<'_> {
        UrlResolver::new(self.environment.as_ref(), self.runner.as_ref())
            .with_config(self.probe_config.clone())
    }

    /// An installer that runs `pip`.
    pub fn installer(&self, pip: &str) -> Installer<'_> {
        Installer::new(self.runner.as_ref()).with_pip(pip)
    }
}

/// Wire the real host adapters together.
pub fn bootstrap(config: CliConfig) -> CliContext {
    let runner: Arc<dyn CommandRunner> = Arc::new(ProcessCommandRunner::new());
    let environment = SystemEnvironment::new(Arc::clone(&runner))
        .with_python(config.python.clone())
        .with_os_identifier(config.platform.clone())
        .with_interpreter_version(config.python_version.clone());

    CliContext {
        probe_config: config.probe_config(),
        runner,
        environment: Arc::new(environment),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn test_config_from_cli() {
        let cli = Cli::parse_from([
            "pyfackel",
            "--python",
            "python3",
            "--nvcc",
            "/usr/local/cuda/bin/nvcc",
            "--platform",
            "linux",
            "probe",
        ]);
        let config = CliConfig::from_cli(&cli);
        assert_eq!(config.python, "python3");
        assert_eq!(config.platform.as_deref(), Some("linux"));
        assert_eq!(
            config.probe_config().toolchain_binary(),
            "/usr/local/cuda/bin/nvcc"
        );
    }

    #[test]
    fn test_bootstrap_applies_overrides() {
        let ctx = bootstrap(CliConfig {
            python: "python".to_string(),
            nvcc: "nvcc".to_string(),
            platform: Some("darwin".to_string()),
            python_version: Some("3.5.2".to_string()),
        });
        assert_eq!(ctx.environment.os_identifier(), "darwin");
        assert_eq!(ctx.environment.interpreter_version().unwrap(), "3.5.2");
    }
}
