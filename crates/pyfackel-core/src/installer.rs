//! Package installation.
//!
//! Hands the resolved wheel URL to `pip install -U` and checks its exit code.
//! The package manager's output goes straight to the terminal.

use tracing::info;

use crate::domain::ArtifactUrl;
use crate::error::{FackelError, FackelResult};
use crate::ports::{CommandRunner, Invocation};

/// Default package manager program.
pub const DEFAULT_PIP: &str = "pip";

/// Runs the package manager for a resolved wheel.
pub struct Installer<'a> {
    runner: &'a dyn CommandRunner,
    pip: String,
}

impl<'a> Installer<'a> {
    pub fn new(runner: &'a dyn CommandRunner) -> Self {
        Self {
            runner,
            pip: DEFAULT_PIP.to_string(),
        }
    }

    /// Use a different pip executable (e.g. `pip3` or a venv path).
    #[must_use]
    pub fn with_pip(mut self, pip: impl Into<String>) -> Self {
        self.pip = pip.into();
        self
    }

    /// The command that [`Installer::install`] would run.
    pub fn install_command(&self, url: &ArtifactUrl) -> Invocation {
        Invocation::new(&self.pip)
            .args(["install", "-U"])
            .arg(url.as_str())
    }

    /// Install the wheel at `url`.
    pub fn install(&self, url: &ArtifactUrl) -> FackelResult<()> {
        let invocation = self.install_command(url);
        info!(command = %invocation, "Installing wheel");

        let status = self.runner.status(&invocation)?;
        if status.is_success() {
            Ok(())
        } else {
            Err(FackelError::Installation { code: status.code })
        }
    }
}
