//! Host identity: OS identifier and interpreter version.

use std::sync::Arc;

use pyfackel_core::{CommandError, CommandRunner, FackelResult, HostEnvironment, Invocation};
use tracing::debug;

/// Default interpreter program.
pub const DEFAULT_PYTHON: &str = "python";

/// Snippet printing the interpreter's dotted version.
const VERSION_SNIPPET: &str = "import platform; print(platform.python_version())";

/// The current OS in Python `sys.platform` form.
///
/// Rust names macOS `macos` and Windows `windows`; Python reports the
/// kernel names `darwin` and `win32`. Other targets are passed through.
pub fn host_os_identifier() -> String {
    match std::env::consts::OS {
        "macos" => "darwin".to_string(),
        "windows" => "win32".to_string(),
        other => other.to_string(),
    }
}

/// [`HostEnvironment`] for the machine pyfackel runs on.
///
/// The interpreter version is read by running the configured Python
/// executable. Both signals can be pinned, which lets a user resolve the
/// URL for a different interpreter or platform than the local one.
pub struct SystemEnvironment {
    runner: Arc<dyn CommandRunner>,
    python: String,
    os_override: Option<String>,
    version_override: Option<String>,
}

impl SystemEnvironment {
    pub fn new(runner: Arc<dyn CommandRunner>) -> Self {
        Self {
            runner,
            python: DEFAULT_PYTHON.to_string(),
            os_override: None,
            version_override: None,
        }
    }

    /// Query a different interpreter (e.g. `python3` or a venv path).
    #[must_use]
    pub fn with_python(mut self, python: impl Into<String>) -> Self {
        self.python = python.into();
        self
    }

    /// Report this OS identifier instead of the host's.
    #[must_use]
    pub fn with_os_identifier(mut self, identifier: Option<String>) -> Self {
        self.os_override = identifier;
        self
    }

    /// Report this interpreter version instead of asking the interpreter.
    #[must_use]
    pub fn with_interpreter_version(mut self, version: Option<String>) -> Self {
        self.version_override = version;
        self
    }

    fn version_query(&self) -> Invocation {
        Invocation::new(&self.python).arg("-c").arg(VERSION_SNIPPET)
    }
}

impl HostEnvironment for SystemEnvironment {
    fn os_identifier(&self) -> String {
        self.os_override.clone().unwrap_or_else(host_os_identifier)
    }

    fn interpreter_version(&self) -> FackelResult<String> {
        if let Some(version) = &self.version_override {
            debug!(%version, "Using pinned interpreter version");
            return Ok(version.clone());
        }

        let invocation = self.version_query();
        let output = self.runner.output(&invocation)?;
        if !output.is_success() {
            return Err(CommandError::failed(&invocation, &output).into());
        }

        Ok(output.text().trim().to_string())
    }
}
