//! Command runner port.
//!
//! Every external process the pipeline starts (toolchain lookup, toolchain
//! version, interpreter query, package install) is described as an
//! [`Invocation`] and executed through [`CommandRunner`].

use std::fmt;

use thiserror::Error;

/// Errors raised by a command runner or by callers interpreting its result.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CommandError {
    /// The program could not be started at all.
    #[error("Failed to run {program}: {reason}")]
    Spawn { program: String, reason: String },

    /// The program ran but reported failure.
    #[error("Command `{command}` failed with status {}: {stderr}", display_code(.code))]
    Failed {
        command: String,
        code: Option<i32>,
        stderr: String,
    },
}

#[allow(clippy::ref_option)]
fn display_code(code: &Option<i32>) -> String {
    code.map_or_else(|| "signal".to_string(), |c| c.to_string())
}

impl CommandError {
    /// Build a `Failed` error from a finished invocation.
    pub fn failed(invocation: &Invocation, output: &CommandOutput) -> Self {
        Self::Failed {
            command: invocation.to_string(),
            code: output.code,
            stderr: output.stderr.trim().to_string(),
        }
    }
}

/// A program and its arguments. No shell is involved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    /// Program name or path.
    pub program: String,
    /// Arguments passed verbatim.
    pub args: Vec<String>,
}

impl Invocation {
    /// Create an invocation with no arguments.
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
            args: Vec::new(),
        }
    }

    /// Append one argument.
    #[must_use]
    pub fn arg(mut self, arg: impl Into<String>) -> Self {
        self.args.push(arg.into());
        self
    }

    /// Append several arguments.
    #[must_use]
    pub fn args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.args.extend(args.into_iter().map(Into::into));
        self
    }
}

impl fmt::Display for Invocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.program)?;
        for arg in &self.args {
            if arg.contains(char::is_whitespace) {
                write!(f, " \"{arg}\"")?;
            } else {
                write!(f, " {arg}")?;
            }
        }
        Ok(())
    }
}

/// Captured result of a finished process.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommandOutput {
    /// Exit code, `None` if the process was killed by a signal.
    pub code: Option<i32>,
    pub stdout: String,
    pub stderr: String,
}

impl CommandOutput {
    /// Successful output with the given stdout.
    pub fn success(stdout: impl Into<String>) -> Self {
        Self {
            code: Some(0),
            stdout: stdout.into(),
            stderr: String::new(),
        }
    }

    /// Output of a process that exited with `code` and printed nothing.
    pub fn exited(code: i32) -> Self {
        Self {
            code: Some(code),
            ..Self::default()
        }
    }

    /// Whether the process exited with status 0.
    pub const fn is_success(&self) -> bool {
        matches!(self.code, Some(0))
    }

    /// The text a tool reported: stdout, or stderr when stdout is blank
    /// (some tools print their version to stderr).
    pub fn text(&self) -> &str {
        if self.stdout.trim().is_empty() {
            &self.stderr
        } else {
            &self.stdout
        }
    }
}

/// Exit status of a process whose output went straight to the terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CommandStatus {
    /// Exit code, `None` if the process was killed by a signal.
    pub code: Option<i32>,
}

impl CommandStatus {
    pub const fn exited(code: i32) -> Self {
        Self { code: Some(code) }
    }

    /// Whether the process exited with status 0.
    pub const fn is_success(&self) -> bool {
        matches!(self.code, Some(0))
    }
}

/// Port for running external processes.
///
/// Implementations block until the process finishes. There is no timeout:
/// a hung child hangs the caller.
pub trait CommandRunner: Send + Sync {
    /// Run the invocation and capture stdout and stderr.
    ///
    /// A non-zero exit is reported through [`CommandOutput::code`], not as an
    /// error. `Err` means the process could not be started.
    fn output(&self, invocation: &Invocation) -> Result<CommandOutput, CommandError>;

    /// Run the invocation with stdio inherited from the current process.
    fn status(&self, invocation: &Invocation) -> Result<CommandStatus, CommandError>;
}
