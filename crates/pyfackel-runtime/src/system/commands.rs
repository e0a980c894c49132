//! Process execution via `std::process::Command`.

use std::process::{Command, ExitStatus, Output};

use pyfackel_core::{CommandError, CommandOutput, CommandRunner, CommandStatus, Invocation};
use tracing::debug;

/// [`CommandRunner`] that starts real processes.
///
/// Arguments are passed directly to the program; no shell is involved, so
/// nothing in an argument is expanded or split.
#[derive(Debug, Default, Clone, Copy)]
pub struct ProcessCommandRunner;

impl ProcessCommandRunner {
    pub const fn new() -> Self {
        Self
    }

    fn command(invocation: &Invocation) -> Command {
        let mut command = Command::new(&invocation.program);
        command.args(&invocation.args);
        command
    }

    fn spawn_error(invocation: &Invocation, err: &std::io::Error) -> CommandError {
        CommandError::Spawn {
            program: invocation.program.clone(),
            reason: err.to_string(),
        }
    }
}

impl CommandRunner for ProcessCommandRunner {
    fn output(&self, invocation: &Invocation) -> Result<CommandOutput, CommandError> {
        debug!(command = %invocation, "Running");
        let output = Self::command(invocation)
            .output()
            .map_err(|e| Self::spawn_error(invocation, &e))?;
        let output = convert_output(&output);
        debug!(command = %invocation, code = ?output.code, "Finished");
        Ok(output)
    }

    fn status(&self, invocation: &Invocation) -> Result<CommandStatus, CommandError> {
        debug!(command = %invocation, "Running with inherited stdio");
        let status = Self::command(invocation)
            .status()
            .map_err(|e| Self::spawn_error(invocation, &e))?;
        Ok(convert_status(status))
    }
}

fn convert_output(output: &Output) -> CommandOutput {
    CommandOutput {
        code: output.status.code(),
        stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
        stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
    }
}

fn convert_status(status: ExitStatus) -> CommandStatus {
    CommandStatus {
        code: status.code(),
    }
}

#[cfg(all(test, unix))]
mod tests {
    use super::*;

    #[test]
    fn test_output_captures_stdout() {
        let runner = ProcessCommandRunner::new();
        let output = runner
            .output(&Invocation::new("echo").arg("Cuda compilation tools, release 8.0"))
            .unwrap();
        assert!(output.is_success());
        assert_eq!(output.stdout.trim(), "Cuda compilation tools, release 8.0");
    }

    #[test]
    fn test_output_reports_nonzero_exit() {
        let runner = ProcessCommandRunner::new();
        let output = runner.output(&Invocation::new("false")).unwrap();
        assert!(!output.is_success());
        assert_eq!(output.code, Some(1));
    }

    #[test]
    fn test_lookup_of_nonexistent_command_fails() {
        // Hosts without `which` cannot run this lookup at all
        let which_on_path = std::env::var_os("PATH").is_some_and(|path| {
            std::env::split_paths(&path).any(|dir| dir.join("which").is_file())
        });
        if !which_on_path {
            return;
        }

        let runner = ProcessCommandRunner::new();
        let output = runner
            .output(&Invocation::new("which").arg("definitely_not_a_real_command_12345"))
            .unwrap();
        assert!(!output.is_success());
        assert_eq!(output.code, Some(1));
    }

    #[test]
    fn test_missing_program_is_spawn_error() {
        let runner = ProcessCommandRunner::new();
        let err = runner
            .output(&Invocation::new("definitely_not_a_real_command_12345"))
            .unwrap_err();
        assert!(matches!(err, CommandError::Spawn { .. }));
    }

    #[test]
    fn test_status_reports_exit_code() {
        let runner = ProcessCommandRunner::new();
        assert!(runner.status(&Invocation::new("true")).unwrap().is_success());
        assert_eq!(runner.status(&Invocation::new("false")).unwrap().code, Some(1));
    }

    #[test]
    fn test_arguments_are_not_shell_expanded() {
        let runner = ProcessCommandRunner::new();
        let output = runner
            .output(&Invocation::new("echo").arg("$HOME; ls"))
            .unwrap();
        assert_eq!(output.stdout.trim(), "$HOME; ls");
    }
}
