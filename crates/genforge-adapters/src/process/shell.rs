//! Process runner backed by `std::process::Command`.

use std::path::Path;
use std::process::Command;

use tracing::{debug, trace};

use genforge_core::{application::ports::CommandRunner, domain::CommandResult};

/// Production command runner.
///
/// Arguments are passed as an argv array, never through a shell, so project
/// names and URLs need no quoting. Non-zero exits and unlaunchable programs
/// both come back as failed [`CommandResult`]s per the port contract.
#[derive(Debug, Clone, Copy)]
pub struct ShellRunner;

impl ShellRunner {
    pub fn new() -> Self {
        Self
    }
}

impl Default for ShellRunner {
    fn default() -> Self {
        Self::new()
    }
}

impl CommandRunner for ShellRunner {
    fn run(&self, program: &str, args: &[&str], cwd: Option<&Path>) -> CommandResult {
        debug!(program, ?args, cwd = ?cwd, "Running command");

        let mut command = Command::new(program);
        command.args(args);
        if let Some(dir) = cwd {
            command.current_dir(dir);
        }

        match command.output() {
            Ok(output) => {
                let result = CommandResult {
                    succeeded: output.status.success(),
                    stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
                    stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
                };
                trace!(
                    succeeded = result.succeeded,
                    stderr = %result.stderr.trim(),
                    "Command finished"
                );
                result
            }
            Err(e) => {
                debug!(program, error = %e, "Command could not be launched");
                CommandResult::launch_failure(&format!("{program}: {e}"))
            }
        }
    }
}
