use crate::command::{DerivedCommand, ExitCode, Spawner};
use crate::error::LaunchError;
use std::process::ExitStatus;

/// Exit code reported when the interpreter cannot be started at all.
pub const SPAWN_FAILED: ExitCode = -1;

/// Runs the interpreter as a real child process with inherited stdio.
#[derive(Debug, Default, Clone, Copy)]
pub struct ProcessSpawner;

impl Spawner for ProcessSpawner {
    fn spawn_and_wait(&mut self, command: &DerivedCommand) -> Result<ExitCode, LaunchError> {
        let mut child = command
            .to_command()
            .spawn()
            .map_err(|source| LaunchError::Spawn {
                program: command.program().to_owned(),
                source,
            })?;
        let exit_status = child.wait().map_err(LaunchError::Wait)?;
        tracing::debug!(status = %exit_status, "interpreter exited");
        Ok(exit_code(exit_status))
    }
}

/// Turn a child's status into the code the launcher exits with.
///
/// A normal exit keeps its code. On unix a child killed by a signal reports
/// `128 + signal`, the way shells do. Any other status maps to `-1`.
pub fn exit_code(exit_status: ExitStatus) -> ExitCode {
    if let Some(code) = exit_status.code() {
        return code;
    }
    #[cfg(unix)]
    {
        use std::os::unix::process::ExitStatusExt;
        if let Some(signal) = exit_status.signal() {
            return 128 + signal;
        }
    }
    SPAWN_FAILED
}
