use std::ffi::OsString;
use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while deriving or running the interpreter command.
#[derive(Debug, Error)]
pub enum LaunchError {
    /// The platform could not report the running executable's own location.
    #[error("cannot determine the launcher's own executable path: {0}")]
    SelfPath(#[source] io::Error),

    /// The launcher's file name does not follow the naming convention, so no
    /// companion script path can be derived from it.
    #[error("launcher path {} does not end with `{suffix}`", .path.display())]
    UnexpectedLauncherName { path: PathBuf, suffix: &'static str },

    /// The interpreter process could not be created.
    #[error("failed to spawn {}: {source}", .program.to_string_lossy())]
    Spawn {
        program: OsString,
        #[source]
        source: io::Error,
    },

    /// The interpreter was started but waiting for it failed.
    #[error("failed to wait for the interpreter: {0}")]
    Wait(#[source] io::Error),
}

impl LaunchError {
    /// Whether this error happened before any child process could be created
    /// from a well-formed command.
    pub fn is_fatal(&self) -> bool {
        matches!(
            self,
            LaunchError::SelfPath(_) | LaunchError::UnexpectedLauncherName { .. }
        )
    }
}
