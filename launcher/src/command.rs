use crate::env::ChildEnvironment;
use crate::error::LaunchError;
use crate::quoting;
use std::ffi::{OsStr, OsString};
use std::path::{Path, PathBuf};
use std::process::Command;

/// Conventional process exit code type used by this crate.
///
/// A value of 0 indicates success; any non-zero value indicates failure.
pub type ExitCode = i32;

/// Token separating the script path from the forwarded arguments.
pub const SEPARATOR: &str = "--";

/// Fully derived interpreter invocation.
///
/// Built once per launch and never modified afterwards. The command line is
/// `[program, script, "--", args...]` where `args` are already re-quoted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DerivedCommand {
    program: OsString,
    script: PathBuf,
    args: Vec<OsString>,
    env: ChildEnvironment,
}

impl DerivedCommand {
    /// Assemble a command, re-quoting `forwarded` on the way in.
    pub fn new<I, S>(program: OsString, script: PathBuf, forwarded: I, env: ChildEnvironment) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<OsStr>,
    {
        let args = forwarded
            .into_iter()
            .map(|arg| {
                let arg = arg.as_ref();
                if quoting::has_embedded_quote(arg) {
                    tracing::warn!(?arg, "argument contains a quote and will not be forwarded intact");
                }
                quoting::requote(arg)
            })
            .collect();
        Self {
            program,
            script,
            args,
            env,
        }
    }

    pub fn program(&self) -> &OsStr {
        &self.program
    }

    pub fn script(&self) -> &Path {
        &self.script
    }

    /// Re-quoted arguments that follow the separator.
    pub fn forwarded_args(&self) -> &[OsString] {
        &self.args
    }

    pub fn env(&self) -> &ChildEnvironment {
        &self.env
    }

    /// Full argument vector after the program: script, separator, forwarded args.
    pub fn argv(&self) -> Vec<&OsStr> {
        let mut argv = Vec::with_capacity(self.args.len() + 2);
        argv.push(self.script.as_os_str());
        argv.push(OsStr::new(SEPARATOR));
        argv.extend(self.args.iter().map(OsString::as_os_str));
        argv
    }

    /// Build a [`Command`] ready to be spawned, with the child environment applied.
    ///
    /// On Windows the forwarded arguments are appended to the command line
    /// verbatim: they already carry their quotes, and the regular argument
    /// escaping would turn each `"` into `\"`. The script path and separator
    /// still go through the regular escaping.
    pub fn to_command(&self) -> Command {
        let mut cmd = Command::new(&self.program);
        cmd.arg(&self.script).arg(SEPARATOR);
        #[cfg(windows)]
        {
            use std::os::windows::process::CommandExt;
            for arg in &self.args {
                cmd.raw_arg(arg);
            }
        }
        #[cfg(not(windows))]
        cmd.args(&self.args);
        self.env.apply(&mut cmd);
        cmd
    }
}

/// Something that can run a [`DerivedCommand`] to completion.
///
/// [`crate::process::ProcessSpawner`] is the real implementation; tests substitute
/// recording fakes.
pub trait Spawner {
    /// Run the command synchronously and report its exit code.
    fn spawn_and_wait(&mut self, command: &DerivedCommand) -> Result<ExitCode, LaunchError>;
}
