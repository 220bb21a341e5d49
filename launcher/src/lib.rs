//! A tiny launcher shim that stands in for a `julia` executable.
//!
//! When installed as `julia.exe` (or `julia-debug.exe` for the debug flavor), the
//! shim finds its companion script next to itself, re-quotes the arguments it was
//! started with and runs the Python interpreter as
//! `python <script> -- "<arg1>" "<arg2>" ...`, exiting with the interpreter's
//! exit code. The child additionally receives `PYCALL_JULIA_FLAVOR` and a copy of
//! `PYCALL_JULIA_HOME` as `JULIA_HOME`.
//!
//! The main entry point is [`Launcher`]. It sits on two seams, [`SelfLocator`]
//! for the launcher's own path and [`command::Spawner`] for running the child, so
//! the whole derivation can be exercised without spawning anything. The public
//! modules expose the individual steps: [`script_path`] for the naming
//! convention, [`quoting`] for argument re-quoting and [`env`] for the explicit
//! child environment.

pub mod command;
pub mod env;
mod error;
pub mod interpreter;
mod invocation;
mod launcher;
pub mod process;
pub mod quoting;
pub mod script_path;
mod variant;

pub use error::LaunchError;
pub use invocation::Invocation;
pub use launcher::{CurrentExe, FixedPath, Launcher, SelfLocator};
pub use variant::BuildVariant;

use std::io::IsTerminal;

/// Install a stderr logger filtered by `PYCALL_SHIM_LOG`.
///
/// Without the variable only errors are printed, so the shim stays out of the
/// interpreter's output.
pub fn init_logging() {
    let filter = tracing_subscriber::EnvFilter::from_env("PYCALL_SHIM_LOG");
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(std::io::stderr().is_terminal())
        .with_target(false)
        .try_init();
}
