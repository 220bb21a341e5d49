use std::ffi::{OsStr, OsString};

/// Interpreter used when `PYCALL_PYTHON_EXE` is not set.
pub const DEFAULT_INTERPRETER: &str = "python";

/// Pick the interpreter binary: the override when present, `python` otherwise.
///
/// The name is returned as given. Bare names are left to the platform's own
/// executable search at spawn time, which skips entries it cannot execute.
pub fn select_interpreter(override_exe: Option<&OsStr>) -> OsString {
    let name = override_exe
        .filter(|exe| !exe.is_empty())
        .unwrap_or(OsStr::new(DEFAULT_INTERPRETER));
    tracing::debug!(interpreter = ?name, from_env = override_exe.is_some(), "selected interpreter");
    name.to_owned()
}
