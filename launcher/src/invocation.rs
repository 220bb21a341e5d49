use crate::env::{HOME_SOURCE_VAR, INTERPRETER_VAR};
use std::env as stdenv;
use std::ffi::OsString;

/// Everything the launcher reads from its parent: forwarded arguments and the
/// two optional environment overrides.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Invocation {
    /// Arguments after the program name, in order.
    pub args: Vec<OsString>,
    /// Value of `PYCALL_JULIA_HOME`, copied verbatim into the child's `JULIA_HOME`.
    pub julia_home: Option<OsString>,
    /// Value of `PYCALL_PYTHON_EXE`, the interpreter binary override.
    pub interpreter: Option<OsString>,
}

impl Invocation {
    /// Capture the current process's arguments and environment overrides.
    pub fn from_env() -> Self {
        Self::from_parts(stdenv::args_os().skip(1), |key| stdenv::var_os(key))
    }

    /// Build an invocation from explicit arguments and a variable lookup.
    pub fn from_parts<I, F>(args: I, lookup: F) -> Self
    where
        I: IntoIterator,
        I::Item: Into<OsString>,
        F: Fn(&str) -> Option<OsString>,
    {
        Self {
            args: args.into_iter().map(Into::into).collect(),
            julia_home: lookup(HOME_SOURCE_VAR),
            interpreter: lookup(INTERPRETER_VAR),
        }
    }
}
