use std::fmt;
use std::str::FromStr;

/// Which build of the Julia runtime the child process should load.
///
/// The variant is fixed at compile time through the `debug-flavor` cargo feature,
/// see [`BuildVariant::current`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BuildVariant {
    /// Shim installed as `julia-debug.exe`, selects `libjulia-debug`.
    Debug,
    /// Shim installed as `julia.exe`, selects `libjulia`.
    Release,
}

impl BuildVariant {
    /// The variant this binary was compiled for.
    pub const fn current() -> Self {
        if cfg!(feature = "debug-flavor") {
            BuildVariant::Debug
        } else {
            BuildVariant::Release
        }
    }

    /// Value exported to the child as `PYCALL_JULIA_FLAVOR`.
    pub fn flavor(self) -> &'static str {
        match self {
            BuildVariant::Debug => "julia-debug",
            BuildVariant::Release => "julia",
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            BuildVariant::Debug => "debug",
            BuildVariant::Release => "release",
        }
    }
}

impl Default for BuildVariant {
    fn default() -> Self {
        Self::current()
    }
}

impl fmt::Display for BuildVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for BuildVariant {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "debug" => Ok(BuildVariant::Debug),
            "release" => Ok(BuildVariant::Release),
            other => Err(format!(
                "unknown build variant `{other}`, expected `debug` or `release`"
            )),
        }
    }
}
