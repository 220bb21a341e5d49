//! Mapping from the launcher's own executable path to its companion script.
//!
//! The shim is installed next to a script sharing its name: `julia.exe` runs
//! `julia.py`, `julia-debug.exe` runs `julia-py`. The rule is expressed as a
//! [`NamingConvention`]: strip a declared suffix from the file name and append a
//! marker. Paths that do not carry the suffix are rejected instead of being cut
//! at a fixed offset.

use crate::error::LaunchError;
use crate::variant::BuildVariant;
use std::path::{Path, PathBuf};

/// Marker appended in place of the launcher suffix.
pub const SCRIPT_MARKER: &str = "py";

/// Declared suffix/marker pair used to derive the script path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NamingConvention {
    /// Trailing part of the launcher file name that gets replaced.
    pub launcher_suffix: &'static str,
    /// Text appended after the suffix is removed.
    pub script_marker: &'static str,
}

impl NamingConvention {
    pub const RELEASE: NamingConvention = NamingConvention {
        launcher_suffix: "exe",
        script_marker: SCRIPT_MARKER,
    };

    pub const DEBUG: NamingConvention = NamingConvention {
        launcher_suffix: "debug.exe",
        script_marker: SCRIPT_MARKER,
    };

    pub fn for_variant(variant: BuildVariant) -> Self {
        match variant {
            BuildVariant::Debug => Self::DEBUG,
            BuildVariant::Release => Self::RELEASE,
        }
    }

    /// Derive the companion script path for `launcher`.
    ///
    /// Only the file name is rewritten, the parent directory is kept as is.
    /// The suffix is matched ignoring ASCII case since Windows file names are
    /// case-insensitive. A file name that consists of nothing but the suffix is
    /// rejected as well.
    pub fn derive(&self, launcher: &Path) -> Result<PathBuf, LaunchError> {
        let unexpected = || LaunchError::UnexpectedLauncherName {
            path: launcher.to_path_buf(),
            suffix: self.launcher_suffix,
        };

        let file_name = launcher
            .file_name()
            .and_then(|name| name.to_str())
            .ok_or_else(unexpected)?;

        let suffix_len = self.launcher_suffix.len();
        if file_name.len() <= suffix_len {
            return Err(unexpected());
        }
        let split = file_name.len() - suffix_len;
        if !file_name.is_char_boundary(split)
            || !file_name[split..].eq_ignore_ascii_case(self.launcher_suffix)
        {
            return Err(unexpected());
        }

        let script_name = format!("{}{}", &file_name[..split], self.script_marker);
        Ok(launcher.with_file_name(script_name))
    }
}

/// Derive the script path for `launcher` using the convention of `variant`.
pub fn derive_script_path(launcher: &Path, variant: BuildVariant) -> Result<PathBuf, LaunchError> {
    NamingConvention::for_variant(variant).derive(launcher)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_release_replaces_three_char_suffix() {
        let launcher = Path::new("/opt/pyjulia/fake-julia/julia.exe");
        let script = derive_script_path(launcher, BuildVariant::Release).unwrap();
        assert_eq!(script, Path::new("/opt/pyjulia/fake-julia/julia.py"));
    }

    #[test]
    fn test_debug_replaces_nine_char_suffix() {
        let launcher = Path::new("/opt/pyjulia/fake-julia/julia-debug.exe");
        let script = derive_script_path(launcher, BuildVariant::Debug).unwrap();
        assert_eq!(script, Path::new("/opt/pyjulia/fake-julia/julia-py"));
    }

    #[test]
    fn test_suffix_match_ignores_ascii_case() {
        let launcher = Path::new("JULIA.EXE");
        let script = derive_script_path(launcher, BuildVariant::Release).unwrap();
        assert_eq!(script, Path::new("JULIA.py"));
    }

    #[test]
    fn test_derivation_is_idempotent() {
        let launcher = Path::new("/tmp/shim/julia.exe");
        let first = derive_script_path(launcher, BuildVariant::Release).unwrap();
        let second = derive_script_path(launcher, BuildVariant::Release).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_relative_path_keeps_parent() {
        let launcher = Path::new("bin/julia.exe");
        let script = derive_script_path(launcher, BuildVariant::Release).unwrap();
        assert_eq!(script, Path::new("bin/julia.py"));
    }

    #[test]
    fn test_missing_suffix_is_rejected() {
        let launcher = Path::new("/usr/local/bin/julia");
        let err = derive_script_path(launcher, BuildVariant::Release).unwrap_err();
        match err {
            LaunchError::UnexpectedLauncherName { path, suffix } => {
                assert_eq!(path, launcher);
                assert_eq!(suffix, "exe");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_release_name_is_not_a_debug_name() {
        let launcher = Path::new("C:/julia/julia.exe");
        assert!(derive_script_path(launcher, BuildVariant::Debug).is_err());
    }

    #[test]
    fn test_bare_suffix_is_rejected() {
        assert!(derive_script_path(Path::new("/bin/exe"), BuildVariant::Release).is_err());
        assert!(derive_script_path(Path::new("/"), BuildVariant::Release).is_err());
    }
}
