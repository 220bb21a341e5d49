use std::collections::BTreeMap;
use std::ffi::{OsStr, OsString};
use std::process::Command;

/// Flavor marker read by the companion script to pick `libjulia` or `libjulia-debug`.
pub const FLAVOR_VAR: &str = "PYCALL_JULIA_FLAVOR";
/// Julia home directory as seen by the child.
pub const HOME_VAR: &str = "JULIA_HOME";
/// Parent variable that supplies [`HOME_VAR`].
pub const HOME_SOURCE_VAR: &str = "PYCALL_JULIA_HOME";
/// Parent variable overriding the interpreter binary.
pub const INTERPRETER_VAR: &str = "PYCALL_PYTHON_EXE";

/// Environment changes applied to the child process only.
///
/// The launcher never touches its own process environment. Instead, every
/// change is recorded here and replayed onto a [`Command`] right before spawning.
/// A variable is either set to a value or removed; the last change wins.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ChildEnvironment {
    vars: BTreeMap<OsString, Option<OsString>>,
}

impl ChildEnvironment {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set or override a variable for the child.
    pub fn set_var(&mut self, key: impl Into<OsString>, val: impl Into<OsString>) {
        self.vars.insert(key.into(), Some(val.into()));
    }

    /// Make sure the child does not inherit `key`.
    pub fn remove_var(&mut self, key: impl Into<OsString>) {
        self.vars.insert(key.into(), None);
    }

    /// Set `key` when `val` is present, remove it otherwise.
    pub fn set_or_remove(&mut self, key: impl Into<OsString>, val: Option<impl Into<OsString>>) {
        match val {
            Some(val) => self.set_var(key, val),
            None => self.remove_var(key),
        }
    }

    /// Look up the recorded change for `key`.
    ///
    /// Returns `None` when nothing was recorded, `Some(None)` when the variable is
    /// removed for the child.
    pub fn get_var(&self, key: impl AsRef<OsStr>) -> Option<Option<&OsStr>> {
        self.vars.get(key.as_ref()).map(|val| val.as_deref())
    }

    /// Iterate over the recorded changes in key order.
    pub fn iter(&self) -> impl Iterator<Item = (&OsStr, Option<&OsStr>)> {
        self.vars.iter().map(|(k, v)| (k.as_os_str(), v.as_deref()))
    }

    pub fn is_empty(&self) -> bool {
        self.vars.is_empty()
    }

    /// Replay the recorded changes onto `cmd`. Unrelated variables are inherited.
    pub fn apply(&self, cmd: &mut Command) {
        for (key, val) in &self.vars {
            match val {
                Some(val) => cmd.env(key, val),
                None => cmd.env_remove(key),
            };
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_env_set_and_get_var() {
        let mut env = ChildEnvironment::new();

        // initially absent
        assert_eq!(env.get_var("SOME_RANDOM_ENV_VAR_12345"), None);

        env.set_var("KEY", "VALUE");

        assert_eq!(env.get_var("KEY"), Some(Some(OsStr::new("VALUE"))));
    }

    #[test]
    fn test_set_or_remove() {
        let mut env = ChildEnvironment::new();
        env.set_or_remove(HOME_VAR, Some("/opt/julia/bin"));
        assert_eq!(env.get_var(HOME_VAR), Some(Some(OsStr::new("/opt/julia/bin"))));

        env.set_or_remove(HOME_VAR, None::<OsString>);
        assert_eq!(env.get_var(HOME_VAR), Some(None));
    }

    #[test]
    fn test_apply_records_changes_on_command() {
        let mut env = ChildEnvironment::new();
        env.set_var(FLAVOR_VAR, "julia");
        env.remove_var(HOME_VAR);

        let mut cmd = Command::new("python");
        env.apply(&mut cmd);

        let applied: BTreeMap<&OsStr, Option<&OsStr>> = cmd.get_envs().collect();
        assert_eq!(applied.len(), 2);
        assert_eq!(applied[OsStr::new(HOME_VAR)], None);
        assert_eq!(applied[OsStr::new(FLAVOR_VAR)], Some(OsStr::new("julia")));
    }

    #[test]
    fn test_does_not_touch_process_environment() {
        let mut env = ChildEnvironment::new();
        env.set_var("JULIA_SHIM_TEST_UNSET_VAR", "1");
        assert!(std::env::var_os("JULIA_SHIM_TEST_UNSET_VAR").is_none());
    }
}
