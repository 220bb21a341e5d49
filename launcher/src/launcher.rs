use crate::command::{DerivedCommand, ExitCode, Spawner};
use crate::env::{ChildEnvironment, FLAVOR_VAR, HOME_VAR};
use crate::error::LaunchError;
use crate::interpreter::select_interpreter;
use crate::invocation::Invocation;
use crate::process::ProcessSpawner;
use crate::script_path::NamingConvention;
use crate::variant::BuildVariant;
use std::io;
use std::path::PathBuf;

/// Source of the launcher's own executable path.
pub trait SelfLocator {
    fn current_exe(&self) -> io::Result<PathBuf>;
}

/// Asks the platform for the running executable, see [`std::env::current_exe`].
#[derive(Debug, Default, Clone, Copy)]
pub struct CurrentExe;

impl SelfLocator for CurrentExe {
    fn current_exe(&self) -> io::Result<PathBuf> {
        std::env::current_exe()
    }
}

/// A fixed path, used when the launcher location is already known.
#[derive(Debug, Clone)]
pub struct FixedPath(pub PathBuf);

impl SelfLocator for FixedPath {
    fn current_exe(&self) -> io::Result<PathBuf> {
        Ok(self.0.clone())
    }
}

/// Derives the interpreter command from the launcher's location and runs it.
///
/// Example
/// ```no_run
/// use julia_shim::{Invocation, Launcher};
/// let mut launcher: Launcher = Launcher::default();
/// let code = launcher.launch(&Invocation::from_env()).unwrap();
/// std::process::exit(code);
/// ```
pub struct Launcher<L = CurrentExe, S = ProcessSpawner> {
    variant: BuildVariant,
    locator: L,
    spawner: S,
}

impl Default for Launcher {
    /// Launcher for the compiled variant, using the real executable path and
    /// the real process spawner.
    fn default() -> Self {
        Self::new(BuildVariant::current(), CurrentExe, ProcessSpawner)
    }
}

impl<L: SelfLocator, S: Spawner> Launcher<L, S> {
    pub fn new(variant: BuildVariant, locator: L, spawner: S) -> Self {
        Self {
            variant,
            locator,
            spawner,
        }
    }

    pub fn variant(&self) -> BuildVariant {
        self.variant
    }

    pub fn spawner(&self) -> &S {
        &self.spawner
    }

    /// Build the command without running it.
    ///
    /// Fails with [`LaunchError::SelfPath`] when the own path is unavailable and
    /// with [`LaunchError::UnexpectedLauncherName`] when it does not follow the
    /// naming convention for this variant.
    pub fn plan(&self, invocation: &Invocation) -> Result<DerivedCommand, LaunchError> {
        let exe = self.locator.current_exe().map_err(LaunchError::SelfPath)?;
        let script = NamingConvention::for_variant(self.variant).derive(&exe)?;

        let mut env = ChildEnvironment::new();
        env.set_var(FLAVOR_VAR, self.variant.flavor());
        env.set_or_remove(HOME_VAR, invocation.julia_home.clone());

        let program = select_interpreter(invocation.interpreter.as_deref());

        let command = DerivedCommand::new(program, script, &invocation.args, env);
        tracing::debug!(
            launcher = %exe.display(),
            program = ?command.program(),
            argv = ?command.argv(),
            env = ?command.env(),
            "derived interpreter command"
        );
        Ok(command)
    }

    /// Derive the command, run it and return the interpreter's exit code.
    ///
    /// Nothing is spawned when derivation fails.
    pub fn launch(&mut self, invocation: &Invocation) -> Result<ExitCode, LaunchError> {
        let command = self.plan(invocation)?;
        self.spawner.spawn_and_wait(&command)
    }
}
