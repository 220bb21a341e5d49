use anyhow::{Context, Result};
use argh::FromArgs;
use julia_shim::command::DerivedCommand;
use julia_shim::{BuildVariant, CurrentExe, FixedPath, Invocation, Launcher, SelfLocator};
use std::ffi::OsString;
use std::io::{self, Write};
use std::path::PathBuf;

#[derive(FromArgs)]
/// Print the interpreter command the julia shim would run, without running it.
struct Inspect {
    #[argh(option)]
    /// launcher path to derive from; defaults to this executable.
    exe: Option<PathBuf>,

    #[argh(option)]
    /// build variant, `debug` or `release`; defaults to the compiled one.
    variant: Option<BuildVariant>,

    #[argh(positional, greedy)]
    /// arguments to forward, as the shim would receive them.
    args: Vec<String>,
}

fn main() -> Result<()> {
    julia_shim::init_logging();
    let opts: Inspect = argh::from_env();

    let exe = match opts.exe {
        Some(exe) => exe,
        None => CurrentExe.current_exe().context("cannot determine own executable path")?,
    };
    let variant = opts.variant.unwrap_or_default();

    let mut invocation = Invocation::from_env();
    invocation.args = opts.args.into_iter().map(OsString::from).collect();

    let launcher = Launcher::new(variant, FixedPath(exe), julia_shim::process::ProcessSpawner);
    let command = launcher
        .plan(&invocation)
        .with_context(|| format!("cannot derive the {variant} interpreter command"))?;

    render(&command, &mut io::stdout().lock())?;
    Ok(())
}

fn render(command: &DerivedCommand, out: &mut dyn Write) -> io::Result<()> {
    writeln!(out, "program: {}", command.program().to_string_lossy())?;
    writeln!(out, "argv:")?;
    for arg in command.argv() {
        writeln!(out, "  {}", arg.to_string_lossy())?;
    }
    writeln!(out, "env:")?;
    for (key, val) in command.env().iter() {
        match val {
            Some(val) => writeln!(out, "  {}={}", key.to_string_lossy(), val.to_string_lossy())?,
            None => writeln!(out, "  {} (unset)", key.to_string_lossy())?,
        }
    }
    Ok(())
}
