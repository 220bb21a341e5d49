use julia_shim::process::SPAWN_FAILED;
use julia_shim::{Invocation, Launcher};
use std::process;

fn main() {
    julia_shim::init_logging();

    let mut launcher: Launcher = Launcher::default();
    match launcher.launch(&Invocation::from_env()) {
        Ok(code) => process::exit(code),
        Err(err) if err.is_fatal() => {
            tracing::error!("{err}");
            process::abort();
        }
        Err(err) => {
            tracing::error!("{err}");
            process::exit(SPAWN_FAILED);
        }
    }
}
