//! Desktop entry point.

use std::path::PathBuf;
use std::process::ExitCode;

use simview::{Options, Viewer};

fn main() -> ExitCode {
    env_logger::init();

    let mut builder = Viewer::builder().with_title("simview");

    if let Some(path) = std::env::args().nth(1).map(PathBuf::from) {
        match Options::load(&path) {
            Ok(options) => builder = builder.with_options(options),
            Err(e) => {
                log::error!("failed to load options from {}: {e}", path.display());
                return ExitCode::FAILURE;
            }
        }
    }

    if let Err(e) = builder.build().run() {
        log::error!("viewer exited with error: {e}");
        return ExitCode::FAILURE;
    }
    ExitCode::SUCCESS
}
