mod cli;
mod logging;
mod render;

use clap::Parser;
use cli::Cli;
use madlib_core::error::EXIT_IO_FAILURE;

fn main() {
    let cli = Cli::parse();

    if let Err(e) = logging::init(cli.verbose) {
        eprintln!("Error: {}", e);
        std::process::exit(EXIT_IO_FAILURE);
    }

    // The exit status is the only report of a failed run.
    if let Err(e) = render::run_stdio() {
        tracing::debug!("Exiting with status {}: {}", e.exit_code(), e);
        std::process::exit(e.exit_code());
    }
}
