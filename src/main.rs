//! Binary entry point for stim-url.

#![allow(clippy::print_stderr)]

use clap::Parser;
use std::io;
use std::process::ExitCode;
use stim_url::cli::{Cli, execute, write_output};
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    // Broken pipes (e.g. piping into `head`) are handled in write_output
    match execute(&cli).and_then(|output| write_output(io::stdout().lock(), &output)) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

/// Installs a stderr log subscriber; stdout carries only the result.
fn init_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}
