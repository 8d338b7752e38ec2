//! Command-line argument parsing.
//!
//! Defines the CLI structure using clap derive macros.

use clap::Parser;
use std::path::PathBuf;

/// stim-url: encode Stim circuit text into a `#circuit=` URL fragment.
///
/// Reads circuit text from a file or standard input and prints either the
/// fragment alone or a full URL for a browser-based circuit viewer.
#[derive(Parser, Debug, Default)]
#[command(name = "stim-url")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Path to a .stim file. Reads standard input if omitted.
    #[arg(short, long)]
    pub input: Option<PathBuf>,

    /// Base URL (e.g. <https://host/index.html>). When set, prints the full URL.
    #[arg(long, env = "STIM_URL_BASE")]
    pub base: Option<String>,

    /// Print only the `#circuit=...` fragment, even if a base URL is set.
    #[arg(long)]
    pub hash_only: bool,

    /// Print the full URL (falls back to the fragment without a base URL).
    #[arg(long)]
    pub url: bool,

    /// Enable debug logging on stderr.
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    /// Returns the base URL, or an empty string if none was given.
    #[must_use]
    pub fn base_url(&self) -> &str {
        self.base.as_deref().unwrap_or_default()
    }
}
