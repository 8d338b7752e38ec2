//! CLI layer for stim-url.
//!
//! Provides the command-line interface using clap: argument parsing, the
//! read/encode flow, and output rendering.

pub mod commands;
pub mod output;
pub mod parser;

pub use commands::{execute, execute_with_stdin};
pub use output::{OutputMode, join_base_url, render, write_output};
pub use parser::Cli;
