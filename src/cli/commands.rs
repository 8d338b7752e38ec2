//! CLI command implementation.
//!
//! Reads circuit text, encodes it and renders the output line.

use crate::cli::output::{OutputMode, render};
use crate::cli::parser::Cli;
use crate::encode::encode_circuit_to_hash;
use crate::error::Result;
use crate::io::{STDIN_LABEL, read_file, read_to_string_from};
use std::io::{self, Read};
use tracing::debug;

/// Executes the CLI command, reading standard input when no file is given.
///
/// # Returns
///
/// The complete output line, including the trailing newline.
///
/// # Errors
///
/// Returns an error if the input cannot be read.
pub fn execute(cli: &Cli) -> Result<String> {
    execute_with_stdin(cli, io::stdin().lock())
}

/// Executes the CLI command with `stdin` standing in for standard input.
///
/// # Errors
///
/// Returns an error if the input cannot be read.
pub fn execute_with_stdin<R: Read>(cli: &Cli, stdin: R) -> Result<String> {
    let text = match &cli.input {
        Some(path) => read_file(path)?,
        None => read_to_string_from(stdin, STDIN_LABEL)?,
    };

    let fragment = encode_circuit_to_hash(&text);
    debug!(
        input_len = text.len(),
        fragment_len = fragment.len(),
        "encoded circuit"
    );

    let base = cli.base_url();
    let mode = OutputMode::resolve(base, cli.hash_only, cli.url);
    Ok(render(mode, base, &fragment))
}
