//! I/O utilities for stim-url.
//!
//! Reads circuit text from a file (memory mapped when large) or from
//! standard input.

pub mod reader;

pub use reader::{FileReader, STDIN_LABEL, read_file, read_to_string_from};
