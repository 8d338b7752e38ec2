//! Circuit text to URL fragment encoding.
//!
//! This is a lexical transform only. Circuit text is never parsed or
//! validated, so any string is valid input.

pub mod abbrev;
pub mod hash;

pub use abbrev::{ABBREVIATIONS, abbreviate};
pub use hash::{
    CIRCUIT_HASH_PREFIX, compact, encode_circuit_to_hash, needs_percent_encoding,
    normalize_newlines,
};
