//! # stim-url
//!
//! Encode Stim circuit text into a compact `#circuit=` URL fragment.
//!
//! The fragment format is the one browser-based circuit viewers read from
//! `location.hash`: common instruction names are abbreviated, spaces and
//! newlines are replaced with URL-friendly separators, and percent-encoding
//! is applied only when the text would otherwise be ambiguous.
//!
//! ## Example
//!
//! ```
//! use stim_url::encode_circuit_to_hash;
//!
//! let hash = encode_circuit_to_hash("DETECTOR(0) rec[-1]\nOBSERVABLE_INCLUDE(0) rec[-1]");
//! assert_eq!(hash, "#circuit=DT(0)_rec[-1];OI(0)_rec[-1]");
//! ```

#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![warn(missing_docs)]
// Note: unsafe is needed for memory-mapped I/O (memmap2)
#![warn(unsafe_code)]

pub mod cli;
pub mod encode;
pub mod error;
pub mod io;

// Re-export commonly used types at crate root
pub use error::{Error, Result};

pub use encode::{CIRCUIT_HASH_PREFIX, encode_circuit_to_hash};

pub use cli::{Cli, OutputMode, execute, join_base_url};
