//! The `#circuit=` fragment encoder.
//!
//! Circuit text is shortened and made URL-friendly in a fixed sequence of
//! literal substitutions. Percent-encoding is applied only when the compacted
//! text contains a character (`%` or `&`) that would otherwise be misread by
//! the viewer's hash parser, and then it covers the whole body.

use crate::encode::abbrev::abbreviate;
use tracing::trace;

/// Prefix of every encoded fragment.
pub const CIRCUIT_HASH_PREFIX: &str = "#circuit=";

/// Characters whose presence forces percent-encoding of the whole body.
const ENCODE_TRIGGERS: [char; 2] = ['%', '&'];

/// Encodes circuit text into a `#circuit=...` URL fragment.
///
/// The output depends only on `text`. Empty input yields `#circuit=`.
///
/// # Examples
///
/// ```
/// use stim_url::encode_circuit_to_hash;
///
/// assert_eq!(
///     encode_circuit_to_hash("QUBIT_COORDS(1, 2) 0"),
///     "#circuit=Q(1,2)_0"
/// );
/// ```
#[must_use]
pub fn encode_circuit_to_hash(text: &str) -> String {
    let compact = compact(text);
    let body = if needs_percent_encoding(&compact) {
        trace!(len = compact.len(), "percent-encoding fragment body");
        urlencoding::encode(&compact).into_owned()
    } else {
        compact
    };
    format!("{CIRCUIT_HASH_PREFIX}{body}")
}

/// Applies the substitution steps without the prefix or percent-encoding.
///
/// Abbreviates instruction names, drops the space after commas, turns the
/// remaining spaces into `_` and every line break (`\r\n`, `\r` or `\n`)
/// into `;`.
#[must_use]
pub fn compact(text: &str) -> String {
    let s = abbreviate(text).replace(", ", ",").replace(' ', "_");
    normalize_newlines(&s).replace('\n', ";")
}

/// Converts `\r\n` and lone `\r` line endings to `\n`.
#[must_use]
pub fn normalize_newlines(text: &str) -> String {
    text.replace("\r\n", "\n").replace('\r', "\n")
}

/// Returns true if the body must be percent-encoded.
#[must_use]
pub fn needs_percent_encoding(body: &str) -> bool {
    body.contains(ENCODE_TRIGGERS)
}
