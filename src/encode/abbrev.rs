//! Instruction-name abbreviations.
//!
//! The browser viewer expands these short forms back to their full Stim
//! instruction names, so the table must stay in sync with it.

/// Long instruction names and their URL short forms, applied in order.
pub const ABBREVIATIONS: &[(&str, &str)] = &[
    ("QUBIT_COORDS", "Q"),
    ("DETECTOR", "DT"),
    ("OBSERVABLE_INCLUDE", "OI"),
];

/// Replaces every occurrence of each long instruction name with its short form.
///
/// Matching is literal and case-sensitive. No short form contains another
/// table entry, so one substitution can never create a match for a later one.
///
/// # Examples
///
/// ```
/// use stim_url::encode::abbreviate;
///
/// assert_eq!(abbreviate("DETECTOR rec[-1]"), "DT rec[-1]");
/// ```
#[must_use]
pub fn abbreviate(text: &str) -> String {
    ABBREVIATIONS
        .iter()
        .fold(text.to_string(), |acc, &(long, short)| acc.replace(long, short))
}
