//! Output mode selection and rendering.
//!
//! Decides between printing the bare fragment and a full URL, joins the
//! fragment onto the base URL, and writes the final line.

use crate::error::{CommandError, Result};
use std::io::{self, Write};
use tracing::debug;

/// What the command prints.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputMode {
    /// Just the `#circuit=...` fragment.
    Fragment,
    /// The base URL followed by the fragment.
    FullUrl,
}

impl OutputMode {
    /// Resolves the output mode from the base URL and mode flags.
    ///
    /// Without explicit flags the mode is [`Self::FullUrl`] exactly when
    /// `base` is non-empty. `url` takes precedence over `hash_only` when both
    /// are set. A full URL without a base degrades to [`Self::Fragment`].
    #[must_use]
    pub const fn resolve(base: &str, hash_only: bool, url: bool) -> Self {
        let want_url = if hash_only || url { url } else { !base.is_empty() };
        if want_url && !base.is_empty() {
            Self::FullUrl
        } else {
            Self::Fragment
        }
    }
}

/// Appends `fragment` to `base`, discarding any fragment `base` already has.
///
/// # Examples
///
/// ```
/// use stim_url::cli::output::join_base_url;
///
/// assert_eq!(
///     join_base_url("https://h/x#old", "#circuit=Q"),
///     "https://h/x#circuit=Q"
/// );
/// ```
#[must_use]
pub fn join_base_url(base: &str, fragment: &str) -> String {
    let base = base.split_once('#').map_or(base, |(head, _)| head);
    format!("{base}{fragment}")
}

/// Renders the output line, including the trailing newline.
#[must_use]
pub fn render(mode: OutputMode, base: &str, fragment: &str) -> String {
    debug!(?mode, "rendering output");
    match mode {
        OutputMode::Fragment => format!("{fragment}\n"),
        OutputMode::FullUrl => format!("{}\n", join_base_url(base, fragment)),
    }
}

/// Writes `output` and flushes.
///
/// A reader that closes the pipe early (e.g. `head`) is not an error.
///
/// # Errors
///
/// Returns [`CommandError::OutputFailed`] for any other write failure.
pub fn write_output<W: Write>(mut writer: W, output: &str) -> Result<()> {
    match writer
        .write_all(output.as_bytes())
        .and_then(|()| writer.flush())
    {
        Ok(()) => Ok(()),
        Err(e) if e.kind() == io::ErrorKind::BrokenPipe => {
            debug!("stdout closed early");
            Ok(())
        }
        Err(e) => Err(CommandError::OutputFailed(e.to_string()).into()),
    }
}
