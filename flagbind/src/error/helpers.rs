//! Helpers for classifying binding errors.

use clap::{Error as ClapError, error::ErrorKind};

use super::BindError;

/// Returns `true` when a [`clap::Error`] corresponds to `--help` or
/// `--version`.
///
/// Clap surfaces these requests as errors, so callers of
/// [`crate::parse_from`] can delegate to [`clap::Error::exit`] and keep the
/// zero exit status.
#[must_use]
pub fn is_display_request(err: &ClapError) -> bool {
    matches!(
        err.kind(),
        ErrorKind::DisplayHelp | ErrorKind::DisplayVersion
    )
}

impl BindError {
    /// Returns `true` when the error wraps a `--help` or `--version` request.
    #[must_use]
    pub fn is_display_request(&self) -> bool {
        match self {
            Self::Cli(err) => is_display_request(err),
            _ => false,
        }
    }
}
