//! Conversions from external error types into `BindError`.

use super::BindError;

impl From<clap::Error> for BindError {
    fn from(e: clap::Error) -> Self {
        Self::Cli(Box::new(e))
    }
}
