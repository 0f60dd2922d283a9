//! Error types produced while parsing tags and binding flags.

mod constructors;
mod conversions;
mod helpers;
mod types;

pub use helpers::is_display_request;
pub use types::{BindError, BindResult, ConversionError, TagError};
