//! Error enums raised while parsing tags and binding flags.

use thiserror::Error;

use crate::convert::FlagKind;

/// Errors raised while scanning or resolving a tag string.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum TagError {
    /// A quoted span was still open at the end of the tag.
    #[error("syntax error: closing character {quote} could not be found")]
    Syntax {
        /// Quote character that was never closed.
        quote: char,
    },

    /// A keyed segment used a key the flavour does not recognise.
    #[error("invalid flag key: {key}")]
    InvalidKey {
        /// Key text as written before the `:`.
        key: String,
    },
}

/// A textual value could not be converted into a flag type.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("cannot parse {input:?} as {kind}: {message}")]
pub struct ConversionError {
    /// Kind the value was meant to become.
    pub kind: FlagKind,
    /// Offending input.
    pub input: String,
    /// Description from the underlying parser.
    pub message: String,
}

/// Errors that abort a binding pass.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum BindError {
    /// The tag on a field is malformed.
    #[error("invalid tag on field '{field}': {source}")]
    Tag {
        /// Field path carrying the tag.
        field: String,
        /// Underlying tag error.
        #[source]
        source: TagError,
    },

    /// A value field resolved to an empty flag name.
    #[error("flag for field '{field}' is required to have a name")]
    RequiredField {
        /// Field path missing a name.
        field: String,
    },

    /// The default value in a tag does not parse as the field's type.
    #[error("flag '{flag}' has an invalid default value: {source}")]
    TypeConversion {
        /// Fully qualified flag name.
        flag: String,
        /// Underlying conversion failure.
        #[source]
        source: Box<ConversionError>,
    },

    /// The shorthand is not a single character.
    #[error("flag '{flag}' has shorthand {shorthand:?}, which is more than one character")]
    InvalidShorthand {
        /// Fully qualified flag name.
        flag: String,
        /// Offending shorthand text.
        shorthand: String,
    },

    /// A flag with the same name is already registered.
    #[error("flag '{flag}' is already registered")]
    DuplicateFlag {
        /// Fully qualified flag name.
        flag: String,
    },

    /// The shorthand is already used by another flag.
    #[error("shorthand '{shorthand}' of flag '{flag}' is already used by '{existing}'")]
    DuplicateShorthand {
        /// Flag being registered.
        flag: String,
        /// Contested shorthand.
        shorthand: char,
        /// Flag that already owns the shorthand.
        existing: String,
    },

    /// A registered flag could not be read back from parsed arguments.
    #[error("flag '{flag}' could not be read from the parsed arguments: {message}")]
    Matches {
        /// Fully qualified flag name.
        flag: String,
        /// Description of the lookup failure.
        message: String,
    },

    /// Command-line parsing failed.
    #[error("failed to parse command-line arguments: {0}")]
    Cli(#[from] Box<clap::Error>),
}

/// Result alias used throughout the crate.
pub type BindResult<T> = Result<T, BindError>;
