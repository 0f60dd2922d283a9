//! Constructors that attach field or flag context to lower-level errors.

use super::{BindError, ConversionError, TagError};
use crate::convert::FlagKind;

impl BindError {
    /// Wraps a [`TagError`] raised for `field`.
    ///
    /// # Examples
    ///
    /// ```
    /// use flagbind::{BindError, TagError};
    /// let err = BindError::tag("server.port", TagError::Syntax { quote: '"' });
    /// assert!(matches!(err, BindError::Tag { .. }));
    /// ```
    #[must_use]
    pub fn tag(field: impl Into<String>, source: TagError) -> Self {
        Self::Tag {
            field: field.into(),
            source,
        }
    }

    /// Wraps a [`ConversionError`] raised for the default of `flag`.
    #[must_use]
    pub fn conversion(flag: impl Into<String>, source: ConversionError) -> Self {
        Self::TypeConversion {
            flag: flag.into(),
            source: Box::new(source),
        }
    }

    /// Reports a lookup failure for `flag` against parsed arguments.
    #[must_use]
    pub fn matches(flag: impl Into<String>, message: impl ToString) -> Self {
        Self::Matches {
            flag: flag.into(),
            message: message.to_string(),
        }
    }
}

impl ConversionError {
    /// Builds a conversion error for `input` that failed to become `kind`.
    ///
    /// # Examples
    ///
    /// ```
    /// use flagbind::{ConversionError, FlagKind, ScalarKind};
    /// let err = ConversionError::new(FlagKind::Scalar(ScalarKind::Bool), "maybe", "invalid syntax");
    /// assert_eq!(err.input, "maybe");
    /// ```
    #[must_use]
    pub fn new(kind: FlagKind, input: impl Into<String>, message: impl ToString) -> Self {
        Self {
            kind,
            input: input.into(),
            message: message.to_string(),
        }
    }
}
