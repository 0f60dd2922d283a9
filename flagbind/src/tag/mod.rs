//! Parsing of `#[flag("...")]` tag strings.
//!
//! A tag is a `;`-separated list of segments. Each segment is either keyed
//! (`name:port`) or positional (`port`); positional segments fill the keys
//! that were not named explicitly, in the order defined by the [`Flavor`].
//! Single or double quotes protect a `;` inside a value:
//!
//! ```rust
//! use flagbind::tag::{parse, Flavor};
//!
//! let tag = parse("name:foo;shorthand:f;value:'a;b';usage:'help text'", Flavor::Posix)?;
//! assert_eq!(tag.name, "foo");
//! assert_eq!(tag.shorthand, "f");
//! assert_eq!(tag.value, "a;b");
//! assert_eq!(tag.usage, "help text");
//! # Ok::<(), flagbind::TagError>(())
//! ```

mod resolve;
mod scan;

pub use resolve::resolve;
pub use scan::tokenize;

use crate::TagError;

/// Delimiter separating tag segments.
pub const DELIMITER: char = ';';

/// Keys recognised inside a tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TagKey {
    /// Flag name, without any group prefix.
    Name,
    /// Single-character alias.
    Shorthand,
    /// Default value in its textual form.
    Value,
    /// Help text.
    Usage,
}

impl TagKey {
    /// Parses a key case-insensitively, ignoring surrounding whitespace.
    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim().to_lowercase().as_str() {
            "name" => Some(Self::Name),
            "shorthand" => Some(Self::Shorthand),
            "value" => Some(Self::Value),
            "usage" => Some(Self::Usage),
            _ => None,
        }
    }

    /// Canonical lower-case spelling of the key.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Shorthand => "shorthand",
            Self::Value => "value",
            Self::Usage => "usage",
        }
    }
}

/// Flag-set flavour a tag is written for.
///
/// The flavour fixes which keys a tag may use and the order positional
/// segments are assigned in.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Flavor {
    /// Long flags only: `name;value;usage`.
    Simple,
    /// POSIX-style flags with a shorthand: `name;shorthand;value;usage`.
    #[default]
    Posix,
}

impl Flavor {
    const SIMPLE_KEYS: [TagKey; 3] = [TagKey::Name, TagKey::Value, TagKey::Usage];
    const POSIX_KEYS: [TagKey; 4] = [
        TagKey::Name,
        TagKey::Shorthand,
        TagKey::Value,
        TagKey::Usage,
    ];

    /// Keys accepted by this flavour in positional order.
    #[must_use]
    pub const fn keys(self) -> &'static [TagKey] {
        match self {
            Self::Simple => &Self::SIMPLE_KEYS,
            Self::Posix => &Self::POSIX_KEYS,
        }
    }

    /// Whether flags of this flavour may carry a shorthand.
    #[must_use]
    pub const fn has_shorthand(self) -> bool {
        matches!(self, Self::Posix)
    }
}

/// Attribute record resolved from a tag.
///
/// Unset attributes are empty strings. `shorthand` is always empty for
/// [`Flavor::Simple`] tags.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FlagTag {
    /// Flag name before group prefixing.
    pub name: String,
    /// Shorthand alias; empty or `-` when the flag has none.
    pub shorthand: String,
    /// Default value in textual form.
    pub value: String,
    /// Help text.
    pub usage: String,
}

impl FlagTag {
    /// Creates a record carrying only a name.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use flagbind::FlagTag;
    ///
    /// let tag = FlagTag::new("desc").with_shorthand("d").with_usage("student description");
    /// assert_eq!(tag.shorthand, "d");
    /// assert!(tag.value.is_empty());
    /// ```
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// Sets the shorthand alias.
    #[must_use]
    pub fn with_shorthand(mut self, shorthand: impl Into<String>) -> Self {
        self.shorthand = shorthand.into();
        self
    }

    /// Sets the default value.
    #[must_use]
    pub fn with_value(mut self, value: impl Into<String>) -> Self {
        self.value = value.into();
        self
    }

    /// Sets the help text.
    #[must_use]
    pub fn with_usage(mut self, usage: impl Into<String>) -> Self {
        self.usage = usage.into();
        self
    }

    /// Shorthand as a single character.
    ///
    /// Empty text and `-` mean the flag has no shorthand.
    ///
    /// # Errors
    ///
    /// Returns the shorthand text when it is longer than one character.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use flagbind::FlagTag;
    ///
    /// assert_eq!(FlagTag::new("v").with_shorthand("v").shorthand_char(), Ok(Some('v')));
    /// assert_eq!(FlagTag::new("v").with_shorthand("-").shorthand_char(), Ok(None));
    /// assert_eq!(FlagTag::new("v").with_shorthand("vv").shorthand_char(), Err("vv"));
    /// ```
    pub fn shorthand_char(&self) -> Result<Option<char>, &str> {
        let raw = self.shorthand.as_str();
        if raw.is_empty() || raw == "-" {
            return Ok(None);
        }
        let mut chars = raw.chars();
        match (chars.next(), chars.next()) {
            (Some(short), None) => Ok(Some(short)),
            _ => Err(raw),
        }
    }
}

/// Tokenizes `input` on [`DELIMITER`] and resolves it for `flavor`.
///
/// # Errors
///
/// Returns [`TagError::Syntax`] for an unterminated quote and
/// [`TagError::InvalidKey`] for a key the flavour does not accept.
pub fn parse(input: &str, flavor: Flavor) -> Result<FlagTag, TagError> {
    let tokens = tokenize(input, DELIMITER)?;
    resolve(&tokens, flavor.keys())
}
