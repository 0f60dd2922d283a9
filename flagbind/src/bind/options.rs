//! Options controlling a binding pass.

use crate::tag::Flavor;

/// Settings for a [`Binder`](super::Binder).
///
/// # Examples
///
/// ```rust
/// use flagbind::{BindOptions, Flavor};
///
/// let options = BindOptions::new(Flavor::Simple)
///     .with_separator("-")
///     .with_prefix(["app"]);
/// assert_eq!(options.flavor(), Flavor::Simple);
/// assert_eq!(options.separator(), "-");
/// assert_eq!(options.prefix(), ["app"]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BindOptions {
    flavor: Flavor,
    separator: String,
    prefix: Vec<String>,
}

impl BindOptions {
    /// Default separator between a group and a flag name.
    pub const DEFAULT_SEPARATOR: &'static str = ".";

    /// Creates options for `flavor` with the default separator and no prefix.
    #[must_use]
    pub fn new(flavor: Flavor) -> Self {
        Self {
            flavor,
            separator: String::from(Self::DEFAULT_SEPARATOR),
            prefix: Vec::new(),
        }
    }

    /// Sets the text placed between group names and flag names.
    #[must_use]
    pub fn with_separator(mut self, separator: impl Into<String>) -> Self {
        self.separator = separator.into();
        self
    }

    /// Sets the groups every flag name starts with.
    #[must_use]
    pub fn with_prefix<I, G>(mut self, groups: I) -> Self
    where
        I: IntoIterator<Item = G>,
        G: Into<String>,
    {
        self.prefix = groups.into_iter().map(Into::into).collect();
        self
    }

    /// Flavour used to parse tags.
    #[must_use]
    pub const fn flavor(&self) -> Flavor {
        self.flavor
    }

    /// Returns the group separator.
    #[must_use]
    pub fn separator(&self) -> &str {
        &self.separator
    }

    /// Returns the root groups.
    #[must_use]
    pub fn prefix(&self) -> &[String] {
        &self.prefix
    }
}

impl Default for BindOptions {
    fn default() -> Self {
        Self::new(Flavor::default())
    }
}
