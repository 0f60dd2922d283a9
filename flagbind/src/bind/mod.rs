//! Walking annotated structs and registering their fields as flags.
//!
//! `#[derive(BindFlags)]` generates a [`BindFlags`] impl that hands every
//! annotated field to a [`Binder`] in declaration order. The binder parses
//! the field's tag, composes the group prefix, converts the default and
//! passes the result to a [`FlagSet`].

mod options;

pub use options::BindOptions;

use tracing::{debug, trace};

use crate::convert::FlagValue;
use crate::flagset::{FlagSet, FlagSpec};
use crate::tag::{self, FlagTag, Flavor};
use crate::{BindError, BindResult};

/// A struct whose fields can be bound to flags.
///
/// Implement this with `#[derive(BindFlags)]`:
///
/// ```rust
/// use flagbind::{BindFlags, FlagTable};
///
/// #[derive(BindFlags, Default)]
/// struct Server {
///     #[flag("port;p;8080;port to listen on")]
///     port: u16,
///     #[flag("-")]
///     cache: Vec<u8>,
/// }
///
/// let mut flags = FlagTable::new();
/// let mut server = Server::default();
/// flagbind::bind_pflags(&mut flags, &mut server)?;
/// assert_eq!(server.port, 8080);
/// assert_eq!(flags.len(), 1);
/// # Ok::<(), flagbind::BindError>(())
/// ```
pub trait BindFlags {
    /// Passes every bindable field to `binder`.
    ///
    /// # Errors
    ///
    /// Propagates the first error reported by `binder`.
    fn bind_flags<S: FlagSet>(&mut self, binder: &mut Binder<'_, S>) -> BindResult<()>;
}

/// A value type that supplies its own flag metadata.
///
/// Fields marked `#[flag(describe)]` use the record returned here instead of
/// a tag string.
///
/// ```rust
/// use flagbind::{ConversionError, DescribeFlag, FlagKind, FlagTag, FlagValue, ScalarKind};
///
/// #[derive(Clone, Default)]
/// struct Description(String);
///
/// impl DescribeFlag for Description {
///     fn flag_tag(&self) -> FlagTag {
///         FlagTag::new("desc").with_shorthand("d").with_usage("student description")
///     }
/// }
///
/// impl FlagValue for Description {
///     type Item = String;
///     const KIND: FlagKind = FlagKind::Scalar(ScalarKind::String);
///
///     fn parse_default(raw: &str) -> Result<Self, ConversionError> {
///         Ok(Self(raw.to_owned()))
///     }
///
///     fn from_items(mut items: Vec<String>) -> Option<Self> {
///         items.pop().map(Self)
///     }
/// }
/// ```
pub trait DescribeFlag {
    /// Flag metadata for this value.
    fn flag_tag(&self) -> FlagTag;
}

/// Drives a binding pass over one or more structs.
///
/// The binder tracks the group prefix while recursing into nested structs.
/// It aborts on the first error; flags registered before the error stay
/// registered.
#[derive(Debug)]
pub struct Binder<'a, S: FlagSet> {
    flags: &'a mut S,
    flavor: Flavor,
    separator: String,
    groups: Vec<String>,
    fields: Vec<String>,
}

impl<'a, S: FlagSet> Binder<'a, S> {
    /// Creates a binder registering into `flags`.
    #[must_use]
    pub fn new(flags: &'a mut S, options: &BindOptions) -> Self {
        Self {
            flags,
            flavor: options.flavor(),
            separator: options.separator().to_owned(),
            groups: options.prefix().to_vec(),
            fields: Vec::new(),
        }
    }

    /// Flavour used to parse tags.
    #[must_use]
    pub const fn flavor(&self) -> Flavor {
        self.flavor
    }

    /// Binds every field of `target`.
    ///
    /// # Errors
    ///
    /// Returns the first [`BindError`] raised by any field.
    pub fn bind<T: BindFlags + ?Sized>(&mut self, target: &mut T) -> BindResult<()> {
        target.bind_flags(self)
    }

    /// Binds a value field described by the tag string `tag`.
    ///
    /// `field` names the Rust field and only appears in error messages.
    ///
    /// # Errors
    ///
    /// Returns [`BindError::Tag`] for a malformed tag,
    /// [`BindError::RequiredField`] when the tag has no name,
    /// [`BindError::TypeConversion`] when the default does not parse, and any
    /// error raised by the flag-set.
    pub fn value<T: FlagValue>(&mut self, field: &str, tag: &str, cell: &mut T) -> BindResult<()> {
        let parsed = self.parse_tag(field, tag)?;
        self.register(field, parsed, cell)
    }

    /// Binds a value field whose type describes its own flag.
    ///
    /// The shorthand is dropped for [`Flavor::Simple`].
    ///
    /// # Errors
    ///
    /// As for [`Binder::value`], minus tag parsing.
    pub fn described<T>(&mut self, field: &str, cell: &mut T) -> BindResult<()>
    where
        T: FlagValue + DescribeFlag,
    {
        let mut described = cell.flag_tag();
        if !self.flavor.has_shorthand() {
            described.shorthand.clear();
        }
        self.register(field, described, cell)
    }

    /// Binds the fields of a nested struct.
    ///
    /// The name resolved from `tag` becomes a group prefix for every flag
    /// below it. Without a tag, or with an empty name, the nested fields are
    /// bound at the current level.
    ///
    /// # Errors
    ///
    /// Returns [`BindError::Tag`] for a malformed tag and propagates every
    /// error from the nested fields.
    pub fn group<T: BindFlags + ?Sized>(
        &mut self,
        field: &str,
        tag: Option<&str>,
        target: &mut T,
    ) -> BindResult<()> {
        let name = match tag {
            Some(raw) => self.parse_tag(field, raw)?.name,
            None => String::new(),
        };

        self.fields.push(field.to_owned());
        let result = if name.is_empty() {
            trace!(field, "flattening nested fields");
            target.bind_flags(self)
        } else {
            trace!(field, group = %name, "entering flag group");
            self.groups.push(name);
            let nested = target.bind_flags(self);
            self.groups.pop();
            nested
        };
        self.fields.pop();
        result
    }

    fn parse_tag(&self, field: &str, raw: &str) -> BindResult<FlagTag> {
        tag::parse(raw, self.flavor).map_err(|err| BindError::tag(self.field_path(field), err))
    }

    fn register<T: FlagValue>(
        &mut self,
        field: &str,
        resolved: FlagTag,
        cell: &mut T,
    ) -> BindResult<()> {
        if resolved.name.is_empty() {
            return Err(BindError::RequiredField {
                field: self.field_path(field),
            });
        }
        let name = self.qualify(&resolved.name);
        let shorthand = resolved
            .shorthand_char()
            .map_err(|raw| BindError::InvalidShorthand {
                flag: name.clone(),
                shorthand: raw.to_owned(),
            })?;
        let default =
            T::parse_default(&resolved.value).map_err(|err| BindError::conversion(&name, err))?;

        let kind = T::KIND;
        debug!(flag = %name, %kind, ?shorthand, "binding flag");
        let spec = FlagSpec {
            name,
            shorthand,
            usage: resolved.usage,
            default_text: resolved.value,
            kind,
        };
        self.flags.flag(&spec, default, cell)
    }

    fn qualify(&self, name: &str) -> String {
        if self.groups.is_empty() {
            return name.to_owned();
        }
        let mut qualified = self.groups.join(&self.separator);
        qualified.push_str(&self.separator);
        qualified.push_str(name);
        qualified
    }

    fn field_path(&self, field: &str) -> String {
        let mut path = self.fields.clone();
        path.push(field.to_owned());
        path.join(".")
    }
}
