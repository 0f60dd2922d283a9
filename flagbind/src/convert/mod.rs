//! Conversion of textual flag values into typed field values.
//!
//! Every bindable field type implements [`FlagValue`]. The built-in
//! implementations cover strings, every integer width, both float widths,
//! `bool`, [`Duration`] and `Vec`s of any of those. Custom types implement
//! [`FlagValue`] themselves, usually by delegating to one of the scalars.

mod list;

use std::fmt;
use std::time::Duration;

use crate::ConversionError;

/// Scalar flag types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScalarKind {
    /// `String`.
    String,
    /// `i8`.
    I8,
    /// `i16`.
    I16,
    /// `i32`.
    I32,
    /// `i64`.
    I64,
    /// `isize`.
    Isize,
    /// `u8`.
    U8,
    /// `u16`.
    U16,
    /// `u32`.
    U32,
    /// `u64`.
    U64,
    /// `usize`.
    Usize,
    /// `f32`.
    F32,
    /// `f64`.
    F64,
    /// `bool`.
    Bool,
    /// [`Duration`].
    Duration,
}

impl ScalarKind {
    /// Type label shown in help output.
    #[must_use]
    pub const fn type_name(self) -> &'static str {
        match self {
            Self::String => "string",
            Self::I8 => "int8",
            Self::I16 => "int16",
            Self::I32 => "int32",
            Self::I64 => "int64",
            Self::Isize => "int",
            Self::U8 => "uint8",
            Self::U16 => "uint16",
            Self::U32 => "uint32",
            Self::U64 => "uint64",
            Self::Usize => "uint",
            Self::F32 => "float32",
            Self::F64 => "float64",
            Self::Bool => "bool",
            Self::Duration => "duration",
        }
    }

    /// Type label for a list of this scalar.
    #[must_use]
    pub const fn list_type_name(self) -> &'static str {
        match self {
            Self::String => "strings",
            Self::I8 => "int8Slice",
            Self::I16 => "int16Slice",
            Self::I32 => "int32Slice",
            Self::I64 => "int64Slice",
            Self::Isize => "ints",
            Self::U8 => "uint8Slice",
            Self::U16 => "uint16Slice",
            Self::U32 => "uint32Slice",
            Self::U64 => "uint64Slice",
            Self::Usize => "uints",
            Self::F32 => "float32Slice",
            Self::F64 => "float64Slice",
            Self::Bool => "bools",
            Self::Duration => "durationSlice",
        }
    }
}

/// Shape of a bindable field: a single scalar or a list of scalars.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FlagKind {
    /// One value; repeated flags keep the last occurrence.
    Scalar(ScalarKind),
    /// Many values; repeated flags and comma-separated values accumulate.
    List(ScalarKind),
}

impl FlagKind {
    /// Kind of each individual value.
    #[must_use]
    pub const fn scalar(self) -> ScalarKind {
        match self {
            Self::Scalar(kind) | Self::List(kind) => kind,
        }
    }

    /// Whether the field holds many values.
    #[must_use]
    pub const fn is_list(self) -> bool {
        matches!(self, Self::List(_))
    }

    /// Whether the field is a single boolean switch.
    #[must_use]
    pub const fn is_switch(self) -> bool {
        matches!(self, Self::Scalar(ScalarKind::Bool))
    }

    /// Type label shown in help output.
    #[must_use]
    pub const fn type_name(self) -> &'static str {
        match self {
            Self::Scalar(kind) => kind.type_name(),
            Self::List(kind) => kind.list_type_name(),
        }
    }
}

impl fmt::Display for FlagKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.type_name())
    }
}

/// A single value parsed from one command-line occurrence.
pub trait FlagScalar: Clone + Default + Send + Sync + 'static {
    /// Kind reported in help output and errors.
    const KIND: ScalarKind;

    /// Parses one textual value.
    ///
    /// # Errors
    ///
    /// Returns [`ConversionError`] when `raw` is not a valid value.
    fn parse_scalar(raw: &str) -> Result<Self, ConversionError>;

    /// Parses a number element of a JSON list default.
    ///
    /// `raw` is the number's JSON text. Defaults to [`parse_scalar`].
    ///
    /// # Errors
    ///
    /// Returns [`ConversionError`] when `raw` is not a valid value.
    ///
    /// [`parse_scalar`]: FlagScalar::parse_scalar
    fn parse_json_number(raw: &str) -> Result<Self, ConversionError> {
        Self::parse_scalar(raw)
    }
}

/// A field type that can be bound to a flag.
///
/// # Examples
///
/// ```rust
/// use flagbind::{ConversionError, FlagKind, FlagValue, ScalarKind};
///
/// #[derive(Clone, Default, Debug, PartialEq)]
/// struct Port(u16);
///
/// impl FlagValue for Port {
///     type Item = u16;
///     const KIND: FlagKind = FlagKind::Scalar(ScalarKind::U16);
///
///     fn parse_default(raw: &str) -> Result<Self, ConversionError> {
///         u16::parse_default(raw).map(Port)
///     }
///
///     fn from_items(items: Vec<u16>) -> Option<Self> {
///         items.last().copied().map(Port)
///     }
/// }
///
/// assert_eq!(Port::parse_default("8080")?, Port(8080));
/// # Ok::<(), ConversionError>(())
/// ```
pub trait FlagValue: Clone + Default + Send + Sync + 'static {
    /// Scalar produced by each command-line occurrence.
    type Item: FlagScalar;

    /// Shape of the field.
    const KIND: FlagKind;

    /// Converts the default value written in a tag.
    ///
    /// An empty string yields `Self::default()`.
    ///
    /// # Errors
    ///
    /// Returns [`ConversionError`] when a non-empty `raw` does not parse.
    fn parse_default(raw: &str) -> Result<Self, ConversionError>;

    /// Builds the field value from every parsed occurrence, in order.
    ///
    /// Returns `None` when `items` holds nothing usable.
    fn from_items(items: Vec<Self::Item>) -> Option<Self>;
}

fn scalar_error<T: FlagScalar>(raw: &str, message: impl ToString) -> ConversionError {
    ConversionError::new(FlagKind::Scalar(T::KIND), raw, message)
}

impl FlagScalar for String {
    const KIND: ScalarKind = ScalarKind::String;

    fn parse_scalar(raw: &str) -> Result<Self, ConversionError> {
        Ok(raw.to_owned())
    }
}

impl FlagScalar for bool {
    const KIND: ScalarKind = ScalarKind::Bool;

    fn parse_scalar(raw: &str) -> Result<Self, ConversionError> {
        match raw {
            "1" | "t" | "T" | "TRUE" | "true" | "True" => Ok(true),
            "0" | "f" | "F" | "FALSE" | "false" | "False" => Ok(false),
            _ => Err(scalar_error::<Self>(raw, "invalid syntax")),
        }
    }
}

impl FlagScalar for Duration {
    const KIND: ScalarKind = ScalarKind::Duration;

    /// Parses unit-suffixed text such as `90s` or `15m`.
    ///
    /// Exponent forms (`1e3s`) are rejected before parsing; large exponents
    /// make the underlying parser slow.
    fn parse_scalar(raw: &str) -> Result<Self, ConversionError> {
        if has_exponent(raw) {
            return Err(scalar_error::<Self>(raw, "exponent notation is not supported"));
        }
        parse_duration::parse(raw).map_err(|err| scalar_error::<Self>(raw, err))
    }

    /// JSON numbers count nanoseconds.
    fn parse_json_number(raw: &str) -> Result<Self, ConversionError> {
        raw.parse::<u64>()
            .map(Self::from_nanos)
            .map_err(|err| scalar_error::<Self>(raw, err))
    }
}

/// Whether `raw` holds a number written with an exponent, such as `1e3` or
/// `2.5E-1`.
fn has_exponent(raw: &str) -> bool {
    let chars: Vec<char> = raw.chars().collect();
    chars.windows(3).any(|window| {
        matches!(
            window,
            [before, 'e' | 'E', after]
                if (before.is_ascii_digit() || *before == '.')
                    && (after.is_ascii_digit() || matches!(*after, '+' | '-'))
        )
    })
}

macro_rules! from_str_scalar {
    ($($ty:ty => $kind:ident),* $(,)?) => {
        $(
            impl FlagScalar for $ty {
                const KIND: ScalarKind = ScalarKind::$kind;

                fn parse_scalar(raw: &str) -> Result<Self, ConversionError> {
                    raw.parse::<$ty>().map_err(|err| scalar_error::<Self>(raw, err))
                }
            }
        )*
    };
}

from_str_scalar!(
    i8 => I8,
    i16 => I16,
    i32 => I32,
    i64 => I64,
    isize => Isize,
    u8 => U8,
    u16 => U16,
    u32 => U32,
    u64 => U64,
    usize => Usize,
    f32 => F32,
    f64 => F64,
);

macro_rules! scalar_value {
    ($($ty:ty),* $(,)?) => {
        $(
            impl FlagValue for $ty {
                type Item = Self;
                const KIND: FlagKind = FlagKind::Scalar(<Self as FlagScalar>::KIND);

                fn parse_default(raw: &str) -> Result<Self, ConversionError> {
                    if raw.is_empty() {
                        return Ok(Self::default());
                    }
                    Self::parse_scalar(raw)
                }

                fn from_items(mut items: Vec<Self>) -> Option<Self> {
                    items.pop()
                }
            }
        )*
    };
}

scalar_value!(
    String, i8, i16, i32, i64, isize, u8, u16, u32, u64, usize, f32, f64, bool, Duration,
);

impl<T: FlagScalar> FlagValue for Vec<T> {
    type Item = T;
    const KIND: FlagKind = FlagKind::List(T::KIND);

    fn parse_default(raw: &str) -> Result<Self, ConversionError> {
        list::decode(raw)
    }

    fn from_items(items: Vec<T>) -> Option<Self> {
        Some(items)
    }
}
