//! In-memory flag registry.

use std::fmt;

use super::{Claims, FlagSet, FlagSpec, help_text};
use crate::BindResult;
use crate::convert::{FlagKind, FlagValue};

/// One flag recorded by a [`FlagTable`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegisteredFlag {
    /// Fully qualified name.
    pub name: String,
    /// Optional single-character alias.
    pub shorthand: Option<char>,
    /// Shape of the bound field.
    pub kind: FlagKind,
    /// Default value as written in the tag.
    pub default: String,
    /// Help text.
    pub usage: String,
}

/// Records bound flags in registration order.
///
/// Useful for inspecting what a struct binds to, or for rendering a
/// defaults listing without building a command:
///
/// ```rust
/// use flagbind::{BindFlags, FlagTable};
///
/// #[derive(BindFlags, Default)]
/// struct Student {
///     #[flag("sex;s;true;sex")]
///     sex: bool,
/// }
///
/// let mut table = FlagTable::new();
/// flagbind::bind_pflags(&mut table, &mut Student::default())?;
/// assert_eq!(table.to_string(), "  -s, --sex   sex (default true)\n");
/// # Ok::<(), flagbind::BindError>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct FlagTable {
    flags: Vec<RegisteredFlag>,
    claims: Claims,
}

impl FlagTable {
    /// Creates an empty table.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Looks up a flag by its fully qualified name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&RegisteredFlag> {
        self.flags.iter().find(|flag| flag.name == name)
    }

    /// Iterates the flags in registration order.
    pub fn iter(&self) -> impl Iterator<Item = &RegisteredFlag> {
        self.flags.iter()
    }

    /// Names of the registered flags in registration order.
    #[must_use]
    pub fn names(&self) -> Vec<&str> {
        self.flags.iter().map(|flag| flag.name.as_str()).collect()
    }

    /// Number of registered flags.
    #[must_use]
    pub fn len(&self) -> usize {
        self.flags.len()
    }

    /// Whether no flag has been registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.flags.is_empty()
    }
}

impl FlagSet for FlagTable {
    fn flag<T: FlagValue>(&mut self, spec: &FlagSpec, default: T, cell: &mut T) -> BindResult<()> {
        self.claims.claim(spec)?;
        self.flags.push(RegisteredFlag {
            name: spec.name.clone(),
            shorthand: spec.shorthand,
            kind: spec.kind,
            default: spec.default_text.clone(),
            usage: help_text(spec),
        });
        *cell = default;
        Ok(())
    }
}

impl fmt::Display for FlagTable {
    /// Renders one line per flag: aliases, type label and help text.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for flag in &self.flags {
            match flag.shorthand {
                Some(short) => write!(f, "  -{short}, --{}", flag.name)?,
                None => write!(f, "      --{}", flag.name)?,
            }
            if !flag.kind.is_switch() {
                write!(f, " {}", flag.kind)?;
            }
            if flag.usage.is_empty() {
                writeln!(f)?;
            } else {
                writeln!(f, "   {}", flag.usage)?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ScalarKind;

    fn spec(name: &str, shorthand: Option<char>) -> FlagSpec {
        FlagSpec {
            name: name.to_owned(),
            shorthand,
            usage: "help".to_owned(),
            default_text: "7".to_owned(),
            kind: FlagKind::Scalar(ScalarKind::I32),
        }
    }

    #[test]
    fn registering_stores_default_in_cell() {
        let mut table = FlagTable::new();
        let mut cell = 0_i32;
        table
            .flag(&spec("count", Some('c')), 7, &mut cell)
            .expect("register");
        assert_eq!(cell, 7);
        let flag = table.get("count").expect("registered flag");
        assert_eq!(flag.shorthand, Some('c'));
        assert_eq!(flag.usage, "help (default 7)");
    }

    #[test]
    fn duplicate_names_are_rejected() {
        let mut table = FlagTable::new();
        let mut cell = 0_i32;
        table.flag(&spec("count", None), 1, &mut cell).expect("first");
        let err = table
            .flag(&spec("count", None), 2, &mut cell)
            .expect_err("duplicate");
        assert!(matches!(err, crate::BindError::DuplicateFlag { ref flag } if flag == "count"));
        assert_eq!(cell, 1);
    }

    #[test]
    fn duplicate_shorthands_name_the_owner() {
        let mut table = FlagTable::new();
        let mut cell = 0_i32;
        table.flag(&spec("count", Some('c')), 1, &mut cell).expect("first");
        let err = table
            .flag(&spec("colour", Some('c')), 2, &mut cell)
            .expect_err("duplicate shorthand");
        assert!(matches!(
            err,
            crate::BindError::DuplicateShorthand { ref existing, shorthand: 'c', .. } if existing == "count"
        ));
    }

    #[test]
    fn display_lists_flags_in_order() {
        let mut table = FlagTable::new();
        let mut cell = 0_i32;
        table.flag(&spec("b", Some('b')), 7, &mut cell).expect("b");
        table.flag(&spec("a", None), 7, &mut cell).expect("a");
        assert_eq!(
            table.to_string(),
            "  -b, --b int32   help (default 7)\n      --a int32   help (default 7)\n"
        );
        assert_eq!(table.names(), ["b", "a"]);
    }

    #[test]
    fn display_omits_separator_without_usage() {
        let mut table = FlagTable::new();
        let mut cell: Vec<f64> = Vec::new();
        let bare = FlagSpec {
            name: "e".to_owned(),
            shorthand: None,
            usage: String::new(),
            default_text: String::new(),
            kind: FlagKind::List(ScalarKind::F64),
        };
        table.flag(&bare, Vec::new(), &mut cell).expect("register");
        assert_eq!(table.to_string(), "      --e float64Slice\n");
    }
}
