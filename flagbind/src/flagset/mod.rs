//! Flag-sets a [`Binder`](crate::Binder) registers into.
//!
//! A [`FlagSet`] receives one call per bound field with the resolved flag
//! description, the converted default and a mutable reference to the
//! field. Three implementations ship with the crate:
//!
//! - [`CommandFlags`] adds a [`clap::Arg`] per flag to a [`clap::Command`];
//! - [`MatchedFlags`] copies parsed values from [`clap::ArgMatches`] back
//!   into the fields;
//! - [`FlagTable`] records the flags in memory.

mod command;
mod matched;
mod table;

use std::collections::{HashMap, HashSet};
use std::ffi::OsString;

use clap::{ArgMatches, Command};

pub use command::CommandFlags;
pub use matched::MatchedFlags;
pub use table::{FlagTable, RegisteredFlag};

use crate::bind::{BindFlags, BindOptions, Binder};
use crate::convert::{FlagKind, FlagValue};
use crate::{BindError, BindResult};

/// Resolved description of one flag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FlagSpec {
    /// Fully qualified name, including any group prefix.
    pub name: String,
    /// Optional single-character alias.
    pub shorthand: Option<char>,
    /// Help text.
    pub usage: String,
    /// Default value as written in the tag.
    pub default_text: String,
    /// Shape of the bound field.
    pub kind: FlagKind,
}

/// Registry a binder hands resolved flags to.
pub trait FlagSet {
    /// Handles one flag bound to `cell`.
    ///
    /// `default` is the converted default value. Registering
    /// implementations store it in `cell`.
    ///
    /// # Errors
    ///
    /// Implementations return a [`BindError`] when the flag cannot be
    /// registered or read.
    fn flag<T: FlagValue>(&mut self, spec: &FlagSpec, default: T, cell: &mut T) -> BindResult<()>;
}

/// Names and shorthands already taken in a flag-set.
#[derive(Debug, Clone, Default)]
struct Claims {
    names: HashSet<String>,
    shorthands: HashMap<char, String>,
}

impl Claims {
    fn reserve(&mut self, name: &str, shorthand: Option<char>) {
        self.names.insert(name.to_owned());
        if let Some(short) = shorthand {
            self.shorthands.insert(short, name.to_owned());
        }
    }

    fn claim(&mut self, spec: &FlagSpec) -> BindResult<()> {
        if self.names.contains(&spec.name) {
            return Err(BindError::DuplicateFlag {
                flag: spec.name.clone(),
            });
        }
        if let Some(short) = spec.shorthand {
            if let Some(existing) = self.shorthands.get(&short) {
                return Err(BindError::DuplicateShorthand {
                    flag: spec.name.clone(),
                    shorthand: short,
                    existing: existing.clone(),
                });
            }
        }
        self.reserve(&spec.name, spec.shorthand);
        Ok(())
    }
}

/// Help text in the `usage (default value)` form.
fn help_text(spec: &FlagSpec) -> String {
    if spec.default_text.is_empty() {
        return spec.usage.clone();
    }
    let shown = match spec.kind {
        FlagKind::Scalar(crate::ScalarKind::String) => format!("{:?}", spec.default_text),
        _ => spec.default_text.clone(),
    };
    if spec.usage.is_empty() {
        format!("(default {shown})")
    } else {
        format!("{} (default {shown})", spec.usage)
    }
}

/// Registers `target` on `command`, parses `args` and writes the parsed
/// values back into `target`.
///
/// Fields whose flags are absent from `args` receive their tag default.
///
/// # Errors
///
/// Returns any binding error, or [`BindError::Cli`] when `args` do not
/// parse. `--help` and `--version` also surface as [`BindError::Cli`]; see
/// [`BindError::is_display_request`].
///
/// # Examples
///
/// ```rust
/// use clap::Command;
/// use flagbind::{BindFlags, BindOptions};
///
/// #[derive(BindFlags, Default)]
/// struct Student {
///     #[flag("name:name;shorthand:n;value:ss;usage:name of student")]
///     name: String,
///     #[flag("age;a;0;usage:age of student")]
///     age: i32,
/// }
///
/// let mut student = Student::default();
/// flagbind::parse_from(
///     Command::new("school"),
///     &mut student,
///     &BindOptions::default(),
///     ["school", "-a", "12"],
/// )?;
/// assert_eq!(student.name, "ss");
/// assert_eq!(student.age, 12);
/// # Ok::<(), flagbind::BindError>(())
/// ```
pub fn parse_from<T, I, A>(
    command: Command,
    target: &mut T,
    options: &BindOptions,
    args: I,
) -> BindResult<ArgMatches>
where
    T: BindFlags + ?Sized,
    I: IntoIterator<Item = A>,
    A: Into<OsString> + Clone,
{
    let mut registered = CommandFlags::new(command);
    Binder::new(&mut registered, options).bind(target)?;
    let matches = registered.into_command().try_get_matches_from(args)?;

    let mut matched = MatchedFlags::new(&matches);
    Binder::new(&mut matched, options).bind(target)?;
    Ok(matches)
}
