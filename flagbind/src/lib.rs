//! Bind annotated structs to command-line flags.
//!
//! Fields carry a compact tag describing their flag:
//!
//! ```text
//! #[flag("name;shorthand;value;usage")]
//! ```
//!
//! Segments may also be keyed (`name:port;value:8080`) and quoted
//! (`usage:'a; b'`). See the [`tag`] module for the grammar. The
//! [`BindFlags`](derive@BindFlags) derive walks the struct, nested structs
//! become flag groups whose names prefix every flag below them, and each
//! field receives its converted default.
//!
//! ```rust
//! use clap::Command;
//! use flagbind::{BindFlags, BindOptions};
//!
//! #[derive(BindFlags, Default)]
//! struct School {
//!     #[flag("name;n;sss;name of school")]
//!     name: String,
//!     #[flag("student", nested)]
//!     student: Student,
//! }
//!
//! #[derive(BindFlags, Default)]
//! struct Student {
//!     #[flag("age;a;12;age of student")]
//!     age: u8,
//! }
//!
//! let mut school = School::default();
//! flagbind::parse_from(
//!     Command::new("school"),
//!     &mut school,
//!     &BindOptions::default(),
//!     ["school", "--student.age", "13"],
//! )?;
//! assert_eq!(school.name, "sss");
//! assert_eq!(school.student.age, 13);
//! # Ok::<(), flagbind::BindError>(())
//! ```

extern crate self as flagbind;

pub use flagbind_macros::BindFlags;

mod bind;
mod convert;
mod error;
mod flagset;
pub mod tag;

pub use bind::{BindFlags, BindOptions, Binder, DescribeFlag};
pub use convert::{FlagKind, FlagScalar, FlagValue, ScalarKind};
pub use error::{BindError, BindResult, ConversionError, TagError, is_display_request};
pub use flagset::{
    CommandFlags, FlagSet, FlagSpec, FlagTable, MatchedFlags, RegisteredFlag, parse_from,
};
pub use tag::{FlagTag, Flavor, TagKey};

/// Binds every field of `target` into `flags` using `options`.
///
/// Fields receive their tag defaults as they are registered.
///
/// # Errors
///
/// Returns the first [`BindError`] raised while parsing a tag, converting a
/// default or registering a flag. Flags registered before the failure stay
/// registered.
pub fn bind_with<S, T>(flags: &mut S, target: &mut T, options: &BindOptions) -> BindResult<()>
where
    S: FlagSet,
    T: BindFlags + ?Sized,
{
    Binder::new(flags, options).bind(target)
}

/// Binds `target` with [`Flavor::Simple`] tags (`name;value;usage`).
///
/// # Errors
///
/// See [`bind_with`].
pub fn bind_flags<S, T>(flags: &mut S, target: &mut T) -> BindResult<()>
where
    S: FlagSet,
    T: BindFlags + ?Sized,
{
    bind_with(flags, target, &BindOptions::new(Flavor::Simple))
}

/// Binds `target` with [`Flavor::Posix`] tags (`name;shorthand;value;usage`).
///
/// # Errors
///
/// See [`bind_with`].
pub fn bind_pflags<S, T>(flags: &mut S, target: &mut T) -> BindResult<()>
where
    S: FlagSet,
    T: BindFlags + ?Sized,
{
    bind_with(flags, target, &BindOptions::new(Flavor::Posix))
}
