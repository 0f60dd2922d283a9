//! Procedural macros for `flagbind`.
//!
//! The [`BindFlags`] derive generates an implementation of
//! `flagbind::BindFlags` that hands every annotated field of a struct to a
//! `flagbind::Binder`, in declaration order. Tag strings are passed through
//! unchanged and parsed when the binder runs.

use proc_macro::TokenStream;
use syn::{DeriveInput, parse_macro_input};

mod derive;

/// Derive macro for `flagbind::BindFlags`.
///
/// Field attributes:
///
/// - `#[flag("name;shorthand;value;usage")]` binds a value field;
/// - `#[flag("group", nested)]` binds a nested struct under a group prefix;
/// - `#[flag(nested)]` binds a nested struct without a prefix;
/// - `#[flag(describe)]` binds a field whose type implements
///   `flagbind::DescribeFlag`;
/// - `#[flag(skip)]` or `#[flag("-")]` leaves the field alone.
///
/// Fields without a `#[flag]` attribute are skipped. `Option<T>` fields are
/// filled with `T::default()` before binding.
///
/// The struct-level `#[flag(crate = "path")]` attribute points generated code
/// at a renamed dependency.
#[proc_macro_derive(BindFlags, attributes(flag))]
pub fn derive_bind_flags(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    derive::expand(&input)
        .unwrap_or_else(syn::Error::into_compile_error)
        .into()
}
