//! Parsing of `#[flag(...)]` attributes.
//!
//! Field attributes take an optional tag string followed by an optional
//! mode word:
//!
//! ```text
//! #[flag("port;p;8080;port to listen on")]
//! #[flag("server", nested)]
//! #[flag(nested)]
//! #[flag(describe)]
//! #[flag(skip)]
//! ```

mod input;
#[cfg(test)]
mod tests;
mod type_utils;

use syn::parse::{Parse, ParseStream};
use syn::punctuated::Punctuated;
use syn::{Attribute, Ident, LitStr, Token};

pub(crate) use input::{ParsedInput, parse_input};
pub(crate) use type_utils::option_inner;

/// Tag text that marks a field as skipped.
const SKIP_TAG: &str = "-";

/// Struct-level `#[flag(...)]` settings.
#[derive(Default, Clone)]
pub(crate) struct StructAttrs {
    /// Overrides the runtime crate path in generated code.
    pub crate_path: Option<syn::Path>,
}

/// How a field takes part in binding.
#[derive(Clone)]
pub(crate) enum FieldMode {
    /// Bound as one flag described by the tag.
    Value(LitStr),
    /// Recursed into; a tag names the group.
    Nested(Option<LitStr>),
    /// Bound using the metadata its type supplies.
    Describe,
    /// Left alone.
    Skip,
}

/// One comma-separated item inside `#[flag(...)]`.
enum FlagArg {
    Tag(LitStr),
    Word(Ident),
}

impl Parse for FlagArg {
    fn parse(input: ParseStream<'_>) -> syn::Result<Self> {
        if input.peek(LitStr) {
            input.parse().map(Self::Tag)
        } else {
            input.parse().map(Self::Word)
        }
    }
}

pub(crate) fn parse_struct_attrs(attrs: &[Attribute]) -> syn::Result<StructAttrs> {
    let mut out = StructAttrs::default();
    for attr in attrs.iter().filter(|a| a.path().is_ident("flag")) {
        attr.parse_nested_meta(|meta| {
            if meta.path.is_ident("crate") {
                let s = meta.value()?.parse::<LitStr>()?;
                let path: syn::Path =
                    syn::parse_str(&s.value()).map_err(|e| syn::Error::new(s.span(), e))?;
                out.crate_path = Some(path);
                Ok(())
            } else {
                Err(meta.error("unsupported struct attribute; expected `crate = \"...\"`"))
            }
        })?;
    }
    Ok(out)
}

/// Reads the field's `#[flag(...)]` attribute, if any.
///
/// A field without the attribute is skipped.
pub(crate) fn parse_field_mode(field: &syn::Field) -> syn::Result<FieldMode> {
    let mut flag_attrs = field.attrs.iter().filter(|a| a.path().is_ident("flag"));
    let Some(attr) = flag_attrs.next() else {
        return Ok(FieldMode::Skip);
    };
    if let Some(extra) = flag_attrs.next() {
        return Err(syn::Error::new_spanned(
            extra,
            "duplicate #[flag] attribute on field",
        ));
    }

    let args = attr.parse_args_with(Punctuated::<FlagArg, Token![,]>::parse_terminated)?;
    let mut tag: Option<LitStr> = None;
    let mut word: Option<Ident> = None;
    for arg in args {
        match arg {
            FlagArg::Tag(lit) if tag.is_none() && word.is_none() => tag = Some(lit),
            FlagArg::Word(ident) if word.is_none() => word = Some(ident),
            FlagArg::Tag(lit) => {
                return Err(syn::Error::new(
                    lit.span(),
                    "the tag string must come first and appear once",
                ));
            }
            FlagArg::Word(ident) => {
                return Err(syn::Error::new(ident.span(), "only one mode may be given"));
            }
        }
    }
    resolve_mode(attr, tag, word)
}

fn resolve_mode(
    attr: &Attribute,
    tag: Option<LitStr>,
    word: Option<Ident>,
) -> syn::Result<FieldMode> {
    let Some(ident) = word else {
        return match tag {
            Some(lit) if lit.value() == SKIP_TAG => Ok(FieldMode::Skip),
            Some(lit) => Ok(FieldMode::Value(lit)),
            None => Err(syn::Error::new_spanned(
                attr,
                "expected a tag string or one of `nested`, `describe`, `skip`",
            )),
        };
    };

    match (ident.to_string().as_str(), tag) {
        ("nested", tag) => Ok(FieldMode::Nested(tag)),
        ("describe", None) => Ok(FieldMode::Describe),
        ("skip", None) => Ok(FieldMode::Skip),
        ("describe" | "skip", Some(lit)) => Err(syn::Error::new(
            lit.span(),
            format!("`{ident}` does not take a tag string"),
        )),
        (other, _) => Err(syn::Error::new(
            ident.span(),
            format!("unknown flag mode `{other}`; expected `nested`, `describe` or `skip`"),
        )),
    }
}
