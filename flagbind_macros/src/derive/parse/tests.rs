//! Tests for `#[flag(...)]` parsing.

use anyhow::{Result, anyhow, ensure};
use rstest::rstest;
use syn::punctuated::Punctuated;
use syn::{DeriveInput, Token, parse_quote};

use super::*;

fn field_mode(input: &DeriveInput) -> syn::Result<FieldMode> {
    let parsed = parse_input(input)?;
    parsed
        .fields
        .into_iter()
        .next()
        .map(|field| field.mode)
        .ok_or_else(|| syn::Error::new_spanned(&input.ident, "no fields"))
}

#[test]
fn flag_args_parse_as_a_comma_list() -> Result<()> {
    let parser = Punctuated::<FlagArg, Token![,]>::parse_terminated;
    let args = syn::parse::Parser::parse_str(parser, r#""server", nested"#)
        .map_err(|err| anyhow!(err))?;
    let items: Vec<_> = args.into_iter().collect();
    ensure!(
        matches!(items.as_slice(), [FlagArg::Tag(tag), FlagArg::Word(word)] if tag.value() == "server" && word == "nested"),
        "expected a tag followed by a mode word"
    );
    Ok(())
}

#[test]
fn parses_value_tag() -> Result<()> {
    let input: DeriveInput = parse_quote! {
        struct Demo {
            #[flag("port;p;8080;port")]
            port: u16,
        }
    };
    let mode = field_mode(&input).map_err(|err| anyhow!(err))?;
    let FieldMode::Value(tag) = mode else {
        return Err(anyhow!("expected a value field"));
    };
    ensure!(tag.value() == "port;p;8080;port", "unexpected tag {}", tag.value());
    Ok(())
}

#[test]
fn parses_nested_with_and_without_group() -> Result<()> {
    let input: DeriveInput = parse_quote! {
        struct Demo {
            #[flag("server", nested)]
            server: Server,
            #[flag(nested)]
            client: Client,
        }
    };
    let parsed = parse_input(&input).map_err(|err| anyhow!(err))?;
    let modes: Vec<_> = parsed.fields.iter().map(|field| &field.mode).collect();
    ensure!(
        matches!(modes.as_slice(), [FieldMode::Nested(Some(tag)), FieldMode::Nested(None)] if tag.value() == "server"),
        "nested modes not parsed"
    );
    Ok(())
}

#[rstest]
#[case::dash(parse_quote! { struct Demo { #[flag("-")] a: u8 } })]
#[case::word(parse_quote! { struct Demo { #[flag(skip)] a: u8 } })]
#[case::bare(parse_quote! { struct Demo { a: u8 } })]
fn recognises_skipped_fields(#[case] input: DeriveInput) -> Result<()> {
    let mode = field_mode(&input).map_err(|err| anyhow!(err))?;
    ensure!(matches!(mode, FieldMode::Skip), "field should be skipped");
    Ok(())
}

#[test]
fn parses_describe() -> Result<()> {
    let input: DeriveInput = parse_quote! {
        struct Demo {
            #[flag(describe)]
            description: Description,
        }
    };
    let mode = field_mode(&input).map_err(|err| anyhow!(err))?;
    ensure!(matches!(mode, FieldMode::Describe), "describe not parsed");
    Ok(())
}

#[rstest]
#[case::empty(parse_quote! { struct Demo { #[flag()] a: u8 } }, "expected a tag string")]
#[case::unknown(parse_quote! { struct Demo { #[flag(flatten)] a: u8 } }, "unknown flag mode")]
#[case::tag_on_skip(parse_quote! { struct Demo { #[flag("a", skip)] a: u8 } }, "does not take a tag")]
#[case::two_tags(parse_quote! { struct Demo { #[flag("a", "b")] a: u8 } }, "must come first")]
#[case::two_modes(parse_quote! { struct Demo { #[flag(nested, skip)] a: u8 } }, "only one mode")]
#[case::duplicate(parse_quote! { struct Demo { #[flag("a")] #[flag("b")] a: u8 } }, "duplicate")]
#[case::tuple(parse_quote! { struct Demo(u8); }, "named fields")]
#[case::enumeration(parse_quote! { enum Demo { A } }, "only be derived for structs")]
fn rejects_malformed_attributes(#[case] input: DeriveInput, #[case] message: &str) -> Result<()> {
    let Err(err) = parse_input(&input) else {
        return Err(anyhow!("expected an error containing {message:?}"));
    };
    ensure!(
        err.to_string().contains(message),
        "error {err} does not mention {message:?}"
    );
    Ok(())
}

#[test]
fn parses_crate_path() -> Result<()> {
    let input: DeriveInput = parse_quote! {
        #[flag(crate = "flags")]
        struct Demo {}
    };
    let parsed = parse_input(&input).map_err(|err| anyhow!(err))?;
    let path = parsed
        .attrs
        .crate_path
        .ok_or_else(|| anyhow!("crate path missing"))?;
    ensure!(path.is_ident("flags"), "unexpected crate path");
    Ok(())
}

#[rstest]
#[case::plain(parse_quote!(Option<u32>), true)]
#[case::qualified(parse_quote!(std::option::Option<u32>), true)]
#[case::other(parse_quote!(Vec<u32>), false)]
#[case::bare(parse_quote!(u32), false)]
fn detects_option_types(#[case] ty: syn::Type, #[case] expected: bool) {
    assert_eq!(option_inner(&ty).is_some(), expected);
}
