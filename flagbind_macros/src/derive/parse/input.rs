//! Input gathering for the `BindFlags` derive.

use syn::{Data, DeriveInput, Fields};

use super::{FieldMode, StructAttrs, parse_field_mode, parse_struct_attrs};

/// A bindable field: its identifier, type and mode.
pub(crate) struct BoundField {
    pub ident: syn::Ident,
    pub ty: syn::Type,
    pub mode: FieldMode,
}

/// Everything the generator needs from the struct.
pub(crate) struct ParsedInput {
    pub attrs: StructAttrs,
    pub fields: Vec<BoundField>,
}

/// Collects struct attributes and every named field's mode.
///
/// Fails fast on the first malformed attribute so expansion reports a single
/// precise error.
pub(crate) fn parse_input(input: &DeriveInput) -> syn::Result<ParsedInput> {
    let attrs = parse_struct_attrs(&input.attrs)?;
    let named = match &input.data {
        Data::Struct(data) => match &data.fields {
            Fields::Named(named) => &named.named,
            Fields::Unit => {
                return Ok(ParsedInput {
                    attrs,
                    fields: Vec::new(),
                });
            }
            Fields::Unnamed(_) => {
                return Err(syn::Error::new_spanned(
                    data.struct_token,
                    "BindFlags requires named fields",
                ));
            }
        },
        _ => {
            return Err(syn::Error::new_spanned(
                &input.ident,
                "BindFlags can only be derived for structs",
            ));
        }
    };

    let mut fields = Vec::new();
    for field in named {
        let Some(ident) = field.ident.clone() else {
            continue;
        };
        fields.push(BoundField {
            ident,
            ty: field.ty.clone(),
            mode: parse_field_mode(field)?,
        });
    }
    Ok(ParsedInput { attrs, fields })
}
