//! Token generation for the `BindFlags` implementation.

use proc_macro2::TokenStream;
use quote::quote;
use syn::DeriveInput;

use super::parse::{FieldMode, ParsedInput, option_inner};

/// Builds `impl BindFlags for <struct>`.
pub(crate) fn bind_flags_impl(
    input: &DeriveInput,
    parsed: &ParsedInput,
    krate: &TokenStream,
) -> TokenStream {
    let ident = &input.ident;
    let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();
    let calls = parsed.fields.iter().filter_map(|field| {
        let name = field.ident.to_string();
        let cell = field_cell(&field.ident, &field.ty);
        let call = match &field.mode {
            FieldMode::Skip => return None,
            FieldMode::Value(tag) => quote! { binder.value(#name, #tag, #cell)?; },
            FieldMode::Describe => quote! { binder.described(#name, #cell)?; },
            FieldMode::Nested(Some(tag)) => {
                quote! { binder.group(#name, ::core::option::Option::Some(#tag), #cell)?; }
            }
            FieldMode::Nested(None) => {
                quote! { binder.group(#name, ::core::option::Option::None, #cell)?; }
            }
        };
        Some(call)
    });

    quote! {
        impl #impl_generics #krate::BindFlags for #ident #ty_generics #where_clause {
            fn bind_flags<__S: #krate::FlagSet>(
                &mut self,
                binder: &mut #krate::Binder<'_, __S>,
            ) -> #krate::BindResult<()> {
                #( #calls )*
                ::core::result::Result::Ok(())
            }
        }
    }
}

/// Mutable access to the field, filling an empty `Option` first.
fn field_cell(ident: &syn::Ident, ty: &syn::Type) -> TokenStream {
    if option_inner(ty).is_some() {
        quote! {
            self.#ident.get_or_insert_with(::core::default::Default::default)
        }
    } else {
        quote! { &mut self.#ident }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::derive::parse::parse_input;
    use syn::parse_quote;

    fn expand(input: &DeriveInput) -> String {
        let parsed = parse_input(input).expect("parse input");
        bind_flags_impl(input, &parsed, &quote! { flagbind }).to_string()
    }

    #[test]
    fn value_fields_call_binder_value() {
        let input: DeriveInput = parse_quote! {
            struct Server {
                #[flag("port;p;8080;port")]
                port: u16,
            }
        };
        let tokens = expand(&input);
        assert!(tokens.contains("binder . value (\"port\" , \"port;p;8080;port\" , & mut self . port) ?"));
    }

    #[test]
    fn nested_fields_call_binder_group() {
        let input: DeriveInput = parse_quote! {
            struct School {
                #[flag("student", nested)]
                student: Student,
                #[flag(nested)]
                address: Address,
            }
        };
        let tokens = expand(&input);
        assert!(tokens.contains("binder . group (\"student\" , :: core :: option :: Option :: Some (\"student\")"));
        assert!(tokens.contains("binder . group (\"address\" , :: core :: option :: Option :: None"));
    }

    #[test]
    fn option_fields_are_filled_before_binding() {
        let input: DeriveInput = parse_quote! {
            struct Server {
                #[flag("retries;r;3;retries")]
                retries: Option<u32>,
            }
        };
        let tokens = expand(&input);
        assert!(tokens.contains("self . retries . get_or_insert_with"));
    }

    #[test]
    fn skipped_fields_generate_nothing() {
        let input: DeriveInput = parse_quote! {
            struct Server {
                #[flag("-")]
                cache: Vec<u8>,
                #[flag(skip)]
                other: u8,
                plain: u8,
            }
        };
        let tokens = expand(&input);
        assert!(!tokens.contains("binder ."));
    }

    #[test]
    fn generics_are_forwarded() {
        let input: DeriveInput = parse_quote! {
            struct Wrapper<T: Default> {
                #[flag(nested)]
                inner: T,
            }
        };
        let tokens = expand(&input);
        assert!(tokens.contains("impl < T : Default > flagbind :: BindFlags for Wrapper < T >"));
    }
}
