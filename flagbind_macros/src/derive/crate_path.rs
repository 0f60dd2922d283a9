//! Crate path used by generated code.
//!
//! Defaults to `flagbind`. `#[flag(crate = "...")]` swaps it for the name a
//! dependency was renamed to.

use proc_macro2::TokenStream;
use quote::quote;

/// Tokens naming the runtime crate.
pub(crate) fn resolve(crate_path: Option<&syn::Path>) -> TokenStream {
    crate_path.map_or_else(|| quote! { flagbind }, |path| quote! { #path })
}
