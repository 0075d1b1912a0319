//! Capability list validation and impl generation
//!
//! Both user-facing macros end here: a validated list of [`CapSpec`]s becomes one
//! `impl ::strong_caps::<Capability> for <Tag>` per entry.

use proc_macro2::TokenStream as TokenStream2;
use quote::{quote, ToTokens};
use syn::Ident;

use super::{CapKind, CapSpec};

/// Check for duplicate capabilities in the list.
pub fn check_duplicates(caps: &[CapSpec]) -> syn::Result<()> {
    use std::collections::HashSet;

    let mut seen = HashSet::new();
    for cap in caps {
        if !seen.insert(cap.kind) {
            return Err(syn::Error::new(
                cap.ident.span(),
                format!(
                    "duplicate capability `{}`\n\
                     \n\
                     Each capability should appear only once in a capability list.",
                    cap.ident
                ),
            ));
        }
    }
    Ok(())
}

/// `Orders` needs `Equals` on the same tag.
///
/// Only checked when the list is the tag's complete declaration (`strong!`); a
/// hand-written tag may implement `Equals` elsewhere.
pub fn check_orders_has_equals(caps: &[CapSpec]) -> syn::Result<()> {
    let has_equals = caps.iter().any(|cap| cap.kind == CapKind::Equals);
    match caps.iter().find(|cap| cap.kind == CapKind::Orders) {
        Some(orders) if !has_equals => Err(syn::Error::new(
            orders.ident.span(),
            "`Orders` requires `Equals`\n\
             \n\
             Add `Equals` to the same capability list.",
        )),
        _ => Ok(()),
    }
}

/// Generate the capability impls for `tag`.
pub fn expand_cap_impls(tag: &Ident, caps: &[CapSpec]) -> TokenStream2 {
    let impls = caps.iter().map(|cap| {
        let cap_ident = &cap.ident;
        if cap.kind.is_comparison() {
            let out = cap
                .verdict
                .as_ref()
                .map(ToTokens::to_token_stream)
                .unwrap_or_else(|| quote! { ::core::primitive::bool });
            quote! {
                impl ::strong_caps::#cap_ident for #tag {
                    type Out = #out;
                }
            }
        } else if cap.kind.is_stream() {
            quote! {
                ::strong_caps::__impl_stream_capability!(#tag, #cap_ident);
            }
        } else {
            quote! {
                impl ::strong_caps::#cap_ident for #tag {}
            }
        }
    });

    quote! { #(#impls)* }
}
