//! `strong!` - declare nominal types in one line each
//!
//! ```ignore
//! strong! {
//!     /// Number of clock cycles.
//!     pub CycleCount(i32): Equals, Orders, Adds, Subtracts, Increments, Decrements;
//!     pub Frequency(f64);
//! }
//! ```
//!
//! Each declaration expands to:
//!
//! ```ignore
//! pub enum CycleCountTag {}
//! impl ::strong_caps::Equals for CycleCountTag { type Out = bool; }
//! // ... one impl per capability
//! /// Number of clock cycles.
//! pub type CycleCount = ::strong_caps::Strong<CycleCountTag, i32>;
//! ```

use proc_macro2::TokenStream as TokenStream2;
use quote::{format_ident, quote};
use syn::{
    parse::{Parse, ParseStream},
    Attribute, Ident, Token, Type, Visibility,
};

use crate::common::{check_duplicates, check_orders_has_equals, expand_cap_impls, parse_cap_list, CapSpec};

// =============================================================================
// Input Parser
// =============================================================================

/// `#[attrs] vis Name(Type): Cap, Cap<Out>, ...;`
pub struct StrongDecl {
    pub attrs: Vec<Attribute>,
    pub vis: Visibility,
    pub name: Ident,
    pub value: Type,
    pub caps: Vec<CapSpec>,
}

impl Parse for StrongDecl {
    fn parse(input: ParseStream) -> syn::Result<Self> {
        let attrs = input.call(Attribute::parse_outer)?;
        let vis: Visibility = input.parse()?;
        let name: Ident = input.parse()?;

        let content;
        syn::parenthesized!(content in input);
        let value: Type = content.parse()?;
        if !content.is_empty() {
            return Err(content.error("expected exactly one underlying type"));
        }

        let caps = if input.peek(Token![:]) {
            input.parse::<Token![:]>()?;
            parse_cap_list(input)?
        } else {
            Vec::new()
        };
        input.parse::<Token![;]>()?;

        Ok(StrongDecl { attrs, vis, name, value, caps })
    }
}

/// Any number of declarations.
pub struct StrongInput {
    pub decls: Vec<StrongDecl>,
}

impl Parse for StrongInput {
    fn parse(input: ParseStream) -> syn::Result<Self> {
        let mut decls = Vec::new();
        while !input.is_empty() {
            decls.push(input.parse()?);
        }
        Ok(StrongInput { decls })
    }
}

// =============================================================================
// Expansion
// =============================================================================

pub fn expand_strong(input: StrongInput) -> syn::Result<TokenStream2> {
    let mut out = TokenStream2::new();
    for decl in &input.decls {
        out.extend(expand_decl(decl)?);
    }
    Ok(out)
}

fn expand_decl(decl: &StrongDecl) -> syn::Result<TokenStream2> {
    check_duplicates(&decl.caps)?;
    check_orders_has_equals(&decl.caps)?;

    let StrongDecl { attrs, vis, name, value, caps } = decl;
    let tag = format_ident!("{}Tag", name, span = name.span());
    let tag_doc = format!("Tag of the nominal type [`{}`].", name);
    let impls = expand_cap_impls(&tag, caps);

    Ok(quote! {
        #[doc = #tag_doc]
        #vis enum #tag {}

        #impls

        #(#attrs)*
        #vis type #name = ::strong_caps::Strong<#tag, #value>;
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn expand(src: &str) -> syn::Result<String> {
        let input: StrongInput = syn::parse_str(src)?;
        expand_strong(input).map(|tokens| tokens.to_string().replace(' ', ""))
    }

    #[test]
    fn test_parse_multiple_decls() {
        let input: StrongInput = syn::parse_str(
            "/// cycles\n pub CycleCount(i32): Equals, Adds; Frequency(f64); pub(crate) Id(u64): Equals<Trit>,;",
        )
        .unwrap();
        assert_eq!(input.decls.len(), 3);
        assert_eq!(input.decls[0].name, "CycleCount");
        assert_eq!(input.decls[0].attrs.len(), 1);
        assert_eq!(input.decls[0].caps.len(), 2);
        assert!(input.decls[1].caps.is_empty());
        assert!(input.decls[2].caps[0].verdict.is_some());
    }

    #[test]
    fn test_expansion_shape() {
        let out = expand("pub CycleCount(i32): Equals, Adds;").unwrap();
        assert!(out.contains("pubenumCycleCountTag{}"));
        assert!(out.contains("impl::strong_caps::AddsforCycleCountTag{}"));
        assert!(out.contains("pubtypeCycleCount=::strong_caps::Strong<CycleCountTag,i32>;"));
    }

    #[test]
    fn test_capability_free_decl() {
        let out = expand("Period(f64);").unwrap();
        assert!(out.contains("enumPeriodTag{}"));
        assert!(out.contains("typePeriod=::strong_caps::Strong<PeriodTag,f64>;"));
        assert!(!out.contains("impl"));
    }

    #[test]
    fn test_errors() {
        let err = expand("X(i32): Adds, Adds;").unwrap_err();
        assert!(err.to_string().contains("duplicate capability"));

        let err = expand("X(i32): Orders;").unwrap_err();
        assert!(err.to_string().contains("`Orders` requires `Equals`"));

        assert!(syn::parse_str::<StrongInput>("X(i32, u8);").is_err());
        assert!(syn::parse_str::<StrongInput>("X(i32): Adds").is_err());
    }
}
