//! `#[capabilities(...)]` - attach capabilities to a hand-written tag
//!
//! ```ignore
//! #[capabilities(Equals, Adds)]
//! pub enum MetersTag {}
//!
//! pub type Meters = Strong<MetersTag, f64>;
//! ```

use proc_macro2::TokenStream as TokenStream2;
use quote::quote;
use syn::{parse::Parser, Item};

use crate::common::{check_duplicates, expand_cap_impls, parse_cap_list};

pub fn expand_capabilities(attr: TokenStream2, item: TokenStream2) -> syn::Result<TokenStream2> {
    let caps = parse_cap_list.parse2(attr)?;
    let item: Item = syn::parse2(item)?;

    let (ident, generics) = match &item {
        Item::Struct(s) => (&s.ident, &s.generics),
        Item::Enum(e) => (&e.ident, &e.generics),
        other => {
            return Err(syn::Error::new_spanned(
                other,
                "`#[capabilities]` applies to a tag struct or enum",
            ));
        }
    };
    if !generics.params.is_empty() {
        return Err(syn::Error::new_spanned(
            generics,
            "a tag cannot be generic\n\
             \n\
             Each nominal type needs its own concrete tag.",
        ));
    }

    check_duplicates(&caps)?;
    let impls = expand_cap_impls(ident, &caps);

    Ok(quote! {
        #item
        #impls
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn expand(attr: &str, item: &str) -> syn::Result<String> {
        let attr: TokenStream2 = attr.parse().unwrap();
        let item: TokenStream2 = item.parse().unwrap();
        expand_capabilities(attr, item).map(|tokens| tokens.to_string().replace(' ', ""))
    }

    #[test]
    fn test_enum_tag() {
        let out = expand("Equals, Modulo", "pub enum LaneTag {}").unwrap();
        assert!(out.starts_with("pubenumLaneTag{}"));
        assert!(out.contains("impl::strong_caps::ModuloforLaneTag{}"));
    }

    #[test]
    fn test_struct_tag_with_orders_only() {
        // `Equals` may be implemented by hand elsewhere.
        let out = expand("Orders", "struct Rank;").unwrap();
        assert!(out.contains("impl::strong_caps::OrdersforRank"));
    }

    #[test]
    fn test_rejections() {
        let err = expand("Adds", "fn not_a_tag() {}").unwrap_err();
        assert!(err.to_string().contains("applies to a tag struct or enum"));

        let err = expand("Adds", "enum Tag<T> { A(T) }").unwrap_err();
        assert!(err.to_string().contains("cannot be generic"));

        let err = expand("Adds, Adds", "enum Tag {}").unwrap_err();
        assert!(err.to_string().contains("duplicate capability"));
    }
}
