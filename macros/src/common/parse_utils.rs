//! Common parsing utilities
//!
//! Shared parsing helpers for the capability lists of `strong!` and `#[capabilities]`.

use syn::{
    parse::{Parse, ParseStream},
    Ident, Token, Type,
};

// =============================================================================
// Known Capabilities
// =============================================================================

/// Every capability the runtime crate defines.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CapKind {
    Equals,
    Orders,
    Adds,
    Subtracts,
    Multiplies,
    Divides,
    Modulo,
    Increments,
    Decrements,
    Outputs,
    Inputs,
}

impl CapKind {
    pub const ALL: &'static [CapKind] = &[
        CapKind::Equals,
        CapKind::Orders,
        CapKind::Adds,
        CapKind::Subtracts,
        CapKind::Multiplies,
        CapKind::Divides,
        CapKind::Modulo,
        CapKind::Increments,
        CapKind::Decrements,
        CapKind::Outputs,
        CapKind::Inputs,
    ];

    pub fn name(self) -> &'static str {
        match self {
            CapKind::Equals => "Equals",
            CapKind::Orders => "Orders",
            CapKind::Adds => "Adds",
            CapKind::Subtracts => "Subtracts",
            CapKind::Multiplies => "Multiplies",
            CapKind::Divides => "Divides",
            CapKind::Modulo => "Modulo",
            CapKind::Increments => "Increments",
            CapKind::Decrements => "Decrements",
            CapKind::Outputs => "Outputs",
            CapKind::Inputs => "Inputs",
        }
    }

    pub fn from_ident(ident: &Ident) -> Option<Self> {
        let name = ident.to_string();
        Self::ALL.iter().copied().find(|kind| kind.name() == name)
    }

    /// Comparison capabilities carry a result type (`type Out`).
    pub fn is_comparison(self) -> bool {
        matches!(self, CapKind::Equals | CapKind::Orders)
    }

    /// Stream capabilities only exist with the `streams` feature of the runtime crate.
    pub fn is_stream(self) -> bool {
        matches!(self, CapKind::Outputs | CapKind::Inputs)
    }
}

fn known_names() -> String {
    CapKind::ALL
        .iter()
        .map(|kind| format!("`{}`", kind.name()))
        .collect::<Vec<_>>()
        .join(", ")
}

// =============================================================================
// Capability Entry: `Adds` or `Equals<Trit>`
// =============================================================================

/// One entry of a capability list.
#[derive(Clone)]
pub struct CapSpec {
    pub ident: Ident,
    pub kind: CapKind,
    /// Result type for comparison capabilities; `bool` when omitted.
    pub verdict: Option<Type>,
}

impl Parse for CapSpec {
    fn parse(input: ParseStream) -> syn::Result<Self> {
        let ident: Ident = input.parse()?;
        let kind = CapKind::from_ident(&ident).ok_or_else(|| {
            syn::Error::new(
                ident.span(),
                format!(
                    "unknown capability `{}`\n\
                     \n\
                     Known capabilities: {}",
                    ident,
                    known_names()
                ),
            )
        })?;

        let verdict = if input.peek(Token![<]) {
            input.parse::<Token![<]>()?;
            let ty: Type = input.parse()?;
            input.parse::<Token![>]>()?;
            if !kind.is_comparison() {
                return Err(syn::Error::new_spanned(
                    &ty,
                    format!(
                        "`{}` takes no result type; only `Equals` and `Orders` do",
                        ident
                    ),
                ));
            }
            Some(ty)
        } else {
            None
        };

        Ok(CapSpec { ident, kind, verdict })
    }
}

// =============================================================================
// Comma-separated List Parsing
// =============================================================================

/// Parse `A, B<T>, C` up to (not including) a `;` or the end of input.
///
/// A trailing comma is accepted.
pub fn parse_cap_list(input: ParseStream) -> syn::Result<Vec<CapSpec>> {
    let mut caps = Vec::new();
    while !input.is_empty() && !input.peek(Token![;]) {
        caps.push(input.parse()?);
        if !input.peek(Token![,]) {
            break;
        }
        input.parse::<Token![,]>()?;
    }
    Ok(caps)
}
