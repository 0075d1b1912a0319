//! Procedural macros for the strong-caps nominal type system
//!
//! | Macro | Target | Purpose |
//! |-------|--------|---------|
//! | `strong!{}` | - | Declare tag, capabilities and type alias together |
//! | `#[capabilities]` | struct/enum | Attach capabilities to a hand-written tag |
//!
//! ## Example
//!
//! ```ignore
//! strong! {
//!     pub CycleCount(i32): Equals, Orders, Adds, Subtracts, Increments, Decrements;
//!     pub Frequency(f64);
//! }
//!
//! #[capabilities(Equals, Adds)]
//! pub enum MetersTag {}
//! pub type Meters = Strong<MetersTag, f64>;
//! ```

use proc_macro::TokenStream;
use syn::parse_macro_input;

// =============================================================================
// Module Declarations (Two-tier: common / user)
// =============================================================================

mod common;
mod user;

// =============================================================================
// User-facing Macros (user/)
// =============================================================================

/// Declare one or more nominal types.
///
/// # Usage
///
/// ```ignore
/// strong! {
///     /// Docs and attributes go on the generated type alias.
///     pub CycleCount(i32): Equals, Orders, Adds, Subtracts, Increments, Decrements;
///
///     // No capabilities: only construction and explicit access.
///     pub Frequency(f64);
///
///     // Comparison capabilities take an optional result type (default `bool`).
///     pub Reading(i8): Equals<Trit>;
/// }
/// ```
///
/// For `Name` this generates an uninhabited tag `NameTag`, one impl per capability and
/// `type Name = ::strong_caps::Strong<NameTag, V>`.
#[proc_macro]
pub fn strong(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as user::StrongInput);
    user::expand_strong(input)
        .unwrap_or_else(syn::Error::into_compile_error)
        .into()
}

/// Implement capabilities on a hand-written tag.
///
/// # Usage
///
/// ```ignore
/// #[capabilities(Equals, Orders, Adds)]
/// pub enum MetersTag {}
///
/// pub type Meters = Strong<MetersTag, f64>;
/// ```
#[proc_macro_attribute]
pub fn capabilities(attr: TokenStream, item: TokenStream) -> TokenStream {
    user::expand_capabilities(attr.into(), item.into())
        .unwrap_or_else(syn::Error::into_compile_error)
        .into()
}
