//! # Capabilities
//!
//! A capability is a marker trait implemented by a **tag**. Every operator it unlocks is
//! a blanket impl over `Strong<Tag, V>` bounded by that trait, so the operators exist
//! only for nominal types whose tag opted in, and only between values of that one type.
//!
//! | Capability | Unlocks | Needs from `V` |
//! |------------|---------|----------------|
//! | [`Equals`] | `==` `!=` `Eq` `Hash`, [`Strong::equals`] | `PartialEq` |
//! | [`Orders`] | `<` `<=` `>` `>=` `Ord`, [`Strong::less`] | `PartialOrd` |
//! | [`Adds`] | `+` `+=` | `Add` / `AddAssign` |
//! | [`Subtracts`] | `-` `-=` | `Sub` / `SubAssign` |
//! | [`Multiplies`] | `*` `*=` | `Mul` / `MulAssign` |
//! | [`Divides`] | `/` `/=` | `Div` / `DivAssign` |
//! | [`Modulo`] | `%` | `Rem` |
//! | [`Increments`] | [`Strong::increment`], [`Strong::post_increment`] | [`Incrementable`] |
//! | [`Decrements`] | [`Strong::decrement`], [`Strong::post_decrement`] | [`Decrementable`] |
//! | `Outputs` (feature `streams`) | `Display`, `stream::write` | `Display` |
//! | `Inputs` (feature `streams`) | `FromStr`, `stream::read` | `FromStr` |
//!
//! [`Strong::equals`]: crate::Strong::equals
//! [`Strong::less`]: crate::Strong::less
//! [`Strong::increment`]: crate::Strong::increment
//! [`Strong::post_increment`]: crate::Strong::post_increment
//! [`Strong::decrement`]: crate::Strong::decrement
//! [`Strong::post_decrement`]: crate::Strong::post_decrement
//! [`Incrementable`]: crate::ops::Incrementable
//! [`Decrementable`]: crate::ops::Decrementable
//!
//! Two nominal types never interoperate, even with the same capabilities and `V`:
//!
//! ```compile_fail
//! use strong_caps::strong;
//!
//! strong! {
//!     IntersectionId(u32): Equals;
//!     StreetId(u32): Equals;
//! }
//!
//! let _ = IntersectionId::new(1) == StreetId::new(1);
//! ```
//!
//! ```compile_fail
//! use strong_caps::strong;
//!
//! strong! { CycleCount(i32): Adds; }
//!
//! let _ = CycleCount::new(1) + 1;
//! ```
//!
//! An operator whose capability was not selected does not exist:
//!
//! ```compile_fail
//! use strong_caps::strong;
//!
//! strong! { InstructionCount(i32): Equals; }
//!
//! let _ = InstructionCount::new(1) + InstructionCount::new(2);
//! ```
//!
//! ```compile_fail
//! use strong_caps::strong;
//!
//! strong! { Frequency(f64); }
//!
//! let _ = Frequency::new(1.0) < Frequency::new(2.0);
//! ```
//!
//! [`Modulo`] has no compound form:
//!
//! ```compile_fail
//! use strong_caps::strong;
//!
//! strong! { Lane(u8): Modulo; }
//!
//! let mut lane = Lane::new(7);
//! lane %= Lane::new(4);
//! ```

use core::ops::Not;

/// Result type of a capability comparison.
///
/// Anything built from a `bool` and closed under `!` qualifies; `bool` itself is the
/// usual choice.
pub trait Verdict: From<bool> + Not<Output = Self> {}

impl<T: From<bool> + Not<Output = T>> Verdict for T {}

/// `==` and `!=` between values of the same nominal type.
#[diagnostic::on_unimplemented(
    message = "`{Self}` has not opted into the `Equals` capability",
    label = "equality is not enabled for this nominal type",
    note = "add `Equals` to the capability list of the type's declaration"
)]
pub trait Equals {
    /// Result of [`Strong::equals`](crate::Strong::equals) and
    /// [`Strong::not_equals`](crate::Strong::not_equals).
    type Out: Verdict;
}

/// `<`, `<=`, `>`, `>=` between values of the same nominal type.
///
/// Requires [`Equals`]: an ordering operator in Rust always comes with equality.
#[diagnostic::on_unimplemented(
    message = "`{Self}` has not opted into the `Orders` capability",
    label = "ordering is not enabled for this nominal type",
    note = "add `Orders` to the capability list of the type's declaration"
)]
pub trait Orders: Equals {
    /// Result of [`Strong::less`](crate::Strong::less) and friends.
    type Out: Verdict;
}

macro_rules! marker_capability {
    ($($(#[$meta:meta])* $cap:ident => $message:tt, $label:tt;)*) => {
        $(
            $(#[$meta])*
            #[diagnostic::on_unimplemented(
                message = $message,
                label = $label,
                note = "add the capability to the capability list of the type's declaration"
            )]
            pub trait $cap {}
        )*
    };
}

marker_capability! {
    /// `+` and `+=`; the sum keeps the nominal type.
    Adds => "`{Self}` has not opted into the `Adds` capability",
        "addition is not enabled for this nominal type";
    /// `-` and `-=`; the difference keeps the nominal type.
    Subtracts => "`{Self}` has not opted into the `Subtracts` capability",
        "subtraction is not enabled for this nominal type";
    /// `*` and `*=`; the product keeps the nominal type.
    Multiplies => "`{Self}` has not opted into the `Multiplies` capability",
        "multiplication is not enabled for this nominal type";
    /// `/` and `/=`. Division by zero behaves exactly as it does for `V`.
    Divides => "`{Self}` has not opted into the `Divides` capability",
        "division is not enabled for this nominal type";
    /// `%` only. There is no `%=`.
    Modulo => "`{Self}` has not opted into the `Modulo` capability",
        "modulo is not enabled for this nominal type";
    /// Pre- and post-increment.
    Increments => "`{Self}` has not opted into the `Increments` capability",
        "increment is not enabled for this nominal type";
    /// Pre- and post-decrement.
    Decrements => "`{Self}` has not opted into the `Decrements` capability",
        "decrement is not enabled for this nominal type";
}

#[cfg(feature = "streams")]
marker_capability! {
    /// Textual output: `Display` and [`stream::write`](crate::stream::write).
    Outputs => "`{Self}` has not opted into the `Outputs` capability",
        "textual output is not enabled for this nominal type";
    /// Textual input: `FromStr` and [`stream::read`](crate::stream::read).
    Inputs => "`{Self}` has not opted into the `Inputs` capability",
        "textual input is not enabled for this nominal type";
}
