#![cfg_attr(not(any(feature = "std", test)), no_std)]

// Feature flags handled:
// - std: default, enables std library (and the io half of `stream`)
// - streams: enables the textual I/O capabilities

//! # strong-caps
//!
//! Strong typedefs with opt-in, compile-time operator capabilities.
//!
//! An intersection id and a street id may both be `u32`, but comparing or adding them
//! is a logic error. `strong-caps` gives each its own nominal type over the same
//! representation, and lets each type pick exactly the operators that make sense for
//! it.
//!
//! ## Architecture
//!
//! ```text
//! +-------------------------------------------------------------------+
//! |  Layer 0: Wrapper                                                 |
//! |  - Strong<Tag, V> (repr(transparent)), get / get_mut              |
//! +-------------------------------------------------------------------+
//!                                |
//!                                v
//! +-------------------------------------------------------------------+
//! |  Layer 1: Capabilities (traits implemented by the Tag)            |
//! |  - Equals, Orders, Adds, Subtracts, Multiplies, Divides, Modulo   |
//! |  - Increments, Decrements, [streams] Outputs, Inputs              |
//! +-------------------------------------------------------------------+
//!                                |
//!                                v
//! +-------------------------------------------------------------------+
//! |  Layer 2: Operator forwarding                                     |
//! |  - impl Op for Strong<Tag, V> where Tag: Capability, V: Op        |
//! +-------------------------------------------------------------------+
//!                                |
//!                                v
//! +-------------------------------------------------------------------+
//! |  Layer 3: Declaration sugar                                       |
//! |  - strong! { .. }, #[capabilities(..)]                            |
//! +-------------------------------------------------------------------+
//! ```
//!
//! ## Features
//!
//! - **Zero Runtime Overhead**: the wrapper has `V`'s layout; every operator is an
//!   inlined call to `V`'s own operator
//! - **No Implicit Conversion**: `V` is reached only through [`get`] / [`get_mut`]
//! - **Pick Your Operators**: a missing capability is a compile error, not a panic
//! - **`no_std`**: disable the default `std` feature
//!
//! ## Quick Start
//!
//! ```
//! use strong_caps::prelude::*;
//!
//! strong! {
//!     /// Number of clock cycles.
//!     pub CycleCount(i32): Equals, Orders, Adds, Subtracts, Increments, Decrements;
//!     /// Clock rate in hertz.
//!     pub Frequency(f64);
//!     /// Inverse of a frequency, in seconds.
//!     pub Period(f64);
//! }
//!
//! fn inverse(hertz: &Frequency) -> Period {
//!     Period::new(1.0 / get(hertz))
//! }
//!
//! let cycles = CycleCount::new(50);
//! let more = CycleCount::new(60);
//! assert!(cycles != more);
//! assert!(cycles < more);
//! assert!(cycles == CycleCount::new(35) + CycleCount::new(15));
//!
//! let mut c = cycles + more - cycles;
//! c += CycleCount::new(4);
//! assert_eq!(*get(&(c - more + CycleCount::new(5))), 9);
//!
//! assert_eq!(*get(&inverse(&Frequency::new(2.0))), 0.5);
//! ```
//!
//! Declaring a type by hand is just as valid:
//!
//! ```
//! use strong_caps::{Adds, Equals, Strong};
//!
//! pub enum MetersTag {}
//! impl Equals for MetersTag {
//!     type Out = bool;
//! }
//! impl Adds for MetersTag {}
//!
//! pub type Meters = Strong<MetersTag, f64>;
//!
//! assert!(Meters::new(1.5) + Meters::new(1.5) == Meters::new(3.0));
//! ```

// Allow `::strong_caps` to work inside the crate itself
extern crate self as strong_caps;

// =============================================================================
// Layer 0: Wrapper
// =============================================================================
pub mod strong;

// =============================================================================
// Layer 1: Capabilities
// =============================================================================
pub mod capability;

// =============================================================================
// Layer 2: Operator Forwarding
// =============================================================================
pub mod ops;

#[cfg(feature = "streams")]
pub mod stream;

// =============================================================================
// Re-exports at Crate Root
// =============================================================================

pub use crate::strong::{get, get_mut, Strong};
pub use crate::capability::{
    Verdict,
    Equals, Orders,
    Adds, Subtracts, Multiplies, Divides, Modulo,
    Increments, Decrements,
};
#[cfg(feature = "streams")]
pub use crate::capability::{Inputs, Outputs};
pub use crate::ops::{Decrementable, Incrementable};

// Re-export proc-macros
pub use macros::{capabilities, strong};

// =============================================================================
// Declarative Macro Bridge for the stream capabilities
// =============================================================================
//
// The proc-macros cannot see this crate's features, so they route `Outputs` and
// `Inputs` through this bridge, which is compiled according to `streams`.

/// Internal macro bridge - DO NOT USE DIRECTLY.
/// Use `strong!` or `#[capabilities]` instead.
#[cfg(feature = "streams")]
#[macro_export]
#[doc(hidden)]
macro_rules! __impl_stream_capability {
    ($tag:ty, $cap:ident) => {
        impl $crate::$cap for $tag {}
    };
}

/// Internal macro bridge - DO NOT USE DIRECTLY.
/// Use `strong!` or `#[capabilities]` instead.
#[cfg(not(feature = "streams"))]
#[macro_export]
#[doc(hidden)]
macro_rules! __impl_stream_capability {
    ($tag:ty, $cap:ident) => {
        ::core::compile_error!(::core::concat!(
            "the `",
            ::core::stringify!($cap),
            "` capability requires the `streams` feature of strong-caps"
        ));
    };
}

/// Common items for declaring and using nominal types.
pub mod prelude {
    pub use crate::strong::{get, get_mut, Strong};
    pub use crate::capability::{
        Equals, Orders,
        Adds, Subtracts, Multiplies, Divides, Modulo,
        Increments, Decrements,
    };
    #[cfg(feature = "streams")]
    pub use crate::capability::{Inputs, Outputs};
    pub use macros::{capabilities, strong};
}
