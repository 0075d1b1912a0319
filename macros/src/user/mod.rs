//! User-facing macro implementations
//!
//! | Macro | Usage | Purpose |
//! |-------|-------|---------|
//! | `strong!` | function macro | Declare tag + capabilities + nominal type alias |
//! | `#[capabilities]` | on a tag struct/enum | Attach capabilities to a hand-written tag |

mod capabilities;
mod strong_decl;

pub use capabilities::expand_capabilities;
pub use strong_decl::{expand_strong, StrongInput};
