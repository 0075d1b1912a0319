//! # Operator forwarding
//!
//! Every impl here reaches the underlying values through [`get`](crate::get) /
//! [`get_mut`](crate::get_mut), applies `V`'s own operator and, for arithmetic,
//! re-wraps the result into the same nominal type.
//!
//! - `cmp`: equality and ordering, with `!=`, `<=`, `>`, `>=` derived from `==` and `<`.
//! - `arith`: `+ - * / %` and the compound assignments.
//! - `step`: pre/post increment and decrement.

mod arith;
mod cmp;
mod step;

pub use step::{Decrementable, Incrementable};
