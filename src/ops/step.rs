//! Increment and decrement.
//!
//! Rust has no `++`/`--`, so the underlying type says how to step through
//! [`Incrementable`] / [`Decrementable`]. Primitive integers step by `1`, floats by
//! `1.0`; overflow behaves as `+= 1` does for that type.
//!
//! Post-increment is built on pre-increment: it steps the value, then returns a copy
//! of the stepped value.

use crate::capability::{Decrements, Increments};
use crate::strong::{get_mut, Strong};

/// An underlying type that can be stepped up by one unit in place.
pub trait Incrementable {
    fn increment(&mut self);
}

/// An underlying type that can be stepped down by one unit in place.
pub trait Decrementable {
    fn decrement(&mut self);
}

macro_rules! impl_step {
    ($one:literal => $($t:ty),* $(,)?) => {
        $(
            impl Incrementable for $t {
                #[inline(always)]
                fn increment(&mut self) {
                    *self += $one;
                }
            }

            impl Decrementable for $t {
                #[inline(always)]
                fn decrement(&mut self) {
                    *self -= $one;
                }
            }
        )*
    };
}

impl_step!(1 => u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize);
impl_step!(1.0 => f32, f64);

impl<Tag: Increments, V: Incrementable> Strong<Tag, V> {
    /// Pre-increment: steps the value and returns the stepped object.
    #[inline(always)]
    pub fn increment(&mut self) -> &mut Self {
        Incrementable::increment(get_mut(self));
        self
    }

    /// Post-increment: runs [`increment`](Self::increment), then returns a copy of the
    /// now-stepped object.
    #[inline(always)]
    pub fn post_increment(&mut self) -> Self
    where
        V: Clone,
    {
        self.increment().clone()
    }
}

impl<Tag: Decrements, V: Decrementable> Strong<Tag, V> {
    /// Pre-decrement: steps the value and returns the stepped object.
    #[inline(always)]
    pub fn decrement(&mut self) -> &mut Self {
        Decrementable::decrement(get_mut(self));
        self
    }

    /// Post-decrement: runs [`decrement`](Self::decrement), then returns a copy of the
    /// now-stepped object.
    #[inline(always)]
    pub fn post_decrement(&mut self) -> Self
    where
        V: Clone,
    {
        self.decrement().clone()
    }
}
