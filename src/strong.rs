//! # The wrapper construct
//!
//! `Strong<Tag, V>` stores exactly one `V`. The `Tag` parameter only exists at the type
//! level: two wrappers over the same `V` with different tags are unrelated types.
//!
//! ```text
//! Strong<CycleCountTag, i32>      Strong<InstructionCountTag, i32>
//!          |                                   |
//!          +------------ i32 (same bits) ------+
//!                 (never interchangeable)
//! ```
//!
//! The underlying value is reachable only through named accessors ([`get`],
//! [`get_mut`], [`Strong::into_inner`]). There is no `From`, `Into`, `Deref` or
//! `AsRef` between a wrapper and its `V`:
//!
//! ```compile_fail
//! use strong_caps::strong;
//!
//! strong! { StreetId(u32); }
//!
//! fn takes_raw(_: u32) {}
//! takes_raw(StreetId::new(7));
//! ```
//!
//! ```compile_fail
//! use strong_caps::strong;
//!
//! strong! { StreetId(u32); }
//!
//! fn takes_id(_: StreetId) {}
//! takes_id(7u32);
//! ```
//!
//! ```compile_fail
//! use strong_caps::strong;
//!
//! strong! { StreetId(u32); }
//!
//! let raw: u32 = StreetId::new(7).into();
//! ```
//!
//! A wrapper is default-constructible only if its underlying type is:
//!
//! ```compile_fail
//! use strong_caps::strong;
//!
//! struct NoDefault(u8);
//! strong! { Opaque(NoDefault); }
//!
//! let _ = Opaque::default();
//! ```

use core::fmt;
use core::marker::PhantomData;

/// A nominal type over the underlying value type `V`, discriminated by `Tag`.
///
/// Layout is exactly `V`'s. Auto traits (`Send`, `Sync`, ...) follow `V` and
/// never depend on `Tag`.
#[repr(transparent)]
pub struct Strong<Tag, V> {
    value: V,
    _tag: PhantomData<fn() -> Tag>,
}

impl<Tag, V> Strong<Tag, V> {
    /// Wrap `value`.
    #[inline(always)]
    pub const fn new(value: V) -> Self {
        Self {
            value,
            _tag: PhantomData,
        }
    }

    /// Immutable access to the underlying value.
    #[inline(always)]
    pub const fn get(&self) -> &V {
        &self.value
    }

    /// Mutable access to the underlying value.
    #[inline(always)]
    pub fn get_mut(&mut self) -> &mut V {
        &mut self.value
    }

    /// Unwrap, giving back the underlying value.
    #[inline(always)]
    pub fn into_inner(self) -> V {
        self.value
    }
}

/// Access the underlying value of an immutable strong type.
#[inline(always)]
pub const fn get<Tag, V>(object: &Strong<Tag, V>) -> &V {
    &object.value
}

/// Access the underlying value of a mutable strong type.
#[inline(always)]
pub fn get_mut<Tag, V>(object: &mut Strong<Tag, V>) -> &mut V {
    &mut object.value
}

// Hand-written so that none of these require anything from `Tag`.

impl<Tag, V: Default> Default for Strong<Tag, V> {
    #[inline(always)]
    fn default() -> Self {
        Self::new(V::default())
    }
}

impl<Tag, V: Clone> Clone for Strong<Tag, V> {
    #[inline(always)]
    fn clone(&self) -> Self {
        Self::new(self.value.clone())
    }

    #[inline(always)]
    fn clone_from(&mut self, source: &Self) {
        self.value.clone_from(&source.value);
    }
}

impl<Tag, V: Copy> Copy for Strong<Tag, V> {}

impl<Tag, V: fmt::Debug> fmt::Debug for Strong<Tag, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Strong").field(&self.value).finish()
    }
}
