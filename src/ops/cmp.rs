//! Equality and ordering.
//!
//! Only `==` and `<` reach `V`. Everything else is derived from them:
//!
//! ```text
//! a != b  <=>  !(a == b)
//! a <= b  <=>  !(b < a)
//! a >  b  <=>  b < a
//! a >= b  <=>  !(a < b)
//! ```
//!
//! When `V` is only partially ordered (e.g. a float holding NaN) the derived operators
//! inherit that: `NaN <= x` is `true` here, as `!(x < NaN)`.

use core::cmp::Ordering;
use core::hash::{Hash, Hasher};

use crate::capability::{Equals, Orders};
use crate::strong::{get, Strong};

// =============================================================================
// Equals
// =============================================================================

impl<Tag: Equals, V: PartialEq> PartialEq for Strong<Tag, V> {
    #[inline(always)]
    fn eq(&self, other: &Self) -> bool {
        get(self) == get(other)
    }
    // `ne` keeps the default `!self.eq(other)`.
}

impl<Tag: Equals, V: Eq> Eq for Strong<Tag, V> {}

impl<Tag: Equals, V: Hash> Hash for Strong<Tag, V> {
    #[inline(always)]
    fn hash<H: Hasher>(&self, state: &mut H) {
        get(self).hash(state);
    }
}

impl<Tag: Equals, V: PartialEq> Strong<Tag, V> {
    /// `self == other`, as the tag's chosen result type.
    #[inline(always)]
    pub fn equals(&self, other: &Self) -> <Tag as Equals>::Out {
        From::from(get(self) == get(other))
    }

    /// `!(self == other)`, as the tag's chosen result type.
    #[inline(always)]
    pub fn not_equals(&self, other: &Self) -> <Tag as Equals>::Out {
        !self.equals(other)
    }
}

// =============================================================================
// Orders
// =============================================================================

impl<Tag: Orders, V: PartialOrd> PartialOrd for Strong<Tag, V> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        if self.lt(other) {
            Some(Ordering::Less)
        } else if other.lt(self) {
            Some(Ordering::Greater)
        } else if self.eq(other) {
            Some(Ordering::Equal)
        } else {
            None
        }
    }

    #[inline(always)]
    fn lt(&self, other: &Self) -> bool {
        get(self) < get(other)
    }

    #[inline(always)]
    fn le(&self, other: &Self) -> bool {
        !other.lt(self)
    }

    #[inline(always)]
    fn gt(&self, other: &Self) -> bool {
        other.lt(self)
    }

    #[inline(always)]
    fn ge(&self, other: &Self) -> bool {
        !self.lt(other)
    }
}

impl<Tag: Orders, V: Ord> Ord for Strong<Tag, V> {
    fn cmp(&self, other: &Self) -> Ordering {
        if self.lt(other) {
            Ordering::Less
        } else if other.lt(self) {
            Ordering::Greater
        } else {
            Ordering::Equal
        }
    }
}

impl<Tag: Orders, V: PartialOrd> Strong<Tag, V> {
    /// `self < other`; the only ordering query that reaches `V`.
    #[inline(always)]
    pub fn less(&self, other: &Self) -> <Tag as Orders>::Out {
        From::from(get(self) < get(other))
    }

    /// `!(other < self)`.
    #[inline(always)]
    pub fn less_equal(&self, other: &Self) -> <Tag as Orders>::Out {
        !other.less(self)
    }

    /// `other < self`.
    #[inline(always)]
    pub fn greater(&self, other: &Self) -> <Tag as Orders>::Out {
        other.less(self)
    }

    /// `!(self < other)`.
    #[inline(always)]
    pub fn greater_equal(&self, other: &Self) -> <Tag as Orders>::Out {
        !self.less(other)
    }
}
