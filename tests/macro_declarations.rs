#![allow(dead_code)]

use core::mem::{align_of, size_of};
use core::ops::{Add, Not};

use strong_caps::prelude::*;
use strong_caps::{Strong, Verdict};

// =============================================================================
// 1. Visibility and Attributes
// =============================================================================

mod ids {
    use strong_caps::strong;

    strong! {
        /// Identifies an intersection on the map.
        pub IntersectionId(u32): Equals, Orders;
        /// Identifies a street on the map.
        pub StreetId(u32): Equals, Orders;
        pub(crate) Internal(u8);
    }
}

use ids::{IntersectionId, IntersectionIdTag, StreetId};

#[test]
fn test_public_declarations_are_usable_outside() {
    let a = IntersectionId::new(7);
    let b: Strong<IntersectionIdTag, u32> = Strong::new(7);
    assert_eq!(a, b);
    assert!(StreetId::new(1) < StreetId::new(2));
    assert_eq!(*get(&ids::Internal::new(3)), 3);
}

#[test]
fn test_same_representation_same_layout() {
    assert_eq!(size_of::<IntersectionId>(), size_of::<u32>());
    assert_eq!(size_of::<StreetId>(), size_of::<u32>());
    assert_eq!(align_of::<IntersectionId>(), align_of::<u32>());
}

// =============================================================================
// 2. Custom Comparison Results
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq)]
struct Answer(bool);

impl From<bool> for Answer {
    fn from(b: bool) -> Self {
        Answer(b)
    }
}

impl Not for Answer {
    type Output = Answer;
    fn not(self) -> Answer {
        Answer(!self.0)
    }
}

strong! {
    Reading(i16): Equals<Answer>, Orders<Answer>;
}

fn check<R: Verdict + PartialEq + core::fmt::Debug>(got: R, want: bool) {
    assert_eq!(got, R::from(want));
}

#[test]
fn test_custom_verdict_through_macro() {
    let (lo, hi) = (Reading::new(-3), Reading::new(12));
    check(lo.equals(&hi), false);
    check(lo.not_equals(&hi), true);
    check(lo.less(&hi), true);
    check(lo.less_equal(&hi), true);
    check(lo.greater(&hi), false);
    check(lo.greater_equal(&hi), false);
    assert!(lo < hi);
}

// =============================================================================
// 3. Hand-written Tags
// =============================================================================

#[capabilities(Equals, Adds, Multiplies)]
pub enum MetersTag {}

pub type Meters = Strong<MetersTag, f64>;

#[capabilities(Orders)]
pub struct RankTag;

// `Orders` needs `Equals`; here it is written out by hand.
impl Equals for RankTag {
    type Out = bool;
}

pub type Rank = Strong<RankTag, u8>;

#[test]
fn test_attribute_tag() {
    assert_eq!(Meters::new(1.5) + Meters::new(2.5), Meters::new(4.0));
    assert_eq!(Meters::new(1.5) * Meters::new(2.0), Meters::new(3.0));
    assert!(Rank::new(1) < Rank::new(2));
}

// =============================================================================
// 4. Non-Copy Underlying Types
// =============================================================================

#[derive(Debug, Clone, PartialEq, Default)]
pub struct Poly(Vec<i64>);

impl Add for Poly {
    type Output = Poly;
    fn add(self, rhs: Poly) -> Poly {
        &self + &rhs
    }
}

impl<'a> Add<&'a Poly> for &'a Poly {
    type Output = Poly;
    fn add(self, rhs: &'a Poly) -> Poly {
        let len = self.0.len().max(rhs.0.len());
        let coeff = |p: &Poly, i: usize| p.0.get(i).copied().unwrap_or(0);
        Poly((0..len).map(|i| coeff(self, i) + coeff(rhs, i)).collect())
    }
}

strong! {
    Signal(Poly): Equals, Adds;
}

#[test]
fn test_non_copy_by_reference() {
    let a = Signal::new(Poly(vec![1, 2]));
    let b = Signal::new(Poly(vec![10, 20, 30]));

    let sum = &a + &b;
    assert_eq!(sum, Signal::new(Poly(vec![11, 22, 30])));
    // Both operands are still alive.
    assert_eq!(a.get().0.len() + b.get().0.len(), 5);

    let owned = a.clone() + b;
    assert_eq!(owned, sum);
    assert_eq!(Signal::default(), Signal::new(Poly::default()));
}

// =============================================================================
// 5. Hash-based Containers
// =============================================================================

#[test]
fn test_equality_types_are_hash_keys() {
    use std::collections::HashSet;

    let ids: HashSet<StreetId> = [1, 2, 2, 3].into_iter().map(StreetId::new).collect();
    assert_eq!(ids.len(), 3);
    assert!(ids.contains(&StreetId::new(2)));
}
