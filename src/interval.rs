//
// Copyright 2025 Hans W. Uhlig. All Rights Reserved.
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//      http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.
//

//! Closed integer intervals carrying a single value.

use crate::result::{RangeSetError, RangeSetResult};
use std::cmp::Ordering;

/// An immutable, closed interval `[min, max]` mapped to one value.
///
/// Both bounds are inclusive. Cloning an `Interval` clones its value, so the
/// value type decides whether a copy is deep (an owned `String`) or shared
/// (an `Arc<T>`).
///
/// # Examples
///
/// ```rust
/// use rangeset::Interval;
///
/// let interval = Interval::new(10, 19, "teens").unwrap();
/// assert!(interval.contains(10));
/// assert!(interval.contains(19));
/// assert!(!interval.contains(20));
///
/// // Inverted bounds are rejected up front
/// assert!(Interval::new(5, 1, "bad").is_err());
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Interval<V> {
    min: i64,
    max: i64,
    value: V,
}

impl<V> Interval<V> {
    /// Creates a new interval covering `min..=max`.
    ///
    /// # Errors
    ///
    /// Returns [`RangeSetError::InvalidInterval`] when `min > max`.
    pub fn new(min: i64, max: i64, value: V) -> RangeSetResult<Self> {
        if min > max {
            return Err(RangeSetError::InvalidInterval { min, max });
        }
        Ok(Self { min, max, value })
    }

    /// The inclusive lower bound.
    #[must_use]
    pub fn min(&self) -> i64 {
        self.min
    }

    /// The inclusive upper bound.
    #[must_use]
    pub fn max(&self) -> i64 {
        self.max
    }

    /// The value mapped by this interval.
    #[must_use]
    pub fn value(&self) -> &V {
        &self.value
    }

    /// Consumes the interval, returning its value.
    #[must_use]
    pub fn into_value(self) -> V {
        self.value
    }

    /// Consumes the interval, returning `(min, max, value)`.
    #[must_use]
    pub fn into_parts(self) -> (i64, i64, V) {
        (self.min, self.max, self.value)
    }

    /// Returns `true` if `point` lies within `min..=max`.
    #[must_use]
    pub fn contains(&self, point: i64) -> bool {
        point >= self.min && point <= self.max
    }

    /// Returns `true` if the two intervals share at least one point.
    ///
    /// Either interval having a bound inside the other counts as a collision,
    /// which also covers one interval fully enclosing the other.
    #[must_use]
    pub fn collides<W>(&self, other: &Interval<W>) -> bool {
        self.contains(other.min)
            || self.contains(other.max)
            || other.contains(self.min)
            || other.contains(self.max)
    }

    /// Orders two intervals for placement in a sorted, disjoint sequence.
    ///
    /// Colliding intervals compare `Equal`. Otherwise the interval lying
    /// entirely below the other is `Less`. This is not a total order once
    /// overlaps exist, so it is only meaningful against a sequence whose
    /// members are already pairwise disjoint.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use rangeset::Interval;
    /// use std::cmp::Ordering;
    ///
    /// let low = Interval::new(0, 9, ()).unwrap();
    /// let high = Interval::new(10, 19, ()).unwrap();
    /// let wide = Interval::new(5, 14, ()).unwrap();
    ///
    /// assert_eq!(low.compare(&high), Ordering::Less);
    /// assert_eq!(high.compare(&low), Ordering::Greater);
    /// assert_eq!(low.compare(&wide), Ordering::Equal);
    /// ```
    #[must_use]
    pub fn compare<W>(&self, other: &Interval<W>) -> Ordering {
        if self.contains(other.min) || self.contains(other.max) {
            return Ordering::Equal;
        }
        if self.max < other.min {
            Ordering::Less
        } else if self.min > other.max {
            Ordering::Greater
        } else {
            // other encloses self without self holding either of its bounds
            Ordering::Equal
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn iv(min: i64, max: i64) -> Interval<()> {
        Interval::new(min, max, ()).unwrap()
    }

    #[test]
    fn test_new_rejects_inverted_bounds() {
        assert_eq!(
            Interval::new(3, 2, ()),
            Err(RangeSetError::InvalidInterval { min: 3, max: 2 })
        );
    }

    #[test]
    fn test_single_point_interval() {
        let interval = iv(7, 7);
        assert!(interval.contains(7));
        assert!(!interval.contains(6));
        assert!(!interval.contains(8));
    }

    #[test]
    fn test_contains_extremes() {
        let interval = iv(i64::MIN, i64::MAX);
        assert!(interval.contains(i64::MIN));
        assert!(interval.contains(0));
        assert!(interval.contains(i64::MAX));
    }

    #[test]
    fn test_compare_disjoint() {
        assert_eq!(iv(0, 9).compare(&iv(10, 19)), Ordering::Less);
        assert_eq!(iv(10, 19).compare(&iv(0, 9)), Ordering::Greater);
        assert_eq!(iv(-20, -11).compare(&iv(-10, -1)), Ordering::Less);
    }

    #[test]
    fn test_compare_overlapping() {
        // Partial overlap on either side
        assert_eq!(iv(0, 9).compare(&iv(5, 14)), Ordering::Equal);
        assert_eq!(iv(5, 14).compare(&iv(0, 9)), Ordering::Equal);
        // Touching at a single shared point
        assert_eq!(iv(0, 9).compare(&iv(9, 12)), Ordering::Equal);
        // Exact duplicate
        assert_eq!(iv(0, 9).compare(&iv(0, 9)), Ordering::Equal);
    }

    #[test]
    fn test_compare_enclosed() {
        // self holds both of other's bounds
        assert_eq!(iv(0, 100).compare(&iv(40, 60)), Ordering::Equal);
        // other encloses self; falls through to the final branch
        assert_eq!(iv(40, 60).compare(&iv(0, 100)), Ordering::Equal);
    }

    #[test]
    fn test_collides_is_symmetric() {
        let pairs = [
            (iv(0, 9), iv(5, 14), true),
            (iv(0, 100), iv(40, 60), true),
            (iv(0, 9), iv(10, 19), false),
            (iv(0, 0), iv(0, 0), true),
            (iv(-5, -1), iv(0, 3), false),
        ];
        for (a, b, expected) in pairs {
            assert_eq!(a.collides(&b), expected, "{a:?} vs {b:?}");
            assert_eq!(b.collides(&a), expected, "{b:?} vs {a:?}");
        }
    }

    #[test]
    fn test_clone_copies_owned_value() {
        let original = Interval::new(0, 4, String::from("alpha")).unwrap();
        let copy = original.clone();
        assert_eq!(original, copy);
        assert_ne!(original.value().as_ptr(), copy.value().as_ptr());
    }

    #[test]
    fn test_clone_shares_reference_counted_value() {
        use std::sync::Arc;

        let original = Interval::new(0, 4, Arc::new(42)).unwrap();
        let copy = original.clone();
        assert!(Arc::ptr_eq(original.value(), copy.value()));
    }

    #[test]
    fn test_into_parts() {
        let interval = Interval::new(-3, 3, 'x').unwrap();
        assert_eq!(interval.into_parts(), (-3, 3, 'x'));
    }
}
