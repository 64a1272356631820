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

use crate::config::{PrependMode, RangeConfig, ReplaceMode};
use crate::interval::Interval;
use crate::result::{RangeSetError, RangeSetResult};
use std::cmp::Ordering;
use std::hash::{Hash, Hasher};
use tracing::{debug, trace, warn};

/// A `RangeCollection` maps a set of non-overlapping, inclusive intervals to values.
///
/// Internally the intervals are kept in a vector sorted by [`Interval::compare`].
/// Because no two stored intervals ever collide, that relation partitions the
/// vector around any candidate into "entirely below", "colliding" and
/// "entirely above" runs, which is what every lookup below relies on.
///
/// Overlaps are never merged or trimmed: the first interval to claim a point
/// keeps it until it is removed or replaced.
///
/// # Examples
///
/// ```rust
/// use rangeset::RangeCollection;
///
/// let mut set = RangeCollection::new();
///
/// assert!(set.insert_range(0, 9, "a").unwrap());
/// assert!(set.insert_range(10, 19, "b").unwrap());
///
/// // Overlaps [0, 9], so it is rejected
/// assert!(!set.insert_range(5, 14, "c").unwrap());
///
/// assert_eq!(set.get(5), Some(&"a"));
/// assert_eq!(set.get(15), Some(&"b"));
/// assert_eq!(set.get(20), None);
/// ```
///
/// Equality and hashing consider only the stored intervals, not the
/// configuration.
pub struct RangeCollection<V> {
    intervals: Vec<Interval<V>>,
    config: RangeConfig,
}

impl<V> RangeCollection<V> {
    /// Creates an empty `RangeCollection` with the default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(RangeConfig::default())
    }

    /// Creates an empty `RangeCollection` with the given configuration.
    #[must_use]
    pub fn with_config(config: RangeConfig) -> Self {
        RangeCollection {
            intervals: Vec::new(),
            config,
        }
    }

    /// Creates a `RangeCollection` from an initial batch of intervals.
    ///
    /// The batch does not need to be sorted. An interval colliding with one
    /// accepted earlier in the batch is dropped.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use rangeset::{Interval, RangeCollection};
    ///
    /// let set = RangeCollection::from_intervals([
    ///     Interval::new(20, 29, 'c').unwrap(),
    ///     Interval::new(0, 9, 'a').unwrap(),
    ///     Interval::new(5, 25, 'x').unwrap(),
    /// ]);
    ///
    /// assert_eq!(set.len(), 2);
    /// assert_eq!(set.get(25), Some(&'c'));
    /// ```
    pub fn from_intervals<I>(intervals: I) -> Self
    where
        I: IntoIterator<Item = Interval<V>>,
    {
        Self::from_intervals_with_config(intervals, RangeConfig::default())
    }

    /// Creates a `RangeCollection` with the given configuration from an
    /// initial batch of intervals.
    ///
    /// Batch handling matches [`from_intervals`](Self::from_intervals).
    pub fn from_intervals_with_config<I>(intervals: I, config: RangeConfig) -> Self
    where
        I: IntoIterator<Item = Interval<V>>,
    {
        let mut set = Self::with_config(config);
        for interval in intervals {
            set.insert(interval);
        }
        set
    }

    /// The configuration this collection was created with.
    #[must_use]
    pub fn config(&self) -> RangeConfig {
        self.config
    }

    /// Number of stored intervals.
    #[must_use]
    pub fn len(&self) -> usize {
        self.intervals.len()
    }

    /// Returns `true` if no intervals are stored.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.intervals.is_empty()
    }

    /// Iterates the stored intervals in ascending order.
    pub fn iter(&self) -> Iter<'_, V> {
        Iter {
            inner: self.intervals.iter(),
        }
    }

    /// Inserts an interval unless it collides with one already stored.
    ///
    /// Returns `true` if the interval was stored and `false` if it was rejected.
    /// A rejected insert leaves the collection untouched.
    pub fn insert(&mut self, interval: Interval<V>) -> bool {
        let index = self.lower_index(&interval);
        if let Some(existing) = self.colliding_at(index, &interval) {
            debug!(
                min = interval.min(),
                max = interval.max(),
                existing_min = existing.min(),
                existing_max = existing.max(),
                "rejected overlapping interval"
            );
            return false;
        }

        trace!(min = interval.min(), max = interval.max(), "inserted interval");
        self.intervals.insert(index, interval);
        true
    }

    /// Builds an interval from its parts and inserts it.
    ///
    /// # Errors
    ///
    /// Returns [`RangeSetError::InvalidInterval`] when `min > max`.
    pub fn insert_range(&mut self, min: i64, max: i64, value: V) -> RangeSetResult<bool> {
        Ok(self.insert(Interval::new(min, max, value)?))
    }

    /// Replaces the lowest stored interval colliding with `interval`.
    ///
    /// At most one stored interval is ever displaced. If nothing collides the
    /// interval is inserted as with [`insert`](Self::insert). Otherwise the
    /// lowest colliding interval is removed and the candidate is passed to
    /// [`insert`](Self::insert), so a candidate that also collides with a
    /// second stored interval is rejected after the first one is gone.
    /// Under [`ReplaceMode::Exclusive`] such a candidate leaves the collection
    /// untouched instead.
    ///
    /// Returns `true` if the candidate was stored.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use rangeset::{Interval, RangeCollection};
    ///
    /// let mut set = RangeCollection::new();
    /// set.insert_range(0, 9, "a").unwrap();
    ///
    /// assert!(set.replace(Interval::new(5, 14, "b").unwrap()));
    /// assert_eq!(set.len(), 1);
    /// assert_eq!(set.get(2), None);
    /// assert_eq!(set.get(12), Some(&"b"));
    /// ```
    pub fn replace(&mut self, interval: Interval<V>) -> bool {
        let index = self.lower_index(&interval);
        if self.colliding_at(index, &interval).is_none() {
            return self.insert(interval);
        }

        // Colliding intervals form a contiguous run, so a second collision sits right after the first
        if self.config.replace_mode == ReplaceMode::Exclusive {
            if let Some(next) = self.colliding_at(index + 1, &interval) {
                warn!(
                    min = interval.min(),
                    max = interval.max(),
                    next_min = next.min(),
                    next_max = next.max(),
                    "replacement collides with more than one interval"
                );
                return false;
            }
        }

        let displaced = self.intervals.remove(index);
        trace!(
            min = interval.min(),
            max = interval.max(),
            displaced_min = displaced.min(),
            displaced_max = displaced.max(),
            "displaced interval"
        );
        self.insert(interval)
    }

    /// Inserts an interval starting just above the current highest interval.
    ///
    /// The new interval is `[last_max + 1, last_max + 1 + width]`, where
    /// `last_max` is the upper bound of the highest stored interval, or `0`
    /// when the collection is empty.
    ///
    /// # Errors
    ///
    /// Returns [`RangeSetError::InvalidInterval`] for a negative `width` and
    /// [`RangeSetError::BoundOverflow`] if the bounds do not fit in an `i64`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use rangeset::RangeCollection;
    ///
    /// let mut set = RangeCollection::new();
    /// assert!(set.append_after_max(9, "a").unwrap());
    /// assert!(set.append_after_max(4, "b").unwrap());
    ///
    /// assert_eq!(set.get(1), Some(&"a"));
    /// assert_eq!(set.get(10), Some(&"a"));
    /// assert_eq!(set.get(11), Some(&"b"));
    /// assert_eq!(set.max_bound(), 15);
    /// ```
    pub fn append_after_max(&mut self, width: i64, value: V) -> RangeSetResult<bool> {
        let last_max = self.intervals.last().map_or(0, Interval::max);
        let min = last_max
            .checked_add(1)
            .ok_or(RangeSetError::BoundOverflow)?;
        let max = min.checked_add(width).ok_or(RangeSetError::BoundOverflow)?;
        Ok(self.insert(Interval::new(min, max, value)?))
    }

    /// Inserts an interval ending just below a reference interval.
    ///
    /// The new interval is `[reference_max - width, reference_max]`, where
    /// `reference_max` is one below the lower bound of the reference interval,
    /// or `0` when the collection is empty. The reference interval is the
    /// highest stored interval under [`PrependMode::Legacy`] and the lowest
    /// under [`PrependMode::Symmetric`].
    ///
    /// # Errors
    ///
    /// Returns [`RangeSetError::InvalidInterval`] for a negative `width` and
    /// [`RangeSetError::BoundOverflow`] if the bounds do not fit in an `i64`.
    pub fn prepend_before_min(&mut self, width: i64, value: V) -> RangeSetResult<bool> {
        let reference = match self.config.prepend_mode {
            PrependMode::Legacy => self.intervals.last(),
            PrependMode::Symmetric => self.intervals.first(),
        };
        let max = match reference {
            Some(reference) => reference
                .min()
                .checked_sub(1)
                .ok_or(RangeSetError::BoundOverflow)?,
            None => 0,
        };
        let min = max.checked_sub(width).ok_or(RangeSetError::BoundOverflow)?;
        Ok(self.insert(Interval::new(min, max, value)?))
    }

    /// Removes and returns the interval containing `point`, if any.
    pub fn remove_at(&mut self, point: i64) -> Option<Interval<V>> {
        let index = self.index_of(point)?;
        let removed = self.intervals.remove(index);
        debug!(
            point,
            min = removed.min(),
            max = removed.max(),
            "removed interval"
        );
        Some(removed)
    }

    /// Removes and returns the lowest interval whose value equals `value`.
    pub fn remove_value(&mut self, value: &V) -> Option<Interval<V>>
    where
        V: PartialEq,
    {
        let index = self
            .intervals
            .iter()
            .position(|interval| interval.value() == value)?;
        let removed = self.intervals.remove(index);
        debug!(
            min = removed.min(),
            max = removed.max(),
            "removed interval by value"
        );
        Some(removed)
    }

    /// Returns the value mapped to `point`, if any interval contains it.
    #[must_use]
    pub fn get(&self, point: i64) -> Option<&V> {
        self.index_of(point)
            .map(|index| self.intervals[index].value())
    }

    /// Returns an independent copy of the stored intervals in ascending order.
    #[must_use]
    pub fn snapshot(&self) -> Vec<Interval<V>>
    where
        V: Clone,
    {
        self.intervals.clone()
    }

    /// The lowest covered point, or `i64::MAX` when the collection is empty.
    ///
    /// Gaps between intervals are not taken into account.
    #[must_use]
    pub fn min_bound(&self) -> i64 {
        self.intervals.first().map_or(i64::MAX, Interval::min)
    }

    /// The highest covered point, or `i64::MIN` when the collection is empty.
    ///
    /// Gaps between intervals are not taken into account.
    #[must_use]
    pub fn max_bound(&self) -> i64 {
        self.intervals.last().map_or(i64::MIN, Interval::max)
    }

    /// Index of the first stored interval not entirely below `interval`.
    fn lower_index<W>(&self, interval: &Interval<W>) -> usize {
        self.intervals
            .partition_point(|probe| probe.compare(interval) == Ordering::Less)
    }

    /// The stored interval at `index`, if it collides with `interval`.
    fn colliding_at<W>(&self, index: usize, interval: &Interval<W>) -> Option<&Interval<V>> {
        self.intervals
            .get(index)
            .filter(|existing| existing.collides(interval))
    }

    /// Index of the stored interval containing `point`.
    fn index_of(&self, point: i64) -> Option<usize> {
        let index = self
            .intervals
            .partition_point(|interval| interval.max() < point);
        self.intervals
            .get(index)
            .filter(|interval| interval.contains(point))
            .map(|_| index)
    }
}

impl<V: PartialEq> PartialEq for RangeCollection<V> {
    fn eq(&self, other: &Self) -> bool {
        self.intervals == other.intervals
    }
}

impl<V: Eq> Eq for RangeCollection<V> {}

impl<V: Hash> Hash for RangeCollection<V> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.intervals.hash(state);
    }
}

impl<V> Default for RangeCollection<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V: Clone> Clone for RangeCollection<V> {
    /// Copies every interval into a fresh collection through [`insert`](Self::insert).
    fn clone(&self) -> Self {
        let mut clone = Self::with_config(self.config);
        for interval in &self.intervals {
            clone.insert(interval.clone());
        }
        clone
    }
}

impl<V> FromIterator<Interval<V>> for RangeCollection<V> {
    fn from_iter<I: IntoIterator<Item = Interval<V>>>(iter: I) -> Self {
        Self::from_intervals(iter)
    }
}

impl<'a, V> IntoIterator for &'a RangeCollection<V> {
    type Item = &'a Interval<V>;
    type IntoIter = Iter<'a, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<V: std::fmt::Debug> std::fmt::Debug for RangeCollection<V> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_map()
            .entries(
                self.intervals
                    .iter()
                    .map(|interval| (interval.min()..=interval.max(), interval.value())),
            )
            .finish()
    }
}

/// An in-order iterator over the stored intervals.
#[derive(Clone, Debug)]
pub struct Iter<'a, V> {
    inner: std::slice::Iter<'a, Interval<V>>,
}

impl<'a, V> Iterator for Iter<'a, V> {
    type Item = &'a Interval<V>;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<V> DoubleEndedIterator for Iter<'_, V> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back()
    }
}

impl<V> ExactSizeIterator for Iter<'_, V> {}
