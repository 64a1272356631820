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

//! Uniform random sampling over the span of a [`RangeCollection`].

use crate::ranges::RangeCollection;
use crate::result::{RangeSetError, RangeSetResult};
use rand::Rng;
use tracing::trace;

/// A source of uniformly distributed integers.
///
/// Every [`rand::Rng`] is a `UniformSource`, so a seeded generator such as
/// `rand_chacha::ChaCha8Rng` can be injected wherever determinism matters.
pub trait UniformSource {
    /// Draws an integer from `lo..=hi`. Callers guarantee `lo <= hi`.
    fn next_in(&mut self, lo: i64, hi: i64) -> i64;
}

impl<R: Rng> UniformSource for R {
    fn next_in(&mut self, lo: i64, hi: i64) -> i64 {
        self.gen_range(lo..=hi)
    }
}

/// A generator producing random values between a minimum and a maximum.
pub trait BoundedRandom {
    /// The type of the bounds.
    type Bound;
    /// The type of the generated values.
    type Output;

    /// Produces the next value.
    fn generate(&mut self) -> RangeSetResult<Self::Output>;

    /// The current lower bound.
    fn minimum(&self) -> Self::Bound;

    /// The current upper bound.
    fn maximum(&self) -> Self::Bound;

    /// Requests a new lower bound.
    fn set_minimum(&mut self, minimum: Self::Bound);

    /// Requests a new upper bound.
    fn set_maximum(&mut self, maximum: Self::Bound);
}

/// Draws random values from a [`RangeCollection`].
///
/// Each draw picks a point uniformly from `min_bound..=max_bound` of the
/// borrowed collection and resolves it with [`RangeCollection::get`], so wider
/// intervals are proportionally more likely and points in gaps resolve to
/// `None`.
///
/// # Examples
///
/// ```rust
/// use rand::SeedableRng;
/// use rand_chacha::ChaCha8Rng;
/// use rangeset::{RangeCollection, RangeSampler};
///
/// let mut set = RangeCollection::new();
/// set.insert_range(0, 49, "heads").unwrap();
/// set.insert_range(50, 99, "tails").unwrap();
///
/// let mut sampler = RangeSampler::new(&set, ChaCha8Rng::seed_from_u64(7));
/// let value = sampler.sample().unwrap();
/// assert!(matches!(value, Some(&"heads") | Some(&"tails")));
/// ```
pub struct RangeSampler<'a, V, R> {
    ranges: &'a RangeCollection<V>,
    source: R,
}

impl<'a, V, R: UniformSource> RangeSampler<'a, V, R> {
    /// Creates a sampler over `ranges` drawing from `source`.
    pub fn new(ranges: &'a RangeCollection<V>, source: R) -> Self {
        Self { ranges, source }
    }

    /// Draws a random point and returns the value mapped to it.
    ///
    /// # Errors
    ///
    /// Returns [`RangeSetError::EmptyRange`] if the collection holds no intervals.
    pub fn sample(&mut self) -> RangeSetResult<Option<&'a V>> {
        let (lo, hi) = (self.ranges.min_bound(), self.ranges.max_bound());
        if lo > hi {
            return Err(RangeSetError::EmptyRange);
        }

        let point = self.source.next_in(lo, hi);
        trace!(point, lo, hi, "sampled point");
        Ok(self.ranges.get(point))
    }

    /// The lowest point of the sampled collection.
    #[must_use]
    pub fn min_bound(&self) -> i64 {
        self.ranges.min_bound()
    }

    /// The highest point of the sampled collection.
    #[must_use]
    pub fn max_bound(&self) -> i64 {
        self.ranges.max_bound()
    }

    /// Does nothing; bounds always follow the collection.
    pub fn set_min_bound(&mut self, _min: i64) {}

    /// Does nothing; bounds always follow the collection.
    pub fn set_max_bound(&mut self, _max: i64) {}

    /// Consumes the sampler, returning its random source.
    pub fn into_source(self) -> R {
        self.source
    }
}

impl<'a, V, R: UniformSource> BoundedRandom for RangeSampler<'a, V, R> {
    type Bound = i64;
    type Output = Option<&'a V>;

    fn generate(&mut self) -> RangeSetResult<Self::Output> {
        self.sample()
    }

    fn minimum(&self) -> i64 {
        self.min_bound()
    }

    fn maximum(&self) -> i64 {
        self.max_bound()
    }

    fn set_minimum(&mut self, minimum: i64) {
        self.set_min_bound(minimum);
    }

    fn set_maximum(&mut self, maximum: i64) {
        self.set_max_bound(maximum);
    }
}
