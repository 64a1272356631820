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

//! Configuration for [`RangeCollection`](crate::RangeCollection).

/// Selects which stored interval `prepend_before_min` grows from.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum PrependMode {
    /// Grow from the lower bound of the *last* (highest) stored interval.
    ///
    /// This reads the same interval `append_after_max` does, so once more
    /// than one interval is stored the new interval lands just below the
    /// highest one rather than below the lowest.
    #[default]
    Legacy,
    /// Grow from the lower bound of the *first* (lowest) stored interval.
    Symmetric,
}

/// Selects how `replace` treats a candidate colliding with several intervals.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum ReplaceMode {
    /// Remove the lowest colliding interval, then insert the candidate.
    ///
    /// If the candidate still collides with another stored interval the
    /// insert is rejected, leaving the lowest collision removed.
    #[default]
    FirstCollision,
    /// Leave the collection untouched unless exactly one interval collides.
    Exclusive,
}

/// Tunables for a [`RangeCollection`](crate::RangeCollection).
///
/// # Examples
///
/// ```rust
/// use rangeset::{PrependMode, RangeCollection, RangeConfig};
///
/// let config = RangeConfig {
///     prepend_mode: PrependMode::Symmetric,
///     ..RangeConfig::default()
/// };
/// let mut set: RangeCollection<&str> = RangeCollection::with_config(config);
/// assert!(set.insert_range(0, 9, "a").unwrap());
/// assert!(set.insert_range(20, 29, "b").unwrap());
///
/// // Symmetric mode grows below the lowest interval
/// assert!(set.prepend_before_min(4, "z").unwrap());
/// assert_eq!(set.min_bound(), -5);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct RangeConfig {
    /// Reference interval used by `prepend_before_min`.
    pub prepend_mode: PrependMode,
    /// Handling of multi-interval collisions in `replace`.
    pub replace_mode: ReplaceMode,
}
