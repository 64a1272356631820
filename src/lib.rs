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

//! # RangeSet
//!
//! A Rust library mapping non-overlapping, inclusive integer intervals to values, with a
//! sampler that draws uniformly random points across the covered span.
//!
//! ## Key Features
//!
//! - **First-writer-wins insertion**: An interval colliding with a stored one is rejected, never merged or trimmed
//! - **Single-collision replacement**: `replace` swaps out the lowest colliding interval
//! - **Boundary growth**: Append above the highest interval or prepend below a reference interval
//! - **Point lookup and removal**: Resolve or remove the interval covering any `i64` point
//! - **Injected randomness**: `RangeSampler` takes any `rand::Rng` or custom `UniformSource`
//!
//! ## Usage Examples
//!
//! ### Building a Collection
//!
//! ```rust
//! use rangeset::{Interval, RangeCollection};
//!
//! let mut set = RangeCollection::new();
//! assert!(set.insert_range(0, 9, "a").unwrap());
//! assert!(set.insert_range(10, 19, "b").unwrap());
//!
//! // Overlapping inserts are rejected
//! assert!(!set.insert_range(5, 14, "c").unwrap());
//! assert_eq!(set.len(), 2);
//!
//! // Replacement displaces the interval it collides with
//! assert!(set.replace(Interval::new(12, 25, "d").unwrap()));
//! assert_eq!(set.get(11), None);
//! assert_eq!(set.get(25), Some(&"d"));
//! ```
//!
//! ### Weighted Sampling
//!
//! Wider intervals cover more points and are therefore drawn more often:
//!
//! ```rust
//! use rand::SeedableRng;
//! use rand_chacha::ChaCha8Rng;
//! use rangeset::{RangeCollection, RangeSampler};
//!
//! let mut loot = RangeCollection::new();
//! loot.append_after_max(89, "common").unwrap();
//! loot.append_after_max(8, "rare").unwrap();
//! loot.append_after_max(0, "legendary").unwrap();
//!
//! let mut sampler = RangeSampler::new(&loot, ChaCha8Rng::seed_from_u64(1));
//! let drop = sampler.sample().unwrap();
//! assert!(drop.is_some());
//! ```
//!
//! ## Error Handling
//!
//! Fallible operations return `RangeSetResult<T>` which can contain the following errors:
//!
//! - `RangeSetError::InvalidInterval`: An interval's lower bound exceeds its upper bound
//! - `RangeSetError::EmptyRange`: A sample was requested from an empty collection
//! - `RangeSetError::BoundOverflow`: Append or prepend arithmetic left the `i64` domain
//!
//! Rejected inserts and missed lookups are not errors and are reported through `bool` and
//! `Option` results.
//!
//! ## Thread Safety
//!
//! Collections carry no internal synchronization. Wrap them in a lock to share across threads.
//!
//! ## License
//!
//! Licensed under the Apache License, Version 2.0.

#![warn(
    clippy::cargo,
    missing_docs,
    clippy::pedantic,
    future_incompatible,
    rust_2018_idioms
)]
#![allow(
    clippy::option_if_let_else,
    clippy::module_name_repetitions,
    clippy::missing_errors_doc
)]

mod config;
mod interval;
mod ranges;
mod result;
mod sampler;

pub use self::config::{PrependMode, RangeConfig, ReplaceMode};
pub use self::interval::Interval;
pub use self::ranges::{Iter, RangeCollection};
pub use self::result::{RangeSetError, RangeSetResult};
pub use self::sampler::{BoundedRandom, RangeSampler, UniformSource};
