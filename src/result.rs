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

//! Error types and results for the RangeSet library.

use thiserror::Error;

/// A specialized Result type for RangeSet operations.
pub type RangeSetResult<T> = Result<T, RangeSetError>;

/// Errors that can occur during RangeSet operations.
///
/// Overlap rejections and lookups that find nothing are not errors; they are
/// reported through `bool` and `Option` return values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum RangeSetError {
    /// An interval was constructed with its lower bound above its upper bound.
    #[error("invalid interval: min {min} is greater than max {max}")]
    InvalidInterval {
        /// The requested lower bound.
        min: i64,
        /// The requested upper bound.
        max: i64,
    },
    /// A sample was requested from a collection holding no intervals.
    #[error("cannot sample from an empty range")]
    EmptyRange,
    /// Computing the bounds of a new interval left the `i64` domain.
    #[error("interval bound overflowed i64")]
    BoundOverflow,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        assert_eq!(
            RangeSetError::InvalidInterval { min: 5, max: 1 }.to_string(),
            "invalid interval: min 5 is greater than max 1"
        );
        assert_eq!(
            RangeSetError::EmptyRange.to_string(),
            "cannot sample from an empty range"
        );
    }
}
