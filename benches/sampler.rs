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

use criterion::{black_box, BenchmarkId, Criterion};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use rangeset::{RangeCollection, RangeSampler};

pub fn bench_sample(c: &mut Criterion) {
    let mut group = c.benchmark_group("RangeSampler");

    for count in [10i64, 100, 1000].iter() {
        let mut set = RangeCollection::new();
        for i in 0..*count {
            // Leave a gap after every interval so some draws miss
            set.insert_range(i * 20, i * 20 + 9, i).unwrap();
        }

        group.bench_with_input(BenchmarkId::new("intervals", count), &set, |b, set| {
            let mut sampler = RangeSampler::new(set, ChaCha8Rng::seed_from_u64(0x5EED));
            b.iter(|| black_box(sampler.sample().unwrap()));
        });
    }

    group.finish();
}
