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

use criterion::{criterion_group, criterion_main};

mod sampler;

criterion_group!(
    collection,
    collection::bench_insert,
    collection::bench_rejected_inserts,
    collection::bench_replace,
    collection::bench_get,
    collection::bench_append_after_max
);
criterion_group!(sampler, sampler::bench_sample);
criterion_main!(collection, sampler);
