#![allow(
    missing_docs,
    clippy::missing_docs_in_private_items,
    clippy::unwrap_used,
    clippy::similar_names
)]
use std::{collections::HashMap, hint::black_box};

use criterion::{BatchSize, Criterion, criterion_group, criterion_main};
use linhash::LinHashMap;
use proptest::{
    prelude::{Strategy, any},
    strategy::ValueTree,
    test_runner::TestRunner,
};

const ITEMS_AMOUNT: usize = 1000;
const SAMPLE_SIZE: usize = 10;

fn hash_map_benches(c: &mut Criterion) {
    let mut runner = TestRunner::default();
    let items = proptest::collection::vec(any::<(String, String)>(), ITEMS_AMOUNT)
        .new_tree(&mut runner)
        .unwrap()
        .current();

    let mut group = c.benchmark_group("Hash map comparison benchmark");
    group.sample_size(SAMPLE_SIZE);

    group.bench_function("linhash put", |b| {
        b.iter_batched(
            || items.clone(),
            |items| {
                let mut map = LinHashMap::new();
                for (key, value) in items {
                    map.put(key, value);
                }
                map
            },
            BatchSize::SmallInput,
        );
    });
    group.bench_function("rust std insert", |b| {
        b.iter_batched(
            || items.clone(),
            |items| {
                let mut map = HashMap::new();
                for (key, value) in items {
                    map.insert(key, value);
                }
                map
            },
            BatchSize::SmallInput,
        );
    });

    let lin_map: LinHashMap<_, _> = items.iter().cloned().collect();
    let rust_map: HashMap<_, _> = items.iter().cloned().collect();
    group.bench_function("linhash get", |b| {
        b.iter(|| {
            for (key, _) in &items {
                black_box(lin_map.get(key));
            }
        });
    });
    group.bench_function("rust std get", |b| {
        b.iter(|| {
            for (key, _) in &items {
                black_box(rust_map.get(key));
            }
        });
    });
    group.finish();
}

criterion_group!(benches, hash_map_benches);

criterion_main!(benches);
