use criterion::{black_box, criterion_group, criterion_main, Criterion};
use rayon::iter::ParallelIterator;
use rayon::prelude::IntoParallelIterator;
use std::collections;
use std::sync::Arc;

use dashmap::DashMap;
use longmap::{ConcurrentLongHashMap, LongHashMap};

pub fn insert_long_hash_map(c: &mut Criterion) {
    let mut group = c.benchmark_group("LongHashMap insert");
    for capacity in [1, 16, 1_024, 131_072].iter() {
        group.bench_with_input(
            format!("capacity={:06}", capacity),
            capacity,
            |b, &capacity| {
                b.iter(|| {
                    let mut table = LongHashMap::with_capacity(capacity).unwrap();
                    let n = black_box(100_000i64);
                    for i in 0..n {
                        assert_eq!(table.put(i, i), None);
                    }
                })
            },
        );
    }
}

pub fn compare_insert(c: &mut Criterion) {
    let mut group = c.benchmark_group("HashMap compared insert");
    group.bench_function("LongHashMap", |b| {
        b.iter(|| {
            let mut table = LongHashMap::new();
            let n = black_box(100_000i64);
            for i in 0..n {
                assert_eq!(table.put(i, i), None);
            }
        })
    });
    group.bench_function("LongHashMap (negative keys)", |b| {
        b.iter(|| {
            let mut table = LongHashMap::new();
            let n = black_box(100_000i64);
            for i in 0..n {
                assert_eq!(table.put(-i - 1, i), None);
            }
        })
    });
    group.bench_function("std::collections::HashMap", |b| {
        b.iter(|| {
            let mut table = collections::HashMap::new();
            let n = black_box(100_000i64);
            for i in 0..n {
                assert_eq!(table.insert(i, i), None);
            }
        })
    });
}

pub fn compare_get(c: &mut Criterion) {
    let mut group = c.benchmark_group("HashMap compared get");
    group.bench_function("LongHashMap", |b| {
        let mut table = LongHashMap::new();
        for i in 0..100_000i64 {
            assert_eq!(table.put(i, i), None);
        }
        b.iter(|| {
            let n = black_box(100_000i64);
            for i in 0..n {
                assert_eq!(table.get(i), Some(&i));
            }
        })
    });
    group.bench_function("std::collections::HashMap", |b| {
        let mut table = collections::HashMap::new();
        for i in 0..100_000i64 {
            assert_eq!(table.insert(i, i), None);
        }
        b.iter(|| {
            let n = black_box(100_000i64);
            for i in 0..n {
                assert_eq!(table.get(&i), Some(&i));
            }
        })
    });
}

pub fn keys_and_values(c: &mut Criterion) {
    let mut group = c.benchmark_group("LongHashMap traversal");
    let table: LongHashMap<i64> = (0..100_000i64).map(|i| (i, i)).collect();
    group.bench_function("keys", |b| {
        b.iter(|| assert_eq!(black_box(&table).keys().len(), 100_000))
    });
    group.bench_function("values", |b| {
        b.iter(|| assert_eq!(black_box(&table).values().len(), 100_000))
    });
    group.bench_function("contains_value (miss)", |b| {
        b.iter(|| assert!(!black_box(&table).contains_value(&-1)))
    });
}

pub fn concurrent_insert(c: &mut Criterion) {
    let mut group = c.benchmark_group("HashMap concurrent insert");
    group.bench_function("ConcurrentLongHashMap (single-threaded)", |b| {
        b.iter(|| {
            let table = ConcurrentLongHashMap::new();
            let n = black_box(100_000i64);
            for i in 0..n {
                assert_eq!(table.put(i, Arc::new(i)), None);
            }
        })
    });
    group.bench_function("ConcurrentLongHashMap (multi-threaded)", |b| {
        b.iter(|| {
            let table = ConcurrentLongHashMap::new();
            let n = black_box(100_000i64);
            (0..n).into_par_iter().for_each(|i| {
                assert_eq!(table.put(i, Arc::new(i)), None);
            });
        })
    });
    group.bench_function("DashMap (multi-threaded)", |b| {
        b.iter(|| {
            let table = DashMap::new();
            let n = black_box(100_000i64);
            (0..n).into_par_iter().for_each(|i| {
                assert_eq!(table.insert(i, Arc::new(i)), None);
            });
        })
    });
}

pub fn concurrent_get(c: &mut Criterion) {
    let mut group = c.benchmark_group("HashMap concurrent get");
    group.bench_function("ConcurrentLongHashMap (multi-threaded)", |b| {
        let table = ConcurrentLongHashMap::new();
        for i in 0..100_000i64 {
            assert_eq!(table.put(i, Arc::new(i)), None);
        }
        b.iter(|| {
            let n = black_box(100_000i64);
            (0..n).into_par_iter().for_each(|i| {
                assert_eq!(table.get(i), Some(Arc::new(i)));
            });
        })
    });
    group.bench_function("DashMap (multi-threaded)", |b| {
        let table = DashMap::new();
        for i in 0..100_000i64 {
            assert_eq!(table.insert(i, Arc::new(i)), None);
        }
        b.iter(|| {
            let n = black_box(100_000i64);
            (0..n).into_par_iter().for_each(|i| {
                assert_eq!(*(table.get(&i).unwrap()), Arc::new(i));
            });
        })
    });
}

criterion_group!(
    hash_table,
    insert_long_hash_map,
    compare_insert,
    compare_get,
    keys_and_values,
    concurrent_insert,
    concurrent_get,
);
criterion_main!(hash_table);
