// SPDX-License-Identifier: MPL-2.0

use criterion::{criterion_group, criterion_main, Criterion};
use rand::seq::SliceRandom;

use metstat::bst::SearchTree;
use metstat::stats::{self, Sample};

/// Insertion throughput for shuffled and for adversarially sorted sample
/// sequences. The sorted case degenerates the tree into a chain, so it also
/// exercises the iterative descent on worst-case depth.
pub fn inserts(c: &mut Criterion) {
    let test_sizes = [100, 1_000, 10_000];
    for size in test_sizes.iter() {
        let mut values: Vec<u32> = (0..*size).collect();
        values.shuffle(&mut rand::rng());

        c.bench_function(&format!("shuffled insert, size={}", *size), |b| {
            b.iter(|| {
                let mut tree = SearchTree::new();
                for &value in &values {
                    tree.insert(value);
                }
                std::hint::black_box(&tree);
            })
        });
    }

    for size in [100, 1_000].iter() {
        c.bench_function(&format!("ascending insert, size={}", *size), |b| {
            b.iter(|| {
                let mut tree = SearchTree::new();
                for value in 0..*size {
                    tree.insert(value);
                }
                std::hint::black_box(&tree);
            })
        });
    }
}

/// Throughput of the ascending fold the statistics layer is built on.
pub fn folds(c: &mut Criterion) {
    let size = 10_000;
    let mut values: Vec<u32> = (0..size).collect();
    values.shuffle(&mut rand::rng());

    let mut tree = SearchTree::new();
    for &value in &values {
        tree.insert(Sample::new(f64::from(value)));
    }

    c.bench_function(&format!("ascending fold, size={size}"), |b| {
        b.iter(|| std::hint::black_box(stats::total(&tree)))
    });

    c.bench_function(&format!("deep copy, size={size}"), |b| {
        b.iter(|| std::hint::black_box(tree.clone()))
    });
}

criterion_group!(benches, inserts, folds);
criterion_main!(benches);
