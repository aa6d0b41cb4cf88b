//! Linked heap benchmarks
//!
//! Compares [`LinkedMinHeap`] with `std::collections::BinaryHeap` (wrapped in
//! `Reverse` to make it a min-heap) so the cost of pointer-linked storage and
//! bit-walk addressing is visible next to the array-backed baseline.
//!
//! ## Running
//!
//! ```bash
//! cargo bench --bench heap_perf
//!
//! # Only the linked heap
//! cargo bench --bench heap_perf -- linked
//! ```

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use linked_min_heap::LinkedMinHeap;
use std::cmp::Reverse;
use std::collections::BinaryHeap;

const SIZES: [u64; 3] = [1_000, 10_000, 100_000];

/// Deterministic scattered keys
fn keys(n: u64) -> Vec<u64> {
    (0..n).map(|i| i.wrapping_mul(0x9E37_79B9_7F4A_7C15) >> 16).collect()
}

fn bench_push(c: &mut Criterion) {
    let mut group = c.benchmark_group("push");
    for &n in &SIZES {
        let input = keys(n);

        group.bench_with_input(BenchmarkId::new("linked", n), &input, |b, input| {
            b.iter(|| {
                let mut heap = LinkedMinHeap::new();
                for &k in input {
                    heap.insert(k, k);
                }
                black_box(heap.len())
            })
        });

        group.bench_with_input(BenchmarkId::new("std", n), &input, |b, input| {
            b.iter(|| {
                let mut heap = BinaryHeap::new();
                for &k in input {
                    heap.push(Reverse((k, k)));
                }
                black_box(heap.len())
            })
        });
    }
    group.finish();
}

fn bench_push_pop(c: &mut Criterion) {
    let mut group = c.benchmark_group("push_pop");
    for &n in &SIZES {
        let input = keys(n);

        group.bench_with_input(BenchmarkId::new("linked", n), &input, |b, input| {
            b.iter(|| {
                let mut heap = LinkedMinHeap::new();
                for &k in input {
                    heap.insert(k, k);
                }
                let mut sum = 0u64;
                while let Ok((k, _)) = heap.remove_min() {
                    sum = sum.wrapping_add(k);
                }
                black_box(sum)
            })
        });

        group.bench_with_input(BenchmarkId::new("std", n), &input, |b, input| {
            b.iter(|| {
                let mut heap = BinaryHeap::new();
                for &k in input {
                    heap.push(Reverse((k, k)));
                }
                let mut sum = 0u64;
                while let Some(Reverse((k, _))) = heap.pop() {
                    sum = sum.wrapping_add(k);
                }
                black_box(sum)
            })
        });
    }
    group.finish();
}

fn bench_sort(c: &mut Criterion) {
    let mut group = c.benchmark_group("sort");
    for &n in &SIZES[..2] {
        let heap: LinkedMinHeap<u64, u64> = keys(n).into_iter().map(|k| (k, k)).collect();
        group.bench_with_input(BenchmarkId::new("linked", n), &heap, |b, heap| {
            b.iter(|| black_box(heap.sort().len()))
        });
    }
    group.finish();
}

criterion_group!(benches, bench_push, bench_push_pop, bench_sort);
criterion_main!(benches);
