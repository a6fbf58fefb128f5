//! Queue latency benchmarks.
//!
//! Measures uncontended whole-frame push/pop latency. Both operations are a
//! single parking_lot lock acquisition plus a 4-byte VecDeque move, so they
//! should sit well under a microsecond.

use criterion::{Criterion, criterion_group, criterion_main};
use framepipe::{SharedByteQueue, encode};
use std::hint::black_box;

fn bench_push_pop_cycle(c: &mut Criterion) {
    let queue = SharedByteQueue::new();

    c.bench_function("queue_push_pop_cycle", |b| {
        b.iter(|| {
            queue.push_frame(black_box(encode(0xDEAD_BEEF)));
            black_box(queue.try_pop_frame());
        });
    });
}

fn bench_pop_empty(c: &mut Criterion) {
    let queue = SharedByteQueue::new();

    c.bench_function("queue_try_pop_empty", |b| {
        b.iter(|| {
            black_box(queue.try_pop_frame());
        });
    });
}

criterion_group!(benches, bench_push_pop_cycle, bench_pop_empty);
criterion_main!(benches);
