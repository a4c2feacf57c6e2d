//! Benchmark for the stack and queue containers.
//!
//! Compares the growable and inline stacks, and the two queue
//! implementations behind the common `Queue` contract.

use cowseq::queue::{ArrayQueue, Queue};
use cowseq::sequence::LinkedSequence;
use cowseq::stack::{BoundedStack, Stack};
use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use std::hint::black_box;

// =============================================================================
// Stack Benchmark
// =============================================================================

fn benchmark_stack(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("stack_push_pop");

    // Stack (Vec-backed)
    group.bench_function("Stack_256", |bencher| {
        bencher.iter(|| {
            let mut stack = Stack::new();
            for index in 0..256 {
                stack.push(black_box(index));
            }
            while let Some(value) = stack.pop() {
                black_box(value);
            }
        });
    });

    // BoundedStack (ArrayVec-backed, no allocation)
    group.bench_function("BoundedStack_256", |bencher| {
        bencher.iter(|| {
            let mut stack: BoundedStack<i32, 256> = BoundedStack::new();
            for index in 0..256 {
                let _ = stack.push(black_box(index));
            }
            while let Some(value) = stack.pop() {
                black_box(value);
            }
        });
    });

    group.finish();
}

// =============================================================================
// Queue Benchmark
// =============================================================================

fn cycle<Q: Queue<Element = i32>>(queue: &mut Q, size: i32) {
    for index in 0..size {
        queue.enqueue(black_box(index));
    }
    while let Some(value) = queue.dequeue() {
        black_box(value);
    }
}

fn benchmark_queue(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("queue_cycle");

    for size in [100, 1000, 10000] {
        group.bench_with_input(
            BenchmarkId::new("ArrayQueue", size),
            &size,
            |bencher, &size| {
                bencher.iter(|| {
                    let mut queue = ArrayQueue::new();
                    cycle(&mut queue, size);
                    black_box(queue)
                });
            },
        );

        group.bench_with_input(
            BenchmarkId::new("LinkedSequence", size),
            &size,
            |bencher, &size| {
                bencher.iter(|| {
                    let mut queue = LinkedSequence::new();
                    cycle(&mut queue, size);
                    black_box(queue)
                });
            },
        );
    }

    group.finish();
}

// =============================================================================
// Criterion Group and Main
// =============================================================================

criterion_group!(benches, benchmark_stack, benchmark_queue);

criterion_main!(benches);
