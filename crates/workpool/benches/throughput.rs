//! Criterion benchmarks for schedule/wait round-trips.
//!
//! Run with:
//!   cargo bench --bench throughput

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use workpool::ThreadPool;

fn bench_schedule_wait(c: &mut Criterion) {
    let mut group = c.benchmark_group("schedule_wait");

    for &workers in &[1usize, 4, 8] {
        let pool = ThreadPool::new(workers).expect("failed to create pool");
        let jobs = 256usize;

        group.throughput(Throughput::Elements(jobs as u64));
        group.bench_with_input(
            BenchmarkId::new("empty_jobs", workers),
            &jobs,
            |b, &jobs| {
                b.iter(|| {
                    for _ in 0..jobs {
                        pool.schedule(|| {});
                    }
                    pool.wait();
                })
            },
        );
    }

    group.finish();
}

fn bench_single_job_barrier(c: &mut Criterion) {
    let pool = ThreadPool::new(1).expect("failed to create pool");

    c.bench_function("single_job_barrier", |b| {
        b.iter(|| {
            pool.schedule(|| {});
            pool.wait();
        })
    });
}

criterion_group!(benches, bench_schedule_wait, bench_single_job_barrier);
criterion_main!(benches);
