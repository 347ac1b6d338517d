//! Benchmark suite for workpool
//!
//! Measures scheduling overhead, barrier latency and parallel speedup.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};
use workpool::ThreadPool;

fn main() {
    println!("=== workpool Benchmarks ===\n");

    bench_schedule();
    bench_barrier();
    bench_parallel_speedup();

    println!("\n=== Benchmarks Complete ===");
}

fn bench_schedule() {
    println!("Benchmark: Schedule overhead");
    println!("{}", "─".repeat(40));

    let pool = ThreadPool::new(4).expect("failed to create pool");
    let iterations = 100_000;

    let start = Instant::now();
    for _ in 0..iterations {
        pool.schedule(|| {});
    }
    let elapsed = start.elapsed();
    pool.wait();

    let per_schedule = elapsed.as_nanos() as f64 / iterations as f64;
    println!("  Iterations:   {}", iterations);
    println!("  Total time:   {:?}", elapsed);
    println!("  Per schedule: {:.1} ns", per_schedule);
    println!(
        "  Rate:         {:.0}/sec\n",
        iterations as f64 / elapsed.as_secs_f64()
    );
}

fn bench_barrier() {
    println!("Benchmark: Barrier round-trip");
    println!("{}", "─".repeat(40));

    let pool = ThreadPool::new(4).expect("failed to create pool");
    let rounds = 1_000;

    let start = Instant::now();
    for _ in 0..rounds {
        pool.schedule(|| {});
        pool.wait();
    }
    let elapsed = start.elapsed();

    println!("  Rounds:        {}", rounds);
    println!("  Total time:    {:?}", elapsed);
    println!(
        "  Per round:     {:.1} us\n",
        elapsed.as_micros() as f64 / rounds as f64
    );
}

fn bench_parallel_speedup() {
    println!("Benchmark: Parallel speedup (sleep jobs)");
    println!("{}", "─".repeat(40));

    let jobs = 64;
    let sleep = Duration::from_millis(5);

    for &workers in &[1usize, 2, 4, 8] {
        let pool = ThreadPool::new(workers).expect("failed to create pool");
        let completed = Arc::new(AtomicUsize::new(0));

        let start = Instant::now();
        for _ in 0..jobs {
            let completed = completed.clone();
            pool.schedule(move || {
                std::thread::sleep(sleep);
                completed.fetch_add(1, Ordering::Relaxed);
            });
        }
        pool.wait();
        let elapsed = start.elapsed();

        println!(
            "  {} workers: {:?} ({} jobs x {:?})",
            workers,
            elapsed,
            completed.load(Ordering::Relaxed),
            sleep
        );
    }
    println!();
}
