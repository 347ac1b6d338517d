//! Basic workpool example
//!
//! Schedules a handful of jobs, waits on the barrier, then reuses it.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;
use workpool::{PoolConfig, ThreadPool};

fn main() {
    println!("=== workpool Basic Example ===\n");

    let config = PoolConfig::default().capacity(4).debug_logging(true);
    let pool = ThreadPool::with_config(config).expect("failed to create pool");

    let completed = Arc::new(AtomicUsize::new(0));

    println!("Scheduling 8 jobs...\n");
    for i in 0..8 {
        let completed = completed.clone();
        pool.schedule(move || {
            println!("[job {}] running on {:?}", i, std::thread::current().id());
            std::thread::sleep(Duration::from_millis(50));
            completed.fetch_add(1, Ordering::SeqCst);
        });
    }

    pool.wait();
    println!(
        "\nRound 1 done: {} jobs, {} workers spawned",
        completed.load(Ordering::SeqCst),
        pool.spawned_workers()
    );

    // The barrier is reusable: schedule more and wait again
    for i in 0..4 {
        let completed = completed.clone();
        pool.schedule(move || {
            println!("[job {}] second round", i);
            completed.fetch_add(1, Ordering::SeqCst);
        });
    }
    pool.wait();

    println!(
        "\nRound 2 done: {} jobs total",
        completed.load(Ordering::SeqCst)
    );
    println!("\n=== Basic Example Complete ===");
}
