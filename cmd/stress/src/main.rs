//! Stress test - many jobs from many schedulers
//!
//! Hammers one pool from several submitter threads and checks that every
//! job ran exactly once.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::thread;
use std::time::Instant;
use workpool::{PoolConfig, ThreadPool};

fn main() {
    println!("=== workpool Stress Test ===\n");

    let num_jobs: usize = std::env::args()
        .nth(1)
        .and_then(|s| s.parse().ok())
        .unwrap_or(100_000);
    let submitters = 4;

    // Capacity comes from WP_WORKERS when set, CPU count otherwise
    let config = PoolConfig::from_env();
    let pool = Arc::new(ThreadPool::with_config(config).expect("failed to create pool"));
    println!(
        "Scheduling {} jobs from {} threads onto {} workers...",
        num_jobs,
        submitters,
        pool.capacity()
    );

    let completed = Arc::new(AtomicU64::new(0));
    let start = Instant::now();

    let per_thread = num_jobs / submitters;
    let mut handles = vec![];
    for _ in 0..submitters {
        let pool = Arc::clone(&pool);
        let completed = Arc::clone(&completed);
        handles.push(thread::spawn(move || {
            for _ in 0..per_thread {
                let completed = completed.clone();
                pool.schedule(move || {
                    completed.fetch_add(1, Ordering::Relaxed);
                });
            }
        }));
    }
    for h in handles {
        h.join().unwrap();
    }
    let submit_time = start.elapsed();

    pool.wait();
    let total_time = start.elapsed();

    let done = completed.load(Ordering::Relaxed);
    println!("\n=== Results ===");
    println!("Jobs scheduled:  {}", per_thread * submitters);
    println!("Jobs completed:  {}", done);
    println!("Workers spawned: {}", pool.spawned_workers());
    println!("Submit time:     {:?}", submit_time);
    println!("Total time:      {:?}", total_time);
    println!(
        "Throughput:      {:.0} jobs/sec",
        done as f64 / total_time.as_secs_f64()
    );

    assert_eq!(done as usize, per_thread * submitters);
    println!("\n=== Stress Test Complete ===");
}
