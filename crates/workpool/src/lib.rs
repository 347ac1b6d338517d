//! # workpool - FIFO thunk pool
//!
//! A fixed-capacity thread pool for zero-argument closures ("thunks").
//! Jobs are dispatched in strict submission order by a single dedicated
//! dispatcher thread; worker threads are spawned on demand up to the
//! configured capacity and park on per-worker semaphores between jobs.
//! `wait()` is a reusable barrier over everything scheduled so far.
//!
//! ## Quick Start
//!
//! ```ignore
//! use workpool::ThreadPool;
//!
//! let pool = ThreadPool::new(4).unwrap();
//!
//! for i in 0..10 {
//!     pool.schedule(move || {
//!         println!("job {} running", i);
//!     });
//! }
//!
//! // Block until all ten jobs have finished
//! pool.wait();
//!
//! // Dropping the pool drains outstanding jobs and joins every thread
//! drop(pool);
//! ```
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                       Caller threads                        │
//! │                    schedule(), wait()                       │
//! └─────────────────────────────────────────────────────────────┘
//!        │ push + latch.add + job_added.signal        │ latch.wait
//!        ▼                                            ▼
//! ┌──────────────┐   job_added    ┌──────────────────────────────┐
//! │   Job queue  │ ─────────────► │          Dispatcher          │
//! │ (FIFO, mutex)│                │ lazy growth, pick idle worker│
//! └──────────────┘                └──────────────────────────────┘
//!                                     │ slot.sem.signal
//!                   ┌─────────────────┼─────────────────┐
//!                   ▼                 ▼                 ▼
//!             ┌───────────┐    ┌───────────┐     ┌───────────┐
//!             │  Worker 0 │    │  Worker 1 │ ... │ Worker N-1│
//!             │ run thunk │    │ run thunk │     │ run thunk │
//!             └───────────┘    └───────────┘     └───────────┘
//!                   │ latch.done + worker_available.signal
//!                   ▼
//!             completion barrier (wait() wakes at zero)
//! ```

pub mod config;
pub mod pool;
pub mod semaphore;

mod dispatcher;
mod queue;
mod worker;

// Re-export the public surface
pub use config::PoolConfig;
pub use pool::ThreadPool;

// Re-export core types and the kprint macro family
pub use workpool_core::{LogLevel, PoolError, PoolResult};
pub use workpool_core::{kdebug, kerror, kinfo, kprintln, ktrace, kwarn};
pub use workpool_core::kprint::{init as init_logging, set_log_level};
