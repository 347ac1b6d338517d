//! # workpool-core
//!
//! Platform-agnostic building blocks for the workpool thread pool.
//!
//! This crate contains no OS-specific code. The futex-backed semaphore and
//! everything else that touches threads lives in `workpool`.
//!
//! ## Modules
//!
//! - `latch` - Completion barrier (pending-job counter + condvar)
//! - `error` - Error types
//! - `kprint` - Kernel-style debug printing macros
//! - `env` - Environment variable utilities

pub mod env;
pub mod error;
pub mod kprint;
pub mod latch;

// Re-exports for convenience
pub use env::{env_get, env_get_bool};
pub use error::{PoolError, PoolResult};
pub use kprint::LogLevel;
pub use latch::{CompletionGuard, CompletionLatch};

/// Shared constants
pub mod constants {
    /// Upper bound on pool capacity, enforced by `PoolConfig::validate`
    pub const MAX_WORKERS: usize = 1024;

    /// Default worker thread name prefix
    pub const WORKER_NAME_PREFIX: &str = "workpool-worker";

    /// Dispatcher thread name
    pub const DISPATCHER_NAME: &str = "workpool-dispatcher";
}
