//! The thread pool
//!
//! Public API plus the shared state that the dispatcher and workers operate
//! on. Data flow per submission: `schedule` pushes the thunk, bumps the
//! pending count and signals the dispatcher; the dispatcher (lazily spawning
//! a worker if needed) hands the queue front to an idle worker; the worker
//! runs it, drops the pending count and re-announces itself as idle.

use crate::config::PoolConfig;
use crate::dispatcher;
use crate::queue::JobQueue;
use crate::semaphore::{new_semaphore, PlatformSemaphore, Semaphore};
use crate::worker::WorkerSlot;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::thread::{self, JoinHandle};
use workpool_core::constants::DISPATCHER_NAME;
use workpool_core::{CompletionLatch, LogLevel, PoolResult};

/// State shared between the API, the dispatcher and the workers
pub(crate) struct PoolShared {
    /// Immutable configuration (capacity, names, debug flag)
    pub config: PoolConfig,

    /// True from construction until teardown begins; every pool thread
    /// re-checks this after each semaphore wake
    pub running: AtomicBool,

    /// Pending thunks in submission order
    pub jobs: JobQueue,

    /// Scheduled-but-unfinished count; `wait()` blocks on it
    pub latch: CompletionLatch,

    /// One signal per scheduled job; the dispatcher waits on it
    pub job_added: PlatformSemaphore,

    /// One signal per worker-idle event, including initial spawn
    pub worker_available: PlatformSemaphore,

    /// Workers spawned so far; written only by the dispatcher
    pub current_workers: AtomicUsize,

    /// Spawned workers currently idle
    pub idle_workers: AtomicUsize,

    /// One slot per potential worker, allocated up front
    pub slots: Vec<WorkerSlot>,

    /// Join handles of spawned workers, drained by the destructor
    pub handles: Mutex<Vec<JoinHandle<()>>>,
}

/// Fixed-capacity FIFO thread pool
///
/// Accepts zero-argument closures via [`schedule`](ThreadPool::schedule) and
/// runs each exactly once on a worker thread, dispatching in submission
/// order. Worker threads are created on demand up to the configured capacity
/// and live until the pool is dropped. [`wait`](ThreadPool::wait) is a
/// reusable barrier; dropping the pool drains all outstanding jobs and joins
/// every thread it spawned.
///
/// The pool is deliberately not `Clone`: there is no meaningful way to
/// duplicate a pool and its outstanding jobs.
pub struct ThreadPool {
    shared: Arc<PoolShared>,
    dispatcher: Option<JoinHandle<()>>,
}

impl ThreadPool {
    /// Pool with the given worker capacity and default configuration
    pub fn new(capacity: usize) -> PoolResult<Self> {
        Self::with_config(PoolConfig::default().capacity(capacity))
    }

    /// Pool from an explicit configuration
    ///
    /// Fails if the configuration is invalid or the OS refuses to spawn the
    /// dispatcher thread; no worker thread exists yet in either case.
    pub fn with_config(config: PoolConfig) -> PoolResult<Self> {
        config.validate().map_err(workpool_core::PoolError::InvalidConfig)?;

        if config.debug_logging {
            workpool_core::kprint::set_log_level(LogLevel::Debug);
        }

        let slots = (0..config.capacity).map(|_| WorkerSlot::new()).collect();
        let shared = Arc::new(PoolShared {
            running: AtomicBool::new(true),
            jobs: JobQueue::new(),
            latch: CompletionLatch::new(),
            job_added: new_semaphore(),
            worker_available: new_semaphore(),
            current_workers: AtomicUsize::new(0),
            idle_workers: AtomicUsize::new(0),
            slots,
            handles: Mutex::new(Vec::with_capacity(config.capacity)),
            config,
        });

        let dispatcher_shared = Arc::clone(&shared);
        let dispatcher = thread::Builder::new()
            .name(DISPATCHER_NAME.to_string())
            .spawn(move || dispatcher::dispatcher_loop(dispatcher_shared))?;

        Ok(Self {
            shared,
            dispatcher: Some(dispatcher),
        })
    }

    /// Enqueue a thunk for execution
    ///
    /// The thunk runs exactly once on some worker thread, after every thunk
    /// scheduled before it has been handed to a worker (strict FIFO at the
    /// dequeue point; completion order depends on job durations). Never
    /// blocks beyond two short critical sections. Must not be called once
    /// the pool's destructor has begun.
    ///
    /// The pool catches panics that escape a thunk and logs them; see the
    /// worker loop. A panicking thunk cannot wedge [`wait`](ThreadPool::wait).
    pub fn schedule<F>(&self, thunk: F)
    where
        F: FnOnce() + Send + 'static,
    {
        self.shared.jobs.push(Box::new(thunk));
        self.shared.latch.add();
        self.shared.job_added.signal();
    }

    /// Block until every previously scheduled thunk has finished
    ///
    /// Reusable: jobs scheduled after this returns are covered by the next
    /// call. Any number of threads may wait concurrently. Must NOT be called
    /// from inside a thunk running on this same pool: the calling job keeps
    /// the pending count positive and the wait would never return.
    pub fn wait(&self) {
        self.shared.latch.wait();
    }

    /// Fixed worker capacity
    pub fn capacity(&self) -> usize {
        self.shared.config.capacity
    }

    /// Workers actually spawned so far (grows lazily, never shrinks)
    pub fn spawned_workers(&self) -> usize {
        self.shared.current_workers.load(Ordering::Acquire)
    }

    /// Scheduled-but-unfinished jobs
    pub fn pending_jobs(&self) -> usize {
        self.shared.latch.pending()
    }
}

impl Drop for ThreadPool {
    /// Drains all outstanding jobs, then stops and joins every pool thread
    ///
    /// Teardown order matters: drain first, flip `running`, then send exactly
    /// one wake per potentially-blocked thread (dispatcher twice for its two
    /// wait points, each spawned worker once) before joining.
    fn drop(&mut self) {
        self.wait();

        self.shared.running.store(false, Ordering::Release);
        self.shared.job_added.signal();
        self.shared.worker_available.signal();
        let spawned = self.shared.current_workers.load(Ordering::Acquire);
        for slot in self.shared.slots.iter().take(spawned) {
            slot.sem.signal();
        }

        if let Some(dispatcher) = self.dispatcher.take() {
            let _ = dispatcher.join();
        }
        for handle in self.shared.handles.lock().unwrap().drain(..) {
            let _ = handle.join();
        }
    }
}
