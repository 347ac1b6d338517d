//! Worker threads
//!
//! Each worker owns one slot: an availability flag, a semaphore it parks on
//! between jobs, and a one-thunk hand-off cell written by the dispatcher.
//! The slot semaphore carries at most one outstanding signal, so the
//! dispatcher's write to the cell is always observed by the matching wake.

use crate::pool::PoolShared;
use crate::queue::Thunk;
use crate::semaphore::{new_semaphore, PlatformSemaphore, Semaphore};
use std::panic::{catch_unwind, AssertUnwindSafe};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};
use workpool_core::{kdebug, kerror};

/// Per-worker hand-off record
pub(crate) struct WorkerSlot {
    /// Idle and eligible for dispatch
    pub available: AtomicBool,

    /// Worker parks here; the dispatcher signals it once per job
    pub sem: PlatformSemaphore,

    /// Written by the dispatcher before signaling `sem`
    pub thunk: Mutex<Option<Thunk>>,
}

impl WorkerSlot {
    pub fn new() -> Self {
        Self {
            available: AtomicBool::new(false),
            sem: new_semaphore(),
            thunk: Mutex::new(None),
        }
    }
}

/// Worker main loop: park, run, release
///
/// States: spawned -> idle <-> running -> terminating. The worker never
/// exits on its own; it leaves only when a wake finds the pool stopped.
pub(crate) fn worker_loop(shared: Arc<PoolShared>, id: usize) {
    workpool_core::kprint::set_worker_id(id as u32);
    kdebug!("started");

    let slot = &shared.slots[id];
    loop {
        slot.sem.wait();
        if !shared.running.load(Ordering::Acquire) {
            kdebug!("exiting");
            workpool_core::kprint::clear_worker_id();
            return;
        }

        let thunk = slot
            .thunk
            .lock()
            .unwrap()
            .take()
            .expect("worker woken without a job");

        {
            // Scoped so the pending count drops even if the thunk panics;
            // wait() must never deadlock on a faulted job.
            let _done = shared.latch.guard();
            if catch_unwind(AssertUnwindSafe(thunk)).is_err() {
                kerror!("job panicked; worker continues");
            }
        }

        slot.available.store(true, Ordering::Release);
        shared.idle_workers.fetch_add(1, Ordering::AcqRel);
        shared.worker_available.signal();
    }
}
