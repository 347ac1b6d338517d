//! Dispatcher thread
//!
//! A single dedicated thread serializes the pick-a-worker decision and owns
//! the lazy growth policy: a worker is spawned only when a job arrives, no
//! worker is idle, and capacity remains. Workers never touch the job queue.

use crate::pool::PoolShared;
use crate::semaphore::Semaphore;
use crate::worker;
use std::sync::atomic::Ordering;
use std::sync::Arc;
use std::thread;
use workpool_core::{kdebug, ktrace};

/// Dispatcher main loop: one iteration per scheduled job
pub(crate) fn dispatcher_loop(shared: Arc<PoolShared>) {
    loop {
        shared.job_added.wait();
        if !shared.running.load(Ordering::Acquire) {
            kdebug!("dispatcher exiting");
            return;
        }

        if shared.idle_workers.load(Ordering::Acquire) == 0
            && shared.current_workers.load(Ordering::Acquire) < shared.config.capacity
        {
            spawn_worker(&shared);
        }

        shared.worker_available.wait();
        if !shared.running.load(Ordering::Acquire) {
            kdebug!("dispatcher exiting");
            return;
        }

        assign_front_job(&shared);
    }
}

/// Hand the queue front to the lowest-indexed idle worker
fn assign_front_job(shared: &Arc<PoolShared>) {
    let spawned = shared.current_workers.load(Ordering::Acquire);
    let id = shared
        .slots
        .iter()
        .take(spawned)
        .position(|slot| slot.available.load(Ordering::Acquire))
        .expect("worker-available signal without an idle worker");

    let thunk = shared
        .jobs
        .pop()
        .expect("job-added signal without a queued job");

    let slot = &shared.slots[id];
    *slot.thunk.lock().unwrap() = Some(thunk);
    slot.available.store(false, Ordering::Release);
    shared.idle_workers.fetch_sub(1, Ordering::AcqRel);
    slot.sem.signal();
    ktrace!("dispatched to worker {} ({} queued)", id, shared.jobs.len());
}

/// Spawn the next worker; only called below capacity, only by the dispatcher
fn spawn_worker(shared: &Arc<PoolShared>) {
    let id = shared.current_workers.load(Ordering::Acquire);
    shared.slots[id].available.store(true, Ordering::Release);

    let worker_shared = Arc::clone(shared);
    let handle = thread::Builder::new()
        .name(format!("{}-{}", shared.config.thread_name_prefix, id))
        .spawn(move || worker::worker_loop(worker_shared, id))
        .expect("failed to spawn worker thread");
    shared.handles.lock().unwrap().push(handle);

    shared.current_workers.fetch_add(1, Ordering::Release);
    shared.idle_workers.fetch_add(1, Ordering::AcqRel);
    shared.worker_available.signal();
    kdebug!("spawned worker {}", id);
}
