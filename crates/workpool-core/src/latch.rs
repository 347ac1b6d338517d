//! Completion barrier
//!
//! Tracks the number of scheduled-but-unfinished jobs. `wait()` blocks until
//! the count drops to zero, wakes every waiter at once, and is reusable:
//! jobs recorded after a `wait()` returns are covered by the next `wait()`.

use std::sync::{Condvar, Mutex};

/// Pending-job counter with a broadcast when it reaches zero
pub struct CompletionLatch {
    pending: Mutex<usize>,
    all_done: Condvar,
}

impl CompletionLatch {
    pub fn new() -> Self {
        Self {
            pending: Mutex::new(0),
            all_done: Condvar::new(),
        }
    }

    /// Record one newly scheduled job
    pub fn add(&self) {
        let mut pending = self.pending.lock().unwrap();
        *pending += 1;
    }

    /// Record one finished job, waking all waiters when none remain
    pub fn done(&self) {
        let mut pending = self.pending.lock().unwrap();
        *pending -= 1;
        if *pending == 0 {
            self.all_done.notify_all();
        }
    }

    /// Block until every recorded job has finished
    ///
    /// Returns immediately when nothing is pending. Any number of threads may
    /// wait at the same time.
    pub fn wait(&self) {
        let mut pending = self.pending.lock().unwrap();
        while *pending > 0 {
            pending = self.all_done.wait(pending).unwrap();
        }
    }

    /// Current number of unfinished jobs
    pub fn pending(&self) -> usize {
        *self.pending.lock().unwrap()
    }

    /// Guard that calls `done()` when dropped, on unwind included
    pub fn guard(&self) -> CompletionGuard<'_> {
        CompletionGuard { latch: self }
    }
}

impl Default for CompletionLatch {
    fn default() -> Self {
        Self::new()
    }
}

/// Scoped decrement for [`CompletionLatch`]
pub struct CompletionGuard<'a> {
    latch: &'a CompletionLatch,
}

impl Drop for CompletionGuard<'_> {
    fn drop(&mut self) {
        self.latch.done();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::panic::{catch_unwind, AssertUnwindSafe};
    use std::sync::Arc;
    use std::thread;
    use std::time::Duration;

    #[test]
    fn test_wait_with_nothing_pending() {
        let latch = CompletionLatch::new();
        latch.wait(); // must not block
        assert_eq!(latch.pending(), 0);
    }

    #[test]
    fn test_add_then_done() {
        let latch = CompletionLatch::new();
        latch.add();
        latch.add();
        assert_eq!(latch.pending(), 2);
        latch.done();
        assert_eq!(latch.pending(), 1);
        latch.done();
        assert_eq!(latch.pending(), 0);
        latch.wait();
    }

    #[test]
    fn test_wait_blocks_until_done() {
        let latch = Arc::new(CompletionLatch::new());
        latch.add();

        let latch2 = Arc::clone(&latch);
        let waiter = thread::spawn(move || {
            latch2.wait();
        });

        // Give the waiter time to block
        thread::sleep(Duration::from_millis(50));
        assert!(!waiter.is_finished());

        latch.done();
        waiter.join().unwrap();
    }

    #[test]
    fn test_multiple_waiters_all_wake() {
        let latch = Arc::new(CompletionLatch::new());
        latch.add();

        let mut waiters = vec![];
        for _ in 0..3 {
            let latch = Arc::clone(&latch);
            waiters.push(thread::spawn(move || latch.wait()));
        }

        thread::sleep(Duration::from_millis(50));
        latch.done();

        for w in waiters {
            w.join().unwrap();
        }
    }

    #[test]
    fn test_reusable_across_rounds() {
        let latch = CompletionLatch::new();

        latch.add();
        latch.done();
        latch.wait();

        latch.add();
        assert_eq!(latch.pending(), 1);
        latch.done();
        latch.wait();
    }

    #[test]
    fn test_guard_decrements_on_drop() {
        let latch = CompletionLatch::new();
        latch.add();
        {
            let _guard = latch.guard();
        }
        assert_eq!(latch.pending(), 0);
    }

    #[test]
    fn test_guard_decrements_on_unwind() {
        let latch = CompletionLatch::new();
        latch.add();

        let result = catch_unwind(AssertUnwindSafe(|| {
            let _guard = latch.guard();
            panic!("boom");
        }));

        assert!(result.is_err());
        assert_eq!(latch.pending(), 0);
        latch.wait();
    }
}
