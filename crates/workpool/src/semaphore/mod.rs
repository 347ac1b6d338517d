//! Counting semaphores for the dispatcher/worker hand-off
//!
//! The pool uses two counting semaphores (job-added, worker-available) plus
//! one per worker slot in binary fashion. Platform-specific implementations
//! use the most efficient primitive available.

/// Counting semaphore contract
///
/// `wait` blocks while the count is zero, then decrements it. `signal`
/// increments the count and wakes one waiter. Signals are never lost: a
/// signal delivered before the matching `wait` is consumed by that `wait`
/// without blocking.
pub trait Semaphore: Send + Sync {
    /// Decrement the count, blocking while it is zero
    fn wait(&self);

    /// Increment the count and wake one waiter
    fn signal(&self);
}

// Platform-specific implementations
cfg_if::cfg_if! {
    if #[cfg(target_os = "linux")] {
        mod futex_linux;
        pub use futex_linux::FutexSemaphore as PlatformSemaphore;
    } else {
        mod fallback;
        pub use fallback::CondvarSemaphore as PlatformSemaphore;
    }
}

/// Create a platform-appropriate semaphore with an initial count of zero
pub fn new_semaphore() -> PlatformSemaphore {
    PlatformSemaphore::new(0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::thread;
    use std::time::Duration;

    fn exercise_pending_signal<S: Semaphore>(sem: &S) {
        sem.signal();
        sem.wait(); // must not block: the signal is already pending
    }

    #[test]
    fn test_signal_before_wait() {
        exercise_pending_signal(&new_semaphore());
    }

    #[test]
    fn test_initial_count_consumed_without_blocking() {
        let sem = PlatformSemaphore::new(2);
        sem.wait();
        sem.wait();
    }

    #[test]
    fn test_counting_accumulates() {
        let sem = new_semaphore();
        for _ in 0..5 {
            sem.signal();
        }
        for _ in 0..5 {
            sem.wait();
        }
    }

    #[test]
    fn test_wait_blocks_until_signal() {
        let sem = Arc::new(new_semaphore());
        let sem2 = Arc::clone(&sem);

        let waiter = thread::spawn(move || {
            sem2.wait();
        });

        // Give the thread time to block
        thread::sleep(Duration::from_millis(50));
        assert!(!waiter.is_finished());

        sem.signal();
        waiter.join().unwrap();
    }

    #[test]
    fn test_one_signal_wakes_one_waiter() {
        let sem = Arc::new(new_semaphore());
        let woken = Arc::new(std::sync::atomic::AtomicUsize::new(0));

        let mut waiters = vec![];
        for _ in 0..2 {
            let sem = Arc::clone(&sem);
            let woken = Arc::clone(&woken);
            waiters.push(thread::spawn(move || {
                sem.wait();
                woken.fetch_add(1, std::sync::atomic::Ordering::SeqCst);
            }));
        }

        thread::sleep(Duration::from_millis(50));
        sem.signal();
        thread::sleep(Duration::from_millis(100));
        assert_eq!(woken.load(std::sync::atomic::Ordering::SeqCst), 1);

        // Release the second waiter and join both
        sem.signal();
        for w in waiters {
            w.join().unwrap();
        }
        assert_eq!(woken.load(std::sync::atomic::Ordering::SeqCst), 2);
    }
}
