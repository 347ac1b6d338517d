//! Linux futex-backed semaphore
//!
//! The futex word is the semaphore count. `signal` increments the word and
//! wakes one sleeper; `wait` CAS-decrements a positive word and sleeps on
//! zero. The kernel re-checks the word under its own lock, so a signal that
//! lands between our zero-check and the syscall makes `FUTEX_WAIT` return
//! `EAGAIN` immediately rather than getting lost.

use super::Semaphore;
use std::sync::atomic::{AtomicU32, AtomicUsize, Ordering};

/// Futex-based counting semaphore
pub struct FutexSemaphore {
    /// Futex word: current count
    count: AtomicU32,

    /// Number of threads inside `futex_wait` (skip the wake syscall when 0)
    sleepers: AtomicUsize,
}

impl FutexSemaphore {
    pub fn new(initial: u32) -> Self {
        Self {
            count: AtomicU32::new(initial),
            sleepers: AtomicUsize::new(0),
        }
    }

    /// Consume one unit if the count is positive
    fn try_acquire(&self) -> bool {
        let mut current = self.count.load(Ordering::Acquire);
        while current > 0 {
            match self.count.compare_exchange_weak(
                current,
                current - 1,
                Ordering::AcqRel,
                Ordering::Acquire,
            ) {
                Ok(_) => return true,
                Err(observed) => current = observed,
            }
        }
        false
    }

    /// Sleep while the word is zero
    fn futex_wait(&self) {
        unsafe {
            libc::syscall(
                libc::SYS_futex,
                self.count.as_ptr(),
                libc::FUTEX_WAIT | libc::FUTEX_PRIVATE_FLAG,
                0u32, // sleep only if the count is still zero
                std::ptr::null::<libc::timespec>(),
                std::ptr::null::<u32>(),
                0u32,
            );
        }
    }

    fn futex_wake_one(&self) {
        unsafe {
            libc::syscall(
                libc::SYS_futex,
                self.count.as_ptr(),
                libc::FUTEX_WAKE | libc::FUTEX_PRIVATE_FLAG,
                1i32,
                std::ptr::null::<libc::timespec>(),
                std::ptr::null::<u32>(),
                0u32,
            );
        }
    }
}

impl Semaphore for FutexSemaphore {
    fn wait(&self) {
        loop {
            if self.try_acquire() {
                return;
            }

            self.sleepers.fetch_add(1, Ordering::SeqCst);
            self.futex_wait();
            self.sleepers.fetch_sub(1, Ordering::SeqCst);
            // Woken or EAGAIN: either way the count may be positive now,
            // so go around and race for it.
        }
    }

    fn signal(&self) {
        self.count.fetch_add(1, Ordering::Release);
        if self.sleepers.load(Ordering::SeqCst) > 0 {
            self.futex_wake_one();
        }
    }
}
