//! Fallback semaphore using std::sync::Condvar
//!
//! Used on platforms without futex support. Less efficient but portable.

use super::Semaphore;
use std::sync::{Condvar, Mutex};

/// Condvar-based counting semaphore (fallback)
pub struct CondvarSemaphore {
    count: Mutex<u32>,
    nonzero: Condvar,
}

impl CondvarSemaphore {
    pub fn new(initial: u32) -> Self {
        Self {
            count: Mutex::new(initial),
            nonzero: Condvar::new(),
        }
    }
}

impl Semaphore for CondvarSemaphore {
    fn wait(&self) {
        let mut count = self.count.lock().unwrap();
        while *count == 0 {
            count = self.nonzero.wait(count).unwrap();
        }
        *count -= 1;
    }

    fn signal(&self) {
        let mut count = self.count.lock().unwrap();
        *count += 1;
        self.nonzero.notify_one();
    }
}
