//! Completion tracker: in-flight walker count across all roots, with a zero-wait for the watcher.

use std::sync::atomic::{AtomicU64, AtomicUsize, Ordering};
use std::sync::{Condvar, Mutex, PoisonError};

/// Counts walker tasks that are registered but not yet finished.
///
/// A task must be registered before it is dispatched, and a task marks itself done only after
/// registering all of its children; so once the count reaches zero it stays there.
#[derive(Debug, Default)]
pub struct CompletionTracker {
    in_flight: AtomicUsize,
    spawned: AtomicU64,
    finished: AtomicU64,
    closes: AtomicUsize,
    lock: Mutex<()>,
    zero: Condvar,
}

impl CompletionTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register one more pending task. Call before handing the task to the pool.
    pub fn register(&self) {
        self.in_flight.fetch_add(1, Ordering::SeqCst);
        self.spawned.fetch_add(1, Ordering::Relaxed);
    }

    /// Mark one task complete. Wakes the watcher when the count hits zero.
    pub fn done(&self) {
        let prev = self.in_flight.fetch_sub(1, Ordering::SeqCst);
        debug_assert!(prev > 0, "done() without matching register()");
        self.finished.fetch_add(1, Ordering::Relaxed);
        if prev == 1 {
            // Taking the lock orders this notify after any waiter's check-then-wait.
            let _guard = self.lock.lock().unwrap_or_else(PoisonError::into_inner);
            self.zero.notify_all();
        }
    }

    /// Block until no task is in flight.
    pub fn wait_for_zero(&self) {
        let mut guard = self.lock.lock().unwrap_or_else(PoisonError::into_inner);
        while self.in_flight.load(Ordering::SeqCst) > 0 {
            guard = self
                .zero
                .wait(guard)
                .unwrap_or_else(PoisonError::into_inner);
        }
    }

    /// Current in-flight count. Lock-free, safe to call from the progress path.
    pub fn in_flight(&self) -> usize {
        self.in_flight.load(Ordering::Relaxed)
    }

    pub fn spawned(&self) -> u64 {
        self.spawned.load(Ordering::Relaxed)
    }

    pub fn finished(&self) -> u64 {
        self.finished.load(Ordering::Relaxed)
    }

    /// Record that the size channel was closed.
    pub fn mark_closed(&self) {
        self.closes.fetch_add(1, Ordering::SeqCst);
    }

    pub fn closes(&self) -> usize {
        self.closes.load(Ordering::SeqCst)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::thread;
    use std::time::Duration;

    #[test]
    fn test_wait_returns_immediately_when_idle() {
        let t = CompletionTracker::new();
        t.wait_for_zero();
        assert_eq!(t.in_flight(), 0);
    }

    #[test]
    fn test_counts_balance() {
        let t = CompletionTracker::new();
        t.register();
        t.register();
        assert_eq!(t.in_flight(), 2);
        t.done();
        assert_eq!(t.in_flight(), 1);
        assert_eq!(t.spawned() - t.finished(), t.in_flight() as u64);
        t.done();
        assert_eq!(t.in_flight(), 0);
        assert_eq!(t.spawned(), 2);
        assert_eq!(t.finished(), 2);
    }

    #[test]
    fn test_waiter_wakes_after_last_done() {
        let t = Arc::new(CompletionTracker::new());
        t.register();
        let waiter = {
            let t = Arc::clone(&t);
            thread::spawn(move || {
                t.wait_for_zero();
                t.in_flight()
            })
        };
        thread::sleep(Duration::from_millis(20));
        // Child registered by the parent before the parent finishes.
        t.register();
        t.done();
        thread::sleep(Duration::from_millis(20));
        assert!(!waiter.is_finished());
        t.done();
        assert_eq!(waiter.join().unwrap(), 0);
    }
}
