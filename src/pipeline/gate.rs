//! Admission gate: counting semaphore bounding simultaneous directory reads.

use std::sync::{Condvar, Mutex, MutexGuard, PoisonError};

#[derive(Debug, Default)]
struct GateState {
    outstanding: usize,
    peak: usize,
}

/// Bounds the number of directory handles open at once. Acquire never fails; it only waits.
#[derive(Debug)]
pub struct AdmissionGate {
    capacity: usize,
    state: Mutex<GateState>,
    freed: Condvar,
}

impl AdmissionGate {
    /// Create a gate admitting at most `capacity` holders (clamped to 1).
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity: capacity.max(1),
            state: Mutex::new(GateState::default()),
            freed: Condvar::new(),
        }
    }

    fn lock(&self) -> MutexGuard<'_, GateState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Block until a slot is free, then take it. The slot is returned when the permit drops.
    pub fn acquire(&self) -> GatePermit<'_> {
        let mut state = self.lock();
        while state.outstanding >= self.capacity {
            state = self
                .freed
                .wait(state)
                .unwrap_or_else(PoisonError::into_inner);
        }
        state.outstanding += 1;
        state.peak = state.peak.max(state.outstanding);
        GatePermit { gate: self }
    }

    fn release(&self) {
        let mut state = self.lock();
        state.outstanding -= 1;
        drop(state);
        self.freed.notify_one();
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Tokens currently held.
    pub fn outstanding(&self) -> usize {
        self.lock().outstanding
    }

    /// Highest number of tokens ever held at the same time.
    pub fn peak(&self) -> usize {
        self.lock().peak
    }
}

/// RAII token from [`AdmissionGate::acquire`]; releases on drop, including during unwinding.
pub struct GatePermit<'a> {
    gate: &'a AdmissionGate,
}

impl Drop for GatePermit<'_> {
    fn drop(&mut self) {
        self.gate.release();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::thread;
    use std::time::Duration;

    #[test]
    fn test_zero_capacity_clamped() {
        let gate = AdmissionGate::new(0);
        assert_eq!(gate.capacity(), 1);
        let _p = gate.acquire();
        assert_eq!(gate.outstanding(), 1);
    }

    #[test]
    fn test_permit_released_on_drop() {
        let gate = AdmissionGate::new(2);
        {
            let _a = gate.acquire();
            let _b = gate.acquire();
            assert_eq!(gate.outstanding(), 2);
        }
        assert_eq!(gate.outstanding(), 0);
        assert_eq!(gate.peak(), 2);
    }

    #[test]
    fn test_permit_released_on_panic() {
        let gate = Arc::new(AdmissionGate::new(1));
        let g = Arc::clone(&gate);
        let res = thread::spawn(move || {
            let _p = g.acquire();
            panic!("read blew up");
        })
        .join();
        assert!(res.is_err());
        assert_eq!(gate.outstanding(), 0);
        let _p = gate.acquire();
    }

    #[test]
    fn test_never_exceeds_capacity() {
        let gate = Arc::new(AdmissionGate::new(3));
        let inside = Arc::new(AtomicUsize::new(0));
        let max_seen = Arc::new(AtomicUsize::new(0));
        let handles: Vec<_> = (0..12)
            .map(|_| {
                let gate = Arc::clone(&gate);
                let inside = Arc::clone(&inside);
                let max_seen = Arc::clone(&max_seen);
                thread::spawn(move || {
                    for _ in 0..20 {
                        let _p = gate.acquire();
                        let now = inside.fetch_add(1, Ordering::SeqCst) + 1;
                        max_seen.fetch_max(now, Ordering::SeqCst);
                        thread::sleep(Duration::from_micros(50));
                        inside.fetch_sub(1, Ordering::SeqCst);
                    }
                })
            })
            .collect();
        for h in handles {
            h.join().unwrap();
        }
        assert!(max_seen.load(Ordering::SeqCst) <= 3);
        assert!(gate.peak() <= 3);
        assert_eq!(gate.outstanding(), 0);
    }
}
