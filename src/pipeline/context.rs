//! Shared state for one walk invocation: gate, tracker, and error accounting.

use std::sync::atomic::{AtomicUsize, Ordering};

use super::gate::AdmissionGate;
use super::tracker::CompletionTracker;

/// Everything walker tasks share. Lives in an `Arc` for the duration of one walk.
#[derive(Debug)]
pub struct WalkContext {
    pub gate: AdmissionGate,
    pub tracker: CompletionTracker,
    unreadable: AtomicUsize,
}

impl WalkContext {
    pub fn new(gate_capacity: usize) -> Self {
        Self {
            gate: AdmissionGate::new(gate_capacity),
            tracker: CompletionTracker::new(),
            unreadable: AtomicUsize::new(0),
        }
    }

    pub(crate) fn record_unreadable(&self) {
        self.unreadable.fetch_add(1, Ordering::Relaxed);
    }

    /// Directories whose listing failed so far.
    pub fn unreadable(&self) -> usize {
        self.unreadable.load(Ordering::Relaxed)
    }
}
