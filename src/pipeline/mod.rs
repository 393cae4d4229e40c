//! Concurrency core: admission gate, directory reader, walker tasks, completion tracker, aggregator.

pub mod aggregate;
pub mod context;
pub mod gate;
pub mod orchestrator;
pub mod reader;
pub mod tracker;
pub mod walk;

pub use aggregate::aggregate;
pub use context::WalkContext;
pub use gate::{AdmissionGate, GatePermit};
pub use orchestrator::run_walk;
pub use reader::{DirEntryInfo, dirents, read_entries};
pub use tracker::CompletionTracker;
pub use walk::spawn_walker;
