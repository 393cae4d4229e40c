//! Public and internal types for the dutally API and pipeline.

use std::time::Duration;

use crate::utils::config::{DEFAULT_CHANNEL_CAP, PROGRESS_INTERVAL, WorkerThreadLimits};
use crate::utils::fd_limit::max_reads_by_fd_limit;

/// Running (or final) file count and byte total. Owned by the aggregator.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Totals {
    pub files: u64,
    pub bytes: u64,
}

impl Totals {
    /// Account one file of `size` bytes.
    pub fn add(&mut self, size: u64) {
        self.files += 1;
        self.bytes += size;
    }
}

/// Snapshot handed to the progress callback on each tick.
#[derive(Clone, Copy, Debug)]
pub struct Progress {
    pub totals: Totals,
    /// Time since the walk started.
    pub elapsed: Duration,
    /// Walker tasks registered but not yet finished.
    pub in_flight: usize,
}

/// Result of a completed walk.
#[derive(Clone, Debug)]
pub struct WalkReport {
    pub totals: Totals,
    pub elapsed: Duration,
    /// Walker tasks spawned, one per directory visited (roots included).
    pub dirs_walked: u64,
    /// Directories whose listing failed; their subtrees contribute nothing.
    pub unreadable_dirs: usize,
    /// Most directory reads ever in flight at once.
    pub peak_reads: usize,
    /// Times the size channel was closed. Always 1 for a finished walk.
    pub channel_closes: usize,
}

/// Lib-only options for [`du_dirs`](crate::du_dirs). `None` means use the default.
#[derive(Clone, Debug, Default)]
pub struct WalkOpts {
    /// Worker threads in the walker pool. Default: logical CPU count.
    pub num_threads: Option<usize>,
    /// Max simultaneous directory reads. Default: logical CPU count, capped by the FD limit.
    pub gate_capacity: Option<usize>,
    /// Call the progress callback every `progress_interval`.
    pub verbose: bool,
    /// Size channel buffer. Any value (including 0) is correct; it only affects throughput.
    pub channel_cap: Option<usize>,
    /// Progress tick interval. Default 500 ms.
    pub progress_interval: Option<Duration>,
}

impl From<&WalkOpts> for Opts {
    fn from(o: &WalkOpts) -> Self {
        let defaults = Opts::default();
        Opts {
            threads: o.num_threads.unwrap_or(defaults.threads).max(1),
            gate_capacity: o.gate_capacity.unwrap_or(defaults.gate_capacity).max(1),
            verbose: o.verbose,
            channel_cap: o.channel_cap.unwrap_or(defaults.channel_cap),
            progress_interval: o.progress_interval.unwrap_or(defaults.progress_interval),
        }
    }
}

/// Fully resolved options (CLI and lib). Built from [`WalkOpts`] or by the CLI layer.
#[derive(Clone, Debug)]
pub struct Opts {
    pub threads: usize,
    pub gate_capacity: usize,
    pub verbose: bool,
    pub channel_cap: usize,
    pub progress_interval: Duration,
}

impl Default for Opts {
    fn default() -> Self {
        let cpus = WorkerThreadLimits::current().all_threads;
        let gate_capacity = match max_reads_by_fd_limit() {
            Some(fd_cap) if fd_cap < cpus => fd_cap,
            _ => cpus,
        };
        Self {
            threads: cpus,
            gate_capacity,
            verbose: false,
            channel_cap: DEFAULT_CHANNEL_CAP,
            progress_interval: PROGRESS_INTERVAL,
        }
    }
}
