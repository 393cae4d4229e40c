//! Application configuration constants.
//! Tuning and thresholds in one place.

use std::sync::OnceLock;
use std::time::Duration;

// ---- Package / paths (from CARGO_PKG_NAME, cached) ----

/// Package-derived names: built once from `CARGO_PKG_NAME`, then cached.
pub struct PackagePaths {
    pkg_name: &'static str,
    config_filename: String,
}

static PACKAGE_PATHS: OnceLock<PackagePaths> = OnceLock::new();

impl PackagePaths {
    /// Build and cache names from `CARGO_PKG_NAME`. Called once on first use.
    pub fn get() -> &'static PackagePaths {
        PACKAGE_PATHS.get_or_init(|| {
            let pkg = env!("CARGO_PKG_NAME");
            PackagePaths {
                pkg_name: pkg,
                config_filename: format!(".{pkg}.toml"),
            }
        })
    }

    pub fn pkg_name(&self) -> &str {
        self.pkg_name
    }

    /// Optional settings file looked up in the working directory (CLI only).
    pub fn config_filename(&self) -> &str {
        &self.config_filename
    }
}

// ---- Worker threads ----

/// Available parallelism for the walker pool and the admission gate.
/// Use [`WorkerThreadLimits::current()`] to fill `all_threads` with the logical CPU count.
#[derive(Clone, Copy, Debug)]
pub struct WorkerThreadLimits {
    /// Logical CPUs; set by [`WorkerThreadLimits::current()`].
    pub all_threads: usize,
}

impl WorkerThreadLimits {
    /// Build limits with `all_threads` set from `num_cpus::get()`. Does not touch rayon's global
    /// pool; each walk builds its own.
    pub fn current() -> Self {
        Self {
            all_threads: num_cpus::get().max(1),
        }
    }
}

// ---- Size channel ----

/// Default size channel buffer. Correctness does not depend on it; 0 works, just slower.
pub const DEFAULT_CHANNEL_CAP: usize = 256;

// ---- Progress ----

/// How often the aggregator reports progress in verbose mode.
pub const PROGRESS_INTERVAL: Duration = Duration::from_millis(500);

/// Bytes per reported gigabyte (decimal).
pub const BYTES_PER_GB: f64 = 1e9;
