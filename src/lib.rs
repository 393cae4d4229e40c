//! Dutally: fast concurrent disk usage tally across one or more directory trees.

pub mod engine;
pub mod pipeline;
pub mod types;
pub mod utils;

/// Re-export types for API
pub use types::*;

use log::debug;
use std::path::PathBuf;

/// Result alias used by public dutally API
pub use anyhow::Error;
pub type Result<T> = std::result::Result<T, Error>;

/// Single entry point: walk every path in `roots` and return file count, byte total and timing.
///
/// - **`on_progress: None`** → no progress callbacks, even when `opts.verbose` is set.
/// - **`on_progress: Some(f)`** → with `opts.verbose`, `f` is called on the calling thread every
///   progress interval with the running totals. Keep it fast; the walk's size channel is not
///   drained while it runs.
///
/// Unreadable roots and directories are logged and skipped; they never make this return `Err`.
pub fn du_dirs<F>(roots: &[PathBuf], opts: &WalkOpts, on_progress: Option<F>) -> Result<WalkReport>
where
    F: FnMut(&Progress),
{
    let mut opts = Opts::from(opts);
    opts.verbose &= on_progress.is_some();
    debug!(
        "{} CONFIG:{:#?}",
        env!("CARGO_PKG_NAME").to_string().to_uppercase(),
        opts
    );

    match on_progress {
        None => pipeline::run_walk(roots, &opts, |_| {}),
        Some(f) => pipeline::run_walk(roots, &opts, f),
    }
}
