//! Walk orchestration: thread pool, root dispatch, completion watcher, aggregation, report.

use anyhow::{Context, Result};
use crossbeam_channel::{Receiver, bounded, never, tick};
use log::debug;
use std::path::PathBuf;
use std::sync::Arc;
use std::thread::{self, JoinHandle};
use std::time::Instant;

use crate::utils::config::PackagePaths;
use crate::{Opts, Progress, WalkReport};

use super::aggregate::aggregate;
use super::context::WalkContext;
use super::walk::spawn_walker;

/// Build the walker pool for one invocation. Threads are named `<pkg>-walker-<n>`.
fn build_pool(threads: usize) -> Result<rayon::ThreadPool> {
    let prefix = format!("{}-walker", PackagePaths::get().pkg_name());
    rayon::ThreadPoolBuilder::new()
        .num_threads(threads.max(1))
        .thread_name(move |i| format!("{prefix}-{i}"))
        .build()
        .context("build walker thread pool")
}

/// Wait for the tracker to reach zero, then drop the last size sender (closing the channel).
fn spawn_completion_watcher(
    ctx: Arc<WalkContext>,
    sizes: crossbeam_channel::Sender<u64>,
) -> Result<JoinHandle<()>> {
    thread::Builder::new()
        .name(format!("{}-watcher", PackagePaths::get().pkg_name()))
        .spawn(move || {
            ctx.tracker.wait_for_zero();
            drop(sizes);
            ctx.tracker.mark_closed();
            debug!("all walker tasks finished, size channel closed");
        })
        .context("spawn completion watcher")
}

fn progress_ticker(opts: &Opts) -> Receiver<Instant> {
    if opts.verbose {
        tick(opts.progress_interval)
    } else {
        never()
    }
}

/// Walk every root concurrently and return the aggregated report.
///
/// Roots → one walker task each → recursive per-directory tasks → size channel → aggregator.
/// Unreadable directories (including roots) are logged and contribute nothing. Errors are only
/// returned for infrastructure failures (pool or watcher thread could not be started).
pub fn run_walk<F>(roots: &[PathBuf], opts: &Opts, on_progress: F) -> Result<WalkReport>
where
    F: FnMut(&Progress),
{
    let start = Instant::now();
    let ctx = Arc::new(WalkContext::new(opts.gate_capacity));
    let pool = build_pool(opts.threads)?;
    debug!(
        "walking {} root(s) with {} threads, gate capacity {}, channel cap {}",
        roots.len(),
        pool.current_num_threads(),
        ctx.gate.capacity(),
        opts.channel_cap
    );

    let (size_tx, size_rx) = bounded::<u64>(opts.channel_cap);

    // Every root is registered before the watcher starts, so an early-finishing root
    // cannot let the count touch zero while later roots are still pending.
    pool.install(|| {
        for root in roots {
            spawn_walker(root.clone(), Arc::clone(&ctx), size_tx.clone());
        }
    });
    let watcher = spawn_completion_watcher(Arc::clone(&ctx), size_tx)?;

    let ticker = progress_ticker(opts);
    let totals = aggregate(&size_rx, &ticker, &ctx.tracker, start, on_progress);
    let elapsed = start.elapsed();

    watcher
        .join()
        .map_err(|_| anyhow::anyhow!("completion watcher panicked"))?;

    let unreadable_dirs = ctx.unreadable();
    if unreadable_dirs > 0 {
        debug!("{} directories could not be read", unreadable_dirs);
    }
    debug!(
        "done: {} files, {} bytes, {} directories in {:?}",
        totals.files,
        totals.bytes,
        ctx.tracker.spawned(),
        elapsed
    );

    Ok(WalkReport {
        totals,
        elapsed,
        dirs_walked: ctx.tracker.spawned(),
        unreadable_dirs,
        peak_reads: ctx.gate.peak(),
        channel_closes: ctx.tracker.closes(),
    })
}
