//! Human-readable progress and summary lines. Pure functions of (totals, elapsed).

use std::time::Duration;

use crate::utils::config::BYTES_PER_GB;
use crate::{Progress, Totals, WalkReport};

/// Whole seconds elapsed, never less than 1 so rates stay finite.
pub fn clamped_secs(elapsed: Duration) -> u64 {
    elapsed.as_secs().max(1)
}

/// Decimal gigabytes.
pub fn gigabytes(bytes: u64) -> f64 {
    bytes as f64 / BYTES_PER_GB
}

/// Files per second over `elapsed` (integer, clamped elapsed).
pub fn files_per_sec(totals: &Totals, elapsed: Duration) -> u64 {
    totals.files / clamped_secs(elapsed)
}

/// `Files: <n>, Size: <x.y>GB, Tasks: <in-flight>, Cur FPS: <n>`
pub fn format_progress(p: &Progress) -> String {
    format!(
        "Files: {}, Size: {:.1}GB, Tasks: {}, Cur FPS: {}",
        p.totals.files,
        gigabytes(p.totals.bytes),
        p.in_flight,
        files_per_sec(&p.totals, p.elapsed)
    )
}

/// `Files: <n>, Size: <x.y>GB, Avg FPS: <n>, Elapsed: <s> seconds`
pub fn format_summary(report: &WalkReport) -> String {
    format!(
        "Files: {}, Size: {:.1}GB, Avg FPS: {}, Elapsed: {} seconds",
        report.totals.files,
        gigabytes(report.totals.bytes),
        files_per_sec(&report.totals, report.elapsed),
        clamped_secs(report.elapsed)
    )
}
