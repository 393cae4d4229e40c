//! Aggregator loop: sole consumer of the size channel, also drives progress ticks.

use crossbeam_channel::{Receiver, select};
use std::time::Instant;

use super::tracker::CompletionTracker;
use crate::{Progress, Totals};

/// Accumulate sizes until the channel is closed and drained; return the final totals.
///
/// Each tick on `ticker` calls `on_progress` with the running totals, elapsed time since
/// `start`, and the tracker's in-flight count. Pass `crossbeam_channel::never()` to disable ticks.
pub fn aggregate<F>(
    sizes: &Receiver<u64>,
    ticker: &Receiver<Instant>,
    tracker: &CompletionTracker,
    start: Instant,
    mut on_progress: F,
) -> Totals
where
    F: FnMut(&Progress),
{
    let mut totals = Totals::default();
    loop {
        select! {
            recv(sizes) -> msg => match msg {
                Ok(size) => totals.add(size),
                Err(_) => break,
            },
            recv(ticker) -> _ => on_progress(&Progress {
                totals,
                elapsed: start.elapsed(),
                in_flight: tracker.in_flight(),
            }),
        }
    }
    totals
}
