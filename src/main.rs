//! Dutally CLI: count files and bytes under the given directories.

use anyhow::Result;
use clap::Parser;
use dutally::engine::Cli;
use dutally::engine::handle_run;
use std::time::Instant;

fn main() -> Result<()> {
    let start_time = Instant::now();
    let cli = Cli::parse();
    handle_run(&cli)?;
    log::debug!("Total time: {:?}", start_time.elapsed());
    Ok(())
}
