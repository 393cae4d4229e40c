use clap::Parser;
use std::path::PathBuf;

struct DefaultArgs;

impl DefaultArgs {
    pub const DIR: &'static str = ".";
}

/// Fast concurrent disk usage tally.
#[derive(Clone, Debug, Parser)]
#[command(name = "dutally")]
#[command(about = "Count files and total bytes under one or more directory trees.")]
pub struct Cli {
    /// Directories to walk. Default: current directory.
    #[arg(value_name = "ROOTS", default_value = DefaultArgs::DIR)]
    pub roots: Vec<PathBuf>,

    /// Worker threads. Default: number of logical cores.
    #[arg(long, short = 't', value_parser = clap::value_parser!(usize))]
    pub threads: Option<usize>,

    /// Max directories read at once. Default: number of logical cores (capped by the FD limit).
    #[arg(long, short = 'g', value_parser = clap::value_parser!(usize))]
    pub gate: Option<usize>,

    /// Show progress every 500ms and debug logging. Plain switch: never consumes a root.
    #[arg(long, short = 'v')]
    pub verbose: bool,

    /// Size channel buffer (throughput tuning only).
    #[arg(long, value_parser = clap::value_parser!(usize))]
    pub channel_cap: Option<usize>,
}
