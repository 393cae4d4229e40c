//! Engine module: command-line surface and reporting

pub mod arg_parser;
pub mod cli;
pub mod report;

// Re-export commonly used functions
pub use arg_parser::Cli;
pub use cli::{handle_run, resolve_opts};
pub use report::{clamped_secs, files_per_sec, format_progress, format_summary, gigabytes};
