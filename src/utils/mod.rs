pub mod config;
pub mod dutally_toml;
pub mod fd_limit;
pub mod logger;

pub use config::*;
pub use dutally_toml::{DutallyToml, apply_file_to_opts, load_dutally_toml, parse_dutally_toml};
pub use fd_limit::{FDS_PER_READ, max_open_fds, max_reads_by_fd_limit};
pub use logger::{format_line, setup_logging};
