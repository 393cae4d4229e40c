//! CLI command handler: walk the roots, print progress (verbose) and the final summary.

use anyhow::Result;
use log::debug;
use std::path::Path;

use crate::Opts;
use crate::engine::arg_parser::Cli;
use crate::engine::report::{format_progress, format_summary};
use crate::pipeline::run_walk;
use crate::utils::{apply_file_to_opts, load_dutally_toml, setup_logging};

/// Resolve options: defaults, then `.dutally.toml` in `config_dir`, then CLI flags.
pub fn resolve_opts(cli: &Cli, config_dir: &Path) -> Opts {
    let mut opts = Opts::default();
    if let Some(file) = load_dutally_toml(config_dir) {
        apply_file_to_opts(&file, &mut opts);
    }
    if let Some(n) = cli.threads {
        opts.threads = n;
    }
    if let Some(n) = cli.gate {
        opts.gate_capacity = n;
    }
    // Only a set switch overrides the file; absence keeps `.dutally.toml`'s choice.
    if cli.verbose {
        opts.verbose = true;
    }
    if let Some(n) = cli.channel_cap {
        opts.channel_cap = n;
    }
    opts.threads = opts.threads.max(1);
    opts.gate_capacity = opts.gate_capacity.max(1);
    opts
}

/// Walk every root and print the summary. Read errors are logged, never fatal.
pub fn handle_run(cli: &Cli) -> Result<()> {
    setup_logging(cli.verbose);
    let opts = resolve_opts(cli, Path::new("."));
    debug!("{:#?}", opts);

    let report = run_walk(&cli.roots, &opts, |p| println!("{}", format_progress(p)))?;
    println!("{}", format_summary(&report));
    Ok(())
}
