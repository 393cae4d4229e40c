//! Load `.dutally.toml` from a directory (CLI only). Lib callers inject config via WalkOpts.

use serde::Deserialize;
use std::path::Path;
use std::time::Duration;

use crate::Opts;
use crate::utils::config::PackagePaths;

#[derive(Debug, Default, Deserialize)]
pub struct DutallyToml {
    #[serde(default)]
    settings: SettingsSection,
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct SettingsSection {
    threads: Option<usize>,
    gate_capacity: Option<usize>,
    verbose: Option<bool>,
    channel_cap: Option<usize>,
    progress_interval_ms: Option<u64>,
}

/// Parse settings text. Separate from the file lookup so it can be tested directly.
pub fn parse_dutally_toml(s: &str) -> Result<DutallyToml, toml::de::Error> {
    toml::from_str(s)
}

/// Load `.dutally.toml` from `dir` if present. Returns None if missing, unreadable, or malformed.
pub fn load_dutally_toml(dir: &Path) -> Option<DutallyToml> {
    let path = dir.join(PackagePaths::get().config_filename());
    let s = std::fs::read_to_string(&path).ok()?;
    parse_dutally_toml(&s)
        .map_err(|e| log::warn!("{}: {}", path.display(), e))
        .ok()
}

/// Overwrite opts field from file when present.
macro_rules! apply_file_opt {
    ($sec:expr, $opts:expr, $sec_field:ident => $opts_field:ident) => {
        if let Some(v) = $sec.$sec_field {
            $opts.$opts_field = v;
        }
    };
}

/// Apply file config to opts (only fields present in the file). Call before applying CLI.
pub fn apply_file_to_opts(file: &DutallyToml, opts: &mut Opts) {
    let sec = &file.settings;
    apply_file_opt!(sec, opts, threads => threads);
    apply_file_opt!(sec, opts, gate_capacity => gate_capacity);
    apply_file_opt!(sec, opts, verbose => verbose);
    apply_file_opt!(sec, opts, channel_cap => channel_cap);
    if let Some(ms) = sec.progress_interval_ms {
        opts.progress_interval = Duration::from_millis(ms.max(1));
    }
}
