//! Stderr logging. This crate's warnings are the walk's error stream: one line per unreadable
//! directory, `[dutally WARN] open <dir>: <io error>`.

use colored::Colorize;
use env_logger::Builder;
use log::{Level, LevelFilter};
use std::io::Write;

const PKG: &str = env!("CARGO_PKG_NAME");

fn is_own_target(target: &str) -> bool {
    target == PKG || target.starts_with(&format!("{PKG}::"))
}

/// Render one log line. Our own warnings and errors carry only the program-name prefix; those
/// from dependencies also name their target so they can be told apart.
pub fn format_line(level: Level, target: &str, message: &str, color: bool) -> String {
    let name = if color {
        PKG.cyan().to_string()
    } else {
        PKG.to_string()
    };
    match level {
        Level::Error | Level::Warn => {
            let label = match (level, color) {
                (Level::Warn, true) => "WARN".yellow().to_string(),
                (_, true) => "ERROR".red().to_string(),
                (Level::Warn, false) => "WARN".to_string(),
                (_, false) => "ERROR".to_string(),
            };
            if is_own_target(target) {
                format!("[{name} {label}] {message}")
            } else {
                format!("[{name} {label} {target}] {message}")
            }
        }
        _ => format!("[{name}] {message}"),
    }
}

/// Install the stderr logger: dependencies at warn, this crate at info (debug when `verbose`).
pub fn setup_logging(verbose: bool) {
    let level = if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };

    Builder::from_default_env()
        .filter_level(LevelFilter::Warn)
        .filter_module(PKG, level)
        .format(|buf, record| {
            let message = record.args().to_string();
            writeln!(
                buf,
                "{}",
                format_line(record.level(), record.target(), &message, true)
            )
        })
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pipeline::{AdmissionGate, read_entries};
    use std::path::Path;

    #[test]
    fn test_read_failure_line_has_program_prefix_only() {
        let missing = Path::new("/definitely/not/here/dutally");
        let gate = AdmissionGate::new(1);
        let err = read_entries(missing, &gate).unwrap_err();
        let line = format_line(
            Level::Warn,
            "dutally::pipeline::reader",
            &format!("{:#}", err),
            false,
        );
        let prefix = format!("[dutally WARN] open {}: ", missing.display());
        assert!(line.starts_with(&prefix), "{line}");
        assert!(line.len() > prefix.len());
        assert!(!line.contains('\n'));
        assert!(!line.contains("pipeline::reader"));
        assert_eq!(gate.outstanding(), 0);
    }

    #[test]
    fn test_dependency_warning_keeps_target() {
        let line = format_line(Level::Warn, "rayon_core", "odd", false);
        assert_eq!(line, "[dutally WARN rayon_core] odd");
    }

    #[test]
    fn test_info_and_error_lines() {
        assert_eq!(
            format_line(Level::Info, "dutally", "hello", false),
            "[dutally] hello"
        );
        assert_eq!(
            format_line(Level::Error, "dutally::engine::cli", "bad", false),
            "[dutally ERROR] bad"
        );
    }
}
