//! Directory reader: list one directory under the admission gate.

use anyhow::{Context, Result};
use std::ffi::OsString;
use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use super::context::WalkContext;
use super::gate::AdmissionGate;

/// Snapshot of one directory entry. `size` is only meaningful when `is_dir` is false.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DirEntryInfo {
    pub name: OsString,
    pub is_dir: bool,
    pub size: u64,
}

/// List the immediate entries of `dir` while holding one gate token.
///
/// Entries are returned in filesystem order. Metadata is taken with `lstat` semantics, so a
/// symlink is reported as a non-directory with the link's own size. An entry that disappears
/// between enumeration and `lstat` is skipped; any other failure fails the whole listing.
pub fn read_entries(dir: &Path, gate: &AdmissionGate) -> Result<Vec<DirEntryInfo>> {
    let _permit = gate.acquire();
    let mut entries = Vec::new();
    for entry in fs::read_dir(dir).with_context(|| format!("open {}", dir.display()))? {
        let entry = entry.with_context(|| format!("readdirent {}", dir.display()))?;
        let meta = match entry.metadata() {
            Ok(m) => m,
            Err(e) if e.kind() == ErrorKind::NotFound => continue,
            Err(e) => {
                return Err(e).with_context(|| format!("lstat {}", entry.path().display()));
            }
        };
        entries.push(DirEntryInfo {
            name: entry.file_name(),
            is_dir: meta.is_dir(),
            size: meta.len(),
        });
    }
    Ok(entries)
}

/// Like [`read_entries`], but a failure is reported on the error stream and treated as an empty
/// directory so the rest of the walk continues.
pub fn dirents(dir: &Path, ctx: &WalkContext) -> Vec<DirEntryInfo> {
    match read_entries(dir, &ctx.gate) {
        Ok(entries) => entries,
        Err(err) => {
            ctx.record_unreadable();
            log::warn!("{:#}", err);
            Vec::new()
        }
    }
}
