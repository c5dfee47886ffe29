//! Source tree enumeration

use crate::config::PackageConfig;
use crate::error::{PackageError, Result};
use crate::models::ArchiveEntry;
use crate::utils::paths::entry_name;
use std::path::Path;
use walkdir::WalkDir;

/// Walk the extension directory and name every file that goes into the
/// archive.
///
/// Entries come back in walk order. Names are relative to the project root,
/// so they keep the extension directory as their first component.
pub fn collect_entries(config: &PackageConfig) -> Result<Vec<ArchiveEntry>> {
    let source_dir = config.extension_dir();
    let mut entries = Vec::new();

    for entry in WalkDir::new(&source_dir).min_depth(1) {
        let entry = entry.map_err(|err| {
            let path = err
                .path()
                .map(Path::to_path_buf)
                .unwrap_or_else(|| source_dir.clone());
            PackageError::io("walk", path, err.into())
        })?;
        let path = entry.path();

        // Follows symlinks, so linked directories are skipped as well.
        if path.is_dir() {
            continue;
        }
        if config.is_ignored(path) {
            tracing::debug!(path = %path.display(), "skipping ignored file");
            continue;
        }

        let relative = path
            .strip_prefix(&config.project_root)
            .map_err(|_| PackageError::config(path, "Source file is outside the project root"))?;
        let name = entry_name(relative).map_err(|reason| PackageError::config(path, reason))?;

        entries.push(ArchiveEntry {
            source: path.to_path_buf(),
            name,
        });
    }

    Ok(entries)
}
