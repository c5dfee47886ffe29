//! Archive entries and packaging results

use serde::Serialize;
use std::path::PathBuf;

/// A source file and the name it is stored under inside the archive.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArchiveEntry {
    pub source: PathBuf,
    /// Project-root-relative path with `/` separators.
    pub name: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct PackageResult {
    pub version: String,
    pub archive_path: PathBuf,
    pub entries: Vec<String>,
}

impl PackageResult {
    pub fn new(version: String, archive_path: PathBuf, entries: &[ArchiveEntry]) -> Self {
        Self {
            version,
            archive_path,
            entries: entries.iter().map(|e| e.name.clone()).collect(),
        }
    }

    /// Archive path in forward-slash form, as printed on success.
    pub fn display_path(&self) -> String {
        crate::utils::paths::to_forward_slashes(&self.archive_path)
    }

    pub fn file_count(&self) -> usize {
        self.entries.len()
    }
}
