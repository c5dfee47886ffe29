//! Project layout configuration

use std::path::{Path, PathBuf};

pub const EXTENSION_DIR_NAME: &str = "promptgen-extension";
pub const MANIFEST_FILE_NAME: &str = "manifest.json";
pub const OUTPUT_DIR_NAME: &str = "dist";
pub const ARCHIVE_BASENAME: &str = "promptgen-extension";
pub const DEFAULT_VERSION: &str = "0.0.0";

/// Operating-system housekeeping files that never go into the archive.
pub const IGNORED_FILE_NAMES: &[&str] = &[".DS_Store", "Thumbs.db"];

/// Where the extension lives and where its archive goes.
///
/// All paths derive from `project_root`; the remaining fields default to the
/// constants above.
#[derive(Debug, Clone)]
pub struct PackageConfig {
    pub project_root: PathBuf,
    pub extension_dir_name: String,
    pub manifest_file_name: String,
    pub output_dir_name: String,
    pub archive_basename: String,
    pub default_version: String,
    pub ignored_file_names: Vec<String>,
}

impl PackageConfig {
    pub fn new(project_root: impl Into<PathBuf>) -> Self {
        Self {
            project_root: project_root.into(),
            extension_dir_name: EXTENSION_DIR_NAME.to_string(),
            manifest_file_name: MANIFEST_FILE_NAME.to_string(),
            output_dir_name: OUTPUT_DIR_NAME.to_string(),
            archive_basename: ARCHIVE_BASENAME.to_string(),
            default_version: DEFAULT_VERSION.to_string(),
            ignored_file_names: IGNORED_FILE_NAMES.iter().map(|s| s.to_string()).collect(),
        }
    }

    pub fn extension_dir(&self) -> PathBuf {
        self.project_root.join(&self.extension_dir_name)
    }

    pub fn manifest_path(&self) -> PathBuf {
        self.extension_dir().join(&self.manifest_file_name)
    }

    pub fn output_dir(&self) -> PathBuf {
        self.project_root.join(&self.output_dir_name)
    }

    /// `<basename>-v<version>.zip`
    pub fn archive_file_name(&self, version: &str) -> String {
        format!("{}-v{}.zip", self.archive_basename, version)
    }

    pub fn archive_path(&self, version: &str) -> PathBuf {
        self.output_dir().join(self.archive_file_name(version))
    }

    pub fn is_ignored(&self, path: &Path) -> bool {
        path.file_name()
            .and_then(|n| n.to_str())
            .map(|name| self.ignored_file_names.iter().any(|ignored| ignored == name))
            .unwrap_or(false)
    }
}
