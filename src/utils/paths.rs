//! Path helpers for archive entry names and project discovery

use crate::config::EXTENSION_DIR_NAME;
use std::path::{Component, Path, PathBuf};

/// Render a path with `/` separators regardless of the host convention.
pub fn to_forward_slashes(path: &Path) -> String {
    path.to_string_lossy().replace(std::path::MAIN_SEPARATOR, "/")
}

/// Build an archive entry name from a relative path.
///
/// Fails with a reason if the path is empty, not purely relative, or has a
/// component that is not valid UTF-8.
pub fn entry_name(relative: &Path) -> Result<String, &'static str> {
    let mut parts = Vec::new();
    for component in relative.components() {
        match component {
            Component::Normal(part) => parts.push(part.to_str().ok_or("File name is not valid UTF-8")?),
            Component::CurDir => {}
            _ => return Err("Path is not relative to the project root"),
        }
    }

    if parts.is_empty() {
        Err("Path is empty")
    } else {
        Ok(parts.join("/"))
    }
}

/// Find the nearest ancestor of `start` (inclusive) holding the extension
/// directory, falling back to `start` itself.
pub fn find_project_root(start: &Path) -> PathBuf {
    start
        .ancestors()
        .find(|dir| dir.join(EXTENSION_DIR_NAME).is_dir())
        .unwrap_or(start)
        .to_path_buf()
}
