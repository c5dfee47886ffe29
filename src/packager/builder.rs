//! Zip archive writer

use crate::config::PackageConfig;
use crate::error::{PackageError, Result};
use crate::models::ArchiveEntry;
use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};
use zip::write::{FileOptions, ZipWriter};
use zip::CompressionMethod;

/// Create the output directory and clear any stale archive for `version`.
///
/// Returns the path the archive should be written to.
pub fn prepare_output(config: &PackageConfig, version: &str) -> Result<PathBuf> {
    let output_dir = config.output_dir();
    fs::create_dir_all(&output_dir)
        .map_err(|e| PackageError::io("create output directory", &output_dir, e))?;

    let archive_path = config.archive_path(version);
    if archive_path.exists() {
        tracing::info!(archive = %archive_path.display(), "replacing existing archive");
        fs::remove_file(&archive_path)
            .map_err(|e| PackageError::io("remove existing archive", &archive_path, e))?;
    }

    Ok(archive_path)
}

/// Write `entries` into a new deflate-compressed zip at `zip_path`.
///
/// The archive is finalised even when an entry fails; the first error wins.
pub fn write_archive(zip_path: &Path, entries: &[ArchiveEntry]) -> Result<()> {
    let file = File::create(zip_path).map_err(|e| PackageError::io("create", zip_path, e))?;
    let mut zip = ZipWriter::new(file);

    let written = write_entries(&mut zip, zip_path, entries);
    let finished = zip
        .finish()
        .map(|_| ())
        .map_err(|source| PackageError::Zip {
            path: zip_path.to_path_buf(),
            source,
        });

    written.and(finished)
}

fn write_entries(zip: &mut ZipWriter<File>, zip_path: &Path, entries: &[ArchiveEntry]) -> Result<()> {
    let zip_err = |source| PackageError::Zip {
        path: zip_path.to_path_buf(),
        source,
    };

    for entry in entries {
        let content = fs::read(&entry.source).map_err(|e| PackageError::io("read", &entry.source, e))?;
        let options = FileOptions::default()
            .compression_method(CompressionMethod::Deflated)
            .unix_permissions(file_mode(&entry.source));

        zip.start_file(entry.name.as_str(), options).map_err(zip_err)?;
        zip.write_all(&content)
            .map_err(|e| PackageError::io("write", zip_path, e))?;
        tracing::debug!(entry = %entry.name, bytes = content.len(), "added file");
    }

    Ok(())
}

#[cfg(unix)]
fn file_mode(path: &Path) -> u32 {
    use std::os::unix::fs::PermissionsExt;

    fs::metadata(path)
        .map(|m| m.permissions().mode() & 0o777)
        .unwrap_or(0o644)
}

#[cfg(not(unix))]
fn file_mode(_path: &Path) -> u32 {
    0o644
}
