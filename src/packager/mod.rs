//! Archive building

pub mod builder;
pub mod collector;

use crate::config::PackageConfig;
use crate::error::Result;
use crate::models::PackageResult;

pub use builder::{prepare_output, write_archive};
pub use collector::collect_entries;

/// Build `<output-dir>/<basename>-v<version>.zip` from the extension directory.
pub fn build_package(config: &PackageConfig, version: &str) -> Result<PackageResult> {
    let archive_path = prepare_output(config, version)?;
    let entries = collect_entries(config)?;
    write_archive(&archive_path, &entries)?;

    tracing::info!(
        archive = %archive_path.display(),
        files = entries.len(),
        "extension packaged"
    );

    Ok(PackageResult::new(version.to_string(), archive_path, &entries))
}
