//! PromptGen extension packager
//!
//! Reads the version from `promptgen-extension/manifest.json` and writes every
//! non-ignored file under the extension directory into
//! `dist/promptgen-extension-v<version>.zip`.

pub mod config;
pub mod error;
pub mod models;
pub mod parser;
pub mod packager;
pub mod validator;
pub mod utils;
#[cfg(feature = "cli")]
pub mod logging;

pub use config::PackageConfig;
pub use error::{PackageError, Result};
pub use models::{ArchiveEntry, Manifest, PackageResult};

/// Main entry point for packaging the extension under `config.project_root`
pub fn package_extension(config: &PackageConfig) -> Result<PackageResult> {
    // 1. Inputs must exist before anything is written
    validator::validate_project(config)?;

    // 2. Resolve version from the manifest
    let version = parser::resolve_version(config)?;

    // 3. Walk the extension directory and write the archive
    packager::build_package(config, &version)
}
