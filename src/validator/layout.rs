//! Project layout validation

use crate::config::PackageConfig;
use crate::error::{PackageError, Result};

/// Check the inputs exist before anything is written.
pub fn validate_layout(config: &PackageConfig) -> Result<()> {
    let extension_dir = config.extension_dir();
    if !extension_dir.is_dir() {
        return Err(PackageError::config(extension_dir, "Extension directory not found"));
    }

    let manifest_path = config.manifest_path();
    if !manifest_path.is_file() {
        return Err(PackageError::config(manifest_path, "Manifest not found"));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_missing_extension_dir() {
        let temp = TempDir::new().unwrap();
        let config = PackageConfig::new(temp.path());

        let err = validate_layout(&config).unwrap_err();
        assert!(err.to_string().starts_with("Extension directory not found"));
        assert!(matches!(err, PackageError::Config { ref path, .. } if *path == config.extension_dir()));
    }

    #[test]
    fn test_extension_path_is_a_file() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("promptgen-extension"), "not a dir").unwrap();
        let config = PackageConfig::new(temp.path());

        assert!(validate_layout(&config).unwrap_err().is_config());
    }

    #[test]
    fn test_missing_manifest() {
        let temp = TempDir::new().unwrap();
        fs::create_dir(temp.path().join("promptgen-extension")).unwrap();
        let config = PackageConfig::new(temp.path());

        let err = validate_layout(&config).unwrap_err();
        assert!(matches!(err, PackageError::Config { ref path, .. } if *path == config.manifest_path()));
    }

    #[test]
    fn test_valid_layout() {
        let temp = TempDir::new().unwrap();
        fs::create_dir(temp.path().join("promptgen-extension")).unwrap();
        fs::write(temp.path().join("promptgen-extension/manifest.json"), "{}").unwrap();

        validate_layout(&PackageConfig::new(temp.path())).unwrap();
    }
}
