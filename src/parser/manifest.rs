//! Manifest parsing and version resolution

use crate::config::PackageConfig;
use crate::error::{PackageError, Result};
use crate::models::Manifest;
use std::path::Path;

/// Parse manifest.json from bytes.
///
/// `path` is only used to label errors.
pub fn parse_manifest(content: &[u8], path: &Path) -> Result<Manifest> {
    serde_json::from_slice(content).map_err(|source| PackageError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

/// Parse manifest.json from file path
pub fn parse_manifest_from_file(path: impl AsRef<Path>) -> Result<Manifest> {
    let path = path.as_ref();
    let content = std::fs::read(path).map_err(|e| PackageError::io("read", path, e))?;
    parse_manifest(&content, path)
}

/// The manifest's version, or `default` when it has none.
pub fn manifest_version(manifest: &Manifest, path: &Path, default: &str) -> Result<String> {
    match manifest.version_text() {
        Ok(Some(version)) => Ok(version),
        Ok(None) => Ok(default.to_string()),
        Err(found) => Err(PackageError::InvalidVersion {
            path: path.to_path_buf(),
            found,
        }),
    }
}

/// Read the configured manifest and resolve the version to package.
pub fn resolve_version(config: &PackageConfig) -> Result<String> {
    let path = config.manifest_path();
    let manifest = parse_manifest_from_file(&path)?;
    let version = manifest_version(&manifest, &path, &config.default_version)?;
    tracing::debug!(manifest = %path.display(), %version, "resolved extension version");
    Ok(version)
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    fn resolve(json: &str) -> Result<String> {
        let path = Path::new("manifest.json");
        let manifest = parse_manifest(json.as_bytes(), path)?;
        manifest_version(&manifest, path, "0.0.0")
    }

    #[test_case(r#"{"version": "1.2.3"}"#, "1.2.3" ; "plain string")]
    #[test_case(r#"{"version": "  4.5.6 "}"#, "4.5.6" ; "surrounding whitespace")]
    #[test_case(r#"{"version": "  "}"#, "0.0.0" ; "blank string")]
    #[test_case(r#"{"version": ""}"#, "0.0.0" ; "empty string")]
    #[test_case(r#"{"version": null}"#, "0.0.0" ; "null")]
    #[test_case(r#"{}"#, "0.0.0" ; "missing key")]
    #[test_case(r#"{"version": 2}"#, "2" ; "integer")]
    #[test_case(r#"{"version": 0}"#, "0.0.0" ; "numeric zero")]
    #[test_case(r#"{"version": "1.0", "version": "2.0"}"#, "2.0" ; "repeated key keeps last")]
    fn test_resolve_version(json: &str, expected: &str) {
        assert_eq!(resolve(json).unwrap(), expected);
    }

    #[test]
    fn test_other_fields_are_ignored() {
        let json = r#"{
            "manifest_version": 3,
            "name": "PromptGen",
            "version": "0.4.0",
            "permissions": ["storage", "sidePanel"]
        }"#;
        assert_eq!(resolve(json).unwrap(), "0.4.0");
    }

    #[test]
    fn test_boolean_version_is_rejected() {
        let err = resolve(r#"{"version": true}"#).unwrap_err();
        assert!(matches!(err, PackageError::InvalidVersion { found: "boolean", .. }));
    }

    #[test]
    fn test_malformed_json_is_parse_error() {
        let err = resolve(r#"{"version": "1.0",}"#).unwrap_err();
        assert!(matches!(err, PackageError::Parse { .. }));
    }

    #[test]
    fn test_comments_are_rejected() {
        let err = resolve("{\n// comment\n\"version\": \"1.0\"}").unwrap_err();
        assert!(matches!(err, PackageError::Parse { .. }));
    }

    #[test]
    fn test_non_object_is_parse_error() {
        let err = resolve(r#"["1.0.0"]"#).unwrap_err();
        assert!(matches!(err, PackageError::Parse { .. }));
    }
}
