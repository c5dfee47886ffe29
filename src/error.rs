//! Error types for extension packaging

use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, PackageError>;

/// Every failure is fatal; nothing here is recovered by the caller.
#[derive(Debug, Error)]
pub enum PackageError {
    /// Required input is missing or the project layout is inconsistent.
    #[error("{message}: {}", path.display())]
    Config { path: PathBuf, message: String },

    #[error("Failed to parse {}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Unsupported \"version\" value in {}: expected a string or number, found {found}", path.display())]
    InvalidVersion { path: PathBuf, found: &'static str },

    #[error("Failed to {action} {}", path.display())]
    Io {
        path: PathBuf,
        action: &'static str,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write archive {}", path.display())]
    Zip {
        path: PathBuf,
        #[source]
        source: zip::result::ZipError,
    },
}

impl PackageError {
    pub fn config(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        Self::Config {
            path: path.into(),
            message: message.into(),
        }
    }

    pub fn io(action: &'static str, path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            action,
            source,
        }
    }

    /// Whether this error was detected before anything was written.
    pub fn is_config(&self) -> bool {
        matches!(self, Self::Config { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_message_names_path() {
        let err = PackageError::config("/tmp/project/promptgen-extension", "Extension directory not found");
        assert_eq!(
            err.to_string(),
            "Extension directory not found: /tmp/project/promptgen-extension"
        );
        assert!(err.is_config());
    }

    #[test]
    fn test_io_message_names_action() {
        let source = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let err = PackageError::io("create output directory", "/tmp/dist", source);
        assert_eq!(err.to_string(), "Failed to create output directory /tmp/dist");
        assert!(!err.is_config());
    }
}
