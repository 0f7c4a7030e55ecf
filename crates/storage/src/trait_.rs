//! File store trait abstraction.

use async_trait::async_trait;
use std::path::{Component, Path};

/// Error type for storage operations.
pub type Result<T> = std::result::Result<T, StorageError>;

/// Errors that can occur during storage operations.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    /// Document does not exist
    #[error("Not found: {0}")]
    NotFound(String),

    /// I/O error (permissions, disk space, ...)
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Path escapes the store or is otherwise unusable
    #[error("Invalid path: {0}")]
    InvalidPath(String),
}

impl StorageError {
    /// Whether this error means the document is absent.
    pub fn is_not_found(&self) -> bool {
        matches!(self, StorageError::NotFound(_))
    }
}

/// Named text blobs addressed by `/`-separated relative paths.
///
/// Writes replace whole documents; concurrent writers to one path race and
/// the last write wins.
#[async_trait]
pub trait FileStore: Send + Sync {
    /// Read a document. Fails with [`StorageError::NotFound`] when absent.
    async fn read(&self, path: &str) -> Result<String>;

    /// Create or replace a document.
    async fn write(&self, path: &str, content: &str) -> Result<()>;

    /// Entry names directly inside `dir`. A missing directory lists as empty.
    async fn list(&self, dir: &str) -> Result<Vec<String>>;

    /// Delete a document. Deleting an absent document succeeds.
    async fn remove(&self, path: &str) -> Result<()>;

    /// Whether a document exists.
    async fn exists(&self, path: &str) -> Result<bool> {
        match self.read(path).await {
            Ok(_) => Ok(true),
            Err(StorageError::NotFound(_)) => Ok(false),
            Err(e) => Err(e),
        }
    }
}

/// Reject absolute paths and anything containing `..` or `.` segments.
pub fn validate_path(path: &str) -> Result<()> {
    let invalid = || StorageError::InvalidPath(path.to_string());

    if path.is_empty() || path.contains('\\') || path.contains('\0') {
        return Err(invalid());
    }
    if path.split('/').any(|segment| segment.is_empty() || segment == "." || segment == "..") {
        return Err(invalid());
    }
    if !Path::new(path)
        .components()
        .all(|c| matches!(c, Component::Normal(_)))
    {
        return Err(invalid());
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_path() {
        assert!(validate_path("reviews/daily/2025-01-01.md").is_ok());
        assert!(validate_path("goals").is_ok());

        for bad in ["", "/etc/passwd", "../x.md", "a/../../b", "a//b", "./a", "a\\b", "a/"] {
            assert!(validate_path(bad).is_err(), "accepted {bad:?}");
        }
    }

    #[test]
    fn test_not_found_tag() {
        assert!(StorageError::NotFound("x".into()).is_not_found());
        assert!(!StorageError::InvalidPath("x".into()).is_not_found());
    }
}
