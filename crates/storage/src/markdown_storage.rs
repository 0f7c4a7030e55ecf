//! Filesystem storage implementation.
//!
//! Stores every document as a plain markdown file under a root directory, so
//! the data stays editable by hand. Paths are validated before they are
//! joined to the root.

use super::{validate_path, FileStore, Result, StorageError};
use journal_core::layout;
use std::path::{Path, PathBuf};
use tokio::fs;
use tracing::debug;

/// File-based markdown storage backend.
pub struct MarkdownStorage {
    root: PathBuf,
}

impl MarkdownStorage {
    /// Open storage at `root`. Nothing is created until a write or [`init`](Self::init).
    pub fn new(root: impl AsRef<Path>) -> Self {
        Self {
            root: root.as_ref().to_path_buf(),
        }
    }

    /// Create the document directories under the root.
    pub async fn init(&self) -> Result<()> {
        for dir in [
            layout::DAILY_DIR,
            layout::WEEKLY_DIR,
            layout::GOALS_DIR,
            layout::FRAMEWORKS_DIR,
            layout::DRAFTS_DIR,
        ] {
            fs::create_dir_all(self.root.join(dir)).await?;
        }
        debug!("Initialized journal layout at {}", self.root.display());
        Ok(())
    }

    /// Root directory of the store.
    pub fn root(&self) -> &Path {
        &self.root
    }

    fn resolve(&self, path: &str) -> Result<PathBuf> {
        validate_path(path)?;
        Ok(self.root.join(path))
    }
}

#[async_trait::async_trait]
impl FileStore for MarkdownStorage {
    async fn read(&self, path: &str) -> Result<String> {
        let full = self.resolve(path)?;
        match fs::read_to_string(&full).await {
            Ok(text) => Ok(text),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                Err(StorageError::NotFound(path.to_string()))
            }
            Err(e) => Err(e.into()),
        }
    }

    async fn write(&self, path: &str, content: &str) -> Result<()> {
        let full = self.resolve(path)?;
        if let Some(parent) = full.parent() {
            fs::create_dir_all(parent).await?;
        }
        fs::write(&full, content.as_bytes()).await?;
        debug!("Wrote {} ({} bytes)", path, content.len());
        Ok(())
    }

    async fn list(&self, dir: &str) -> Result<Vec<String>> {
        let full = self.resolve(dir)?;
        let mut rd = match fs::read_dir(&full).await {
            Ok(rd) => rd,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                debug!("Directory {} does not exist, listing as empty", dir);
                return Ok(Vec::new());
            }
            Err(e) => return Err(e.into()),
        };

        let mut names = Vec::new();
        while let Some(entry) = rd.next_entry().await? {
            if let Some(name) = entry.file_name().to_str() {
                names.push(name.to_string());
            }
        }
        names.sort();
        Ok(names)
    }

    async fn remove(&self, path: &str) -> Result<()> {
        let full = self.resolve(path)?;
        fs::remove_file(&full).await.or_else(|e| {
            if e.kind() == std::io::ErrorKind::NotFound { Ok(()) } else { Err(e) }
        })?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[tokio::test]
    async fn test_init_creates_layout() {
        let dir = TempDir::new().unwrap();
        let storage = MarkdownStorage::new(dir.path());
        storage.init().await.unwrap();
        assert!(storage.root().join("reviews/daily").is_dir());
        assert!(storage.root().join("drafts").is_dir());
    }

    #[tokio::test]
    async fn test_reads_leave_missing_root_untouched() {
        let dir = TempDir::new().unwrap();
        let root = dir.path().join(".journal");
        let storage = MarkdownStorage::new(&root);

        assert!(storage.list("reviews/daily").await.unwrap().is_empty());
        assert!(!storage.exists("goals/1-year.md").await.unwrap());
        assert!(!root.exists());

        storage.write("goals/1-year.md", "g").await.unwrap();
        assert!(root.join("goals/1-year.md").is_file());
    }

    #[tokio::test]
    async fn test_write_read_remove() {
        let dir = TempDir::new().unwrap();
        let storage = MarkdownStorage::new(dir.path());

        storage.write("reviews/daily/2025-01-01.md", "# Daily Review\n").await.unwrap();
        assert_eq!(storage.read("reviews/daily/2025-01-01.md").await.unwrap(), "# Daily Review\n");
        assert!(storage.exists("reviews/daily/2025-01-01.md").await.unwrap());

        storage.remove("reviews/daily/2025-01-01.md").await.unwrap();
        storage.remove("reviews/daily/2025-01-01.md").await.unwrap();
        assert!(matches!(
            storage.read("reviews/daily/2025-01-01.md").await,
            Err(StorageError::NotFound(_))
        ));
    }

    #[tokio::test]
    async fn test_write_creates_parents() {
        let dir = TempDir::new().unwrap();
        let storage = MarkdownStorage::new(dir.path());
        storage.write("drafts/reviews/weekly/2025-12-29.md", "draft").await.unwrap();
        assert_eq!(storage.read("drafts/reviews/weekly/2025-12-29.md").await.unwrap(), "draft");
    }

    #[tokio::test]
    async fn test_list_sorted_and_missing_dir() {
        let dir = TempDir::new().unwrap();
        let storage = MarkdownStorage::new(dir.path());
        storage.write("goals/3-year.md", "b").await.unwrap();
        storage.write("goals/1-year.md", "a").await.unwrap();

        assert_eq!(storage.list("goals").await.unwrap(), vec!["1-year.md", "3-year.md"]);
        assert!(storage.list("nowhere").await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_rejects_escaping_paths() {
        let dir = TempDir::new().unwrap();
        let storage = MarkdownStorage::new(dir.path());
        assert!(matches!(
            storage.read("../outside.md").await,
            Err(StorageError::InvalidPath(_))
        ));
        assert!(matches!(
            storage.write("/tmp/x.md", "x").await,
            Err(StorageError::InvalidPath(_))
        ));
    }
}
