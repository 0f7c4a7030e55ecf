//! In-memory storage, used by tests and dry runs.

use super::{validate_path, FileStore, Result, StorageError};
use std::collections::BTreeMap;
use tokio::sync::Mutex;

/// Map-backed store with the same contract as the filesystem backend.
#[derive(Default)]
pub struct MemoryStorage {
    files: Mutex<BTreeMap<String, String>>,
}

impl MemoryStorage {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store pre-filled with `(path, content)` pairs.
    pub fn with_files<I, P, C>(files: I) -> Self
    where
        I: IntoIterator<Item = (P, C)>,
        P: Into<String>,
        C: Into<String>,
    {
        Self {
            files: Mutex::new(
                files
                    .into_iter()
                    .map(|(p, c)| (p.into(), c.into()))
                    .collect(),
            ),
        }
    }
}

#[async_trait::async_trait]
impl FileStore for MemoryStorage {
    async fn read(&self, path: &str) -> Result<String> {
        validate_path(path)?;
        self.files
            .lock()
            .await
            .get(path)
            .cloned()
            .ok_or_else(|| StorageError::NotFound(path.to_string()))
    }

    async fn write(&self, path: &str, content: &str) -> Result<()> {
        validate_path(path)?;
        self.files
            .lock()
            .await
            .insert(path.to_string(), content.to_string());
        Ok(())
    }

    async fn list(&self, dir: &str) -> Result<Vec<String>> {
        validate_path(dir)?;
        let prefix = format!("{}/", dir);
        let files = self.files.lock().await;
        let mut names: Vec<String> = files
            .keys()
            .filter_map(|path| path.strip_prefix(&prefix))
            .map(|rest| rest.split('/').next().unwrap_or(rest).to_string())
            .collect();
        names.dedup();
        Ok(names)
    }

    async fn remove(&self, path: &str) -> Result<()> {
        validate_path(path)?;
        self.files.lock().await.remove(path);
        Ok(())
    }
}
