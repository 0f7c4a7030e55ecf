//! Draft lifecycle.
//!
//! Drafts live under the drafts directory at the same relative path as the
//! document they belong to. Saving and clearing are idempotent; a committed
//! save of the document clears its draft.

use crate::error::Result;
use crate::response::{DraftResponse, DraftStatus};
use journal_core::DocumentRef;
use journal_storage::{FileStore, StorageError};
use tracing::debug;

/// Draft operations for one store.
pub struct DraftLifecycle<'a, S: FileStore + ?Sized> {
    storage: &'a S,
    drafts_dir: &'a str,
}

impl<'a, S: FileStore + ?Sized> DraftLifecycle<'a, S> {
    /// Drafts for `storage`, kept under `drafts_dir`.
    pub fn new(storage: &'a S, drafts_dir: &'a str) -> Self {
        Self { storage, drafts_dir }
    }

    /// Current draft of `doc`, if any.
    pub async fn load(&self, doc: &DocumentRef) -> Result<DraftResponse> {
        let content = self.read_opt(&doc.draft_path(self.drafts_dir)).await?;
        Ok(DraftResponse {
            has_draft: content.is_some(),
            content,
        })
    }

    /// Store `content` as the draft of `doc`, replacing any previous draft.
    pub async fn save(&self, doc: &DocumentRef, content: &str) -> Result<()> {
        self.storage.write(&doc.draft_path(self.drafts_dir), content).await?;
        debug!("Saved draft for {}", doc);
        Ok(())
    }

    /// Delete the draft of `doc`. Succeeds when there is none.
    pub async fn clear(&self, doc: &DocumentRef) -> Result<()> {
        self.storage.remove(&doc.draft_path(self.drafts_dir)).await?;
        debug!("Cleared draft for {}", doc);
        Ok(())
    }

    /// Whether a draft exists and whether it is worth restoring.
    pub async fn status(&self, doc: &DocumentRef) -> Result<DraftStatus> {
        let Some(draft) = self.read_opt(&doc.draft_path(self.drafts_dir)).await? else {
            return Ok(DraftStatus {
                present: false,
                restorable: false,
            });
        };
        let saved = self.read_opt(&doc.relative_path()).await?;

        Ok(DraftStatus {
            present: true,
            restorable: !draft.trim().is_empty() && saved.as_deref() != Some(draft.as_str()),
        })
    }

    async fn read_opt(&self, path: &str) -> Result<Option<String>> {
        match self.storage.read(path).await {
            Ok(text) => Ok(Some(text)),
            Err(StorageError::NotFound(_)) => Ok(None),
            Err(e) => Err(e.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use journal_core::layout;
    use journal_storage::MemoryStorage;

    fn doc() -> DocumentRef {
        DocumentRef::weekly("2025-12-29").unwrap()
    }

    #[tokio::test]
    async fn test_absent_draft() {
        let storage = MemoryStorage::new();
        let drafts = DraftLifecycle::new(&storage, layout::DRAFTS_DIR);

        let response = drafts.load(&doc()).await.unwrap();
        assert_eq!(response, DraftResponse { content: None, has_draft: false });

        let status = drafts.status(&doc()).await.unwrap();
        assert!(!status.present && !status.restorable);
    }

    #[tokio::test]
    async fn test_save_is_idempotent_and_parallel_namespace() {
        let storage = MemoryStorage::new();
        let drafts = DraftLifecycle::new(&storage, layout::DRAFTS_DIR);

        drafts.save(&doc(), "half written").await.unwrap();
        drafts.save(&doc(), "half written").await.unwrap();

        assert_eq!(
            storage.read("drafts/reviews/weekly/2025-12-29.md").await.unwrap(),
            "half written"
        );
        assert!(!storage.exists("reviews/weekly/2025-12-29.md").await.unwrap());

        let response = drafts.load(&doc()).await.unwrap();
        assert_eq!(response.content.as_deref(), Some("half written"));
        assert!(response.has_draft);
    }

    #[tokio::test]
    async fn test_clear_is_idempotent() {
        let storage = MemoryStorage::new();
        let drafts = DraftLifecycle::new(&storage, layout::DRAFTS_DIR);

        drafts.save(&doc(), "x").await.unwrap();
        drafts.clear(&doc()).await.unwrap();
        drafts.clear(&doc()).await.unwrap();
        assert!(!drafts.load(&doc()).await.unwrap().has_draft);
    }

    #[tokio::test]
    async fn test_restorable_only_when_it_differs() {
        let storage = MemoryStorage::with_files([("reviews/weekly/2025-12-29.md", "saved")]);
        let drafts = DraftLifecycle::new(&storage, layout::DRAFTS_DIR);

        drafts.save(&doc(), "saved").await.unwrap();
        let status = drafts.status(&doc()).await.unwrap();
        assert!(status.present);
        assert!(!status.restorable);

        drafts.save(&doc(), "  \n").await.unwrap();
        assert!(!drafts.status(&doc()).await.unwrap().restorable);

        drafts.save(&doc(), "edited").await.unwrap();
        assert!(drafts.status(&doc()).await.unwrap().restorable);
    }
}
