//! Journal service - the operations the HTTP layer calls.
//!
//! Inputs arrive as strings and are validated here before any file access.
//! Each operation reads or writes whole documents through the file store and
//! runs the matching codec.

use crate::draft::DraftLifecycle;
use crate::error::Result;
use crate::response::{
    DocumentDetail, DraftResponse, DraftStatus, GoalSnapshot, ReviewsResponse, Saved,
};
use crate::validation;
use journal_codec::{
    frontmatter, DailyReviewCodec, DocumentCodec, FrameworkCodec, FrameworkDocument, GoalsCodec,
    WeeklyReviewCodec,
};
use journal_core::{
    layout, DailyReviewRecord, DocumentRef, Frontmatter, FrameworkName, GoalHorizon,
    WeeklyReviewRecord,
};
use journal_reflection::{FeedConfig, ReviewFeed};
use journal_storage::FileStore;
use tracing::{info, warn};

/// Configuration for the journal service.
#[derive(Debug, Clone)]
pub struct ServiceConfig {
    /// Maximum goals in a snapshot
    pub snapshot_limit: usize,
    /// Directory that mirrors document paths for drafts
    pub drafts_dir: String,
    /// Review directories
    pub feed: FeedConfig,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            snapshot_limit: 5,
            drafts_dir: layout::DRAFTS_DIR.to_string(),
            feed: FeedConfig::default(),
        }
    }
}

/// Entry point for reading and writing journal documents.
pub struct JournalService<S: FileStore> {
    storage: S,
    config: ServiceConfig,
}

impl<S: FileStore> JournalService<S> {
    /// Create a service over `storage`.
    pub fn new(storage: S) -> Self {
        Self {
            storage,
            config: ServiceConfig::default(),
        }
    }

    /// Set the configuration.
    pub fn with_config(mut self, config: ServiceConfig) -> Self {
        self.config = config;
        self
    }

    /// The underlying store.
    pub fn storage(&self) -> &S {
        &self.storage
    }

    fn drafts(&self) -> DraftLifecycle<'_, S> {
        DraftLifecycle::new(&self.storage, &self.config.drafts_dir)
    }

    // === Goals ===

    /// First goals of a horizon document, with the document status applied.
    pub async fn goal_snapshot(&self, horizon: &str) -> Result<GoalSnapshot> {
        let doc = DocumentRef::Goals(horizon.parse::<GoalHorizon>()?);
        let path = doc.relative_path();
        let raw = self.storage.read(&path).await?;

        let mut goals = GoalsCodec::parse(&raw, &path).goals;
        goals.truncate(self.config.snapshot_limit);
        Ok(GoalSnapshot { goals })
    }

    /// Full goals document as content plus metadata.
    pub async fn goal_detail(&self, horizon: &str) -> Result<DocumentDetail> {
        let doc = DocumentRef::Goals(horizon.parse::<GoalHorizon>()?);
        let raw = self.storage.read(&doc.relative_path()).await?;
        let extracted = frontmatter::extract(&raw);
        Ok(DocumentDetail {
            content: extracted.body,
            metadata: extracted.frontmatter,
        })
    }

    /// Replace a goals document.
    pub async fn save_goal_detail(
        &self,
        horizon: &str,
        content: &str,
        metadata: &Frontmatter,
    ) -> Result<Saved> {
        let doc = DocumentRef::Goals(horizon.parse::<GoalHorizon>()?);
        validation::require("content", Some(content))?;
        self.commit(&doc, &frontmatter::compose(metadata, content)).await
    }

    // === Frameworks ===

    /// A framework document as content plus metadata.
    pub async fn framework(&self, name: &str) -> Result<DocumentDetail> {
        let doc = DocumentRef::Framework(name.parse::<FrameworkName>()?);
        let path = doc.relative_path();
        let raw = self.storage.read(&path).await?;
        let parsed = FrameworkCodec::parse(&raw, &path);
        Ok(DocumentDetail {
            content: parsed.content,
            metadata: parsed.metadata,
        })
    }

    /// Replace a framework document.
    pub async fn save_framework(
        &self,
        name: &str,
        content: &str,
        metadata: &Frontmatter,
    ) -> Result<Saved> {
        let doc = DocumentRef::Framework(name.parse::<FrameworkName>()?);
        validation::require("content", Some(content))?;
        let text = FrameworkCodec::serialize(&FrameworkDocument {
            metadata: metadata.clone(),
            content: content.to_string(),
            file_path: doc.relative_path(),
        });
        self.commit(&doc, &text).await
    }

    // === Reviews ===

    /// Merged review feed. `review_type` and `sort` are the raw query values.
    pub async fn reviews(
        &self,
        review_type: Option<&str>,
        sort: Option<&str>,
    ) -> Result<ReviewsResponse> {
        let query = validation::review_query(review_type, sort)?;
        let reviews = ReviewFeed::new(&self.storage)
            .with_config(self.config.feed.clone())
            .collect(query)
            .await;
        Ok(ReviewsResponse { reviews })
    }

    /// One daily review.
    pub async fn daily_review(&self, date: &str) -> Result<DailyReviewRecord> {
        let path = DocumentRef::daily(date)?.relative_path();
        let raw = self.storage.read(&path).await?;
        Ok(DailyReviewCodec::parse(&raw, &path))
    }

    /// Validate, serialize and store a daily review.
    pub async fn save_daily_review(&self, record: &DailyReviewRecord) -> Result<Saved> {
        validation::daily_review(record)?;
        let doc = DocumentRef::daily(record.date.as_deref().unwrap_or_default())?;
        let record = DailyReviewRecord {
            file_path: doc.relative_path(),
            ..record.clone()
        };
        self.commit(&doc, &DailyReviewCodec::serialize(&record)).await
    }

    /// One weekly review.
    pub async fn weekly_review(&self, date: &str) -> Result<WeeklyReviewRecord> {
        let path = DocumentRef::weekly(date)?.relative_path();
        let raw = self.storage.read(&path).await?;
        Ok(WeeklyReviewCodec::parse(&raw, &path))
    }

    /// Validate, serialize and store a weekly review.
    pub async fn save_weekly_review(&self, record: &WeeklyReviewRecord) -> Result<Saved> {
        validation::weekly_review(record)?;
        let doc = DocumentRef::weekly(record.date.as_deref().unwrap_or_default())?;
        let record = WeeklyReviewRecord {
            file_path: doc.relative_path(),
            ..record.clone()
        };
        self.commit(&doc, &WeeklyReviewCodec::serialize(&record)).await
    }

    // === Drafts ===

    /// Draft of a document such as `weekly/2025-12-29`.
    pub async fn draft(&self, document: &str) -> Result<DraftResponse> {
        self.drafts().load(&DocumentRef::parse(document)?).await
    }

    /// Presence and restorability of a draft.
    pub async fn draft_status(&self, document: &str) -> Result<DraftStatus> {
        self.drafts().status(&DocumentRef::parse(document)?).await
    }

    /// Auto-save a draft.
    pub async fn save_draft(&self, document: &str, content: &str) -> Result<Saved> {
        let doc = DocumentRef::parse(document)?;
        self.drafts().save(&doc, content).await?;
        Ok(Saved::new(doc.draft_path(&self.config.drafts_dir)))
    }

    /// Discard a draft.
    pub async fn clear_draft(&self, document: &str) -> Result<()> {
        self.drafts().clear(&DocumentRef::parse(document)?).await
    }

    /// Write a document, then drop its draft.
    async fn commit(&self, doc: &DocumentRef, text: &str) -> Result<Saved> {
        let path = doc.relative_path();
        self.storage.write(&path, text).await?;
        info!("Saved {}", path);

        // The document is already saved; a leftover draft only costs a restore prompt.
        if let Err(e) = self.drafts().clear(doc).await {
            warn!("Saved {} but could not clear its draft: {}", path, e);
        }
        Ok(Saved::new(path))
    }
}
