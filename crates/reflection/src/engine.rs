//! Review feed engine - loads both review families from storage.

use crate::aggregator::{aggregate, is_review_file};
use journal_core::{layout, ReviewQuery, ReviewSummaryItem, ReviewType};
use journal_storage::FileStore;
use tracing::{debug, info, warn};

/// Configuration for the review feed.
#[derive(Debug, Clone)]
pub struct FeedConfig {
    /// Directory holding daily reviews
    pub daily_dir: String,
    /// Directory holding weekly reviews
    pub weekly_dir: String,
}

impl Default for FeedConfig {
    fn default() -> Self {
        Self {
            daily_dir: layout::DAILY_DIR.to_string(),
            weekly_dir: layout::WEEKLY_DIR.to_string(),
        }
    }
}

/// Builds the merged review feed from a file store.
pub struct ReviewFeed<'a, S: FileStore + ?Sized> {
    storage: &'a S,
    config: FeedConfig,
}

impl<'a, S: FileStore + ?Sized> ReviewFeed<'a, S> {
    /// Create a feed over `storage`.
    pub fn new(storage: &'a S) -> Self {
        Self {
            storage,
            config: FeedConfig::default(),
        }
    }

    /// Set the configuration.
    pub fn with_config(mut self, config: FeedConfig) -> Self {
        self.config = config;
        self
    }

    /// Collect, filter and sort reviews according to `query`.
    ///
    /// Missing or unreadable directories and files contribute nothing.
    pub async fn collect(&self, query: ReviewQuery) -> Vec<ReviewSummaryItem> {
        let daily = if query.review_type.includes(ReviewType::Daily) {
            self.load(&self.config.daily_dir).await
        } else {
            Vec::new()
        };
        let weekly = if query.review_type.includes(ReviewType::Weekly) {
            self.load(&self.config.weekly_dir).await
        } else {
            Vec::new()
        };

        let items = aggregate(&daily, &weekly, query);
        info!(
            "Review feed: {} items (type={}, {} daily, {} weekly read)",
            items.len(),
            query.review_type,
            daily.len(),
            weekly.len()
        );
        items
    }

    /// Read every review file in `dir` as `(path, raw)`.
    async fn load(&self, dir: &str) -> Vec<(String, String)> {
        let names = match self.storage.list(dir).await {
            Ok(names) => names,
            Err(e) => {
                warn!("Cannot list {}: {}", dir, e);
                return Vec::new();
            }
        };

        let mut entries = Vec::new();
        for name in names {
            if !is_review_file(&name) {
                debug!("Skipping {}/{}", dir, name);
                continue;
            }
            let path = format!("{}/{}", dir, name);
            match self.storage.read(&path).await {
                Ok(raw) => entries.push((path, raw)),
                Err(e) => warn!("Cannot read {}: {}", path, e),
            }
        }
        entries
    }
}
