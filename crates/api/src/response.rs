//! JSON response shapes.

use journal_core::{Frontmatter, GoalRecord, ReviewSummaryItem};
use serde::Serialize;

/// `{ goals: [{title, description, status}] }`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GoalSnapshot {
    /// At most the configured number of goals, in document order
    pub goals: Vec<GoalRecord>,
}

/// `{ content, metadata }` for goals and framework documents.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DocumentDetail {
    /// Markdown after the frontmatter
    pub content: String,
    /// Frontmatter entries
    pub metadata: Frontmatter,
}

/// `{ reviews: [...] }`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReviewsResponse {
    /// Merged, filtered and sorted feed
    pub reviews: Vec<ReviewSummaryItem>,
}

/// `{ content, hasDraft }`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DraftResponse {
    /// Draft text, `null` when there is none
    pub content: Option<String>,
    /// Whether a draft exists
    pub has_draft: bool,
}

/// Draft presence and whether offering a restore makes sense.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DraftStatus {
    /// A draft file exists
    pub present: bool,
    /// The draft is non-blank and differs from the saved document
    pub restorable: bool,
}

/// `{ success: true, path }`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Saved {
    /// Always true; failures are errors
    pub success: bool,
    /// Path the document was written to
    pub path: String,
}

impl Saved {
    /// Successful save of `path`.
    pub fn new(path: impl Into<String>) -> Self {
        Self {
            success: true,
            path: path.into(),
        }
    }
}
