//! Journal core data models.
//!
//! This crate defines the typed records that the codecs produce from
//! human-authored review and goal documents, and the addressing scheme that
//! maps those documents onto the file store.

#![warn(missing_docs)]

// Goals
mod goal;

// Reviews and the merged feed
mod review;
mod summary;

// Document addressing
mod document;

// Re-exports
pub use goal::{CanonicalStatus, GoalHorizon, GoalRecord, GoalsDocument};
pub use review::{DailyReviewRecord, FrictionAction, WeeklyReviewRecord};
pub use summary::{
    DailySummary, ReviewQuery, ReviewSummaryItem, ReviewType, SortOrder, WeeklySummary,
};
pub use document::{layout, validate_date, DocumentError, DocumentRef, FrameworkName};

/// Frontmatter mapping (key -> value).
pub type Frontmatter = std::collections::BTreeMap<String, String>;
