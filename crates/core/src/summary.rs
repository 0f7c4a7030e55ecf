//! Review feed items and the query that shapes the feed.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Lightweight view of a daily review inside the feed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DailySummary {
    /// ISO date, empty when neither the document nor its file name carries one
    pub date: String,
    /// Energy level, if recorded
    pub energy_level: Option<i32>,
    /// Top priority for the next day
    pub tomorrow_priority: Option<String>,
    /// Source document
    pub file_path: String,
}

/// Lightweight view of a weekly review inside the feed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WeeklySummary {
    /// Week-starting ISO date
    pub date: String,
    /// ISO week number, if recorded
    pub week_number: Option<u32>,
    /// What moved the needle that week
    pub moved_needle: Option<String>,
    /// Source document
    pub file_path: String,
}

/// One entry of the merged review feed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum ReviewSummaryItem {
    /// From the daily family
    Daily(DailySummary),
    /// From the weekly family
    Weekly(WeeklySummary),
}

impl ReviewSummaryItem {
    /// Date used for ordering.
    pub fn date(&self) -> &str {
        match self {
            Self::Daily(d) => &d.date,
            Self::Weekly(w) => &w.date,
        }
    }

    /// Family this item came from.
    pub fn kind(&self) -> ReviewType {
        match self {
            Self::Daily(_) => ReviewType::Daily,
            Self::Weekly(_) => ReviewType::Weekly,
        }
    }

    /// Source document.
    pub fn file_path(&self) -> &str {
        match self {
            Self::Daily(d) => &d.file_path,
            Self::Weekly(w) => &w.file_path,
        }
    }
}

/// Which review family to include.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReviewType {
    /// Both families
    #[default]
    All,
    /// Daily reviews only
    Daily,
    /// Weekly reviews only
    Weekly,
}

impl ReviewType {
    /// Whether an item of `kind` passes this filter.
    pub fn includes(self, kind: ReviewType) -> bool {
        self == ReviewType::All || self == kind
    }

    /// Query-string spelling.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::All => "all",
            Self::Daily => "daily",
            Self::Weekly => "weekly",
        }
    }
}

impl std::str::FromStr for ReviewType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "all" => Ok(Self::All),
            "daily" => Ok(Self::Daily),
            "weekly" => Ok(Self::Weekly),
            other => Err(format!("Invalid type '{}'. Must be one of: all, daily, weekly", other)),
        }
    }
}

impl fmt::Display for ReviewType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Feed ordering by date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    /// Oldest first
    Asc,
    /// Newest first
    #[default]
    Desc,
}

impl std::str::FromStr for SortOrder {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "asc" => Ok(Self::Asc),
            "desc" => Ok(Self::Desc),
            other => Err(format!("Invalid sort '{}'. Must be one of: asc, desc", other)),
        }
    }
}

/// A pre-validated feed query.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ReviewQuery {
    /// Family filter
    pub review_type: ReviewType,
    /// Date ordering
    pub sort: SortOrder,
}

impl ReviewQuery {
    /// Build a query.
    pub fn new(review_type: ReviewType, sort: SortOrder) -> Self {
        Self { review_type, sort }
    }
}
