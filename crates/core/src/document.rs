//! Document addressing - maps logical documents to store paths.
//!
//! Every path handed to the file store is built here from validated parts, so
//! request input never reaches the store verbatim.

use crate::GoalHorizon;
use chrono::NaiveDate;
use std::fmt;

/// Directory namespaces inside the data root.
pub mod layout {
    /// Daily reviews
    pub const DAILY_DIR: &str = "reviews/daily";
    /// Weekly reviews
    pub const WEEKLY_DIR: &str = "reviews/weekly";
    /// Goals documents
    pub const GOALS_DIR: &str = "goals";
    /// Framework documents
    pub const FRAMEWORKS_DIR: &str = "frameworks";
    /// Auto-saved drafts, mirroring the paths above
    pub const DRAFTS_DIR: &str = "drafts";
}

/// Errors raised while resolving a document reference.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DocumentError {
    /// Date is not a valid `YYYY-MM-DD`
    #[error("Invalid date '{0}'. Expected YYYY-MM-DD")]
    InvalidDate(String),

    /// Framework name outside the allowlist
    #[error("Invalid framework name '{0}'")]
    UnknownFramework(String),

    /// Unknown goals horizon
    #[error("Invalid goal horizon '{0}'. Must be one of: one-year, three-year, ten-year")]
    UnknownHorizon(String),

    /// Reference string could not be understood
    #[error("Invalid document reference '{0}'")]
    InvalidReference(String),
}

/// Framework documents that may be read and written.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FrameworkName {
    /// Yearly retrospective
    AnnualReview,
    /// Picture of the future
    VividVision,
    /// What the ideal life costs
    IdealLifeCosting,
}

impl FrameworkName {
    /// The allowlist.
    pub const ALL: [FrameworkName; 3] = [Self::AnnualReview, Self::VividVision, Self::IdealLifeCosting];

    /// Kebab-case request name.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::AnnualReview => "annual-review",
            Self::VividVision => "vivid-vision",
            Self::IdealLifeCosting => "ideal-life-costing",
        }
    }

    /// Underscored file name in the frameworks directory.
    pub fn file_name(self) -> &'static str {
        match self {
            Self::AnnualReview => "annual_review.md",
            Self::VividVision => "vivid_vision.md",
            Self::IdealLifeCosting => "ideal_life_costing.md",
        }
    }
}

impl std::str::FromStr for FrameworkName {
    type Err = DocumentError;

    /// Exact match against the allowlist; anything else is rejected.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|n| n.as_str() == s)
            .ok_or_else(|| DocumentError::UnknownFramework(s.to_string()))
    }
}

impl fmt::Display for FrameworkName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Check that `date` is a real calendar date in `YYYY-MM-DD` form.
pub fn validate_date(date: &str) -> Result<NaiveDate, DocumentError> {
    if date.len() != 10 {
        return Err(DocumentError::InvalidDate(date.to_string()));
    }
    NaiveDate::parse_from_str(date, "%Y-%m-%d").map_err(|_| DocumentError::InvalidDate(date.to_string()))
}

/// A logical document in the store.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum DocumentRef {
    /// `reviews/daily/<date>.md`
    Daily(NaiveDate),
    /// `reviews/weekly/<date>.md`
    Weekly(NaiveDate),
    /// `goals/<horizon file>`
    Goals(GoalHorizon),
    /// `frameworks/<framework file>`
    Framework(FrameworkName),
}

impl DocumentRef {
    /// Daily review for `date`.
    pub fn daily(date: &str) -> Result<Self, DocumentError> {
        validate_date(date).map(Self::Daily)
    }

    /// Weekly review starting on `date`.
    pub fn weekly(date: &str) -> Result<Self, DocumentError> {
        validate_date(date).map(Self::Weekly)
    }

    /// Parse a `<kind>/<name>` reference such as `daily/2025-01-01`,
    /// `goals/one-year` or `framework/vivid-vision`.
    pub fn parse(reference: &str) -> Result<Self, DocumentError> {
        let (kind, name) = reference
            .split_once('/')
            .ok_or_else(|| DocumentError::InvalidReference(reference.to_string()))?;
        match kind {
            "daily" => Self::daily(name),
            "weekly" => Self::weekly(name),
            "goals" => Ok(Self::Goals(name.parse()?)),
            "framework" => Ok(Self::Framework(name.parse()?)),
            _ => Err(DocumentError::InvalidReference(reference.to_string())),
        }
    }

    /// Path relative to the data root.
    pub fn relative_path(&self) -> String {
        match self {
            Self::Daily(date) => format!("{}/{}.md", layout::DAILY_DIR, date.format("%Y-%m-%d")),
            Self::Weekly(date) => format!("{}/{}.md", layout::WEEKLY_DIR, date.format("%Y-%m-%d")),
            Self::Goals(horizon) => format!("{}/{}", layout::GOALS_DIR, horizon.file_name()),
            Self::Framework(name) => format!("{}/{}", layout::FRAMEWORKS_DIR, name.file_name()),
        }
    }

    /// Path of the auto-saved draft for this document.
    pub fn draft_path(&self, drafts_dir: &str) -> String {
        format!("{}/{}", drafts_dir, self.relative_path())
    }
}

impl fmt::Display for DocumentRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Daily(date) => write!(f, "daily/{}", date.format("%Y-%m-%d")),
            Self::Weekly(date) => write!(f, "weekly/{}", date.format("%Y-%m-%d")),
            Self::Goals(horizon) => write!(f, "goals/{}", horizon),
            Self::Framework(name) => write!(f, "framework/{}", name),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_framework_allowlist() {
        assert_eq!("vivid-vision".parse::<FrameworkName>().unwrap(), FrameworkName::VividVision);
        assert_eq!(FrameworkName::IdealLifeCosting.file_name(), "ideal_life_costing.md");
    }

    #[test]
    fn test_framework_rejects_traversal_and_variants() {
        for bad in ["../secrets", "annual_review", "Annual-Review", "annual-review/../x", "", "vivid-vision.md"] {
            assert!(bad.parse::<FrameworkName>().is_err(), "accepted {bad}");
        }
    }

    #[test]
    fn test_validate_date() {
        assert!(validate_date("2025-01-01").is_ok());
        assert!(validate_date("2025-02-30").is_err());
        assert!(validate_date("2025-1-1").is_err());
        assert!(validate_date("../2025-01-01").is_err());
    }

    #[test]
    fn test_relative_paths() {
        assert_eq!(DocumentRef::daily("2025-01-01").unwrap().relative_path(), "reviews/daily/2025-01-01.md");
        assert_eq!(DocumentRef::weekly("2025-12-29").unwrap().relative_path(), "reviews/weekly/2025-12-29.md");
        assert_eq!(DocumentRef::Goals(GoalHorizon::OneYear).relative_path(), "goals/1-year.md");
        assert_eq!(
            DocumentRef::Framework(FrameworkName::AnnualReview).draft_path("drafts"),
            "drafts/frameworks/annual_review.md"
        );
    }

    #[test]
    fn test_parse_reference() {
        let doc = DocumentRef::parse("framework/annual-review").unwrap();
        assert_eq!(doc, DocumentRef::Framework(FrameworkName::AnnualReview));
        assert_eq!(doc.to_string(), "framework/annual-review");
        assert!(DocumentRef::parse("framework/../../etc/passwd").is_err());
        assert!(DocumentRef::parse("daily").is_err());
        assert!(DocumentRef::parse("monthly/2025-01").is_err());
    }
}
