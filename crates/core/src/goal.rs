//! Goal model - multi-horizon goals with a document-level status.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Canonical status vocabulary shared by goals and reviews.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum CanonicalStatus {
    /// Progressing as planned
    #[default]
    #[serde(rename = "On Track")]
    OnTrack,
    /// Drifting, needs a closer look
    #[serde(rename = "Needs Attention")]
    NeedsAttention,
    /// Falling behind plan
    #[serde(rename = "Behind")]
    Behind,
}

impl CanonicalStatus {
    /// All statuses in display order.
    pub const ALL: [CanonicalStatus; 3] = [Self::OnTrack, Self::NeedsAttention, Self::Behind];

    /// Human-facing label, e.g. `On Track`.
    pub fn label(self) -> &'static str {
        match self {
            Self::OnTrack => "On Track",
            Self::NeedsAttention => "Needs Attention",
            Self::Behind => "Behind",
        }
    }

    /// Kebab-case form written into frontmatter, e.g. `on-track`.
    pub fn slug(self) -> &'static str {
        match self {
            Self::OnTrack => "on-track",
            Self::NeedsAttention => "needs-attention",
            Self::Behind => "behind",
        }
    }
}

impl fmt::Display for CanonicalStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A single goal extracted from a goals document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GoalRecord {
    /// Goal title (label after the goal marker, a domain heading, or `Goal N`)
    pub title: String,

    /// Short description taken from the `What` field
    pub description: String,

    /// Status inherited from the document frontmatter
    pub status: CanonicalStatus,
}

/// A parsed goals document.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct GoalsDocument {
    /// Document-level status
    pub status: CanonicalStatus,

    /// `last_updated` frontmatter value, as authored
    pub last_updated: Option<String>,

    /// Goals in document order
    pub goals: Vec<GoalRecord>,

    /// Where the document was read from
    pub file_path: String,
}

/// Planning horizon of a goals document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum GoalHorizon {
    /// Goals for the coming year
    OneYear,
    /// Goals for the next three years
    ThreeYear,
    /// Long-range goals
    TenYear,
}

impl GoalHorizon {
    /// All horizons, shortest first.
    pub const ALL: [GoalHorizon; 3] = [Self::OneYear, Self::ThreeYear, Self::TenYear];

    /// Name used in requests, e.g. `one-year`.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::OneYear => "one-year",
            Self::ThreeYear => "three-year",
            Self::TenYear => "ten-year",
        }
    }

    /// File name inside the goals directory.
    pub fn file_name(self) -> &'static str {
        match self {
            Self::OneYear => "1-year.md",
            Self::ThreeYear => "3-year.md",
            Self::TenYear => "10-year.md",
        }
    }
}

impl fmt::Display for GoalHorizon {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for GoalHorizon {
    type Err = crate::DocumentError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|h| h.as_str() == s)
            .ok_or_else(|| crate::DocumentError::UnknownHorizon(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_default_is_on_track() {
        assert_eq!(CanonicalStatus::default(), CanonicalStatus::OnTrack);
    }

    #[test]
    fn test_status_serializes_as_label() {
        let json = serde_json::to_string(&CanonicalStatus::NeedsAttention).unwrap();
        assert_eq!(json, "\"Needs Attention\"");
    }

    #[test]
    fn test_horizon_from_str() {
        assert_eq!("three-year".parse::<GoalHorizon>().unwrap(), GoalHorizon::ThreeYear);
        assert!("3-year".parse::<GoalHorizon>().is_err());
        assert_eq!(GoalHorizon::TenYear.file_name(), "10-year.md");
    }
}
