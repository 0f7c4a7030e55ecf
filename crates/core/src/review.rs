//! Review records - daily and weekly reflections.

use serde::{Deserialize, Serialize};

/// What the author intends to do about a friction point.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FrictionAction {
    /// Something concrete has to change
    NeedsAction,
    /// Noted, nothing to do
    Acknowledgment,
}

impl FrictionAction {
    /// Canonical spelling used in documents.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::NeedsAction => "needs-action",
            Self::Acknowledgment => "acknowledgment",
        }
    }
}

/// A parsed daily review.
///
/// Fields the document leaves out stay `None`; whether a field is required is
/// decided by the caller, not here.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DailyReviewRecord {
    /// ISO `YYYY-MM-DD`
    pub date: Option<String>,
    /// Energy level as authored (usually 1-10)
    pub energy_level: Option<i32>,
    /// What drove the energy level
    pub energy_factors: Option<String>,
    /// One meaningful win
    pub meaningful_win: Option<String>,
    /// Friction point of the day
    pub friction_point: Option<String>,
    /// Whether the friction needs action
    pub friction_action: Option<FrictionAction>,
    /// Something to let go of
    pub thing_to_let_go: Option<String>,
    /// Top priority for tomorrow
    pub tomorrow_priority: Option<String>,
    /// Free-form notes
    pub notes: Option<String>,
    /// Minutes spent on the review
    pub duration: Option<u32>,
    /// Identity of the document, supplied by the caller
    pub file_path: String,
}

/// A parsed weekly review.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WeeklyReviewRecord {
    /// Week-starting ISO date
    pub date: Option<String>,
    /// ISO week number (1-53)
    pub week_number: Option<u32>,
    /// What actually moved the needle
    pub moved_needle: Option<String>,
    /// Noise disguised as work
    pub noise_disguised_as_work: Option<String>,
    /// Where time leaked
    pub time_leaks: Option<String>,
    /// One strategic insight
    pub strategic_insight: Option<String>,
    /// One adjustment for next week
    pub adjustment_for_next_week: Option<String>,
    /// Free-form notes
    pub notes: Option<String>,
    /// Minutes spent on the review
    pub duration: Option<u32>,
    /// Identity of the document, supplied by the caller
    pub file_path: String,
}
