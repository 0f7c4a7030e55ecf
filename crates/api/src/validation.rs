//! Request validation.
//!
//! Everything here runs before storage is touched.

use crate::error::{ApiError, Result};
use journal_core::{
    validate_date, DailyReviewRecord, ReviewQuery, ReviewType, SortOrder, WeeklyReviewRecord,
};

/// Parse the `type` and `sort` feed parameters. Absent values take the defaults.
pub fn review_query(review_type: Option<&str>, sort: Option<&str>) -> Result<ReviewQuery> {
    let review_type = match review_type {
        None => ReviewType::default(),
        Some(value) => value
            .parse()
            .map_err(|message: String| ApiError::validation("type", message))?,
    };
    let sort = match sort {
        None => SortOrder::default(),
        Some(value) => value
            .parse()
            .map_err(|message: String| ApiError::validation("sort", message))?,
    };
    Ok(ReviewQuery::new(review_type, sort))
}

/// `value` must be present and not blank.
pub fn require<'a>(field: &str, value: Option<&'a str>) -> Result<&'a str> {
    match value.map(str::trim) {
        Some(v) if !v.is_empty() => Ok(v),
        _ => Err(ApiError::missing(field)),
    }
}

/// Required fields of a daily review: date, energy level, win and priority.
pub fn daily_review(record: &DailyReviewRecord) -> Result<()> {
    let date = require("date", record.date.as_deref())?;
    validate_date(date)?;
    if record.energy_level.is_none() {
        return Err(ApiError::missing("energyLevel"));
    }
    require("meaningfulWin", record.meaningful_win.as_deref())?;
    require("tomorrowPriority", record.tomorrow_priority.as_deref())?;
    Ok(())
}

/// Required fields of a weekly review: date, week number and all five sections.
pub fn weekly_review(record: &WeeklyReviewRecord) -> Result<()> {
    let date = require("date", record.date.as_deref())?;
    validate_date(date)?;
    match record.week_number {
        None => return Err(ApiError::missing("weekNumber")),
        Some(n) if !(1..=53).contains(&n) => {
            return Err(ApiError::validation(
                "weekNumber",
                format!("Invalid weekNumber {}. Must be between 1 and 53", n),
            ))
        }
        Some(_) => {}
    }
    require("movedNeedle", record.moved_needle.as_deref())?;
    require("noiseDisguisedAsWork", record.noise_disguised_as_work.as_deref())?;
    require("timeLeaks", record.time_leaks.as_deref())?;
    require("strategicInsight", record.strategic_insight.as_deref())?;
    require("adjustmentForNextWeek", record.adjustment_for_next_week.as_deref())?;
    Ok(())
}
