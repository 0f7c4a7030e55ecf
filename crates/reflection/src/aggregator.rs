//! Merges daily and weekly reviews into one feed.

use journal_codec::{scalar, DailyReviewCodec, DocumentCodec, WeeklyReviewCodec};
use journal_core::{
    DailyReviewRecord, DailySummary, ReviewQuery, ReviewSummaryItem, ReviewType, SortOrder,
    WeeklyReviewRecord, WeeklySummary,
};
use tracing::debug;

/// Whether a directory entry should be parsed as a review.
///
/// Only `.md` files count; dot-files and anything named like a template are skipped.
pub fn is_review_file(name: &str) -> bool {
    let file = name.rsplit('/').next().unwrap_or(name);
    let lower = file.to_lowercase();
    !file.starts_with('.') && lower.ends_with(".md") && !lower.contains("template")
}

/// Build the feed from `(path, raw)` entries of both families.
///
/// Entries with equal dates keep their input order, daily before weekly.
pub fn aggregate(
    daily: &[(String, String)],
    weekly: &[(String, String)],
    query: ReviewQuery,
) -> Vec<ReviewSummaryItem> {
    let mut items = Vec::new();

    if query.review_type.includes(ReviewType::Daily) {
        items.extend(
            accepted(daily)
                .map(|(path, raw)| summarize_daily(DailyReviewCodec::parse(raw, path))),
        );
    }
    if query.review_type.includes(ReviewType::Weekly) {
        items.extend(
            accepted(weekly)
                .map(|(path, raw)| summarize_weekly(WeeklyReviewCodec::parse(raw, path))),
        );
    }

    // sort_by is stable
    match query.sort {
        SortOrder::Asc => items.sort_by(|a, b| a.date().cmp(b.date())),
        SortOrder::Desc => items.sort_by(|a, b| b.date().cmp(a.date())),
    }
    items
}

fn accepted(entries: &[(String, String)]) -> impl Iterator<Item = (&str, &str)> {
    entries.iter().filter_map(|(path, raw)| {
        if is_review_file(path) {
            Some((path.as_str(), raw.as_str()))
        } else {
            debug!("Skipping {}", path);
            None
        }
    })
}

/// Date of the document, else the file stem when it is an ISO date.
fn feed_date(date: Option<String>, path: &str) -> String {
    date.or_else(|| {
        let file = path.rsplit('/').next().unwrap_or(path);
        let stem = file.strip_suffix(".md").unwrap_or(file);
        scalar::is_iso_date(stem).then(|| stem.to_string())
    })
    .unwrap_or_default()
}

/// Feed view of a daily review.
pub fn summarize_daily(record: DailyReviewRecord) -> ReviewSummaryItem {
    ReviewSummaryItem::Daily(DailySummary {
        date: feed_date(record.date, &record.file_path),
        energy_level: record.energy_level,
        tomorrow_priority: record.tomorrow_priority,
        file_path: record.file_path,
    })
}

/// Feed view of a weekly review.
pub fn summarize_weekly(record: WeeklyReviewRecord) -> ReviewSummaryItem {
    ReviewSummaryItem::Weekly(WeeklySummary {
        date: feed_date(record.date, &record.file_path),
        week_number: record.week_number,
        moved_needle: record.moved_needle,
        file_path: record.file_path,
    })
}
