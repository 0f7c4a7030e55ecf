//! Weekly review documents.
//!
//! The serialized form is what the templates ship with, so headings, captions
//! and dividers must stay byte-for-byte stable.

use crate::section::{quote, FieldSpec, Locator};
use crate::{frontmatter, scalar, DocumentCodec};
use journal_core::WeeklyReviewRecord;

/// Document title.
pub const TITLE: &str = "# Weekly Review";

const WEEK_STARTING: FieldSpec = FieldSpec::field(Locator::BoldLabel("Week Starting"));
const WEEK_NUMBER: FieldSpec = FieldSpec::field(Locator::BoldLabel("Week Number"));
const DURATION: FieldSpec = FieldSpec::field(Locator::BoldLabel("Time to complete"));

/// A blockquote section of the weekly template.
struct Section {
    heading: &'static str,
    caption: &'static str,
    spec: FieldSpec,
}

const fn section(heading: &'static str, caption: &'static str) -> Section {
    Section {
        heading,
        caption,
        spec: FieldSpec::blockquote(Locator::Heading(heading)),
    }
}

const MOVED_NEEDLE: Section = section(
    "What Actually Moved the Needle This Week",
    "*List 1-3 things that created real progress toward your goals.*",
);
const NOISE: Section = section(
    "What Was Noise Disguised as Work",
    "*What felt productive but didn't actually matter?*",
);
const TIME_LEAKS: Section = section(
    "Where Your Time Leaked",
    "*Meetings, distractions, and low-value tasks that ate your week.*",
);
const INSIGHT: Section = section(
    "One Strategic Insight",
    "*What did you learn about how you work best?*",
);
const ADJUSTMENT: Section = section(
    "One Adjustment for Next Week",
    "*One concrete change you will make.*",
);
const NOTES: Section = section("Optional: Notes", "*Anything else worth capturing.*");

/// Codec for `reviews/weekly/*.md`.
pub struct WeeklyReviewCodec;

impl DocumentCodec for WeeklyReviewCodec {
    type Record = WeeklyReviewRecord;

    fn parse(raw: &str, file_path: &str) -> WeeklyReviewRecord {
        let doc = frontmatter::extract(raw);
        let body = doc.body.as_str();

        WeeklyReviewRecord {
            date: scalar::date(WEEK_STARTING.extract(body)),
            week_number: scalar::whole_number(WEEK_NUMBER.extract(body).as_deref()),
            moved_needle: MOVED_NEEDLE.spec.extract(body),
            noise_disguised_as_work: NOISE.spec.extract(body),
            time_leaks: TIME_LEAKS.spec.extract(body),
            strategic_insight: INSIGHT.spec.extract(body),
            adjustment_for_next_week: ADJUSTMENT.spec.extract(body),
            notes: NOTES.spec.extract(body),
            duration: scalar::leading(DURATION.extract(body).as_deref()),
            file_path: file_path.to_string(),
        }
    }

    fn serialize(record: &WeeklyReviewRecord) -> String {
        let mut out = String::new();

        out.push_str(TITLE);
        out.push_str("\n\n");
        out.push_str(&format!(
            "**Week Starting:** {}\n",
            record.date.as_deref().unwrap_or("[YYYY-MM-DD]")
        ));
        out.push_str(&format!(
            "**Week Number:** {}\n\n---\n\n",
            record
                .week_number
                .map(|n| n.to_string())
                .unwrap_or_else(|| "[N]".to_string())
        ));

        for (section, text) in [
            (&MOVED_NEEDLE, &record.moved_needle),
            (&NOISE, &record.noise_disguised_as_work),
            (&TIME_LEAKS, &record.time_leaks),
            (&INSIGHT, &record.strategic_insight),
            (&ADJUSTMENT, &record.adjustment_for_next_week),
            (&NOTES, &record.notes),
        ] {
            out.push_str(&format!("## {}\n{}\n\n", section.heading, section.caption));
            out.push_str(&quote(text.as_deref()));
            out.push_str("\n\n---\n\n");
        }

        out.push_str(&format!(
            "**Time to complete:** {} minutes\n",
            record.duration.map(|d| d.to_string()).unwrap_or_default()
        ));
        out
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    fn line() -> impl Strategy<Value = String> {
        "[A-Za-z0-9]([A-Za-z0-9 ,.'-]{0,30}[A-Za-z0-9.])?"
    }

    /// Section text: an unindented first line, then lines that may be indented.
    fn section_text() -> impl Strategy<Value = String> {
        (line(), prop::collection::vec(("( {1,4})?", line()), 0..4)).prop_map(|(first, rest)| {
            let mut lines = vec![first];
            lines.extend(rest.into_iter().map(|(indent, text)| format!("{indent}{text}")));
            lines.join("\n")
        })
    }

    fn week() -> impl Strategy<Value = WeeklyReviewRecord> {
        (
            (2000u32..2100, 1u32..=12, 1u32..=28),
            1u32..=53,
            prop::collection::vec(section_text(), 5),
            prop::option::of(section_text()),
            prop::option::of(0u32..600),
        )
            .prop_map(|((y, m, d), week, sections, notes, duration)| WeeklyReviewRecord {
                date: Some(format!("{y:04}-{m:02}-{d:02}")),
                week_number: Some(week),
                moved_needle: Some(sections[0].clone()),
                noise_disguised_as_work: Some(sections[1].clone()),
                time_leaks: Some(sections[2].clone()),
                strategic_insight: Some(sections[3].clone()),
                adjustment_for_next_week: Some(sections[4].clone()),
                notes,
                duration,
                file_path: "reviews/weekly/week.md".to_string(),
            })
    }

    proptest! {
        #[test]
        fn test_populated_week_round_trips(record in week()) {
            let text = WeeklyReviewCodec::serialize(&record);
            prop_assert_eq!(WeeklyReviewCodec::parse(&text, &record.file_path), record);
        }
    }
}
