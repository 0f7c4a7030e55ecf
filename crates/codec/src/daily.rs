//! Daily review documents.

use crate::section::{quote, FieldSpec, Locator};
use crate::{frontmatter, scalar, DocumentCodec};
use journal_core::{DailyReviewRecord, FrictionAction};

const DATE: FieldSpec = FieldSpec::field(Locator::BoldLabel("Date"));
const ENERGY_LEVEL: FieldSpec = FieldSpec::field(Locator::BoldLabel("Energy Level"));
const ENERGY_FACTORS: FieldSpec = FieldSpec::blockquote(Locator::BoldLabel("What's driving it"));
const MEANINGFUL_WIN: FieldSpec = FieldSpec::blockquote(Locator::Heading("One Meaningful Win"));
const FRICTION_POINT: FieldSpec = FieldSpec::blockquote(Locator::Heading("Friction Point"));
const FRICTION_ACTION: FieldSpec = FieldSpec::field(Locator::BoldLabel("Action"));
const THING_TO_LET_GO: FieldSpec = FieldSpec::blockquote(Locator::Heading("Thing to Let Go"));
const TOMORROW_PRIORITY: FieldSpec = FieldSpec::blockquote(Locator::Heading("Tomorrow's Priority"));
const NOTES: FieldSpec = FieldSpec::blockquote(Locator::Heading("Optional: Notes"));
const DURATION: FieldSpec = FieldSpec::field(Locator::BoldLabel("Time to complete"));

/// Codec for `reviews/daily/*.md`.
pub struct DailyReviewCodec;

impl DocumentCodec for DailyReviewCodec {
    type Record = DailyReviewRecord;

    fn parse(raw: &str, file_path: &str) -> DailyReviewRecord {
        let doc = frontmatter::extract(raw);
        let body = doc.body.as_str();

        let date = scalar::date(DATE.extract(body))
            .or_else(|| scalar::date(doc.frontmatter.get("date").cloned()));

        DailyReviewRecord {
            date,
            energy_level: scalar::leading(ENERGY_LEVEL.extract(body).as_deref()),
            energy_factors: ENERGY_FACTORS.extract(body),
            meaningful_win: MEANINGFUL_WIN.extract(body),
            friction_point: FRICTION_POINT.extract(body),
            friction_action: FRICTION_ACTION.extract(body).as_deref().and_then(parse_action),
            thing_to_let_go: THING_TO_LET_GO.extract(body),
            tomorrow_priority: TOMORROW_PRIORITY.extract(body),
            notes: NOTES.extract(body),
            duration: scalar::leading(DURATION.extract(body).as_deref()),
            file_path: file_path.to_string(),
        }
    }

    fn serialize(record: &DailyReviewRecord) -> String {
        let mut out = String::new();

        out.push_str("# Daily Review\n\n");
        out.push_str(&format!(
            "**Date:** {}\n\n---\n\n",
            record.date.as_deref().unwrap_or("[YYYY-MM-DD]")
        ));

        out.push_str("## 1. Energy Level\n\n");
        match record.energy_level {
            Some(level) => out.push_str(&format!("**Energy Level:** {level}\n\n")),
            None => out.push_str("**Energy Level:** [1-10]\n\n"),
        }
        out.push_str("**What's driving it:**\n");
        out.push_str(&quote(record.energy_factors.as_deref()));
        out.push_str("\n\n---\n\n");

        section(&mut out, "## 2. One Meaningful Win", "*What went well today?*", record.meaningful_win.as_deref());

        out.push_str("## 3. Friction Point\n*What got in the way?*\n\n");
        out.push_str(&quote(record.friction_point.as_deref()));
        out.push_str("\n\n");
        if let Some(action) = record.friction_action {
            out.push_str(&format!("**Action:** {}\n\n", action.as_str()));
        }
        out.push_str("---\n\n");

        section(&mut out, "## 4. Thing to Let Go", "*What are you releasing before tomorrow?*", record.thing_to_let_go.as_deref());
        section(&mut out, "## 5. Tomorrow's Priority", "*The one thing that matters most tomorrow.*", record.tomorrow_priority.as_deref());
        section(&mut out, "## Optional: Notes", "*Anything else worth capturing.*", record.notes.as_deref());

        out.push_str(&format!(
            "**Time to complete:** {} minutes\n",
            record.duration.map(|d| d.to_string()).unwrap_or_default()
        ));
        out
    }
}

fn section(out: &mut String, heading: &str, caption: &str, text: Option<&str>) {
    out.push_str(heading);
    out.push('\n');
    out.push_str(caption);
    out.push_str("\n\n");
    out.push_str(&quote(text));
    out.push_str("\n\n---\n\n");
}

/// Accepts `needs-action`, `Needs action`, `acknowledgment` and `acknowledgement`.
fn parse_action(value: &str) -> Option<FrictionAction> {
    match value.trim().to_lowercase().replace('-', " ").as_str() {
        "needs action" => Some(FrictionAction::NeedsAction),
        "acknowledgment" | "acknowledgement" => Some(FrictionAction::Acknowledgment),
        _ => None,
    }
}
