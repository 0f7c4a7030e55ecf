//! Goals documents (one per horizon).
//!
//! Layout:
//!
//! ```text
//! ---
//! status: on-track
//! last_updated: 2025-01-15
//! ---
//!
//! **Goal 1:** Career
//!
//! *What:*
//! Lead the platform team
//!
//! ---
//!
//! **Goal 2:**
//! ...
//! ```

use crate::section::{self, FieldSpec, Locator};
use crate::{frontmatter, status, DocumentCodec};
use journal_core::{CanonicalStatus, Frontmatter, GoalRecord, GoalsDocument};
use regex::Regex;
use std::sync::OnceLock;

/// Descriptions longer than this many characters are cut and get `...`.
pub const DESCRIPTION_LIMIT: usize = 100;

// Bracketed "What" text is still content here, unlike review fields.
const WHAT: FieldSpec = FieldSpec::field(Locator::ItalicLabel("What")).keep_placeholders();

fn goal_marker() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^\*\*Goal\s+(\d+):\*\*(.*)$").expect("goal marker pattern is valid"))
}

/// A `**Goal N:**` block before field extraction.
struct GoalBlock<'a> {
    number: String,
    label: &'a str,
    lines: &'a [&'a str],
}

/// Codec for `goals/*.md`.
pub struct GoalsCodec;

impl DocumentCodec for GoalsCodec {
    type Record = GoalsDocument;

    fn parse(raw: &str, file_path: &str) -> GoalsDocument {
        let doc = frontmatter::extract(raw);
        let status = status::normalize(doc.frontmatter.get("status").map(String::as_str));

        let lines: Vec<&str> = doc.body.lines().collect();
        let goals = split_blocks(&lines)
            .into_iter()
            .map(|block| goal_from_block(&block, status))
            .collect();

        GoalsDocument {
            status,
            last_updated: doc.frontmatter.get("last_updated").cloned(),
            goals,
            file_path: file_path.to_string(),
        }
    }

    fn serialize(document: &GoalsDocument) -> String {
        let mut fm = Frontmatter::new();
        fm.insert("status".to_string(), document.status.slug().to_string());
        if let Some(updated) = &document.last_updated {
            fm.insert("last_updated".to_string(), updated.clone());
        }

        let blocks: Vec<String> = document
            .goals
            .iter()
            .enumerate()
            .map(|(i, goal)| {
                let number = i + 1;
                let marker = if goal.title == format!("Goal {number}") {
                    format!("**Goal {number}:**")
                } else {
                    format!("**Goal {number}:** {}", goal.title)
                };
                format!("{marker}\n\n*What:*\n{}\n", goal.description)
            })
            .collect();

        frontmatter::compose(&fm, &blocks.join("\n---\n\n"))
    }
}

/// Split the body at each `**Goal N:**` marker. A block ends at the next marker
/// or its first `---` divider; text outside blocks is ignored.
fn split_blocks<'a>(lines: &'a [&'a str]) -> Vec<GoalBlock<'a>> {
    let starts: Vec<(usize, String, &'a str)> = lines
        .iter()
        .enumerate()
        .filter_map(|(i, line)| {
            let caps = goal_marker().captures(line.trim())?;
            let number = caps.get(1)?.as_str().to_string();
            let label = caps.get(2).map(|m| m.as_str().trim()).unwrap_or_default();
            Some((i, number, label))
        })
        .collect();

    starts
        .iter()
        .enumerate()
        .map(|(n, (start, number, label))| {
            let next = starts.get(n + 1).map(|(next, _, _)| *next).unwrap_or(lines.len());
            let end = lines[start + 1..next]
                .iter()
                .position(|line| section::is_divider(line))
                .map_or(next, |offset| start + 1 + offset);
            GoalBlock {
                number: number.clone(),
                label: *label,
                lines: &lines[start + 1..end],
            }
        })
        .collect()
}

fn goal_from_block(block: &GoalBlock<'_>, status: CanonicalStatus) -> GoalRecord {
    let text = block.lines.join("\n");
    let description = WHAT.extract(&text).unwrap_or_default();

    let title = if !block.label.is_empty() {
        block.label.to_string()
    } else {
        block
            .lines
            .iter()
            .find_map(|line| domain_heading(line))
            .unwrap_or_else(|| format!("Goal {}", block.number))
    };

    GoalRecord {
        title,
        description: truncate(&description),
        status,
    }
}

/// `## Health` or `### Health` inside a goal block names its domain.
fn domain_heading(line: &str) -> Option<String> {
    let rest = line
        .trim()
        .strip_prefix("### ")
        .or_else(|| line.trim().strip_prefix("## "))?;
    let rest = rest.trim();
    (!rest.is_empty() && !section::is_placeholder(rest)).then(|| rest.to_string())
}

/// Cut `text` at [`DESCRIPTION_LIMIT`] characters and append `...`.
pub fn truncate(text: &str) -> String {
    if text.chars().count() <= DESCRIPTION_LIMIT {
        return text.to_string();
    }
    let mut cut: String = text.chars().take(DESCRIPTION_LIMIT).collect();
    cut.push_str("...");
    cut
}

#[cfg(test)]
mod tests {
    use super::*;

    const ONE_YEAR: &str = "---
status: needs-attention
last_updated: 2025-01-15
---

# 1-Year Goals

Some intro prose that is not a goal.

---

**Goal 1:** Career

*What:*
Lead the platform team

*Why it matters:*
Growth

---

**Goal 2:**

### Health

*What:*
[Run a half marathon]

---

**Goal 3:**

*What:* Save for a sabbatical

---

**Goal 4:**

*Why it matters:*
No what field here
";

    #[test]
    fn test_parse_goals_document() {
        let doc = GoalsCodec::parse(ONE_YEAR, "goals/1-year.md");
        assert_eq!(doc.status, CanonicalStatus::NeedsAttention);
        assert_eq!(doc.last_updated.as_deref(), Some("2025-01-15"));
        assert_eq!(doc.goals.len(), 4);

        assert_eq!(doc.goals[0].title, "Career");
        assert_eq!(doc.goals[0].description, "Lead the platform team");

        assert_eq!(doc.goals[1].title, "Health");
        assert_eq!(doc.goals[1].description, "[Run a half marathon]");

        assert_eq!(doc.goals[2].title, "Goal 3");
        assert_eq!(doc.goals[2].description, "Save for a sabbatical");

        assert_eq!(doc.goals[3].title, "Goal 4");
        assert_eq!(doc.goals[3].description, "");

        assert!(doc.goals.iter().all(|g| g.status == CanonicalStatus::NeedsAttention));
    }

    #[test]
    fn test_invalid_status_resolves_on_track() {
        let raw = "---\nstatus: invalid-status-value\n---\n\n**Goal 1:**\n\n*What:*\nA\n\n---\n\n**Goal 2:**\n\n*What:*\nB\n";
        let doc = GoalsCodec::parse(raw, "goals/1-year.md");
        assert_eq!(doc.goals.len(), 2);
        assert!(doc.goals.iter().all(|g| g.status == CanonicalStatus::OnTrack));
    }

    #[test]
    fn test_empty_and_prose_documents() {
        assert!(GoalsCodec::parse("", "g.md").goals.is_empty());
        assert!(GoalsCodec::parse("---\nstatus: behind\n---\n", "g.md").goals.is_empty());
        let doc = GoalsCodec::parse("# Goals\n\nStill thinking about these.\n", "g.md");
        assert!(doc.goals.is_empty());
        assert_eq!(doc.status, CanonicalStatus::OnTrack);
    }

    #[test]
    fn test_truncate() {
        let exact = "a".repeat(100);
        assert_eq!(truncate(&exact), exact);

        let long = format!("{}{}", "b".repeat(100), "overflow");
        let cut = truncate(&long);
        assert_eq!(cut, format!("{}...", "b".repeat(100)));
        assert_eq!(cut.chars().count(), 103);

        // counts characters, not bytes
        let wide = "é".repeat(101);
        assert_eq!(truncate(&wide), format!("{}...", "é".repeat(100)));
    }

    #[test]
    fn test_long_description_truncated_in_parse() {
        let what = "x".repeat(150);
        let raw = format!("**Goal 1:** Big\n\n*What:*\n{what}\n");
        let doc = GoalsCodec::parse(&raw, "g.md");
        assert_eq!(doc.goals[0].description, format!("{}...", "x".repeat(100)));
    }

    #[test]
    fn test_heading_after_divider_is_not_a_title() {
        let raw = "**Goal 1:**\n\n*What:*\nShip v2\n\n---\n\n## Health\n\n**Goal 2:**\n\n*What:*\nRun\n";
        let titles: Vec<_> = GoalsCodec::parse(raw, "g.md")
            .goals
            .into_iter()
            .map(|g| g.title)
            .collect();
        assert_eq!(titles, vec!["Goal 1", "Goal 2"]);
    }

    #[test]
    fn test_trailing_section_stays_outside_last_goal() {
        let raw = "**Goal 1:** Career\n\n*What:*\nLead\n\n---\n\n**Goal 2:**\n\n*What:*\nRest\n\n---\n\n## Review Cadence\n\nRevisit quarterly.\n";
        let doc = GoalsCodec::parse(raw, "g.md");
        assert_eq!(doc.goals.len(), 2);
        assert_eq!(doc.goals[1].title, "Goal 2");
        assert_eq!(doc.goals[1].description, "Rest");
    }

    #[test]
    fn test_serialize_then_parse() {
        let doc = GoalsCodec::parse(ONE_YEAR, "goals/1-year.md");
        let text = GoalsCodec::serialize(&doc);
        assert!(text.starts_with("---\nlast_updated: 2025-01-15\nstatus: needs-attention\n---\n"));
        assert!(text.contains("**Goal 3:**\n"));
        assert_eq!(GoalsCodec::parse(&text, "goals/1-year.md"), doc);
    }
}
