//! Section extraction from document bodies.
//!
//! Each codec describes its fields as a table of [`FieldSpec`]s: where the
//! field starts (a heading or a bold/italic label) and how its value is
//! written (a plain paragraph or a `>` blockquote). This module turns one
//! spec plus a body into the captured text.

use regex::Regex;
use std::sync::OnceLock;

/// Where a field starts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Locator {
    /// A `#`-heading whose text matches, ignoring case and a leading `N.` number.
    Heading(&'static str),
    /// A `**Label:**` line.
    BoldLabel(&'static str),
    /// A `*Label:*` line.
    ItalicLabel(&'static str),
}

/// How the field's value is written.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Capture {
    /// Text on the label line, or else the next paragraph.
    Field,
    /// Consecutive `>` lines, joined with their line breaks kept.
    Blockquote,
}

/// What to do with a value wrapped entirely in square brackets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Placeholders {
    /// Treat `[Your text here]` as unset.
    Unset,
    /// Keep it as content.
    Keep,
}

/// One field of a document family.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldSpec {
    /// Where the field starts
    pub locator: Locator,
    /// How its value is captured
    pub capture: Capture,
    /// Placeholder policy
    pub placeholders: Placeholders,
}

impl FieldSpec {
    /// Paragraph field with placeholders treated as unset.
    pub const fn field(locator: Locator) -> Self {
        Self {
            locator,
            capture: Capture::Field,
            placeholders: Placeholders::Unset,
        }
    }

    /// Blockquote field with placeholders treated as unset.
    pub const fn blockquote(locator: Locator) -> Self {
        Self {
            locator,
            capture: Capture::Blockquote,
            placeholders: Placeholders::Unset,
        }
    }

    /// Keep bracketed values as content.
    pub const fn keep_placeholders(self) -> Self {
        Self {
            locator: self.locator,
            capture: self.capture,
            placeholders: Placeholders::Keep,
        }
    }

    /// Run this spec against `body`.
    pub fn extract(&self, body: &str) -> Option<String> {
        extract(body, self)
    }
}

/// Capture the value described by `spec` from `body`.
///
/// Returns `None` when the locator is absent, the captured text is empty, or
/// (under [`Placeholders::Unset`]) the text is a template placeholder.
pub fn extract(body: &str, spec: &FieldSpec) -> Option<String> {
    let lines: Vec<&str> = body.lines().collect();
    let (start, inline) = locate(&lines, spec.locator)?;
    let rest = &lines[start + 1..];

    let value = match spec.capture {
        Capture::Field => match inline.filter(|s| !s.is_empty()) {
            Some(text) => text.to_string(),
            None => capture_paragraph(rest)?,
        },
        Capture::Blockquote => capture_blockquote(rest)?,
    };

    let value = value.trim();
    if value.is_empty() {
        return None;
    }
    if spec.placeholders == Placeholders::Unset && is_placeholder(value) {
        return None;
    }
    Some(value.to_string())
}

/// Whether `value` is a bracketed template placeholder such as `[Your insight]`.
pub fn is_placeholder(value: &str) -> bool {
    let value = value.trim();
    value.len() >= 2
        && value.starts_with('[')
        && value.ends_with(']')
        && !value[1..value.len() - 1].contains(']')
}

/// Whether `line` is a `---` divider.
pub fn is_divider(line: &str) -> bool {
    let line = line.trim();
    line.len() >= 3 && line.chars().all(|c| c == '-')
}

/// Whether `line` is a markdown heading.
pub fn is_heading(line: &str) -> bool {
    heading_text(line).is_some()
}

/// Whether `line` opens a labelled field (`**Label:**` or `*Label:*`).
pub fn is_label(line: &str) -> bool {
    label_pattern().is_match(line.trim())
}

fn label_pattern() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^(\*{1,2}|_)[^*_]+:(\*{1,2}|_)").expect("label pattern is valid"))
}

fn numbered_prefix() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^\d+\.\s*").expect("number pattern is valid"))
}

/// Text of a heading line without its `#` markers, if it is one.
fn heading_text(line: &str) -> Option<&str> {
    let trimmed = line.trim_start();
    let hashes = trimmed.len() - trimmed.trim_start_matches('#').len();
    if hashes == 0 || hashes > 6 {
        return None;
    }
    let rest = &trimmed[hashes..];
    if !rest.is_empty() && !rest.starts_with(' ') {
        return None;
    }
    Some(rest.trim())
}

/// Find the locator line. Returns its index and any text after the label.
fn locate<'a>(lines: &[&'a str], locator: Locator) -> Option<(usize, Option<&'a str>)> {
    lines.iter().enumerate().find_map(|(i, line)| match locator {
        Locator::Heading(title) => {
            let text = heading_text(line)?;
            let text = numbered_prefix().replace(text, "");
            text.eq_ignore_ascii_case(title).then_some((i, None))
        }
        Locator::BoldLabel(label) => {
            strip_label(line.trim(), label, &["**"]).map(|rest| (i, Some(rest)))
        }
        Locator::ItalicLabel(label) => {
            strip_label(line.trim(), label, &["*", "_"]).map(|rest| (i, Some(rest)))
        }
    })
}

/// Match `<m>Label:<m>` or `<m>Label<m>:` at the start of `line`.
fn strip_label<'a>(line: &'a str, label: &str, markers: &[&str]) -> Option<&'a str> {
    for marker in markers {
        for form in [
            format!("{marker}{label}:{marker}"),
            format!("{marker}{label}{marker}:"),
        ] {
            let Some(head) = line.get(..form.len()) else {
                continue;
            };
            if !head.eq_ignore_ascii_case(&form) {
                continue;
            }
            let rest = &line[form.len()..];
            // `*What:*` must not match the start of `**What:**`
            if rest.starts_with('*') || rest.starts_with('_') {
                continue;
            }
            return Some(rest.trim());
        }
    }
    None
}

/// Next paragraph: non-empty lines up to a blank line, divider, heading or label.
fn capture_paragraph(rest: &[&str]) -> Option<String> {
    let mut captured = Vec::new();
    for line in rest.iter().skip_while(|l| l.trim().is_empty()) {
        if line.trim().is_empty() || is_divider(line) || is_heading(line) || is_label(line) {
            break;
        }
        captured.push(line.trim());
    }
    (!captured.is_empty()).then(|| captured.join("\n"))
}

/// First run of `>` lines before the field's span ends.
fn capture_blockquote(rest: &[&str]) -> Option<String> {
    let start = rest.iter().position(|line| {
        line.trim_start().starts_with('>') || is_divider(line) || is_heading(line) || is_label(line)
    })?;
    if !rest[start].trim_start().starts_with('>') {
        return None;
    }

    let quoted: Vec<&str> = rest[start..]
        .iter()
        .map(|line| line.trim_start())
        .take_while(|line| line.starts_with('>'))
        .map(|line| {
            let line = &line[1..];
            line.strip_prefix(' ').unwrap_or(line).trim_end()
        })
        .collect();
    Some(quoted.join("\n"))
}

/// Render `text` as a blockquote. `None` renders a bare `>` line.
pub fn quote(text: Option<&str>) -> String {
    match text {
        None => ">".to_string(),
        Some(text) => text
            .lines()
            .map(|line| {
                if line.is_empty() {
                    ">".to_string()
                } else {
                    format!("> {line}")
                }
            })
            .collect::<Vec<_>>()
            .join("\n"),
    }
}
