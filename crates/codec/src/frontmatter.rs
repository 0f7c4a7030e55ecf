//! Frontmatter extraction.
//!
//! A document may open with a `---` line, a block of `key: value` lines and a
//! closing `---` line. Anything that does not fit that shape is left in the
//! body and produces an empty mapping.

use journal_core::Frontmatter;

/// Line that opens and closes a frontmatter block.
pub const DELIMITER: &str = "---";

/// A document split into its frontmatter and body.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Extracted {
    /// Parsed `key: value` pairs
    pub frontmatter: Frontmatter,
    /// Text after the closing delimiter, leading blank lines removed
    pub body: String,
}

/// Split a leading frontmatter block from `raw`.
pub fn extract(raw: &str) -> Extracted {
    let unchanged = || Extracted {
        frontmatter: Frontmatter::new(),
        body: raw.to_string(),
    };

    let lines: Vec<&str> = raw.lines().collect();
    if lines.first().map(|l| l.trim_end()) != Some(DELIMITER) {
        return unchanged();
    }

    let Some(close) = lines
        .iter()
        .skip(1)
        .position(|l| l.trim_end() == DELIMITER)
        .map(|i| i + 1)
    else {
        // Opened but never closed
        return unchanged();
    };

    let frontmatter = lines[1..close]
        .iter()
        .filter_map(|line| parse_entry(line))
        .collect();

    let body = lines[close + 1..]
        .iter()
        .skip_while(|l| l.trim().is_empty())
        .copied()
        .collect::<Vec<_>>()
        .join("\n");

    Extracted { frontmatter, body }
}

/// Parse one `key: value` line. Returns `None` for anything else.
fn parse_entry(line: &str) -> Option<(String, String)> {
    let (key, value) = line.split_once(':')?;
    let key = key.trim();
    if key.is_empty()
        || !key
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-')
    {
        return None;
    }
    Some((key.to_string(), unquote(value.trim()).to_string()))
}

fn unquote(value: &str) -> &str {
    for quote in ['"', '\''] {
        if value.len() >= 2 && value.starts_with(quote) && value.ends_with(quote) {
            return &value[1..value.len() - 1];
        }
    }
    value
}

/// Inverse of [`extract`]: prepend `frontmatter` to `body`.
///
/// An empty mapping yields the body alone.
pub fn compose(frontmatter: &Frontmatter, body: &str) -> String {
    if frontmatter.is_empty() {
        return body.to_string();
    }

    let mut out = String::new();
    out.push_str(DELIMITER);
    out.push('\n');
    for (key, value) in frontmatter {
        out.push_str(key);
        out.push_str(": ");
        out.push_str(&value.replace('\n', " "));
        out.push('\n');
    }
    out.push_str(DELIMITER);
    out.push_str("\n\n");
    out.push_str(body.trim_start_matches(['\n', '\r']));
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_basic_block() {
        let raw = "---\nstatus: on-track\nlast_updated: 2025-01-15\n---\n\n# Goals\n";
        let doc = extract(raw);
        assert_eq!(doc.frontmatter.get("status").map(String::as_str), Some("on-track"));
        assert_eq!(doc.frontmatter.get("last_updated").map(String::as_str), Some("2025-01-15"));
        assert_eq!(doc.body, "# Goals");
    }

    #[test]
    fn test_extract_without_block_returns_raw() {
        let raw = "# Weekly Review\n\n---\nnot: frontmatter\n---\n";
        let doc = extract(raw);
        assert!(doc.frontmatter.is_empty());
        assert_eq!(doc.body, raw);
    }

    #[test]
    fn test_extract_unclosed_block_is_malformed() {
        let raw = "---\nstatus: behind\n# Body";
        let doc = extract(raw);
        assert!(doc.frontmatter.is_empty());
        assert_eq!(doc.body, raw);
    }

    #[test]
    fn test_extract_skips_nonconforming_lines() {
        let raw = "---\nstatus: behind\njust some words\n: no key\nbad key: x\ntitle: \"Quoted: value\"\n---\nBody";
        let doc = extract(raw);
        assert_eq!(doc.frontmatter.len(), 2);
        assert_eq!(doc.frontmatter["status"], "behind");
        assert_eq!(doc.frontmatter["title"], "Quoted: value");
        assert_eq!(doc.body, "Body");
    }

    #[test]
    fn test_extract_handles_crlf() {
        let raw = "---\r\nstatus: behind\r\n---\r\n\r\nBody line\r\n";
        let doc = extract(raw);
        assert_eq!(doc.frontmatter["status"], "behind");
        assert_eq!(doc.body, "Body line");
    }

    #[test]
    fn test_compose_then_extract() {
        let mut fm = Frontmatter::new();
        fm.insert("status".to_string(), "needs-attention".to_string());
        fm.insert("last_updated".to_string(), "2025-02-01".to_string());

        let text = compose(&fm, "# 1-Year Goals\n");
        assert!(text.starts_with("---\nlast_updated: 2025-02-01\nstatus: needs-attention\n---\n\n"));

        let doc = extract(&text);
        assert_eq!(doc.frontmatter, fm);
        assert_eq!(doc.body, "# 1-Year Goals");
    }

    #[test]
    fn test_compose_empty_mapping() {
        assert_eq!(compose(&Frontmatter::new(), "Body"), "Body");
    }
}
