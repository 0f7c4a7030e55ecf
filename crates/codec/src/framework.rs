//! Framework documents (annual review, vivid vision, ideal life costing).
//!
//! These are free-form; only the frontmatter is interpreted.

use crate::{frontmatter, DocumentCodec};
use journal_core::Frontmatter;

/// A framework document split into metadata and markdown content.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FrameworkDocument {
    /// Frontmatter entries
    pub metadata: Frontmatter,
    /// Markdown after the frontmatter
    pub content: String,
    /// Where the document was read from
    pub file_path: String,
}

/// Codec for `frameworks/*.md`.
pub struct FrameworkCodec;

impl DocumentCodec for FrameworkCodec {
    type Record = FrameworkDocument;

    fn parse(raw: &str, file_path: &str) -> FrameworkDocument {
        let doc = frontmatter::extract(raw);
        FrameworkDocument {
            metadata: doc.frontmatter,
            content: doc.body,
            file_path: file_path.to_string(),
        }
    }

    fn serialize(document: &FrameworkDocument) -> String {
        frontmatter::compose(&document.metadata, &document.content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_framework() {
        let raw = "---\nyear: 2025\n---\n\n# Annual Review\n\nWhat a year.";
        let doc = FrameworkCodec::parse(raw, "frameworks/annual_review.md");
        assert_eq!(doc.metadata["year"], "2025");
        assert_eq!(doc.content, "# Annual Review\n\nWhat a year.");

        let text = FrameworkCodec::serialize(&doc);
        assert_eq!(FrameworkCodec::parse(&text, &doc.file_path), doc);
    }

    #[test]
    fn test_plain_markdown_framework() {
        let raw = "# Vivid Vision\n\nThree years from now...\n";
        let doc = FrameworkCodec::parse(raw, "frameworks/vivid_vision.md");
        assert!(doc.metadata.is_empty());
        assert_eq!(FrameworkCodec::serialize(&doc), raw);
    }
}
