//! Document codecs.
//!
//! Converts human-authored markdown documents into typed records and back.
//! Parsing is total: malformed, partial or template input yields a
//! partially-populated record, never an error.

#![warn(missing_docs)]

pub mod frontmatter;
pub mod section;
pub mod status;
pub mod scalar;

pub mod daily;
pub mod weekly;
pub mod goals;
pub mod framework;

pub use daily::DailyReviewCodec;
pub use weekly::WeeklyReviewCodec;
pub use goals::GoalsCodec;
pub use framework::{FrameworkCodec, FrameworkDocument};
pub use frontmatter::Extracted;
pub use section::{Capture, FieldSpec, Locator, Placeholders};

/// Parse/serialize pair for one document family.
pub trait DocumentCodec {
    /// Typed record this family parses into.
    type Record;

    /// Parse `raw` into a record. `file_path` is recorded as the record's identity.
    fn parse(raw: &str, file_path: &str) -> Self::Record;

    /// Render `record` in the family's canonical layout.
    fn serialize(record: &Self::Record) -> String;
}
