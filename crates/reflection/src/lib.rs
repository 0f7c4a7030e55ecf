//! Reflection layer - merges review documents into a queryable feed.

#![warn(missing_docs, unused_crate_dependencies)]

pub mod aggregator;
mod engine;

pub use aggregator::{aggregate, is_review_file, summarize_daily, summarize_weekly};
pub use engine::{FeedConfig, ReviewFeed};
