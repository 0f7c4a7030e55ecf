//! Journal boundary API
//!
//! Validated operations over goals, frameworks, reviews and drafts, with
//! errors already mapped to status codes.

#![warn(missing_docs)]

pub mod draft;
pub mod error;
pub mod response;
pub mod service;
pub mod validation;

pub use draft::DraftLifecycle;
pub use error::{status_codes, ApiError, ErrorBody, Result};
pub use response::{DocumentDetail, DraftResponse, DraftStatus, GoalSnapshot, ReviewsResponse, Saved};
pub use service::{JournalService, ServiceConfig};
