//! Boundary errors and their status-code mapping.

use journal_core::DocumentError;
use journal_storage::StorageError;
use serde::Serialize;

/// Result type for service operations.
pub type Result<T> = std::result::Result<T, ApiError>;

/// Status codes surfaced to callers.
pub mod status_codes {
    /// Bad query parameter, missing field, disallowed name
    pub const BAD_REQUEST: u16 = 400;
    /// Document does not exist
    pub const NOT_FOUND: u16 = 404;
    /// Any other storage failure
    pub const INTERNAL_ERROR: u16 = 500;
}

/// Errors surfaced by the service.
///
/// Codecs never fail, so there is no parse error here.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// Input rejected before touching storage
    #[error("{message}")]
    Validation {
        /// Offending field or parameter
        field: String,
        /// Human-readable reason
        message: String,
    },

    /// The store reports the document as absent
    #[error("Not found: {0}")]
    NotFound(String),

    /// Any other store failure
    #[error("Storage error: {0}")]
    Io(String),
}

impl ApiError {
    /// Validation error for `field`.
    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Validation {
            field: field.into(),
            message: message.into(),
        }
    }

    /// A required field is missing or blank.
    pub fn missing(field: &str) -> Self {
        Self::validation(field, format!("Missing required field: {}", field))
    }

    /// Status code for this error.
    pub fn status_code(&self) -> u16 {
        match self {
            Self::Validation { .. } => status_codes::BAD_REQUEST,
            Self::NotFound(_) => status_codes::NOT_FOUND,
            Self::Io(_) => status_codes::INTERNAL_ERROR,
        }
    }

    /// JSON body for this error.
    pub fn body(&self) -> ErrorBody {
        ErrorBody {
            error: self.to_string(),
            field: match self {
                Self::Validation { field, .. } => Some(field.clone()),
                _ => None,
            },
        }
    }
}

/// `{ "error": ..., "field": ... }`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ErrorBody {
    /// Message
    pub error: String,
    /// Offending field, for validation errors
    #[serde(skip_serializing_if = "Option::is_none")]
    pub field: Option<String>,
}

impl From<StorageError> for ApiError {
    fn from(e: StorageError) -> Self {
        match e {
            StorageError::NotFound(path) => Self::NotFound(path),
            StorageError::InvalidPath(path) => {
                Self::validation("path", format!("Invalid path: {}", path))
            }
            StorageError::Io(e) => Self::Io(e.to_string()),
        }
    }
}

impl From<DocumentError> for ApiError {
    fn from(e: DocumentError) -> Self {
        let field = match &e {
            DocumentError::InvalidDate(_) => "date",
            DocumentError::UnknownFramework(_) => "name",
            DocumentError::UnknownHorizon(_) => "horizon",
            DocumentError::InvalidReference(_) => "document",
        };
        Self::validation(field, e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_storage_error_mapping() {
        let not_found: ApiError = StorageError::NotFound("goals/1-year.md".into()).into();
        assert_eq!(not_found.status_code(), 404);

        let denied = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let io: ApiError = StorageError::Io(denied).into();
        assert_eq!(io.status_code(), 500);

        let invalid: ApiError = StorageError::InvalidPath("../x".into()).into();
        assert_eq!(invalid.status_code(), 400);
    }

    #[test]
    fn test_error_body_names_field() {
        let err = ApiError::missing("meaningfulWin");
        let body = serde_json::to_value(err.body()).unwrap();
        assert_eq!(body["error"], "Missing required field: meaningfulWin");
        assert_eq!(body["field"], "meaningfulWin");

        let body = serde_json::to_value(ApiError::NotFound("x".into()).body()).unwrap();
        assert!(body.get("field").is_none());
    }

    #[test]
    fn test_document_error_mapping() {
        let err: ApiError = DocumentError::UnknownFramework("../etc".into()).into();
        assert_eq!(err.status_code(), 400);
        assert!(matches!(err, ApiError::Validation { ref field, .. } if field == "name"));
    }
}
