//! Error types for the Extractor

use thiserror::Error;
use tweetrow_domain::PostKind;

/// Result type alias for extraction operations
pub type Result<T> = std::result::Result<T, ExtractorError>;

/// Errors that can occur during extraction
///
/// None of these are recoverable inside the extractor; the caller decides
/// whether to skip or quarantine the offending document.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ExtractorError {
    /// A required field is absent
    #[error("Missing field '{field}' in {context}")]
    MissingField {
        /// Dotted path of the field
        field: String,
        /// Structure the field was looked up in
        context: &'static str,
    },

    /// A field is present but holds the wrong JSON type
    #[error("Field '{field}' in {context} is not {expected}")]
    TypeMismatch {
        /// Dotted path of the field
        field: String,
        /// Expected JSON type
        expected: &'static str,
        /// Structure the field was looked up in
        context: &'static str,
    },

    /// A timestamp does not match the source format
    #[error("Malformed timestamp '{value}': {reason}")]
    MalformedTimestamp {
        /// Raw timestamp text
        value: String,
        /// Parser message
        reason: String,
    },

    /// A wrapper post lacks the payload or author it claims to link
    #[error("Inconsistent {kind} link: {reason}")]
    InconsistentLink {
        /// Kind of wrapper
        kind: PostKind,
        /// What was missing
        reason: String,
    },

    /// JSON parsing or serialization error
    #[error("JSON error: {0}")]
    Json(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}

impl ExtractorError {
    pub(crate) fn missing(field: impl Into<String>, context: &'static str) -> Self {
        ExtractorError::MissingField {
            field: field.into(),
            context,
        }
    }

    pub(crate) fn mismatch(
        field: impl Into<String>,
        expected: &'static str,
        context: &'static str,
    ) -> Self {
        ExtractorError::TypeMismatch {
            field: field.into(),
            expected,
            context,
        }
    }

    pub(crate) fn link(kind: PostKind, reason: impl Into<String>) -> Self {
        ExtractorError::InconsistentLink {
            kind,
            reason: reason.into(),
        }
    }
}

impl From<serde_json::Error> for ExtractorError {
    fn from(e: serde_json::Error) -> Self {
        ExtractorError::Json(e.to_string())
    }
}
