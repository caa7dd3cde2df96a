// Error types for record construction and user assembly

use thiserror::Error;

/// Errors raised when a raw record has the wrong shape for a user view
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RecordError {
    #[error("Expected a record object, got {kind}")]
    NotARecord { kind: &'static str },

    #[error("Field '{field}' must be a sequence of records, got {kind}")]
    NotASequence { field: String, kind: &'static str },

    #[error("Entry {index} of '{field}' must be a record, got {kind}")]
    InvalidEntry {
        field: String,
        index: usize,
        kind: &'static str,
    },
}

/// Errors raised while assembling a user from a decoded document
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AssemblyError {
    #[error("Expected a user document object, got {kind}")]
    NotADocument { kind: &'static str },

    #[error("User document has no 'user' record")]
    MissingUser,

    #[error("Field '{field}' must be a sequence of pages, got {kind}")]
    InvalidPages { field: String, kind: &'static str },

    #[error("Page {page} of '{field}' must be a sequence of records, got {kind}")]
    InvalidPage {
        field: String,
        page: usize,
        kind: &'static str,
    },

    #[error("Entry {index} on page {page} of '{field}' must be a record, got {kind}")]
    InvalidPageEntry {
        field: String,
        page: usize,
        index: usize,
        kind: &'static str,
    },

    #[error("Invalid user record: {0}")]
    Record(#[from] RecordError),
}
