//! Error types for nimbus-core

use thiserror::Error;

/// Misuse of the record builders
///
/// These indicate a bug in the command building the records, never bad user
/// input.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RecordError {
    /// The same machine key was appended twice to one record
    #[error("duplicate field key `{key}` in record")]
    DuplicateKey {
        /// Offending machine key
        key: String,
    },

    /// A record does not carry the same ordered keys as the rest of the set
    #[error("record {index} has keys {found:?}, expected {expected:?}")]
    SchemaMismatch {
        /// Position of the record in the set
        index: usize,
        /// Keys of the set's schema
        expected: Vec<String>,
        /// Keys of the offending record
        found: Vec<String>,
    },
}

/// Errors that can occur while rendering a record set
#[derive(Error, Debug)]
pub enum OutputError {
    /// The record set failed validation
    #[error(transparent)]
    Record(#[from] RecordError),

    /// Custom output was requested without a template
    #[error("custom output requires a template (pass --format)")]
    MissingTemplate,

    /// A single-record view was given several records
    #[error("expected at most one record, found {found}")]
    ExpectedSingleRecord {
        /// Number of records in the set
        found: usize,
    },

    /// Writing to the output failed
    #[error("failed to write output: {0}")]
    Io(#[from] std::io::Error),

    /// JSON encoding failed
    #[error("failed to encode JSON: {0}")]
    Json(#[from] serde_json::Error),
}
