//! Error types for the churnr-core library.

use thiserror::Error;

/// Main error type for the churnr library.
///
/// The pipeline itself degrades by omission rather than failing: extraction
/// misses, malformed ledger dates, and missing scoring prerequisites all
/// leave fields unset instead of raising. The variants here cover the
/// fallible edges around the pipeline.
#[derive(Error, Debug)]
pub enum ChurnError {
    /// Invalid caller-supplied extraction rule.
    #[error("pattern error: {0}")]
    Pattern(#[from] PatternError),

    /// Claims-ledger loading error.
    #[error("ledger error: {0}")]
    Ledger(#[from] LedgerError),
}

/// Errors building a custom extraction rule set.
#[derive(Error, Debug)]
pub enum PatternError {
    /// The pattern failed to compile.
    #[error("invalid pattern for {field}: {source}")]
    Invalid {
        field: String,
        source: regex::Error,
    },

    /// A text rule names a capture group its pattern does not have.
    #[error("capture group {group} missing from pattern for {field}")]
    MissingGroup { field: String, group: usize },
}

/// Errors loading the historical-claims ledger.
#[derive(Error, Debug)]
pub enum LedgerError {
    /// A required column is absent from the ledger header.
    #[error("missing required column: {0}")]
    MissingColumn(String),

    /// A row could not be read or deserialized.
    #[error("malformed ledger row: {0}")]
    Row(String),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for the churnr library.
pub type Result<T> = std::result::Result<T, ChurnError>;
