//! Error types for vocab-core.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias using VocabError.
pub type Result<T> = std::result::Result<T, VocabError>;

/// Errors surfaced by word-list, quiz and import/export operations.
///
/// None of these are fatal: each is reported back to the user, who retries.
#[derive(Debug, Error)]
pub enum VocabError {
    #[error("The word \"{term}\" already exists in your list.")]
    DuplicateTerm { term: String },

    #[error("The {field} must not be empty.")]
    EmptyField { field: &'static str },

    #[error("Error parsing the file. Please ensure it's a valid JSON file.")]
    Parse(#[source] serde_json::Error),

    #[error("Invalid file format: {0}")]
    InvalidShape(String),

    #[error("You need at least 4 words in your vocabulary list to start a quiz (have {available}).")]
    InsufficientData { available: usize },

    #[error("You need at least 4 different definitions to start a quiz (have {available}).")]
    InsufficientDistinctOptions { available: usize },

    #[error("Error reading the file {}: {source}", path.display())]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("stored word list is corrupt: {0}")]
    CorruptStore(#[source] serde_json::Error),

    #[error("storage error: {0}")]
    Storage(String),

    #[error("No words to export!")]
    NothingToExport,
}
