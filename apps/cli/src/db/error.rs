//! Database error types.

use thiserror::Error;
use vocab_core::VocabError;

#[derive(Debug, Error)]
pub enum DbError {
    #[error("sqlite error: {0}")]
    Sqlite(#[from] rusqlite::Error),

    #[error("could not create data directory: {0}")]
    Io(#[from] std::io::Error),
}

impl From<DbError> for VocabError {
    fn from(e: DbError) -> Self {
        VocabError::Storage(e.to_string())
    }
}
