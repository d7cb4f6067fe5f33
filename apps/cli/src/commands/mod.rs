//! Subcommand handlers.

pub mod quiz;
pub mod transfer;
pub mod words;

pub use quiz::run_quiz;
pub use transfer::{export_words, import_words};
pub use words::{add, delete, list, search};

use thiserror::Error;

/// Error reported to the user as a single message.
#[derive(Debug, Error)]
#[error("{message}")]
pub struct CommandError {
    pub message: String,
}

impl From<vocab_core::VocabError> for CommandError {
    fn from(e: vocab_core::VocabError) -> Self {
        Self { message: e.to_string() }
    }
}

impl From<crate::db::DbError> for CommandError {
    fn from(e: crate::db::DbError) -> Self {
        Self { message: e.to_string() }
    }
}

impl From<std::io::Error> for CommandError {
    fn from(e: std::io::Error) -> Self {
        Self { message: e.to_string() }
    }
}

pub type CommandResult<T = ()> = Result<T, CommandError>;
