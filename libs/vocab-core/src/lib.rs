//! Core vocabulary library shared by the `vocab` command-line app.
//!
//! Provides:
//! - Word entry types and the stored/exported JSON shape
//! - Multiple-choice quiz generation and session scoring
//! - Import merging with id/term deduplication
//! - Export payloads and backup file naming
//! - Word-list operations over an explicit key-value store handle

pub mod error;
pub mod export;
pub mod import;
pub mod quiz;
pub mod store;
pub mod types;
pub mod words;

pub use error::{Result, VocabError};
pub use export::{export_bundle, export_file_name, export_payload, ExportBundle};
pub use import::{merge_import, MergeReport};
pub use quiz::{
    generate_question, submit_answer, QuizSession, SessionState, Unavailable, MIN_QUIZ_WORDS,
    OPTION_COUNT,
};
pub use store::{load_words, save_words, MemoryStore, WordStore, STORAGE_KEY};
pub use types::{AnswerOutcome, Question, Score, WordEntry};
