//! Command-line arguments.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(name = "vocab", version, about = "Personal English vocabulary trainer")]
pub struct Cli {
    /// SQLite file holding the word list (overrides VOCAB_DB_PATH)
    #[arg(long, global = true)]
    pub db: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand, PartialEq, Eq)]
pub enum Command {
    /// Add a word and its definition
    Add { term: String, definition: String },
    /// Show every stored word
    List,
    /// Find words whose term or definition contains the query
    Search { query: String },
    /// Delete a word by id
    Delete { id: String },
    /// Write a dated JSON backup of the list
    Export {
        /// Directory to write into (overrides VOCAB_EXPORT_DIR)
        #[arg(long)]
        out: Option<PathBuf>,
    },
    /// Merge words from a JSON backup file
    Import { file: PathBuf },
    /// Practice with multiple-choice questions
    Quiz {
        /// Seed for a reproducible session
        #[arg(long)]
        seed: Option<u64>,
    },
}
