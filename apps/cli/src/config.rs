//! Runtime configuration from the environment.
//!
//! Supported variables (a `.env` file in the working directory is loaded first):
//! - `VOCAB_DB_PATH`: SQLite file holding the word list
//! - `VOCAB_EXPORT_DIR`: directory backups are written to
//! - `RUST_LOG`: tracing filter

use std::path::PathBuf;

const DEFAULT_LOG_FILTER: &str = "warn";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub db_path: PathBuf,
    pub export_dir: PathBuf,
    pub log_filter: String,
}

impl Config {
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary variable lookup. Blank values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        Self {
            db_path: var("VOCAB_DB_PATH")
                .map(PathBuf::from)
                .unwrap_or_else(default_db_path),
            export_dir: var("VOCAB_EXPORT_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from(".")),
            log_filter: var("RUST_LOG").unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string()),
        }
    }
}

fn default_db_path() -> PathBuf {
    dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("english-words")
        .join("words.db")
}
