//! Export payloads for backing up the word list.

use crate::error::{Result, VocabError};
use crate::types::WordEntry;
use chrono::NaiveDate;

/// A serialized backup ready to be written out.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportBundle {
    pub file_name: String,
    pub payload: String,
}

/// Serialize the list as an indented JSON array.
pub fn export_payload(words: &[WordEntry]) -> Result<String> {
    serde_json::to_string_pretty(words).map_err(|e| VocabError::Storage(e.to_string()))
}

/// Suggested backup file name for the given date.
pub fn export_file_name(date: NaiveDate) -> String {
    format!("english-words-backup-{}.json", date.format("%Y-%m-%d"))
}

/// Build a backup of `words` dated `date`. An empty list has nothing to export.
pub fn export_bundle(words: &[WordEntry], date: NaiveDate) -> Result<ExportBundle> {
    if words.is_empty() {
        return Err(VocabError::NothingToExport);
    }

    Ok(ExportBundle {
        file_name: export_file_name(date),
        payload: export_payload(words)?,
    })
}
