//! Import and export of JSON backups.

use std::io::Write;
use std::path::{Path, PathBuf};

use chrono::Utc;
use vocab_core::words::{export_from, import_into};
use vocab_core::{MergeReport, VocabError, WordStore};

use super::CommandResult;

/// Write a dated backup into `dir`. Returns the written path.
pub async fn export_words<S: WordStore, W: Write>(
    store: &S,
    dir: &Path,
    out: &mut W,
) -> CommandResult<PathBuf> {
    let bundle = export_from(store, Utc::now().date_naive())?;

    tokio::fs::create_dir_all(dir).await?;
    let path = dir.join(&bundle.file_name);
    tokio::fs::write(&path, bundle.payload.as_bytes()).await?;

    tracing::info!(path = %path.display(), "exported word list");
    writeln!(out, "Exported to {}", path.display())?;
    Ok(path)
}

/// Read a backup file and merge it into the stored list.
pub async fn import_words<S: WordStore, W: Write>(
    store: &S,
    file: &Path,
    out: &mut W,
) -> CommandResult<MergeReport> {
    let raw = tokio::fs::read(file)
        .await
        .map_err(|source| VocabError::FileRead {
            path: file.to_path_buf(),
            source,
        })?;

    let report = import_into(store, &raw)?;
    writeln!(out, "{}", report.message())?;
    Ok(report)
}
