//! Word-list operations over a store handle.
//!
//! Every mutation reads the whole list, computes the new list and writes it
//! back in one `set`.

use crate::error::{Result, VocabError};
use crate::export::{export_bundle, ExportBundle};
use crate::import::{merge_import, MergeReport};
use crate::store::{load_words, save_words, WordStore};
use crate::types::WordEntry;
use chrono::NaiveDate;

/// Find an entry by term, ignoring case.
pub fn find_by_term<'a>(words: &'a [WordEntry], term: &str) -> Option<&'a WordEntry> {
    let needle = term.trim().to_lowercase();
    words.iter().find(|w| w.normalized_term() == needle)
}

/// Entries whose term or definition contains `query`, ignoring case.
/// A blank query matches everything.
pub fn search(words: &[WordEntry], query: &str) -> Vec<WordEntry> {
    if query.trim().is_empty() {
        return words.to_vec();
    }

    let needle = query.to_lowercase();
    words
        .iter()
        .filter(|w| {
            w.term.to_lowercase().contains(&needle) || w.definition.to_lowercase().contains(&needle)
        })
        .cloned()
        .collect()
}

/// Add a new word, refusing blanks and case-insensitive duplicates.
pub fn add_word<S: WordStore + ?Sized>(
    store: &S,
    term: &str,
    definition: &str,
    now_ms: i64,
) -> Result<WordEntry> {
    if term.trim().is_empty() {
        return Err(VocabError::EmptyField { field: "term" });
    }
    if definition.trim().is_empty() {
        return Err(VocabError::EmptyField { field: "definition" });
    }

    let mut words = load_words(store)?;
    if let Some(existing) = find_by_term(&words, term) {
        return Err(VocabError::DuplicateTerm {
            term: existing.term.clone(),
        });
    }

    let entry = WordEntry::new(term, definition, now_ms);
    words.push(entry.clone());
    save_words(store, &words)?;

    tracing::info!(id = %entry.id, term = %entry.term, "word added");
    Ok(entry)
}

/// Delete a word by id. Returns whether anything was removed.
pub fn delete_word<S: WordStore + ?Sized>(store: &S, id: &str) -> Result<bool> {
    let words = load_words(store)?;
    let before = words.len();
    let remaining: Vec<WordEntry> = words.into_iter().filter(|w| w.id != id).collect();

    if remaining.len() == before {
        tracing::debug!(%id, "delete matched no word");
        return Ok(false);
    }

    save_words(store, &remaining)?;
    tracing::info!(%id, "word deleted");
    Ok(true)
}

/// Merge an import payload into the stored list. The store is written only
/// when the payload is accepted.
pub fn import_into<S, T>(store: &S, raw: &T) -> Result<MergeReport>
where
    S: WordStore + ?Sized,
    T: AsRef<[u8]> + ?Sized,
{
    let existing = load_words(store)?;

    let report = match merge_import(&existing, raw) {
        Ok(report) => report,
        Err(e) => {
            tracing::warn!(error = %e, "import rejected");
            return Err(e);
        }
    };

    if report.admitted > 0 {
        save_words(store, &report.merged)?;
    }
    tracing::info!(
        admitted = report.admitted,
        skipped = report.skipped,
        "import merged"
    );
    Ok(report)
}

/// Build a dated backup of the stored list.
pub fn export_from<S: WordStore + ?Sized>(store: &S, date: NaiveDate) -> Result<ExportBundle> {
    let words = load_words(store)?;
    export_bundle(&words, date)
}
