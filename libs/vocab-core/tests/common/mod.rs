//! Shared fixtures for vocab-core integration tests.

use serde_json::json;
use vocab_core::WordEntry;

/// Build an entry with fixed fields.
pub fn word(id: &str, term: &str, definition: &str, created_at: i64) -> WordEntry {
    WordEntry {
        id: id.to_string(),
        term: term.to_string(),
        definition: definition.to_string(),
        created_at: created_at.into(),
    }
}

/// Generate `count` entries with distinct ids, terms and definitions.
pub fn sample_words(count: usize) -> Vec<WordEntry> {
    (0..count)
        .map(|i| {
            word(
                &format!("id-{}", i + 1),
                &format!("Term {}", i + 1),
                &format!("Definition {}", i + 1),
                1_700_000_000_000 + i as i64,
            )
        })
        .collect()
}

/// Serialize entries the way an exported backup file holds them.
pub fn payload(words: &[WordEntry]) -> String {
    let items: Vec<_> = words
        .iter()
        .map(|w| {
            json!({
                "id": w.id,
                "term": w.term,
                "definition": w.definition,
                "createdAt": w.created_at,
            })
        })
        .collect();
    serde_json::to_string(&items).expect("fixture payload")
}
