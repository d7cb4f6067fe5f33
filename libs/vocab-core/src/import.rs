//! Merging an imported word list into the current one.
//!
//! The payload is untrusted text. It is parsed, validated as a whole, and
//! only then filtered against the existing list: an entry is admitted when
//! neither its id nor its lower-cased term is already known. Admitted
//! entries count as known for the rest of the batch, so a payload that
//! repeats itself contributes each word once.

use crate::error::{Result, VocabError};
use crate::types::WordEntry;
use serde::Serialize;
use serde_json::{Map, Number, Value};
use std::collections::HashSet;

/// Outcome of a successful merge.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MergeReport {
    /// Existing entries followed by admitted ones, in payload order.
    pub merged: Vec<WordEntry>,
    pub admitted: usize,
    pub skipped: usize,
}

impl MergeReport {
    /// Human-readable summary reporting both counts.
    pub fn message(&self) -> String {
        let mut message = format!("Successfully imported {} new words.", self.admitted);
        if self.skipped > 0 {
            message.push_str(&format!(" ({} duplicates were skipped.)", self.skipped));
        }
        message
    }
}

/// Merge `raw` into `existing`. Neither input is modified.
///
/// `raw` is the file content as read. Bytes that are not valid UTF-8 fail
/// the JSON parse like any other malformed payload.
pub fn merge_import<T>(existing: &[WordEntry], raw: &T) -> Result<MergeReport>
where
    T: AsRef<[u8]> + ?Sized,
{
    let value: Value = serde_json::from_slice(raw.as_ref()).map_err(VocabError::Parse)?;
    let candidates = validate_shape(value)?;
    let total = candidates.len();

    let mut known_ids: HashSet<String> = existing.iter().map(|w| w.id.clone()).collect();
    let mut known_terms: HashSet<String> =
        existing.iter().map(WordEntry::normalized_term).collect();

    let mut merged = existing.to_vec();
    for candidate in candidates {
        let term = candidate.normalized_term();
        if known_ids.contains(&candidate.id) || known_terms.contains(&term) {
            continue;
        }
        known_ids.insert(candidate.id.clone());
        known_terms.insert(term);
        merged.push(candidate);
    }

    let admitted = merged.len() - existing.len();
    Ok(MergeReport {
        merged,
        admitted,
        skipped: total - admitted,
    })
}

fn validate_shape(value: Value) -> Result<Vec<WordEntry>> {
    let Value::Array(items) = value else {
        return Err(VocabError::InvalidShape(
            "Expected an array of words.".to_string(),
        ));
    };

    items
        .into_iter()
        .enumerate()
        .map(|(index, item)| match item {
            Value::Object(fields) => entry_from_fields(index, &fields),
            _ => Err(VocabError::InvalidShape(format!(
                "word {} is not an object",
                index + 1
            ))),
        })
        .collect()
}

fn entry_from_fields(index: usize, fields: &Map<String, Value>) -> Result<WordEntry> {
    let field = |name: &str| {
        fields.get(name).ok_or_else(|| {
            VocabError::InvalidShape(format!("word {} is missing field `{}`", index + 1, name))
        })
    };
    let wrong_type = |name: &str, expected: &str| {
        VocabError::InvalidShape(format!(
            "word {} field `{}` is not a {}",
            index + 1,
            name,
            expected
        ))
    };
    let text = |name: &str| -> Result<String> {
        field(name)?
            .as_str()
            .map(str::to_string)
            .ok_or_else(|| wrong_type(name, "string"))
    };
    let number = |name: &str| -> Result<Number> {
        match field(name)? {
            Value::Number(n) => Ok(n.clone()),
            _ => Err(wrong_type(name, "number")),
        }
    };

    Ok(WordEntry {
        id: text("id")?,
        term: text("term")?,
        definition: text("definition")?,
        created_at: number("createdAt")?,
    })
}
