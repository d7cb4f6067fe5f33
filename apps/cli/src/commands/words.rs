//! Word list management commands.

use std::io::Write;

use chrono::Utc;
use vocab_core::words::{self, add_word, delete_word};
use vocab_core::{load_words, WordEntry, WordStore};

use super::CommandResult;

/// Add a word.
pub fn add<S: WordStore, W: Write>(
    store: &S,
    term: &str,
    definition: &str,
    out: &mut W,
) -> CommandResult {
    let entry = add_word(store, term, definition, Utc::now().timestamp_millis())?;
    writeln!(out, "Word saved successfully! ({})", entry.id)?;
    Ok(())
}

/// Print every word.
pub fn list<S: WordStore, W: Write>(store: &S, out: &mut W) -> CommandResult {
    let words = load_words(store)?;
    if words.is_empty() {
        writeln!(out, "Your vocabulary list is empty")?;
        return Ok(());
    }

    print_words(&words, out)?;
    writeln!(out, "{} words", words.len())?;
    Ok(())
}

/// Print words matching a query.
pub fn search<S: WordStore, W: Write>(store: &S, query: &str, out: &mut W) -> CommandResult {
    let words = load_words(store)?;
    let found = words::search(&words, query);
    if found.is_empty() {
        writeln!(out, "No words match your search")?;
        return Ok(());
    }

    print_words(&found, out)?;
    Ok(())
}

/// Delete a word by id.
pub fn delete<S: WordStore, W: Write>(store: &S, id: &str, out: &mut W) -> CommandResult {
    if delete_word(store, id)? {
        writeln!(out, "Word deleted.")?;
    } else {
        writeln!(out, "No word with id {id}.")?;
    }
    Ok(())
}

fn print_words<W: Write>(words: &[WordEntry], out: &mut W) -> std::io::Result<()> {
    for word in words {
        writeln!(out, "{}: {}  [{}]", word.term, word.definition, word.id)?;
    }
    Ok(())
}
