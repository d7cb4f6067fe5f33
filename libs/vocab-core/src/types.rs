//! Core types for the vocabulary trainer.

use serde::{Deserialize, Serialize};
use serde_json::Number;
use uuid::Uuid;

/// A single term/definition pair held in the word list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WordEntry {
    pub id: String,
    pub term: String,
    pub definition: String,
    /// Epoch milliseconds. Informational only; kept as the exact JSON
    /// number it was read as.
    pub created_at: Number,
}

impl WordEntry {
    /// Create a new entry with a fresh id. Term and definition are trimmed.
    pub fn new(term: &str, definition: &str, created_at: i64) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            term: term.trim().to_string(),
            definition: definition.trim().to_string(),
            created_at: Number::from(created_at),
        }
    }

    /// Lower-cased term used for all case-insensitive comparisons.
    pub fn normalized_term(&self) -> String {
        self.term.to_lowercase()
    }
}

/// One multiple-choice question.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    pub term: String,
    pub correct_definition: String,
    pub options: [String; 4],
}

impl Question {
    /// Position of the correct definition among the options.
    pub fn correct_index(&self) -> usize {
        self.options
            .iter()
            .position(|o| *o == self.correct_definition)
            .unwrap_or(0)
    }
}

/// Outcome of answering a question.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AnswerOutcome {
    Correct,
    Incorrect,
}

impl AnswerOutcome {
    pub fn is_correct(self) -> bool {
        matches!(self, Self::Correct)
    }
}

/// Running score of a quiz session.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Score {
    pub correct: u32,
    pub answered: u32,
}

impl Score {
    /// Record one answered question.
    pub fn record(&mut self, outcome: AnswerOutcome) {
        self.answered += 1;
        if outcome.is_correct() {
            self.correct += 1;
        }
    }

    /// Share of correct answers as a whole percentage.
    pub fn percentage(&self) -> u32 {
        if self.answered == 0 {
            return 0;
        }
        ((self.correct as f64 / self.answered as f64) * 100.0).round() as u32
    }
}
