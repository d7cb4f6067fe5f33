//! Multiple-choice quiz generation and session tracking.
//!
//! Each question shows one term and four definitions, exactly one of which
//! is correct. Distractors are drawn without replacement from the distinct
//! definitions of the rest of the list, so a list with repeated definition
//! text can never stall generation.

use crate::error::{Result, VocabError};
use crate::types::{AnswerOutcome, Question, Score, WordEntry};
use rand::seq::SliceRandom;
use rand::Rng;
use std::collections::HashSet;

/// Minimum list size for quiz mode.
pub const MIN_QUIZ_WORDS: usize = 4;

/// Options per question (one correct, the rest distractors).
pub const OPTION_COUNT: usize = 4;

const DISTRACTOR_COUNT: usize = OPTION_COUNT - 1;

/// Why the current list cannot produce a question.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Unavailable {
    TooFewWords { available: usize },
    TooFewDefinitions { available: usize },
}

impl From<Unavailable> for VocabError {
    fn from(reason: Unavailable) -> Self {
        match reason {
            Unavailable::TooFewWords { available } => Self::InsufficientData { available },
            Unavailable::TooFewDefinitions { available } => {
                Self::InsufficientDistinctOptions { available }
            }
        }
    }
}

/// Generate one question from the word list.
pub fn generate_question<R: Rng>(words: &[WordEntry], rng: &mut R) -> Result<Question> {
    Ok(try_generate(words, rng)?)
}

fn try_generate<R: Rng>(
    words: &[WordEntry],
    rng: &mut R,
) -> std::result::Result<Question, Unavailable> {
    if words.len() < MIN_QUIZ_WORDS {
        return Err(Unavailable::TooFewWords {
            available: words.len(),
        });
    }

    let target = &words[rng.gen_range(0..words.len())];
    let correct = target.definition.as_str();

    let pool = distractor_pool(words, correct);
    if pool.len() < DISTRACTOR_COUNT {
        return Err(Unavailable::TooFewDefinitions {
            available: pool.len() + 1,
        });
    }

    let picked: Vec<&str> = pool
        .choose_multiple(rng, DISTRACTOR_COUNT)
        .copied()
        .collect();

    let mut options = [
        correct.to_string(),
        picked[0].to_string(),
        picked[1].to_string(),
        picked[2].to_string(),
    ];
    options.shuffle(rng);

    Ok(Question {
        term: target.term.clone(),
        correct_definition: correct.to_string(),
        options,
    })
}

/// Distinct definitions other than `correct`, in list order.
fn distractor_pool<'a>(words: &'a [WordEntry], correct: &str) -> Vec<&'a str> {
    let mut seen = HashSet::new();
    words
        .iter()
        .map(|w| w.definition.as_str())
        .filter(|d| *d != correct && seen.insert(*d))
        .collect()
}

/// Check a chosen option against the question.
pub fn submit_answer(question: &Question, chosen: &str) -> AnswerOutcome {
    if chosen == question.correct_definition {
        AnswerOutcome::Correct
    } else {
        AnswerOutcome::Incorrect
    }
}

/// Where a quiz session currently stands.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionState {
    /// Fewer than four words; waits until the list grows.
    InsufficientData { available: usize },
    /// Enough words, but fewer than four distinct definitions.
    InsufficientDistinctOptions { available: usize },
    AwaitingAnswer(Question),
    Answered {
        question: Question,
        chosen: String,
        outcome: AnswerOutcome,
    },
}

impl SessionState {
    fn from_generated(generated: std::result::Result<Question, Unavailable>) -> Self {
        match generated {
            Ok(question) => Self::AwaitingAnswer(question),
            Err(Unavailable::TooFewWords { available }) => Self::InsufficientData { available },
            Err(Unavailable::TooFewDefinitions { available }) => {
                Self::InsufficientDistinctOptions { available }
            }
        }
    }

    /// Whether the session can currently show a question.
    pub fn is_playable(&self) -> bool {
        matches!(self, Self::AwaitingAnswer(_) | Self::Answered { .. })
    }
}

/// A quiz session over a snapshot of the word list.
///
/// The session enforces at most one answer per question and keeps the
/// running score. There is no fixed length: it ends when the caller stops
/// asking for questions.
pub struct QuizSession<R: Rng> {
    words: Vec<WordEntry>,
    rng: R,
    state: SessionState,
    previous: Option<Question>,
    score: Score,
}

impl<R: Rng> QuizSession<R> {
    /// Enter quiz mode.
    pub fn start(words: Vec<WordEntry>, mut rng: R) -> Self {
        let state = SessionState::from_generated(try_generate(&words, &mut rng));
        Self {
            words,
            rng,
            state,
            previous: None,
            score: Score::default(),
        }
    }

    pub fn state(&self) -> &SessionState {
        &self.state
    }

    pub fn score(&self) -> Score {
        self.score
    }

    /// The question currently on screen, answered or not.
    pub fn question(&self) -> Option<&Question> {
        match &self.state {
            SessionState::AwaitingAnswer(q) => Some(q),
            SessionState::Answered { question, .. } => Some(question),
            _ => None,
        }
    }

    /// The question shown before the current one.
    pub fn previous_question(&self) -> Option<&Question> {
        self.previous.as_ref()
    }

    /// Answer the current question. Returns `None` when there is nothing to
    /// answer, including a question that was already answered.
    pub fn answer(&mut self, chosen: &str) -> Option<AnswerOutcome> {
        let question = match &self.state {
            SessionState::AwaitingAnswer(q) => q.clone(),
            _ => return None,
        };

        let outcome = submit_answer(&question, chosen);
        self.score.record(outcome);
        tracing::debug!(term = %question.term, ?outcome, "answer recorded");

        self.state = SessionState::Answered {
            question,
            chosen: chosen.to_string(),
            outcome,
        };
        Some(outcome)
    }

    /// Answer by option position (0-based).
    pub fn answer_index(&mut self, index: usize) -> Option<AnswerOutcome> {
        let chosen = self.question()?.options.get(index)?.clone();
        self.answer(&chosen)
    }

    /// Move on after an answer. Does nothing while a question is still open.
    pub fn next_question(&mut self) -> &SessionState {
        if let SessionState::Answered { question, .. } = &self.state {
            self.previous = Some(question.clone());
            self.state = SessionState::from_generated(try_generate(&self.words, &mut self.rng));
        }
        &self.state
    }

    /// Swap in a changed word list and start a fresh question. Score is kept.
    pub fn replace_words(&mut self, words: Vec<WordEntry>) -> &SessionState {
        self.words = words;
        if let Some(q) = self.question() {
            self.previous = Some(q.clone());
        }
        self.state = SessionState::from_generated(try_generate(&self.words, &mut self.rng));
        &self.state
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;
    use std::collections::HashSet;

    fn word(id: &str, term: &str, definition: &str) -> WordEntry {
        WordEntry {
            id: id.to_string(),
            term: term.to_string(),
            definition: definition.to_string(),
            created_at: 0.into(),
        }
    }

    fn animals() -> Vec<WordEntry> {
        vec![
            word("1", "Cat", "A feline"),
            word("2", "Dog", "A canine"),
            word("3", "Cow", "A bovine"),
            word("4", "Horse", "An equine"),
            word("5", "Sheep", "An ovine"),
        ]
    }

    #[test]
    fn refuses_small_lists() {
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        for n in 0..MIN_QUIZ_WORDS {
            let words = &animals()[..n];
            let result = generate_question(words, &mut rng);
            assert!(matches!(
                result,
                Err(VocabError::InsufficientData { available }) if available == n
            ));
        }
    }

    #[test]
    fn question_has_four_distinct_options_with_one_correct() {
        let words = animals();
        let mut rng = ChaCha8Rng::seed_from_u64(7);

        for _ in 0..200 {
            let q = generate_question(&words, &mut rng).unwrap();
            let distinct: HashSet<_> = q.options.iter().collect();
            assert_eq!(distinct.len(), OPTION_COUNT);
            assert_eq!(
                q.options.iter().filter(|o| **o == q.correct_definition).count(),
                1
            );
            let entry = words.iter().find(|w| w.term == q.term).unwrap();
            assert_eq!(entry.definition, q.correct_definition);
            assert_eq!(q.options[q.correct_index()], q.correct_definition);
        }
    }

    #[test]
    fn repeated_definitions_do_not_stall() {
        let words = vec![
            word("1", "Cat", "An animal"),
            word("2", "Dog", "An animal"),
            word("3", "Cow", "An animal"),
            word("4", "Horse", "An equine"),
            word("5", "Sheep", "An animal"),
        ];
        let mut rng = ChaCha8Rng::seed_from_u64(3);
        let result = generate_question(&words, &mut rng);
        assert!(matches!(
            result,
            Err(VocabError::InsufficientDistinctOptions { available: 2 })
        ));
    }

    #[test]
    fn unavailable_maps_onto_user_facing_errors() {
        assert!(matches!(
            VocabError::from(Unavailable::TooFewWords { available: 3 }),
            VocabError::InsufficientData { available: 3 }
        ));
        assert!(matches!(
            VocabError::from(Unavailable::TooFewDefinitions { available: 2 }),
            VocabError::InsufficientDistinctOptions { available: 2 }
        ));
    }

    #[test]
    fn duplicated_correct_definition_is_still_playable() {
        let mut words = animals();
        words.push(word("6", "Kitty", "A feline"));
        let mut rng = ChaCha8Rng::seed_from_u64(11);
        for _ in 0..100 {
            let q = generate_question(&words, &mut rng).unwrap();
            let distinct: HashSet<_> = q.options.iter().collect();
            assert_eq!(distinct.len(), OPTION_COUNT);
        }
    }

    #[test]
    fn same_seed_same_question() {
        let words = animals();
        let a = generate_question(&words, &mut ChaCha8Rng::seed_from_u64(42)).unwrap();
        let b = generate_question(&words, &mut ChaCha8Rng::seed_from_u64(42)).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn every_term_eventually_asked() {
        let words = animals();
        let mut rng = ChaCha8Rng::seed_from_u64(99);
        let mut asked = HashSet::new();
        for _ in 0..500 {
            asked.insert(generate_question(&words, &mut rng).unwrap().term);
        }
        assert_eq!(asked.len(), words.len());
    }

    #[test]
    fn correct_definition_lands_in_every_position() {
        let words = animals();
        let mut rng = ChaCha8Rng::seed_from_u64(5);
        let mut positions = HashSet::new();
        for _ in 0..500 {
            positions.insert(generate_question(&words, &mut rng).unwrap().correct_index());
        }
        assert_eq!(positions.len(), OPTION_COUNT);
    }

    #[test]
    fn submit_answer_is_exact_match() {
        let q = Question {
            term: "Cat".to_string(),
            correct_definition: "A feline".to_string(),
            options: [
                "A canine".to_string(),
                "A feline".to_string(),
                "A bovine".to_string(),
                "An equine".to_string(),
            ],
        };
        assert_eq!(submit_answer(&q, "A feline"), AnswerOutcome::Correct);
        assert_eq!(submit_answer(&q, "a feline"), AnswerOutcome::Incorrect);
        assert_eq!(submit_answer(&q, "A canine"), AnswerOutcome::Incorrect);
        assert_eq!(submit_answer(&q, ""), AnswerOutcome::Incorrect);
    }

    #[test]
    fn session_starts_insufficient_for_small_list() {
        let session = QuizSession::start(animals()[..3].to_vec(), ChaCha8Rng::seed_from_u64(1));
        assert_eq!(
            session.state(),
            &SessionState::InsufficientData { available: 3 }
        );
        assert!(session.question().is_none());
    }

    #[test]
    fn session_reports_too_few_distinct_definitions() {
        let words = vec![
            word("1", "Cat", "An animal"),
            word("2", "Dog", "An animal"),
            word("3", "Cow", "An animal"),
            word("4", "Horse", "An equine"),
            word("5", "Sheep", "An animal"),
        ];
        let mut session = QuizSession::start(words, ChaCha8Rng::seed_from_u64(3));
        assert_eq!(
            session.state(),
            &SessionState::InsufficientDistinctOptions { available: 2 }
        );
        assert!(session.question().is_none());
        assert_eq!(session.answer("An animal"), None);

        session.replace_words(animals());
        assert!(matches!(session.state(), SessionState::AwaitingAnswer(_)));
    }

    #[test]
    fn session_ignores_second_answer() {
        let mut session = QuizSession::start(animals(), ChaCha8Rng::seed_from_u64(8));
        let correct = session.question().unwrap().correct_definition.clone();

        assert_eq!(session.answer(&correct), Some(AnswerOutcome::Correct));
        assert_eq!(session.answer("anything"), None);
        assert_eq!(session.score(), Score { correct: 1, answered: 1 });
    }

    #[test]
    fn session_tracks_score_across_questions() {
        let mut session = QuizSession::start(animals(), ChaCha8Rng::seed_from_u64(21));

        let correct = session.question().unwrap().correct_index();
        session.answer_index(correct).unwrap();
        let first = session.question().unwrap().clone();
        session.next_question();
        assert_eq!(session.previous_question(), Some(&first));

        let wrong = (session.question().unwrap().correct_index() + 1) % OPTION_COUNT;
        assert_eq!(session.answer_index(wrong), Some(AnswerOutcome::Incorrect));

        assert_eq!(session.score(), Score { correct: 1, answered: 2 });
    }

    #[test]
    fn next_question_waits_for_answer() {
        let mut session = QuizSession::start(animals(), ChaCha8Rng::seed_from_u64(2));
        let before = session.question().unwrap().clone();
        session.next_question();
        assert_eq!(session.question(), Some(&before));
        assert!(session.previous_question().is_none());
    }

    #[test]
    fn replace_words_recovers_from_insufficient_data() {
        let mut session = QuizSession::start(animals()[..2].to_vec(), ChaCha8Rng::seed_from_u64(4));
        assert!(!session.state().is_playable());

        session.replace_words(animals());
        assert!(matches!(session.state(), SessionState::AwaitingAnswer(_)));
    }
}
