//! Interactive quiz on a line-oriented terminal.

use std::io::{BufRead, Write};

use rand::Rng;
use vocab_core::{AnswerOutcome, Question, QuizSession, SessionState};

use super::CommandResult;

const LETTERS: [char; 4] = ['A', 'B', 'C', 'D'];

const ANSWER_PROMPT: &str = "Your answer (A-D, q to quit): ";
const NEXT_PROMPT: &str = "Press Enter for the next question, q to quit: ";
const ADD_MORE_HINT: &str =
    "Try adding more words to your list, then come back to test your knowledge.";

/// Drive a session until the user quits or input ends.
pub fn run_quiz<R: Rng, I: BufRead, O: Write>(
    session: &mut QuizSession<R>,
    input: &mut I,
    out: &mut O,
) -> CommandResult {
    loop {
        match session.state().clone() {
            SessionState::InsufficientData { available } => {
                writeln!(out, "Not Enough Words")?;
                writeln!(
                    out,
                    "You need at least 4 words in your vocabulary list to start a quiz \
                     (you have {available})."
                )?;
                writeln!(out, "{ADD_MORE_HINT}")?;
                return Ok(());
            }
            SessionState::InsufficientDistinctOptions { available } => {
                writeln!(out, "Not Enough Words")?;
                writeln!(
                    out,
                    "Your list has only {available} different definitions; a quiz needs at least 4."
                )?;
                return Ok(());
            }
            SessionState::AwaitingAnswer(question) => {
                render_question(&question, session.score().answered + 1, out)?;
                let Some(line) = read_line(input, out, ANSWER_PROMPT)? else {
                    break;
                };
                if is_quit(&line) {
                    break;
                }
                let Some(index) = parse_choice(&line) else {
                    writeln!(out, "Please choose one of A, B, C or D.")?;
                    continue;
                };
                if let Some(outcome) = session.answer_index(index) {
                    render_outcome(&question, outcome, out)?;
                    let score = session.score();
                    writeln!(
                        out,
                        "Score: {}/{} ({}%)",
                        score.correct,
                        score.answered,
                        score.percentage()
                    )?;
                }
            }
            SessionState::Answered { .. } => {
                let Some(line) = read_line(input, out, NEXT_PROMPT)? else {
                    break;
                };
                if is_quit(&line) {
                    break;
                }
                session.next_question();
                if session.previous_question().is_some() {
                    writeln!(out)?;
                    writeln!(out, "----------------------------------------")?;
                }
            }
        }
    }

    let score = session.score();
    writeln!(
        out,
        "Final score: {}/{} ({}%)",
        score.correct,
        score.answered,
        score.percentage()
    )?;
    Ok(())
}

fn render_question<O: Write>(question: &Question, number: u32, out: &mut O) -> std::io::Result<()> {
    writeln!(out, "Question {number}")?;
    writeln!(out, "What is the meaning of: {}", question.term.to_uppercase())?;
    for (letter, option) in LETTERS.iter().zip(question.options.iter()) {
        writeln!(out, "  {letter}. {option}")?;
    }
    Ok(())
}

fn render_outcome<O: Write>(
    question: &Question,
    outcome: AnswerOutcome,
    out: &mut O,
) -> std::io::Result<()> {
    match outcome {
        AnswerOutcome::Correct => writeln!(out, "Correct!"),
        AnswerOutcome::Incorrect => {
            writeln!(out, "Incorrect answer")?;
            writeln!(out, "The correct answer is: {}", question.correct_definition)
        }
    }
}

/// Prompt and read one trimmed line. `None` at end of input.
fn read_line<I: BufRead, O: Write>(
    input: &mut I,
    out: &mut O,
    prompt: &str,
) -> std::io::Result<Option<String>> {
    write!(out, "{prompt}")?;
    out.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}

fn is_quit(line: &str) -> bool {
    line.eq_ignore_ascii_case("q") || line.eq_ignore_ascii_case("quit")
}

/// Accept a letter (A-D, any case) or a number (1-4).
fn parse_choice(line: &str) -> Option<usize> {
    let mut chars = line.chars();
    let c = chars.next()?;
    if chars.next().is_some() {
        return None;
    }
    match c.to_ascii_uppercase() {
        'A'..='D' => Some(c.to_ascii_uppercase() as usize - 'A' as usize),
        '1'..='4' => Some(c as usize - '1' as usize),
        _ => None,
    }
}
