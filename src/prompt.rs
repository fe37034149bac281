use anyhow::{Context, Result};
use std::io::{BufRead, Write};

use crate::project::{RATING_MAX, RATING_MIN};

/// Source of interactive answers.
pub trait InputProvider {
    /// Show `prompt` and return the user's trimmed answer.
    fn read_line(&mut self, prompt: &str) -> Result<String>;

    /// Tell the user an answer was rejected.
    fn notify(&mut self, message: &str) {
        println!("{}", message);
    }
}

/// Reads answers from stdin, printing prompts to stdout.
#[derive(Debug, Default)]
pub struct StdinInput;

impl InputProvider for StdinInput {
    fn read_line(&mut self, prompt: &str) -> Result<String> {
        print!("{}", prompt);
        std::io::stdout()
            .flush()
            .context("Failed to flush stdout")?;

        let mut input = String::new();
        let read = std::io::stdin()
            .lock()
            .read_line(&mut input)
            .context("Failed to read input")?;
        if read == 0 {
            anyhow::bail!("Unexpected end of input");
        }
        Ok(input.trim().to_string())
    }
}

/// Why a single rating answer was rejected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AnswerError {
    NotANumber,
    OutOfRange,
}

impl AnswerError {
    pub fn message(&self) -> &'static str {
        match self {
            AnswerError::NotANumber => "Invalid score. Must be a number between 1 and 5.",
            AnswerError::OutOfRange => "Invalid score. Must be between 1 and 5.",
        }
    }
}

/// Parse one answer as an integer rating in 1-5.
pub fn parse_rating(input: &str) -> Result<i32, AnswerError> {
    let value: i64 = input.trim().parse().map_err(|_| AnswerError::NotANumber)?;
    if value < i64::from(RATING_MIN) || value > i64::from(RATING_MAX) {
        return Err(AnswerError::OutOfRange);
    }
    Ok(value as i32)
}

/// Mean of the answers, rounded half up. `None` when there is nothing to average.
pub fn average_rating(answers: &[i32]) -> Option<i32> {
    if answers.is_empty() {
        return None;
    }
    let total: i32 = answers.iter().sum();
    let count = answers.len() as i32;
    Some((total * 2 + count) / (count * 2))
}

/// Ask every question in `prompts` and average the answers.
///
/// An invalid answer is reported and the whole question set starts over,
/// until every answer is a number in 1-5.
pub fn prompt_rating(input: &mut dyn InputProvider, prompts: &[String]) -> Result<i32> {
    anyhow::ensure!(!prompts.is_empty(), "No questions configured for this rating");

    'ask: loop {
        let mut answers = Vec::with_capacity(prompts.len());
        for prompt in prompts {
            let answer = input.read_line(prompt)?;
            match parse_rating(&answer) {
                Ok(value) => answers.push(value),
                Err(e) => {
                    input.notify(e.message());
                    continue 'ask;
                }
            }
        }
        return average_rating(&answers).context("No answers to average");
    }
}
