use crate::core::SugarDecider;
use crate::utils::error::{BrewError, Result};
use rand::Rng;
use std::io::{BufRead, Write};

/// Fair coin flip.
#[derive(Debug, Clone, Copy, Default)]
pub struct RandomDecider;

impl SugarDecider for RandomDecider {
    fn decide(&mut self) -> Result<bool> {
        Ok(rand::rng().random_bool(0.5))
    }
}

/// Always gives the same answer.
#[derive(Debug, Clone, Copy)]
pub struct FixedDecider(pub bool);

impl SugarDecider for FixedDecider {
    fn decide(&mut self) -> Result<bool> {
        Ok(self.0)
    }
}

pub struct FnDecider<F> {
    f: F,
}

impl<F: FnMut() -> bool> SugarDecider for FnDecider<F> {
    fn decide(&mut self) -> Result<bool> {
        Ok((self.f)())
    }
}

/// Wraps a closure as a decision source.
pub fn decider_fn<F: FnMut() -> bool>(f: F) -> FnDecider<F> {
    FnDecider { f }
}

pub const MAX_PROMPT_ATTEMPTS: usize = 3;

/// Asks the customer on `output` and reads a y/n answer from `input`.
pub struct PromptDecider<R: BufRead, W: Write> {
    input: R,
    output: W,
    question: String,
}

impl<R: BufRead, W: Write> PromptDecider<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self {
            input,
            output,
            question: "加糖？".to_string(),
        }
    }

    pub fn with_question(mut self, question: impl Into<String>) -> Self {
        self.question = question.into();
        self
    }

    pub fn into_output(self) -> W {
        self.output
    }

    fn ask_once(&mut self) -> Result<String> {
        write!(self.output, "{} [y/n] ", self.question)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(BrewError::PromptClosed);
        }
        Ok(line.trim().to_string())
    }
}

impl PromptDecider<std::io::StdinLock<'static>, std::io::Stderr> {
    /// Reads answers from stdin and asks on stderr, leaving stdout to the output.
    pub fn stdin() -> Self {
        Self::new(std::io::stdin().lock(), std::io::stderr())
    }
}

fn parse_answer(answer: &str) -> Option<bool> {
    match answer.to_ascii_lowercase().as_str() {
        "y" | "yes" => Some(true),
        "n" | "no" => Some(false),
        _ => None,
    }
}

impl<R: BufRead, W: Write> SugarDecider for PromptDecider<R, W> {
    fn decide(&mut self) -> Result<bool> {
        let mut last = String::new();
        for attempt in 1..=MAX_PROMPT_ATTEMPTS {
            let answer = self.ask_once()?;
            if let Some(wants) = parse_answer(&answer) {
                return Ok(wants);
            }
            tracing::warn!(
                "Unrecognized answer '{}' (attempt {}/{})",
                answer,
                attempt,
                MAX_PROMPT_ATTEMPTS
            );
            last = answer;
        }
        Err(BrewError::InvalidAnswer { answer: last })
    }
}
