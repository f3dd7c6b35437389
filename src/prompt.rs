//! Console input and output.
//!
//! The engine only talks to the outside world through [`Interface`]. Every
//! question loops until it gets an acceptable answer, so callers never see
//! malformed input; they only see [`PromptError`] when the stream itself
//! fails or closes.

use std::io::{self, BufRead, StdinLock, Stdout, Write};

use crate::error::{NameError, PromptError};

/// Answers accepted by [`Interface::ask_yes_no`].
pub const YES_NO_OPTIONS: [&str; 4] = ["y", "yes", "n", "no"];

/// The presentation and input collaborator used by the engine.
pub trait Interface {
    /// Asks until the answer is one of `y`, `yes`, `n`, `no`; returns `true`
    /// for a yes.
    ///
    /// # Errors
    ///
    /// Returns an error if the console fails or input is closed.
    fn ask_yes_no(&mut self, prompt: &str) -> Result<bool, PromptError>;

    /// Asks until the answer is non-empty and differs from `forbidden`.
    ///
    /// # Errors
    ///
    /// Returns an error if the console fails or input is closed.
    fn ask_open(&mut self, prompt: &str, forbidden: &str) -> Result<String, PromptError>;

    /// Asks until the answer matches one of `options`, ignoring case.
    /// Returns the matching answer in lowercase.
    ///
    /// # Errors
    ///
    /// Returns an error if the console fails or input is closed.
    fn ask_closed(&mut self, prompt: &str, options: &[&str]) -> Result<String, PromptError>;

    /// Renders one line of text.
    ///
    /// # Errors
    ///
    /// Returns an error if the console fails.
    fn display(&mut self, message: &str) -> Result<(), PromptError>;
}

/// Normalizes a yes/no answer.
#[must_use]
pub fn parse_yes_no(answer: &str) -> Option<bool> {
    let answer = answer.trim().to_lowercase();
    if YES_NO_OPTIONS.contains(&answer.as_str()) {
        Some(answer.starts_with('y'))
    } else {
        None
    }
}

/// Validates an open answer such as the player's name.
///
/// # Errors
///
/// Returns [`NameError`] if the trimmed answer is empty or equals `reserved`.
pub fn validate_name(answer: &str, reserved: &str) -> Result<String, NameError> {
    let answer = answer.trim();
    if answer.is_empty() {
        Err(NameError::Empty(reserved.to_owned()))
    } else if answer == reserved {
        Err(NameError::Reserved(reserved.to_owned()))
    } else {
        Ok(answer.to_owned())
    }
}

/// Matches an answer against closed `options`, ignoring case.
#[must_use]
pub fn match_choice(answer: &str, options: &[&str]) -> Option<String> {
    let answer = answer.trim().to_lowercase();
    options
        .iter()
        .any(|option| option.to_lowercase() == answer)
        .then_some(answer)
}

/// An [`Interface`] over a line-based reader and writer.
#[derive(Debug)]
pub struct Console<R, W> {
    input: R,
    output: W,
}

impl Console<StdinLock<'static>, Stdout> {
    /// Creates a console on standard input and output.
    #[must_use]
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> Console<R, W> {
    /// Creates a console reading from `input` and writing to `output`.
    pub const fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Returns the writer.
    pub const fn output(&self) -> &W {
        &self.output
    }

    /// Consumes the console, returning the reader and writer.
    pub fn into_inner(self) -> (R, W) {
        (self.input, self.output)
    }

    fn ask(&mut self, question: &str) -> Result<String, PromptError> {
        writeln!(self.output, "{question}")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(PromptError::Closed);
        }
        Ok(line.trim_end_matches(['\n', '\r']).to_owned())
    }

    fn correct(&mut self, message: &str) -> Result<(), PromptError> {
        writeln!(self.output, "Sorry, {message}")?;
        writeln!(self.output)?;
        Ok(())
    }
}

impl<R: BufRead, W: Write> Interface for Console<R, W> {
    fn ask_yes_no(&mut self, prompt: &str) -> Result<bool, PromptError> {
        loop {
            let answer = self.ask(prompt)?;
            if let Some(yes) = parse_yes_no(&answer) {
                return Ok(yes);
            }
            log::debug!("rejected yes/no answer {answer:?}");
            self.correct("must be y or n.")?;
        }
    }

    fn ask_open(&mut self, prompt: &str, forbidden: &str) -> Result<String, PromptError> {
        loop {
            let answer = self.ask(prompt)?;
            match validate_name(&answer, forbidden) {
                Ok(value) => return Ok(value),
                Err(err) => {
                    log::debug!("rejected open answer {answer:?}: {err}");
                    self.correct(&format!("{err}."))?;
                }
            }
        }
    }

    fn ask_closed(&mut self, prompt: &str, options: &[&str]) -> Result<String, PromptError> {
        loop {
            let answer = self.ask(prompt)?;
            if let Some(choice) = match_choice(&answer, options) {
                return Ok(choice);
            }
            log::debug!("rejected choice {answer:?}, expected one of {options:?}");
            self.correct("invalid choice.")?;
        }
    }

    fn display(&mut self, message: &str) -> Result<(), PromptError> {
        writeln!(self.output, "{message}")?;
        Ok(())
    }
}
