//! Error types for game operations.

use thiserror::Error;

/// Errors raised by the input collaborator.
///
/// Malformed answers are never errors; they are re-prompted. Only a broken
/// or exhausted input stream ends the game early.
#[derive(Debug, Error)]
pub enum PromptError {
    /// Reading or writing the console failed.
    #[error("console i/o failed: {0}")]
    Io(#[from] std::io::Error),
    /// The input stream reached end of file while an answer was expected.
    #[error("input closed while waiting for an answer")]
    Closed,
}

/// Errors that can occur while dealing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DealError {
    /// No cards left in the deck.
    #[error("no cards left in the deck")]
    EmptyDeck,
}

/// Reasons a player name is rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NameError {
    /// The answer was blank. Carries the reserved name for the message.
    #[error("must enter a value (it can't be '{0}'!)")]
    Empty(String),
    /// The answer is reserved for the dealer.
    #[error("must enter a value (it can't be '{0}'!)")]
    Reserved(String),
}
