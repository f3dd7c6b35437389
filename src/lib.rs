//! A Twenty-One card game engine.
//!
//! The crate provides a [`Game`] type that runs a "first to N wins" match
//! between a human player and a computer dealer. All input and output goes
//! through the [`Interface`] trait; [`Console`] implements it over any
//! line-based reader and writer.
//!
//! # Example
//!
//! ```no_run
//! use twentyone::{Console, Game, GameOptions};
//!
//! let console = Console::stdio();
//! let mut game = Game::new(GameOptions::default(), 42, console).unwrap();
//! game.run().unwrap();
//! ```

pub mod card;
pub mod deck;
pub mod error;
pub mod format;
pub mod game;
pub mod hand;
pub mod options;
pub mod participant;
pub mod prompt;
pub mod result;

// Re-export main types
pub use card::{Card, DECK_SIZE, Rank, Suit};
pub use deck::Deck;
pub use error::{DealError, NameError, PromptError};
pub use game::{Game, MatchState, Side, resolve};
pub use hand::{ACE_BONUS, Hand, HandStatus, busted, score};
pub use options::GameOptions;
pub use participant::{Action, Dealer, DealerRule, Decide, HumanDecision, Participant, Player};
pub use prompt::{Console, Interface};
pub use result::{MatchOutcome, RoundResult, RoundWinner};
