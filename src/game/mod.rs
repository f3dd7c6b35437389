//! Match controller.

use crate::deck::Deck;
use crate::error::PromptError;
use crate::format::point_word;
use crate::options::GameOptions;
use crate::participant::{Dealer, Player};
use crate::prompt::Interface;
use crate::result::MatchOutcome;

mod round;
pub mod state;

pub use round::resolve;
pub use state::{MatchState, Side};

/// A Twenty-One match between a human player and the dealer.
///
/// The game owns the deck, both participants, and the console. Rounds are
/// played until one side reaches [`GameOptions::win_limit`] or the human
/// quits between rounds.
#[derive(Debug)]
pub struct Game<I> {
    /// Rule constants.
    options: GameOptions,
    /// The deck both participants are dealt from.
    deck: Deck,
    /// The human player.
    player: Player,
    /// The dealer.
    dealer: Dealer,
    /// Current match state.
    state: MatchState,
    /// Console collaborator.
    ui: I,
}

impl<I: Interface> Game<I> {
    /// Asks for the player's name and creates a game with the given seed.
    ///
    /// # Errors
    ///
    /// Returns an error if the console fails or input is closed.
    pub fn new(options: GameOptions, seed: u64, mut ui: I) -> Result<Self, PromptError> {
        let name = ui.ask_open("What's your name?", &options.dealer_name)?;
        Ok(Self::with_deck(options, Deck::new(seed), ui, name))
    }

    /// Creates a game for a known player with a prepared deck.
    #[must_use]
    pub fn with_deck(options: GameOptions, deck: Deck, ui: I, name: impl Into<String>) -> Self {
        let player = Player::player(name, &options);
        let dealer = Dealer::dealer(&options);
        Self {
            options,
            deck,
            player,
            dealer,
            state: MatchState::InProgress,
            ui,
        }
    }

    /// Returns the rule constants.
    pub const fn options(&self) -> &GameOptions {
        &self.options
    }

    /// Returns the human player.
    pub const fn player(&self) -> &Player {
        &self.player
    }

    /// Returns the dealer.
    pub const fn dealer(&self) -> &Dealer {
        &self.dealer
    }

    /// Returns the deck.
    pub const fn deck(&self) -> &Deck {
        &self.deck
    }

    /// Replaces the deck, for example with a stacked one.
    pub fn set_deck(&mut self, deck: Deck) {
        self.deck = deck;
    }

    /// Returns the current match state.
    pub const fn state(&self) -> MatchState {
        self.state
    }

    /// Returns the champion of the current match, if one has been decided.
    pub const fn champion(&self) -> Option<Side> {
        match self.state {
            MatchState::Decided(side) => Some(side),
            MatchState::InProgress | MatchState::Abandoned => None,
        }
    }

    /// Returns the console.
    pub const fn ui(&self) -> &I {
        &self.ui
    }

    /// Consumes the game, returning the console.
    pub fn into_ui(self) -> I {
        self.ui
    }

    /// Returns the name of the participant in `side`.
    pub fn name_of(&self, side: Side) -> &str {
        match side {
            Side::Player => self.player.name(),
            Side::Dealer => self.dealer.name(),
        }
    }

    /// Runs matches until the human declines a rematch.
    ///
    /// # Errors
    ///
    /// Returns an error if the console fails or input is closed.
    pub fn run(&mut self) -> Result<(), PromptError> {
        self.display_welcome("Welcome to Twenty-One!", "The first")?;

        loop {
            if let MatchOutcome::Champion(side) = self.play_match()? {
                self.display_champion(side)?;
            }

            if !self
                .ui
                .ask_yes_no("Would you like to play another match? (y/n)")?
            {
                break;
            }

            self.reset_match();
            self.display_welcome("Welcome back to Twenty-One!", "Remember, the first")?;
        }

        self.ui.display("Thank you for playing Twenty-One! Goodbye!")?;
        self.ui.display("")
    }

    /// Plays rounds until a champion emerges or the human quits.
    ///
    /// A match that is already decided or abandoned plays no further rounds
    /// until [`reset_match`](Self::reset_match) is called.
    ///
    /// # Errors
    ///
    /// Returns an error if the console fails or input is closed.
    pub fn play_match(&mut self) -> Result<MatchOutcome, PromptError> {
        loop {
            match self.state {
                MatchState::Decided(side) => return Ok(MatchOutcome::Champion(side)),
                MatchState::Abandoned => return Ok(MatchOutcome::Abandoned),
                MatchState::InProgress => {}
            }

            self.play_round()?;

            if self.state == MatchState::InProgress && !self.continue_match()? {
                log::info!("{} quit the match", self.player.name());
                self.state = MatchState::Abandoned;
            }
        }
    }

    /// Starts a new match: both scores and hands are cleared and the deck is
    /// rebuilt and reshuffled.
    pub fn reset_match(&mut self) {
        self.player.reset();
        self.dealer.reset();
        self.deck.reset();
        self.state = MatchState::InProgress;
    }

    fn continue_match(&mut self) -> Result<bool, PromptError> {
        self.ui.display("")?;
        let answer = self.ui.ask_closed(
            "Press enter to continue the match (or 'q' to quit this match).",
            &["", "q"],
        )?;
        Ok(answer.is_empty())
    }

    fn display_welcome(&mut self, greeting: &str, reminder: &str) -> Result<(), PromptError> {
        let lines = [
            format!("Hi {}. {greeting}", self.player.name()),
            format!("You are playing against {}.", self.dealer.name()),
            format!(
                "{reminder} to win {} games is the Champion!",
                self.options.win_limit
            ),
            String::new(),
        ];
        for line in &lines {
            self.ui.display(line)?;
        }
        Ok(())
    }

    fn display_scores(&mut self) -> Result<(), PromptError> {
        let lines = [
            format!(
                "Remember, the first to win {} games is the Champion!",
                self.options.win_limit
            ),
            format!(
                "{} has {} {}.",
                self.player.name(),
                self.player.score(),
                point_word(self.player.score())
            ),
            format!(
                "{} has {} {}.",
                self.dealer.name(),
                self.dealer.score(),
                point_word(self.dealer.score())
            ),
        ];
        for line in &lines {
            self.ui.display(line)?;
        }
        Ok(())
    }

    fn display_champion(&mut self, side: Side) -> Result<(), PromptError> {
        let message = format!(
            "{} won {} games and is the CHAMPION!",
            self.name_of(side),
            self.options.win_limit
        );
        log::info!("{message}");
        self.ui.display("")?;
        self.ui.display(&message)?;
        self.ui.display("")
    }
}
