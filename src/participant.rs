//! Participants and their turn logic.

use crate::card::Card;
use crate::deck::Deck;
use crate::error::PromptError;
use crate::format::hand_line;
use crate::hand::{Hand, HandStatus};
use crate::options::GameOptions;
use crate::prompt::Interface;

/// A turn decision.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Draw one more card.
    Hit,
    /// Stop drawing for this round.
    Stay,
}

/// Source of hit/stay decisions for a participant.
pub trait Decide {
    /// Decides the next action for `hand`.
    ///
    /// # Errors
    ///
    /// Returns an error if asking the human fails.
    fn decide<I: Interface>(&mut self, hand: &Hand, ui: &mut I) -> Result<Action, PromptError>;
}

/// Asks the human at the console.
#[derive(Debug, Clone, Copy, Default)]
pub struct HumanDecision;

impl HumanDecision {
    const PROMPT: &'static str = "Would you like to (h)it or (s)tay?";
    const OPTIONS: [&'static str; 4] = ["h", "hit", "s", "stay"];
}

impl Decide for HumanDecision {
    fn decide<I: Interface>(&mut self, _hand: &Hand, ui: &mut I) -> Result<Action, PromptError> {
        let choice = ui.ask_closed(Self::PROMPT, &Self::OPTIONS)?;
        Ok(if choice.starts_with('h') {
            Action::Hit
        } else {
            Action::Stay
        })
    }
}

/// Hits below a fixed total and stays at or above it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DealerRule {
    /// The total at which the dealer stays.
    pub stay_at: u8,
}

impl Decide for DealerRule {
    fn decide<I: Interface>(&mut self, hand: &Hand, _ui: &mut I) -> Result<Action, PromptError> {
        Ok(if hand.total() < self.stay_at {
            Action::Hit
        } else {
            Action::Stay
        })
    }
}

/// A seat at the table: a name, a hand, and a running score.
#[derive(Debug, Clone)]
pub struct Participant<D> {
    name: String,
    hand: Hand,
    score: u32,
    decide: D,
}

/// The human participant.
pub type Player = Participant<HumanDecision>;

/// The computer dealer.
pub type Dealer = Participant<DealerRule>;

impl Player {
    /// Creates the human player.
    #[must_use]
    pub fn player(name: impl Into<String>, options: &GameOptions) -> Self {
        Self::new(name, options, HumanDecision)
    }
}

impl Dealer {
    /// Creates the dealer from the configured name and stay threshold.
    #[must_use]
    pub fn dealer(options: &GameOptions) -> Self {
        let rule = DealerRule {
            stay_at: options.dealer_stay,
        };
        Self::new(options.dealer_name.clone(), options, rule)
    }
}

impl<D: Decide> Participant<D> {
    /// Creates a participant with an empty hand and no points.
    #[must_use]
    pub fn new(name: impl Into<String>, options: &GameOptions, decide: D) -> Self {
        Self {
            name: name.into(),
            hand: Hand::new(options.bust_value),
            score: 0,
            decide,
        }
    }

    /// Returns the participant's name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the participant's hand.
    #[must_use]
    pub const fn hand(&self) -> &Hand {
        &self.hand
    }

    /// Returns the number of rounds won this match.
    #[must_use]
    pub const fn score(&self) -> u32 {
        self.score
    }

    /// Returns the hand total.
    #[must_use]
    pub fn total(&self) -> u8 {
        self.hand.total()
    }

    /// Returns whether the hand is bust.
    #[must_use]
    pub fn is_bust(&self) -> bool {
        self.hand.is_bust()
    }

    /// Deals one card from `deck` into the hand.
    pub fn receive(&mut self, deck: &mut Deck) -> Card {
        let card = deck.deal_card();
        log::debug!("{} receives {card}", self.name);
        self.hand.add_card(card);
        card
    }

    /// Credits one round win.
    pub const fn award_point(&mut self) {
        self.score += 1;
    }

    /// Empties the hand for the next round.
    pub fn reset_hand(&mut self) {
        self.hand.clear();
    }

    /// Empties the hand and zeroes the score for a new match.
    pub fn reset(&mut self) {
        self.hand.clear();
        self.score = 0;
    }

    /// Plays the participant's turn until they stay or bust.
    ///
    /// Returns the terminal [`HandStatus`], either `Stayed` or `Bust`.
    ///
    /// # Errors
    ///
    /// Returns an error if the console fails or input is closed.
    pub fn take_turn<I: Interface>(
        &mut self,
        deck: &mut Deck,
        ui: &mut I,
    ) -> Result<HandStatus, PromptError> {
        while self.hand.status() == HandStatus::AwaitingDecision {
            match self.decide.decide(&self.hand, ui)? {
                Action::Stay => {
                    self.hand.stay();
                    ui.display(&format!("{} chose to stay.", self.name))?;
                }
                Action::Hit => {
                    let card = self.receive(deck);
                    ui.display(&format!("{} hits and draws {card}.", self.name))?;
                    ui.display(&hand_line(&self.name, &self.hand))?;
                    if self.hand.is_bust() {
                        ui.display(&format!("{} busted!", self.name))?;
                    }
                }
            }
        }

        Ok(self.hand.status())
    }
}
