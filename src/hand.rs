//! Hand representation and scoring.

use crate::card::Card;

/// Amount an Ace gains when counted high.
pub const ACE_BONUS: u8 = 10;

/// Scores `cards` against `bust_value`.
///
/// Base values are summed first (Ace = 1). Each Ace is then considered in
/// hand order and upgraded by [`ACE_BONUS`] only if the running total,
/// including earlier upgrades, stays at or below `bust_value`.
#[must_use]
pub fn score(cards: &[Card], bust_value: u8) -> u8 {
    let mut total = cards
        .iter()
        .fold(0u8, |sum, card| sum.saturating_add(card.value()));

    for _ in cards.iter().filter(|card| card.is_ace()) {
        let upgraded = total.saturating_add(ACE_BONUS);
        if upgraded <= bust_value {
            total = upgraded;
        }
    }

    total
}

/// Returns whether `cards` score above `bust_value`.
#[must_use]
pub fn busted(cards: &[Card], bust_value: u8) -> bool {
    score(cards, bust_value) > bust_value
}

/// Turn state of a hand within a round.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HandStatus {
    /// The owner may still hit or stay.
    AwaitingDecision,
    /// The owner chose to stay.
    Stayed,
    /// The hand went over the bust value.
    Bust,
}

/// An append-only hand of cards.
#[derive(Debug, Clone)]
pub struct Hand {
    /// Cards in deal order.
    cards: Vec<Card>,
    /// Current status of the hand.
    status: HandStatus,
    /// Totals above this value are bust.
    bust_value: u8,
}

impl Hand {
    /// Creates an empty hand that busts above `bust_value`.
    #[must_use]
    pub const fn new(bust_value: u8) -> Self {
        Self {
            cards: Vec::new(),
            status: HandStatus::AwaitingDecision,
            bust_value,
        }
    }

    /// Adds a card to the hand.
    ///
    /// The hand becomes [`HandStatus::Bust`] the moment its total exceeds
    /// the bust value.
    pub fn add_card(&mut self, card: Card) {
        self.cards.push(card);
        if busted(&self.cards, self.bust_value) {
            self.status = HandStatus::Bust;
        }
    }

    /// Marks the hand as stayed. A bust hand stays bust.
    pub fn stay(&mut self) {
        if self.status == HandStatus::AwaitingDecision {
            self.status = HandStatus::Stayed;
        }
    }

    /// Returns the cards in the hand.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Returns the first card dealt, the one shown while the rest is hidden.
    #[must_use]
    pub fn up_card(&self) -> Option<&Card> {
        self.cards.first()
    }

    /// Returns the current status of the hand.
    #[must_use]
    pub const fn status(&self) -> HandStatus {
        self.status
    }

    /// Returns the scored total of the hand.
    #[must_use]
    pub fn total(&self) -> u8 {
        score(&self.cards, self.bust_value)
    }

    /// Returns whether the hand is bust.
    #[must_use]
    pub fn is_bust(&self) -> bool {
        self.status == HandStatus::Bust
    }

    /// Returns the number of cards in the hand.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the hand is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Clears the hand for a new round.
    pub fn clear(&mut self) {
        self.cards.clear();
        self.status = HandStatus::AwaitingDecision;
    }
}
