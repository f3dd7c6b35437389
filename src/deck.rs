//! The shuffled deck shared by both participants.

use rand::SeedableRng;
use rand::seq::SliceRandom;
use rand_chacha::ChaCha8Rng;

use crate::card::{Card, DECK_SIZE, Rank, Suit};
use crate::error::DealError;

/// A single 52-card deck.
///
/// Cards are dealt from the end of the sequence, so the post-shuffle order
/// is the deal order read back to front.
#[derive(Debug, Clone)]
pub struct Deck {
    /// Cards not yet dealt.
    cards: Vec<Card>,
    /// Random number generator.
    rng: ChaCha8Rng,
}

impl Deck {
    /// Creates a freshly shuffled deck with the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        let mut deck = Self {
            cards: Vec::with_capacity(DECK_SIZE),
            rng: ChaCha8Rng::seed_from_u64(seed),
        };
        deck.reset();
        deck
    }

    /// Creates a deck that deals `draws` in the given order.
    ///
    /// The next [`reset`](Self::reset) replaces the stacked cards with a
    /// full shuffled deck drawn from `seed`.
    #[must_use]
    pub fn from_draws(draws: &[Card], seed: u64) -> Self {
        let mut cards = draws.to_vec();
        cards.reverse();
        Self {
            cards,
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    /// Builds the full 52-card set in suit then rank order.
    fn full_set() -> Vec<Card> {
        let mut cards = Vec::with_capacity(DECK_SIZE);
        for suit in Suit::ALL {
            for rank in Rank::ALL {
                cards.push(Card::new(rank, suit));
            }
        }
        cards
    }

    /// Rebuilds all 52 cards and shuffles them.
    pub fn reset(&mut self) {
        let mut cards = Self::full_set();
        cards.shuffle(&mut self.rng);
        self.cards = cards;
        log::debug!("deck reset and shuffled");
    }

    /// Removes and returns the next card.
    ///
    /// # Errors
    ///
    /// Returns [`DealError::EmptyDeck`] when no cards remain.
    pub fn try_deal(&mut self) -> Result<Card, DealError> {
        self.cards.pop().ok_or(DealError::EmptyDeck)
    }

    /// Removes and returns the next card.
    ///
    /// # Panics
    ///
    /// Panics if the deck is empty. A round can never draw more than a
    /// fraction of the deck, so an empty deck here is a logic error.
    pub fn deal_card(&mut self) -> Card {
        match self.try_deal() {
            Ok(card) => card,
            Err(err) => panic!("invariant violated: {err}"),
        }
    }

    /// Returns the number of cards remaining.
    #[must_use]
    pub fn cards_remaining(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether every card has been dealt.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}
