use core::cmp::Ordering;

use crate::error::PromptError;
use crate::format::{hand_line, hidden_hand_line};
use crate::hand::Hand;
use crate::prompt::Interface;
use crate::result::{RoundResult, RoundWinner};

use super::{Game, MatchState, Side};

/// Decides a round from the two final hands.
///
/// A player bust loses before the dealer's hand is considered; otherwise a
/// dealer bust loses, and otherwise the higher total wins. Equal totals tie.
#[must_use]
pub fn resolve(player: &Hand, dealer: &Hand) -> RoundWinner {
    if player.is_bust() {
        return RoundWinner::Dealer;
    }
    if dealer.is_bust() {
        return RoundWinner::Player;
    }
    match player.total().cmp(&dealer.total()) {
        Ordering::Greater => RoundWinner::Player,
        Ordering::Less => RoundWinner::Dealer,
        Ordering::Equal => RoundWinner::Tie,
    }
}

impl<I: Interface> Game<I> {
    /// Deals two cards each, alternating player then dealer.
    pub fn initial_deal(&mut self) {
        for _ in 0..2 {
            self.player.receive(&mut self.deck);
            self.dealer.receive(&mut self.deck);
        }
    }

    /// Plays one round from the initial deal to the score update.
    ///
    /// Hands are cleared before dealing. The deck is reset once the result
    /// has been shown, so the next round starts from a full deck. When the
    /// winner reaches the win limit the match becomes decided.
    ///
    /// # Errors
    ///
    /// Returns an error if the console fails or input is closed.
    pub fn play_round(&mut self) -> Result<RoundResult, PromptError> {
        self.player.reset_hand();
        self.dealer.reset_hand();
        self.initial_deal();

        self.ui
            .display(&hidden_hand_line(self.dealer.name(), self.dealer.hand()))?;
        self.ui
            .display(&hand_line(self.player.name(), self.player.hand()))?;

        self.player.take_turn(&mut self.deck, &mut self.ui)?;

        if !self.player.is_bust() {
            self.ui
                .display(&hand_line(self.dealer.name(), self.dealer.hand()))?;
            self.dealer.take_turn(&mut self.deck, &mut self.ui)?;
        }

        let winner = resolve(self.player.hand(), self.dealer.hand());
        match winner.side() {
            Some(Side::Player) => self.player.award_point(),
            Some(Side::Dealer) => self.dealer.award_point(),
            None => {}
        }

        let result = RoundResult {
            winner,
            player_total: self.player.total(),
            dealer_total: self.dealer.total(),
            player_bust: self.player.is_bust(),
            dealer_bust: self.dealer.is_bust(),
        };
        log::info!(
            "round over: {winner:?} (player {}, dealer {})",
            result.player_total,
            result.dealer_total
        );

        self.display_result(winner)?;
        self.deck.reset();

        if let Some(side) = winner.side() {
            let score = match side {
                Side::Player => self.player.score(),
                Side::Dealer => self.dealer.score(),
            };
            if score >= self.options.win_limit {
                self.state = MatchState::Decided(side);
            }
        }

        Ok(result)
    }

    fn display_result(&mut self, winner: RoundWinner) -> Result<(), PromptError> {
        self.ui.display("")?;
        self.ui
            .display(&hand_line(self.dealer.name(), self.dealer.hand()))?;
        self.ui
            .display(&hand_line(self.player.name(), self.player.hand()))?;

        let headline = match winner.side() {
            Some(side) => format!("{} won!", self.name_of(side)),
            None => String::from("It's a tie!"),
        };
        self.ui.display(&headline)?;
        self.display_scores()
    }
}
