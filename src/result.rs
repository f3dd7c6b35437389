//! Round and match result types.

use crate::game::Side;

/// Winner of a single round.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundWinner {
    /// The human player won.
    Player,
    /// The dealer won.
    Dealer,
    /// Equal totals, no score change.
    Tie,
}

impl RoundWinner {
    /// Returns the winning side, if any.
    #[must_use]
    pub const fn side(self) -> Option<Side> {
        match self {
            Self::Player => Some(Side::Player),
            Self::Dealer => Some(Side::Dealer),
            Self::Tie => None,
        }
    }
}

/// Result of a finished round.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoundResult {
    /// The round winner.
    pub winner: RoundWinner,
    /// The player's final total.
    pub player_total: u8,
    /// The dealer's final total.
    pub dealer_total: u8,
    /// Whether the player busted.
    pub player_bust: bool,
    /// Whether the dealer busted.
    pub dealer_bust: bool,
}

/// How a match ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchOutcome {
    /// A side reached the win limit.
    Champion(Side),
    /// The human quit between rounds; no champion.
    Abandoned,
}
