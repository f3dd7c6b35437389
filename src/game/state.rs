//! Match state types.

/// One of the two seats at the table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    /// The human player.
    Player,
    /// The computer dealer.
    Dealer,
}

/// Match state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchState {
    /// Rounds are being played.
    InProgress,
    /// A side reached the win limit; no more rounds until a rematch.
    Decided(Side),
    /// The human quit before anyone reached the win limit.
    Abandoned,
}
