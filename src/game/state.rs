//! Game status and action types.

use crate::chip::Chip;

/// Phase of the round.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    /// Accepting chips for the next round.
    Betting,
    /// Waiting for player actions.
    Playing,
    /// Dealer plays out their hand.
    DealerTurn,
    /// Out of credits with no bet outstanding.
    Finished,
}

/// A player action fed to [`GameState::apply`](crate::GameState::apply).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Reset round state, keeping the current credits.
    NewGame,
    /// Add a chip to the bet.
    PlaceBet(Chip),
    /// Take one chip of the given denomination back.
    RemoveBetChip(Chip),
    /// Take back one chip of the highest placed denomination.
    UndoLastBet,
    /// Take back the whole bet.
    ClearBet,
    /// Deal the round.
    StartGame,
    /// Draw a card into the active hand.
    Hit,
    /// Finish the active hand.
    Stand,
    /// Double the active hand's bet and draw exactly one card.
    DoubleDown,
    /// Split the active pair into two hands.
    Split,
    /// Turn card counting on or off.
    ToggleCardCounting,
}
