//! Error types for game operations.
//!
//! The reducer never surfaces these as failures: [`GameState::apply`]
//! turns them into an unchanged state or a message. They are exposed so
//! callers using [`GameState::try_apply`] can match on the reason.
//!
//! [`GameState::apply`]: crate::GameState::apply
//! [`GameState::try_apply`]: crate::GameState::try_apply

use thiserror::Error;

/// Errors that can occur during betting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum BetError {
    /// Invalid game state for betting.
    #[error("invalid game state for betting")]
    InvalidState,
    /// Amount is not a chip denomination.
    #[error("${0} is not a valid chip")]
    InvalidChip(usize),
    /// Insufficient credits.
    #[error("Not enough credits!")]
    InsufficientCredits,
    /// No chip of that denomination has been placed.
    #[error("no such chip on the table")]
    ChipNotPlaced,
    /// Nothing has been bet.
    #[error("Place a bet first!")]
    NoBet,
}

/// Errors that can occur during player actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ActionError {
    /// Invalid game state for this action.
    #[error("invalid game state for this action")]
    InvalidState,
    /// Cannot double down on this hand.
    #[error("You can't double down on this hand.")]
    CannotDouble,
    /// Cannot split this hand.
    #[error("You can't split this hand.")]
    CannotSplit,
    /// Maximum splits reached.
    #[error("Maximum number of splits reached.")]
    MaxSplitsReached,
    /// Insufficient credits to double down.
    #[error("Not enough credits to double down!")]
    InsufficientCreditsToDouble,
    /// Insufficient credits to split.
    #[error("Not enough credits to split!")]
    InsufficientCreditsToSplit,
}

/// Any rejection produced by the reducer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum GameError {
    /// A betting action was rejected.
    #[error(transparent)]
    Bet(#[from] BetError),
    /// A playing action was rejected.
    #[error(transparent)]
    Action(#[from] ActionError),
    /// The shoe had no card to deal, even after reshuffling.
    #[error("The shoe is out of cards.")]
    ShoeExhausted,
}

impl GameError {
    /// Returns whether the rejection leaves the state untouched, without a message.
    ///
    /// Actions sent in the wrong phase are ignored outright.
    #[must_use]
    pub const fn is_silent(&self) -> bool {
        matches!(
            self,
            Self::Bet(BetError::InvalidState | BetError::ChipNotPlaced | BetError::NoBet)
                | Self::Action(ActionError::InvalidState)
        )
    }
}
