//! A single-player blackjack reducer with optional `no_std` support.
//!
//! [`GameState`] is an immutable snapshot of the table: the shoe, the
//! player's hands, the wallet and a Hi-Lo [`CardCounter`]. Every player
//! input is an [`Action`], and [`GameState::apply`] returns the next
//! snapshot without touching the previous one. Invalid actions never fail;
//! they leave the state as it was or explain themselves in
//! [`GameState::message`].
//!
//! # Example
//!
//! ```
//! use bjshoe::{Action, Chip, GameOptions, GameState, GameStatus};
//!
//! let game = GameState::new(GameOptions::default(), 42)
//!     .apply(Action::PlaceBet(Chip::Fifty))
//!     .apply(Action::StartGame);
//! assert_ne!(game.status(), GameStatus::Finished);
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod advisor;
pub mod card;
pub mod chip;
pub mod counter;
pub mod error;
pub mod game;
pub mod hand;
pub mod options;
pub mod result;
pub mod shoe;

// Re-export main types
pub use advisor::{AdvisorView, CountTrend, Suggestion};
pub use card::{Card, DECK_SIZE, Suit};
pub use chip::{Chip, ChipTally};
pub use counter::{CardCounter, hilo_value};
pub use error::{ActionError, BetError, GameError};
pub use game::{Action, GameState, GameStatus, apply};
pub use hand::{DealerHand, Hand, HandStatus, hand_value, is_blackjack, is_bust};
pub use options::{DoubleOption, GameOptions, RoundingMode};
pub use result::{GameResult, HandOutcome, HandResult, RoundResult};
pub use shoe::{Draw, Shoe};
