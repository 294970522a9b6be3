//! Hi-Lo card counting.

use tracing::trace;

use crate::card::{Card, DECK_SIZE};

const CARDS_PER_DECK: u32 = DECK_SIZE as u32;

/// Hi-Lo contribution of a single card: +1 for 2-6, 0 for 7-9, -1 for tens and aces.
#[must_use]
pub const fn hilo_value(card: &Card) -> i32 {
    // Aces rank high for counting purposes.
    let rank = match card.rank {
        1 => 14,
        11..=13 => 10,
        rank => rank,
    };

    match rank {
        2..=6 => 1,
        7..=9 => 0,
        _ => -1,
    }
}

/// Running and true count over the cards seen since the last reset.
///
/// This is a plain value carried inside [`GameState`](crate::GameState);
/// copying it is the snapshot.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CardCounter {
    running_count: i32,
    cards_seen: u32,
    decks_remaining: f64,
    total_decks: u8,
    enabled: bool,
}

impl CardCounter {
    /// Creates a disabled counter for a shoe of `total_decks` decks.
    #[must_use]
    pub fn new(total_decks: u8) -> Self {
        Self {
            running_count: 0,
            cards_seen: 0,
            decks_remaining: f64::from(total_decks),
            total_decks,
            enabled: false,
        }
    }

    /// Zeroes the count, keeping the enabled flag and deck count.
    pub fn reset(&mut self) {
        *self = Self {
            enabled: self.enabled,
            ..Self::new(self.total_decks)
        };
    }

    /// Flips counting on or off. Turning it on restarts the count.
    pub fn toggle(&mut self) {
        self.set_enabled(!self.enabled);
    }

    /// Enables or disables counting. Enabling always restarts the count.
    pub fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
        if enabled {
            self.reset();
        }
    }

    /// Feeds a newly visible card into the count. Ignored while disabled.
    pub fn process_card(&mut self, card: &Card) {
        if !self.enabled {
            return;
        }

        self.running_count += hilo_value(card);
        self.cards_seen += 1;
        let total_cards = u32::from(self.total_decks) * CARDS_PER_DECK;
        self.decks_remaining =
            (f64::from(total_cards) - f64::from(self.cards_seen)) / f64::from(CARDS_PER_DECK);
        trace!(
            rank = card.rank,
            running_count = self.running_count,
            cards_seen = self.cards_seen,
            "counted card"
        );
    }

    /// Running count normalized by the decks remaining.
    ///
    /// Returns 0 while disabled, and the running count itself once no
    /// decks remain.
    #[must_use]
    pub fn true_count(&self) -> f64 {
        if !self.enabled {
            return 0.0;
        }

        if self.decks_remaining > 0.0 {
            f64::from(self.running_count) / self.decks_remaining
        } else {
            f64::from(self.running_count)
        }
    }

    /// Running count, or 0 while disabled.
    #[must_use]
    pub const fn running_count(&self) -> i32 {
        if self.enabled { self.running_count } else { 0 }
    }

    /// Cards counted since the last reset, or 0 while disabled.
    #[must_use]
    pub const fn cards_seen(&self) -> u32 {
        if self.enabled { self.cards_seen } else { 0 }
    }

    /// Decks left in the shoe as estimated from the cards seen.
    #[must_use]
    pub fn decks_remaining(&self) -> f64 {
        if self.enabled {
            self.decks_remaining
        } else {
            f64::from(self.total_decks)
        }
    }

    /// Number of decks the shoe is built from.
    #[must_use]
    pub const fn total_decks(&self) -> u8 {
        self.total_decks
    }

    /// Returns whether counting is enabled.
    #[must_use]
    pub const fn is_enabled(&self) -> bool {
        self.enabled
    }
}
