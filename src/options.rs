//! Table rules.

use crate::card::DECK_SIZE;

/// Two-card totals the player may double on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[non_exhaustive]
pub enum DoubleOption {
    /// Any total.
    #[default]
    Any,
    /// 9 or 10.
    NineOrTen,
    /// 9, 10 or 11.
    NineThrough11,
    /// 9 up to 15.
    NineThrough15,
    /// Never.
    None,
}

impl DoubleOption {
    /// Returns whether a two-card total may be doubled under this rule.
    #[must_use]
    pub fn allows(self, value: u8) -> bool {
        match self {
            Self::Any => true,
            Self::NineOrTen => value == 9 || value == 10,
            Self::NineThrough11 => (9..=11).contains(&value),
            Self::NineThrough15 => (9..=15).contains(&value),
            Self::None => false,
        }
    }
}

/// How a fractional blackjack bonus is rounded to whole credits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RoundingMode {
    /// Round up.
    Up,
    /// Round down.
    Down,
    /// Round to nearest.
    Nearest,
}

impl RoundingMode {
    /// Computes `amount * numerator / denominator` rounded with this mode.
    #[must_use]
    pub const fn apply(self, amount: usize, numerator: usize, denominator: usize) -> usize {
        let scaled = amount * numerator;
        match self {
            Self::Up => scaled.div_ceil(denominator),
            Self::Down => scaled / denominator,
            Self::Nearest => (scaled * 2 + denominator) / (denominator * 2),
        }
    }
}

/// Table rules. Start from [`Default`] and adjust with the `with_*` methods.
///
/// ```
/// use bjshoe::GameOptions;
///
/// let options = GameOptions::default()
///     .with_decks(6)
///     .with_blackjack_pays(6, 5)
///     .with_stand_on_soft_17(false);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameOptions {
    /// Number of decks in the shoe.
    pub decks: u8,
    /// Cards left at or below which the shoe is replaced before a draw.
    pub reshuffle_threshold: usize,
    /// Blackjack payout ratio as `(numerator, denominator)`, typically 3:2.
    pub blackjack_pays: (usize, usize),
    /// Rounding of the blackjack bonus.
    pub rounding_blackjack: RoundingMode,
    /// Dealer stands on soft 17 instead of hitting.
    pub stand_on_soft_17: bool,
    /// Totals that may be doubled.
    pub double: DoubleOption,
    /// Split hands may double.
    pub double_after_split: bool,
    /// Maximum number of splits per round.
    pub split: u8,
    /// Whether split aces receive only one card each.
    pub split_aces_receive_one_card: bool,
    /// Credits a fresh game starts with.
    pub starting_credits: usize,
}

impl Default for GameOptions {
    fn default() -> Self {
        Self {
            decks: 2,
            reshuffle_threshold: 30,
            blackjack_pays: (3, 2),
            rounding_blackjack: RoundingMode::Down,
            stand_on_soft_17: true,
            double: DoubleOption::Any,
            double_after_split: true,
            split: 3,
            split_aces_receive_one_card: true,
            starting_credits: 1000,
        }
    }
}

impl GameOptions {
    /// Sets the number of decks. At least one deck is always used.
    ///
    /// # Example
    ///
    /// ```
    /// use bjshoe::GameOptions;
    ///
    /// let options = GameOptions::default().with_decks(6);
    /// assert_eq!(options.decks, 6);
    /// ```
    #[must_use]
    pub const fn with_decks(mut self, decks: u8) -> Self {
        self.decks = if decks == 0 { 1 } else { decks };
        self
    }

    /// Sets the reshuffle threshold.
    ///
    /// # Example
    ///
    /// ```
    /// use bjshoe::GameOptions;
    ///
    /// let options = GameOptions::default().with_reshuffle_threshold(52);
    /// assert_eq!(options.reshuffle_threshold, 52);
    /// ```
    #[must_use]
    pub const fn with_reshuffle_threshold(mut self, threshold: usize) -> Self {
        self.reshuffle_threshold = threshold;
        self
    }

    /// Sets the blackjack payout ratio.
    ///
    /// # Example
    ///
    /// ```
    /// use bjshoe::GameOptions;
    ///
    /// let options = GameOptions::default().with_blackjack_pays(6, 5);
    /// assert_eq!(options.blackjack_pays, (6, 5));
    /// ```
    #[must_use]
    pub const fn with_blackjack_pays(mut self, numerator: usize, denominator: usize) -> Self {
        self.blackjack_pays = (numerator, if denominator == 0 { 1 } else { denominator });
        self
    }

    /// Rounding applied to the blackjack bonus.
    #[must_use]
    pub const fn with_rounding_blackjack(mut self, mode: RoundingMode) -> Self {
        self.rounding_blackjack = mode;
        self
    }

    /// Whether the dealer stands on soft 17.
    #[must_use]
    pub const fn with_stand_on_soft_17(mut self, stand: bool) -> Self {
        self.stand_on_soft_17 = stand;
        self
    }

    /// Sets the double down conditions.
    ///
    /// # Example
    ///
    /// ```
    /// use bjshoe::{DoubleOption, GameOptions};
    ///
    /// let options = GameOptions::default().with_double(DoubleOption::NineThrough11);
    /// assert_eq!(options.double, DoubleOption::NineThrough11);
    /// ```
    #[must_use]
    pub const fn with_double(mut self, double: DoubleOption) -> Self {
        self.double = double;
        self
    }

    /// Whether a split hand may double.
    #[must_use]
    pub const fn with_double_after_split(mut self, allowed: bool) -> Self {
        self.double_after_split = allowed;
        self
    }

    /// Sets the maximum number of splits per round.
    ///
    /// # Example
    ///
    /// ```
    /// use bjshoe::GameOptions;
    ///
    /// let options = GameOptions::default().with_split(1);
    /// assert_eq!(options.split, 1);
    /// ```
    #[must_use]
    pub const fn with_split(mut self, split: u8) -> Self {
        self.split = split;
        self
    }

    /// Whether split aces get one card each and stand.
    #[must_use]
    pub const fn with_split_aces_receive_one_card(mut self, one_card: bool) -> Self {
        self.split_aces_receive_one_card = one_card;
        self
    }

    /// Sets the starting credits.
    ///
    /// # Example
    ///
    /// ```
    /// use bjshoe::GameOptions;
    ///
    /// let options = GameOptions::default().with_starting_credits(250);
    /// assert_eq!(options.starting_credits, 250);
    /// ```
    #[must_use]
    pub const fn with_starting_credits(mut self, credits: usize) -> Self {
        self.starting_credits = credits;
        self
    }

    /// Total cards in a fresh shoe.
    #[must_use]
    pub const fn shoe_size(&self) -> usize {
        self.decks as usize * DECK_SIZE
    }

    /// Reshuffle threshold, capped so a fresh shoe always has a card to draw.
    #[must_use]
    pub const fn effective_threshold(&self) -> usize {
        let cap = self.shoe_size().saturating_sub(1);
        if self.reshuffle_threshold < cap {
            self.reshuffle_threshold
        } else {
            cap
        }
    }
}
