//! Card types and deck utilities.

/// Card suit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Suit {
    /// Hearts.
    Hearts,
    /// Diamonds.
    Diamonds,
    /// Clubs.
    Clubs,
    /// Spades.
    Spades,
}

impl Suit {
    /// All suits in shoe-building order.
    pub const ALL: [Self; 4] = [Self::Hearts, Self::Diamonds, Self::Clubs, Self::Spades];
}

/// A playing card.
///
/// A hidden card (the dealer's hole card before it is revealed) differs from
/// its face-up copy only by the `hidden` flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Card {
    /// The suit of the card.
    pub suit: Suit,
    /// The rank of the card (1 = Ace, 11 = Jack, 12 = Queen, 13 = King).
    pub rank: u8,
    /// Whether the card is dealt face down.
    pub hidden: bool,
}

impl Card {
    /// Creates a new face-up card.
    ///
    /// Note: This function does not validate the rank. Values outside 1..=13
    /// are accepted but may yield non-standard results when evaluating a hand.
    #[must_use]
    pub const fn new(suit: Suit, rank: u8) -> Self {
        Self {
            suit,
            rank,
            hidden: false,
        }
    }

    /// Returns a face-down copy of this card.
    #[must_use]
    pub const fn face_down(self) -> Self {
        Self {
            hidden: true,
            ..self
        }
    }

    /// Returns a face-up copy of this card.
    #[must_use]
    pub const fn face_up(self) -> Self {
        Self {
            hidden: false,
            ..self
        }
    }

    /// Returns whether the card is an ace.
    #[must_use]
    pub const fn is_ace(&self) -> bool {
        self.rank == 1
    }

    /// Numeric value used for hand totals (Ace = 11, faces = 10).
    #[must_use]
    pub const fn value(&self) -> u8 {
        match self.rank {
            1 => 11,
            2..=10 => self.rank,
            11..=13 => 10,
            _ => 0,
        }
    }

    /// Rank with every ten-valued card collapsed to 10.
    ///
    /// Two cards with the same normalized rank form a splittable pair.
    #[must_use]
    pub const fn normalized_rank(&self) -> u8 {
        if self.rank >= 10 { 10 } else { self.rank }
    }

    /// Short rank label (`A`, `2`..`10`, `J`, `Q`, `K`).
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self.rank {
            1 => "A",
            2 => "2",
            3 => "3",
            4 => "4",
            5 => "5",
            6 => "6",
            7 => "7",
            8 => "8",
            9 => "9",
            10 => "10",
            11 => "J",
            12 => "Q",
            13 => "K",
            _ => "?",
        }
    }
}

/// Number of cards per deck.
pub const DECK_SIZE: usize = 52;
