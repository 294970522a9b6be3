//! The shoe: the multi-deck stack of cards dealt from during a session.

use alloc::vec::Vec;

use rand::Rng;
use rand::seq::SliceRandom;

use crate::card::{Card, DECK_SIZE, Suit};

/// A card drawn from the shoe.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Draw {
    /// The drawn card.
    pub card: Card,
    /// Whether the shoe was replaced with a fresh one before this draw.
    pub reshuffled: bool,
}

/// An ordered stack of cards. The last card is drawn next.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Shoe {
    cards: Vec<Card>,
}

impl Shoe {
    /// Creates an empty shoe. The first draw from it reshuffles.
    #[must_use]
    pub const fn empty() -> Self {
        Self { cards: Vec::new() }
    }

    /// Builds `decks` full decks in suit-major, rank-minor order.
    #[must_use]
    pub fn unshuffled(decks: u8) -> Self {
        let mut cards = Vec::with_capacity(decks as usize * DECK_SIZE);

        for _ in 0..decks {
            for suit in Suit::ALL {
                for rank in 1..=13 {
                    cards.push(Card::new(suit, rank));
                }
            }
        }

        Self { cards }
    }

    /// Builds and shuffles `decks` full decks.
    #[must_use]
    pub fn shuffled<R: Rng + ?Sized>(decks: u8, rng: &mut R) -> Self {
        let mut shoe = Self::unshuffled(decks);
        shoe.shuffle(rng);
        shoe
    }

    /// Creates a shoe that yields `draws` in the given order.
    ///
    /// ```
    /// use bjshoe::{Card, Shoe, Suit};
    ///
    /// let shoe = Shoe::from_draws(&[Card::new(Suit::Hearts, 1), Card::new(Suit::Clubs, 5)]);
    /// assert_eq!(shoe.peek().map(|c| c.rank), Some(1));
    /// ```
    #[must_use]
    pub fn from_draws(draws: &[Card]) -> Self {
        let mut cards = draws.to_vec();
        cards.reverse();
        Self { cards }
    }

    /// Shuffles the remaining cards uniformly (Fisher-Yates).
    pub fn shuffle<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.cards.shuffle(rng);
    }

    /// Draws the next card, first replacing the shoe with `decks` freshly
    /// shuffled decks if no more than `threshold` cards remain.
    ///
    /// Returns `None` only if the replacement shoe is itself empty, which
    /// [`GameOptions`](crate::GameOptions) rules out.
    pub fn draw<R: Rng + ?Sized>(
        &mut self,
        threshold: usize,
        decks: u8,
        rng: &mut R,
    ) -> Option<Draw> {
        let reshuffled = self.cards.len() <= threshold;
        if reshuffled {
            *self = Self::shuffled(decks, rng);
        }

        self.cards.pop().map(|card| Draw { card, reshuffled })
    }

    /// Returns the next card without drawing it.
    #[must_use]
    pub fn peek(&self) -> Option<&Card> {
        self.cards.last()
    }

    /// Returns the number of cards remaining.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the shoe is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Returns the remaining cards, bottom first.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }
}
