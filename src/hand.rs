//! Hand evaluation plus player and dealer hand representations.

use alloc::vec::Vec;

use crate::card::Card;

fn evaluate_cards(cards: &[Card], include_hidden: bool) -> (u8, bool) {
    let mut value: u8 = 0;
    let mut aces: u8 = 0;

    for card in cards.iter().filter(|card| include_hidden || !card.hidden) {
        if card.is_ace() {
            aces += 1;
        }
        value = value.saturating_add(card.value());
    }

    while value > 21 && aces > 0 {
        value -= 10;
        aces -= 1;
    }

    let is_soft = aces > 0 && value <= 21;
    (value, is_soft)
}

/// Best total of the visible cards.
///
/// Aces count as 11 and are downgraded to 1 one at a time while the total
/// exceeds 21. Hidden cards are skipped.
#[must_use]
pub fn hand_value(cards: &[Card]) -> u8 {
    evaluate_cards(cards, false).0
}

/// Returns whether an ace is still counted as 11 in the visible total.
#[must_use]
pub fn is_soft(cards: &[Card]) -> bool {
    evaluate_cards(cards, false).1
}

/// Exactly two cards totalling 21.
#[must_use]
pub fn is_blackjack(cards: &[Card]) -> bool {
    cards.len() == 2 && hand_value(cards) == 21
}

/// Visible total over 21.
#[must_use]
pub fn is_bust(cards: &[Card]) -> bool {
    hand_value(cards) > 21
}

/// Hand status.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HandStatus {
    /// Still taking cards.
    Active,
    /// Finished without busting.
    Stand,
    /// Over 21.
    Bust,
    /// Two-card 21 on the opening deal.
    Blackjack,
}

/// A player's hand.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Hand {
    cards: Vec<Card>,
    status: HandStatus,
    bet: usize,
    from_split: bool,
    /// Hit or doubled since the deal; an acted pair can no longer split.
    acted: bool,
    doubled: bool,
}

impl Hand {
    /// An empty hand carrying `bet`.
    #[must_use]
    pub const fn new(bet: usize) -> Self {
        Self {
            cards: Vec::new(),
            status: HandStatus::Active,
            bet,
            from_split: false,
            acted: false,
            doubled: false,
        }
    }

    /// One half of a split pair, waiting for its second card.
    #[must_use]
    pub fn from_split(card: Card, bet: usize) -> Self {
        Self {
            cards: alloc::vec![card],
            status: HandStatus::Active,
            bet,
            from_split: true,
            acted: false,
            doubled: false,
        }
    }

    /// Deals a card into the hand and updates its status.
    pub fn add_card(&mut self, card: Card) {
        self.cards.push(card);

        let value = hand_value(&self.cards);

        if value > 21 {
            self.status = HandStatus::Bust;
        } else if self.cards.len() == 2 && value == 21 && !self.from_split {
            // Split hands never count as naturals.
            self.status = HandStatus::Blackjack;
        }
    }

    /// Adds a card drawn by the player (hit or double down).
    pub(crate) fn take_hit(&mut self, card: Card) {
        self.acted = true;
        self.add_card(card);
    }

    /// Cards in deal order.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Current status.
    #[must_use]
    pub const fn status(&self) -> HandStatus {
        self.status
    }

    /// Overrides the status, e.g. to stand.
    pub const fn set_status(&mut self, status: HandStatus) {
        self.status = status;
    }

    /// Returns whether the hand can still take actions.
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.status == HandStatus::Active
    }

    /// Credits riding on this hand.
    #[must_use]
    pub const fn bet(&self) -> usize {
        self.bet
    }

    /// Doubles the stake for a double down.
    pub const fn double_bet(&mut self) {
        self.bet *= 2;
        self.doubled = true;
    }

    /// Whether the stake was doubled.
    #[must_use]
    pub const fn is_doubled(&self) -> bool {
        self.doubled
    }

    /// Whether the hand came out of a split.
    #[must_use]
    pub const fn is_from_split(&self) -> bool {
        self.from_split
    }

    /// Returns whether the hand has been hit or doubled.
    #[must_use]
    pub const fn has_acted(&self) -> bool {
        self.acted
    }

    /// Best total; see [`hand_value`].
    #[must_use]
    pub fn value(&self) -> u8 {
        hand_value(&self.cards)
    }

    /// Whether an ace still counts as 11.
    #[must_use]
    pub fn is_soft(&self) -> bool {
        is_soft(&self.cards)
    }

    /// Over 21.
    #[must_use]
    pub fn is_bust(&self) -> bool {
        is_bust(&self.cards)
    }

    /// Returns whether the hand is an unplayed pair of equal normalized rank.
    #[must_use]
    pub fn is_pair(&self) -> bool {
        !self.acted
            && self.cards.len() == 2
            && self.cards[0].normalized_rank() == self.cards[1].normalized_rank()
    }

    /// Returns whether the hand is a pair of aces.
    #[must_use]
    pub fn is_ace_pair(&self) -> bool {
        self.is_pair() && self.cards[0].is_ace()
    }

    /// Number of cards.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Whether no card has been dealt.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Takes the second card off an unsplit pair and marks the hand as split.
    pub fn take_split_card(&mut self) -> Option<Card> {
        if self.cards.len() == 2 {
            self.from_split = true;
            self.cards.pop()
        } else {
            None
        }
    }
}

/// The dealer's hand.
///
/// The hole card is stored face down until [`DealerHand::reveal_hole`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DealerHand {
    cards: Vec<Card>,
}

impl DealerHand {
    /// A dealer hand with no cards yet.
    #[must_use]
    pub const fn new() -> Self {
        Self { cards: Vec::new() }
    }

    /// Deals a card to the dealer; pass a face-down card for the hole.
    pub fn add_card(&mut self, card: Card) {
        self.cards.push(card);
    }

    /// Cards in deal order, hole card included.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// The first card, always face up.
    #[must_use]
    pub fn up_card(&self) -> Option<&Card> {
        self.cards.first()
    }

    /// Returns whether every card is face up.
    #[must_use]
    pub fn is_hole_revealed(&self) -> bool {
        self.cards.iter().all(|card| !card.hidden)
    }

    /// Turns the hole card face up, returning it if it was hidden.
    pub fn reveal_hole(&mut self) -> Option<Card> {
        let hole = self.cards.iter_mut().find(|card| card.hidden)?;
        *hole = hole.face_up();
        Some(*hole)
    }

    /// Value of the face-up cards only.
    #[must_use]
    pub fn visible_value(&self) -> u8 {
        hand_value(&self.cards)
    }

    /// Value of the whole hand, hole card included.
    #[must_use]
    pub fn value(&self) -> u8 {
        evaluate_cards(&self.cards, true).0
    }

    /// Returns whether the whole hand is a blackjack.
    #[must_use]
    pub fn is_blackjack(&self) -> bool {
        self.cards.len() == 2 && self.value() == 21
    }

    /// Over 21 counting the hole card.
    #[must_use]
    pub fn is_bust(&self) -> bool {
        self.value() > 21
    }

    /// Returns whether the whole hand is soft.
    #[must_use]
    pub fn is_soft(&self) -> bool {
        evaluate_cards(&self.cards, true).1
    }

    /// Number of cards.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Whether no card has been dealt.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::card::Suit;

    fn cards(ranks: &[u8]) -> Vec<Card> {
        ranks.iter().map(|&rank| Card::new(Suit::Hearts, rank)).collect()
    }

    #[test]
    fn aces_downgrade_one_at_a_time() {
        assert_eq!(hand_value(&cards(&[1, 1])), 12);
        assert_eq!(hand_value(&cards(&[1, 1, 9])), 21);
        assert_eq!(hand_value(&cards(&[10, 1, 1])), 12);
        assert_eq!(hand_value(&cards(&[1, 6])), 17);
        assert!(is_soft(&cards(&[1, 6])));
        assert!(!is_soft(&cards(&[1, 6, 10])));
    }

    #[test]
    fn ace_position_does_not_change_value() {
        let ranks = [1, 5, 1, 3, 1];
        let forward = hand_value(&cards(&ranks));
        let mut reversed = ranks;
        reversed.reverse();
        assert_eq!(forward, hand_value(&cards(&reversed)));
        assert_eq!(forward, 21);
    }

    #[test]
    fn value_bounded_and_ace_optimal() {
        for a in 1..=13 {
            for b in 1..=13 {
                for c in 1..=13 {
                    let hand = cards(&[a, b, c]);
                    let value = hand_value(&hand);
                    assert!((3..=33).contains(&value));

                    let aces = hand.iter().filter(|card| card.is_ace()).count() as u8;
                    let hard: u8 = hand
                        .iter()
                        .map(|card| if card.is_ace() { 1 } else { card.value() })
                        .sum();
                    if aces > 0 && hard + 10 <= 21 {
                        assert_eq!(value, hard + 10);
                    } else {
                        assert_eq!(value, hard);
                    }
                }
            }
        }
    }

    #[test]
    fn blackjack_needs_exactly_two_cards() {
        assert!(is_blackjack(&cards(&[1, 13])));
        assert!(!is_blackjack(&cards(&[7, 7, 7])));
        assert!(is_bust(&cards(&[10, 10, 2])));
    }

    #[test]
    fn split_hand_is_not_a_natural() {
        let mut split_hand = Hand::from_split(Card::new(Suit::Hearts, 1), 10);
        split_hand.add_card(Card::new(Suit::Clubs, 13));
        assert_eq!(split_hand.value(), 21);
        assert_eq!(split_hand.status(), HandStatus::Active);
    }

    #[test]
    fn hit_pair_is_no_longer_splittable() {
        let mut hand = Hand::new(10);
        hand.add_card(Card::new(Suit::Hearts, 13));
        hand.add_card(Card::new(Suit::Spades, 10));
        assert!(hand.is_pair());

        hand.take_hit(Card::new(Suit::Spades, 2));
        assert!(!hand.is_pair());
        assert_eq!(hand.status(), HandStatus::Bust);
    }

    #[test]
    fn dealer_hole_card_is_excluded_until_revealed() {
        let mut dealer = DealerHand::new();
        dealer.add_card(Card::new(Suit::Hearts, 1));
        dealer.add_card(Card::new(Suit::Clubs, 6).face_down());

        assert!(!dealer.is_hole_revealed());
        assert_eq!(dealer.visible_value(), 11);
        assert_eq!(dealer.value(), 17);

        let hole = dealer.reveal_hole();
        assert_eq!(hole, Some(Card::new(Suit::Clubs, 6)));
        assert!(dealer.is_hole_revealed());
        assert_eq!(dealer.visible_value(), 17);
        assert!(dealer.is_soft());
        assert_eq!(dealer.reveal_hole(), None);
    }
}
