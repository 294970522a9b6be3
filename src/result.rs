//! Settlement records for a finished round.

use alloc::vec::Vec;

/// Result of a single hand after settlement.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HandOutcome {
    /// Beat the dealer's total or the dealer busted.
    Win,
    /// Busted or fell short of the dealer.
    Lose,
    /// Push (tie).
    Push,
    /// Player has blackjack.
    Blackjack,
}

/// Aggregate outcome of a round, by the sign of the net winnings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameResult {
    /// Net winnings are positive.
    Win,
    /// Net winnings are negative.
    Lose,
    /// Net winnings are zero.
    Tie,
}

impl GameResult {
    /// Classifies net winnings.
    #[must_use]
    pub const fn from_net(net: isize) -> Self {
        if net > 0 {
            Self::Win
        } else if net < 0 {
            Self::Lose
        } else {
            Self::Tie
        }
    }
}

/// Settlement of one player hand.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HandResult {
    /// Position among the split hands.
    pub hand_index: usize,
    /// How the hand ended.
    pub outcome: HandOutcome,
    /// Stake on the hand, doubled if it doubled down.
    pub bet: usize,
    /// Credits returned to the wallet for this hand, stake included.
    pub payout: usize,
    /// Final player total.
    pub player_value: u8,
    /// Final dealer total.
    pub dealer_value: u8,
}

impl HandResult {
    /// Profit or loss on this hand.
    #[must_use]
    #[expect(clippy::cast_possible_wrap, reason = "payout values fit in isize")]
    pub const fn net(&self) -> isize {
        self.payout as isize - self.bet as isize
    }
}

/// Result of an entire round.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoundResult {
    /// Results for each player hand.
    pub hands: Vec<HandResult>,
    /// Final dealer total.
    pub dealer_value: u8,
    /// Dealer went over 21.
    pub dealer_bust: bool,
    /// Dealer turned over a natural.
    pub dealer_blackjack: bool,
    /// Total credits returned to the wallet.
    pub total_payout: usize,
    /// Payout minus everything staked this round.
    pub net: isize,
    /// Aggregate outcome.
    pub outcome: GameResult,
}

impl RoundResult {
    /// Builds a round result, deriving totals from the hand results.
    #[must_use]
    pub fn new(
        hands: Vec<HandResult>,
        dealer_value: u8,
        dealer_bust: bool,
        dealer_blackjack: bool,
    ) -> Self {
        let total_payout = hands.iter().map(|hand| hand.payout).sum();
        let net = hands.iter().map(HandResult::net).sum();

        Self {
            hands,
            dealer_value,
            dealer_bust,
            dealer_blackjack,
            total_payout,
            net,
            outcome: GameResult::from_net(net),
        }
    }
}
