use alloc::format;
use alloc::string::String;
use alloc::vec::Vec;

use tracing::debug;

use crate::error::GameError;
use crate::hand::Hand;
use crate::result::{GameResult, HandOutcome, HandResult, RoundResult};

use super::{GameState, GameStatus};

impl GameState {
    /// Turns the hole card face up and counts it.
    fn reveal_hole(&mut self) {
        if let Some(hole) = self.dealer.reveal_hole() {
            self.counter.process_card(&hole);
        }
    }

    fn dealer_should_draw(&self) -> bool {
        let value = self.dealer.value();
        value < 17 || (value == 17 && self.dealer.is_soft() && !self.options.stand_on_soft_17)
    }

    /// Dealer plays their hand and the round is settled.
    ///
    /// The dealer reveals their hole card and draws until reaching 17 or
    /// higher. Busted player hands do not change how the dealer plays.
    pub(super) fn dealer_play(&mut self) -> Result<(), GameError> {
        self.status = GameStatus::DealerTurn;
        self.can_double_down = false;
        self.can_split = false;
        self.reveal_hole();

        while self.dealer_should_draw() {
            let card = self.deal_face_up()?;
            self.dealer.add_card(card);
        }

        let result = self.settle_hands();
        let headline = self.settlement_headline(&result);
        self.finish_round(result, &headline);
        Ok(())
    }

    /// Compares every player hand against the dealer's final total.
    fn settle_hands(&self) -> RoundResult {
        let dealer_value = self.dealer.value();
        let dealer_bust = self.dealer.is_bust();

        let hands: Vec<HandResult> = self
            .hands
            .iter()
            .enumerate()
            .map(|(hand_index, hand)| {
                let bet = hand.bet();
                let player_value = hand.value();

                let (outcome, payout) = if hand.is_bust() {
                    (HandOutcome::Lose, 0)
                } else if dealer_bust || player_value > dealer_value {
                    (HandOutcome::Win, bet * 2)
                } else if player_value < dealer_value {
                    (HandOutcome::Lose, 0)
                } else {
                    (HandOutcome::Push, bet)
                };

                HandResult {
                    hand_index,
                    outcome,
                    bet,
                    payout,
                    player_value,
                    dealer_value,
                }
            })
            .collect();

        RoundResult::new(hands, dealer_value, dealer_bust, false)
    }

    fn settlement_headline(&self, result: &RoundResult) -> String {
        if let [hand] = result.hands.as_slice() {
            let doubled = self.hands.first().is_some_and(Hand::is_doubled);
            return match hand.outcome {
                HandOutcome::Lose if hand.player_value > 21 && doubled => {
                    String::from("Double Down Bust! You lose.")
                }
                HandOutcome::Lose if hand.player_value > 21 => String::from("Bust! You lose!"),
                HandOutcome::Lose => String::from("Dealer wins!"),
                HandOutcome::Push => String::from("Push! It's a tie!"),
                HandOutcome::Win | HandOutcome::Blackjack if result.dealer_bust => {
                    format!("Dealer busts! You win! You won ${}!", hand.payout)
                }
                HandOutcome::Win | HandOutcome::Blackjack => {
                    format!("You win! You won ${}!", hand.payout)
                }
            };
        }

        let count = |outcome: HandOutcome| {
            result
                .hands
                .iter()
                .filter(|hand| hand.outcome == outcome)
                .count()
        };
        let summary = format!(
            "Split hands: {} won, {} lost, {} pushed.",
            count(HandOutcome::Win),
            count(HandOutcome::Lose),
            count(HandOutcome::Push)
        );

        match result.outcome {
            GameResult::Win => format!("{summary} You won ${} net!", result.net),
            GameResult::Lose => format!("{summary} You lost ${} net.", result.net.unsigned_abs()),
            GameResult::Tie => format!("{summary} You broke even."),
        }
    }

    /// Settles a round decided by a natural on the opening deal.
    ///
    /// Both blackjack pushes, a player blackjack pays the blackjack ratio on
    /// top of the returned stake, and a dealer blackjack takes the bet.
    pub(super) fn settle_naturals(&mut self, player_blackjack: bool, dealer_blackjack: bool) {
        self.reveal_hole();

        let bet = self.current_bet;
        let (numerator, denominator) = self.options.blackjack_pays;
        let (outcome, payout, headline) = match (player_blackjack, dealer_blackjack) {
            (true, true) => (
                HandOutcome::Push,
                bet,
                String::from("Push! Both have blackjack."),
            ),
            (true, false) => {
                let bonus = self
                    .options
                    .rounding_blackjack
                    .apply(bet, numerator, denominator);
                (
                    HandOutcome::Blackjack,
                    bet + bonus,
                    format!("Blackjack! You win ${bonus}!"),
                )
            }
            _ => (
                HandOutcome::Lose,
                0,
                String::from("Dealer has blackjack! You lose."),
            ),
        };

        let dealer_value = self.dealer.value();
        let hand = HandResult {
            hand_index: 0,
            outcome,
            bet,
            payout,
            player_value: self.player_score(),
            dealer_value,
        };

        let result = RoundResult::new(alloc::vec![hand], dealer_value, false, dealer_blackjack);
        self.finish_round(result, &headline);
    }

    /// Pays out a settled round and returns to betting, or finishes the game
    /// when the wallet is empty.
    fn finish_round(&mut self, result: RoundResult, headline: &str) {
        self.credits += result.total_payout;
        self.current_bet = 0;
        self.selected_chips.clear();
        self.active_hand = 0;
        self.split_count = 0;
        self.can_double_down = false;
        self.can_split = false;

        if self.credits == 0 {
            self.status = GameStatus::Finished;
            self.message = format!("{headline} Game Over - No credits left!");
        } else {
            self.status = GameStatus::Betting;
            self.message = format!("{headline} Place your next bet!");
        }

        debug!(
            net = result.net,
            payout = result.total_payout,
            dealer_value = result.dealer_value,
            credits = self.credits,
            "round settled"
        );
        self.last_round = Some(result);
    }
}
