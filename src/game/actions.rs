use alloc::format;

use tracing::debug;

use crate::error::{ActionError, GameError};
use crate::hand::{Hand, HandStatus};

use super::{GameState, GameStatus};

impl GameState {
    /// Returns the index of the active hand if the player may act on it.
    fn ensure_player_turn(&self) -> Result<usize, ActionError> {
        if self.status != GameStatus::Playing {
            return Err(ActionError::InvalidState);
        }

        match self.hands.get(self.active_hand) {
            Some(hand) if hand.is_active() => Ok(self.active_hand),
            _ => Err(ActionError::InvalidState),
        }
    }

    /// Whether table rules allow doubling this hand, ignoring credits.
    fn double_allowed(&self, hand: &Hand) -> bool {
        hand.is_active()
            && hand.len() == 2
            && !hand.has_acted()
            && (!hand.is_from_split() || self.options.double_after_split)
            && self.options.double.allows(hand.value())
    }

    /// Recomputes `can_double_down` and `can_split` for the active hand.
    pub(super) fn refresh_flags(&mut self) {
        let Some(hand) = self
            .hands
            .get(self.active_hand)
            .filter(|_| self.status == GameStatus::Playing)
        else {
            self.can_double_down = false;
            self.can_split = false;
            return;
        };

        let affordable = self.credits >= hand.bet();
        let can_double_down = affordable && self.double_allowed(hand);
        let can_split = affordable
            && hand.is_active()
            && hand.is_pair()
            && self.split_count < self.options.split;

        self.can_double_down = can_double_down;
        self.can_split = can_split;
    }

    /// Stands the hand at `index` if it already totals 21. Returns whether it
    /// is still playable.
    fn prepare_hand(&mut self, index: usize) -> bool {
        let hand = &mut self.hands[index];
        if hand.is_active() && hand.value() == 21 {
            hand.set_status(HandStatus::Stand);
        }
        hand.is_active()
    }

    /// Moves to the next playable split hand, or lets the dealer play.
    pub(super) fn advance_after_hand(&mut self) -> Result<(), GameError> {
        let next = (self.active_hand + 1..self.hands.len()).find(|&index| self.prepare_hand(index));

        match next {
            Some(index) => {
                self.active_hand = index;
                self.refresh_flags();
                self.message = format!(
                    "{} Playing hand {} of {}.",
                    self.message,
                    index + 1,
                    self.hands.len()
                );
                Ok(())
            }
            None => self.dealer_play(),
        }
    }

    /// Player action: Hit (draw a card).
    pub(super) fn hit(&mut self) -> Result<(), GameError> {
        let index = self.ensure_player_turn()?;

        let card = self.deal_face_up()?;
        let hand = &mut self.hands[index];
        hand.take_hit(card);
        let value = hand.value();

        match hand.status() {
            HandStatus::Bust => {
                self.message = format!("Bust with {value}!");
                self.advance_after_hand()?;
            }
            _ if value == 21 => {
                hand.set_status(HandStatus::Stand);
                self.message = "21!".into();
                self.advance_after_hand()?;
            }
            _ => {
                self.refresh_flags();
                self.message = format!("You have {value}. Hit or Stand?");
            }
        }

        Ok(())
    }

    /// Player action: Stand (keep the active hand).
    pub(super) fn stand(&mut self) -> Result<(), GameError> {
        let index = self.ensure_player_turn()?;

        let hand = &mut self.hands[index];
        hand.set_status(HandStatus::Stand);
        self.message = format!("You stand on {}.", hand.value());
        self.advance_after_hand()
    }

    /// Player action: Double down (double the bet, take one card, then stand).
    ///
    /// A bust forfeits the doubled bet.
    pub(super) fn double_down(&mut self) -> Result<(), GameError> {
        let index = self.ensure_player_turn()?;

        let hand = &self.hands[index];
        if !self.double_allowed(hand) {
            return Err(ActionError::CannotDouble.into());
        }

        let bet = hand.bet();
        if self.credits < bet {
            return Err(ActionError::InsufficientCreditsToDouble.into());
        }

        self.credits -= bet;
        self.current_bet += bet;

        let card = self.deal_face_up()?;
        let hand = &mut self.hands[index];
        hand.double_bet();
        hand.take_hit(card);

        if hand.status() == HandStatus::Bust {
            self.message = "Double Down Bust!".into();
        } else {
            hand.set_status(HandStatus::Stand);
            self.message = format!("Double Down! You have {}.", hand.value());
        }
        self.advance_after_hand()
    }

    /// Player action: Split (split a pair into two hands).
    ///
    /// Each half receives one new card, first hand first. Split aces get
    /// exactly one card each and are stood immediately when the table deals
    /// them one card.
    pub(super) fn split(&mut self) -> Result<(), GameError> {
        let index = self.ensure_player_turn()?;

        let hand = &self.hands[index];
        if !hand.is_pair() {
            return Err(ActionError::CannotSplit.into());
        }

        if self.split_count >= self.options.split {
            return Err(ActionError::MaxSplitsReached.into());
        }

        let bet = hand.bet();
        if self.credits < bet {
            return Err(ActionError::InsufficientCreditsToSplit.into());
        }

        let aces = hand.is_ace_pair();
        let Some(split_card) = self.hands[index].take_split_card() else {
            return Err(ActionError::CannotSplit.into());
        };

        self.credits -= bet;
        self.current_bet += bet;
        self.split_count += 1;

        let mut new_hand = Hand::from_split(split_card, bet);
        let first = self.deal_face_up()?;
        self.hands[index].add_card(first);
        let second = self.deal_face_up()?;
        new_hand.add_card(second);
        self.hands.insert(index + 1, new_hand);

        if aces && self.options.split_aces_receive_one_card {
            self.hands[index].set_status(HandStatus::Stand);
            self.hands[index + 1].set_status(HandStatus::Stand);
        }

        debug!(
            split_count = self.split_count,
            hands = self.hands.len(),
            "split hand"
        );

        self.message = format!("Split! {} hands in play.", self.hands.len());
        if self.prepare_hand(index) {
            self.refresh_flags();
            self.message = format!(
                "{} Playing hand {} of {}.",
                self.message,
                index + 1,
                self.hands.len()
            );
            Ok(())
        } else {
            self.advance_after_hand()
        }
    }
}
