use alloc::format;
use alloc::string::ToString;

use crate::chip::Chip;
use crate::error::{BetError, GameError};
use crate::hand::{DealerHand, Hand, HandStatus};

use super::{GameState, GameStatus};

impl GameState {
    fn ensure_betting(&self) -> Result<(), BetError> {
        if self.status == GameStatus::Betting {
            Ok(())
        } else {
            Err(BetError::InvalidState)
        }
    }

    fn refresh_bet_message(&mut self) {
        self.message = if self.current_bet > 0 {
            format!(
                "Bet placed: ${}. Click \"Deal\" to start!",
                self.current_bet
            )
        } else {
            "Place your bet!".to_string()
        };
    }

    /// Adds one chip to the bet.
    pub(super) fn place_bet(&mut self, chip: Chip) -> Result<(), BetError> {
        self.ensure_betting()?;

        let amount = chip.value();
        if self.credits < amount {
            return Err(BetError::InsufficientCredits);
        }

        self.last_round = None;
        self.credits -= amount;
        self.current_bet += amount;
        self.selected_chips.add(chip);
        self.refresh_bet_message();

        Ok(())
    }

    /// Takes one chip of the given denomination back.
    pub(super) fn remove_bet_chip(&mut self, chip: Chip) -> Result<(), BetError> {
        self.ensure_betting()?;

        if !self.selected_chips.remove(chip) {
            return Err(BetError::ChipNotPlaced);
        }

        let amount = chip.value();
        self.current_bet -= amount;
        self.credits += amount;
        self.refresh_bet_message();

        Ok(())
    }

    /// Takes back one chip of the highest denomination on the table.
    pub(super) fn undo_last_bet(&mut self) -> Result<(), BetError> {
        self.ensure_betting()?;

        let chip = self.selected_chips.highest().ok_or(BetError::NoBet)?;
        self.remove_bet_chip(chip)
    }

    /// Refunds the whole bet.
    pub(super) fn clear_bet(&mut self) -> Result<(), BetError> {
        self.ensure_betting()?;

        if self.current_bet == 0 {
            return Err(BetError::NoBet);
        }

        self.credits += self.current_bet;
        self.current_bet = 0;
        self.selected_chips.clear();
        self.refresh_bet_message();

        Ok(())
    }

    /// Deals the opening cards and settles naturals.
    ///
    /// The player receives two face-up cards, then the dealer an up card and
    /// a face-down hole card. The hole card is only counted once revealed.
    pub(super) fn start_game(&mut self) -> Result<(), GameError> {
        self.ensure_betting()?;

        if self.current_bet == 0 {
            return Err(BetError::NoBet.into());
        }

        self.last_round = None;
        self.hands = alloc::vec![Hand::new(self.current_bet)];
        self.dealer = DealerHand::new();
        self.active_hand = 0;
        self.split_count = 0;

        for _ in 0..2 {
            let card = self.deal_face_up()?;
            self.hands[0].add_card(card);
        }

        let up_card = self.deal_face_up()?;
        self.dealer.add_card(up_card);
        let hole_card = self.deal_face_down()?;
        self.dealer.add_card(hole_card);

        let player_blackjack = self.hands[0].status() == HandStatus::Blackjack;
        let dealer_blackjack = self.dealer.is_blackjack();

        if player_blackjack || dealer_blackjack {
            self.settle_naturals(player_blackjack, dealer_blackjack);
            return Ok(());
        }

        self.status = GameStatus::Playing;
        self.refresh_flags();
        self.message = if self.can_double_down {
            "Your turn! Hit, Stand, or Double Down?".to_string()
        } else {
            "Your turn! Hit or Stand?".to_string()
        };

        Ok(())
    }
}
