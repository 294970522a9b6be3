//! The game reducer and its state.

use alloc::format;
use alloc::string::{String, ToString};
use alloc::vec::Vec;

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use tracing::debug;

use crate::card::Card;
use crate::chip::ChipTally;
use crate::counter::CardCounter;
use crate::error::GameError;
use crate::hand::{DealerHand, Hand};
use crate::options::GameOptions;
use crate::result::{GameResult, RoundResult};
use crate::shoe::Shoe;

mod actions;
mod bet;
mod dealer;
pub mod state;

pub use state::{Action, GameStatus};

/// A snapshot of a single-player blackjack game.
///
/// States are values: [`GameState::apply`] never mutates its input and
/// returns the next snapshot. The shoe, the card counter and the random
/// number generator all travel inside the snapshot, so a given seed and
/// action sequence always plays out the same way.
#[derive(Debug, Clone)]
pub struct GameState {
    options: GameOptions,
    shoe: Shoe,
    rng: ChaCha8Rng,
    counter: CardCounter,
    /// Player hands; more than one after a split.
    hands: Vec<Hand>,
    /// Index of the hand currently being played.
    active_hand: usize,
    split_count: u8,
    dealer: DealerHand,
    status: GameStatus,
    credits: usize,
    /// Chips placed while betting; total wagered across all hands during play.
    current_bet: usize,
    selected_chips: ChipTally,
    can_double_down: bool,
    can_split: bool,
    /// Set only by the transition that replaced the shoe.
    deck_shuffled: bool,
    last_round: Option<RoundResult>,
    message: String,
}

impl GameState {
    /// Creates a game in the betting phase with the options' starting credits.
    ///
    /// The shoe starts empty, so the first deal builds and shuffles a fresh one.
    ///
    /// # Example
    ///
    /// ```
    /// use bjshoe::{GameOptions, GameState, GameStatus};
    ///
    /// let game = GameState::new(GameOptions::default(), 42);
    /// assert_eq!(game.status(), GameStatus::Betting);
    /// assert_eq!(game.credits(), 1000);
    /// ```
    #[must_use]
    pub fn new(options: GameOptions, seed: u64) -> Self {
        let options = options.with_decks(options.decks);
        let credits = options.starting_credits;

        Self {
            options,
            shoe: Shoe::empty(),
            rng: ChaCha8Rng::seed_from_u64(seed),
            counter: CardCounter::new(options.decks),
            hands: Vec::new(),
            active_hand: 0,
            split_count: 0,
            dealer: DealerHand::new(),
            status: GameStatus::Betting,
            credits,
            current_bet: 0,
            selected_chips: ChipTally::new(),
            can_double_down: false,
            can_split: false,
            deck_shuffled: false,
            last_round: None,
            message: betting_prompt(credits),
        }
    }

    /// Replaces the shoe, e.g. with a stacked one from [`Shoe::from_draws`].
    #[must_use]
    pub fn with_shoe(mut self, shoe: Shoe) -> Self {
        self.shoe = shoe;
        self
    }

    /// Applies an action and returns the next state.
    ///
    /// Never fails: actions sent in the wrong phase leave the state as it
    /// was, and other rejections only update [`message`](Self::message).
    ///
    /// # Example
    ///
    /// ```
    /// use bjshoe::{Action, Chip, GameOptions, GameState};
    ///
    /// let game = GameState::new(GameOptions::default(), 7);
    /// let game = game.apply(Action::PlaceBet(Chip::Ten));
    /// assert_eq!(game.current_bet(), 10);
    /// assert_eq!(game.credits(), 990);
    /// ```
    #[must_use]
    pub fn apply(&self, action: Action) -> Self {
        match self.try_apply(action) {
            Ok(next) => next,
            Err(err) => {
                debug!(?action, %err, "action rejected");
                let mut next = self.clone();
                next.deck_shuffled = false;
                if !err.is_silent() {
                    next.message = err.to_string();
                }
                next
            }
        }
    }

    /// Applies an action, reporting why it was rejected.
    ///
    /// # Errors
    ///
    /// Returns an error if the action is not allowed for the current phase
    /// or hand, or if the player lacks credits. Returns
    /// [`GameError::ShoeExhausted`] if a draw finds no card to deal.
    pub fn try_apply(&self, action: Action) -> Result<Self, GameError> {
        let mut next = self.clone();
        next.deck_shuffled = false;

        match action {
            Action::NewGame => next.new_game(),
            Action::PlaceBet(chip) => next.place_bet(chip)?,
            Action::RemoveBetChip(chip) => next.remove_bet_chip(chip)?,
            Action::UndoLastBet => next.undo_last_bet()?,
            Action::ClearBet => next.clear_bet()?,
            Action::StartGame => next.start_game()?,
            Action::Hit => next.hit()?,
            Action::Stand => next.stand()?,
            Action::DoubleDown => next.double_down()?,
            Action::Split => next.split()?,
            Action::ToggleCardCounting => next.toggle_card_counting(),
        }

        Ok(next)
    }

    fn new_game(&mut self) {
        let mut fresh = Self::new(self.options, 0);
        fresh.rng = self.rng.clone();
        fresh.credits = self.credits;
        fresh.message = betting_prompt(self.credits);
        fresh.counter.set_enabled(self.counter.is_enabled());
        debug!(credits = fresh.credits, "new game");
        *self = fresh;
    }

    fn toggle_card_counting(&mut self) {
        self.counter.toggle();
        self.message = if self.counter.is_enabled() {
            "Card counting enabled.".to_string()
        } else {
            "Card counting disabled.".to_string()
        };
    }

    /// Draws the next card, replacing the shoe first when it runs low.
    fn draw(&mut self) -> Result<Card, GameError> {
        let threshold = self.options.effective_threshold();
        let draw = self
            .shoe
            .draw(threshold, self.options.decks, &mut self.rng)
            .ok_or(GameError::ShoeExhausted)?;

        if draw.reshuffled {
            self.deck_shuffled = true;
            self.counter.reset();
            debug!(remaining = self.shoe.len(), "shoe reshuffled");
        }

        Ok(draw.card)
    }

    /// Draws a card the player can see and counts it.
    fn deal_face_up(&mut self) -> Result<Card, GameError> {
        let card = self.draw()?;
        self.counter.process_card(&card);
        Ok(card)
    }

    /// Draws the dealer's hole card. It is counted when revealed.
    fn deal_face_down(&mut self) -> Result<Card, GameError> {
        self.draw().map(Card::face_down)
    }

    /// Returns the table rules.
    #[must_use]
    pub const fn options(&self) -> &GameOptions {
        &self.options
    }

    /// Returns the current status.
    #[must_use]
    pub const fn status(&self) -> GameStatus {
        self.status
    }

    /// Returns the human-readable message for the last transition.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Returns the wallet balance.
    #[must_use]
    pub const fn credits(&self) -> usize {
        self.credits
    }

    /// Returns the amount currently wagered.
    #[must_use]
    pub const fn current_bet(&self) -> usize {
        self.current_bet
    }

    /// Returns the chips placed for the current bet.
    #[must_use]
    pub const fn selected_chips(&self) -> &ChipTally {
        &self.selected_chips
    }

    /// Returns the player's hands.
    #[must_use]
    pub fn hands(&self) -> &[Hand] {
        &self.hands
    }

    /// Returns the hand being played (the first hand outside of play).
    #[must_use]
    pub fn player_hand(&self) -> Option<&Hand> {
        self.hands.get(self.active_hand)
    }

    /// Returns the dealer's hand.
    #[must_use]
    pub const fn dealer_hand(&self) -> &DealerHand {
        &self.dealer
    }

    /// Value of the hand being played.
    #[must_use]
    pub fn player_score(&self) -> u8 {
        self.player_hand().map_or(0, Hand::value)
    }

    /// Value of the dealer's face-up cards.
    #[must_use]
    pub fn dealer_score(&self) -> u8 {
        self.dealer.visible_value()
    }

    /// Returns whether the active hand may double down.
    #[must_use]
    pub const fn can_double_down(&self) -> bool {
        self.can_double_down
    }

    /// Returns whether the active hand may split.
    #[must_use]
    pub const fn can_split(&self) -> bool {
        self.can_split
    }

    /// Returns whether the round in play has been split.
    #[must_use]
    pub const fn is_split(&self) -> bool {
        self.split_count > 0
    }

    /// Returns the number of splits made this round.
    #[must_use]
    pub const fn split_count(&self) -> u8 {
        self.split_count
    }

    /// Returns the index of the hand being played.
    #[must_use]
    pub const fn current_hand_index(&self) -> usize {
        self.active_hand
    }

    /// Returns the bet riding on each hand.
    #[must_use]
    pub fn split_bets(&self) -> Vec<usize> {
        self.hands.iter().map(Hand::bet).collect()
    }

    /// Returns the number of cards left in the shoe.
    #[must_use]
    pub fn cards_remaining(&self) -> usize {
        self.shoe.len()
    }

    /// Returns whether the last transition reshuffled the shoe.
    #[must_use]
    pub const fn deck_shuffled(&self) -> bool {
        self.deck_shuffled
    }

    /// Returns the card counter.
    #[must_use]
    pub const fn counter(&self) -> &CardCounter {
        &self.counter
    }

    /// Returns the settlement of the last round, until the next bet.
    #[must_use]
    pub const fn last_round(&self) -> Option<&RoundResult> {
        self.last_round.as_ref()
    }

    /// Returns the outcome of the last round.
    #[must_use]
    pub fn game_result(&self) -> Option<GameResult> {
        self.last_round.as_ref().map(|round| round.outcome)
    }

    /// Returns the net winnings of the last round (0 if none).
    #[must_use]
    pub fn winnings(&self) -> isize {
        self.last_round.as_ref().map_or(0, |round| round.net)
    }
}

/// Applies an action to a state, returning the next state.
#[must_use]
pub fn apply(state: &GameState, action: Action) -> GameState {
    state.apply(action)
}

fn betting_prompt(credits: usize) -> String {
    format!("Place your bet! You have ${credits} credits.")
}
