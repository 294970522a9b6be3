//! Read-only playing and betting advice.
//!
//! Everything here is a pure function of an [`AdvisorView`], which copies
//! the handful of fields a table display shows. Nothing here feeds back
//! into the reducer.

use alloc::format;
use alloc::string::String;
use core::fmt;

use crate::card::Card;
use crate::game::{GameState, GameStatus};
use crate::hand::Hand;

/// What the advisor recommends for the active hand.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Suggestion {
    /// Draw a card.
    Hit,
    /// Keep the hand.
    Stand,
    /// Double the bet and take one card.
    DoubleDown,
    /// Split the pair.
    Split,
    /// Nothing to decide in this phase.
    NoAction,
}

impl fmt::Display for Suggestion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Hit => "Hit",
            Self::Stand => "Stand",
            Self::DoubleDown => "Double Down",
            Self::Split => "Split",
            Self::NoAction => "Waiting",
        })
    }
}

/// How favourable the remaining shoe is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CountTrend {
    /// Rich in tens and aces.
    Hot,
    /// Roughly balanced.
    Neutral,
    /// Rich in small cards.
    Cold,
}

impl fmt::Display for CountTrend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Hot => "Hot",
            Self::Neutral => "Neutral",
            Self::Cold => "Cold",
        })
    }
}

/// The read-only fields advice is derived from.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AdvisorView {
    /// Value of the active hand.
    pub player_score: u8,
    /// Whether the active hand is soft.
    pub soft: bool,
    /// Normalized rank of an unplayed pair, if the hand is one.
    pub pair_rank: Option<u8>,
    /// Value of the dealer's up card (Ace = 11).
    pub dealer_up_card: Option<u8>,
    /// Whether doubling is currently allowed.
    pub can_double_down: bool,
    /// Whether splitting is currently allowed.
    pub can_split: bool,
    /// Phase of the round.
    pub status: GameStatus,
    /// True count, 0 when counting is off.
    pub true_count: f64,
    /// Index of the hand being played.
    pub current_hand: usize,
    /// Number of player hands in play.
    pub hand_count: usize,
}

impl AdvisorView {
    /// Copies the advisor's inputs out of a game state.
    #[must_use]
    pub fn from_state(state: &GameState) -> Self {
        let hand = state.player_hand();

        Self {
            player_score: state.player_score(),
            soft: hand.is_some_and(Hand::is_soft),
            pair_rank: hand
                .filter(|hand| hand.is_pair())
                .and_then(|hand| hand.cards().first())
                .map(Card::normalized_rank),
            dealer_up_card: state.dealer_hand().up_card().map(Card::value),
            can_double_down: state.can_double_down(),
            can_split: state.can_split(),
            status: state.status(),
            true_count: state.counter().true_count(),
            current_hand: state.current_hand_index(),
            hand_count: state.hands().len(),
        }
    }
}

/// Basic strategy for a multi-deck game where the dealer stands on soft 17,
/// with a few true-count deviations.
#[must_use]
pub fn suggest_play(view: &AdvisorView) -> Suggestion {
    if view.status != GameStatus::Playing {
        return Suggestion::NoAction;
    }
    let Some(dealer) = view.dealer_up_card else {
        return Suggestion::NoAction;
    };

    // Tens are left to the count.
    if view
        .pair_rank
        .is_some_and(|rank| view.can_split && rank != 10 && split_pair(rank, dealer))
    {
        return Suggestion::Split;
    }

    if let Some(suggestion) = count_deviation(view, dealer) {
        return suggestion;
    }

    let double_or = |fallback| {
        if view.can_double_down {
            Suggestion::DoubleDown
        } else {
            fallback
        }
    };

    let total = view.player_score;
    if view.soft {
        return match (total, dealer) {
            (20..=21, _) => Suggestion::Stand,
            (19, 6) | (18, 2..=6) => double_or(Suggestion::Stand),
            (19, _) | (18, 7..=8) => Suggestion::Stand,
            (17, 3..=6) | (15..=16, 4..=6) | (13..=14, 5..=6) => double_or(Suggestion::Hit),
            _ => Suggestion::Hit,
        };
    }

    match (total, dealer) {
        (17.., _) => Suggestion::Stand,
        (13..=16, 2..=6) | (12, 4..=6) => Suggestion::Stand,
        (11, _) | (10, 2..=9) | (9, 3..=6) => double_or(Suggestion::Hit),
        _ => Suggestion::Hit,
    }
}

fn split_pair(rank: u8, dealer: u8) -> bool {
    match rank {
        1 | 8 => true,
        9 => matches!(dealer, 2..=6 | 8..=9),
        7 | 2 | 3 => dealer <= 7,
        6 => dealer <= 6,
        4 => matches!(dealer, 5..=6),
        _ => false,
    }
}

/// Index plays that override basic strategy at a high or low count.
fn count_deviation(view: &AdvisorView, dealer: u8) -> Option<Suggestion> {
    let true_count = view.true_count;
    if view.soft {
        return None;
    }

    if view.can_split && view.pair_rank == Some(10) {
        return match dealer {
            5 if true_count >= 5.0 => Some(Suggestion::Split),
            6 if true_count >= 4.0 => Some(Suggestion::Split),
            _ => Some(Suggestion::Stand),
        };
    }

    match (view.player_score, dealer) {
        (16, 10) if true_count > 0.0 => Some(Suggestion::Stand),
        (15, 10) if true_count >= 4.0 => Some(Suggestion::Stand),
        (12, 2) if true_count >= 3.0 => Some(Suggestion::Stand),
        (12, 3) if true_count >= 2.0 => Some(Suggestion::Stand),
        (10, 10 | 11) if true_count >= 4.0 && view.can_double_down => Some(Suggestion::DoubleDown),
        (9, 2) if true_count >= 1.0 && view.can_double_down => Some(Suggestion::DoubleDown),
        _ => None,
    }
}

/// Basic strategy suggestion as display text, naming the split hand when
/// more than one is in play.
#[must_use]
pub fn advice(view: &AdvisorView) -> String {
    let suggestion = suggest_play(view);
    if view.hand_count > 1 && suggestion != Suggestion::NoAction {
        format!(
            "Hand {} of {}: {suggestion}",
            view.current_hand + 1,
            view.hand_count
        )
    } else {
        format!("{suggestion}")
    }
}

/// Classifies the true count.
#[must_use]
pub fn count_trend(true_count: f64) -> CountTrend {
    if true_count >= 2.0 {
        CountTrend::Hot
    } else if true_count <= -2.0 {
        CountTrend::Cold
    } else {
        CountTrend::Neutral
    }
}

/// Recommended bet: one unit below a true count of 2, then one unit per
/// whole point of true count, up to eight units.
#[must_use]
pub fn recommend_bet(true_count: f64, base_unit: usize) -> usize {
    let units = if true_count < 2.0 {
        1
    } else {
        // Truncation toward zero floors a positive count.
        (true_count as usize).min(8)
    };
    base_unit * units
}

#[cfg(test)]
mod tests {
    use super::*;

    fn view(player_score: u8, soft: bool, dealer: u8) -> AdvisorView {
        AdvisorView {
            player_score,
            soft,
            pair_rank: None,
            dealer_up_card: Some(dealer),
            can_double_down: true,
            can_split: false,
            status: GameStatus::Playing,
            true_count: -1.0,
            current_hand: 0,
            hand_count: 1,
        }
    }

    #[test]
    fn hard_totals() {
        assert_eq!(suggest_play(&view(17, false, 10)), Suggestion::Stand);
        assert_eq!(suggest_play(&view(16, false, 10)), Suggestion::Hit);
        assert_eq!(suggest_play(&view(13, false, 6)), Suggestion::Stand);
        assert_eq!(suggest_play(&view(11, false, 11)), Suggestion::DoubleDown);
        assert_eq!(suggest_play(&view(8, false, 5)), Suggestion::Hit);
    }

    #[test]
    fn double_falls_back_when_not_allowed() {
        let mut no_double = view(11, false, 6);
        no_double.can_double_down = false;
        assert_eq!(suggest_play(&no_double), Suggestion::Hit);

        let mut soft_18 = view(18, true, 4);
        soft_18.can_double_down = false;
        assert_eq!(suggest_play(&soft_18), Suggestion::Stand);
    }

    #[test]
    fn pairs() {
        let mut eights = view(16, false, 10);
        eights.pair_rank = Some(8);
        eights.can_split = true;
        assert_eq!(suggest_play(&eights), Suggestion::Split);

        let mut tens = view(20, false, 6);
        tens.pair_rank = Some(10);
        tens.can_split = true;
        assert_eq!(suggest_play(&tens), Suggestion::Stand);
        tens.true_count = 4.5;
        assert_eq!(suggest_play(&tens), Suggestion::Split);
    }

    #[test]
    fn deviations_follow_the_count() {
        let mut sixteen = view(16, false, 10);
        sixteen.true_count = 0.5;
        assert_eq!(suggest_play(&sixteen), Suggestion::Stand);
    }

    #[test]
    fn no_advice_outside_play() {
        let mut betting = view(0, false, 10);
        betting.status = GameStatus::Betting;
        assert_eq!(suggest_play(&betting), Suggestion::NoAction);
        assert_eq!(advice(&betting), "Waiting");
    }

    #[test]
    fn advice_names_split_hand() {
        let mut split = view(17, false, 9);
        split.hand_count = 3;
        split.current_hand = 1;
        assert_eq!(advice(&split), "Hand 2 of 3: Stand");
    }

    #[test]
    fn bet_spread() {
        assert_eq!(recommend_bet(-3.0, 10), 10);
        assert_eq!(recommend_bet(1.9, 10), 10);
        assert_eq!(recommend_bet(3.7, 10), 30);
        assert_eq!(recommend_bet(20.0, 10), 80);
        assert_eq!(count_trend(2.5), CountTrend::Hot);
        assert_eq!(count_trend(-2.0), CountTrend::Cold);
        assert_eq!(count_trend(0.0), CountTrend::Neutral);
    }
}
