//! CLI blackjack example.

#![allow(clippy::missing_docs_in_private_items)]

use std::io::{self, Write};
use std::time::{SystemTime, UNIX_EPOCH};

use bjshoe::advisor::{self, AdvisorView};
use bjshoe::{Action, Card, Chip, DealerHand, GameOptions, GameState, GameStatus, Hand, Suit};
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    println!("Blackjack CLI example (type 'q' to quit)");

    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs();
    let mut game = GameState::new(GameOptions::default(), seed);
    println!("{}", game.message());

    loop {
        if game.deck_shuffled() {
            println!("Shoe reshuffled.");
        }

        match game.status() {
            GameStatus::Finished => {
                println!("{}", game.message());
                match prompt_line("Play again? (y/n): ").as_str() {
                    // NewGame keeps an empty wallet, so start over with the table default.
                    "y" | "yes" => game = GameState::new(*game.options(), seed.wrapping_add(1)),
                    _ => return,
                }
            }
            GameStatus::Betting => {
                print_betting(&game);
                let input = prompt_line(&format_betting_actions());
                let Some(action) = parse_betting(&input) else {
                    if input == "q" || input == "quit" {
                        println!("Goodbye.");
                        return;
                    }
                    println!("Unknown action.");
                    continue;
                };
                game = game.apply(action);
                println!("{}", game.message());
                // A natural settles the round during the deal.
                if action == Action::StartGame && game.last_round().is_some() {
                    print_table(&game);
                }
            }
            GameStatus::Playing => {
                print_table(&game);
                println!("Advisor: {}", advisor::advice(&AdvisorView::from_state(&game)));
                let input = prompt_line(&format_play_actions(&game));
                let action = match input.as_str() {
                    "h" | "hit" => Action::Hit,
                    "s" | "stand" => Action::Stand,
                    "d" | "double" => Action::DoubleDown,
                    "p" | "split" => Action::Split,
                    "c" | "count" => Action::ToggleCardCounting,
                    "q" | "quit" => return,
                    _ => {
                        println!("Unknown action.");
                        continue;
                    }
                };
                game = game.apply(action);
                println!("{}", game.message());
                if game.status() != GameStatus::Playing {
                    print_table(&game);
                }
            }
            GameStatus::DealerTurn => unreachable!("the dealer plays within a single transition"),
        }
    }
}

fn parse_betting(input: &str) -> Option<Action> {
    let action = match input {
        "1" => Action::PlaceBet(Chip::One),
        "5" => Action::PlaceBet(Chip::Five),
        "10" => Action::PlaceBet(Chip::Ten),
        "50" => Action::PlaceBet(Chip::Fifty),
        "100" => Action::PlaceBet(Chip::Hundred),
        "u" | "undo" => Action::UndoLastBet,
        "x" | "clear" => Action::ClearBet,
        "d" | "deal" => Action::StartGame,
        "c" | "count" => Action::ToggleCardCounting,
        "n" | "new" => Action::NewGame,
        _ => return None,
    };
    Some(action)
}

fn prompt_line(prompt: &str) -> String {
    print!("{prompt}");
    let _ = io::stdout().flush();

    let mut input = String::new();
    if io::stdin().read_line(&mut input).is_err() {
        return String::new();
    }
    input.trim().to_lowercase()
}

fn print_betting(game: &GameState) {
    println!(
        "\nCredits: {} | Bet: {} | Shoe: {} cards",
        game.credits(),
        game.current_bet(),
        game.cards_remaining()
    );

    let counter = game.counter();
    if counter.is_enabled() {
        let true_count = counter.true_count();
        println!(
            "Count: running {} | true {true_count:.1} | {} | suggested bet {}",
            counter.running_count(),
            advisor::count_trend(true_count),
            advisor::recommend_bet(true_count, Chip::Ten.value())
        );
    }
}

fn print_table(game: &GameState) {
    let dealer = game.dealer_hand();
    println!(
        "\nDealer: {} (value {})",
        format_dealer(dealer),
        game.dealer_score()
    );

    let playing = game.status() == GameStatus::Playing;
    for (index, hand) in game.hands().iter().enumerate() {
        let marker = if playing && index == game.current_hand_index() {
            "*"
        } else {
            " "
        };
        println!(
            "{} Hand {}: {} | value {} | bet {} | {:?}",
            marker,
            index + 1,
            format_hand(hand),
            hand.value(),
            hand.bet(),
            hand.status()
        );
    }

    if let Some(round) = game.last_round().filter(|_| !playing) {
        println!("Payout: {} (net {})", round.total_payout, round.net);
    }
    println!();
}

fn format_betting_actions() -> String {
    let chips = Chip::ALL
        .iter()
        .map(|chip| colorize(&format!("[{}]", chip.value()), "33"))
        .collect::<Vec<_>>()
        .join(" ");
    format!("Chips: {chips} | [u]ndo [x]clear [d]eal [c]ount [q]uit: ")
}

fn format_play_actions(game: &GameState) -> String {
    let parts = [
        format_action("hit", "h", true),
        format_action("stand", "s", true),
        format_action("double", "d", game.can_double_down()),
        format_action("split", "p", game.can_split()),
        format_action("count", "c", true),
    ];
    format!("Actions: {}: ", parts.join(" "))
}

fn format_action(label: &str, key: &str, allowed: bool) -> String {
    let text = format!("[{key}]{label}");
    if allowed {
        colorize(&text, "32")
    } else {
        colorize(&text, "90")
    }
}

fn colorize(text: &str, code: &str) -> String {
    format!("\u{1b}[{code}m{text}\u{1b}[0m")
}

fn format_dealer(dealer: &DealerHand) -> String {
    if dealer.is_empty() {
        return "(no cards)".to_string();
    }

    dealer
        .cards()
        .iter()
        .map(|card| {
            if card.hidden {
                "??".to_string()
            } else {
                format_card(card)
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

fn format_hand(hand: &Hand) -> String {
    if hand.is_empty() {
        return "(empty)".to_string();
    }
    hand.cards()
        .iter()
        .map(format_card)
        .collect::<Vec<_>>()
        .join(" ")
}

fn format_card(card: &Card) -> String {
    let (suit, color_code) = match card.suit {
        Suit::Hearts => ("H", "31"),
        Suit::Diamonds => ("D", "31"),
        Suit::Clubs => ("C", "32"),
        Suit::Spades => ("S", "34"),
    };

    let rank = if card.rank == 1 || card.rank > 10 {
        colorize(card.label(), color_code)
    } else {
        card.label().to_string()
    };
    format!("{rank}{}", colorize(suit, color_code))
}
