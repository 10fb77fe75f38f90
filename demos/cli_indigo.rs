//! CLI Indigo example.

#![allow(clippy::missing_docs_in_private_items)]

use std::io::{self, Write};
use std::time::{SystemTime, UNIX_EPOCH};

use indigors::{Card, Game, GameConfig, GameState, Seat, Suit, TurnOutcome};

fn main() {
    println!("Indigo Card Game");

    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs();

    let first_mover = loop {
        match prompt_line("Play first? (yes/no): ").as_str() {
            "yes" => break Seat::Human,
            "no" => break Seat::Ai,
            _ => {}
        }
    };

    let config = GameConfig::default().with_first_mover(first_mover);
    let mut game = Game::new(config, seed);
    if let Err(err) = game.deal() {
        println!("Deal error: {err}");
        return;
    }

    println!(
        "Initial cards on the table: {}",
        format_cards(game.table().cards())
    );

    while game.state() != GameState::GameOver {
        print_table(&game);

        let outcome = match game.state() {
            GameState::PlayerTurn => {
                let Some(outcome) = human_turn(&mut game) else {
                    continue;
                };
                outcome
            }
            GameState::AiTurn => match game.run_ai_turn() {
                Ok(outcome) => {
                    if let Some(card) = outcome.card {
                        println!("Computer plays {}", format_card(&card));
                    }
                    outcome
                }
                Err(err) => {
                    println!("Computer error: {err}");
                    return;
                }
            },
            _ => return,
        };

        report_outcome(&game, &outcome);
    }

    if !game.exit_requested() {
        print_table(&game);
        print_score(&game);
    }
    println!("Game Over");
}

/// Prompts for a card number or the exit command. Returns `None` when the
/// input was invalid and the caller should re-prompt.
fn human_turn(game: &mut Game) -> Option<TurnOutcome> {
    let hand = game.player(Seat::Human).hand();
    println!("Cards in hand: {}", format_hand_numbered(hand.cards()));

    let size = hand.len();
    let input = prompt_line(&format!("Choose a card to play (1-{size}): "));

    if input == "exit" {
        return game.submit_exit().ok();
    }

    let index = match input.parse::<usize>() {
        Ok(number) if (1..=size).contains(&number) => number - 1,
        _ => return None,
    };

    match game.submit_human_play(index) {
        Ok(outcome) => Some(outcome),
        Err(err) => {
            println!("Play error: {err}");
            None
        }
    }
}

fn report_outcome(game: &Game, outcome: &TurnOutcome) {
    if let Some(winner) = outcome.capture {
        let name = match winner {
            Seat::Human => "Player",
            Seat::Ai => "Computer",
        };
        println!("{name} wins cards");
        print_score(game);
    }
}

fn print_score(game: &Game) {
    let scores = game.scores();
    println!(
        "Score: Player {} - Computer {}",
        scores.player_score, scores.ai_score
    );
    println!(
        "Cards: Player {} - Computer {}",
        scores.player_cards, scores.ai_cards
    );
}

fn print_table(game: &Game) {
    let table = game.table();
    if let Some(top) = table.top() {
        println!(
            "\n{} cards on the table, and the top card is {}",
            table.len(),
            format_card(top)
        );
    } else {
        println!("\nNo cards on the table");
    }
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

fn format_hand_numbered(cards: &[Card]) -> String {
    cards
        .iter()
        .enumerate()
        .map(|(index, card)| format!("{}) {}", index + 1, format_card(card)))
        .collect::<Vec<_>>()
        .join(" ")
}

fn format_cards(cards: &[Card]) -> String {
    cards
        .iter()
        .map(format_card)
        .collect::<Vec<_>>()
        .join(" ")
}

fn format_card(card: &Card) -> String {
    let suit = match card.suit {
        Suit::Hearts => "\u{2665}",
        Suit::Diamonds => "\u{2666}",
        Suit::Clubs => "\u{2663}",
        Suit::Spades => "\u{2660}",
    };

    let rank = match card.rank {
        1 => "A".to_string(),
        11 => "J".to_string(),
        12 => "Q".to_string(),
        13 => "K".to_string(),
        _ => card.rank.to_string(),
    };

    format!("{rank}{suit}")
}
