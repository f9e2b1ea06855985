//! CLI climbing game example.

#![allow(clippy::missing_docs_in_private_items)]

use std::io::{self, Write};
use std::time::{SystemTime, UNIX_EPOCH};

use climbrs::{
    Card, DisplaySink, Game, GameOptions, GameSnapshot, InputProvider, MAX_DISCARD, MoveSource,
    PlayerAction, RunStatus, Suit, TurnError, TurnOutcome,
};

struct Console;

impl InputProvider for Console {
    fn next_action(&mut self, snapshot: &GameSnapshot) -> PlayerAction {
        let hand_len = snapshot
            .players
            .iter()
            .find(|player| player.source == MoveSource::HumanInput)
            .map_or(0, |player| player.hand.len());

        loop {
            println!("Actions: [1]play [2]pass [3]discard and draw [4]restart [5]exit");
            match prompt_line("Action: ").as_str() {
                "1" | "play" => {
                    let input = prompt_line(&format!(
                        "Card indices (0-{}) separated by spaces, or 'p' to pass: ",
                        hand_len.saturating_sub(1)
                    ));
                    if input == "p" {
                        return PlayerAction::Pass;
                    }
                    match parse_indices(&input) {
                        Some(indices) => return PlayerAction::PlayCards(indices),
                        None => println!("Please enter card indices."),
                    }
                }
                "2" | "pass" => return PlayerAction::Pass,
                "3" | "discard" => {
                    let Some(count) = prompt_line(&format!("Cards to discard (0-{MAX_DISCARD}): "))
                        .parse::<usize>()
                        .ok()
                    else {
                        println!("Please enter a number.");
                        continue;
                    };
                    let indices = if count == 0 {
                        Vec::new()
                    } else {
                        match parse_indices(&prompt_line("Card indices separated by spaces: ")) {
                            Some(indices) => indices,
                            None => {
                                println!("Please enter card indices.");
                                continue;
                            }
                        }
                    };
                    return PlayerAction::DiscardAndDraw { count, indices };
                }
                "4" | "restart" => return PlayerAction::Restart,
                "5" | "q" | "exit" => return PlayerAction::Exit,
                _ => println!("Unknown action."),
            }
        }
    }
}

impl DisplaySink for Console {
    fn show_state(&mut self, snapshot: &GameSnapshot) {
        println!();
        if let Some(name) = &snapshot.current_player_name {
            println!("Current player: {name}");
        }
        println!("Deck: {} cards remaining", snapshot.cards_remaining);

        println!("\nPlayed so far:");
        for player in &snapshot.players {
            println!("  {}: {}", player.name, format_cards(&player.discard_pile));
        }

        for player in &snapshot.players {
            println!("\n{}'s hand:", player.name);
            for (index, card) in player.hand.iter().enumerate() {
                println!("  [{index}] {}", format_card(*card));
            }
        }

        if let Some(owner) = snapshot.table_owner {
            println!(
                "\nOn the table from {}: {}",
                snapshot.players[owner].name,
                format_cards(&snapshot.table_play)
            );
        } else if snapshot.free_play_allowed {
            println!("\nTable is clear. Any cards may be led.");
        }
    }

    fn show_outcome(&mut self, outcome: &TurnOutcome) {
        match outcome {
            TurnOutcome::Played { player, cards } => {
                println!("Seat {player} played: {}", format_cards(cards));
            }
            TurnOutcome::Passed { player } => println!("Seat {player} passed."),
            TurnOutcome::RoundReset { player, leader } => {
                println!("Seat {player} passed. Seat {leader} may play any cards.");
            }
            TurnOutcome::DiscardedAndDrew {
                player,
                discarded,
                drawn,
            } => println!(
                "Seat {player} discarded {} and drew {} card(s).",
                format_cards(discarded),
                drawn.len()
            ),
            TurnOutcome::Rejected { cards, .. } => {
                println!("{} does not beat the table. Try again.", format_cards(cards));
            }
            TurnOutcome::GameOver { winner, cards } => {
                println!("Seat {winner} played {} and is out of cards.", format_cards(cards));
            }
            TurnOutcome::RestartRequested => println!("Dealing a new game."),
            TurnOutcome::Exit => {}
        }
    }

    fn show_error(&mut self, error: &TurnError) {
        println!("Invalid input: {error}");
    }
}

fn main() {
    println!("Climbing card game CLI example (type '5' to quit)");

    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs();
    let mut game = Game::new(GameOptions::default(), seed);
    let mut console = Console;
    let mut sink = Console;

    match game.run(&mut console, &mut sink) {
        Ok(RunStatus::Finished(result)) => {
            println!(
                "{} wins after {} turns! The other player held {} card(s).",
                result.winner_name, result.turns, result.loser_cards_left
            );
        }
        Ok(RunStatus::Exited) => println!("Goodbye."),
        Err(err) => println!("Game error: {err}"),
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

fn parse_indices(input: &str) -> Option<Vec<usize>> {
    input
        .split_whitespace()
        .map(|part| part.parse::<usize>().ok())
        .collect()
}

fn format_cards(cards: &[Card]) -> String {
    if cards.is_empty() {
        return "None".to_string();
    }
    cards
        .iter()
        .map(|card| format_card(*card))
        .collect::<Vec<_>>()
        .join(" ")
}

fn format_card(card: Card) -> String {
    let color_code = match card.suit {
        Suit::Hearts | Suit::Diamonds => "31",
        Suit::Clubs | Suit::Spades => "34",
    };
    colorize(&card.to_string(), color_code)
}

fn colorize(text: &str, code: &str) -> String {
    format!("\u{1b}[{code}m{text}\u{1b}[0m")
}
