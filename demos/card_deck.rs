//! CLI card table example.
//!
//! Deals a few hands from a shuffled deck, then lets you play cards from your
//! hand by typing their names (e.g. `QS`, `10h`). Set `RUST_LOG=debug` to see
//! the library's log output.

#![allow(clippy::missing_docs_in_private_items)]

use std::io::{self, Write};
use std::time::{SystemTime, UNIX_EPOCH};

use card_deck::{Card, DealError, Deck, Pile, Suit};

fn main() {
    env_logger::init();
    println!("Card table example (type 'q' to quit)");

    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs();

    let mut deck = Deck::new();
    deck.shuffle_with_seed(seed);

    let Some(players) = prompt_usize("Number of players (1-10): ") else {
        return;
    };
    let Some(size) = prompt_usize("Cards per hand: ") else {
        return;
    };

    let mut hands = match deck.deal(players, size) {
        Ok(hands) => hands,
        Err(DealError::InsufficientCards {
            requested,
            remaining,
        }) => {
            println!("Cannot deal {requested} cards, only {remaining} in the deck.");
            return;
        }
    };

    if hands.is_empty() {
        println!("Nobody to deal to.");
        return;
    }

    for (i, hand) in hands.iter().enumerate() {
        println!("Player {}: {}", i + 1, format_pile(hand));
    }
    println!("Deck: {} cards remaining", deck.len());

    let mut played = Pile::new();
    loop {
        println!("\nYour hand: {}", format_pile(&hands[0]));
        if hands[0].is_empty() {
            println!("Your hand is empty.");
            break;
        }

        let input = prompt_line("Play a card: ");
        if input == "q" || input == "quit" {
            break;
        }

        let Some(card) = Card::parse(&input) else {
            println!("'{input}' is not a card name. Try something like AS or 10h.");
            continue;
        };

        if hands[0].remove(&card).is_err() {
            println!("You do not hold the {card}.");
            continue;
        }

        println!("You played the {card}.");
        played.insert(card);

        match deck.draw() {
            Ok(drawn) => {
                println!("You draw {}.", format_card(&drawn));
                hands[0].insert(drawn);
            }
            Err(_) => println!("The deck is empty."),
        }
    }

    println!("\nPlayed: {}", format_pile(&played));

    let mut table = deck.into_pile();
    for hand in &mut hands {
        table.append(hand);
    }
    table.append(&mut played);
    table.sort();
    println!("All cards back together ({}): {table:#}", table.len());
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

fn prompt_usize(prompt: &str) -> Option<usize> {
    loop {
        let input = prompt_line(prompt);
        if input == "q" || input == "quit" {
            return None;
        }
        match input.parse::<usize>() {
            Ok(value) => return Some(value),
            Err(_) => println!("Please enter a number."),
        }
    }
}

fn colorize(text: &str, code: &str) -> String {
    format!("\u{1b}[{code}m{text}\u{1b}[0m")
}

fn format_pile(pile: &Pile) -> String {
    if pile.is_empty() {
        return "(empty)".to_string();
    }
    pile.iter().map(format_card).collect::<Vec<_>>().join(" ")
}

fn format_card(card: &Card) -> String {
    let color_code = match card.suit {
        Suit::Hearts | Suit::Diamonds => "31",
        Suit::Clubs => "32",
        Suit::Spades => "34",
    };
    colorize(&format!("{card:#}"), color_code)
}
