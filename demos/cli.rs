//! Hot-seat Big Two at the terminal.
//!
//! Run with `RUST_LOG=bigtwo=debug` to see the engine's play log.

use std::io::{self, Write};
use std::time::{SystemTime, UNIX_EPOCH};

use bigtwo::{Card, Game, GameOptions, GameState, PlayOutcome, Seat, Suit};

fn main() {
    env_logger::init();

    println!("Big Two CLI example (type 'q' to quit)");

    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs();
    let game = Game::new(GameOptions::default(), seed);

    loop {
        let opener = match game.deal() {
            Ok(opener) => opener,
            Err(err) => {
                println!("Deal error: {err}");
                return;
            }
        };
        println!("\n{} holds the three of diamonds and opens.", name(&game, opener));

        while let Some(seat) = game.current_seat() {
            print_table(&game, seat);

            let input = prompt_line("Cards to play (indices, blank to pass): ");
            if input == "q" || input == "quit" {
                return;
            }
            let Some(indices) = parse_indices(&input) else {
                println!("Please enter card indices separated by spaces.");
                continue;
            };

            match game.submit_play(seat, &indices) {
                Ok(PlayOutcome::Played { hand, .. }) => {
                    println!("{} plays {}", name(&game, seat), format_hand(hand.cards().iter()));
                }
                Ok(PlayOutcome::Passed { .. }) => println!("{} passes.", name(&game, seat)),
                Ok(PlayOutcome::RoundEnded(result)) => {
                    println!("\nGame ends");
                    for (other, remaining) in result.remaining.iter().enumerate() {
                        if other == result.winner {
                            println!("{} wins the game.", name(&game, other));
                        } else {
                            println!("{} has {remaining} cards in hand.", name(&game, other));
                        }
                    }
                }
                Err(err) => println!("Not a legal move: {err}"),
            }
        }

        if game.state() != GameState::RoundEnded {
            return;
        }
        if !matches!(prompt_line("Play again? (y/n): ").as_str(), "y" | "yes") {
            println!("Goodbye.");
            return;
        }
    }
}

fn name(game: &Game, seat: Seat) -> &str {
    game.player_name(seat).unwrap_or("?")
}

fn prompt_line(prompt: &str) -> String {
    print!("{prompt}");
    let _ = io::stdout().flush();

    let mut input = String::new();
    if io::stdin().read_line(&mut input).is_err() {
        return String::from("q");
    }
    input.trim().to_lowercase()
}

fn parse_indices(input: &str) -> Option<Vec<usize>> {
    input
        .split(|c: char| c.is_whitespace() || c == ',')
        .filter(|part| !part.is_empty())
        .map(|part| part.parse::<usize>().ok())
        .collect()
}

fn print_table(game: &Game, seat: Seat) {
    println!();
    match game.table_top() {
        Some(top) => println!(
            "Table: {{{}}} {} by {}",
            top.category(),
            format_hand(top.cards().iter()),
            name(game, top.owner())
        ),
        None => println!("Table: (empty)"),
    }

    for other in 0..bigtwo::PLAYER_COUNT {
        if other != seat {
            let count = game.card_count(other).unwrap_or(0);
            println!("  {}: {count} cards", name(game, other));
        }
    }

    let lead = if game.is_leading() { " (you lead)" } else { "" };
    println!("\n{}'s turn{lead}:", name(game, seat));
    if let Some(cards) = game.player_cards(seat) {
        for (index, card) in cards.iter().enumerate() {
            print!("{index}:{} ", format_card(card));
        }
        println!();
    }
}

fn format_hand<'a>(cards: impl Iterator<Item = &'a Card>) -> String {
    cards.map(format_card).collect::<Vec<_>>().join(" ")
}

fn colorize(text: &str, code: &str) -> String {
    format!("\u{1b}[{code}m{text}\u{1b}[0m")
}

fn format_card(card: &Card) -> String {
    let color_code = match card.suit {
        Suit::Hearts | Suit::Diamonds => "31",
        Suit::Clubs => "32",
        Suit::Spades => "34",
    };
    colorize(&card.to_string(), color_code)
}
