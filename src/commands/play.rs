//! Interactive play mode
//!
//! A console game on a random embedded puzzle: the human plays seat 0
//! against engine-driven opponents, with the advisor's recommendation
//! shown before every human turn.

use crate::core::{PlayerMoneyState, PuzzleState, Segment, WheelConfiguration};
use crate::engine::{Tunables, recommend};
use crate::game::{TurnController, TurnEvent, WheelRng, take_turn};
use crate::output::print_recommendation;
use crate::puzzles::PuzzleEntry;
use colored::Colorize;
use rand::Rng;
use std::io::{self, Write};

/// Run the interactive game loop
///
/// # Errors
///
/// Returns an error if there's an I/O error reading user input or if the
/// advisor rejects a snapshot (which would be a bug in the controller).
#[allow(clippy::too_many_lines)] // Interactive game loop requires detailed handling
pub fn run_play<R: Rng>(
    puzzles: &[PuzzleEntry],
    wheel: &WheelConfiguration,
    mut rng: WheelRng<R>,
    opponents: usize,
) -> Result<(), String> {
    println!("\n╔══════════════════════════════════════════════════════════════╗");
    println!("║              Wheel Advisor - Interactive Mode                ║");
    println!("╚══════════════════════════════════════════════════════════════╝\n");

    println!("You are seat 0. Before each of your turns I'll show the");
    println!("advisor's recommendation; follow it or ignore it.\n");
    println!("Actions: 's' spin, 'v' buy a vowel, 'o' solve, 'q' quit\n");

    let tunables = Tunables::default();

    if puzzles.is_empty() {
        return Err("No puzzles available".to_string());
    }
    let entry = &puzzles[rng.pick(puzzles.len())];
    let puzzle = PuzzleState::new(entry.phrase.clone(), entry.category.clone())
        .map_err(|e| e.to_string())?;

    let players = vec![PlayerMoneyState::new(); opponents + 1];
    let mut game = TurnController::new(puzzle, players, 1, tunables.vowel_cost);

    while !game.is_round_over() {
        if game.current_player() == 0 {
            print_board(&game);

            let snapshot = game.snapshot();
            let recommendation =
                recommend(&snapshot, wheel, &tunables).map_err(|e| e.to_string())?;
            print_recommendation(&recommendation);

            let event = loop {
                let input = prompt("Your action (s/v/o/q)")?.to_lowercase();
                match input.as_str() {
                    "q" | "quit" | "exit" => {
                        println!("\n👋 Thanks for playing!\n");
                        return Ok(());
                    }
                    "s" | "spin" => {
                        let outcome = rng.spin(wheel);
                        println!("\n🎡 The wheel lands on {}", outcome.to_string().bold());
                        if matches!(outcome, Segment::Money(_)) {
                            let letter = prompt_letter("Consonant to guess", false)?;
                            break game.apply_spin(outcome, letter);
                        }
                        break game.apply_spin(outcome, '-');
                    }
                    "v" | "vowel" => {
                        let letter = prompt_letter("Vowel to buy", true)?;
                        break game.buy_vowel(letter);
                    }
                    "o" | "solve" => {
                        let attempt = prompt("Your solution")?;
                        break game.attempt_solve(&attempt);
                    }
                    _ => println!("❌ Unknown action; use s, v, o, or q"),
                }
            };

            print_event(0, &event);
        } else {
            let seat = game.current_player();
            let turn =
                take_turn(&mut game, wheel, &mut rng, &tunables).map_err(|e| e.to_string())?;
            print_event(seat, &turn.event);
        }
    }

    print_final_standings(&game);
    Ok(())
}

fn print_board(game: &TurnController) {
    println!("\n{}", "─".repeat(60).cyan());
    println!(
        "Category: {}",
        game.puzzle().category().bright_yellow().bold()
    );
    println!(
        "Board:    {}",
        game.puzzle().mask().bright_white().bold()
    );

    let mut used: Vec<char> = game.puzzle().used_letters().iter().copied().collect();
    used.sort_unstable();
    let used: String = used.into_iter().collect();
    println!("Used:     {}", if used.is_empty() { "-".to_string() } else { used });

    for (seat, player) in game.players().iter().enumerate() {
        let name = if seat == 0 {
            "You   ".to_string()
        } else {
            format!("Seat {seat}")
        };
        println!(
            "{name}: round ${} | total ${}",
            player.round_score(),
            player.total_score()
        );
    }
    println!("{}", "─".repeat(60).cyan());
}

fn print_event(seat: usize, event: &TurnEvent) {
    let who = if seat == 0 {
        "You".to_string()
    } else {
        format!("Seat {seat}")
    };

    match event {
        TurnEvent::Bankrupt => println!("💥 {who}: BANKRUPT - round score gone"),
        TurnEvent::LoseTurn => println!("⏭️  {who}: lose a turn"),
        TurnEvent::LetterHit {
            letter,
            count,
            earned,
        } => println!(
            "{} {who}: {letter} appears {count}x, earning ${earned}",
            "✅".green()
        ),
        TurnEvent::LetterMiss { letter } => println!("❌ {who}: no {letter} in the puzzle"),
        TurnEvent::AlreadyUsed { letter } => {
            println!("❌ {who}: {letter} was already guessed");
        }
        TurnEvent::VowelHit { letter, count } => {
            println!("{} {who}: bought {letter}, it appears {count}x", "✅".green());
        }
        TurnEvent::VowelMiss { letter } => println!("❌ {who}: bought {letter}, not there"),
        TurnEvent::CannotAfford => println!("❌ {who}: cannot afford a vowel"),
        TurnEvent::Solved { banked } => {
            println!(
                "\n{}",
                format!("🎉 {who} solved the puzzle and banked ${banked}!")
                    .green()
                    .bold()
            );
        }
        TurnEvent::WrongSolve => println!("❌ {who}: wrong solution"),
    }
}

fn print_final_standings(game: &TurnController) {
    println!("\n{}", "═".repeat(60).bright_cyan());
    println!(
        "Solution: {}",
        game.puzzle().phrase().bright_yellow().bold()
    );
    println!("\nFinal standings:");

    for (seat, player) in game.players().iter().enumerate() {
        let name = if seat == 0 {
            "You   ".to_string()
        } else {
            format!("Seat {seat}")
        };
        println!("  {name}: ${}", player.effective_score());
    }
    println!("{}\n", "═".repeat(60).bright_cyan());
}

/// Get user input with a prompt
fn prompt(text: &str) -> Result<String, String> {
    print!("{text}: ");
    io::stdout().flush().map_err(|e| e.to_string())?;

    let mut input = String::new();
    io::stdin()
        .read_line(&mut input)
        .map_err(|e| e.to_string())?;

    Ok(input.trim().to_string())
}

/// Prompt until a single letter of the right kind is entered
fn prompt_letter(text: &str, want_vowel: bool) -> Result<char, String> {
    use crate::engine::is_vowel;

    loop {
        let input = prompt(text)?;
        let mut chars = input.chars();
        if let (Some(letter), None) = (chars.next(), chars.next()) {
            if letter.is_ascii_alphabetic() {
                let letter = letter.to_ascii_uppercase();
                if is_vowel(letter) == want_vowel {
                    return Ok(letter);
                }
            }
        }
        if want_vowel {
            println!("❌ Enter a single vowel (A, E, I, O, U)");
        } else {
            println!("❌ Enter a single consonant");
        }
    }
}
