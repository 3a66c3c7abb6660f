//! Wheel Advisor - CLI
//!
//! Strategy advisor for the letter-guessing wheel game: wheel probability
//! analysis, letter heuristics, and expected-value modeling behind one
//! deterministic recommendation.

use anyhow::{Context, Result, anyhow};
use clap::{Args, Parser, Subcommand};
use wheel_advisor::{
    commands::{
        SimulationConfig, advise_snapshot, analyze_snapshot, recommendation_to_json, run_play,
        run_simulation, run_wheel,
    },
    core::{GameSnapshot, WheelConfiguration},
    engine::Tunables,
    game::WheelRng,
    output::{print_analysis, print_recommendation, print_simulation},
    puzzles::{PUZZLES, PuzzleEntry, loader},
};

#[derive(Parser)]
#[command(
    name = "wheel_advisor",
    about = "Wheel-game strategy advisor using probability and expected-value analysis",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Path to a custom wheel file (BANKRUPT / LOSE_TURN / amount per line)
    #[arg(short = 'W', long, global = true)]
    wheel: Option<String>,

    /// Path to a PHRASE,CATEGORY puzzle file (default: embedded list)
    #[arg(short = 'p', long, global = true)]
    puzzles: Option<String>,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive game with the advisor at your side (default)
    Play {
        /// Number of AI opponents
        #[arg(short, long, default_value = "2")]
        opponents: usize,

        /// Seed for reproducible games (default: random)
        #[arg(short, long)]
        seed: Option<u64>,
    },

    /// One-shot recommendation for a game state
    Advise {
        #[command(flatten)]
        state: StateArgs,

        /// Emit the recommendation as JSON instead of text
        #[arg(short, long)]
        json: bool,
    },

    /// Full intermediate breakdown for a game state
    Analyze {
        #[command(flatten)]
        state: StateArgs,
    },

    /// Show the wheel probability model
    Wheel,

    /// Play many AI-vs-AI games and aggregate the outcomes
    Simulate {
        /// Number of games to play
        #[arg(short = 'n', long, default_value = "100")]
        games: usize,

        /// Seats per game
        #[arg(short = 'o', long, default_value = "3")]
        seats: usize,

        /// Rounds per game
        #[arg(short, long, default_value = "1")]
        rounds: u32,

        /// Base seed for the sweep
        #[arg(short, long, default_value = "0")]
        seed: u64,
    },
}

/// Game-state input shared by `advise` and `analyze`
#[derive(Args)]
struct StateArgs {
    /// Revealed board, hidden letters as '_' (e.g. "T_E _U_C_")
    #[arg(short, long)]
    mask: Option<String>,

    /// Letters already guessed, e.g. "TEC"
    #[arg(short, long, default_value = "")]
    used: String,

    /// Your round score
    #[arg(short, long, default_value = "0")]
    score: i64,

    /// Opponent effective scores, comma-separated (e.g. "600,400")
    #[arg(short, long, default_value = "")]
    opponents: String,

    /// Rounds left in the game, counting this one
    #[arg(short, long, default_value = "1")]
    rounds: u32,

    /// Puzzle category
    #[arg(short, long, default_value = "")]
    category: String,

    /// Read the full snapshot from a JSON file instead ('-' for stdin)
    #[arg(short, long)]
    input: Option<String>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let wheel = load_wheel(cli.wheel.as_deref())?;
    let puzzles = load_puzzles(cli.puzzles.as_deref())?;

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play {
        opponents: 2,
        seed: None,
    });

    match command {
        Commands::Play { opponents, seed } => run_play_command(&puzzles, &wheel, opponents, seed),
        Commands::Advise { state, json } => run_advise_command(&state, &wheel, json),
        Commands::Analyze { state } => run_analyze_command(&state, &wheel),
        Commands::Wheel => {
            run_wheel(&wheel)?;
            Ok(())
        }
        Commands::Simulate {
            games,
            seats,
            rounds,
            seed,
        } => {
            let config = SimulationConfig {
                games,
                seats,
                rounds,
                seed,
            };
            let stats = run_simulation(config, &wheel, &puzzles, &Tunables::default());
            print_simulation(&stats);
            Ok(())
        }
    }
}

/// Load the wheel from a file, or fall back to the standard configuration
fn load_wheel(path: Option<&str>) -> Result<WheelConfiguration> {
    match path {
        Some(path) => {
            let text = std::fs::read_to_string(path)
                .with_context(|| format!("reading wheel file {path}"))?;
            WheelConfiguration::parse(&text).with_context(|| format!("parsing wheel file {path}"))
        }
        None => Ok(WheelConfiguration::standard()),
    }
}

/// Load puzzles from a file, or fall back to the embedded list
fn load_puzzles(path: Option<&str>) -> Result<Vec<PuzzleEntry>> {
    match path {
        Some(path) => {
            let entries = loader::load_from_file(path)
                .with_context(|| format!("reading puzzle file {path}"))?;
            if entries.is_empty() {
                return Err(anyhow!("no valid puzzles in {path}"));
            }
            Ok(entries)
        }
        None => Ok(loader::entries_from_slice(PUZZLES)),
    }
}

/// Build a snapshot from CLI flags or a JSON file
fn build_snapshot(state: &StateArgs) -> Result<GameSnapshot> {
    if let Some(input) = &state.input {
        let text = if input == "-" {
            std::io::read_to_string(std::io::stdin())?
        } else {
            std::fs::read_to_string(input)
                .with_context(|| format!("reading snapshot file {input}"))?
        };
        return serde_json::from_str(&text).context("parsing snapshot JSON");
    }

    let mask = state
        .mask
        .as_ref()
        .ok_or_else(|| anyhow!("either --mask or --input is required"))?;

    let opponent_scores = state
        .opponents
        .split(',')
        .filter(|part| !part.trim().is_empty())
        .map(|part| {
            part.trim()
                .parse::<i64>()
                .with_context(|| format!("invalid opponent score '{part}'"))
        })
        .collect::<Result<Vec<i64>>>()?;

    let used_letters = state
        .used
        .chars()
        .filter(|c| c.is_ascii_alphabetic())
        .map(|c| c.to_ascii_uppercase())
        .collect();

    Ok(GameSnapshot {
        phrase: None,
        revealed_mask: mask.to_ascii_uppercase(),
        used_letters,
        round_score: state.score,
        opponent_scores,
        rounds_remaining: state.rounds,
        category: state.category.to_ascii_uppercase(),
    })
}

fn run_advise_command(state: &StateArgs, wheel: &WheelConfiguration, json: bool) -> Result<()> {
    let snapshot = build_snapshot(state)?;
    let recommendation = advise_snapshot(&snapshot, wheel)?;

    if json {
        println!("{}", recommendation_to_json(&recommendation)?);
    } else {
        print_recommendation(&recommendation);
    }
    Ok(())
}

fn run_analyze_command(state: &StateArgs, wheel: &WheelConfiguration) -> Result<()> {
    let snapshot = build_snapshot(state)?;
    let report = analyze_snapshot(&snapshot, wheel)?;
    print_analysis(&report);
    Ok(())
}

fn run_play_command(
    puzzles: &[PuzzleEntry],
    wheel: &WheelConfiguration,
    opponents: usize,
    seed: Option<u64>,
) -> Result<()> {
    let result = match seed {
        Some(seed) => run_play(puzzles, wheel, WheelRng::from_seed(seed), opponents),
        None => run_play(puzzles, wheel, WheelRng::new(rand::rng()), opponents),
    };
    result.map_err(|e| anyhow!(e))
}
