//! Wordle Party - CLI
//!
//! Hot-seat multiplayer word guessing with TUI and text modes, golf-style
//! scoring across rounds, and bot simulations.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use rand::Rng;
use std::io;
use std::path::{Path, PathBuf};
use tracing::info;
use tracing_subscriber::EnvFilter;
use wordle_party::{
    commands::{
        SimulationConfig, evaluate_guess, run_simple, run_simulation, save_game, summarize_file,
    },
    game::Game,
    output::{write_evaluation, write_simulation_result, write_summary},
    wordlists::{
        TARGETS, WordBank,
        loader::{load_from_file, words_from_slice},
    },
};

#[derive(Parser)]
#[command(
    name = "wordle_party",
    about = "Multiplayer Wordle: everyone guesses the same word, lowest average wins",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Dictionary: 'embedded' (default) or path to a file of accepted guesses
    #[arg(short = 'w', long, global = true, default_value = "embedded")]
    wordlist: String,

    /// Log filter when RUST_LOG is unset (e.g. 'info', 'wordle_party=debug')
    #[arg(long, global = true, default_value = "warn")]
    log_level: String,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI game (default)
    Play {
        /// Player names, in turn order
        #[arg(short, long = "player", default_values = ["Player 1", "Player 2"])]
        players: Vec<String>,

        /// Save the game as JSON when you quit
        #[arg(short, long)]
        save: Option<PathBuf>,
    },

    /// Text-mode game over stdin (no TUI)
    Simple {
        /// Player names, in turn order
        #[arg(short, long = "player", default_values = ["Player 1", "Player 2"])]
        players: Vec<String>,

        /// Save the game as JSON when it ends
        #[arg(short, long)]
        save: Option<PathBuf>,
    },

    /// Score a single guess against a target word
    Evaluate {
        /// The guessed word
        guess: String,

        /// The target word
        target: String,
    },

    /// Print final scores of a saved game
    Summary {
        /// JSON file written with --save
        file: PathBuf,
    },

    /// Let bots play many games and report statistics
    Simulate {
        /// Number of games
        #[arg(short = 'n', long, default_value = "100")]
        games: usize,

        /// Bots per game
        #[arg(short, long, default_value = "4")]
        players: usize,

        /// Rounds per game
        #[arg(short, long, default_value = "3")]
        rounds: usize,

        /// Seed for reproducible runs (random if omitted)
        #[arg(long)]
        seed: Option<u64>,
    },
}

/// Initialize logging to stderr
///
/// `RUST_LOG` wins over `--log-level` when set.
fn init_tracing(log_level: &str) {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(log_level))
        .unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

/// Build the word bank for the -w flag
///
/// - "embedded": compiled-in targets and dictionary
/// - "<path>": compiled-in targets plus the accepted guesses listed in the file
fn load_word_bank(wordlist: &str) -> Result<WordBank> {
    match wordlist {
        "embedded" => Ok(WordBank::embedded()),
        path => {
            let extra = load_from_file(path)
                .with_context(|| format!("failed to load word list {path}"))?;
            info!(path, words = extra.len(), "Using custom dictionary");
            Ok(WordBank::new(words_from_slice(TARGETS), extra))
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(&cli.log_level);

    let bank = load_word_bank(&cli.wordlist)?;

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play {
        players: vec!["Player 1".to_string(), "Player 2".to_string()],
        save: None,
    });

    match command {
        Commands::Play { players, save } => run_play_command(&bank, &players, save.as_deref()),
        Commands::Simple { players, save } => {
            run_simple_command(&bank, &players, save.as_deref())
        }
        Commands::Evaluate { guess, target } => run_evaluate_command(&guess, &target),
        Commands::Summary { file } => run_summary_command(&file),
        Commands::Simulate {
            games,
            players,
            rounds,
            seed,
        } => run_simulate_command(&bank, games, players, rounds, seed),
    }
}

fn save_if_requested(game: &Game, save: Option<&Path>) -> Result<()> {
    if let Some(path) = save {
        save_game(path, game)?;
        println!("Game saved to {}", path.display());
    }
    Ok(())
}

fn run_play_command(bank: &WordBank, players: &[String], save: Option<&Path>) -> Result<()> {
    use wordle_party::interactive::{App, run_tui};

    let app = App::new(bank, players, rand::rng().random())?;
    let game = run_tui(app)?;
    save_if_requested(&game, save)
}

fn run_simple_command(bank: &WordBank, players: &[String], save: Option<&Path>) -> Result<()> {
    let stdin = io::stdin();
    let game = run_simple(
        bank,
        players,
        &mut stdin.lock(),
        &mut io::stdout(),
        &mut rand::rng(),
    )?;
    save_if_requested(&game, save)
}

fn run_evaluate_command(guess: &str, target: &str) -> Result<()> {
    let evaluation = evaluate_guess(guess, target)?;
    write_evaluation(&mut io::stdout(), &evaluation)?;
    Ok(())
}

fn run_summary_command(file: &Path) -> Result<()> {
    let (game, score) = summarize_file(file)?;
    write_summary(&mut io::stdout(), &game, &score)?;
    Ok(())
}

fn run_simulate_command(
    bank: &WordBank,
    games: usize,
    players: usize,
    rounds: usize,
    seed: Option<u64>,
) -> Result<()> {
    let seed = seed.unwrap_or_else(|| rand::rng().random());
    println!("Simulating {games} games of {players} bots x {rounds} rounds (seed {seed})...");

    let config = SimulationConfig {
        games,
        players,
        rounds,
        seed,
        show_progress: true,
    };
    let result = run_simulation(bank, &config)?;
    write_simulation_result(&mut io::stdout(), &result)?;
    Ok(())
}
