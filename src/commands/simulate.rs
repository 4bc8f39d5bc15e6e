//! Simulate command
//!
//! Bots play many complete games in parallel. Each bot guesses a random
//! target word consistent with all the feedback it has seen so far.

use crate::core::{Feedback, MAX_GUESSES, MISS_PENALTY, PlayerId, Word};
use crate::engine::raw_round_score;
use crate::game::{Game, Player, generate_code, generate_game_id};
use crate::wordlists::WordBank;
use anyhow::{Context, Result, ensure};
use indicatif::{ProgressBar, ProgressStyle};
use rand::SeedableRng;
use rand::prelude::IndexedRandom;
use rand::rngs::StdRng;
use rayon::prelude::*;
use std::time::{Duration, Instant};
use tracing::debug;

/// Simulation parameters
#[derive(Debug, Clone, Copy)]
pub struct SimulationConfig {
    pub games: usize,
    pub players: usize,
    pub rounds: usize,
    /// Game `i` is seeded with `seed + i`
    pub seed: u64,
    pub show_progress: bool,
}

/// Aggregate statistics over every simulated game
#[derive(Debug, Clone)]
pub struct SimulationResult {
    pub games: usize,
    pub rounds: usize,
    /// Player-rounds solved in 1..=6 guesses
    pub distribution: [usize; MAX_GUESSES],
    /// Player-rounds not solved
    pub missed: usize,
    /// Sum over games of the winning average
    pub winning_total: f64,
    /// Games with more than one winner
    pub tied_games: usize,
    pub duration: Duration,
}

impl SimulationResult {
    /// Number of player-rounds played
    #[must_use]
    pub fn attempts(&self) -> usize {
        self.solved() + self.missed
    }

    #[must_use]
    pub fn solved(&self) -> usize {
        self.distribution.iter().sum()
    }

    /// Fraction of player-rounds solved
    #[must_use]
    pub fn solve_rate(&self) -> f64 {
        match self.attempts() {
            0 => 0.0,
            n => self.solved() as f64 / n as f64,
        }
    }

    /// Mean winning average per game
    #[must_use]
    pub fn average_winning_score(&self) -> f64 {
        match self.games {
            0 => 0.0,
            n => self.winning_total / n as f64,
        }
    }
}

/// Outcome of one simulated game
#[derive(Debug, Clone, Default)]
struct GameReport {
    distribution: [usize; MAX_GUESSES],
    missed: usize,
    winning_average: f64,
    tied: bool,
}

/// Pick a target consistent with every (guess, feedback) pair seen so far
fn bot_guess<'a, R: rand::Rng + ?Sized>(
    targets: &'a [Word],
    history: &[(Word, Feedback)],
    rng: &mut R,
) -> Option<&'a Word> {
    let candidates: Vec<&Word> = targets
        .iter()
        .filter(|candidate| {
            history
                .iter()
                .all(|(guess, feedback)| Feedback::evaluate(Some(guess), candidate) == *feedback)
        })
        .collect();
    candidates.choose(rng).copied()
}

fn simulate_game(bank: &WordBank, config: &SimulationConfig, seed: u64) -> Result<GameReport> {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut game = Game::new(
        generate_game_id(&mut rng),
        generate_code(&mut rng),
        Player::named("bot1", "Bot 1"),
    );
    for i in 2..=config.players {
        game.join(Player::named(
            PlayerId::new(format!("bot{i}")),
            &format!("Bot {i}"),
        ))?;
    }

    let ids = game.player_ids();
    let mut report = GameReport::default();

    for round in 0..config.rounds {
        let target = bank
            .random_target(&mut rng)
            .context("word list has no targets")?;
        if round == 0 {
            game.start(target)?;
        } else {
            game.next_round(target)?;
        }

        let mut histories: Vec<Vec<(Word, Feedback)>> = vec![Vec::new(); ids.len()];
        while !game.is_round_finished()? {
            for (id, history) in ids.iter().zip(&mut histories) {
                if game.progress_of(id)?.terminal {
                    continue;
                }
                let guess = bot_guess(bank.targets(), history, &mut rng)
                    .context("no target matches the feedback")?
                    .clone();
                let outcome = game.submit_guess(id, guess.text(), bank)?;
                history.push((guess, outcome.feedback));
            }
        }

        let current = game.current_round().context("round vanished")?;
        for (_, guesses) in current.player_guesses() {
            match raw_round_score(guesses, current.target()) {
                MISS_PENALTY => report.missed += 1,
                n => report.distribution[n as usize - 1] += 1,
            }
        }
    }

    game.finish()?;
    let score = game.summary()?;
    report.tied = score.winners.len() > 1;
    report.winning_average = score
        .winners
        .first()
        .and_then(|w| score.average_of(w))
        .unwrap_or_default();

    debug!(seed, winners = score.winners.len(), "Simulated game");
    Ok(report)
}

/// Play `config.games` bot games in parallel and aggregate the results
///
/// # Errors
///
/// Returns an error if the configuration is empty or the word list has no
/// targets.
pub fn run_simulation(bank: &WordBank, config: &SimulationConfig) -> Result<SimulationResult> {
    ensure!(config.players > 0, "at least one player is required");
    ensure!(config.rounds > 0, "at least one round is required");
    ensure!(!bank.targets().is_empty(), "word list has no targets");

    let pb = if config.show_progress {
        let pb = ProgressBar::new(config.games as u64);
        let style = ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}")
            .context("invalid progress template")?
            .progress_chars("█▓▒░");
        pb.set_style(style);
        pb
    } else {
        ProgressBar::hidden()
    };

    let start = Instant::now();
    let reports: Vec<GameReport> = (0..config.games)
        .into_par_iter()
        .map(|i| {
            let report = simulate_game(bank, config, config.seed.wrapping_add(i as u64));
            pb.inc(1);
            report
        })
        .collect::<Result<_>>()?;
    pb.finish_with_message("Complete!");

    let mut result = SimulationResult {
        games: reports.len(),
        rounds: reports.len() * config.rounds,
        distribution: [0; MAX_GUESSES],
        missed: 0,
        winning_total: 0.0,
        tied_games: 0,
        duration: start.elapsed(),
    };
    for report in &reports {
        for (total, count) in result.distribution.iter_mut().zip(report.distribution) {
            *total += count;
        }
        result.missed += report.missed;
        result.winning_total += report.winning_average;
        result.tied_games += usize::from(report.tied);
    }

    Ok(result)
}
