//! Saved games
//!
//! Games are stored as pretty-printed JSON so a finished game can be
//! summarized again later.

use crate::engine::GameScore;
use crate::game::Game;
use anyhow::{Context, Result};
use std::fs;
use std::path::Path;
use tracing::info;

/// Write a game to `path` as JSON
///
/// # Errors
///
/// Returns an error if serialization or the write fails.
pub fn save_game<P: AsRef<Path>>(path: P, game: &Game) -> Result<()> {
    let path = path.as_ref();
    let json = serde_json::to_string_pretty(game).context("failed to serialize game")?;
    fs::write(path, json).with_context(|| format!("failed to write {}", path.display()))?;
    info!(path = %path.display(), game = game.id(), "Game saved");
    Ok(())
}

/// Read a game previously written by [`save_game`]
///
/// # Errors
///
/// Returns an error if the file cannot be read or is not a valid game.
pub fn load_game<P: AsRef<Path>>(path: P) -> Result<Game> {
    let path = path.as_ref();
    let json =
        fs::read_to_string(path).with_context(|| format!("failed to read {}", path.display()))?;
    serde_json::from_str(&json).with_context(|| format!("{} is not a saved game", path.display()))
}

/// Load a saved game and compute its scores
///
/// # Errors
///
/// Returns an error if the game cannot be loaded or has no rounds.
pub fn summarize_file<P: AsRef<Path>>(path: P) -> Result<(Game, GameScore)> {
    let game = load_game(path)?;
    let score = game.summary()?;
    Ok((game, score))
}
