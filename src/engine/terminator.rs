//! Round termination
//!
//! A player is done with a round once they have guessed the target or used
//! every guess. A round is finished once every player is done.

use super::EngineError;
use crate::core::{MAX_GUESSES, Round, Word};

/// Where one player stands in a round
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RoundProgress {
    /// The target appears among the player's guesses
    pub won: bool,
    /// No further guesses will be accepted
    pub terminal: bool,
}

impl RoundProgress {
    /// Derive progress from a player's guesses so far
    ///
    /// Always recomputed from the guess list, so it can only move from
    /// non-terminal to terminal as guesses are appended.
    ///
    /// # Errors
    /// Returns `EngineError::TooManyGuesses` if more than 6 guesses are given.
    ///
    /// # Examples
    /// ```
    /// use wordle_party::core::Word;
    /// use wordle_party::engine::RoundProgress;
    ///
    /// let target = Word::new("crane").unwrap();
    /// let guesses = [Word::new("slate").unwrap(), Word::new("crane").unwrap()];
    ///
    /// let progress = RoundProgress::of(&guesses, &target).unwrap();
    /// assert!(progress.won && progress.terminal);
    /// ```
    pub fn of(guesses: &[Word], target: &Word) -> Result<Self, EngineError> {
        if guesses.len() > MAX_GUESSES {
            return Err(EngineError::TooManyGuesses {
                count: guesses.len(),
            });
        }

        let won = guesses.contains(target);
        Ok(Self {
            won,
            terminal: won || guesses.len() == MAX_GUESSES,
        })
    }
}

/// Check whether every player in the round is terminal
///
/// A round with no players is trivially finished.
///
/// # Errors
/// Returns `EngineError::TooManyGuesses` if any player holds more than 6 guesses.
pub fn is_round_finished(round: &Round) -> Result<bool, EngineError> {
    for (_, guesses) in round.player_guesses() {
        if !RoundProgress::of(guesses, round.target())?.terminal {
            return Ok(false);
        }
    }
    Ok(true)
}
