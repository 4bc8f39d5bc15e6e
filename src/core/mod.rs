//! Core domain types for the game
//!
//! Plain data with no I/O: words, per-letter results, guess feedback,
//! player ids and rounds.

mod feedback;
mod letter;
mod player;
mod round;
mod word;

pub use feedback::Feedback;
pub use letter::LetterResult;
pub use player::PlayerId;
pub use round::Round;
pub use word::{Word, WordError};

/// Letters in every word
pub const WORD_LENGTH: usize = 5;

/// Guesses a player gets per round
pub const MAX_GUESSES: usize = 6;

/// Score charged for a round the player did not solve
pub const MISS_PENALTY: u32 = 8;
