//! Guess evaluation and round engine
//!
//! Pure functions over plain data: round termination, keyboard letter
//! hints and end-of-game scoring. Letter matching itself lives on
//! [`Feedback`](crate::core::Feedback).

mod error;
mod keyboard;
mod scoring;
mod terminator;

pub use error::EngineError;
pub use keyboard::{KEYBOARD_ROWS, LetterStates};
pub use scoring::{GameScore, raw_round_score};
pub use terminator::{RoundProgress, is_round_finished};
