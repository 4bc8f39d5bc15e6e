//! Multiplayer game sessions
//!
//! A [`Game`] moves from lobby to in-progress to finished. Players join a
//! lobby with a short code, pick names, and then play rounds together until
//! someone ends the game once a round is done.

mod code;
mod error;
mod registry;
mod session;

pub use code::{CODE_LENGTH, generate_code, generate_game_id, generate_unique_code};
pub use error::GameError;
pub use registry::{GameRegistry, open_local_game};
pub use session::{Game, GameStatus, GuessOutcome, LeaveOutcome, Player};
