use super::GameStatus;
use crate::core::{PlayerId, WordError};
use crate::engine::EngineError;
use thiserror::Error;

/// Rejected game operations
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GameError {
    #[error("game is {actual}, expected {expected}")]
    WrongStatus {
        expected: GameStatus,
        actual: GameStatus,
    },
    #[error("player {0} is not in this game")]
    UnknownPlayer(PlayerId),
    #[error("player {0} already joined this game")]
    AlreadyJoined(PlayerId),
    #[error("every player needs a name before the game can start")]
    MissingNames,
    #[error("name cannot be empty")]
    EmptyName,
    #[error("there is no round in progress")]
    NoActiveRound,
    #[error("the current round is still being played")]
    RoundNotFinished,
    #[error("player {0} has already finished this round")]
    AlreadyFinished(PlayerId),
    #[error("\"{}\" is not in word list", .0.to_uppercase())]
    NotInWordList(String),
    #[error("every game code is {len} letters long", len = super::CODE_LENGTH)]
    CodeTooShort,
    #[error("couldn't find a game matching {0}")]
    GameNotFound(String),
    #[error(transparent)]
    InvalidWord(#[from] WordError),
    #[error(transparent)]
    Engine(#[from] EngineError),
}
