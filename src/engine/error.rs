use crate::core::MAX_GUESSES;
use thiserror::Error;

/// Broken caller preconditions for engine operations
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EngineError {
    #[error(
        "a round allows at most {max} guesses per player, got {count}",
        max = MAX_GUESSES
    )]
    TooManyGuesses { count: usize },
    #[error("scores cannot be computed before the first round")]
    NoRounds,
}
