use crate::core::WordError;
use thiserror::Error;

/// Rejected guesses; the board is left unchanged in every case
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GameError {
    #[error("invalid guess: {0}")]
    InvalidGuess(#[from] WordError),
    #[error("game is already finished")]
    GameAlreadyFinished,
}
