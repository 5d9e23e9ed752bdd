use thiserror::Error;

use super::types::Mark;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum IllegalMoveError {
    #[error("cell {position} is already occupied by {mark}")]
    Occupied { position: usize, mark: Mark },

    #[error("cell {position} is outside the board (expected 0..=8)")]
    OutOfRange { position: usize },

    #[error("an empty mark cannot be placed")]
    NotAMark,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("illegal move: {0}")]
    IllegalMove(#[from] IllegalMoveError),

    #[error("game is already over")]
    GameOver,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseBoardError {
    #[error("expected {expected} cells, got {got}")]
    InvalidLength { expected: usize, got: usize },

    #[error("invalid character '{character}' at cell {position}")]
    InvalidCell { character: char, position: usize },
}
