use crate::coord::Coord;

/// Errors raised by board construction and the turn controller.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GameError {
    #[error("invalid board size {0}: must be an even number of at least 4")]
    InvalidBoardSize(usize),

    #[error("coordinate {coord:?} is outside a {size}x{size} board")]
    OutOfBounds { coord: Coord, size: usize },

    #[error("the automated side can only move while White is to move")]
    NotAutomatedTurn,

    #[error("invalid board string: {0}")]
    InvalidBoardString(String),
}
