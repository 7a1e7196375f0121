use crate::boards::tic_tac_toe::Position;
use thiserror::Error;

/// Errors produced by board construction and move application.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum Error {
    /// The target cell of a move already holds a mark.
    #[error("illegal move: cell {0} is already occupied")]
    IllegalMove(Position),

    #[error("position ({row}, {col}) is outside the 3x3 grid")]
    PositionOutOfBounds { row: usize, col: usize },

    #[error("board must have 9 cells, got {0}")]
    InvalidBoardLength(usize),

    #[error("invalid character '{character}' at cell {index}")]
    InvalidCellCharacter { character: char, index: usize },

    #[error("invalid piece counts: X={x}, O={o} (X must equal O or lead by one)")]
    InvalidPieceCounts { x: usize, o: usize },
}

pub type Result<T> = std::result::Result<T, Error>;
