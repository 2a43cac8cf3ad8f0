use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum GameError {
    #[error("Cell index {index} is out of range (expected 0-8)")]
    OutOfRange { index: usize },
    #[error("Cell {index} is already occupied")]
    CellOccupied { index: usize },
    #[error("Round is already over")]
    RoundOver,
}
