use thiserror::Error;

#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum PuzzleError {
    #[error("Invalid coordinates")]
    InvalidCoords,
    #[error("Grid shape does not match the puzzle size")]
    InvalidBoardShape,
    #[error("Unknown cell code {0}")]
    InvalidCell(u8),
    #[error("Start or goal placed on a wall")]
    BlockedAnchor,
    #[error("Level set is empty")]
    NoLevels,
    #[error("No level defined at index {0}")]
    UnknownLevel(usize),
}

pub type Result<T> = core::result::Result<T, PuzzleError>;
