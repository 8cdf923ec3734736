use alloc::string::String;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PuzzleError {
    #[error("Invalid coordinates")]
    InvalidCoords,
    #[error("Cell is blocked and does not accept input")]
    BlockedCell,
    #[error("Unknown word id {0}")]
    UnknownWord(u16),
    #[error("Unknown card index {0}")]
    UnknownCard(usize),
    #[error("Unknown vocabulary category `{0}`")]
    UnknownCategory(String),
    #[error("Invalid vocabulary catalog: {0}")]
    InvalidCatalog(String),
    #[error("Unknown difficulty `{0}`, expected easy, medium or hard")]
    UnknownDifficulty(String),
}

pub type Result<T> = core::result::Result<T, PuzzleError>;
