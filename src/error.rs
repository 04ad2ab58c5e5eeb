use thiserror::Error;

/// Reasons a cell sequence is not a valid board.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BoardError {
    #[error("board must have 7 cells, got {0}")]
    WrongLength(usize),
    #[error("invalid cell symbol {0:?} (expected W, B, _ or 1, 2, 0)")]
    InvalidSymbol(char),
    #[error("board has no empty cell")]
    NoEmpty,
    #[error("board has {0} empty cells, expected exactly one")]
    MultipleEmpty(usize),
}
