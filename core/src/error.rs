use thiserror::Error;

#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("Board needs at least one row and one column")]
    EmptyBoard,
    #[error("Board needs at least one mine")]
    NoMines,
    #[error("Too many mines, at least one cell must stay safe")]
    TooManyMines,
    #[error("Invalid coordinates")]
    InvalidCoords,
    #[error("Board shape does not match declared size")]
    InvalidBoardShape,
    #[error("Generated layout does not match the requested config")]
    LayoutMismatch,
    #[error("Board counters or game state disagree with its cells")]
    InconsistentBoard,
}

impl GameError {
    /// Whether this error rejects a board configuration, as opposed to a single call.
    pub const fn is_invalid_config(self) -> bool {
        matches!(self, Self::EmptyBoard | Self::NoMines | Self::TooManyMines)
    }
}

pub type Result<T> = core::result::Result<T, GameError>;
