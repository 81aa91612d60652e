use thiserror::Error;

#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum BoardError {
    #[error("Invalid dimensions, rows and columns must be positive")]
    InvalidDimensions,
    #[error("Invalid mine count, at least one cell must stay safe")]
    InvalidMineCount,
    #[error("Invalid coordinates")]
    InvalidCoords,
}

pub type Result<T> = core::result::Result<T, BoardError>;
