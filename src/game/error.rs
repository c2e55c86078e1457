use thiserror::Error;

/// Errors raised while building a board, a snake or an engine.
///
/// Every variant is fatal for the configuration that produced it; nothing in
/// the simulation retries after one of these.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SetupError {
    #[error("intensity grid must be non-empty and rectangular: {0}")]
    InvalidDimensions(String),
    #[error("intensity {value} at row {row}, column {column} is outside 0..=4")]
    InvalidIntensity { row: usize, column: usize, value: u8 },
    #[error("a snake of length {length} does not fit on the board")]
    InsufficientSpace { length: usize },
    #[error("invalid configuration: {0}")]
    InvalidConfig(&'static str),
}

/// Food could not be placed because every traversable cell is taken.
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
pub enum PlacementError {
    #[error("no free cell left for food")]
    BoardFull,
}
