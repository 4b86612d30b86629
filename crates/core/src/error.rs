//! Error types for contract violations.
//!
//! Rejected moves are not errors; these only cover malformed construction
//! parameters and out-of-grid queries.

use std::time::Duration;

use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum BoardError {
    #[error("board {columns}x{rows} is smaller than the largest piece ({min}x{min})")]
    TooSmall { columns: u16, rows: u16, min: u16 },
    #[error("board {columns}x{rows} exceeds the {max}x{max} limit")]
    TooLarge { columns: u16, rows: u16, max: u16 },
    #[error("cell ({x}, {y}) is outside the {columns}x{rows} board")]
    OutOfBounds {
        x: i32,
        y: i32,
        columns: u16,
        rows: u16,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum ConfigError {
    #[error(transparent)]
    Board(#[from] BoardError),
    #[error("lines per level must be at least 1")]
    ZeroLinesPerLevel,
    #[error("fall interval must be greater than zero")]
    ZeroFallInterval,
    #[error("level speedup must be in (0, 1], got {0}")]
    InvalidSpeedup(f64),
    #[error("minimum fall interval {min:?} exceeds the base interval {base:?}")]
    FloorAboveBase { base: Duration, min: Duration },
}

#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum GameError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("board is {found_columns}x{found_rows} but the config expects {columns}x{rows}")]
    BoardMismatch {
        columns: u16,
        rows: u16,
        found_columns: u16,
        found_rows: u16,
    },
}

impl From<BoardError> for GameError {
    fn from(value: BoardError) -> Self {
        GameError::Config(ConfigError::Board(value))
    }
}
