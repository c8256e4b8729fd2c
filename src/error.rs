use thiserror::Error;

use crate::types::{Position, Side};

/// Why a move was rejected. The state is never touched when one of these is
/// returned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum MoveError {
    #[error("square ({}, {}) is off the board", .0.row, .0.col)]
    OutOfBounds(Position),

    #[error("{side:?} has no horse on ({}, {})", .from.row, .from.col)]
    NotYourHorse { side: Side, from: Position },

    #[error("illegal move to ({}, {})", .0.row, .0.col)]
    IllegalDestination(Position),
}

/// Rejected board or position setups.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SetupError {
    #[error("board must have between 1 and {max} rows and columns, got {rows}x{cols}")]
    BadDimensions { rows: usize, cols: usize, max: usize },

    #[error("row {row} has {got} cells, expected {expected}")]
    RaggedRow { row: usize, got: usize, expected: usize },

    #[error("{0:?} horse is off the board")]
    HorseOutOfBounds(Side),

    #[error("both horses on the same square")]
    HorsesOverlap,
}

/// Configuration errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("unknown difficulty '{0}' (expected beginner, amateur or expert)")]
    UnknownDifficulty(String),

    #[error("invalid session config: {0}")]
    Invalid(String),
}

/// Errors surfaced by a running game session.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SessionError {
    #[error("game is already over")]
    GameOver,

    #[error("it is not {0:?}'s turn")]
    WrongTurn(Side),

    #[error(transparent)]
    Move(#[from] MoveError),

    #[error("no game in progress")]
    NoGame,
}
