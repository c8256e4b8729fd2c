use serde::{Deserialize, Serialize};

/// A board coordinate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Position {
    pub row: u8,
    pub col: u8,
}

impl Position {
    pub const fn new(row: u8, col: u8) -> Self {
        Self { row, col }
    }

    /// Offsets this position, returning `None` when the result leaves the
    /// non-negative quadrant. Board bounds are checked by the caller.
    pub fn offset(self, d_row: i8, d_col: i8) -> Option<Self> {
        let row = self.row.checked_add_signed(d_row)?;
        let col = self.col.checked_add_signed(d_col)?;
        Some(Self { row, col })
    }
}

/// One of the two players. Each side owns exactly one horse.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    First,
    Second,
}

impl Side {
    pub const BOTH: [Side; 2] = [Side::First, Side::Second];

    pub fn opponent(self) -> Self {
        match self {
            Self::First => Self::Second,
            Self::Second => Self::First,
        }
    }

    pub(crate) fn index(self) -> usize {
        match self {
            Self::First => 0,
            Self::Second => 1,
        }
    }
}

/// A horse move. `from` is always the moving horse's current square.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    pub from: Position,
    pub to: Position,
}

/// Public game state returned from WASM APIs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GameSnapshot {
    pub rows: u8,
    pub cols: u8,
    /// Row-major point values; consumed squares read 0.
    pub points: Vec<u8>,
    pub first_horse: Position,
    pub second_horse: Position,
    pub first_score: u32,
    pub second_score: u32,
    pub current_player: Side,
    pub remaining_points: u32,
    pub is_game_over: bool,
    /// Contract:
    /// - `true` when the previous turn was skipped because the side had no move.
    /// - `false` after a normal move.
    pub is_pass: bool,
    pub last_move: Option<Move>,
}

/// Final result after game over.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct GameResult {
    /// `None` on a draw.
    pub winner: Option<Side>,
    pub first_score: u32,
    pub second_score: u32,
}
