use rand::Rng;
use rand::seq::SliceRandom;

use crate::error::SetupError;
use crate::types::Position;

pub const STANDARD_SIZE: usize = 8;
pub const MAX_SIZE: usize = 16;
/// Point squares on a standard board hold the values `1..=POINT_SQUARES`.
pub const POINT_SQUARES: u8 = 10;

/// `(row, col, points)` for the fixed starting layout.
const STANDARD_POINTS: [(u8, u8, u8); POINT_SQUARES as usize] = [
    (0, 5, 3),
    (1, 2, 7),
    (2, 0, 2),
    (2, 6, 9),
    (3, 3, 10),
    (4, 4, 5),
    (5, 1, 8),
    (5, 7, 4),
    (6, 5, 6),
    (7, 2, 1),
];

/// Grid of point values. A consumed square stays at zero for the rest of the
/// game.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Board {
    rows: u8,
    cols: u8,
    cells: Vec<u8>,
}

impl Board {
    /// Creates an empty board of the given size.
    pub fn empty(rows: usize, cols: usize) -> Result<Self, SetupError> {
        if !(1..=MAX_SIZE).contains(&rows) || !(1..=MAX_SIZE).contains(&cols) {
            return Err(SetupError::BadDimensions {
                rows,
                cols,
                max: MAX_SIZE,
            });
        }
        Ok(Self {
            rows: rows as u8,
            cols: cols as u8,
            cells: vec![0; rows * cols],
        })
    }

    /// Builds a board from rows of point values.
    pub fn from_rows<R: AsRef<[u8]>>(rows: &[R]) -> Result<Self, SetupError> {
        let width = rows.first().map_or(0, |row| row.as_ref().len());
        let mut board = Self::empty(rows.len(), width)?;
        for (r, row) in rows.iter().enumerate() {
            let row = row.as_ref();
            if row.len() != width {
                return Err(SetupError::RaggedRow {
                    row: r,
                    got: row.len(),
                    expected: width,
                });
            }
            let start = r * width;
            board.cells[start..start + width].copy_from_slice(row);
        }
        Ok(board)
    }

    /// The fixed 8x8 starting layout.
    pub fn standard() -> Self {
        let mut cells = vec![0; STANDARD_SIZE * STANDARD_SIZE];
        for (row, col, points) in STANDARD_POINTS {
            cells[row as usize * STANDARD_SIZE + col as usize] = points;
        }
        Self {
            rows: STANDARD_SIZE as u8,
            cols: STANDARD_SIZE as u8,
            cells,
        }
    }

    /// Shuffles `1..=POINT_SQUARES` onto an 8x8 board and picks two free
    /// squares for the horses. Returns the board and `[first, second]`.
    pub fn random<R: Rng>(rng: &mut R) -> (Self, [Position; 2]) {
        let mut squares: Vec<usize> = (0..STANDARD_SIZE * STANDARD_SIZE).collect();
        squares.shuffle(rng);

        let mut cells = vec![0; STANDARD_SIZE * STANDARD_SIZE];
        for (value, &idx) in (1..=POINT_SQUARES).zip(&squares) {
            cells[idx] = value;
        }

        let horse_at = |idx: usize| {
            Position::new((idx / STANDARD_SIZE) as u8, (idx % STANDARD_SIZE) as u8)
        };
        let first = horse_at(squares[POINT_SQUARES as usize]);
        let second = horse_at(squares[POINT_SQUARES as usize + 1]);

        let board = Self {
            rows: STANDARD_SIZE as u8,
            cols: STANDARD_SIZE as u8,
            cells,
        };
        (board, [first, second])
    }

    pub fn rows(&self) -> u8 {
        self.rows
    }

    pub fn cols(&self) -> u8 {
        self.cols
    }

    pub fn in_bounds(&self, pos: Position) -> bool {
        pos.row < self.rows && pos.col < self.cols
    }

    /// Point value on `pos`; off-board squares read 0.
    pub fn points_at(&self, pos: Position) -> u8 {
        self.index(pos).map_or(0, |idx| self.cells[idx])
    }

    /// Removes and returns the points on `pos`.
    pub fn take_points(&mut self, pos: Position) -> u8 {
        match self.index(pos) {
            Some(idx) => std::mem::take(&mut self.cells[idx]),
            None => 0,
        }
    }

    /// Sum of all points still on the board.
    pub fn remaining_points(&self) -> u32 {
        self.cells.iter().map(|&p| p as u32).sum()
    }

    pub fn has_points(&self) -> bool {
        self.cells.iter().any(|&p| p > 0)
    }

    /// Row-major copy of the point values.
    pub fn to_vec(&self) -> Vec<u8> {
        self.cells.clone()
    }

    fn index(&self, pos: Position) -> Option<usize> {
        self.in_bounds(pos)
            .then(|| pos.row as usize * self.cols as usize + pos.col as usize)
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::standard()
    }
}
