use serde::{Deserialize, Serialize};

use crate::board::Board;
use crate::state::GameState;
use crate::types::{Move, Position, Side};

const KNIGHT_JUMPS: [(i8, i8); 8] = [
    (-2, -1),
    (-2, 1),
    (-1, -2),
    (-1, 2),
    (1, -2),
    (1, 2),
    (2, -1),
    (2, 1),
];
const KING_STEPS: [(i8, i8); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// How a horse travels. Offsets are tried in table order, which is also the
/// order moves come out of [`legal_moves`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MovementRule {
    /// L-shaped chess knight jumps.
    #[default]
    Knight,
    /// One step to any neighbouring square.
    King,
}

impl MovementRule {
    pub fn offsets(self) -> &'static [(i8, i8)] {
        match self {
            Self::Knight => &KNIGHT_JUMPS,
            Self::King => &KING_STEPS,
        }
    }
}

/// Squares `from` can reach under `rule`, minus `blocked`.
pub fn destinations(
    board: &Board,
    rule: MovementRule,
    from: Position,
    blocked: Position,
) -> impl Iterator<Item = Position> + '_ {
    rule.offsets()
        .iter()
        .filter_map(move |&(dr, dc)| from.offset(dr, dc))
        .filter(move |&to| board.in_bounds(to) && to != blocked)
}

/// Legal moves for `side`'s horse, whether or not it is that side's turn.
pub fn legal_moves(state: &GameState, side: Side) -> Vec<Move> {
    let from = state.piece_for(side);
    let blocked = state.piece_for(side.opponent());
    destinations(state.board(), state.rule(), from, blocked)
        .map(|to| Move { from, to })
        .collect()
}
