use serde::{Deserialize, Serialize};

use crate::movegen;
use crate::state::GameState;
use crate::types::Side;

const SCORE_WEIGHT: i32 = 10;

/// Scores a position from `perspective`'s point of view; higher is better for
/// that side. Must be deterministic and side-effect free.
pub trait Evaluator: Send + Sync {
    fn score(&self, state: &GameState, perspective: Side) -> i32;
}

impl<F> Evaluator for F
where
    F: Fn(&GameState, Side) -> i32 + Send + Sync,
{
    fn score(&self, state: &GameState, perspective: Side) -> i32 {
        self(state, perspective)
    }
}

/// Points collected so far by `perspective`, ignoring the opponent.
#[derive(Debug, Default, Clone, Copy)]
pub struct MoverScore;

impl Evaluator for MoverScore {
    fn score(&self, state: &GameState, perspective: Side) -> i32 {
        state.score_for(perspective) as i32
    }
}

/// Own points minus the opponent's.
#[derive(Debug, Default, Clone, Copy)]
pub struct ScoreDifference;

impl Evaluator for ScoreDifference {
    fn score(&self, state: &GameState, perspective: Side) -> i32 {
        score_difference(state, perspective)
    }
}

/// Score difference, plus how much better the best square one jump away is
/// for us than for the opponent.
#[derive(Debug, Default, Clone, Copy)]
pub struct Reach;

impl Evaluator for Reach {
    fn score(&self, state: &GameState, perspective: Side) -> i32 {
        let threat =
            best_reachable(state, perspective) - best_reachable(state, perspective.opponent());
        score_difference(state, perspective) * SCORE_WEIGHT + threat
    }
}

/// Heuristic choices addressable from configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HeuristicKind {
    MoverScore,
    ScoreDifference,
    Reach,
}

impl HeuristicKind {
    pub fn build(self) -> Box<dyn Evaluator> {
        match self {
            Self::MoverScore => Box::new(MoverScore),
            Self::ScoreDifference => Box::new(ScoreDifference),
            Self::Reach => Box::new(Reach),
        }
    }
}

fn score_difference(state: &GameState, perspective: Side) -> i32 {
    state.score_for(perspective) as i32 - state.score_for(perspective.opponent()) as i32
}

fn best_reachable(state: &GameState, side: Side) -> i32 {
    movegen::destinations(
        state.board(),
        state.rule(),
        state.piece_for(side),
        state.piece_for(side.opponent()),
    )
    .map(|to| state.board().points_at(to) as i32)
    .max()
    .unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Board;
    use crate::movegen::MovementRule;
    use crate::types::Position;

    fn position() -> GameState {
        // First sits next to the 9, Second next to the 2.
        let board = Board::from_rows(&[[0u8, 9, 0, 0], [0, 0, 0, 0], [0, 0, 2, 0]]).unwrap();
        GameState::from_parts(
            board,
            MovementRule::King,
            Position::new(0, 0),
            Position::new(2, 3),
            Side::First,
        )
        .unwrap()
    }

    #[test]
    fn mover_score_counts_only_own_points() {
        let mut state = position();
        assert!(state.make_move(Position::new(0, 0), Position::new(0, 1)));

        assert_eq!(MoverScore.score(&state, Side::First), 9);
        assert_eq!(MoverScore.score(&state, Side::Second), 0);
    }

    #[test]
    fn score_difference_is_antisymmetric() {
        let mut state = position();
        assert!(state.make_move(Position::new(0, 0), Position::new(0, 1)));
        assert!(state.make_move(Position::new(2, 3), Position::new(2, 2)));

        assert_eq!(ScoreDifference.score(&state, Side::First), 7);
        assert_eq!(ScoreDifference.score(&state, Side::Second), -7);
    }

    #[test]
    fn reach_rewards_nearby_points() {
        let state = position();

        assert_eq!(Reach.score(&state, Side::First), 9 - 2);
        assert_eq!(Reach.score(&state, Side::Second), 2 - 9);
    }

    #[test]
    fn closures_and_built_kinds_are_evaluators() {
        let state = position();
        let constant = |_: &GameState, _: Side| 42;
        let boxed: Box<dyn Evaluator> = HeuristicKind::Reach.build();

        assert_eq!(constant.score(&state, Side::First), 42);
        assert_eq!(boxed.score(&state, Side::First), Reach.score(&state, Side::First));
    }
}
