use std::fmt;
use std::time::Duration;

use log::debug;
use web_time::Instant;

use crate::ai::heuristic::Evaluator;
use crate::state::GameState;
use crate::types::{Move, Side};

const MIN_SCORE: i32 = i32::MIN;
const MAX_SCORE: i32 = i32::MAX;

/// Outcome of one root search.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchReport {
    pub best_move: Move,
    /// Backed-up value of `best_move` from the side to move's perspective.
    pub score: i32,
    pub nodes: u64,
    pub elapsed: Duration,
}

/// Depth-limited minimax over cloned states.
///
/// The side to move at the root maximizes the evaluator's score from its own
/// perspective; the opponent minimizes it. Ties go to the first move in
/// generation order, so results are reproducible. Alpha-beta pruning and
/// parallel root scoring change the node count, never the chosen move.
pub struct Minimax {
    evaluator: Box<dyn Evaluator>,
    depth: u8,
    pruning: bool,
    parallel: bool,
}

impl Minimax {
    pub fn new(evaluator: impl Evaluator + 'static, depth: u8) -> Self {
        Self::from_boxed(Box::new(evaluator), depth)
    }

    pub fn from_boxed(evaluator: Box<dyn Evaluator>, depth: u8) -> Self {
        Self {
            evaluator,
            depth,
            pruning: false,
            parallel: false,
        }
    }

    pub fn with_pruning(mut self, pruning: bool) -> Self {
        self.pruning = pruning;
        self
    }

    /// Scores root moves on the rayon pool. Ignored on wasm32.
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    pub fn depth(&self) -> u8 {
        self.depth
    }

    /// Best move for the side to move, or `None` when it has no legal move.
    pub fn get_best_move(&self, state: &GameState) -> Option<Move> {
        self.search(state).map(|report| report.best_move)
    }

    pub fn search(&self, state: &GameState) -> Option<SearchReport> {
        let start = Instant::now();
        let root_side = state.current_player();
        let moves = state.legal_moves(root_side);
        if moves.is_empty() {
            debug!("search: {root_side:?} has no legal move");
            return None;
        }

        // The root is always expanded, so depth 0 searches like depth 1.
        let child_depth = self.depth.saturating_sub(1);
        let (best_move, score, nodes) = if self.parallel {
            self.search_root_parallel(state, &moves, child_depth)
        } else {
            self.search_root(state, &moves, child_depth)
        };

        let report = SearchReport {
            best_move,
            score,
            nodes,
            elapsed: start.elapsed(),
        };
        debug!(
            "search: {root_side:?} depth={} pruning={} -> ({}, {}) score={} nodes={} in {:?}",
            self.depth,
            self.pruning,
            best_move.to.row,
            best_move.to.col,
            score,
            nodes,
            report.elapsed
        );
        Some(report)
    }

    fn search_root(&self, state: &GameState, moves: &[Move], depth: u8) -> (Move, i32, u64) {
        let root_side = state.current_player();
        let mut nodes = 1u64;
        let mut best_move = moves[0];
        let mut best_score = MIN_SCORE;
        let mut alpha = MIN_SCORE;

        for &mv in moves {
            let next = child(state, root_side, mv);
            let score = self.minimax(&next, depth, root_side, alpha, MAX_SCORE, &mut nodes);
            if score > best_score {
                best_score = score;
                best_move = mv;
            }
            if self.pruning {
                alpha = alpha.max(best_score);
            }
        }

        (best_move, best_score, nodes)
    }

    #[cfg(not(target_arch = "wasm32"))]
    fn search_root_parallel(
        &self,
        state: &GameState,
        moves: &[Move],
        depth: u8,
    ) -> (Move, i32, u64) {
        use rayon::prelude::*;

        let root_side = state.current_player();
        // Collected in generation order so the tie-break matches the
        // sequential search.
        let scored: Vec<(i32, u64)> = moves
            .par_iter()
            .map(|&mv| {
                let next = child(state, root_side, mv);
                let mut nodes = 0u64;
                let score =
                    self.minimax(&next, depth, root_side, MIN_SCORE, MAX_SCORE, &mut nodes);
                (score, nodes)
            })
            .collect();

        let mut best_move = moves[0];
        let mut best_score = MIN_SCORE;
        let mut nodes = 1u64;
        for (&mv, &(score, subtree)) in moves.iter().zip(&scored) {
            nodes += subtree;
            if score > best_score {
                best_score = score;
                best_move = mv;
            }
        }
        (best_move, best_score, nodes)
    }

    #[cfg(target_arch = "wasm32")]
    fn search_root_parallel(
        &self,
        state: &GameState,
        moves: &[Move],
        depth: u8,
    ) -> (Move, i32, u64) {
        self.search_root(state, moves, depth)
    }

    fn minimax(
        &self,
        state: &GameState,
        depth: u8,
        perspective: Side,
        mut alpha: i32,
        mut beta: i32,
        nodes: &mut u64,
    ) -> i32 {
        *nodes += 1;

        if depth == 0 || !state.has_points_remaining() {
            return self.evaluator.score(state, perspective);
        }

        let side = state.current_player();
        let moves = state.legal_moves(side);
        if moves.is_empty() {
            return self.evaluator.score(state, perspective);
        }

        let maximizing = side == perspective;
        let mut best = if maximizing { MIN_SCORE } else { MAX_SCORE };

        for mv in moves {
            let next = child(state, side, mv);
            let score = self.minimax(&next, depth - 1, perspective, alpha, beta, nodes);
            if maximizing {
                best = best.max(score);
                alpha = alpha.max(best);
            } else {
                best = best.min(score);
                beta = beta.min(best);
            }
            if self.pruning && alpha >= beta {
                break;
            }
        }

        best
    }
}

impl fmt::Debug for Minimax {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Minimax")
            .field("depth", &self.depth)
            .field("pruning", &self.pruning)
            .field("parallel", &self.parallel)
            .finish_non_exhaustive()
    }
}

fn child(state: &GameState, side: Side, mv: Move) -> GameState {
    let mut next = state.clone();
    next.apply_unchecked(side, mv.to);
    next
}
