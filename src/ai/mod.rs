pub mod heuristic;
pub mod search;

pub use heuristic::{Evaluator, HeuristicKind, MoverScore, Reach, ScoreDifference};
pub use search::{Minimax, SearchReport};
