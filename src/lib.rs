use wasm_bindgen::prelude::*;

pub mod ai;
pub mod api;
pub mod board;
pub mod difficulty;
pub mod error;
pub mod game;
pub mod movegen;
pub mod state;
pub mod types;

pub use ai::{Evaluator, Minimax, SearchReport};
pub use difficulty::{Difficulty, create_search};
pub use error::{ConfigError, MoveError, SessionError, SetupError};
pub use game::{GameSession, SessionConfig};
pub use movegen::{MovementRule, legal_moves};
pub use state::GameState;
pub use types::{GameResult, GameSnapshot, Move, Position, Side};

/// The fixed standard starting position.
pub fn create_initial_state() -> GameState {
    GameState::initial()
}

#[wasm_bindgen]
pub fn wasm_ready() -> bool {
    true
}
