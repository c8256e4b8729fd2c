use log::{info, warn};
use serde::{Deserialize, Serialize};

use crate::ai::Minimax;
use crate::difficulty::{Difficulty, create_search};
use crate::error::SessionError;
use crate::state::GameState;
use crate::types::{GameResult, GameSnapshot, Move, Position, Side};

pub trait MoveSelector: Send + Sync {
    fn select_move(&self, state: &GameState) -> Option<Move>;
}

impl MoveSelector for Minimax {
    fn select_move(&self, state: &GameState) -> Option<Move> {
        self.get_best_move(state)
    }
}

/// Session settings supplied by the front end.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    pub difficulty: Difficulty,
    /// Side played by the engine; the human plays the other one.
    pub ai_side: Side,
    /// Shuffled layout seed; `None` uses the standard board.
    pub seed: Option<u64>,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            difficulty: Difficulty::Expert,
            ai_side: Side::First,
            seed: None,
        }
    }
}

impl SessionConfig {
    fn fresh_state(&self) -> GameState {
        match self.seed {
            Some(seed) => GameState::random(seed),
            None => GameState::initial(),
        }
    }
}

/// One game between a human and the engine. Owns the authoritative state;
/// the engine only ever sees clones.
pub struct GameSession {
    state: GameState,
    config: SessionConfig,
    is_game_over: bool,
    is_pass: bool,
    last_move: Option<Move>,
    engine: Box<dyn MoveSelector>,
}

impl GameSession {
    pub fn new(config: SessionConfig) -> Self {
        Self::with_selector(config, Box::new(create_search(config.difficulty)))
    }

    pub fn with_selector(config: SessionConfig, engine: Box<dyn MoveSelector>) -> Self {
        Self::from_state(config, config.fresh_state(), engine)
    }

    /// Starts from an explicit position instead of the configured layout.
    pub fn from_state(
        config: SessionConfig,
        state: GameState,
        engine: Box<dyn MoveSelector>,
    ) -> Self {
        info!(
            "new game: difficulty={} ai={:?} seed={:?}",
            config.difficulty, config.ai_side, config.seed
        );
        let mut session = Self {
            state,
            config,
            is_game_over: false,
            is_pass: false,
            last_move: None,
            engine,
        };
        session.settle();
        session
    }

    pub fn reset(&mut self) {
        info!("reset game");
        self.state = self.config.fresh_state();
        self.is_game_over = false;
        self.is_pass = false;
        self.last_move = None;
        self.settle();
    }

    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn ai_side(&self) -> Side {
        self.config.ai_side
    }

    pub fn human_side(&self) -> Side {
        self.config.ai_side.opponent()
    }

    pub fn is_game_over(&self) -> bool {
        self.is_game_over
    }

    pub fn needs_ai_move(&self) -> bool {
        !self.is_game_over && self.state.current_player() == self.ai_side()
    }

    /// Applies the human's move. Returns the points collected.
    pub fn play(&mut self, from: Position, to: Position) -> Result<u8, SessionError> {
        if self.is_game_over {
            return Err(SessionError::GameOver);
        }
        let human = self.human_side();
        if self.state.current_player() != human {
            return Err(SessionError::WrongTurn(human));
        }

        let gained = self.state.try_move(from, to).inspect_err(|err| {
            warn!("rejected move: {err}");
        })?;
        self.after_move(Move { from, to });
        Ok(gained)
    }

    /// Lets the engine move. Returns the move played, or `None` when the
    /// engine had nothing to play and the turn passed.
    pub fn do_ai_move(&mut self) -> Result<Option<Move>, SessionError> {
        if self.is_game_over {
            return Err(SessionError::GameOver);
        }
        let ai = self.ai_side();
        if self.state.current_player() != ai {
            return Err(SessionError::WrongTurn(ai));
        }

        let snapshot = self.state.clone();
        let Some(mv) = self.engine.select_move(&snapshot) else {
            info!("{ai:?} cannot move, passing");
            self.state.pass_turn();
            self.is_pass = true;
            self.last_move = None;
            self.settle();
            return Ok(None);
        };

        self.state.try_move(mv.from, mv.to).inspect_err(|err| {
            warn!("rejected engine move: {err}");
        })?;
        self.after_move(mv);
        Ok(Some(mv))
    }

    /// Legal moves for the side to move.
    pub fn legal_moves(&self) -> Vec<Move> {
        if self.is_game_over {
            return Vec::new();
        }
        self.state.legal_moves(self.state.current_player())
    }

    pub fn to_snapshot(&self) -> GameSnapshot {
        GameSnapshot {
            is_game_over: self.is_game_over,
            is_pass: self.is_pass,
            last_move: self.last_move,
            ..self.state.to_snapshot()
        }
    }

    pub fn to_game_result(&self) -> Option<GameResult> {
        if !self.is_game_over {
            return None;
        }
        let first_score = self.state.score_for(Side::First);
        let second_score = self.state.score_for(Side::Second);
        Some(GameResult {
            winner: match first_score.cmp(&second_score) {
                std::cmp::Ordering::Greater => Some(Side::First),
                std::cmp::Ordering::Less => Some(Side::Second),
                std::cmp::Ordering::Equal => None,
            },
            first_score,
            second_score,
        })
    }

    fn after_move(&mut self, mv: Move) {
        self.is_pass = false;
        self.last_move = Some(mv);
        self.settle();
    }

    /// Ends the game when points run out, and skips a side that cannot move.
    fn settle(&mut self) {
        if !self.state.has_points_remaining() {
            self.end_game();
            return;
        }

        let side = self.state.current_player();
        if !self.state.legal_moves(side).is_empty() {
            return;
        }
        if self.state.legal_moves(side.opponent()).is_empty() {
            self.end_game();
            return;
        }

        info!("{side:?} is boxed in, passing");
        self.state.pass_turn();
        self.is_pass = true;
    }

    fn end_game(&mut self) {
        self.is_game_over = true;
        info!(
            "game over: first={} second={}",
            self.state.score_for(Side::First),
            self.state.score_for(Side::Second)
        );
    }
}
