use rand::SeedableRng;
use rand::rngs::SmallRng;

use crate::board::Board;
use crate::error::{MoveError, SetupError};
use crate::movegen::{self, MovementRule};
use crate::types::{GameSnapshot, Move, Position, Side};

const STANDARD_FIRST_HORSE: Position = Position::new(0, 0);
const STANDARD_SECOND_HORSE: Position = Position::new(7, 7);

/// Authoritative game state: the board, both horses, both scores and whose
/// turn it is.
///
/// `Clone` is a full deep copy; the search explores clones and never touches
/// the caller's state.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct GameState {
    board: Board,
    rule: MovementRule,
    horses: [Position; 2],
    scores: [u32; 2],
    current_player: Side,
}

impl GameState {
    /// The fixed standard start: 8x8 knight board, `First` to move.
    pub fn initial() -> Self {
        Self {
            board: Board::standard(),
            rule: MovementRule::Knight,
            horses: [STANDARD_FIRST_HORSE, STANDARD_SECOND_HORSE],
            scores: [0, 0],
            current_player: Side::First,
        }
    }

    /// A shuffled 8x8 start. The same seed always yields the same layout.
    pub fn random(seed: u64) -> Self {
        let mut rng = SmallRng::seed_from_u64(seed);
        let (board, horses) = Board::random(&mut rng);
        Self {
            board,
            rule: MovementRule::Knight,
            horses,
            scores: [0, 0],
            current_player: Side::First,
        }
    }

    /// Builds an arbitrary position. Horses must be on the board and apart;
    /// points under a horse are left in place.
    pub fn from_parts(
        board: Board,
        rule: MovementRule,
        first: Position,
        second: Position,
        to_move: Side,
    ) -> Result<Self, SetupError> {
        if !board.in_bounds(first) {
            return Err(SetupError::HorseOutOfBounds(Side::First));
        }
        if !board.in_bounds(second) {
            return Err(SetupError::HorseOutOfBounds(Side::Second));
        }
        if first == second {
            return Err(SetupError::HorsesOverlap);
        }
        Ok(Self {
            board,
            rule,
            horses: [first, second],
            scores: [0, 0],
            current_player: to_move,
        })
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn rule(&self) -> MovementRule {
        self.rule
    }

    pub fn current_player(&self) -> Side {
        self.current_player
    }

    pub fn piece_for(&self, side: Side) -> Position {
        self.horses[side.index()]
    }

    pub fn score_for(&self, side: Side) -> u32 {
        self.scores[side.index()]
    }

    pub fn remaining_points(&self) -> u32 {
        self.board.remaining_points()
    }

    /// Terminal-state oracle: the game ends once this turns false.
    pub fn has_points_remaining(&self) -> bool {
        self.board.has_points()
    }

    /// Legal moves for `side`, regardless of whose turn it is.
    pub fn legal_moves(&self, side: Side) -> Vec<Move> {
        movegen::legal_moves(self, side)
    }

    /// Applies a move for the side to move. Returns `false` and leaves the
    /// state untouched when the move is not legal.
    pub fn make_move(&mut self, from: Position, to: Position) -> bool {
        self.try_move(from, to).is_ok()
    }

    /// Like [`make_move`](Self::make_move) but reports why a move was
    /// rejected. On success returns the points collected.
    pub fn try_move(&mut self, from: Position, to: Position) -> Result<u8, MoveError> {
        let side = self.current_player;
        if !self.board.in_bounds(from) {
            return Err(MoveError::OutOfBounds(from));
        }
        if !self.board.in_bounds(to) {
            return Err(MoveError::OutOfBounds(to));
        }
        if from != self.piece_for(side) {
            return Err(MoveError::NotYourHorse { side, from });
        }

        let reachable = movegen::destinations(
            &self.board,
            self.rule,
            from,
            self.piece_for(side.opponent()),
        )
        .any(|dest| dest == to);
        if !reachable {
            return Err(MoveError::IllegalDestination(to));
        }

        Ok(self.apply_unchecked(side, to))
    }

    /// Hands the turn to the other side without moving. Used when the side to
    /// move is boxed in.
    pub fn pass_turn(&mut self) {
        self.current_player = self.current_player.opponent();
    }

    pub fn to_snapshot(&self) -> GameSnapshot {
        GameSnapshot {
            rows: self.board.rows(),
            cols: self.board.cols(),
            points: self.board.to_vec(),
            first_horse: self.piece_for(Side::First),
            second_horse: self.piece_for(Side::Second),
            first_score: self.score_for(Side::First),
            second_score: self.score_for(Side::Second),
            current_player: self.current_player,
            remaining_points: self.remaining_points(),
            is_game_over: !self.has_points_remaining(),
            is_pass: false,
            last_move: None,
        }
    }

    /// Applies a move already known to be legal. Search uses this on moves it
    /// generated itself.
    pub(crate) fn apply_unchecked(&mut self, side: Side, to: Position) -> u8 {
        debug_assert_eq!(side, self.current_player);
        let gained = self.board.take_points(to);
        self.horses[side.index()] = to;
        self.scores[side.index()] += gained as u32;
        self.current_player = side.opponent();

        assert_ne!(
            self.horses[0], self.horses[1],
            "horses share square ({}, {})",
            to.row, to.col
        );
        gained
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::initial()
    }
}
