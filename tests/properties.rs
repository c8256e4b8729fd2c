use rand::rngs::SmallRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

use smart_horses::ai::{MoverScore, Reach, ScoreDifference};
use smart_horses::board::Board;
use smart_horses::{
    Difficulty, GameState, Minimax, Move, MovementRule, Position, Side, create_initial_state,
    create_search, legal_moves,
};

const TOTAL_POINTS: u32 = 55;

/// Plays random legal moves from a seeded layout, passing when boxed in,
/// until the points run out or neither side can move.
fn random_playout(seed: u64, mut check: impl FnMut(&GameState, &GameState)) {
    let mut rng = SmallRng::seed_from_u64(seed);
    let mut state = GameState::random(seed);

    for _ in 0..500 {
        if !state.has_points_remaining() {
            return;
        }
        let side = state.current_player();
        let moves = legal_moves(&state, side);
        let before = state.clone();
        match moves.choose(&mut rng) {
            Some(&mv) => {
                assert!(state.make_move(mv.from, mv.to));
                check(&before, &state);
            }
            None if legal_moves(&state, side.opponent()).is_empty() => return,
            None => state.pass_turn(),
        }
    }
}

fn scenario_state() -> GameState {
    let board = Board::from_rows(&[[1u8, 0, 2], [0, 3, 0], [1, 0, 1]]).unwrap();
    GameState::from_parts(
        board,
        MovementRule::King,
        Position::new(0, 0),
        Position::new(2, 2),
        Side::Second,
    )
    .unwrap()
}

#[test]
fn points_never_increase_and_are_conserved() {
    for seed in 0..20 {
        random_playout(seed, |before, after| {
            assert!(after.remaining_points() <= before.remaining_points());
            let collected = after.score_for(Side::First) + after.score_for(Side::Second);
            assert_eq!(collected + after.remaining_points(), TOTAL_POINTS);
            assert_eq!(after.remaining_points() == 0, !after.has_points_remaining());
        });
    }
}

#[test]
fn turns_alternate_after_every_move() {
    for seed in 0..20 {
        random_playout(seed, |before, after| {
            assert_eq!(after.current_player(), before.current_player().opponent());
            assert_ne!(after.piece_for(Side::First), after.piece_for(Side::Second));
        });
    }
}

#[test]
fn failed_moves_change_nothing() {
    let mut rng = SmallRng::seed_from_u64(3);
    for seed in 0..10 {
        let mut state = GameState::random(seed);
        let before = state.clone();
        let side = state.current_player();
        let legal = legal_moves(&state, side);

        for _ in 0..50 {
            let from = if rng.gen_bool(0.5) {
                state.piece_for(side)
            } else {
                Position::new(rng.gen_range(0..10), rng.gen_range(0..10))
            };
            let to = Position::new(rng.gen_range(0..10), rng.gen_range(0..10));
            if legal.contains(&Move { from, to }) {
                continue;
            }
            assert!(!state.make_move(from, to));
            assert_eq!(state, before);
        }
    }
}

#[test]
fn clones_do_not_share_state() {
    let original = create_initial_state();
    let mut copy = original.clone();
    let mv = legal_moves(&copy, Side::First)[0];

    assert!(copy.make_move(mv.from, mv.to));
    assert_eq!(original, create_initial_state());

    let mut original = original;
    let frozen = copy.clone();
    let mv = legal_moves(&original, Side::First)[1];
    assert!(original.make_move(mv.from, mv.to));
    assert_eq!(copy, frozen);
}

#[test]
fn search_is_deterministic_legal_and_non_mutating() {
    for seed in 0..8 {
        let state = GameState::random(seed);
        let engine = create_search(Difficulty::Amateur);
        let before = state.clone();

        let first = engine.get_best_move(&state);
        let second = engine.get_best_move(&state);

        assert_eq!(first, second);
        let mv = first.unwrap();
        assert!(legal_moves(&state, state.current_player()).contains(&mv));
        assert_eq!(state, before);
    }
}

#[test]
fn depth_one_takes_the_three() {
    let state = scenario_state();
    let engine = Minimax::new(MoverScore, 1);

    let mv = engine.get_best_move(&state).unwrap();

    assert_eq!(
        mv,
        Move {
            from: Position::new(2, 2),
            to: Position::new(1, 1),
        }
    );
}

#[test]
fn depth_zero_equals_depth_one() {
    for seed in 0..5 {
        let state = GameState::random(seed);
        let zero = Minimax::new(Reach, 0).search(&state).unwrap();
        let one = Minimax::new(Reach, 1).search(&state).unwrap();

        assert_eq!(zero.best_move, one.best_move);
        assert_eq!(zero.score, one.score);
    }
}

#[test]
fn empty_board_is_terminal_from_the_start() {
    let state = GameState::from_parts(
        Board::empty(3, 3).unwrap(),
        MovementRule::King,
        Position::new(0, 0),
        Position::new(2, 2),
        Side::First,
    )
    .unwrap();

    assert!(!state.has_points_remaining());
    assert_eq!(state.remaining_points(), 0);
    // Moves exist, so a neutral move is still offered.
    let mv = Minimax::new(ScoreDifference, 3).get_best_move(&state).unwrap();
    assert!(legal_moves(&state, Side::First).contains(&mv));
}

#[test]
fn boxed_in_horse_has_no_moves_and_no_best_move() {
    let board = Board::from_rows(&[[0u8, 3]]).unwrap();
    let state = GameState::from_parts(
        board,
        MovementRule::King,
        Position::new(0, 0),
        Position::new(0, 1),
        Side::First,
    )
    .unwrap();

    assert!(legal_moves(&state, Side::First).is_empty());
    assert_eq!(Minimax::new(MoverScore, 2).get_best_move(&state), None);
}
