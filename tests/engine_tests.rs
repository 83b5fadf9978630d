//! Move resolution scenarios on hand-built boards.
//!
//! Each test lays out a fixed board so the outcome of a move is known
//! exactly, then checks the state the engine leaves behind.

use smallvec::smallvec;
use square_dash::arena::pulsing_cells;
use square_dash::core::{BoardLayout, Direction, GameState, MoveKind, Phase, Position};
use square_dash::rules::{CrashCause, MoveOutcome, RulesEngine};
use square_dash::SquareDash;

fn board(obstacles: &[Position], exit: Position) -> BoardLayout {
    BoardLayout {
        obstacles: obstacles.iter().copied().collect(),
        exit,
    }
}

fn far_exit() -> Position {
    Position::new(8, 8)
}

/// Fresh game, open path: N slides two cells.
#[test]
fn test_open_move_slides_two_cells() {
    let engine = SquareDash::default();
    let mut state = engine.game_with_layout(board(&[Position::new(8, 0)], far_exit()), 7);

    engine.apply_move(&mut state, Direction::North);

    assert_eq!(state.player, Position::new(2, 4));
    assert_eq!(state.turn, 1);
    assert_eq!(state.lives, 3);
}

/// Obstacle directly ahead crashes without using a turn.
#[test]
fn test_obstacle_ahead_crashes() {
    let engine = SquareDash::default();
    let layout = board(&[Position::new(3, 4)], far_exit());
    let mut state = engine.game_with_layout(layout.clone(), 7);

    let outcome = engine.apply_move(&mut state, Direction::North);

    assert_eq!(outcome, MoveOutcome::Crashed { cause: CrashCause::Obstacle, lives_left: 2 });
    assert_eq!(state.turn, 0);
    assert_eq!(state.lives, 2);
    assert_eq!(state.phase, Phase::Playing);
    assert_eq!(state.player, Position::new(4, 4));
    // The board is re-randomized with a full obstacle set.
    assert_eq!(state.obstacles.len(), 6);
    assert_ne!(state.layout(), layout);
}

/// Pulses on even turns make a free cell deadly.
#[test]
fn test_pulse_ahead_crashes() {
    let engine = SquareDash::default();
    let mut state = engine.game_with_layout(board(&[Position::new(2, 4)], far_exit()), 7);
    state.turn = 2;

    let pulses = pulsing_cells(&state, engine.config());
    for p in [Position::new(1, 4), Position::new(3, 4), Position::new(2, 3), Position::new(2, 5)] {
        assert!(pulses.contains(&p), "{p} should pulse");
    }

    let outcome = engine.apply_move(&mut state, Direction::North);

    assert_eq!(outcome, MoveOutcome::Crashed { cause: CrashCause::Pulse, lives_left: 2 });
    assert_eq!(state.turn, 0);
}

/// The same move on an odd turn is safe and stops short of the obstacle.
#[test]
fn test_no_pulse_on_odd_turn() {
    let engine = SquareDash::default();
    let mut state = engine.game_with_layout(board(&[Position::new(2, 4)], far_exit()), 7);
    state.turn = 3;

    let outcome = engine.apply_move(&mut state, Direction::North);

    assert!(matches!(outcome, MoveOutcome::Moved { slid: false, .. }));
    assert_eq!(state.player, Position::new(3, 4));
    assert_eq!(state.turn, 4);
}

/// Turn 0 never pulses, even though 0 is even.
#[test]
fn test_no_pulse_on_turn_zero() {
    let engine = SquareDash::default();
    let mut state = engine.game_with_layout(board(&[Position::new(2, 4)], far_exit()), 7);

    let outcome = engine.apply_move(&mut state, Direction::North);

    assert!(!outcome.is_crash());
    assert_eq!(state.player, Position::new(3, 4));
}

/// Reaching turn 5 closes the outer ring; standing in it is a crash.
#[test]
fn test_shrink_crash() {
    let engine = SquareDash::default();
    let mut state = engine.game_with_layout(board(&[], far_exit()), 7);
    state.player = Position::new(4, 2);
    state.turn = 4;

    let outcome = engine.apply_move(&mut state, Direction::West);

    assert_eq!(outcome, MoveOutcome::Crashed { cause: CrashCause::Shrink, lives_left: 2 });
    assert_eq!(state.border, 0);
    assert_eq!(state.turn, 0);
}

/// Walking into the closed ring is a wall crash.
#[test]
fn test_wall_after_shrink() {
    let engine = SquareDash::default();
    let mut state = engine.game_with_layout(board(&[], far_exit()), 7);
    state.border = 1;
    state.turn = 6;
    state.player = Position::new(1, 4);

    let outcome = engine.apply_move(&mut state, Direction::North);
    assert_eq!(outcome, MoveOutcome::Crashed { cause: CrashCause::Wall, lives_left: 2 });
}

/// The second cell of a slide is judged against the shrunken arena.
#[test]
fn test_slide_stops_at_wall() {
    let engine = SquareDash::default();
    let mut state = engine.game_with_layout(board(&[], far_exit()), 7);
    state.border = 1;
    state.turn = 6;
    state.player = Position::new(2, 4);

    let outcome = engine.apply_move(&mut state, Direction::North);

    assert!(matches!(outcome, MoveOutcome::Moved { slid: false, .. }));
    assert_eq!(state.player, Position::new(1, 4));
}

/// Three crashes end the game and freeze it.
#[test]
fn test_three_crashes_end_game() {
    let engine = SquareDash::default();
    let mut state = engine.game_with_layout(board(&[], far_exit()), 7);

    for expected_lives in [2, 1] {
        state.player = Position::new(0, 4);
        let outcome = engine.apply_move(&mut state, Direction::North);
        assert_eq!(outcome, MoveOutcome::Crashed { cause: CrashCause::Wall, lives_left: expected_lives });
        assert_eq!(state.phase, Phase::Playing);
    }

    state.player = Position::new(0, 4);
    let outcome = engine.apply_move(&mut state, Direction::North);
    assert_eq!(outcome, MoveOutcome::Eliminated { cause: CrashCause::Wall });
    assert_eq!(state.lives, 0);
    assert_eq!(state.phase, Phase::GameOver);

    let frozen = state.clone();
    for direction in Direction::ALL {
        assert!(matches!(engine.apply_move(&mut state, direction), MoveOutcome::Rejected { .. }));
    }
    assert_eq!(state, frozen);
}

/// Victory stops the clock.
#[test]
fn test_victory_freezes_state() {
    let engine = SquareDash::default();
    let mut state = engine.game_with_layout(board(&[], Position::new(4, 8)), 7);
    state.player = Position::new(4, 6);

    let outcome = engine.apply_move(&mut state, Direction::East);
    assert_eq!(outcome, MoveOutcome::Escaped { at: Position::new(4, 8) });
    assert_eq!(state.phase, Phase::Victory);

    let (next, outcome) = engine.next_state(&state, Direction::West);
    assert!(matches!(outcome, MoveOutcome::Rejected { .. }));
    assert_eq!(next.turn, state.turn);
    assert_eq!(next.border, state.border);
}

/// A one-cell stop on the exit also wins.
#[test]
fn test_exit_reached_on_first_step() {
    let engine = SquareDash::default();
    let mut state = engine.game_with_layout(board(&[], Position::new(0, 4)), 7);
    state.player = Position::new(1, 4);

    let outcome = engine.apply_move(&mut state, Direction::North);
    assert_eq!(outcome, MoveOutcome::Escaped { at: Position::new(0, 4) });
}

/// Same seed and same moves give the same game, respawns included.
#[test]
fn test_deterministic_replay() {
    let engine = SquareDash::default();
    let moves = [
        Direction::North,
        Direction::North,
        Direction::West,
        Direction::South,
        Direction::East,
        Direction::East,
        Direction::South,
        Direction::North,
    ];

    let play = |seed: u64| -> GameState {
        let mut state = engine.new_game(seed);
        for &d in &moves {
            engine.apply_move(&mut state, d);
        }
        state
    };

    assert_eq!(play(2024), play(2024));
}

/// History records every resolved move, crashes included.
#[test]
fn test_history() {
    let engine = SquareDash::default();
    let mut state = engine.game_with_layout(board(&[Position::new(3, 4)], far_exit()), 7);

    engine.apply_move(&mut state, Direction::North);

    let record = state.history.front().cloned();
    assert!(record.is_some_and(|r| r.kind == MoveKind::Crashed && r.turn == 0 && r.from == Position::new(4, 4)));
}

/// A crash message stays until the next successful move clears it.
#[test]
fn test_successful_move_clears_crash_message() {
    let engine = SquareDash::default();
    let mut state = engine.game_with_layout(board(&[], far_exit()), 7);
    state.player = Position::new(0, 4);

    engine.apply_move(&mut state, Direction::North);
    assert_eq!(state.message, "Crashed! Lives remaining: 2");

    // Respawn boards keep obstacles at least 3 cells from the center,
    // so every first step from there is clear on turn 0.
    assert_eq!(engine.safe_directions(&state).len(), 4);

    let outcome = engine.apply_move(&mut state, Direction::South);
    assert!(matches!(outcome, MoveOutcome::Moved { .. }));
    assert!(state.message.is_empty());
}

/// A fixed board survives uneventful moves unchanged.
#[test]
fn test_fixed_obstacles_kept_until_crash() {
    let engine = SquareDash::default();
    let obstacles = smallvec![Position::new(0, 0), Position::new(8, 0)];
    let layout = BoardLayout { obstacles, exit: far_exit() };
    let mut state = engine.game_with_layout(layout.clone(), 7);

    engine.apply_move(&mut state, Direction::East);
    assert_eq!(state.layout(), layout);
}
