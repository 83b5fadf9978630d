//! Rules engine trait for the turn loop.
//!
//! An engine defines:
//! - How a new game is laid out
//! - How a move changes state
//! - When the game is over

use serde::{Deserialize, Serialize};

use crate::core::{ArenaConfig, Direction, GameRng, GameState, Phase, Position};

/// Result of a completed game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameResult {
    /// Player reached the exit.
    Escaped,
    /// Player ran out of lives.
    Crushed,
}

/// What ended a move in a crash.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CrashCause {
    /// First step left the live arena.
    Wall,
    /// First step hit an obstacle.
    Obstacle,
    /// First step landed on a pulsing cell.
    Pulse,
    /// The arena closed in over the player after the move.
    Shrink,
}

impl std::fmt::Display for CrashCause {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            CrashCause::Wall => "wall",
            CrashCause::Obstacle => "obstacle",
            CrashCause::Pulse => "pulse",
            CrashCause::Shrink => "shrinking arena",
        };
        f.write_str(name)
    }
}

/// Why a move was not attempted.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum RejectReason {
    /// No game is in progress.
    NotStarted,
    /// The game already ended.
    GameFinished,
}

/// Result of a single move.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum MoveOutcome {
    /// The player moved; `slid` is true for the full two-cell slide.
    Moved {
        from: Position,
        to: Position,
        slid: bool,
        /// The arena closed in by one ring after this move.
        shrunk: bool,
    },
    /// The player crashed and a new board was laid out.
    Crashed { cause: CrashCause, lives_left: u32 },
    /// The player reached the exit.
    Escaped { at: Position },
    /// The player crashed with no lives left.
    Eliminated { cause: CrashCause },
    /// Nothing happened; the state is unchanged.
    Rejected { reason: RejectReason },
}

impl MoveOutcome {
    /// Did this move cost a life?
    #[must_use]
    pub fn is_crash(&self) -> bool {
        matches!(self, MoveOutcome::Crashed { .. } | MoveOutcome::Eliminated { .. })
    }
}

/// Rules engine trait.
///
/// ## Implementation Notes
///
/// - `new_game`: Must be a pure function of the RNG
/// - `apply_move`: Must be deterministic given the state (including its RNG)
/// - `is_terminal`: Return None if the game continues
pub trait RulesEngine {
    /// Get the arena configuration.
    fn config(&self) -> &ArenaConfig;

    /// Lay out a new game with full lives, drawing from `rng`.
    fn new_game_with_rng(&self, rng: GameRng) -> GameState;

    /// Resolve a move in place.
    fn apply_move(&self, state: &mut GameState, direction: Direction) -> MoveOutcome;

    /// Check if the game is over.
    fn is_terminal(&self, state: &GameState) -> Option<GameResult>;

    // === Convenience Methods ===

    /// Lay out a new game from a seed.
    fn new_game(&self, seed: u64) -> GameState {
        self.new_game_with_rng(GameRng::new(seed))
    }

    /// Resolve a move without touching the input state.
    fn next_state(&self, state: &GameState, direction: Direction) -> (GameState, MoveOutcome) {
        let mut next = state.clone();
        let outcome = self.apply_move(&mut next, direction);
        (next, outcome)
    }

    /// Directions a move may be attempted in: all four while playing,
    /// none before the game starts or after it ends.
    fn legal_directions(&self, state: &GameState) -> Vec<Direction> {
        if state.phase != Phase::Playing {
            return vec![];
        }
        Direction::ALL.to_vec()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_crash() {
        assert!(MoveOutcome::Crashed { cause: CrashCause::Wall, lives_left: 2 }.is_crash());
        assert!(MoveOutcome::Eliminated { cause: CrashCause::Pulse }.is_crash());
        assert!(!MoveOutcome::Escaped { at: Position::new(0, 4) }.is_crash());
        assert!(!MoveOutcome::Rejected { reason: RejectReason::GameFinished }.is_crash());
    }

    #[test]
    fn test_crash_cause_display() {
        assert_eq!(CrashCause::Shrink.to_string(), "shrinking arena");
        assert_eq!(CrashCause::Obstacle.to_string(), "obstacle");
    }
}
