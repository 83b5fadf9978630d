//! Game state for a single game.
//!
//! ## GameState
//!
//! Everything a move needs to resolve:
//! - Player, obstacles, exit
//! - Turn counter, lives, arena border
//! - Phase and the user-facing message
//! - RNG for respawn boards
//! - Move history
//!
//! Uses an `im` vector for history so cloning a state for a pure
//! transition stays O(1) in history length.

use im::Vector;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::config::ArenaConfig;
use super::position::{Direction, Position};
use super::rng::GameRng;

/// Obstacle storage. Sized for the standard six without heap allocation.
pub type Obstacles = SmallVec<[Position; 8]>;

/// Lifecycle phase of a game.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Phase {
    /// No game has been started yet.
    #[default]
    NotStarted,
    /// Moves are accepted.
    Playing,
    /// All lives lost.
    GameOver,
    /// Player reached the exit.
    Victory,
}

impl Phase {
    /// True once the game has ended, either way.
    #[must_use]
    pub fn is_terminal(self) -> bool {
        matches!(self, Phase::GameOver | Phase::Victory)
    }
}

impl std::fmt::Display for Phase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Phase::NotStarted => "not started",
            Phase::Playing => "playing",
            Phase::GameOver => "game over",
            Phase::Victory => "victory",
        };
        f.write_str(name)
    }
}

/// Obstacle and exit placement for one board.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardLayout {
    pub obstacles: Obstacles,
    pub exit: Position,
}

/// How a recorded move ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MoveKind {
    /// Stopped after one cell.
    Stepped,
    /// Full two-cell slide.
    Slid,
    /// Reached the exit.
    Escaped,
    /// Crashed and respawned on a new board.
    Crashed,
    /// Crashed on the last life.
    Eliminated,
}

impl MoveKind {
    /// Did this move cost a life?
    #[must_use]
    pub fn is_crash(self) -> bool {
        matches!(self, MoveKind::Crashed | MoveKind::Eliminated)
    }
}

/// One resolved move attempt.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveRecord {
    /// Turn counter before the move.
    pub turn: u32,
    pub direction: Direction,
    /// Player position before the move.
    pub from: Position,
    /// Player position after the move (the center again after a respawn).
    pub to: Position,
    pub kind: MoveKind,
}

/// Complete state of one game.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    /// Player cell.
    pub player: Position,

    /// Distinct obstacle cells.
    pub obstacles: Obstacles,

    /// Exit cell, on the original perimeter.
    pub exit: Position,

    /// Successful moves since the current board was laid out.
    pub turn: u32,

    /// Remaining lives.
    pub lives: u32,

    /// Rings of wall closed in from each edge.
    pub border: u32,

    pub phase: Phase,

    /// Message for the player; empty after an uneventful move.
    pub message: String,

    /// Deterministic RNG used for respawn boards.
    pub rng: GameRng,

    /// Every resolved move of this game, across respawns.
    pub history: Vector<MoveRecord>,
}

impl GameState {
    /// Create a state for a new game on the given board.
    #[must_use]
    pub fn new(config: &ArenaConfig, layout: BoardLayout, rng: GameRng) -> Self {
        Self {
            player: config.center(),
            obstacles: layout.obstacles,
            exit: layout.exit,
            turn: 0,
            lives: config.initial_lives,
            border: 0,
            phase: Phase::Playing,
            message: String::new(),
            rng,
            history: Vector::new(),
        }
    }

    /// Replace the board after a crash, keeping lives and history.
    pub fn respawn(&mut self, config: &ArenaConfig, layout: BoardLayout) {
        self.player = config.center();
        self.obstacles = layout.obstacles;
        self.exit = layout.exit;
        self.turn = 0;
        self.border = 0;
        self.phase = Phase::Playing;
    }

    /// Is there an obstacle on this cell?
    #[must_use]
    pub fn has_obstacle(&self, pos: Position) -> bool {
        self.obstacles.contains(&pos)
    }

    /// Current board as a layout.
    #[must_use]
    pub fn layout(&self) -> BoardLayout {
        BoardLayout {
            obstacles: self.obstacles.clone(),
            exit: self.exit,
        }
    }

    #[must_use]
    pub fn is_terminal(&self) -> bool {
        self.phase.is_terminal()
    }

    /// Record a move in history.
    pub fn record_move(&mut self, record: MoveRecord) {
        self.history.push_back(record);
    }
}
