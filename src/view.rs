//! Read-only projection of a game for front ends.
//!
//! A front end calls [`ViewModel::from_state`] after every transition and
//! draws from the result. Nothing here feeds back into the engine.

use serde::Serialize;

use crate::arena::{live_obstacles, pulses_active, pulsing_cells, ArenaBounds};
use crate::core::{ArenaConfig, GameState, Phase, Position};

/// What to draw in one grid cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub enum Cell {
    Empty,
    Wall,
    Obstacle,
    Pulse,
    Exit,
    Player,
}

/// Everything a front end needs to draw one frame.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ViewModel {
    pub grid_size: u32,
    /// Cells closed off by the shrinking arena.
    pub walls: Vec<Position>,
    /// Obstacles still inside the arena.
    pub obstacles: Vec<Position>,
    /// Open arena cells hit by a pulse this turn.
    pub pulsing: Vec<Position>,
    /// Hidden once the arena closes over it.
    pub exit: Option<Position>,
    /// Hidden when outside the arena.
    pub player: Option<Position>,
    pub turn: u32,
    pub lives: u32,
    pub phase: Phase,
    pub message: String,
    /// Obstacles are pulsing this turn.
    pub pulses_active: bool,
    /// The arena closed in on the last move.
    pub arena_shrinking: bool,
}

impl ViewModel {
    /// Project a game state.
    #[must_use]
    pub fn from_state(state: &GameState, config: &ArenaConfig) -> Self {
        let bounds = ArenaBounds::of(state, config);

        let mut pulsing: Vec<Position> = pulsing_cells(state, config)
            .into_iter()
            .filter(|&p| bounds.contains(p) && !state.has_obstacle(p))
            .collect();
        pulsing.sort();

        let visible = |p: Position| bounds.contains(p).then_some(p);

        Self {
            grid_size: config.grid_size,
            walls: bounds.walls().collect(),
            obstacles: live_obstacles(state, config).collect(),
            pulsing,
            exit: visible(state.exit),
            player: visible(state.player),
            turn: state.turn,
            lives: state.lives,
            phase: state.phase,
            message: state.message.clone(),
            pulses_active: pulses_active(state.turn),
            arena_shrinking: state.turn > 0 && state.turn % config.shrink_interval == 0,
        }
    }

    /// View before any game has started.
    #[must_use]
    pub fn not_started(config: &ArenaConfig, message: impl Into<String>) -> Self {
        Self {
            grid_size: config.grid_size,
            walls: Vec::new(),
            obstacles: Vec::new(),
            pulsing: Vec::new(),
            exit: None,
            player: None,
            turn: 0,
            lives: config.initial_lives,
            phase: Phase::NotStarted,
            message: message.into(),
            pulses_active: false,
            arena_shrinking: false,
        }
    }

    /// Row-major cell grid. Later layers win: wall, obstacle, pulse,
    /// exit, player.
    #[must_use]
    pub fn cells(&self) -> Vec<Vec<Cell>> {
        let size = self.grid_size as usize;
        let mut grid = vec![vec![Cell::Empty; size]; size];

        let mut paint = |p: Position, cell: Cell| {
            if let (Ok(r), Ok(c)) = (usize::try_from(p.row), usize::try_from(p.col)) {
                if r < size && c < size {
                    grid[r][c] = cell;
                }
            }
        };

        for &p in &self.walls {
            paint(p, Cell::Wall);
        }
        for &p in &self.obstacles {
            paint(p, Cell::Obstacle);
        }
        for &p in &self.pulsing {
            paint(p, Cell::Pulse);
        }
        if let Some(p) = self.exit {
            paint(p, Cell::Exit);
        }
        if let Some(p) = self.player {
            paint(p, Cell::Player);
        }

        grid
    }
}
