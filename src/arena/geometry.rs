//! Arena bounds, walls, and danger pulses.
//!
//! The live arena is the square of cells whose row and column both lie in
//! `[border, size - 1 - border]`. Everything outside it is wall.
//!
//! Obstacles pulse on even turns after the first: every cell sharing an
//! edge with an obstacle inside the live arena becomes impassable for
//! that turn.

use rustc_hash::FxHashSet;

use crate::core::{ArenaConfig, GameState, Position};

/// The live region of the grid for a given border width.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ArenaBounds {
    size: i32,
    border: i32,
}

impl ArenaBounds {
    #[must_use]
    pub fn new(size: u32, border: u32) -> Self {
        Self {
            size: size as i32,
            border: border as i32,
        }
    }

    /// Bounds for the state's current border.
    #[must_use]
    pub fn of(state: &GameState, config: &ArenaConfig) -> Self {
        Self::new(config.grid_size, state.border)
    }

    /// Smallest live row/column index.
    #[must_use]
    pub fn min(&self) -> i32 {
        self.border
    }

    /// Largest live row/column index.
    #[must_use]
    pub fn max(&self) -> i32 {
        self.size - 1 - self.border
    }

    /// Is the cell inside the live arena?
    #[must_use]
    pub fn contains(&self, pos: Position) -> bool {
        (self.min()..=self.max()).contains(&pos.row) && (self.min()..=self.max()).contains(&pos.col)
    }

    /// True if no live cells remain.
    #[must_use]
    pub fn is_collapsed(&self) -> bool {
        self.min() > self.max()
    }

    /// Grid cells outside the live arena, row-major.
    pub fn walls(&self) -> impl Iterator<Item = Position> + '_ {
        let size = self.size;
        (0..size)
            .flat_map(move |row| (0..size).map(move |col| Position::new(row, col)))
            .filter(move |&p| !self.contains(p))
    }
}

/// Obstacles pulse on even turns, never on turn 0.
#[must_use]
pub fn pulses_active(turn: u32) -> bool {
    turn > 0 && turn % 2 == 0
}

/// Obstacles that are still inside the live arena.
pub fn live_obstacles<'a>(state: &'a GameState, config: &ArenaConfig) -> impl Iterator<Item = Position> + 'a {
    let bounds = ArenaBounds::of(state, config);
    state.obstacles.iter().copied().filter(move |&o| bounds.contains(o))
}

/// Is this cell hit by a pulse at the state's current turn?
#[must_use]
pub fn is_pulsing(state: &GameState, config: &ArenaConfig, pos: Position) -> bool {
    pulses_active(state.turn) && live_obstacles(state, config).any(|o| o.is_adjacent(pos))
}

/// Every on-grid cell hit by a pulse at the current turn.
///
/// Empty on turns where pulses are inactive.
#[must_use]
pub fn pulsing_cells(state: &GameState, config: &ArenaConfig) -> FxHashSet<Position> {
    if !pulses_active(state.turn) {
        return FxHashSet::default();
    }

    let grid = ArenaBounds::new(config.grid_size, 0);
    live_obstacles(state, config)
        .flat_map(|o| o.neighbors())
        .filter(|&p| grid.contains(p))
        .collect()
}

/// Can the player not enter this cell? Walls, obstacles, and pulses block.
#[must_use]
pub fn is_blocked(state: &GameState, config: &ArenaConfig, pos: Position) -> bool {
    !ArenaBounds::of(state, config).contains(pos) || state.has_obstacle(pos) || is_pulsing(state, config, pos)
}
