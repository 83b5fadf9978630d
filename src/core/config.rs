//! Arena configuration.
//!
//! The default configuration is the standard game: a 9×9 grid, 3 lives,
//! 6 obstacles kept at least 3 steps from the start, and an arena that
//! shrinks by one ring every 5 turns.
//!
//! Custom configurations go through the `with_*` builder methods and are
//! checked by [`ArenaConfig::validate`] before an engine accepts them.

use serde::{Deserialize, Serialize};

use super::error::ConfigError;
use super::position::Position;

/// Default grid side length.
pub const GRID_SIZE: u32 = 9;
/// Lives at the start of a new game.
pub const INITIAL_LIVES: u32 = 3;
/// Turns between arena shrinks.
pub const ARENA_SHRINK_INTERVAL: u32 = 5;
/// Obstacles placed per board.
pub const NUM_OBSTACLES: usize = 6;
/// Minimum Manhattan distance from an obstacle to the starting cell.
pub const MIN_OBSTACLE_DISTANCE: u32 = 3;
/// Random draws allowed per obstacle before falling back to enumeration.
pub const PLACEMENT_RETRY_CAP: u32 = 10_000;

/// Complete arena configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArenaConfig {
    /// Cells per side (odd, so there is a true center).
    pub grid_size: u32,

    /// Lives granted by a new game.
    pub initial_lives: u32,

    /// The arena loses one ring every `shrink_interval` turns.
    pub shrink_interval: u32,

    /// Obstacles per board.
    pub obstacle_count: usize,

    /// Obstacles keep at least this Manhattan distance from the center.
    pub min_obstacle_distance: u32,

    /// Rejection-sampling budget per obstacle.
    pub placement_retry_cap: u32,
}

impl Default for ArenaConfig {
    fn default() -> Self {
        Self {
            grid_size: GRID_SIZE,
            initial_lives: INITIAL_LIVES,
            shrink_interval: ARENA_SHRINK_INTERVAL,
            obstacle_count: NUM_OBSTACLES,
            min_obstacle_distance: MIN_OBSTACLE_DISTANCE,
            placement_retry_cap: PLACEMENT_RETRY_CAP,
        }
    }
}

impl ArenaConfig {
    /// Standard game configuration.
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_grid_size(mut self, size: u32) -> Self {
        self.grid_size = size;
        self
    }

    #[must_use]
    pub fn with_initial_lives(mut self, lives: u32) -> Self {
        self.initial_lives = lives;
        self
    }

    #[must_use]
    pub fn with_shrink_interval(mut self, turns: u32) -> Self {
        self.shrink_interval = turns;
        self
    }

    #[must_use]
    pub fn with_obstacle_count(mut self, count: usize) -> Self {
        self.obstacle_count = count;
        self
    }

    #[must_use]
    pub fn with_min_obstacle_distance(mut self, distance: u32) -> Self {
        self.min_obstacle_distance = distance;
        self
    }

    #[must_use]
    pub fn with_placement_retry_cap(mut self, cap: u32) -> Self {
        self.placement_retry_cap = cap;
        self
    }

    /// Grid side as a signed coordinate bound.
    #[must_use]
    pub fn size(&self) -> i32 {
        self.grid_size as i32
    }

    /// Starting cell for the player.
    #[must_use]
    pub fn center(&self) -> Position {
        Position::center(self.size())
    }

    /// Cells far enough from the center to hold an obstacle.
    pub fn obstacle_candidates(&self) -> impl Iterator<Item = Position> + '_ {
        let size = self.size();
        let center = self.center();
        (0..size)
            .flat_map(move |row| (0..size).map(move |col| Position::new(row, col)))
            .filter(move |p| p.manhattan(center) >= self.min_obstacle_distance)
    }

    /// Every cell on the outer ring, each listed once.
    #[must_use]
    pub fn perimeter(&self) -> Vec<Position> {
        let last = self.size() - 1;
        (0..self.size())
            .flat_map(|row| (0..self.size()).map(move |col| Position::new(row, col)))
            .filter(|p| p.row == 0 || p.row == last || p.col == 0 || p.col == last)
            .collect()
    }

    /// Check that a board can always be generated from this configuration.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.grid_size < 5 || self.grid_size % 2 == 0 {
            return Err(ConfigError::GridSize(self.grid_size));
        }
        if self.initial_lives == 0 {
            return Err(ConfigError::NoLives);
        }
        if self.shrink_interval == 0 {
            return Err(ConfigError::ShrinkInterval);
        }
        if self.placement_retry_cap == 0 {
            return Err(ConfigError::RetryCap);
        }

        let available = self.obstacle_candidates().count();
        if self.obstacle_count > available {
            return Err(ConfigError::TooManyObstacles {
                requested: self.obstacle_count,
                available,
            });
        }
        if self.obstacle_count >= self.perimeter().len() {
            return Err(ConfigError::NoExitCell);
        }

        Ok(())
    }
}
