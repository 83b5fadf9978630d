//! Core engine types: positions, RNG, configuration, errors, state.
//!
//! This module holds the data the game runs on. Rules that act on it
//! live in `arena`, `rules` and `games`.

pub mod position;
pub mod rng;
pub mod config;
pub mod error;
pub mod state;

pub use position::{Direction, Position};
pub use rng::{GameRng, GameRngState};
pub use config::{
    ArenaConfig, ARENA_SHRINK_INTERVAL, GRID_SIZE, INITIAL_LIVES, MIN_OBSTACLE_DISTANCE,
    NUM_OBSTACLES, PLACEMENT_RETRY_CAP,
};
pub use error::{CommandError, ConfigError, DirectionError};
pub use state::{BoardLayout, GameState, MoveKind, MoveRecord, Obstacles, Phase};
