//! Square Dash: reach the exit of a shrinking arena.
//!
//! - The player starts in the center with 3 lives
//! - Each move slides up to two cells in one direction
//! - Obstacles pulse on even turns, blocking their four neighbours
//! - The arena loses its outer ring every 5 turns
//! - A crash costs a life and lays out a new board

mod game;

pub use game::{SquareDash, GAME_OVER_MESSAGE, VICTORY_MESSAGE};
