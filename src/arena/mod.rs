//! Arena geometry and board generation.
//!
//! - `geometry`: live-arena bounds, walls, pulse rule
//! - `placement`: random obstacle and exit layout

pub mod geometry;
pub mod placement;

pub use geometry::{is_blocked, is_pulsing, live_obstacles, pulses_active, pulsing_cells, ArenaBounds};
pub use placement::{generate_layout, place_exit, place_obstacles};
