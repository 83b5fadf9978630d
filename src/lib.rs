//! # square-dash
//!
//! A turn-based grid dodging game. The player slides toward an exit on
//! the edge of a 9×9 arena while obstacles pulse and the walls close in.
//!
//! ## Design Principles
//!
//! 1. **Explicit State**: No globals. A `GameState` is owned by the caller
//!    and every transition is a function of (state, direction).
//!
//! 2. **Deterministic**: All randomness flows through a seeded `GameRng`
//!    carried in the state, so a seed and a move list replay exactly.
//!
//! 3. **Presentation Derived**: Front ends draw from a `ViewModel` built
//!    after each transition and never touch the rules.
//!
//! ## Modules
//!
//! - `core`: Positions, directions, RNG, configuration, errors, state
//! - `arena`: Live-arena bounds, pulses, board generation
//! - `rules`: RulesEngine trait and move outcomes
//! - `games`: The Square Dash engine
//! - `command`: `move X` text command parsing
//! - `view`: Read-only projection for rendering
//! - `session`: Start/restart and input handling for one player

pub mod core;
pub mod arena;
pub mod rules;
pub mod games;
pub mod command;
pub mod view;
pub mod session;

// Re-export commonly used types
pub use crate::core::{
    ArenaConfig, BoardLayout, CommandError, ConfigError, Direction, DirectionError,
    GameRng, GameRngState, GameState, MoveKind, MoveRecord, Phase, Position,
};

pub use crate::arena::ArenaBounds;

pub use crate::rules::{CrashCause, GameResult, MoveOutcome, RejectReason, RulesEngine};

pub use crate::games::square_dash::SquareDash;

pub use crate::command::parse_command;
pub use crate::view::{Cell, ViewModel};
pub use crate::session::Session;
