//! Rules engine trait and move results.
//!
//! Engines implement `RulesEngine` to define:
//! - How a new board is laid out
//! - How a move modifies state
//! - When the game ends
//!
//! Front ends call into `RulesEngine` and read back `MoveOutcome`s; they
//! never resolve movement themselves.

pub mod engine;

pub use engine::{CrashCause, GameResult, MoveOutcome, RejectReason, RulesEngine};
