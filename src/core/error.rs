//! Error types.
//!
//! Every error here is user-facing and non-fatal: a rejected command or
//! direction leaves the game untouched, and a bad configuration is caught
//! before any game is created.

use thiserror::Error;

/// A direction string that is not one of N, S, E, W.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("Invalid direction '{0}'. Use N, S, E, or W.")]
pub struct DirectionError(pub String);

/// A text command that does not have the `move X` shape.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum CommandError {
    /// Input is not `move ` followed by a single letter.
    #[error("Invalid command. Use \"move N\", \"move S\", \"move E\", or \"move W\".")]
    Malformed(String),

    /// Shape is right but the letter is not a direction.
    #[error("Invalid command. Use \"move N\", \"move S\", \"move E\", or \"move W\".")]
    UnknownDirection(char),
}

/// Rejected arena configuration.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("grid size must be odd and at least 5, got {0}")]
    GridSize(u32),

    #[error("initial lives must be at least 1")]
    NoLives,

    #[error("arena shrink interval must be at least 1")]
    ShrinkInterval,

    #[error("placement retry cap must be at least 1")]
    RetryCap,

    #[error("{requested} obstacles requested but only {available} cells are eligible")]
    TooManyObstacles { requested: usize, available: usize },

    #[error("obstacles would cover the entire perimeter, leaving no cell for the exit")]
    NoExitCell,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_command_error_message() {
        let err = CommandError::Malformed("jump".to_string());
        assert!(err.to_string().starts_with("Invalid command."));
        assert_eq!(err.to_string(), CommandError::UnknownDirection('x').to_string());
    }

    #[test]
    fn test_config_error_message() {
        let err = ConfigError::TooManyObstacles { requested: 90, available: 68 };
        assert_eq!(err.to_string(), "90 obstacles requested but only 68 cells are eligible");
    }
}
