//! Text command input.
//!
//! The only command is `move X` with X one of `n`, `s`, `e`, `w`, in any
//! case, with surrounding whitespace ignored. Anything else is rejected
//! before the engine sees it.

use crate::core::{CommandError, Direction};

/// Parse a `move X` command into a direction.
///
/// ```
/// use square_dash::command::parse_command;
/// use square_dash::core::Direction;
///
/// assert_eq!(parse_command("  Move N "), Ok(Direction::North));
/// assert!(parse_command("move north").is_err());
/// ```
pub fn parse_command(input: &str) -> Result<Direction, CommandError> {
    let normalized = input.trim().to_lowercase();

    let Some(rest) = normalized.strip_prefix("move ") else {
        return Err(CommandError::Malformed(input.trim().to_string()));
    };

    let mut chars = rest.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => Direction::from_char(c).ok_or(CommandError::UnknownDirection(c)),
        _ => Err(CommandError::Malformed(input.trim().to_string())),
    }
}
