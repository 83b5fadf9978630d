//! Grid coordinates and movement directions.
//!
//! ## Position
//!
//! Row/column pair, 0-indexed from the top-left corner. Coordinates are
//! signed so a step off the edge of the grid is still representable and
//! can be rejected by the arena bounds check.
//!
//! ## Direction
//!
//! The four compass moves. Parsing is case-insensitive and accepts both
//! the single-letter and the full-name forms.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use std::str::FromStr;

use super::error::DirectionError;

/// A cell on the grid.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Position {
    pub row: i32,
    pub col: i32,
}

impl Position {
    /// Create a new position.
    #[must_use]
    pub const fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }

    /// Center cell of a square grid of `size` cells per side.
    ///
    /// ```
    /// use square_dash::core::Position;
    ///
    /// assert_eq!(Position::center(9), Position::new(4, 4));
    /// ```
    #[must_use]
    pub const fn center(size: i32) -> Self {
        Self::new(size / 2, size / 2)
    }

    /// Step one cell in `direction`.
    #[must_use]
    pub const fn step(self, direction: Direction) -> Self {
        let (dr, dc) = direction.vector();
        Self::new(self.row + dr, self.col + dc)
    }

    /// Manhattan distance to another cell.
    #[must_use]
    pub const fn manhattan(self, other: Position) -> u32 {
        self.row.abs_diff(other.row) + self.col.abs_diff(other.col)
    }

    /// True if `other` shares an edge with this cell.
    #[must_use]
    pub const fn is_adjacent(self, other: Position) -> bool {
        self.manhattan(other) == 1
    }

    /// The four orthogonal neighbours (N, S, W, E order).
    ///
    /// Neighbours may lie off the grid; callers filter by bounds.
    #[must_use]
    pub fn neighbors(self) -> SmallVec<[Position; 4]> {
        Direction::ALL.iter().map(|&d| self.step(d)).collect()
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// Compass direction for a move.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    North,
    South,
    West,
    East,
}

impl Direction {
    /// All directions, in N, S, W, E order.
    pub const ALL: [Direction; 4] = [Direction::North, Direction::South, Direction::West, Direction::East];

    /// Unit vector as (row delta, col delta).
    #[must_use]
    pub const fn vector(self) -> (i32, i32) {
        match self {
            Direction::North => (-1, 0),
            Direction::South => (1, 0),
            Direction::West => (0, -1),
            Direction::East => (0, 1),
        }
    }

    /// Parse a single direction letter (`n`, `s`, `e`, `w`, any case).
    #[must_use]
    pub fn from_char(c: char) -> Option<Self> {
        match c.to_ascii_lowercase() {
            'n' => Some(Direction::North),
            's' => Some(Direction::South),
            'w' => Some(Direction::West),
            'e' => Some(Direction::East),
            _ => None,
        }
    }

    /// Single uppercase letter for display.
    #[must_use]
    pub const fn letter(self) -> char {
        match self {
            Direction::North => 'N',
            Direction::South => 'S',
            Direction::West => 'W',
            Direction::East => 'E',
        }
    }
}

impl FromStr for Direction {
    type Err = DirectionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let mut chars = trimmed.chars();
        if let (Some(c), None) = (chars.next(), chars.next()) {
            return Direction::from_char(c).ok_or_else(|| DirectionError(trimmed.to_string()));
        }

        match trimmed.to_ascii_lowercase().as_str() {
            "north" => Ok(Direction::North),
            "south" => Ok(Direction::South),
            "west" => Ok(Direction::West),
            "east" => Ok(Direction::East),
            _ => Err(DirectionError(trimmed.to_string())),
        }
    }
}

impl std::fmt::Display for Direction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.letter())
    }
}
