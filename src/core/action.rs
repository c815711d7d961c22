//! Action vocabulary for grid pursuit games.
//!
//! An action is a compass move or `Stop`. The search core never
//! interprets actions: it only compares them and hands them back to the
//! game state that produced them.

use serde::{Deserialize, Serialize};

use super::position::Position;

/// A single move on the grid.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    /// Move one cell up (`y + 1`).
    North,
    /// Move one cell down (`y - 1`).
    South,
    /// Move one cell right (`x + 1`).
    East,
    /// Move one cell left (`x - 1`).
    West,
    /// Stay in place.
    Stop,
}

impl Direction {
    /// The four moving directions (no `Stop`), in the order legal
    /// action lists follow.
    pub const MOVES: [Direction; 4] = [
        Direction::North,
        Direction::South,
        Direction::East,
        Direction::West,
    ];

    /// The `(dx, dy)` offset of this move.
    #[must_use]
    pub const fn delta(self) -> (i32, i32) {
        match self {
            Direction::North => (0, 1),
            Direction::South => (0, -1),
            Direction::East => (1, 0),
            Direction::West => (-1, 0),
            Direction::Stop => (0, 0),
        }
    }

    /// Apply this move to a position.
    #[must_use]
    pub fn apply(self, from: Position) -> Position {
        let (dx, dy) = self.delta();
        Position::new(from.x + dx, from.y + dy)
    }
}

impl std::fmt::Display for Direction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Direction::North => "North",
            Direction::South => "South",
            Direction::East => "East",
            Direction::West => "West",
            Direction::Stop => "Stop",
        };
        f.write_str(name)
    }
}
