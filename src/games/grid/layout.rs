//! Text layouts for the grid world.
//!
//! ```text
//! %%%%%%%
//! %P . o%
//! % %%% %
//! %.  G.%
//! %%%%%%%
//! ```
//!
//! `%` wall, `.` food, `o` capsule, `P` maximizer, `G` adversary,
//! space empty. The first text row is the top of the board; `y` grows
//! upward. Cells outside the board count as walls.

use std::str::FromStr;

use rustc_hash::FxHashSet;
use smallvec::SmallVec;

use crate::core::{Direction, Position, MAX_AGENTS};
use crate::error::LayoutError;

/// Static board description: walls and starting positions.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Layout {
    width: i32,
    height: i32,
    walls: FxHashSet<Position>,
    food: Vec<Position>,
    capsules: Vec<Position>,
    maximizer: Position,
    adversaries: Vec<Position>,
}

impl Layout {
    /// Parse a layout from its text form.
    pub fn parse(text: &str) -> Result<Self, LayoutError> {
        let rows: Vec<&str> = text
            .lines()
            .map(|line| line.trim_end_matches('\r'))
            .skip_while(|line| line.trim().is_empty())
            .collect();
        let rows: Vec<&str> = match rows.iter().rposition(|line| !line.trim().is_empty()) {
            Some(last) => rows[..=last].to_vec(),
            None => return Err(LayoutError::Empty),
        };

        let width = rows[0].chars().count();
        let height = rows.len();

        let mut walls = FxHashSet::default();
        let mut food = Vec::new();
        let mut capsules = Vec::new();
        let mut maximizer = None;
        let mut adversaries = Vec::new();

        for (row, line) in rows.iter().enumerate() {
            let got = line.chars().count();
            if got != width {
                return Err(LayoutError::RaggedRow {
                    row,
                    expected: width,
                    got,
                });
            }

            let y = (height - 1 - row) as i32;
            for (column, character) in line.chars().enumerate() {
                let pos = Position::new(column as i32, y);
                match character {
                    '%' => {
                        walls.insert(pos);
                    }
                    '.' => food.push(pos),
                    'o' => capsules.push(pos),
                    'P' => {
                        if maximizer.replace(pos).is_some() {
                            return Err(LayoutError::MultipleMaximizers);
                        }
                    }
                    'G' => adversaries.push(pos),
                    ' ' => {}
                    _ => {
                        return Err(LayoutError::InvalidCharacter {
                            character,
                            row,
                            column,
                        })
                    }
                }
            }
        }

        let max = MAX_AGENTS - 1;
        if adversaries.len() > max {
            return Err(LayoutError::TooManyAdversaries {
                count: adversaries.len(),
                max,
            });
        }

        // Adversaries are numbered in reading order, top-left first.
        Ok(Self {
            width: width as i32,
            height: height as i32,
            walls,
            food,
            capsules,
            maximizer: maximizer.ok_or(LayoutError::MissingMaximizer)?,
            adversaries,
        })
    }

    /// Board width in cells.
    #[must_use]
    pub fn width(&self) -> i32 {
        self.width
    }

    /// Board height in cells.
    #[must_use]
    pub fn height(&self) -> i32 {
        self.height
    }

    /// Whether `pos` is blocked (walls and anything off the board).
    #[must_use]
    pub fn is_wall(&self, pos: Position) -> bool {
        pos.x < 0
            || pos.y < 0
            || pos.x >= self.width
            || pos.y >= self.height
            || self.walls.contains(&pos)
    }

    /// Moving directions from `pos` that do not hit a wall.
    #[must_use]
    pub fn open_moves(&self, pos: Position) -> SmallVec<[Direction; 5]> {
        Direction::MOVES
            .into_iter()
            .filter(|dir| !self.is_wall(dir.apply(pos)))
            .collect()
    }

    /// Starting food positions.
    #[must_use]
    pub fn food(&self) -> &[Position] {
        &self.food
    }

    /// Starting capsule positions.
    #[must_use]
    pub fn capsules(&self) -> &[Position] {
        &self.capsules
    }

    /// Maximizer start.
    #[must_use]
    pub fn maximizer(&self) -> Position {
        self.maximizer
    }

    /// Adversary starts, in agent order (agent 1 first).
    #[must_use]
    pub fn adversaries(&self) -> &[Position] {
        &self.adversaries
    }
}

impl FromStr for Layout {
    type Err = LayoutError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}
