use crate::error::{Expectation, RobotError};
use std::fmt;
use std::str::FromStr;

/// Compass direction a robot can face.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    North,
    East,
    South,
    West,
}

/// Directions in clockwise order. Turning right walks forward, turning left walks back.
const CLOCKWISE: [Direction; 4] = [
    Direction::North,
    Direction::East,
    Direction::South,
    Direction::West,
];

impl Direction {
    /// All four directions, clockwise from north.
    pub fn all() -> [Direction; 4] {
        CLOCKWISE
    }

    fn index(self) -> usize {
        self as usize
    }

    /// The direction 90 degrees counter-clockwise.
    pub fn left(self) -> Direction {
        CLOCKWISE[(self.index() + CLOCKWISE.len() - 1) % CLOCKWISE.len()]
    }

    /// The direction 90 degrees clockwise.
    pub fn right(self) -> Direction {
        CLOCKWISE[(self.index() + 1) % CLOCKWISE.len()]
    }

    /// Unit step `(dx, dy)` taken when moving forward.
    pub fn step(self) -> (i64, i64) {
        match self {
            Direction::North => (0, 1),
            Direction::East => (1, 0),
            Direction::South => (0, -1),
            Direction::West => (-1, 0),
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Direction::North => "NORTH",
            Direction::East => "EAST",
            Direction::South => "SOUTH",
            Direction::West => "WEST",
        }
    }
}

impl FromStr for Direction {
    type Err = RobotError;

    /// Case-sensitive, full names only.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        CLOCKWISE
            .into_iter()
            .find(|d| d.as_str() == s)
            .ok_or_else(|| RobotError::invalid(Expectation::Direction, s))
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
