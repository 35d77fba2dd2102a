use crate::direction::Direction;
use crate::error::{Expectation, RobotError};
use crate::table::{integer_literal, magnitude};
use std::fmt::{self, Display};

/// Position and heading of a robot.
///
/// Offsets are non-negative; whether they fit a particular table is checked by
/// [`Robot::place`](crate::Robot::place), not here. A placement is never edited in
/// place: every change of robot state produces a new one.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Placement {
    x: u32,
    y: u32,
    direction: Direction,
}

impl Placement {
    /// Build a placement from raw values.
    ///
    /// `x` and `y` are rendered to text and must be integer literals whose value is at
    /// least zero; values beyond `u32::MAX` saturate there. `direction` must be exactly
    /// `NORTH`, `EAST`, `SOUTH` or `WEST`.
    /// Validation runs in argument order and stops at the first bad value.
    pub fn new(x: impl Display, y: impl Display, direction: impl Display) -> Result<Self, RobotError> {
        let x = validate_offset(x)?;
        let y = validate_offset(y)?;
        let direction = direction.to_string().parse()?;
        Ok(Self::at(x, y, direction))
    }

    /// Build a placement from values that are already known to be valid.
    pub fn at(x: u32, y: u32, direction: Direction) -> Self {
        Self { x, y, direction }
    }

    pub fn x(&self) -> u32 {
        self.x
    }

    pub fn y(&self) -> u32 {
        self.y
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }
}

/// Renders as `x,y,DIRECTION`, the simulator's report format.
impl fmt::Display for Placement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{},{}", self.x, self.y, self.direction)
    }
}

/// Offsets too large for a `u32` saturate to `u32::MAX`, which is off every table.
fn validate_offset(value: impl Display) -> Result<u32, RobotError> {
    let text = value.to_string();
    match integer_literal(&text) {
        Some((false, digits)) => Some(magnitude(digits).unwrap_or(u32::MAX)),
        Some((true, digits)) => magnitude(digits).filter(|&n| n == 0),
        None => None,
    }
    .ok_or_else(|| RobotError::invalid(Expectation::NonNegativeInteger, text))
}
