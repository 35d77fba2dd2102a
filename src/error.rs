use std::error::Error;
use std::fmt;

/// What a raw argument was expected to be when it failed validation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Expectation {
    /// An integer strictly greater than zero (table extents).
    PositiveInteger,
    /// An integer greater than or equal to zero (placement offsets).
    NonNegativeInteger,
    /// One of `NORTH`, `EAST`, `SOUTH` or `WEST`.
    Direction,
}

/// Table axis that a placement was checked against.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Axis {
    X,
    Y,
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::X => write!(f, "x"),
            Self::Y => write!(f, "y"),
        }
    }
}

/// Errors raised while building tables and placements, driving the robot,
/// or parsing simulator commands.
///
/// Every variant carries the offending raw input so callers can branch on the
/// kind and still report exactly what was rejected.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RobotError {
    /// A raw value handed to `Table::new` or `Placement::new` was malformed or out of range.
    InvalidArgument {
        /// What the value should have been.
        expected: Expectation,
        /// The value as it was given.
        value: String,
    },
    /// The robot was queried or moved before its first successful placement.
    NotPlaced,
    /// A placement targeted coordinates outside the table surface.
    OutOfBounds {
        /// The axis that failed the bounds check.
        axis: Axis,
        /// The coordinate as it was given.
        value: String,
    },
    /// The command line matched none of the known commands.
    UnrecognisedCommand {
        /// The full input line.
        line: String,
    },
}

impl RobotError {
    pub(crate) fn invalid(expected: Expectation, value: impl Into<String>) -> Self {
        Self::InvalidArgument {
            expected,
            value: value.into(),
        }
    }
}

impl fmt::Display for RobotError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidArgument { expected, value } => match expected {
                Expectation::PositiveInteger => {
                    write!(f, "expected integral value greater than zero: {value}")
                }
                Expectation::NonNegativeInteger => write!(
                    f,
                    "expected integral value greater than or equal to zero: {value}"
                ),
                Expectation::Direction => write!(f, "invalid direction given: {value}"),
            },
            Self::NotPlaced => write!(f, "robot has not been placed"),
            Self::OutOfBounds { axis, value } => {
                write!(f, "invalid {axis} position (not on table surface): {value}")
            }
            Self::UnrecognisedCommand { line } => write!(f, "unrecognised command: {line}"),
        }
    }
}

impl Error for RobotError {}
