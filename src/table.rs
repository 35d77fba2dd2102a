use crate::error::{Expectation, RobotError};
use std::fmt::Display;

/// Width and height of the surface a robot moves on.
///
/// Both extents are strictly positive; a table never changes once built.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Table {
    width: u32,
    height: u32,
}

impl Table {
    /// Create a table of the given width and height.
    ///
    /// Each extent is rendered to text and must be an integer literal greater than zero,
    /// so `Table::new(5, 5)` and `Table::new("5", "5")` are equivalent.
    ///
    /// ```
    /// use toy_robot::Table;
    /// let table = Table::new(5, "3").unwrap();
    /// assert_eq!((table.width(), table.height()), (5, 3));
    /// assert!(Table::new(0, 3).is_err());
    /// ```
    pub fn new(width: impl Display, height: impl Display) -> Result<Self, RobotError> {
        Ok(Self {
            width: validate_extent(width)?,
            height: validate_extent(height)?,
        })
    }

    /// The 5x5 table used by the simulator.
    pub(crate) const fn standard() -> Self {
        Self {
            width: 5,
            height: 5,
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }
}

/// Split `-?[0-9]+` into its sign and digits, rejecting anything else.
pub(crate) fn integer_literal(text: &str) -> Option<(bool, &str)> {
    let (negative, digits) = match text.strip_prefix('-') {
        Some(digits) => (true, digits),
        None => (false, text),
    };
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    Some((negative, digits))
}

/// Value of an ASCII digit string, or `None` if it does not fit a `u32`.
pub(crate) fn magnitude(digits: &str) -> Option<u32> {
    digits.bytes().try_fold(0u32, |acc, b| {
        acc.checked_mul(10)?.checked_add(u32::from(b - b'0'))
    })
}

fn validate_extent(value: impl Display) -> Result<u32, RobotError> {
    let text = value.to_string();
    match integer_literal(&text) {
        Some((false, digits)) => magnitude(digits).filter(|&n| n > 0),
        _ => None,
    }
    .ok_or_else(|| RobotError::invalid(Expectation::PositiveInteger, text))
}
