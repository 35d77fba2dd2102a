use crate::direction::Direction;
use crate::error::{Axis, RobotError};
use crate::placement::Placement;
use crate::table::Table;
use std::fmt::Display;

/// A toy robot on a [`Table`].
///
/// The robot starts unplaced. The first successful [`place`](Robot::place) puts it on
/// the table, and from then on it stays placed; every other operation fails with
/// [`RobotError::NotPlaced`] until that happens.
///
/// Mutating operations return `&mut Self`, so calls chain with `?`:
///
/// ```
/// use toy_robot::{Direction, Robot, Table};
/// # fn main() -> Result<(), toy_robot::RobotError> {
/// let table = Table::new(5, 5)?;
/// let mut robot = Robot::new(&table);
/// robot.place(1, 2, "EAST")?.move_forward()?.turn_left()?;
/// assert_eq!(robot.position()?, (2, 2));
/// assert_eq!(robot.direction()?, Direction::North);
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct Robot<'t> {
    table: &'t Table,
    placement: Option<Placement>,
}

impl<'t> Robot<'t> {
    /// Create an unplaced robot on `table`.
    pub fn new(table: &'t Table) -> Self {
        Self {
            table,
            placement: None,
        }
    }

    pub fn table(&self) -> &'t Table {
        self.table
    }

    pub fn is_placed(&self) -> bool {
        self.placement.is_some()
    }

    /// The current placement, if any.
    pub fn placement(&self) -> Option<&Placement> {
        self.placement.as_ref()
    }

    /// Put the robot at `(x, y)` facing `direction`.
    ///
    /// Raw values are validated by [`Placement::new`] and its error is returned as is.
    /// Coordinates off the table fail with [`RobotError::OutOfBounds`], x before y.
    /// On any failure the previous placement, or the lack of one, is kept.
    pub fn place(
        &mut self,
        x: impl Display,
        y: impl Display,
        direction: impl Display,
    ) -> Result<&mut Self, RobotError> {
        let x = x.to_string();
        let y = y.to_string();
        let candidate = Placement::new(&x, &y, direction)?;
        if candidate.x() >= self.table.width() {
            return Err(RobotError::OutOfBounds {
                axis: Axis::X,
                value: x,
            });
        }
        if candidate.y() >= self.table.height() {
            return Err(RobotError::OutOfBounds {
                axis: Axis::Y,
                value: y,
            });
        }
        self.placement = Some(candidate);
        Ok(self)
    }

    pub fn direction(&self) -> Result<Direction, RobotError> {
        Ok(self.current()?.direction())
    }

    pub fn position(&self) -> Result<(u32, u32), RobotError> {
        let placement = self.current()?;
        Ok((placement.x(), placement.y()))
    }

    /// The current state as `x,y,DIRECTION`.
    pub fn report(&self) -> Result<String, RobotError> {
        Ok(self.current()?.to_string())
    }

    /// Step one unit in the facing direction.
    ///
    /// A step that would leave the table is clamped to the edge instead of failing,
    /// so a robot already on the edge stays where it is.
    pub fn move_forward(&mut self) -> Result<&mut Self, RobotError> {
        let placement = *self.current()?;
        let (dx, dy) = placement.direction().step();
        let x = clamp(i64::from(placement.x()) + dx, self.table.width());
        let y = clamp(i64::from(placement.y()) + dy, self.table.height());
        self.placement = Some(Placement::at(x, y, placement.direction()));
        Ok(self)
    }

    /// Rotate 90 degrees counter-clockwise without moving.
    pub fn turn_left(&mut self) -> Result<&mut Self, RobotError> {
        self.turn(Direction::left)
    }

    /// Rotate 90 degrees clockwise without moving.
    pub fn turn_right(&mut self) -> Result<&mut Self, RobotError> {
        self.turn(Direction::right)
    }

    fn turn(&mut self, rotate: fn(Direction) -> Direction) -> Result<&mut Self, RobotError> {
        let placement = *self.current()?;
        self.placement = Some(Placement::at(
            placement.x(),
            placement.y(),
            rotate(placement.direction()),
        ));
        Ok(self)
    }

    fn current(&self) -> Result<&Placement, RobotError> {
        self.placement.as_ref().ok_or(RobotError::NotPlaced)
    }
}

/// Clamp `value` into `[0, extent - 1]`.
fn clamp(value: i64, extent: u32) -> u32 {
    let max = i64::from(extent) - 1;
    // extent > 0, so the result always fits
    value.clamp(0, max) as u32
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Expectation;

    fn table() -> Table {
        Table::new(5, 5).unwrap()
    }

    #[test]
    fn test_new_robot_is_not_placed() {
        let table = table();
        let mut robot = Robot::new(&table);
        assert!(!robot.is_placed());
        assert_eq!(robot.direction(), Err(RobotError::NotPlaced));
        assert_eq!(robot.position(), Err(RobotError::NotPlaced));
        assert_eq!(robot.report(), Err(RobotError::NotPlaced));
        assert_eq!(robot.move_forward().unwrap_err(), RobotError::NotPlaced);
        assert_eq!(robot.turn_left().unwrap_err(), RobotError::NotPlaced);
        assert_eq!(robot.turn_right().unwrap_err(), RobotError::NotPlaced);
        assert!(!robot.is_placed());
    }

    #[test]
    fn test_place_puts_robot_on_table() {
        let table = table();
        let mut robot = Robot::new(&table);
        assert_eq!(robot.table(), &table);
        assert_eq!(robot.placement(), None);
        robot.place(1, 2, "NORTH").unwrap();
        assert!(robot.is_placed());
        assert_eq!(robot.placement(), Some(&Placement::at(1, 2, Direction::North)));
        assert_eq!(robot.position(), Ok((1, 2)));
        assert_eq!(robot.direction(), Ok(Direction::North));
    }

    #[test]
    fn test_place_rejects_positions_off_the_table() {
        let table = table();
        let mut robot = Robot::new(&table);

        let cases = [
            (-1, 0, "NORTH", RobotError::invalid(Expectation::NonNegativeInteger, "-1")),
            (0, -1, "EAST", RobotError::invalid(Expectation::NonNegativeInteger, "-1")),
            (5, 4, "SOUTH", RobotError::OutOfBounds { axis: Axis::X, value: "5".into() }),
            (4, 5, "WEST", RobotError::OutOfBounds { axis: Axis::Y, value: "5".into() }),
        ];
        for (x, y, d, expected) in cases {
            assert_eq!(robot.place(x, y, d).unwrap_err(), expected);
            assert!(!robot.is_placed());
        }
    }

    #[test]
    fn test_x_is_reported_before_y() {
        let table = table();
        let mut robot = Robot::new(&table);
        let err = robot.place(7, 9, "NORTH").unwrap_err();
        assert_eq!(err, RobotError::OutOfBounds { axis: Axis::X, value: "7".into() });
    }

    #[test]
    fn test_failed_place_keeps_previous_placement() {
        let table = table();
        let mut robot = Robot::new(&table);
        robot.place(2, 3, "WEST").unwrap();

        assert!(robot.place(5, 0, "NORTH").is_err());
        assert!(robot.place(0, 5, "NORTH").is_err());
        assert!(robot.place(0, 0, "UP").is_err());
        assert!(robot.place("a", 0, "NORTH").is_err());

        assert_eq!(robot.report(), Ok("2,3,WEST".to_string()));
    }

    #[test]
    fn test_place_replaces_existing_placement() {
        let table = table();
        let mut robot = Robot::new(&table);
        robot.place(2, 3, "WEST").unwrap().place(0, 4, "SOUTH").unwrap();
        assert_eq!(robot.report(), Ok("0,4,SOUTH".to_string()));
    }

    #[test]
    fn test_move_in_each_direction() {
        let table = table();
        let cases = [
            ("NORTH", (1, 3)),
            ("EAST", (2, 2)),
            ("SOUTH", (1, 1)),
            ("WEST", (0, 2)),
        ];
        for (d, expected) in cases {
            let mut robot = Robot::new(&table);
            robot.place(1, 2, d).unwrap().move_forward().unwrap();
            assert_eq!(robot.position(), Ok(expected), "moving {d}");
            assert_eq!(robot.direction().unwrap().as_str(), d);
        }
    }

    #[test]
    fn test_move_stops_at_the_edges() {
        let table = table();
        for (x, y, d) in [(4, 4, "NORTH"), (4, 4, "EAST"), (0, 0, "SOUTH"), (0, 0, "WEST")] {
            let mut robot = Robot::new(&table);
            robot.place(x, y, d).unwrap().move_forward().unwrap();
            assert_eq!(robot.position(), Ok((x, y)), "moving {d} from ({x}, {y})");
        }
    }

    #[test]
    fn test_move_clamps_on_a_single_cell_table() {
        let table = Table::new(1, 1).unwrap();
        let mut robot = Robot::new(&table);
        robot.place(0, 0, "NORTH").unwrap();
        for _ in 0..4 {
            robot.move_forward().unwrap().turn_right().unwrap();
            assert_eq!(robot.position(), Ok((0, 0)));
        }
    }

    #[test]
    fn test_turns() {
        let table = table();
        let mut robot = Robot::new(&table);
        robot.place(1, 2, "NORTH").unwrap();

        robot.turn_left().unwrap();
        assert_eq!(robot.direction(), Ok(Direction::West));
        robot.turn_left().unwrap();
        assert_eq!(robot.direction(), Ok(Direction::South));
        robot.turn_right().unwrap().turn_right().unwrap().turn_right().unwrap();
        assert_eq!(robot.direction(), Ok(Direction::East));
        assert_eq!(robot.position(), Ok((1, 2)));
    }

    #[test]
    fn test_rectangular_table_bounds() {
        let table = Table::new(3, 7).unwrap();
        let mut robot = Robot::new(&table);
        assert!(robot.place(2, 6, "NORTH").is_ok());
        assert!(robot.place(3, 0, "NORTH").is_err());
        robot.place(2, 6, "NORTH").unwrap().move_forward().unwrap();
        assert_eq!(robot.report(), Ok("2,6,NORTH".to_string()));
    }
}
