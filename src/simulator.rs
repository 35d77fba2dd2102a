use crate::error::RobotError;
use crate::parser::{self, Command};
use crate::robot::Robot;
use crate::table::Table;

static STANDARD_TABLE: Table = Table::standard();

/// Drives a [`Robot`] from text commands.
///
/// Robot state carries over between calls, so a sequence of lines is fed one
/// [`parse`](Simulator::parse) at a time.
///
/// Example
/// ```
/// use toy_robot::Simulator;
/// let mut sim = Simulator::new();
/// assert_eq!(sim.parse("PLACE 0,0,NORTH").unwrap(), None);
/// assert_eq!(sim.parse("MOVE").unwrap(), None);
/// assert_eq!(sim.parse("REPORT").unwrap(), Some("0,1,NORTH".to_string()));
/// ```
#[derive(Debug)]
pub struct Simulator<'t> {
    robot: Robot<'t>,
}

impl Simulator<'static> {
    /// Start a simulation on a 5x5 table.
    pub fn new() -> Self {
        Self::with_table(&STANDARD_TABLE)
    }
}

impl Default for Simulator<'static> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'t> Simulator<'t> {
    /// Start a simulation on a caller-supplied table.
    pub fn with_table(table: &'t Table) -> Self {
        Self {
            robot: Robot::new(table),
        }
    }

    pub fn robot(&self) -> &Robot<'t> {
        &self.robot
    }

    /// Parse and run one command line.
    ///
    /// Returns `Some(report)` for `REPORT` on a placed robot and `None` for every other
    /// successful command. `MOVE`, `LEFT`, `RIGHT` and `REPORT` do nothing until the
    /// robot has been placed.
    pub fn parse(&mut self, line: &str) -> Result<Option<String>, RobotError> {
        let command = parser::parse_command(line)?;
        self.execute(command)
    }

    /// Run an already parsed command. See [`parse`](Simulator::parse).
    pub fn execute(&mut self, command: Command) -> Result<Option<String>, RobotError> {
        match command {
            Command::Place { x, y, direction } => {
                self.robot.place(x, y, direction)?;
            }
            _ if !self.robot.is_placed() => {}
            Command::Move => {
                self.robot.move_forward()?;
            }
            Command::Left => {
                self.robot.turn_left()?;
            }
            Command::Right => {
                self.robot.turn_right()?;
            }
            Command::Report => return self.robot.report().map(Some),
        }
        Ok(None)
    }
}
