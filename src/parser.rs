use crate::error::RobotError;
use regex::Regex;
use std::sync::OnceLock;

/// A single simulator command, parsed but not yet validated against a robot.
///
/// `PLACE` keeps its arguments as the raw tokens from the input line; turning them
/// into a [`Placement`](crate::Placement) is the robot's job.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// `PLACE x,y,DIRECTION`
    Place {
        x: String,
        y: String,
        direction: String,
    },
    /// `MOVE`
    Move,
    /// `LEFT`
    Left,
    /// `RIGHT`
    Right,
    /// `REPORT`
    Report,
}

fn place_pattern() -> &'static Regex {
    static PLACE: OnceLock<Regex> = OnceLock::new();
    PLACE.get_or_init(|| {
        // ASCII whitespace only
        Regex::new(r"(?-u)\APLACE\s+(-?[0-9]+)\s*,\s*(-?[0-9]+)\s*,\s*([A-Z]+)\z")
            .expect("PLACE pattern is a valid regex")
    })
}

/// Parse one command line.
///
/// The whole line must match one of the five forms. Spaces around the commas of
/// `PLACE` are allowed; everything else is exact and case-sensitive.
///
/// # Returns
///
/// * `Ok(Command)` for a recognised line, or
///   [`RobotError::UnrecognisedCommand`] carrying the line otherwise.
pub fn parse_command(line: &str) -> Result<Command, RobotError> {
    match line {
        "MOVE" => return Ok(Command::Move),
        "LEFT" => return Ok(Command::Left),
        "RIGHT" => return Ok(Command::Right),
        "REPORT" => return Ok(Command::Report),
        _ => {}
    }

    place_pattern()
        .captures(line)
        .map(|caps| Command::Place {
            x: caps[1].to_string(),
            y: caps[2].to_string(),
            direction: caps[3].to_string(),
        })
        .ok_or_else(|| RobotError::UnrecognisedCommand {
            line: line.to_string(),
        })
}
