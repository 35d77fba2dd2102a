//! A toy robot moving on a rectangular table, driven by text commands.
//!
//! The building blocks are small immutable values, a [`Table`] and a [`Placement`],
//! and a [`Robot`] that holds the current placement and enforces the table bounds.
//! A [`Simulator`] turns command lines (`PLACE x,y,DIRECTION`, `MOVE`, `LEFT`,
//! `RIGHT`, `REPORT`) into robot operations on a 5x5 table, and an [`Interpreter`]
//! feeds it from scripts or an interactive prompt.
//!
//! All failures are reported through [`RobotError`].

mod direction;
pub mod error;
mod interpreter;
pub mod parser;
mod placement;
mod robot;
mod simulator;
mod table;

pub use direction::Direction;
pub use error::RobotError;
pub use interpreter::Interpreter;
pub use placement::Placement;
pub use robot::Robot;
pub use simulator::Simulator;
pub use table::Table;
