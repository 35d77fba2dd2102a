use crate::simulator::Simulator;
use anyhow::Context;
use rustyline::DefaultEditor;
use rustyline::error::ReadlineError;
use std::io::{BufRead, Write};

const PROMPT: &str = "robot> ";

/// Line-oriented front end around a [`Simulator`].
///
/// Lines are trimmed and blank lines skipped before they reach the simulator.
/// `REPORT` output goes to the output stream, one line per report; rejected
/// commands are written to the error stream and processing continues, unless
/// the interpreter was built with [`fail_fast`](Interpreter::fail_fast).
///
/// Example
/// ```
/// use std::io::Cursor;
/// use toy_robot::{Interpreter, Simulator};
/// let mut interp = Interpreter::new(Simulator::new());
/// let mut out = Vec::new();
/// let mut err = Vec::new();
/// let script = Cursor::new("PLACE 0,0,NORTH\nMOVE\nREPORT\n");
/// interp.run_script(script, &mut out, &mut err).unwrap();
/// assert_eq!(String::from_utf8(out).unwrap(), "0,1,NORTH\n");
/// ```
pub struct Interpreter<'t> {
    simulator: Simulator<'t>,
    fail_fast: bool,
}

impl<'t> Interpreter<'t> {
    pub fn new(simulator: Simulator<'t>) -> Self {
        Self {
            simulator,
            fail_fast: false,
        }
    }

    /// Stop at the first rejected command instead of reporting it and carrying on.
    pub fn fail_fast(mut self, fail_fast: bool) -> Self {
        self.fail_fast = fail_fast;
        self
    }

    pub fn simulator(&self) -> &Simulator<'t> {
        &self.simulator
    }

    /// Run every line of `reader` through the simulator.
    ///
    /// Returns an error on I/O failure, or on the first rejected command when
    /// running fail-fast.
    pub fn run_script(
        &mut self,
        reader: impl BufRead,
        out: &mut dyn Write,
        err: &mut dyn Write,
    ) -> anyhow::Result<()> {
        for (index, line) in reader.lines().enumerate() {
            let line_no = index + 1;
            let line = line.with_context(|| format!("can't read line {line_no}"))?;
            let line = line.trim();
            if line.is_empty() {
                continue;
            }
            match self.simulator.parse(line) {
                Ok(Some(report)) => writeln!(out, "{report}")?,
                Ok(None) => {}
                Err(e) if self.fail_fast => {
                    return Err(e).with_context(|| format!("line {line_no}"));
                }
                Err(e) => writeln!(err, "error: line {line_no}: {e}")?,
            }
        }
        out.flush()?;
        Ok(())
    }

    /// Interactive Read-Eval-Print Loop on the terminal.
    ///
    /// `EXIT` or `QUIT`, Ctrl-C and Ctrl-D end the session.
    pub fn repl(&mut self) -> rustyline::Result<()> {
        let mut rl = DefaultEditor::new()?;

        loop {
            match rl.readline(PROMPT) {
                Ok(line) => {
                    let line = line.trim();
                    if line.is_empty() {
                        continue;
                    }
                    rl.add_history_entry(line)?;
                    if matches!(line, "EXIT" | "QUIT") {
                        break;
                    }
                    match self.simulator.parse(line) {
                        Ok(Some(report)) => println!("{report}"),
                        Ok(None) => {}
                        Err(e) => eprintln!("error: {e}"),
                    }
                }
                Err(ReadlineError::Interrupted) => {
                    println!("Interrupted");
                    break;
                }
                Err(ReadlineError::Eof) => {
                    println!("Eof");
                    break;
                }
                Err(err) => {
                    println!("Error: {:?}", err);
                    break;
                }
            }
        }

        Ok(())
    }
}
