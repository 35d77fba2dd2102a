use anyhow::Context;
use argh::FromArgs;
use std::fs::File;
use std::io::{self, BufReader};
use toy_robot::{Interpreter, Simulator, Table};

#[derive(FromArgs)]
/// Simulate a toy robot on a table.
/// Reads PLACE, MOVE, LEFT, RIGHT and REPORT commands from the given files,
/// or interactively when no file is given.
struct Args {
    #[argh(option, default = "String::from(\"5\")")]
    /// table width in units (default 5).
    width: String,

    #[argh(option, default = "String::from(\"5\")")]
    /// table height in units (default 5).
    height: String,

    #[argh(switch)]
    /// stop at the first rejected command.
    fail_fast: bool,

    #[argh(positional, greedy)]
    /// command files to run in order; "-" reads standard input.
    files: Vec<String>,
}

fn main() -> anyhow::Result<()> {
    let args: Args = argh::from_env();

    let table = Table::new(&args.width, &args.height).context("invalid table size")?;
    let mut interp = Interpreter::new(Simulator::with_table(&table)).fail_fast(args.fail_fast);

    if args.files.is_empty() {
        interp.repl()?;
        return Ok(());
    }

    let mut stdout = io::stdout().lock();
    let mut stderr = io::stderr().lock();
    for path in &args.files {
        if path == "-" {
            interp
                .run_script(io::stdin().lock(), &mut stdout, &mut stderr)
                .context("<stdin>")?;
        } else {
            let file = File::open(path).with_context(|| format!("can't open {path}"))?;
            interp
                .run_script(BufReader::new(file), &mut stdout, &mut stderr)
                .with_context(|| path.clone())?;
        }
    }
    Ok(())
}
