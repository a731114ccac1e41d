use std::{
    fs::File,
    io::{self, BufReader, Cursor},
    path::PathBuf,
};

use bigcalc::run;
use clap::Parser;

/// bigcalc evaluates integer arithmetic of any size, one line at a time.
///
/// Lines are commands (`/help`, `/exit`), assignments (`name = value`) or
/// expressions using `+ - * / ^` and parentheses.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Reads input lines from a file instead of standard input.
    #[arg(short, long, conflicts_with = "expression")]
    file: Option<PathBuf>,

    /// Handles a single line, prints its output and exits.
    #[arg(short, long)]
    expression: Option<String>,
}

fn main() {
    env_logger::init();

    let args = Args::parse();
    let mut stdout = io::stdout().lock();

    let result = if let Some(line) = args.expression {
        run(Cursor::new(line), &mut stdout)
    } else if let Some(path) = args.file {
        let file = File::open(&path).unwrap_or_else(|_| {
                                        eprintln!("Failed to read the input file '{}'. Perhaps this file does not exist?",
                                                  path.display());
                                        std::process::exit(1);
                                    });
        run(BufReader::new(file), &mut stdout)
    } else {
        run(io::stdin().lock(), &mut stdout)
    };

    if let Err(e) = result {
        eprintln!("{e}");
        std::process::exit(1);
    }
}
