use std::io::{self, BufRead};
use std::process;

use anyhow::{Context, Result};
use clap::Parser;

use onepass::{Checker, parse};

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Pattern to compile
    pattern: String,

    /// Subject strings to check; read from stdin, one per line, if omitted
    #[arg(value_name = "SUBJECT")]
    subjects: Vec<String>,

    /// Print the parsed pattern tree to stderr
    #[arg(short, long)]
    verbose: bool,
}

fn main() {
    let args = Args::parse();
    match run(args) {
        Ok(true) => process::exit(0),
        Ok(false) => process::exit(1),
        Err(err) => {
            eprintln!("onepass: {err}");
            process::exit(2);
        }
    }
}

/// Check every subject against the pattern, printing the ones that match.
/// Returns whether anything matched.
fn run(args: Args) -> Result<bool> {
    let root = parse(&args.pattern)?;
    if args.verbose {
        eprint!("{}", root.outline());
    }

    let subjects = if args.subjects.is_empty() {
        io::stdin()
            .lock()
            .lines()
            .collect::<Result<Vec<_>, _>>()
            .context("Failed to read stdin")?
    } else {
        args.subjects
    };

    let mut any_matched = false;
    for subject in &subjects {
        if Checker::new(subject).check(&root) {
            any_matched = true;
            println!("{subject}");
        }
    }
    Ok(any_matched)
}
