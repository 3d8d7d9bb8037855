use clap::Parser;
use std::io::{BufRead, BufReader};
use std::path::PathBuf;

use ordered_set::OrderedSet;

/// Print the distinct lines of a file, keeping first-seen order.
#[derive(Parser)]
struct Args {
    /// input file (one entry per line)
    input: PathBuf,
    /// also drop any line present in this file
    #[arg(short, long)]
    exclude: Option<PathBuf>,
    /// print only the number of distinct lines
    #[arg(short, long, default_value_t = false)]
    count: bool,
}

fn read_lines(path: &PathBuf) -> Result<Vec<String>, std::io::Error> {
    BufReader::new(std::fs::File::open(path)?).lines().collect()
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let Args {
        input,
        exclude,
        count,
    } = Args::parse();

    let mut lines: OrderedSet<String> = read_lines(&input)?.into();
    if let Some(exclude) = exclude {
        lines.difference_update(read_lines(&exclude)?.iter());
    }

    if count {
        println!("{}", lines.len());
    } else {
        for line in &lines {
            println!("{line}");
        }
    }

    Ok(())
}
