mod day13;
mod day3;
mod error;
mod packet;

use clap::Parser;
use error::SolveError;
use std::path::PathBuf;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

/// Advent of Code 2022 solutions
#[derive(Parser, Debug)]
#[command(name = "aoc2022", version)]
struct Args {
    /// Puzzle day (3 or 13)
    day: u8,

    /// Part to solve; both parts when omitted
    #[arg(value_parser = clap::value_parser!(u8).range(1 ..= 2))]
    part: Option<u8>,

    /// Read day<DAY>test<N>.in instead of day<DAY>.in
    #[arg(short, long, value_name = "N")]
    test: Option<u32>,

    /// Input file, overriding the name derived from the day
    #[arg(short, long)]
    input: Option<PathBuf>,

    /// Directory holding the input files
    #[arg(short, long, default_value = "inputs")]
    dir: PathBuf,

    /// Debug logging (RUST_LOG takes precedence)
    #[arg(short, long)]
    verbose: bool,
}

impl Args {
    fn input_path(&self) -> PathBuf {
        match (&self.input, self.test) {
            (Some(path), _) => path.clone(),
            (None, Some(test)) => self.dir.join(format!("day{}test{}.in", self.day, test)),
            (None, None) => self.dir.join(format!("day{}.in", self.day))
        }
    }
}

fn init_logging(verbose: bool) {
    let default_level = if verbose {"debug"} else {"info"};
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level))
        )
        .with_writer(std::io::stderr)
        .try_init();
}

fn solve(day: u8, part: u8, input: &str) -> Result<String, SolveError> {
    match day {
        3 => day3::solve(part, input),
        13 => day13::solve(part, input),
        _ => Err(SolveError::UnknownDay(day))
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();
    init_logging(args.verbose);

    let fname = args.input_path();
    info!(day = args.day, input = %fname.display(), "reading input");
    let input = std::fs::read_to_string(&fname)
        .map_err(|err| format!("cannot read {}: {}", fname.display(), err))?;
    debug!(lines = input.lines().count(), "input read");

    let parts = match args.part {
        Some(part) => part ..= part,
        None => 1 ..= 2
    };
    let time = std::time::Instant::now();
    for part in parts {
        let answer = solve(args.day, part, &input)
            .map_err(|err| format!("{}: {}", fname.display(), err))?;
        println!("Part {}: {}", part, answer);
    }
    info!("{} seconds elapsed", time.elapsed().as_secs_f32());
    Ok(())
}
