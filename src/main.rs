use std::{
    fmt::Display,
    path::{Path, PathBuf},
    time::{Duration, Instant},
};

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info_span;
use tracing_subscriber::EnvFilter;

use aoc2021::{load_input, ALL_SOLUTIONS, DEFAULT_INPUT_DIR};

#[derive(Debug, Parser)]
#[command(about = "Advent of Code 2021 solutions")]
struct Args {
    /// Directory holding one `<day>.txt` input file per day
    #[arg(long, default_value = DEFAULT_INPUT_DIR)]
    inputs: PathBuf,
    /// Days to run, all of them when none are given
    #[arg(value_parser = clap::value_parser!(u8).range(1..=ALL_SOLUTIONS.len() as i64))]
    days: Vec<u8>,
}

fn main() -> Result<()> {
    init_tracing();
    let args = Args::parse();

    let days: Vec<usize> = if args.days.is_empty() {
        (1..=ALL_SOLUTIONS.len()).collect()
    } else {
        args.days.iter().map(|&day| day as usize).collect()
    };

    let mut total = Duration::default();
    for day in days {
        total += execute_day(day, ALL_SOLUTIONS[day - 1], &args.inputs)?;
    }
    println!("Total processing time: {}", format_duration(total));
    Ok(())
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn format_duration(dur: Duration) -> String {
    if dur.as_millis() != 0 {
        format!("{} ms", dur.as_millis())
    } else {
        format!("{} us", dur.as_micros())
    }
}

fn execute_day<S: Display, T: Display>(
    n: usize,
    f: fn(&str) -> Result<(S, T)>,
    inputs: &Path,
) -> Result<Duration> {
    let _span = info_span!("day", n).entered();
    println!("Day {}:", n);
    let input =
        load_input(inputs, n).with_context(|| format!("Failed to load input for day {}", n))?;

    let start = Instant::now();
    let (part1, part2) = f(&input).with_context(|| format!("Failed to solve day {}", n))?;
    let elapsed = start.elapsed();

    println!("  Part 1: {}", part1);
    println!("  Part 2: {}", part2);
    println!("  Finished in {}", format_duration(elapsed));
    println!("---------------------");
    Ok(elapsed)
}
