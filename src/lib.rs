mod grid;
mod solutions;

use std::{
    fs, io,
    num::ParseIntError,
    path::{Path, PathBuf},
    str::FromStr,
};

use anyhow::Result;
use thiserror::Error;

pub use grid::{Grid, GridError, Point, MAX_CELLS};
pub use solutions::*;

pub type Solution = fn(&str) -> Result<(u64, u64)>;

pub const ALL_SOLUTIONS: [Solution; 6] = [day1, day2, day3, day4, day5, day6];

pub const DEFAULT_INPUT_DIR: &str = "inputs";

#[derive(Debug, Error)]
pub enum InputError {
    #[error("input file not found: {}", .path.display())]
    NotFound { path: PathBuf },
    #[error("failed to read input file {}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

pub fn read_input(path: impl AsRef<Path>) -> Result<String, InputError> {
    let path = path.as_ref();
    fs::read_to_string(path).map_err(|source| match source.kind() {
        io::ErrorKind::NotFound => InputError::NotFound {
            path: path.to_path_buf(),
        },
        _ => InputError::Io {
            path: path.to_path_buf(),
            source,
        },
    })
}

pub fn load_input(dir: impl AsRef<Path>, day: usize) -> Result<String, InputError> {
    read_input(dir.as_ref().join(format!("{}.txt", day)))
}

pub fn default_input(day: usize) -> Result<String, InputError> {
    load_input(DEFAULT_INPUT_DIR, day)
}

/// Splits `text` on `delimiter`, dropping the empty tokens left by repeated delimiters.
pub fn split<'a>(text: &'a str, delimiter: &'a str) -> impl Iterator<Item = &'a str> + 'a {
    text.split(delimiter).filter(|token| !token.is_empty())
}

pub fn parse_int<T: FromStr<Err = ParseIntError>>(text: &str) -> Result<T, ParseIntError> {
    text.trim().parse()
}

/// Non-blank lines of `input` together with their 1-based line number.
pub fn numbered_lines(input: &str) -> impl Iterator<Item = (usize, &str)> {
    input
        .lines()
        .enumerate()
        .map(|(i, line)| (i + 1, line))
        .filter(|(_, line)| !line.trim().is_empty())
}
