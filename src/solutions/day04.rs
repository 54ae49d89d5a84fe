use std::num::ParseIntError;

use anyhow::{Context, Result};
use rustc_hash::FxHashMap;
use thiserror::Error;
use tracing::debug;

use crate::{parse_int, split};

const SIZE: usize = 5;

#[derive(Debug, Error)]
pub enum BingoError {
    #[error("missing the line of drawn numbers")]
    MissingDraws,
    #[error("board {board} has {rows} rows, expected {size}", size = SIZE)]
    IncompleteBoard { board: usize, rows: usize },
    #[error("board row `{0}` does not hold {size} numbers", size = SIZE)]
    RowWidth(String),
    #[error(transparent)]
    InvalidNumber(#[from] ParseIntError),
}

#[derive(Debug, Clone)]
pub struct Board {
    numbers: [[u32; SIZE]; SIZE],
    marked: [[bool; SIZE]; SIZE],
    positions: FxHashMap<u32, (usize, usize)>,
}

impl Board {
    fn from_rows(rows: &[&str]) -> Result<Self, BingoError> {
        let mut numbers = [[0; SIZE]; SIZE];
        let mut positions = FxHashMap::default();
        for (r, text) in rows.iter().enumerate() {
            let row = split(text, " ")
                .map(parse_int::<u32>)
                .collect::<Result<Vec<_>, _>>()?;
            if row.len() != SIZE {
                return Err(BingoError::RowWidth(text.to_string()));
            }
            for (c, &number) in row.iter().enumerate() {
                numbers[r][c] = number;
                positions.insert(number, (r, c));
            }
        }
        Ok(Self {
            numbers,
            marked: [[false; SIZE]; SIZE],
            positions,
        })
    }

    /// Marks `number` and reports whether that completed a row or a column.
    pub fn mark(&mut self, number: u32) -> bool {
        let Some(&(r, c)) = self.positions.get(&number) else {
            return false;
        };
        self.marked[r][c] = true;
        self.marked[r].iter().all(|&m| m) || self.marked.iter().all(|row| row[c])
    }

    pub fn unmarked_sum(&self) -> u32 {
        self.numbers
            .iter()
            .flatten()
            .zip(self.marked.iter().flatten())
            .filter(|&(_, &marked)| !marked)
            .map(|(&number, _)| number)
            .sum()
    }
}

fn parse(input: &str) -> Result<(Vec<u32>, Vec<Board>), BingoError> {
    let mut lines = input.lines().map(str::trim).filter(|line| !line.is_empty());
    let draws = split(lines.next().ok_or(BingoError::MissingDraws)?, ",")
        .map(parse_int::<u32>)
        .collect::<Result<Vec<_>, _>>()?;

    let rows: Vec<&str> = lines.collect();
    let boards = rows
        .chunks(SIZE)
        .enumerate()
        .map(|(i, chunk)| {
            if chunk.len() != SIZE {
                return Err(BingoError::IncompleteBoard {
                    board: i + 1,
                    rows: chunk.len(),
                });
            }
            Board::from_rows(chunk)
        })
        .collect::<Result<Vec<_>, _>>()?;

    Ok((draws, boards))
}

/// Scores of the boards in the order they win. Boards that never win are left out.
pub fn winning_scores(draws: &[u32], mut boards: Vec<Board>) -> Vec<u32> {
    let mut scores = Vec::new();
    for &number in draws {
        boards.retain_mut(|board| {
            if board.mark(number) {
                scores.push(board.unmarked_sum() * number);
                false
            } else {
                true
            }
        });
        if boards.is_empty() {
            break;
        }
    }
    scores
}

pub fn day4(input: &str) -> Result<(u64, u64)> {
    let (draws, boards) = parse(input).context("Invalid bingo subsystem input")?;
    debug!(draws = draws.len(), boards = boards.len(), "playing bingo");

    let scores = winning_scores(&draws, boards);
    let (Some(&first), Some(&last)) = (scores.first(), scores.last()) else {
        anyhow::bail!("No board wins with the drawn numbers");
    };

    Ok((u64::from(first), u64::from(last)))
}
