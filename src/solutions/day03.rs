use anyhow::{Context, Result};
use thiserror::Error;
use tracing::{debug, trace};

use crate::numbered_lines;

#[derive(Debug, Error)]
pub enum DiagnosticError {
    #[error("unexpected character `{0}` in diagnostic report")]
    InvalidBit(char),
    #[error("line {line} has {found} bits, expected {expected}")]
    WidthMismatch {
        line: usize,
        found: usize,
        expected: usize,
    },
    #[error("rows of {0} bits are wider than the supported 32")]
    TooWide(usize),
    #[error("diagnostic report is empty")]
    Empty,
    #[error("{criteria:?} filter left {remaining} rows instead of one")]
    Ambiguous {
        criteria: BitCriteria,
        remaining: usize,
    },
}

/// Which bit value survives a filtering round, given how often each value occurs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BitCriteria {
    /// Keep the more common value, `1` on a tie.
    MostCommon,
    /// Keep the less common value, `0` on a tie.
    LeastCommon,
}

impl BitCriteria {
    pub fn keep(self, ones: usize, zeros: usize) -> bool {
        match self {
            BitCriteria::MostCommon => ones >= zeros,
            BitCriteria::LeastCommon => ones < zeros,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Report {
    width: usize,
    rows: Vec<u32>,
}

impl Report {
    pub fn parse(input: &str) -> Result<Self, DiagnosticError> {
        let mut width = None;
        let mut rows = Vec::new();
        for (line, text) in numbered_lines(input) {
            let text = text.trim();
            let expected = *width.get_or_insert(text.len());
            if text.len() != expected {
                return Err(DiagnosticError::WidthMismatch {
                    line,
                    found: text.len(),
                    expected,
                });
            }
            if expected > u32::BITS as usize {
                return Err(DiagnosticError::TooWide(expected));
            }
            let row = text.chars().try_fold(0u32, |acc, c| match c {
                '0' => Ok(acc << 1),
                '1' => Ok(acc << 1 | 1),
                other => Err(DiagnosticError::InvalidBit(other)),
            })?;
            rows.push(row);
        }

        Ok(Self {
            width: width.ok_or(DiagnosticError::Empty)?,
            rows,
        })
    }

    fn bit(&self, row: u32, column: usize) -> bool {
        (row >> (self.width - 1 - column)) & 1 == 1
    }

    fn select(&self, rows: &[u32], column: usize, criteria: BitCriteria) -> bool {
        let ones = rows.iter().filter(|&&row| self.bit(row, column)).count();
        criteria.keep(ones, rows.len() - ones)
    }

    /// Builds a number from the bit `criteria` selects in every column.
    pub fn rate(&self, criteria: BitCriteria) -> u32 {
        (0..self.width).fold(0, |acc, column| {
            acc << 1 | u32::from(self.select(&self.rows, column, criteria))
        })
    }

    /// Filters rows column by column with `criteria` until a single row is left.
    pub fn filter(&self, criteria: BitCriteria) -> Result<u32, DiagnosticError> {
        let mut candidates = self.rows.clone();
        for column in 0..self.width {
            if candidates.len() == 1 {
                break;
            }
            let keep = self.select(&candidates, column, criteria);
            candidates.retain(|&row| self.bit(row, column) == keep);
            trace!(?criteria, column, remaining = candidates.len(), "filtered report");
        }
        match candidates[..] {
            [row] => Ok(row),
            _ => Err(DiagnosticError::Ambiguous {
                criteria,
                remaining: candidates.len(),
            }),
        }
    }
}

pub fn day3(input: &str) -> Result<(u64, u64)> {
    let report = Report::parse(input).context("Invalid diagnostic report")?;

    let gamma = report.rate(BitCriteria::MostCommon);
    let epsilon = report.rate(BitCriteria::LeastCommon);
    let oxygen = report.filter(BitCriteria::MostCommon)?;
    let co2 = report.filter(BitCriteria::LeastCommon)?;
    debug!(gamma, epsilon, oxygen, co2, "decoded diagnostic report");

    Ok((
        u64::from(gamma) * u64::from(epsilon),
        u64::from(oxygen) * u64::from(co2),
    ))
}
