use anyhow::{Context, Result};
use itertools::Itertools;
use tracing::debug;

use crate::{numbered_lines, parse_int};

fn count_increases(depths: impl Iterator<Item = u64>) -> usize {
    depths.tuple_windows().filter(|(a, b)| b > a).count()
}

pub fn day1(input: &str) -> Result<(u64, u64)> {
    let depths = numbered_lines(input)
        .map(|(n, line)| {
            parse_int::<u32>(line).with_context(|| format!("Invalid depth on line {}", n))
        })
        .collect::<Result<Vec<_>>>()?;
    debug!(readings = depths.len(), "parsed sonar sweep");

    let single = count_increases(depths.iter().copied().map(u64::from));
    let windowed = count_increases(
        depths
            .iter()
            .copied()
            .map(u64::from)
            .tuple_windows()
            .map(|(a, b, c)| a + b + c),
    );

    Ok((single as u64, windowed as u64))
}
