use std::{num::ParseIntError, str::FromStr};

use anyhow::{Context, Result};
use thiserror::Error;
use tracing::{debug, trace};

use crate::{numbered_lines, parse_int, split, Grid, GridError, Point};

#[derive(Debug, Error)]
pub enum SegmentError {
    #[error("expected `x1,y1 -> x2,y2`, found `{0}`")]
    Syntax(String),
    #[error(transparent)]
    InvalidNumber(#[from] ParseIntError),
    #[error("segment `{0}` is neither axis-aligned nor at 45 degrees")]
    Skewed(String),
}

/// A vent line between two grid points, inclusive of both ends.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Segment {
    source: Point,
    target: Point,
    is_vertical: bool,
    is_diagonal: bool,
    direction: Point,
}

impl Segment {
    pub fn new(source: Point, target: Point) -> Result<Self, SegmentError> {
        let dx = i64::from(target.x) - i64::from(source.x);
        let dy = i64::from(target.y) - i64::from(source.y);
        let is_diagonal = dx != 0 && dy != 0;
        if is_diagonal && dx.abs() != dy.abs() {
            return Err(SegmentError::Skewed(format!(
                "{},{} -> {},{}",
                source.x, source.y, target.x, target.y
            )));
        }
        Ok(Self {
            source,
            target,
            is_vertical: dx == 0,
            is_diagonal,
            direction: Point::new(dx.signum() as i32, dy.signum() as i32),
        })
    }

    pub fn source(&self) -> Point {
        self.source
    }

    pub fn target(&self) -> Point {
        self.target
    }

    pub fn is_vertical(&self) -> bool {
        self.is_vertical
    }

    pub fn is_diagonal(&self) -> bool {
        self.is_diagonal
    }

    /// Unit step from `source` towards `target`, each component in `-1..=1`.
    pub fn direction(&self) -> Point {
        self.direction
    }
}

fn parse_point(text: &str) -> Result<Point, SegmentError> {
    let coordinates: Vec<&str> = split(text, ",").collect();
    match coordinates[..] {
        [x, y] => Ok(Point::new(parse_int(x)?, parse_int(y)?)),
        _ => Err(SegmentError::Syntax(text.trim().to_string())),
    }
}

impl FromStr for Segment {
    type Err = SegmentError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let ends: Vec<&str> = split(s, "->").collect();
        let [source, target] = ends[..] else {
            return Err(SegmentError::Syntax(s.trim().to_string()));
        };
        Segment::new(parse_point(source)?, parse_point(target)?)
    }
}

/// Which segments take part in rasterization.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DiagonalMode {
    /// Horizontal and vertical segments only; diagonals are ignored.
    Skip,
    /// Every segment, diagonals included.
    Include,
}

fn mark(grid: &mut Grid, point: Point) -> Result<usize, GridError> {
    Ok(usize::from(grid.increment(point)? == 1))
}

fn draw_stepping(grid: &mut Grid, segment: &Segment) -> Result<usize, GridError> {
    let mut current = segment.source;
    let mut overlaps = mark(grid, current)?;
    while current != segment.target {
        current += segment.direction;
        overlaps += mark(grid, current)?;
    }
    Ok(overlaps)
}

fn draw_axis(grid: &mut Grid, segment: &Segment) -> Result<usize, GridError> {
    let (source, target) = (segment.source, segment.target);
    let mut overlaps = 0;
    if segment.is_vertical {
        for y in source.y.min(target.y)..=source.y.max(target.y) {
            overlaps += mark(grid, Point::new(source.x, y))?;
        }
    } else {
        for x in source.x.min(target.x)..=source.x.max(target.x) {
            overlaps += mark(grid, Point::new(x, source.y))?;
        }
    }
    Ok(overlaps)
}

/// Increments every cell covered by `segment` and returns how many of them went from
/// exactly one covering segment to two. A segment reaching outside the grid leaves the
/// grid untouched.
pub fn draw_segment(
    grid: &mut Grid,
    segment: &Segment,
    mode: DiagonalMode,
) -> Result<usize, GridError> {
    if mode == DiagonalMode::Skip && segment.is_diagonal {
        return Ok(0);
    }
    // The grid is a rectangle, so both ends inside it keep every cell between them inside.
    grid.get(segment.source)?;
    grid.get(segment.target)?;
    match mode {
        DiagonalMode::Include => draw_stepping(grid, segment),
        DiagonalMode::Skip => draw_axis(grid, segment),
    }
}

/// Number of cells covered by at least two of `segments`.
pub fn count_overlaps(segments: &[Segment], mode: DiagonalMode) -> Result<usize, GridError> {
    let mut grid = Grid::covering(segments.iter().flat_map(|s| [s.source, s.target]))?;
    debug!(
        segments = segments.len(),
        width = grid.width(),
        height = grid.height(),
        ?mode,
        "rasterizing vent lines"
    );

    let mut overlaps = 0;
    for segment in segments {
        let delta = draw_segment(&mut grid, segment, mode)?;
        trace!(?segment, delta, "drew segment");
        overlaps += delta;
    }
    debug_assert_eq!(overlaps, grid.count_at_least(2));
    Ok(overlaps)
}

pub fn parse_segments(input: &str) -> Result<Vec<Segment>> {
    numbered_lines(input)
        .map(|(n, line)| {
            line.parse::<Segment>()
                .with_context(|| format!("Invalid vent line {}: `{}`", n, line))
        })
        .collect()
}

pub fn day5(input: &str) -> Result<(u64, u64)> {
    let segments = parse_segments(input)?;
    let orthogonal = count_overlaps(&segments, DiagonalMode::Skip)?;
    let all = count_overlaps(&segments, DiagonalMode::Include)?;
    debug!(orthogonal, all, "counted vent overlaps");
    Ok((orthogonal as u64, all as u64))
}
