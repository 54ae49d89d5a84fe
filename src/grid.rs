use nalgebra::Vector2;
use thiserror::Error;

/// A cell coordinate. `x` grows to the right, `y` grows downwards.
pub type Point = Vector2<i32>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum GridError {
    #[error("point ({x}, {y}) lies outside the {width}x{height} grid")]
    OutOfBounds {
        x: i32,
        y: i32,
        width: usize,
        height: usize,
    },
    #[error("a {width}x{height} grid exceeds the limit of {max} cells", max = MAX_CELLS)]
    TooLarge { width: usize, height: usize },
}

/// Largest number of cells a grid may hold (64 MiB of counters).
pub const MAX_CELLS: usize = 1 << 24;

/// Row-major grid of occupancy counters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    width: usize,
    height: usize,
    cells: Vec<u32>,
}

impl Grid {
    pub fn new(width: usize, height: usize) -> Result<Self, GridError> {
        let size = width
            .checked_mul(height)
            .filter(|&size| size <= MAX_CELLS)
            .ok_or(GridError::TooLarge { width, height })?;
        Ok(Self {
            width,
            height,
            cells: vec![0; size],
        })
    }

    /// Smallest grid anchored at the origin that contains every point with non-negative
    /// coordinates. Negative coordinates are left for `get`/`increment` to reject.
    pub fn covering(points: impl IntoIterator<Item = Point>) -> Result<Self, GridError> {
        let mut width = 0;
        let mut height = 0;
        for point in points {
            if let Ok(x) = usize::try_from(point.x) {
                width = width.max(x + 1);
            }
            if let Ok(y) = usize::try_from(point.y) {
                height = height.max(y + 1);
            }
        }
        Self::new(width, height)
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    fn index(&self, point: Point) -> Result<usize, GridError> {
        match (usize::try_from(point.x), usize::try_from(point.y)) {
            (Ok(x), Ok(y)) if x < self.width && y < self.height => Ok(y * self.width + x),
            _ => Err(GridError::OutOfBounds {
                x: point.x,
                y: point.y,
                width: self.width,
                height: self.height,
            }),
        }
    }

    pub fn get(&self, point: Point) -> Result<u32, GridError> {
        Ok(self.cells[self.index(point)?])
    }

    /// Adds one to the counter at `point` and returns the value it had before.
    pub fn increment(&mut self, point: Point) -> Result<u32, GridError> {
        let index = self.index(point)?;
        let previous = self.cells[index];
        self.cells[index] += 1;
        Ok(previous)
    }

    pub fn count_at_least(&self, threshold: u32) -> usize {
        self.cells.iter().filter(|&&count| count >= threshold).count()
    }
}
