//! Grid geometry, big block footprints and coverage tracking
//!
//! Positions are addressed as `(row, col)` with the origin at the top-left
//! cell. Pixel coordinates follow the same orientation: `x` grows with the
//! column and `y` with the row.

use ndarray::Array2;
use serde::Serialize;

use crate::io::configuration::validate_dimension;
use crate::io::error::{Result, invalid_parameter};

/// Dimensions of the cell grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct GridSpec {
    rows: usize,
    cols: usize,
    cell_size: u32,
}

impl GridSpec {
    /// Create a validated grid specification
    ///
    /// # Errors
    ///
    /// Returns an error if rows or cols are outside `1..=MAX_GRID_DIMENSION`
    /// or the cell size is zero
    pub fn new(rows: usize, cols: usize, cell_size: u32) -> Result<Self> {
        validate_dimension("rows", rows)?;
        validate_dimension("cols", cols)?;
        if cell_size == 0 {
            return Err(invalid_parameter("cell_size", &cell_size, &"must be positive"));
        }
        Ok(Self {
            rows,
            cols,
            cell_size,
        })
    }

    /// Number of rows
    pub const fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns
    pub const fn cols(&self) -> usize {
        self.cols
    }

    /// Cell side in pixels
    pub const fn cell_size(&self) -> u32 {
        self.cell_size
    }

    /// Total number of grid positions
    pub const fn cell_count(&self) -> usize {
        self.rows * self.cols
    }

    /// Canvas width in pixels
    pub const fn canvas_width(&self) -> u64 {
        self.cols as u64 * self.cell_size as u64
    }

    /// Canvas height in pixels
    pub const fn canvas_height(&self) -> u64 {
        self.rows as u64 * self.cell_size as u64
    }

    /// Whether a position lies inside the grid
    pub const fn contains(&self, row: usize, col: usize) -> bool {
        row < self.rows && col < self.cols
    }

    /// All positions in row-major order
    pub fn positions(&self) -> impl Iterator<Item = (usize, usize)> + use<> {
        let cols = self.cols;
        (0..self.rows).flat_map(move |row| (0..cols).map(move |col| (row, col)))
    }
}

/// Square multi-cell footprint claimed by the big block
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct BigBlockPlacement {
    /// Top row of the footprint
    pub row: usize,
    /// Left column of the footprint
    pub col: usize,
    /// Footprint side in cells
    pub size: usize,
}

impl BigBlockPlacement {
    /// Whether a position lies inside the footprint
    pub const fn contains(&self, row: usize, col: usize) -> bool {
        row >= self.row && row < self.row + self.size && col >= self.col && col < self.col + self.size
    }

    /// Whether the whole footprint lies inside the grid
    pub const fn fits_within(&self, grid: &GridSpec) -> bool {
        self.row + self.size <= grid.rows() && self.col + self.size <= grid.cols()
    }

    /// Number of grid positions in the footprint
    pub const fn cell_count(&self) -> usize {
        self.size * self.size
    }

    /// Fraction of the grid covered by the footprint
    pub fn coverage_of(&self, grid: &GridSpec) -> f64 {
        self.cell_count() as f64 / grid.cell_count() as f64
    }

    /// All footprint positions in row-major order
    pub fn positions(&self) -> impl Iterator<Item = (usize, usize)> + use<> {
        let (row, col, size) = (self.row, self.col, self.size);
        (row..row + size).flat_map(move |r| (col..col + size).map(move |c| (r, c)))
    }
}

/// Counts how many records claim each grid position
#[derive(Debug, Clone)]
pub struct CoverageMap {
    counts: Array2<u8>,
}

impl CoverageMap {
    /// Create an empty coverage map for a grid
    pub fn new(grid: &GridSpec) -> Self {
        Self {
            counts: Array2::zeros((grid.rows(), grid.cols())),
        }
    }

    /// Record a claim on a position, returning false if it is outside the grid
    pub fn mark(&mut self, row: usize, col: usize) -> bool {
        self.counts.get_mut((row, col)).is_some_and(|count| {
            *count = count.saturating_add(1);
            true
        })
    }

    /// Claims recorded for a position
    pub fn count(&self, row: usize, col: usize) -> u8 {
        self.counts.get((row, col)).copied().unwrap_or(0)
    }

    /// First position (row-major) not claimed exactly once, with its count
    pub fn first_gap(&self) -> Option<((usize, usize), u8)> {
        self.counts
            .indexed_iter()
            .find(|&(_, &count)| count != 1)
            .map(|(position, &count)| (position, count))
    }
}
