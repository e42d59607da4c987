//! Grid sizing and big block placement
//!
//! Placement is rejection sampled: the top-left corner is drawn over the whole
//! grid and redrawn until the footprint fits. Clamping an out-of-range corner
//! would pile placements up against the right and bottom edges.

use std::ops::RangeInclusive;

use crate::io::configuration::{
    BIG_BLOCK_SIZES, BigBlockRequest, DEFAULT_GRID_RANGE, MAX_PLACEMENT_ATTEMPTS,
};
use crate::io::error::Result;
use crate::math::RandomStream;
use crate::spatial::grid::{BigBlockPlacement, GridSpec};

/// Outcome of a big block placement request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlockPlacement {
    /// No big block was asked for
    NotRequested,
    /// The block fits at this footprint
    Placed(BigBlockPlacement),
    /// No fitting footprint was found
    Abandoned {
        /// Requested footprint side in cells
        size: usize,
        /// Corner draws made before giving up
        attempts: usize,
    },
}

impl BlockPlacement {
    /// The placed footprint, if any
    pub const fn placement(&self) -> Option<BigBlockPlacement> {
        match self {
            Self::Placed(placement) => Some(*placement),
            Self::NotRequested | Self::Abandoned { .. } => None,
        }
    }
}

/// Resolves grid dimensions and the big block footprint
#[derive(Debug, Clone)]
pub struct LayoutPlanner {
    grid_range: RangeInclusive<usize>,
    max_attempts: usize,
}

impl Default for LayoutPlanner {
    fn default() -> Self {
        Self::new(DEFAULT_GRID_RANGE, MAX_PLACEMENT_ATTEMPTS)
    }
}

impl LayoutPlanner {
    /// Create a planner drawing missing dimensions from `grid_range`
    pub const fn new(grid_range: RangeInclusive<usize>, max_attempts: usize) -> Self {
        Self {
            grid_range,
            max_attempts,
        }
    }

    /// Fix the grid dimensions, drawing rows then cols when not explicit
    ///
    /// # Errors
    ///
    /// Returns an error if the resulting grid specification is invalid
    pub fn resolve_grid(
        &self,
        rows: Option<usize>,
        cols: Option<usize>,
        cell_size: u32,
        stream: &mut RandomStream,
    ) -> Result<GridSpec> {
        let (low, high) = (*self.grid_range.start(), *self.grid_range.end());
        let rows = rows.unwrap_or_else(|| stream.range_inclusive(low, high));
        let cols = cols.unwrap_or_else(|| stream.range_inclusive(low, high));
        GridSpec::new(rows, cols, cell_size)
    }

    /// Choose the big block footprint
    ///
    /// Draws the size first when not given, then one `(row, col)` pair per
    /// attempt until the footprint fits or the attempt cap is reached.
    pub fn place_big_block(
        &self,
        grid: &GridSpec,
        request: BigBlockRequest,
        stream: &mut RandomStream,
    ) -> BlockPlacement {
        if !request.enabled {
            return BlockPlacement::NotRequested;
        }

        let size = request.size.unwrap_or_else(|| {
            BIG_BLOCK_SIZES
                .get(stream.index(BIG_BLOCK_SIZES.len()))
                .copied()
                .unwrap_or(2)
        });

        if size > grid.rows() || size > grid.cols() {
            return BlockPlacement::Abandoned { size, attempts: 0 };
        }

        for attempt in 1..=self.max_attempts {
            let candidate = BigBlockPlacement {
                row: stream.index(grid.rows()),
                col: stream.index(grid.cols()),
                size,
            };
            if candidate.fits_within(grid) {
                tracing::debug!(
                    row = candidate.row,
                    col = candidate.col,
                    size,
                    attempt,
                    "Placed big block"
                );
                return BlockPlacement::Placed(candidate);
            }
        }

        BlockPlacement::Abandoned {
            size,
            attempts: self.max_attempts,
        }
    }
}
