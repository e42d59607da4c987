//! Resolved scene records and their assembly
//!
//! A scene is the only thing handed to renderers. Assembly checks that the
//! ordinary cells and the big block footprint together cover every grid
//! position exactly once.

use serde::Serialize;

use crate::algorithm::resolver::{BackgroundGradient, CellColors};
use crate::algorithm::styles::Style;
use crate::analysis::palette::Palette;
use crate::io::error::{ArtGridError, Result};
use crate::spatial::grid::{BigBlockPlacement, CoverageMap, GridSpec};

/// One resolved grid cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CellRecord {
    /// Grid row
    pub row: usize,
    /// Grid column
    pub col: usize,
    /// Motif and its parameters
    pub style: Style,
    /// Motif colors
    pub colors: CellColors,
}

/// The resolved focal block
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct BigBlockRecord {
    /// Footprint on the grid
    pub placement: BigBlockPlacement,
    /// Motif and its parameters
    pub style: Style,
    /// Motif colors
    pub colors: CellColors,
}

/// Everything a renderer needs to draw the artwork
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Scene {
    seed: u64,
    grid: GridSpec,
    canvas_width: u64,
    canvas_height: u64,
    palette: Palette,
    gradient: BackgroundGradient,
    cells: Vec<CellRecord>,
    big_block: Option<BigBlockRecord>,
}

impl Scene {
    /// Seed that reproduces this scene
    pub const fn seed(&self) -> u64 {
        self.seed
    }

    /// Grid dimensions
    pub const fn grid(&self) -> &GridSpec {
        &self.grid
    }

    /// Canvas size in pixels as `(width, height)`
    pub const fn canvas_size(&self) -> (u64, u64) {
        (self.canvas_width, self.canvas_height)
    }

    /// Active palette
    pub const fn palette(&self) -> &Palette {
        &self.palette
    }

    /// Canvas backdrop
    pub const fn gradient(&self) -> &BackgroundGradient {
        &self.gradient
    }

    /// Ordinary cells in row-major order
    pub fn cells(&self) -> &[CellRecord] {
        &self.cells
    }

    /// The focal block, if placed
    pub const fn big_block(&self) -> Option<&BigBlockRecord> {
        self.big_block.as_ref()
    }

    /// Ordinary cell at a position
    pub fn cell_at(&self, row: usize, col: usize) -> Option<&CellRecord> {
        self.cells
            .iter()
            .find(|cell| cell.row == row && cell.col == col)
    }
}

/// Validates and packages resolved records into a scene
pub struct SceneAssembler {
    seed: u64,
    grid: GridSpec,
    palette: Palette,
    gradient: BackgroundGradient,
}

impl SceneAssembler {
    /// Start assembling a scene for a grid
    pub const fn new(
        seed: u64,
        grid: GridSpec,
        palette: Palette,
        gradient: BackgroundGradient,
    ) -> Self {
        Self {
            seed,
            grid,
            palette,
            gradient,
        }
    }

    /// Check coverage and produce the scene
    ///
    /// # Errors
    ///
    /// Returns `IncompleteScene` if a record lies outside the grid or any
    /// position is claimed zero or several times
    pub fn assemble(
        self,
        cells: Vec<CellRecord>,
        big_block: Option<BigBlockRecord>,
    ) -> Result<Scene> {
        let mut coverage = CoverageMap::new(&self.grid);

        let claims = cells
            .iter()
            .map(|cell| (cell.row, cell.col))
            .chain(big_block.iter().flat_map(|block| block.placement.positions()));
        for (row, col) in claims {
            if !coverage.mark(row, col) {
                return Err(ArtGridError::IncompleteScene {
                    row,
                    col,
                    coverage: 0,
                });
            }
        }

        if let Some(((row, col), count)) = coverage.first_gap() {
            return Err(ArtGridError::IncompleteScene {
                row,
                col,
                coverage: count,
            });
        }

        Ok(Scene {
            seed: self.seed,
            canvas_width: self.grid.canvas_width(),
            canvas_height: self.grid.canvas_height(),
            grid: self.grid,
            palette: self.palette,
            gradient: self.gradient,
            cells,
            big_block,
        })
    }
}
