//! Generation constants and run configuration

use crate::algorithm::styles::StyleSet;
use crate::analysis::image::ImageSource;
use crate::analysis::palette::PaletteChoice;
use crate::io::error::{ArtGridError, Result, invalid_parameter};
use std::ops::RangeInclusive;

/// Range rows and columns are drawn from when not given explicitly
pub const DEFAULT_GRID_RANGE: RangeInclusive<usize> = 8..=16;

// Keeps markup size and resolution time bounded
/// Maximum allowed rows or columns
pub const MAX_GRID_DIMENSION: usize = 512;

/// Side length of one cell in pixels
pub const DEFAULT_CELL_SIZE: u32 = 100;

/// Number of colors extracted from an image in palette mode
pub const DEFAULT_COLOR_COUNT: usize = 5;
/// Upper bound on the number of clusters extracted from an image
pub const MAX_COLOR_COUNT: usize = 32;

/// How strongly composition mode follows image colors
pub const DEFAULT_BLEND_FACTOR: f64 = 0.7;

/// Allowed big block footprint sides
pub const BIG_BLOCK_SIZES: [usize; 2] = [2, 3];

// Placement is rejection-sampled, this caps the loop on tiny grids
/// Placement draws before a big block is abandoned
pub const MAX_PLACEMENT_ATTEMPTS: usize = 64;

/// Footprint share of the grid above which a warning is raised
pub const DEFAULT_BIG_BLOCK_COVERAGE_LIMIT: f64 = 0.5;

/// Longest side of the downsampled image used for palette extraction
pub const PALETTE_SAMPLE_DIMENSION: u32 = 150;

/// Maximum pixels sampled from one region in composition mode
pub const REGION_SAMPLE_LIMIT: usize = 2500;

/// Iteration cap for k-means clustering
pub const KMEANS_MAX_ITERATIONS: usize = 20;

/// Probability that a circle gets an inner ring
pub const CIRCLE_INNER_RING_CHANCE: f64 = 0.3;

/// Extra weight given to motifs matching a region's complexity
pub const COMPLEXITY_STYLE_BIAS: f64 = 2.0;

// Output settings
/// Default SVG output path
pub const DEFAULT_OUTPUT: &str = "art_grid.svg";
/// Environment variable holding the log filter
pub const LOG_ENV_VAR: &str = "ARTGRID_LOG";

/// How an input image steers generation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ImageMode {
    /// Extract the palette from the image
    #[default]
    Palette,
    /// Follow the image's regional colors and detail cell by cell
    Composition,
}

/// An image together with the way it should be used
#[derive(Debug, Clone)]
pub struct ImageRequest {
    /// Where the pixels come from
    pub source: ImageSource,
    /// Palette extraction or composition
    pub mode: ImageMode,
}

/// Whether and how large a big block should be drawn
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BigBlockRequest {
    /// Include a big block
    pub enabled: bool,
    /// Footprint side in cells, drawn from the stream when absent
    pub size: Option<usize>,
}

impl BigBlockRequest {
    /// No big block
    pub const fn disabled() -> Self {
        Self {
            enabled: false,
            size: None,
        }
    }

    /// A big block with a fixed footprint side
    pub const fn with_size(size: usize) -> Self {
        Self {
            enabled: true,
            size: Some(size),
        }
    }
}

impl Default for BigBlockRequest {
    fn default() -> Self {
        Self {
            enabled: true,
            size: None,
        }
    }
}

/// Fully parsed options for one generation run
#[derive(Debug, Clone)]
pub struct RunConfig {
    /// Grid rows, drawn from `DEFAULT_GRID_RANGE` when absent
    pub rows: Option<usize>,
    /// Grid columns, drawn from `DEFAULT_GRID_RANGE` when absent
    pub cols: Option<usize>,
    /// Cell side in pixels
    pub cell_size: u32,
    /// Seed for the random stream, a fresh one is chosen when absent
    pub seed: Option<u64>,
    /// Which table palette to use
    pub palette: PaletteChoice,
    /// Motifs cells may be drawn with
    pub styles: StyleSet,
    /// Focal block request
    pub big_block: BigBlockRequest,
    /// Optional image steering
    pub image: Option<ImageRequest>,
    /// Clusters extracted in image palette mode
    pub color_count: usize,
    /// Interpolation weight toward image colors in composition mode
    pub blend_factor: f64,
    /// Footprint share of the grid that triggers a warning
    pub big_block_coverage_limit: f64,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            rows: None,
            cols: None,
            cell_size: DEFAULT_CELL_SIZE,
            seed: None,
            palette: PaletteChoice::Random,
            styles: StyleSet::all(),
            big_block: BigBlockRequest::default(),
            image: None,
            color_count: DEFAULT_COLOR_COUNT,
            blend_factor: DEFAULT_BLEND_FACTOR,
            big_block_coverage_limit: DEFAULT_BIG_BLOCK_COVERAGE_LIMIT,
        }
    }
}

impl RunConfig {
    /// Check every option before any draw is made
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - rows or cols are zero or exceed `MAX_GRID_DIMENSION`
    /// - the cell size is zero
    /// - the style set is empty
    /// - the big block size is not 2 or 3
    /// - the color count is outside `1..=MAX_COLOR_COUNT`
    /// - the blend factor or coverage limit is outside `[0, 1]`
    pub fn validate(&self) -> Result<()> {
        for (parameter, value) in [("rows", self.rows), ("cols", self.cols)] {
            if let Some(value) = value {
                validate_dimension(parameter, value)?;
            }
        }

        if self.cell_size == 0 {
            return Err(invalid_parameter(
                "cell_size",
                &self.cell_size,
                &"must be positive",
            ));
        }

        if self.styles.is_empty() {
            return Err(ArtGridError::EmptyStyleSet);
        }

        if let Some(size) = self.big_block.size {
            if !BIG_BLOCK_SIZES.contains(&size) {
                return Err(invalid_parameter(
                    "big_block_size",
                    &size,
                    &"must be 2 or 3",
                ));
            }
        }

        if !(1..=MAX_COLOR_COUNT).contains(&self.color_count) {
            return Err(invalid_parameter(
                "color_count",
                &self.color_count,
                &format!("must be between 1 and {MAX_COLOR_COUNT}"),
            ));
        }

        if !(0.0..=1.0).contains(&self.blend_factor) {
            return Err(invalid_parameter(
                "blend_factor",
                &self.blend_factor,
                &"must be between 0 and 1",
            ));
        }

        if !(self.big_block_coverage_limit > 0.0 && self.big_block_coverage_limit <= 1.0) {
            return Err(invalid_parameter(
                "big_block_coverage_limit",
                &self.big_block_coverage_limit,
                &"must be in (0, 1]",
            ));
        }

        Ok(())
    }

    /// The image mode in effect, if an image was supplied
    pub fn image_mode(&self) -> Option<ImageMode> {
        self.image.as_ref().map(|request| request.mode)
    }
}

/// Check a grid dimension against the allowed range
///
/// # Errors
///
/// Returns an error if the value is zero or exceeds `MAX_GRID_DIMENSION`
pub fn validate_dimension(parameter: &'static str, value: usize) -> Result<()> {
    if value == 0 || value > MAX_GRID_DIMENSION {
        return Err(invalid_parameter(
            parameter,
            &value,
            &format!("must be between 1 and {MAX_GRID_DIMENSION}"),
        ));
    }
    Ok(())
}
