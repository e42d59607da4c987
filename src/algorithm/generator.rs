//! End-to-end scene generation with a fixed draw order
//!
//! Draws are taken from the shared stream in this order:
//! 1. rows, then cols, when not explicit
//! 2. the palette index, when the palette comes from the table at random
//! 3. the big block size when not explicit, then its placement attempts
//! 4. the gradient orientation
//! 5. every free cell in row-major order: style, parameters, colors
//! 6. the big block: style, parameters, colors
//!
//! Image analysis draws nothing. Unusable palette sources and images are
//! recovered from and reported as warnings; configuration errors abort
//! before the first draw.

use crate::algorithm::resolver::{Resolver, background_gradient};
use crate::algorithm::scene::{BigBlockRecord, CellRecord, Scene, SceneAssembler};
use crate::analysis::image::{ImageAnalyzer, RegionMap, SourceImage};
use crate::analysis::palette::{Palette, PaletteTable};
use crate::io::configuration::{ImageMode, RunConfig};
use crate::io::error::{Result, Warning};
use crate::io::palette_source::PaletteSource;
use crate::math::RandomStream;
use crate::spatial::layout::{BlockPlacement, LayoutPlanner};

/// A generated scene and the recoveries made while producing it
#[derive(Debug, Clone)]
pub struct Generation {
    /// The resolved scene
    pub scene: Scene,
    /// Recoverable problems encountered
    pub warnings: Vec<Warning>,
}

/// Runs the full synthesis pipeline for one configuration
pub struct Generator {
    config: RunConfig,
    planner: LayoutPlanner,
    analyzer: ImageAnalyzer,
    warnings: Vec<Warning>,
}

impl Generator {
    /// Create a generator with default planner and analyzer settings
    pub fn new(config: RunConfig) -> Self {
        Self {
            config,
            planner: LayoutPlanner::default(),
            analyzer: ImageAnalyzer::default(),
            warnings: Vec::new(),
        }
    }

    /// Replace the layout planner
    #[must_use]
    pub fn with_planner(mut self, planner: LayoutPlanner) -> Self {
        self.planner = planner;
        self
    }

    /// Replace the image analyzer
    #[must_use]
    pub fn with_analyzer(mut self, analyzer: ImageAnalyzer) -> Self {
        self.analyzer = analyzer;
        self
    }

    /// Produce a scene
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The configuration is invalid or the style set is empty
    /// - An explicit palette index is outside the palette table
    /// - The assembled scene does not cover the grid exactly once
    pub fn generate(mut self, palette_source: &PaletteSource) -> Result<Generation> {
        self.config.validate()?;

        let seed = self.config.seed.unwrap_or_else(RandomStream::fresh_seed);
        let mut stream = RandomStream::new(seed);
        tracing::debug!(seed, "Seeded random stream");

        let image = self.load_image();

        let grid = self.planner.resolve_grid(
            self.config.rows,
            self.config.cols,
            self.config.cell_size,
            &mut stream,
        )?;

        let palette = match (&image, self.config.image_mode()) {
            (Some(image), Some(ImageMode::Palette)) => {
                self.analyzer.derive_palette(image, self.config.color_count)
            }
            _ => self.table_palette(palette_source, &mut stream)?,
        };

        let regions: Option<RegionMap> = match (&image, self.config.image_mode()) {
            (Some(image), Some(ImageMode::Composition)) => {
                Some(self.analyzer.region_map(image, &grid))
            }
            _ => None,
        };

        let placement = match self
            .planner
            .place_big_block(&grid, self.config.big_block, &mut stream)
        {
            BlockPlacement::Placed(placement) => {
                let coverage = placement.coverage_of(&grid);
                if coverage > self.config.big_block_coverage_limit {
                    self.warn(Warning::BigBlockDominates {
                        coverage,
                        limit: self.config.big_block_coverage_limit,
                    });
                }
                Some(placement)
            }
            BlockPlacement::Abandoned { size, attempts } => {
                self.warn(Warning::BigBlockAbandoned { size, attempts });
                None
            }
            BlockPlacement::NotRequested => None,
        };

        let gradient = background_gradient(&palette, &mut stream);

        let mut resolver = Resolver::new(&palette, &self.config.styles);
        if let Some(regions) = &regions {
            resolver = resolver.with_regions(regions, self.config.blend_factor);
        }

        let cells: Vec<CellRecord> = grid
            .positions()
            .filter(|&(row, col)| !placement.is_some_and(|block| block.contains(row, col)))
            .map(|(row, col)| {
                let (style, colors) = resolver.resolve_cell(row, col, &mut stream);
                CellRecord {
                    row,
                    col,
                    style,
                    colors,
                }
            })
            .collect();

        let big_block = placement.map(|placement| {
            let (style, colors) = resolver.resolve_block(&placement, &mut stream);
            BigBlockRecord {
                placement,
                style,
                colors,
            }
        });

        let scene = SceneAssembler::new(seed, grid, palette, gradient).assemble(cells, big_block)?;
        tracing::info!(
            seed,
            rows = grid.rows(),
            cols = grid.cols(),
            cells = scene.cells().len(),
            big_block = scene.big_block().is_some(),
            "Generated scene"
        );

        Ok(Generation {
            scene,
            warnings: self.warnings,
        })
    }

    fn load_image(&mut self) -> Option<SourceImage> {
        let request = self.config.image.as_ref()?;
        match SourceImage::load(&request.source) {
            Ok(image) => {
                tracing::debug!(
                    width = image.width(),
                    height = image.height(),
                    "Loaded source image"
                );
                Some(image)
            }
            Err(error) => {
                self.warn(Warning::ImageFallback {
                    reason: error.to_string(),
                });
                None
            }
        }
    }

    fn table_palette(
        &mut self,
        source: &PaletteSource,
        stream: &mut RandomStream,
    ) -> Result<Palette> {
        let table = match source.load() {
            Ok(table) => table,
            Err(error) => {
                self.warn(Warning::PaletteFallback {
                    reason: error.to_string(),
                });
                PaletteTable::embedded()
            }
        };
        table.select(self.config.palette, stream)
    }

    fn warn(&mut self, warning: Warning) {
        tracing::warn!("{warning}");
        self.warnings.push(warning);
    }
}
