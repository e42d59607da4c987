//! Command-line interface for generating a single artwork

use crate::algorithm::generator::{Generation, Generator};
use crate::algorithm::scene::Scene;
use crate::algorithm::styles::StyleSet;
use crate::analysis::image::ImageSource;
use crate::analysis::palette::PaletteChoice;
use crate::io::configuration::{
    BigBlockRequest, DEFAULT_BLEND_FACTOR, DEFAULT_CELL_SIZE, DEFAULT_COLOR_COUNT, DEFAULT_OUTPUT,
    ImageMode, ImageRequest, RunConfig,
};
use crate::io::error::Result;
use crate::io::export::write_scene_outputs;
use crate::io::logging::{Verbosity, init_logging};
use crate::io::palette_source::PaletteSource;
use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// How an input image is used, as spelled on the command line
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum ModeArg {
    /// Extract the palette from the image
    #[default]
    Palette,
    /// Map image regions onto cell styles and colors
    Composition,
}

impl From<ModeArg> for ImageMode {
    fn from(mode: ModeArg) -> Self {
        match mode {
            ModeArg::Palette => Self::Palette,
            ModeArg::Composition => Self::Composition,
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "artgrid")]
#[command(
    author,
    version,
    about = "Generate seeded grid-based geometric art as SVG"
)]
/// Command-line arguments for the art generator
pub struct Cli {
    /// Number of rows (random between 8 and 16 when omitted)
    #[arg(long)]
    pub rows: Option<usize>,

    /// Number of columns (random between 8 and 16 when omitted)
    #[arg(long)]
    pub cols: Option<usize>,

    /// Cell side in pixels
    #[arg(long, default_value_t = DEFAULT_CELL_SIZE)]
    pub cell_size: u32,

    /// Output SVG path
    #[arg(short, long, default_value = DEFAULT_OUTPUT)]
    pub output: PathBuf,

    /// Random seed for reproducible output
    #[arg(short, long)]
    pub seed: Option<u64>,

    /// JSON file holding an array of 5-color hex arrays
    #[arg(long, value_name = "PATH")]
    pub palette_file: Option<PathBuf>,

    /// Use this palette table entry instead of a random one
    #[arg(long)]
    pub palette_index: Option<usize>,

    /// Skip the big focal block
    #[arg(long)]
    pub no_big_block: bool,

    /// Big block side in cells (2 or 3, random when omitted)
    #[arg(long)]
    pub big_block_size: Option<usize>,

    /// Comma-separated styles to draw from (all when omitted)
    #[arg(long, value_delimiter = ',', value_name = "STYLES")]
    pub block_styles: Option<Vec<String>>,

    /// Image steering the palette or composition
    #[arg(short, long, value_name = "PATH")]
    pub image: Option<PathBuf>,

    /// How the image is used
    #[arg(short, long, value_enum, default_value_t = ModeArg::Palette)]
    pub mode: ModeArg,

    /// Colors extracted from the image in palette mode
    #[arg(long, default_value_t = DEFAULT_COLOR_COUNT)]
    pub color_count: usize,

    /// Weight of image colors in composition mode, between 0 and 1
    #[arg(long, default_value_t = DEFAULT_BLEND_FACTOR)]
    pub blend_factor: f64,

    /// Also write the resolved scene as JSON
    #[arg(long, value_name = "PATH")]
    pub scene_json: Option<PathBuf>,

    /// Suppress all diagnostic output
    #[arg(short, long)]
    pub quiet: bool,

    /// Emit debug diagnostics
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    /// Translate the arguments into a run configuration
    ///
    /// # Errors
    ///
    /// Returns an error if a block style name is unknown
    pub fn to_run_config(&self) -> Result<RunConfig> {
        let styles = match &self.block_styles {
            Some(names) => StyleSet::parse(names)?,
            None => StyleSet::all(),
        };

        let big_block = if self.no_big_block {
            BigBlockRequest::disabled()
        } else {
            BigBlockRequest {
                enabled: true,
                size: self.big_block_size,
            }
        };

        let palette = self
            .palette_index
            .map_or(PaletteChoice::Random, PaletteChoice::Index);

        let image = self.image.as_ref().map(|path| ImageRequest {
            source: ImageSource::Path(path.clone()),
            mode: self.mode.into(),
        });

        Ok(RunConfig {
            rows: self.rows,
            cols: self.cols,
            cell_size: self.cell_size,
            seed: self.seed,
            palette,
            styles,
            big_block,
            image,
            color_count: self.color_count,
            blend_factor: self.blend_factor,
            ..RunConfig::default()
        })
    }

    /// Where the palette table is read from
    pub fn palette_source(&self) -> PaletteSource {
        self.palette_file
            .clone()
            .map_or(PaletteSource::Embedded, PaletteSource::File)
    }

    /// Diagnostic level requested by the flags
    pub const fn verbosity(&self) -> Verbosity {
        Verbosity::from_flags(self.quiet, self.verbose)
    }
}

/// Runs one generation from parsed arguments and writes its outputs
pub struct Runner {
    cli: Cli,
}

impl Runner {
    /// Create a runner for the given arguments
    pub const fn new(cli: Cli) -> Self {
        Self { cli }
    }

    /// Set up logging, generate the scene and write every requested output
    ///
    /// # Errors
    ///
    /// Returns an error if logging cannot be installed, the configuration is
    /// invalid, generation fails or an output file cannot be written
    pub fn run(&self) -> Result<()> {
        init_logging(self.cli.verbosity())?;
        let generation = self.generate()?;
        self.write_outputs(&generation.scene)?;
        self.report(&generation);
        Ok(())
    }

    /// Produce the scene without writing anything
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid or generation fails
    pub fn generate(&self) -> Result<Generation> {
        let config = self.cli.to_run_config()?;
        Generator::new(config).generate(&self.cli.palette_source())
    }

    /// Write the SVG and, when requested, the scene JSON
    ///
    /// Either both files are written or neither is.
    ///
    /// # Errors
    ///
    /// Returns an error if a file cannot be written
    pub fn write_outputs(&self, scene: &Scene) -> Result<()> {
        write_scene_outputs(scene, &self.cli.output, self.cli.scene_json.as_deref())
    }

    // Allow print for the run summary, the seed is needed to reproduce a run
    #[allow(clippy::print_stderr)]
    fn report(&self, generation: &Generation) {
        if self.cli.quiet {
            return;
        }
        let scene = &generation.scene;
        eprintln!(
            "Generated {}x{} grid with seed {} -> {}",
            scene.grid().rows(),
            scene.grid().cols(),
            scene.seed(),
            self.cli.output.display()
        );
        if !generation.warnings.is_empty() {
            eprintln!("{} warning(s) during generation", generation.warnings.len());
        }
    }
}
