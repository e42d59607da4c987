//! Image loading and analysis for palette extraction and composition
//!
//! Palette mode clusters a downsampled copy of the image into a five-color
//! palette. Composition mode splits the image into one region per grid cell
//! and summarizes each region by two representative colors and a detail score.

use image::imageops::{self, FilterType};
use image::RgbImage;
use ndarray::Array2;
use std::path::{Path, PathBuf};

use crate::analysis::clustering::{Cluster, kmeans};
use crate::analysis::palette::{PALETTE_SIZE, Palette};
use crate::io::configuration::{
    KMEANS_MAX_ITERATIONS, PALETTE_SAMPLE_DIMENSION, REGION_SAMPLE_LIMIT,
};
use crate::io::error::{ArtGridError, Result, WithPath};
use crate::math::Rgb;
use crate::spatial::grid::{BigBlockPlacement, GridSpec};

// Channel standard deviation at which a region counts as fully detailed
const FULL_DETAIL_DEVIATION: f64 = 127.5;

/// Where image pixels come from
#[derive(Debug, Clone)]
pub enum ImageSource {
    /// An image file to decode
    Path(PathBuf),
    /// Pixels decoded by the caller
    Decoded(RgbImage),
}

/// A decoded, non-empty RGB image
#[derive(Debug, Clone)]
pub struct SourceImage {
    pixels: RgbImage,
}

impl SourceImage {
    /// Decode or adopt the image described by a source
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The file cannot be opened or decoded
    /// - The image has zero width or height
    pub fn load(source: &ImageSource) -> Result<Self> {
        match source {
            ImageSource::Path(path) => Self::open(path),
            ImageSource::Decoded(pixels) => Self::from_rgb(pixels.clone()),
        }
    }

    /// Decode an image file into RGB pixels
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or decoded, or has no pixels
    pub fn open(path: &Path) -> Result<Self> {
        let decoded = image::open(path).with_path(path)?;
        Self::from_rgb(decoded.to_rgb8())
    }

    /// Wrap already decoded pixels
    ///
    /// # Errors
    ///
    /// Returns an error if the image has zero width or height
    pub fn from_rgb(pixels: RgbImage) -> Result<Self> {
        let (width, height) = pixels.dimensions();
        if width == 0 || height == 0 {
            return Err(ArtGridError::EmptyImage { width, height });
        }
        Ok(Self { pixels })
    }

    /// Image width in pixels
    pub fn width(&self) -> u32 {
        self.pixels.width()
    }

    /// Image height in pixels
    pub fn height(&self) -> u32 {
        self.pixels.height()
    }

    /// The underlying pixel buffer
    pub const fn pixels(&self) -> &RgbImage {
        &self.pixels
    }
}

/// Summary of the image region under one grid cell
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RegionFeature {
    /// Centroid of the most populated color cluster
    pub dominant: Rgb,
    /// Centroid of the other cluster, equal to `dominant` on flat regions
    pub contrast: Rgb,
    /// Color variation in `[0, 1]`, 0 for a flat region
    pub complexity: f64,
}

impl RegionFeature {
    /// A feature for a flat region of one color
    pub const fn flat(color: Rgb) -> Self {
        Self {
            dominant: color,
            contrast: color,
            complexity: 0.0,
        }
    }
}

/// One region feature per grid cell
#[derive(Debug, Clone)]
pub struct RegionMap {
    features: Array2<RegionFeature>,
}

impl RegionMap {
    /// Build a map where every cell has the same feature
    pub fn uniform(grid: &GridSpec, feature: RegionFeature) -> Self {
        Self {
            features: Array2::from_elem((grid.rows(), grid.cols()), feature),
        }
    }

    /// Feature of the region under a cell
    pub fn get(&self, row: usize, col: usize) -> Option<&RegionFeature> {
        self.features.get((row, col))
    }

    /// Map dimensions as `(rows, cols)`
    pub fn dim(&self) -> (usize, usize) {
        self.features.dim()
    }

    /// Average feature over a big block footprint
    pub fn footprint_feature(&self, placement: &BigBlockPlacement) -> Option<RegionFeature> {
        let members: Vec<&RegionFeature> = placement
            .positions()
            .filter_map(|(row, col)| self.get(row, col))
            .collect();
        if members.is_empty() {
            return None;
        }

        let count = members.len() as f64;
        let mean_color = |pick: fn(&RegionFeature) -> Rgb| {
            let mut totals = [0.0; 3];
            for member in &members {
                for (total, channel) in totals.iter_mut().zip(pick(member).channels()) {
                    *total += channel;
                }
            }
            Rgb::from_channels(totals.map(|total| total / count))
        };

        Some(RegionFeature {
            dominant: mean_color(|f| f.dominant),
            contrast: mean_color(|f| f.contrast),
            complexity: members.iter().map(|f| f.complexity).sum::<f64>() / count,
        })
    }
}

/// Extracts palettes and region maps from source images
#[derive(Debug, Clone)]
pub struct ImageAnalyzer {
    palette_sample_dimension: u32,
    region_sample_limit: usize,
    max_iterations: usize,
}

impl Default for ImageAnalyzer {
    fn default() -> Self {
        Self {
            palette_sample_dimension: PALETTE_SAMPLE_DIMENSION,
            region_sample_limit: REGION_SAMPLE_LIMIT,
            max_iterations: KMEANS_MAX_ITERATIONS,
        }
    }
}

impl ImageAnalyzer {
    /// Create an analyzer with custom sampling bounds
    pub const fn new(
        palette_sample_dimension: u32,
        region_sample_limit: usize,
        max_iterations: usize,
    ) -> Self {
        Self {
            palette_sample_dimension,
            region_sample_limit,
            max_iterations,
        }
    }

    /// Cluster the image into a palette
    ///
    /// Clusters are ordered by population, largest first, and fill the five
    /// slots cyclically: fewer than five clusters repeat, more than five keep
    /// the five largest.
    pub fn derive_palette(&self, image: &SourceImage, color_count: usize) -> Palette {
        let sample = downsample(image.pixels(), self.palette_sample_dimension);
        let samples: Vec<[f64; 3]> = sample
            .pixels()
            .map(|&pixel| Rgb::from(pixel).channels())
            .collect();

        let clusters = kmeans(&samples, color_count.max(1), self.max_iterations);
        let mut colors = [Rgb::default(); PALETTE_SIZE];
        if !clusters.is_empty() {
            for (slot, color) in colors.iter_mut().enumerate() {
                if let Some(cluster) = clusters.get(slot % clusters.len()) {
                    *color = Rgb::from_channels(cluster.centroid);
                }
            }
        }

        tracing::debug!(
            clusters = clusters.len(),
            samples = samples.len(),
            "Derived palette from image"
        );
        Palette::new(colors)
    }

    /// Summarize the image region under every grid cell
    pub fn region_map(&self, image: &SourceImage, grid: &GridSpec) -> RegionMap {
        let pixels = upscale_to_grid(image.pixels(), grid);
        let (width, height) = (pixels.width() as usize, pixels.height() as usize);
        let (rows, cols) = (grid.rows(), grid.cols());

        let features = Array2::from_shape_fn((rows, cols), |(row, col)| {
            let x_range = (col * width / cols) as u32..((col + 1) * width / cols) as u32;
            let y_range = (row * height / rows) as u32..((row + 1) * height / rows) as u32;
            let samples = self.sample_region(&pixels, x_range, y_range);
            self.summarize_region(&samples)
        });

        RegionMap { features }
    }

    // Strided sampling keeps at most `region_sample_limit` pixels
    fn sample_region(
        &self,
        pixels: &RgbImage,
        x_range: std::ops::Range<u32>,
        y_range: std::ops::Range<u32>,
    ) -> Vec<[f64; 3]> {
        let area = x_range.len() * y_range.len();
        let limit = self.region_sample_limit.max(1);
        let stride = area.div_ceil(limit).max(1);

        y_range
            .flat_map(|y| x_range.clone().map(move |x| (x, y)))
            .step_by(stride)
            .filter_map(|(x, y)| pixels.get_pixel_checked(x, y))
            .map(|&pixel| Rgb::from(pixel).channels())
            .collect()
    }

    fn summarize_region(&self, samples: &[[f64; 3]]) -> RegionFeature {
        let count = samples.len().max(1) as f64;
        let mut mean = [0.0; 3];
        for sample in samples {
            for (total, value) in mean.iter_mut().zip(sample) {
                *total += value;
            }
        }
        let mean = mean.map(|total| total / count);

        let mut deviation = 0.0;
        for channel in 0..3 {
            let variance = samples
                .iter()
                .filter_map(|sample| sample.get(channel).zip(mean.get(channel)))
                .map(|(value, center)| (value - center) * (value - center))
                .sum::<f64>()
                / count;
            deviation += variance.sqrt();
        }
        let complexity = (deviation / 3.0 / FULL_DETAIL_DEVIATION).clamp(0.0, 1.0);

        let clusters = kmeans(samples, 2, self.max_iterations);
        let centroid = |cluster: Option<&Cluster>| {
            cluster
                .filter(|c| c.population > 0)
                .map(|c| Rgb::from_channels(c.centroid))
        };
        let dominant = centroid(clusters.first()).unwrap_or_else(|| Rgb::from_channels(mean));
        let contrast = centroid(clusters.get(1)).unwrap_or(dominant);

        RegionFeature {
            dominant,
            contrast,
            complexity,
        }
    }
}

// Nearest-neighbour keeps exact source colors in the sample
fn downsample(pixels: &RgbImage, max_dimension: u32) -> RgbImage {
    let (width, height) = pixels.dimensions();
    let longest = width.max(height);
    if longest <= max_dimension || max_dimension == 0 {
        return pixels.clone();
    }

    let scale = f64::from(max_dimension) / f64::from(longest);
    let target_width = ((f64::from(width) * scale).round() as u32).max(1);
    let target_height = ((f64::from(height) * scale).round() as u32).max(1);
    imageops::resize(pixels, target_width, target_height, FilterType::Nearest)
}

// Every grid cell needs at least one pixel under it
fn upscale_to_grid(pixels: &RgbImage, grid: &GridSpec) -> RgbImage {
    let (width, height) = pixels.dimensions();
    let min_width = u32::try_from(grid.cols()).unwrap_or(u32::MAX);
    let min_height = u32::try_from(grid.rows()).unwrap_or(u32::MAX);
    if width >= min_width && height >= min_height {
        return pixels.clone();
    }
    imageops::resize(
        pixels,
        width.max(min_width),
        height.max(min_height),
        FilterType::Nearest,
    )
}
