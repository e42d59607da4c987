//! Style and color resolution for cells, the big block and the backdrop
//!
//! Each free cell draws, in order: its style, that style's parameters, then
//! its background, primary and secondary palette slots. The big block draws
//! the same sequence after all cells.

use serde::Serialize;

use crate::algorithm::styles::{Style, StyleKind, StyleSet};
use crate::analysis::image::{RegionFeature, RegionMap};
use crate::analysis::palette::{PALETTE_SIZE, Palette};
use crate::io::configuration::COMPLEXITY_STYLE_BIAS;
use crate::math::{RandomStream, Rgb};
use crate::spatial::grid::BigBlockPlacement;

/// The three colors a motif is drawn with
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CellColors {
    /// Motif fill
    pub primary: Rgb,
    /// Accent details such as inner rings
    pub secondary: Rgb,
    /// Cell backdrop
    pub background: Rgb,
}

impl CellColors {
    /// Interpolate all three colors toward an image region's dominant color
    ///
    /// A factor of 0 leaves the palette colors untouched and 1 replaces them
    /// with the dominant color.
    pub fn blend_toward(self, feature: &RegionFeature, factor: f64) -> Self {
        Self {
            primary: self.primary.lerp(feature.dominant, factor),
            secondary: self.secondary.lerp(feature.dominant, factor),
            background: self.background.lerp(feature.dominant, factor),
        }
    }
}

/// Two-color canvas backdrop
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct BackgroundGradient {
    /// Gradient center color
    pub start: Rgb,
    /// Gradient edge color
    pub end: Rgb,
}

/// Pick the palette pair with the largest luminance difference
///
/// The earliest pair wins ties. One `chance` draw then decides which of the
/// two becomes the start color.
pub fn background_gradient(palette: &Palette, stream: &mut RandomStream) -> BackgroundGradient {
    let colors = palette.colors();
    let mut best = (0, 1);
    let mut best_difference = f64::NEG_INFINITY;
    for first in 0..PALETTE_SIZE {
        for second in first + 1..PALETTE_SIZE {
            let (Some(a), Some(b)) = (colors.get(first), colors.get(second)) else {
                continue;
            };
            let difference = (a.luminance() - b.luminance()).abs();
            if difference > best_difference {
                best_difference = difference;
                best = (first, second);
            }
        }
    }

    let start = palette.get(best.0).unwrap_or_default();
    let end = palette.get(best.1).unwrap_or_default();
    if stream.chance(0.5) {
        BackgroundGradient {
            start: end,
            end: start,
        }
    } else {
        BackgroundGradient { start, end }
    }
}

/// Style weights for a set of candidates, uniform without a region feature
pub fn style_weights(candidates: &[StyleKind], feature: Option<&RegionFeature>) -> Vec<f64> {
    candidates
        .iter()
        .map(|kind| {
            feature.map_or(1.0, |feature| {
                let affinity = if kind.is_intricate() {
                    feature.complexity
                } else {
                    1.0 - feature.complexity
                };
                COMPLEXITY_STYLE_BIAS.mul_add(affinity, 1.0)
            })
        })
        .collect()
}

/// Resolves motifs and colors against the active palette
pub struct Resolver<'a> {
    palette: &'a Palette,
    cell_styles: StyleSet,
    block_styles: StyleSet,
    regions: Option<&'a RegionMap>,
    blend_factor: f64,
}

impl<'a> Resolver<'a> {
    /// Create a resolver for plain palette mode
    pub fn new(palette: &'a Palette, styles: &StyleSet) -> Self {
        Self {
            palette,
            cell_styles: styles.clone(),
            block_styles: styles.for_big_block(),
            regions: None,
            blend_factor: 0.0,
        }
    }

    /// Steer colors and motif choice by an image region map
    #[must_use]
    pub fn with_regions(mut self, regions: &'a RegionMap, blend_factor: f64) -> Self {
        self.regions = Some(regions);
        self.blend_factor = blend_factor;
        self
    }

    /// Resolve the motif and colors of one cell
    pub fn resolve_cell(
        &self,
        row: usize,
        col: usize,
        stream: &mut RandomStream,
    ) -> (Style, CellColors) {
        let feature = self.regions.and_then(|regions| regions.get(row, col)).copied();
        self.resolve(self.cell_styles.kinds(), feature.as_ref(), stream)
    }

    /// Resolve the motif and colors of the big block
    pub fn resolve_block(
        &self,
        placement: &BigBlockPlacement,
        stream: &mut RandomStream,
    ) -> (Style, CellColors) {
        let feature = self
            .regions
            .and_then(|regions| regions.footprint_feature(placement));
        self.resolve(self.block_styles.kinds(), feature.as_ref(), stream)
    }

    fn resolve(
        &self,
        candidates: &[StyleKind],
        feature: Option<&RegionFeature>,
        stream: &mut RandomStream,
    ) -> (Style, CellColors) {
        let weights = style_weights(candidates, feature);
        let kind = candidates
            .get(stream.weighted_choice(&weights))
            .copied()
            .unwrap_or(StyleKind::Circle);
        let style = Style::draw(kind, stream);

        let colors = self.draw_colors(stream);
        let colors = match feature {
            Some(feature) => colors.blend_toward(feature, self.blend_factor),
            None => colors,
        };
        (style, colors)
    }

    /// Draw background, primary and secondary slots without replacement
    pub fn draw_colors(&self, stream: &mut RandomStream) -> CellColors {
        let mut slots: Vec<usize> = (0..PALETTE_SIZE).collect();
        let mut take = |stream: &mut RandomStream| {
            let index = stream.index(slots.len());
            let slot = if index < slots.len() {
                slots.remove(index)
            } else {
                0
            };
            self.palette.get(slot).unwrap_or_default()
        };

        let background = take(stream);
        let primary = take(stream);
        let secondary = take(stream);
        CellColors {
            primary,
            secondary,
            background,
        }
    }
}
