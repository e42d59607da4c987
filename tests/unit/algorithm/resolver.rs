//! Tests for style and color resolution

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use artgrid::algorithm::resolver::{
        CellColors, Resolver, background_gradient, style_weights,
    };
    use artgrid::algorithm::styles::{StyleKind, StyleSet};
    use artgrid::analysis::image::{RegionFeature, RegionMap};
    use artgrid::analysis::palette::Palette;
    use artgrid::math::{RandomStream, Rgb};
    use artgrid::spatial::{BigBlockPlacement, GridSpec};

    fn distinct_palette() -> Palette {
        Palette::new([
            Rgb::new(200, 0, 0),
            Rgb::new(0, 200, 0),
            Rgb::new(0, 0, 200),
            Rgb::new(250, 250, 250),
            Rgb::new(5, 5, 5),
        ])
    }

    // Tests the three colors are distinct palette slots
    // Verified by drawing slots with replacement
    #[test]
    fn test_colors_drawn_without_replacement() {
        let palette = distinct_palette();
        let resolver = Resolver::new(&palette, &StyleSet::all());
        for seed in 0..200 {
            let mut stream = RandomStream::new(seed);
            let colors = resolver.draw_colors(&mut stream);
            let unique: HashSet<Rgb> = [colors.primary, colors.secondary, colors.background]
                .into_iter()
                .collect();
            assert_eq!(unique.len(), 3);
            assert!(unique.iter().all(|c| palette.colors().contains(c)));
        }
    }

    // Tests the gradient spans the largest luminance gap
    // Verified by picking the first two slots
    #[test]
    fn test_gradient_uses_extreme_pair() {
        let palette = distinct_palette();
        for seed in 0..20 {
            let mut stream = RandomStream::new(seed);
            let gradient = background_gradient(&palette, &mut stream);
            let pair: HashSet<Rgb> = [gradient.start, gradient.end].into_iter().collect();
            let expected: HashSet<Rgb> = [Rgb::new(250, 250, 250), Rgb::new(5, 5, 5)]
                .into_iter()
                .collect();
            assert_eq!(pair, expected);
        }
    }

    // Tests both gradient orientations occur
    // Verified by skipping the orientation draw
    #[test]
    fn test_gradient_orientation_varies() {
        let palette = distinct_palette();
        let starts: HashSet<Rgb> = (0..40)
            .map(|seed| background_gradient(&palette, &mut RandomStream::new(seed)).start)
            .collect();
        assert_eq!(starts.len(), 2);
    }

    // Tests weights are uniform without a region feature
    // Verified by applying the bias unconditionally
    #[test]
    fn test_uniform_weights_without_feature() {
        let weights = style_weights(&StyleKind::ALL, None);
        assert_eq!(weights, vec![1.0; 8]);
    }

    // Tests busy regions favor intricate motifs
    // Verified by inverting the affinity
    #[test]
    fn test_weights_follow_complexity() {
        let busy = RegionFeature {
            dominant: Rgb::new(0, 0, 0),
            contrast: Rgb::new(255, 255, 255),
            complexity: 1.0,
        };
        let weights = style_weights(&[StyleKind::Circle, StyleKind::Dots], Some(&busy));
        assert_eq!(weights, vec![1.0, 3.0]);

        let calm = RegionFeature::flat(Rgb::new(9, 9, 9));
        let weights = style_weights(&[StyleKind::Circle, StyleKind::Dots], Some(&calm));
        assert_eq!(weights, vec![3.0, 1.0]);
    }

    // Tests resolved cells only use enabled motifs
    // Verified by drawing from the full catalogue
    #[test]
    fn test_cells_respect_style_set() {
        let palette = distinct_palette();
        let styles = StyleSet::new([StyleKind::Cross, StyleKind::QuarterCircle]);
        let resolver = Resolver::new(&palette, &styles);
        let mut stream = RandomStream::new(3);
        for _ in 0..200 {
            let (style, _) = resolver.resolve_cell(0, 0, &mut stream);
            assert!(styles.contains(style.kind()));
        }
    }

    // Tests the big block never uses dot grids when others are enabled
    // Verified by using the cell style set for the block
    #[test]
    fn test_block_skips_dots() {
        let palette = distinct_palette();
        let styles = StyleSet::new([StyleKind::Dots, StyleKind::Circle]);
        let resolver = Resolver::new(&palette, &styles);
        let block = BigBlockPlacement {
            row: 0,
            col: 0,
            size: 2,
        };
        let mut stream = RandomStream::new(8);
        for _ in 0..100 {
            let (style, _) = resolver.resolve_block(&block, &mut stream);
            assert_eq!(style.kind(), StyleKind::Circle);
        }
    }

    // Tests blend factor boundaries
    // Verified by blending the background toward the contrast color
    #[test]
    fn test_blend_boundaries() {
        let colors = CellColors {
            primary: Rgb::new(10, 20, 30),
            secondary: Rgb::new(40, 50, 60),
            background: Rgb::new(70, 80, 90),
        };
        let feature = RegionFeature {
            dominant: Rgb::new(200, 100, 0),
            contrast: Rgb::new(0, 100, 200),
            complexity: 0.4,
        };

        assert_eq!(colors.blend_toward(&feature, 0.0), colors);
        assert_eq!(
            colors.blend_toward(&feature, 1.0),
            CellColors {
                primary: feature.dominant,
                secondary: feature.dominant,
                background: feature.dominant,
            }
        );
    }

    // Tests a full blend ignores the palette and the contrast color
    // Verified by blending the background toward the contrast color
    #[test]
    fn test_full_blend_resolves_to_dominant() {
        let palette = distinct_palette();
        let grid = GridSpec::new(1, 1, 10).unwrap();
        let dominant = Rgb::new(240, 10, 10);
        let regions = RegionMap::uniform(
            &grid,
            RegionFeature {
                dominant,
                contrast: Rgb::new(10, 10, 240),
                complexity: 0.5,
            },
        );
        let styles = StyleSet::all();
        let resolver = Resolver::new(&palette, &styles).with_regions(&regions, 1.0);
        let mut stream = RandomStream::new(3);
        let (_, colors) = resolver.resolve_cell(0, 0, &mut stream);
        assert_eq!(
            colors,
            CellColors {
                primary: dominant,
                secondary: dominant,
                background: dominant,
            }
        );
    }

    // Tests region maps steer cell colors
    // Verified by ignoring the region map in resolve_cell
    #[test]
    fn test_regions_applied_to_cells() {
        let palette = distinct_palette();
        let grid = GridSpec::new(2, 2, 10).unwrap();
        let regions = RegionMap::uniform(&grid, RegionFeature::flat(Rgb::new(1, 2, 3)));
        let styles = StyleSet::all();
        let resolver = Resolver::new(&palette, &styles).with_regions(&regions, 1.0);
        let mut stream = RandomStream::new(6);
        let (_, colors) = resolver.resolve_cell(1, 1, &mut stream);
        assert_eq!(colors.primary, Rgb::new(1, 2, 3));
        assert_eq!(colors.background, Rgb::new(1, 2, 3));
    }
}
