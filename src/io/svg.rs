//! SVG markup for resolved scenes

use std::fmt;

use crate::algorithm::resolver::CellColors;
use crate::algorithm::scene::Scene;
use crate::algorithm::styles::{Corner, CrossShape, Diagonal, Side, Style};
use crate::math::Rgb;

/// Render a scene to an SVG document
pub fn render_svg(scene: &Scene) -> String {
    SvgDocument::new(scene).to_string()
}

/// Display adapter writing a scene as SVG
pub struct SvgDocument<'a> {
    scene: &'a Scene,
}

impl<'a> SvgDocument<'a> {
    /// Wrap a scene for rendering
    pub const fn new(scene: &'a Scene) -> Self {
        Self { scene }
    }
}

/// Square area a motif is drawn into
#[derive(Debug, Clone, Copy)]
struct Square {
    x: f64,
    y: f64,
    size: f64,
}

impl Square {
    const fn center(self) -> (f64, f64) {
        (self.x + self.size / 2.0, self.y + self.size / 2.0)
    }
}

impl fmt::Display for SvgDocument<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (width, height) = self.scene.canvas_size();
        let gradient = self.scene.gradient();
        let cell_size = f64::from(self.scene.grid().cell_size());

        writeln!(
            f,
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="{width}px" height="{height}px" viewBox="0 0 {width} {height}">"#
        )?;
        writeln!(
            f,
            r#"<defs><style>svg * {{ shape-rendering: crispEdges; }}</style><radialGradient id="background_gradient"><stop offset="0" stop-color="{}"/><stop offset="1" stop-color="{}"/></radialGradient></defs>"#,
            gradient.start, gradient.end
        )?;
        writeln!(
            f,
            r#"<rect x="0" y="0" width="{width}" height="{height}" fill="url(#background_gradient)"/>"#
        )?;

        for cell in self.scene.cells() {
            let area = Square {
                x: cell.col as f64 * cell_size,
                y: cell.row as f64 * cell_size,
                size: cell_size,
            };
            let id = format!("cell-{}-{}", cell.row, cell.col);
            draw_motif(f, &cell.style, area, &cell.colors, &id)?;
        }

        if let Some(block) = self.scene.big_block() {
            let placement = block.placement;
            let area = Square {
                x: placement.col as f64 * cell_size,
                y: placement.row as f64 * cell_size,
                size: placement.size as f64 * cell_size,
            };
            draw_motif(f, &block.style, area, &block.colors, "big-block")?;
        }

        writeln!(f, "</svg>")
    }
}

fn draw_motif(
    f: &mut fmt::Formatter<'_>,
    style: &Style,
    area: Square,
    colors: &CellColors,
    id: &str,
) -> fmt::Result {
    let Square { x, y, size } = area;
    write!(
        f,
        r#"<g id="{id}" class="{}"><rect x="{x}" y="{y}" width="{size}" height="{size}" fill="{}"/>"#,
        style.kind(),
        colors.background
    )?;

    match *style {
        Style::Circle { inner_ring } => {
            let (cx, cy) = area.center();
            circle(f, cx, cy, size / 2.0, colors.primary)?;
            if inner_ring {
                circle(f, cx, cy, size / 4.0, colors.secondary)?;
            }
        }
        Style::OppositeCircles { diagonal } => {
            let clip = format!("{id}-clip");
            write!(
                f,
                r#"<clipPath id="{clip}"><rect x="{x}" y="{y}" width="{size}" height="{size}"/></clipPath><g clip-path="url(#{clip})">"#
            )?;
            let centers = match diagonal {
                Diagonal::Main => [(x, y), (x + size, y + size)],
                Diagonal::Anti => [(x + size, y), (x, y + size)],
            };
            for (cx, cy) in centers {
                circle(f, cx, cy, size / 2.0, colors.primary)?;
            }
            write!(f, "</g>")?;
        }
        Style::Cross { shape } => match shape {
            CrossShape::Plus => {
                let third = size / 3.0;
                rect(f, x, y + third, size, third, colors.primary)?;
                rect(f, x + third, y, third, size, colors.primary)?;
            }
            CrossShape::Saltire => {
                let width = size / 6.0;
                thick_line(f, (x, y), (x + size, y + size), width, colors.primary)?;
                thick_line(f, (x + size, y), (x, y + size), width, colors.primary)?;
            }
        },
        Style::HalfSquare { side } => {
            let half = size / 2.0;
            let (hx, hy, hw, hh) = match side {
                Side::Top => (x, y, size, half),
                Side::Right => (x + half, y, half, size),
                Side::Bottom => (x, y + half, size, half),
                Side::Left => (x, y, half, size),
            };
            rect(f, hx, hy, hw, hh, colors.primary)?;
        }
        Style::DiagonalSquare { diagonal } => {
            let points = match diagonal {
                Diagonal::Main => [(x, y), (x + size, y + size), (x, y + size)],
                Diagonal::Anti => [(x + size, y), (x + size, y + size), (x, y)],
            };
            polygon(f, &points, colors.primary)?;
        }
        Style::QuarterCircle { corner } => {
            // (dx, dy) point from the disc center into the cell
            let (cx, cy, dx, dy) = match corner {
                Corner::TopLeft => (x, y, 1.0_f64, 1.0_f64),
                Corner::TopRight => (x + size, y, -1.0, 1.0),
                Corner::BottomRight => (x + size, y + size, -1.0, -1.0),
                Corner::BottomLeft => (x, y + size, 1.0, -1.0),
            };
            let sweep = u8::from((dx > 0.0) == (dy > 0.0));
            write!(
                f,
                r#"<path d="M {cx} {cy} L {} {cy} A {size} {size} 0 0 {sweep} {cx} {} Z" fill="{}"/>"#,
                dx.mul_add(size, cx),
                dy.mul_add(size, cy),
                colors.primary
            )?;
        }
        Style::Dots { per_side } => {
            let step = size / f64::from(per_side);
            let radius = step * 0.3;
            for i in 0..per_side {
                for j in 0..per_side {
                    let cx = (f64::from(i) + 0.5).mul_add(step, x);
                    let cy = (f64::from(j) + 0.5).mul_add(step, y);
                    circle(f, cx, cy, radius, colors.primary)?;
                }
            }
        }
        Style::LetterBlock { glyph } => {
            let (cx, cy) = area.center();
            write!(
                f,
                r#"<text x="{cx}" y="{}" font-family="monospace" font-size="{}" font-weight="bold" fill="{}" text-anchor="middle">{}</text>"#,
                size.mul_add(0.3, cy),
                size * 0.8,
                colors.primary,
                escape_glyph(glyph)
            )?;
        }
    }

    writeln!(f, "</g>")
}

fn circle(f: &mut fmt::Formatter<'_>, cx: f64, cy: f64, r: f64, fill: Rgb) -> fmt::Result {
    write!(f, r#"<circle cx="{cx}" cy="{cy}" r="{r}" fill="{fill}"/>"#)
}

fn rect(
    f: &mut fmt::Formatter<'_>,
    x: f64,
    y: f64,
    width: f64,
    height: f64,
    fill: Rgb,
) -> fmt::Result {
    write!(
        f,
        r#"<rect x="{x}" y="{y}" width="{width}" height="{height}" fill="{fill}"/>"#
    )
}

fn polygon(f: &mut fmt::Formatter<'_>, points: &[(f64, f64)], fill: Rgb) -> fmt::Result {
    write!(f, r#"<polygon points=""#)?;
    for (index, (px, py)) in points.iter().enumerate() {
        if index > 0 {
            write!(f, " ")?;
        }
        write!(f, "{px},{py}")?;
    }
    write!(f, r#"" fill="{fill}"/>"#)
}

// Quadrilateral of the given width centered on the segment
fn thick_line(
    f: &mut fmt::Formatter<'_>,
    from: (f64, f64),
    to: (f64, f64),
    width: f64,
    fill: Rgb,
) -> fmt::Result {
    let (dx, dy) = (to.0 - from.0, to.1 - from.1);
    let length = dx.hypot(dy);
    if length <= f64::EPSILON {
        return Ok(());
    }
    let (nx, ny) = (-dy / length * width / 2.0, dx / length * width / 2.0);
    polygon(
        f,
        &[
            (from.0 + nx, from.1 + ny),
            (to.0 + nx, to.1 + ny),
            (to.0 - nx, to.1 - ny),
            (from.0 - nx, from.1 - ny),
        ],
        fill,
    )
}

fn escape_glyph(glyph: char) -> String {
    match glyph {
        '&' => "&amp;".to_string(),
        '<' => "&lt;".to_string(),
        '>' => "&gt;".to_string(),
        other => other.to_string(),
    }
}
