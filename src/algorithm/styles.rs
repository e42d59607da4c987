//! Motif catalogue and per-motif parameter draws

use serde::Serialize;
use std::fmt;
use std::str::FromStr;

use crate::io::configuration::CIRCLE_INNER_RING_CHANCE;
use crate::io::error::{ArtGridError, Result, invalid_parameter};
use crate::math::RandomStream;

/// Glyphs a letter block can show
pub const GLYPHS: [char; 46] = [
    'A', 'B', 'C', 'D', 'E', 'F', 'G', 'H', 'I', 'J', 'K', 'L', 'M', 'N', 'O', 'P', 'Q', 'R', 'S',
    'T', 'U', 'V', 'W', 'X', 'Y', 'Z', '0', '1', '2', '3', '4', '5', '6', '7', '8', '9', '+', '-',
    '*', '/', '=', '#', '@', '&', '%', '$',
];

/// Dots per side a dot grid can have
pub const DOTS_PER_SIDE: [u8; 3] = [2, 3, 4];

/// The motifs a cell can be drawn with
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum StyleKind {
    /// Full circle, optionally with an inner ring
    Circle,
    /// Two half circles centered on opposite corners
    OppositeCircles,
    /// Plus sign or diagonal cross
    Cross,
    /// One half of the cell filled
    HalfSquare,
    /// Triangle filling one side of a diagonal
    DiagonalSquare,
    /// Quarter disc anchored in one corner
    QuarterCircle,
    /// Square grid of dots
    Dots,
    /// Single centered glyph
    LetterBlock,
}

impl StyleKind {
    /// Every motif in catalogue order
    pub const ALL: [Self; 8] = [
        Self::Circle,
        Self::OppositeCircles,
        Self::Cross,
        Self::HalfSquare,
        Self::DiagonalSquare,
        Self::QuarterCircle,
        Self::Dots,
        Self::LetterBlock,
    ];

    /// Name used on the command line and in scene exports
    pub const fn name(self) -> &'static str {
        match self {
            Self::Circle => "circle",
            Self::OppositeCircles => "opposite_circles",
            Self::Cross => "cross",
            Self::HalfSquare => "half_square",
            Self::DiagonalSquare => "diagonal_square",
            Self::QuarterCircle => "quarter_circle",
            Self::Dots => "dots",
            Self::LetterBlock => "letter_block",
        }
    }

    /// Motifs with fine detail, favored over busy image regions
    pub const fn is_intricate(self) -> bool {
        matches!(
            self,
            Self::OppositeCircles | Self::Cross | Self::Dots | Self::LetterBlock
        )
    }

    /// Whether the motif may be used for the big block
    pub const fn suits_big_block(self) -> bool {
        !matches!(self, Self::Dots)
    }
}

impl fmt::Display for StyleKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for StyleKind {
    type Err = ArtGridError;

    fn from_str(s: &str) -> Result<Self> {
        let name = s.trim();
        Self::ALL
            .into_iter()
            .find(|kind| kind.name() == name)
            .ok_or_else(|| {
                invalid_parameter(
                    "block_styles",
                    &name,
                    &format!(
                        "unknown style, expected one of: {}",
                        Self::ALL.map(Self::name).join(", ")
                    ),
                )
            })
    }
}

/// Ordered, duplicate-free set of enabled motifs
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StyleSet {
    kinds: Vec<StyleKind>,
}

impl Default for StyleSet {
    fn default() -> Self {
        Self::all()
    }
}

impl StyleSet {
    /// Every known motif
    pub fn all() -> Self {
        Self {
            kinds: StyleKind::ALL.to_vec(),
        }
    }

    /// Build a set from any list of kinds, sorted into catalogue order
    pub fn new(kinds: impl IntoIterator<Item = StyleKind>) -> Self {
        let mut kinds: Vec<StyleKind> = kinds.into_iter().collect();
        kinds.sort_unstable();
        kinds.dedup();
        Self { kinds }
    }

    /// Parse a list of style names
    ///
    /// # Errors
    ///
    /// Returns an error if any name is not a known style
    pub fn parse<S: AsRef<str>>(names: &[S]) -> Result<Self> {
        let kinds = names
            .iter()
            .map(|name| name.as_ref().parse())
            .collect::<Result<Vec<StyleKind>>>()?;
        Ok(Self::new(kinds))
    }

    /// Enabled motifs in catalogue order
    pub fn kinds(&self) -> &[StyleKind] {
        &self.kinds
    }

    /// Whether a motif is enabled
    pub fn contains(&self, kind: StyleKind) -> bool {
        self.kinds.contains(&kind)
    }

    /// Whether no motif is enabled
    pub fn is_empty(&self) -> bool {
        self.kinds.is_empty()
    }

    /// Motifs available to the big block
    ///
    /// Dot grids read poorly when enlarged and are left out unless they are
    /// the only enabled motif.
    pub fn for_big_block(&self) -> Self {
        let kinds: Vec<StyleKind> = self
            .kinds
            .iter()
            .copied()
            .filter(|kind| kind.suits_big_block())
            .collect();
        if kinds.is_empty() {
            self.clone()
        } else {
            Self { kinds }
        }
    }
}

/// One of the two cell diagonals
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Diagonal {
    /// Top-left to bottom-right
    Main,
    /// Top-right to bottom-left
    Anti,
}

/// Shape of a cross motif
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CrossShape {
    /// Upright `+`
    Plus,
    /// Diagonal `x`
    Saltire,
}

/// A side of the cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Side {
    /// Upper half
    Top,
    /// Right half
    Right,
    /// Lower half
    Bottom,
    /// Left half
    Left,
}

impl Side {
    /// All sides in draw order
    pub const ALL: [Self; 4] = [Self::Top, Self::Right, Self::Bottom, Self::Left];
}

/// A corner of the cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Corner {
    /// Top-left corner
    TopLeft,
    /// Top-right corner
    TopRight,
    /// Bottom-right corner
    BottomRight,
    /// Bottom-left corner
    BottomLeft,
}

impl Corner {
    /// All corners in draw order
    pub const ALL: [Self; 4] = [
        Self::TopLeft,
        Self::TopRight,
        Self::BottomRight,
        Self::BottomLeft,
    ];
}

/// A resolved motif with its parameters
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "style", rename_all = "snake_case")]
pub enum Style {
    /// Full circle
    Circle {
        /// Draw a smaller concentric disc in the secondary color
        inner_ring: bool,
    },
    /// Half circles centered on two opposite corners
    OppositeCircles {
        /// Diagonal whose end corners hold the circle centers
        diagonal: Diagonal,
    },
    /// Thick cross
    Cross {
        /// Upright or diagonal
        shape: CrossShape,
    },
    /// Half of the cell filled
    HalfSquare {
        /// Filled half
        side: Side,
    },
    /// Triangle on one side of a diagonal
    DiagonalSquare {
        /// Diagonal bounding the filled triangle
        diagonal: Diagonal,
    },
    /// Quarter disc
    QuarterCircle {
        /// Corner holding the disc center
        corner: Corner,
    },
    /// Grid of dots
    Dots {
        /// Dots along each side
        per_side: u8,
    },
    /// Centered glyph
    LetterBlock {
        /// Character shown
        glyph: char,
    },
}

impl Style {
    /// The motif without its parameters
    pub const fn kind(&self) -> StyleKind {
        match self {
            Self::Circle { .. } => StyleKind::Circle,
            Self::OppositeCircles { .. } => StyleKind::OppositeCircles,
            Self::Cross { .. } => StyleKind::Cross,
            Self::HalfSquare { .. } => StyleKind::HalfSquare,
            Self::DiagonalSquare { .. } => StyleKind::DiagonalSquare,
            Self::QuarterCircle { .. } => StyleKind::QuarterCircle,
            Self::Dots { .. } => StyleKind::Dots,
            Self::LetterBlock { .. } => StyleKind::LetterBlock,
        }
    }

    /// Draw the parameters of a motif from the stream
    ///
    /// Binary choices use one `chance` draw, the rest one `index` draw.
    pub fn draw(kind: StyleKind, stream: &mut RandomStream) -> Self {
        match kind {
            StyleKind::Circle => Self::Circle {
                inner_ring: stream.chance(CIRCLE_INNER_RING_CHANCE),
            },
            StyleKind::OppositeCircles => Self::OppositeCircles {
                diagonal: draw_diagonal(stream),
            },
            StyleKind::Cross => Self::Cross {
                shape: if stream.chance(0.5) {
                    CrossShape::Plus
                } else {
                    CrossShape::Saltire
                },
            },
            StyleKind::HalfSquare => Self::HalfSquare {
                side: stream.pick(&Side::ALL).copied().unwrap_or(Side::Top),
            },
            StyleKind::DiagonalSquare => Self::DiagonalSquare {
                diagonal: draw_diagonal(stream),
            },
            StyleKind::QuarterCircle => Self::QuarterCircle {
                corner: stream.pick(&Corner::ALL).copied().unwrap_or(Corner::TopLeft),
            },
            StyleKind::Dots => Self::Dots {
                per_side: stream.pick(&DOTS_PER_SIDE).copied().unwrap_or(2),
            },
            StyleKind::LetterBlock => Self::LetterBlock {
                glyph: stream.pick(&GLYPHS).copied().unwrap_or('A'),
            },
        }
    }
}

fn draw_diagonal(stream: &mut RandomStream) -> Diagonal {
    if stream.chance(0.5) {
        Diagonal::Main
    } else {
        Diagonal::Anti
    }
}
