//! Five-color palettes and the palette table they are selected from

use serde::Serialize;

use crate::io::error::{ArtGridError, Result};
use crate::math::{RandomStream, Rgb};

/// Number of colors in every palette
pub const PALETTE_SIZE: usize = 5;

// A selection from the nice-color-palettes collection
const EMBEDDED_PALETTES: [[&str; PALETTE_SIZE]; 8] = [
    ["#69d2e7", "#a7dbd8", "#e0e4cc", "#f38630", "#fa6900"],
    ["#fe4365", "#fc9d9a", "#f9cdad", "#c8c8a9", "#83af9b"],
    ["#ecd078", "#d95b43", "#c02942", "#542437", "#53777a"],
    ["#556270", "#4ecdc4", "#c7f464", "#ff6b6b", "#c44d58"],
    ["#774f38", "#e08e79", "#f1d4af", "#ece5ce", "#c5e0dc"],
    ["#e8ddcb", "#cdb380", "#036564", "#033649", "#031634"],
    ["#490a3d", "#bd1550", "#e97f02", "#f8ca00", "#8a9b0f"],
    ["#594f4f", "#547980", "#45ada8", "#9de0ad", "#e5fcc2"],
];

/// An ordered set of exactly five colors
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Palette {
    colors: [Rgb; PALETTE_SIZE],
}

impl Palette {
    /// Create a palette from five colors
    pub const fn new(colors: [Rgb; PALETTE_SIZE]) -> Self {
        Self { colors }
    }

    /// Parse a palette from hex strings
    ///
    /// # Errors
    ///
    /// Returns an error if there are not exactly five entries or any entry
    /// is not a `#rrggbb` color
    pub fn from_hex<S: AsRef<str>>(entries: &[S]) -> Result<Self> {
        if entries.len() != PALETTE_SIZE {
            return Err(ArtGridError::PaletteFormat {
                reason: format!(
                    "expected {PALETTE_SIZE} colors, found {}",
                    entries.len()
                ),
            });
        }

        let mut colors = [Rgb::default(); PALETTE_SIZE];
        for (slot, entry) in colors.iter_mut().zip(entries) {
            *slot = entry
                .as_ref()
                .parse()
                .map_err(|e| ArtGridError::PaletteFormat {
                    reason: format!("{e}"),
                })?;
        }
        Ok(Self { colors })
    }

    /// The palette colors in order
    pub const fn colors(&self) -> &[Rgb; PALETTE_SIZE] {
        &self.colors
    }

    /// Color at a slot
    pub fn get(&self, slot: usize) -> Option<Rgb> {
        self.colors.get(slot).copied()
    }
}

/// How the active palette is picked from the table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PaletteChoice {
    /// A specific table entry
    Index(usize),
    /// A uniformly drawn table entry
    #[default]
    Random,
}

/// Ordered, non-empty collection of palettes
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaletteTable {
    palettes: Vec<Palette>,
}

impl PaletteTable {
    /// The built-in table used when no palette source is usable
    pub fn embedded() -> Self {
        let palettes = EMBEDDED_PALETTES
            .iter()
            .map(|entry| Palette::new(entry.map(|hex| hex.parse().unwrap_or_default())))
            .collect();
        Self { palettes }
    }

    /// Build a table from parsed palette entries
    ///
    /// # Errors
    ///
    /// Returns an error if the list is empty or any entry is not an array of
    /// five hex colors
    pub fn load_from<S: AsRef<str>>(entries: &[Vec<S>]) -> Result<Self> {
        if entries.is_empty() {
            return Err(ArtGridError::PaletteFormat {
                reason: "palette list is empty".to_string(),
            });
        }

        let palettes = entries
            .iter()
            .enumerate()
            .map(|(index, entry)| {
                Palette::from_hex(entry).map_err(|e| match e {
                    ArtGridError::PaletteFormat { reason } => ArtGridError::PaletteFormat {
                        reason: format!("entry {index}: {reason}"),
                    },
                    other => other,
                })
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(Self { palettes })
    }

    /// Parse a JSON array of 5-color hex arrays
    ///
    /// # Errors
    ///
    /// Returns an error if the text is not such an array
    pub fn from_json_str(text: &str) -> Result<Self> {
        let entries: Vec<Vec<String>> =
            serde_json::from_str(text).map_err(|e| ArtGridError::PaletteFormat {
                reason: e.to_string(),
            })?;
        Self::load_from(&entries)
    }

    /// Number of palettes
    pub fn len(&self) -> usize {
        self.palettes.len()
    }

    /// Whether the table holds no palettes
    pub fn is_empty(&self) -> bool {
        self.palettes.is_empty()
    }

    /// Palette at an index
    pub fn get(&self, index: usize) -> Option<&Palette> {
        self.palettes.get(index)
    }

    /// Pick the active palette
    ///
    /// A random choice draws one index from the stream; an explicit index
    /// draws nothing.
    ///
    /// # Errors
    ///
    /// Returns an error if an explicit index is outside the table
    pub fn select(&self, choice: PaletteChoice, stream: &mut RandomStream) -> Result<Palette> {
        let index = match choice {
            PaletteChoice::Index(index) => index,
            PaletteChoice::Random => stream.index(self.palettes.len()),
        };

        self.palettes
            .get(index)
            .copied()
            .ok_or(ArtGridError::PaletteIndexOutOfRange {
                index,
                table_size: self.palettes.len(),
            })
    }
}
