//! Palette table sources

use std::path::PathBuf;

use crate::analysis::palette::PaletteTable;
use crate::io::error::{ArtGridError, Result};

/// Where the palette table comes from
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum PaletteSource {
    /// The built-in table
    #[default]
    Embedded,
    /// A JSON file holding an array of 5-color hex arrays
    File(PathBuf),
    /// JSON text holding an array of 5-color hex arrays
    Json(String),
}

impl PaletteSource {
    /// Read and parse the table
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The file cannot be read
    /// - The content is not an array of 5-color hex arrays
    pub fn load(&self) -> Result<PaletteTable> {
        match self {
            Self::Embedded => Ok(PaletteTable::embedded()),
            Self::File(path) => {
                let text =
                    std::fs::read_to_string(path).map_err(|e| ArtGridError::FileSystem {
                        path: path.clone(),
                        operation: "read palette file",
                        source: e,
                    })?;
                let table = PaletteTable::from_json_str(&text)?;
                tracing::debug!(
                    path = %path.display(),
                    palettes = table.len(),
                    "Loaded palette file"
                );
                Ok(table)
            }
            Self::Json(text) => PaletteTable::from_json_str(text),
        }
    }
}
