//! Error types and recoverable warnings for scene generation

use std::fmt;
use std::path::{Path, PathBuf};

/// Main error type for all generation operations
#[derive(Debug)]
pub enum ArtGridError {
    /// Run configuration value failed validation
    InvalidParameter {
        /// Name of the invalid parameter
        parameter: &'static str,
        /// Provided value that failed validation
        value: String,
        /// Explanation of why the value is invalid
        reason: String,
    },

    /// No motif is left to draw from after filtering the enabled styles
    EmptyStyleSet,

    /// Explicit palette index exceeds the palette table
    PaletteIndexOutOfRange {
        /// The requested palette index
        index: usize,
        /// Number of palettes in the table
        table_size: usize,
    },

    /// Palette source content is not an array of 5-color hex arrays
    PaletteFormat {
        /// Description of what's wrong with the palette data
        reason: String,
    },

    /// Failed to open or decode a source image
    ImageLoad {
        /// Path to the image file
        path: PathBuf,
        /// Underlying image loading error
        source: image::ImageError,
    },

    /// Decoded image has no pixels to analyze
    EmptyImage {
        /// Image width in pixels
        width: u32,
        /// Image height in pixels
        height: u32,
    },

    /// A grid position is not covered exactly once by the assembled scene
    ///
    /// Indicates a defect in layout or resolution, never a user error.
    IncompleteScene {
        /// Grid row of the offending position
        row: usize,
        /// Grid column of the offending position
        col: usize,
        /// Number of records claiming the position
        coverage: u8,
    },

    /// General file system operation failure
    FileSystem {
        /// Path involved in the operation
        path: PathBuf,
        /// Description of the operation that failed
        operation: &'static str,
        /// Underlying I/O error
        source: std::io::Error,
    },

    /// Scene could not be serialized for export
    Serialization {
        /// Description of the failure
        reason: String,
    },

    /// Log subscriber could not be installed
    LoggingSetup {
        /// Description of the failure
        reason: String,
    },
}

impl ArtGridError {
    /// Whether the error stems from invalid run configuration
    ///
    /// Configuration errors are raised before any drawing work begins.
    pub const fn is_configuration(&self) -> bool {
        matches!(
            self,
            Self::InvalidParameter { .. } | Self::EmptyStyleSet | Self::PaletteIndexOutOfRange { .. }
        )
    }
}

impl fmt::Display for ArtGridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidParameter {
                parameter,
                value,
                reason,
            } => {
                write!(f, "Invalid parameter '{parameter}' = '{value}': {reason}")
            }
            Self::EmptyStyleSet => {
                write!(f, "No block styles enabled: at least one style is required")
            }
            Self::PaletteIndexOutOfRange { index, table_size } => {
                write!(
                    f,
                    "Palette index {index} is out of range (table holds {table_size} palettes)"
                )
            }
            Self::PaletteFormat { reason } => {
                write!(f, "Invalid palette data: {reason}")
            }
            Self::ImageLoad { path, source } => {
                write!(f, "Failed to load image '{}': {source}", path.display())
            }
            Self::EmptyImage { width, height } => {
                write!(f, "Image has no pixels ({width}x{height})")
            }
            Self::IncompleteScene { row, col, coverage } => {
                write!(
                    f,
                    "Scene covers position ({row}, {col}) {coverage} times instead of exactly once"
                )
            }
            Self::FileSystem {
                path,
                operation,
                source,
            } => {
                write!(
                    f,
                    "File system error during {operation} on '{}': {source}",
                    path.display()
                )
            }
            Self::Serialization { reason } => {
                write!(f, "Failed to serialize scene: {reason}")
            }
            Self::LoggingSetup { reason } => {
                write!(f, "Failed to initialize logging: {reason}")
            }
        }
    }
}

impl std::error::Error for ArtGridError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::ImageLoad { source, .. } => Some(source),
            Self::FileSystem { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Convenience type alias for generation results
pub type Result<T> = std::result::Result<T, ArtGridError>;

/// Attaches the path being worked on to errors converted via `From`
pub trait WithPath<T> {
    /// Replace the placeholder path of I/O and image errors
    ///
    /// # Errors
    ///
    /// Propagates the original error with the path applied
    fn with_path(self, path: &Path) -> Result<T>;
}

impl<T, E> WithPath<T> for std::result::Result<T, E>
where
    E: Into<ArtGridError>,
{
    fn with_path(self, path: &Path) -> Result<T> {
        self.map_err(|e| {
            let mut error = e.into();
            // Only errors created through `From` carry a placeholder path
            match &mut error {
                ArtGridError::ImageLoad { path: slot, .. }
                | ArtGridError::FileSystem { path: slot, .. } => {
                    *slot = path.to_path_buf();
                }
                _ => {}
            }
            error
        })
    }
}

impl From<image::ImageError> for ArtGridError {
    fn from(err: image::ImageError) -> Self {
        Self::ImageLoad {
            path: PathBuf::from("<unknown>"),
            source: err,
        }
    }
}

impl From<std::io::Error> for ArtGridError {
    fn from(err: std::io::Error) -> Self {
        Self::FileSystem {
            path: PathBuf::from("<unknown>"),
            operation: "unknown",
            source: err,
        }
    }
}

impl From<serde_json::Error> for ArtGridError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization {
            reason: err.to_string(),
        }
    }
}

/// Create an invalid parameter error
pub fn invalid_parameter(
    parameter: &'static str,
    value: &impl ToString,
    reason: &impl ToString,
) -> ArtGridError {
    ArtGridError::InvalidParameter {
        parameter,
        value: value.to_string(),
        reason: reason.to_string(),
    }
}

/// Conditions the generator recovered from while still producing a scene
#[derive(Debug, Clone, PartialEq)]
pub enum Warning {
    /// Palette source was unusable, the embedded table was used instead
    PaletteFallback {
        /// Why the source was rejected
        reason: String,
    },
    /// Image could not be used, generation continued in plain palette mode
    ImageFallback {
        /// Why the image was rejected
        reason: String,
    },
    /// No in-bounds big block placement was found
    BigBlockAbandoned {
        /// Requested footprint side in cells
        size: usize,
        /// Placement attempts drawn before giving up
        attempts: usize,
    },
    /// Big block footprint covers more of the grid than the configured limit
    BigBlockDominates {
        /// Fraction of grid cells inside the footprint
        coverage: f64,
        /// Configured coverage limit
        limit: f64,
    },
}

impl fmt::Display for Warning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::PaletteFallback { reason } => {
                write!(f, "Palette source unusable ({reason}), using embedded palettes")
            }
            Self::ImageFallback { reason } => {
                write!(f, "Image unusable ({reason}), continuing without image")
            }
            Self::BigBlockAbandoned { size, attempts } => {
                write!(
                    f,
                    "No room for a {size}x{size} big block after {attempts} attempts, skipping it"
                )
            }
            Self::BigBlockDominates { coverage, limit } => {
                write!(
                    f,
                    "Big block covers {:.0}% of the grid (limit {:.0}%)",
                    coverage * 100.0,
                    limit * 100.0
                )
            }
        }
    }
}
