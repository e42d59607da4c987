//! Seeded grid-based generative art
//!
//! A run resolves a grid of square cells, places an optional focal block
//! spanning several cells, draws a motif and palette colors for every cell
//! and renders the resulting scene as SVG. Palettes come from a built-in
//! table, a palette file or a source image. The same seed and inputs always
//! yield the same scene.

#![forbid(unsafe_code)]

/// Scene generation, style resolution and assembly
pub mod algorithm;
/// Palettes, clustering and image analysis
pub mod analysis;
/// Input/output operations, configuration and error handling
pub mod io;
/// Color arithmetic and the seeded random stream
pub mod math;
/// Grid geometry and big block layout
pub mod spatial;

pub use io::error::{ArtGridError, Result};
