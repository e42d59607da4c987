//! Spatial layout of the artwork
//!
//! This module contains spatial-related functionality including:
//! - Grid geometry and canvas dimensions
//! - Big block footprints and coverage tracking
//! - Grid sizing and big block placement

/// Grid geometry, footprints and coverage tracking
pub mod grid;
/// Grid sizing and rejection-sampled big block placement
pub mod layout;

pub use grid::{BigBlockPlacement, CoverageMap, GridSpec};
pub use layout::{BlockPlacement, LayoutPlanner};
