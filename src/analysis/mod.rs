/// K-means clustering over RGB samples
pub mod clustering;
/// Image loading, palette extraction and region analysis
pub mod image;
/// Five-color palettes and palette tables
pub mod palette;
