/// End-to-end scene generation
pub mod generator;
/// Style and color resolution
pub mod resolver;
/// Scene records and coverage-checked assembly
pub mod scene;
/// Motif kinds, style sets and parameter draws
pub mod styles;
