/// Command-line interface and run orchestration
pub mod cli;
/// Defaults, limits and run configuration
pub mod configuration;
/// Error types and recoverable warnings
pub mod error;
/// Atomic writes of rendered output
pub mod export;
/// Tracing subscriber setup
pub mod logging;
/// Palette table sources
pub mod palette_source;
/// SVG rendering of scenes
pub mod svg;
