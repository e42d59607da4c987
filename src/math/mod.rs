//! Color arithmetic and the seeded random stream

/// RGB colors, hex parsing and interpolation
pub mod color;
/// Seeded random stream with a fixed draw order
pub mod random;

pub use color::Rgb;
pub use random::RandomStream;
