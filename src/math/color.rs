//! RGB color values with hex parsing, interpolation and luminance

use serde::{Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// An opaque 8-bit RGB color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rgb {
    /// Red channel
    pub r: u8,
    /// Green channel
    pub g: u8,
    /// Blue channel
    pub b: u8,
}

impl Rgb {
    /// Create a color from its channels
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Create a color from floating point channels, rounding and clamping to `0..=255`
    pub fn from_channels(channels: [f64; 3]) -> Self {
        let [r, g, b] = channels.map(|c| c.round().clamp(0.0, 255.0) as u8);
        Self { r, g, b }
    }

    /// Channels as floating point values
    pub fn channels(self) -> [f64; 3] {
        [f64::from(self.r), f64::from(self.g), f64::from(self.b)]
    }

    /// Linear interpolation toward `other`
    ///
    /// `t = 0` returns `self` and `t = 1` returns `other` exactly.
    pub fn lerp(self, other: Self, t: f64) -> Self {
        let t = t.clamp(0.0, 1.0);
        let [ar, ag, ab] = self.channels();
        let [br, bg, bb] = other.channels();
        Self::from_channels([
            (br - ar).mul_add(t, ar),
            (bg - ag).mul_add(t, ag),
            (bb - ab).mul_add(t, ab),
        ])
    }

    /// Relative luminance on a `0..=255` scale (ITU-R BT.601 weights)
    pub fn luminance(self) -> f64 {
        let [r, g, b] = self.channels();
        0.114f64.mul_add(b, 0.299f64.mul_add(r, 0.587 * g))
    }

    /// Squared euclidean distance in RGB space
    pub fn distance_squared(self, other: Self) -> f64 {
        let [ar, ag, ab] = self.channels();
        let [br, bg, bb] = other.channels();
        (ab - bb).mul_add(ab - bb, (ar - br).mul_add(ar - br, (ag - bg) * (ag - bg)))
    }

    /// Lowercase `#rrggbb` form
    pub fn to_hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

/// Reasons a hex color string was rejected
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HexColorError {
    input: String,
}

impl fmt::Display for HexColorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "'{}' is not a #rrggbb hex color", self.input)
    }
}

impl std::error::Error for HexColorError {}

impl FromStr for Rgb {
    type Err = HexColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let error = || HexColorError {
            input: s.to_string(),
        };
        let digits = s.trim().strip_prefix('#').unwrap_or_else(|| s.trim());
        if digits.len() != 6 || !digits.is_ascii() {
            return Err(error());
        }

        let channel = |range: std::ops::Range<usize>| {
            digits
                .get(range)
                .and_then(|pair| u8::from_str_radix(pair, 16).ok())
                .ok_or_else(error)
        };

        Ok(Self {
            r: channel(0..2)?,
            g: channel(2..4)?,
            b: channel(4..6)?,
        })
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl Serialize for Rgb {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex())
    }
}

impl From<image::Rgb<u8>> for Rgb {
    fn from(pixel: image::Rgb<u8>) -> Self {
        let [r, g, b] = pixel.0;
        Self { r, g, b }
    }
}
