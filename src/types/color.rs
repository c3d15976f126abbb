//! Linear RGB colour values.

use std::fmt;
use std::str::FromStr;

use palette::Srgb;

use crate::error::{RasterError, Result};

/// An RGB colour with real-valued channels.
///
/// The canonical range is [0, 1] but nothing enforces it: intermediate
/// compositing carries out-of-range values, and [`Color::clamp`] is applied
/// once before the image is written.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Color {
    pub r: f64,
    pub g: f64,
    pub b: f64,
}

impl Color {
    pub const fn new(r: f64, g: f64, b: f64) -> Self {
        Self { r, g, b }
    }

    /// Black.
    pub const BLACK: Self = Self::new(0.0, 0.0, 0.0);

    /// White.
    pub const WHITE: Self = Self::new(1.0, 1.0, 1.0);

    /// Red.
    pub const RED: Self = Self::new(1.0, 0.0, 0.0);

    /// Parse a hex colour string (`#RRGGBB` or `#RGB`, leading `#` optional).
    pub fn from_hex(s: &str) -> Result<Self> {
        let rgb: Srgb<u8> = s.trim().parse().map_err(|e| RasterError::Parse {
            message: format!("Invalid hex colour '{}': {}", s, e),
            help: Some("Use #RRGGBB or #RGB format".to_string()),
        })?;
        let rgb: Srgb<f64> = rgb.into_format();
        Ok(Self::new(rgb.red, rgb.green, rgb.blue))
    }

    /// Multiply every channel by `weight`.
    pub fn scale(self, weight: f64) -> Self {
        Self::new(self.r * weight, self.g * weight, self.b * weight)
    }

    /// Channel-wise sum.
    pub fn add(self, other: Color) -> Self {
        Self::new(self.r + other.r, self.g + other.g, self.b + other.b)
    }

    /// Clamp every channel to [0, 1].
    pub fn clamp(self) -> Self {
        Self::new(
            self.r.clamp(0.0, 1.0),
            self.g.clamp(0.0, 1.0),
            self.b.clamp(0.0, 1.0),
        )
    }

    /// Quantize to 8-bit channels (clamped, no gamma, rounded to nearest).
    pub fn to_rgb8(self) -> [u8; 3] {
        let c = self.clamp();
        let rgb: Srgb<u8> = Srgb::new(c.r, c.g, c.b).into_format();
        [rgb.red, rgb.green, rgb.blue]
    }

    /// Channels as an array.
    pub fn to_array(self) -> [f64; 3] {
        [self.r, self.g, self.b]
    }
}

impl FromStr for Color {
    type Err = RasterError;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_hex(s)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [r, g, b] = self.to_rgb8();
        write!(f, "#{:02X}{:02X}{:02X}", r, g, b)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_hex_6digit() {
        assert_eq!(Color::from_hex("#FF0000").unwrap(), Color::RED);
        assert_eq!(Color::from_hex("ffffff").unwrap(), Color::WHITE);
    }

    #[test]
    fn test_from_hex_3digit() {
        assert_eq!(Color::from_hex("#000").unwrap(), Color::BLACK);
    }

    #[test]
    fn test_from_hex_invalid() {
        assert!(Color::from_hex("#GGGGGG").is_err());
        assert!(Color::from_hex("#12345").is_err());
        assert!(Color::from_hex("").is_err());
    }

    #[test]
    fn test_equality_is_exact() {
        let a = Color::new(0.5, 0.5, 0.5);
        let b = Color::new(0.5, 0.5, 0.5 + 1e-12);
        assert_eq!(a, Color::new(0.5, 0.5, 0.5));
        assert_ne!(a, b);
    }

    #[test]
    fn test_arithmetic_does_not_clamp() {
        let c = Color::new(0.8, 0.1, 0.0).scale(2.0).add(Color::new(0.0, -0.5, 0.0));
        assert_eq!(c, Color::new(1.6, -0.3, 0.0));
        assert_eq!(c.clamp(), Color::new(1.0, 0.0, 0.0));
    }

    #[test]
    fn test_to_rgb8() {
        assert_eq!(Color::WHITE.to_rgb8(), [255, 255, 255]);
        assert_eq!(Color::new(2.0, -1.0, 0.0).to_rgb8(), [255, 0, 0]);
        // 127.5 rounds up rather than truncating
        assert_eq!(Color::new(0.5, 0.5, 0.5).to_rgb8(), [128, 128, 128]);
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", Color::RED), "#FF0000");
        assert_eq!(format!("{}", Color::BLACK), "#000000");
    }
}
