//! Render surface contract.
//!
//! The scene draws through this minimal interface and never manages the
//! lifetime of whatever is behind it. The production implementation wraps a
//! raylib draw handle ([`raylib`]); tests use recording stubs.

#[cfg(all(feature = "gui", any(target_os = "linux", target_os = "windows")))]
pub mod raylib;

use crate::error::EngineError;
use crate::math::Vector2;

/// An RGBA color with 8-bit channels.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Color {
    /// Red channel.
    pub r: u8,
    /// Green channel.
    pub g: u8,
    /// Blue channel.
    pub b: u8,
    /// Alpha channel (255 = opaque).
    pub a: u8,
}

impl Color {
    pub const BLACK: Self = Self::rgb(0, 0, 0);
    pub const WHITE: Self = Self::rgb(255, 255, 255);
    pub const RED: Self = Self::rgb(230, 41, 55);
    pub const GREEN: Self = Self::rgb(0, 228, 48);
    pub const BLUE: Self = Self::rgb(0, 121, 241);
    pub const GOLD: Self = Self::rgb(255, 203, 0);

    /// Color from all four channels.
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Opaque color from the three color channels.
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    /// Parse an opaque color from a `"r,g,b"` string (decimal channels,
    /// as written in the configuration file).
    pub fn from_rgb_str(s: &str) -> Result<Self, EngineError> {
        let channels: Vec<&str> = s.split(',').map(str::trim).collect();
        if channels.len() != 3 {
            return Err(EngineError::invalid_object(
                "color",
                format!("expected \"r,g,b\", found \"{s}\""),
            ));
        }

        let mut parsed = [0u8; 3];
        for (slot, channel) in parsed.iter_mut().zip(&channels) {
            *slot = channel.parse().map_err(|_| {
                EngineError::invalid_object(
                    "color",
                    format!("channel \"{channel}\" is not a number in 0..=255"),
                )
            })?;
        }
        Ok(Self::rgb(parsed[0], parsed[1], parsed[2]))
    }
}

/// Minimum 2D drawing contract the scene needs: a fill style and a filled
/// rectangle primitive.
pub trait RenderSurface {
    /// Set the color used by subsequent fills.
    fn set_fill_color(&mut self, color: Color);

    /// Fill an axis-aligned rectangle. `position` is the top-left corner.
    fn fill_rect(&mut self, position: Vector2, size: Vector2);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rgb_str_parses() {
        assert_eq!(Color::from_rgb_str("255, 203, 0").unwrap(), Color::GOLD);
        assert_eq!(Color::from_rgb_str("0,0,0").unwrap(), Color::BLACK);
    }

    #[test]
    fn test_rgb_str_rejects_malformed_input() {
        for bad in ["", "1,2", "1,2,3,4", "a,b,c", "300,0,0", "-1,0,0"] {
            let result = Color::from_rgb_str(bad);
            assert!(
                matches!(result, Err(EngineError::InvalidObject { .. })),
                "{bad:?} should be rejected"
            );
        }
    }
}
