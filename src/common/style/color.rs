//! RGB color type used by themes and the slide writer.

use crate::common::error::Error;
use serde::{Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// An RGB color.
///
/// # Examples
///
/// ```rust
/// use deckgen::common::RGBColor;
///
/// // Create from a packed literal
/// let accent = RGBColor::hex(0x00d4ff);
///
/// // Create from hex string
/// let purple = RGBColor::from_hex("7c3aed").unwrap();
/// assert_eq!(purple.to_hex(), "7C3AED");
/// # let _ = accent;
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RGBColor {
    /// Red component (0-255)
    pub r: u8,
    /// Green component (0-255)
    pub g: u8,
    /// Blue component (0-255)
    pub b: u8,
}

impl RGBColor {
    pub const WHITE: Self = Self::new(0xFF, 0xFF, 0xFF);
    pub const BLACK: Self = Self::new(0x00, 0x00, 0x00);

    /// Create a new RGB color.
    #[inline]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Create a color from a packed `0xRRGGBB` value.
    ///
    /// Bits above the low 24 are ignored.
    #[inline]
    pub const fn hex(rgb: u32) -> Self {
        Self::new((rgb >> 16) as u8, (rgb >> 8) as u8, rgb as u8)
    }

    /// Create an RGB color from a hex string.
    ///
    /// # Arguments
    ///
    /// * `hex` - Hex color string (e.g., "FF0000" or "#FF0000")
    pub fn from_hex(hex: &str) -> Option<Self> {
        let hex = hex.trim_start_matches('#');
        if hex.len() != 6 || !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
            return None;
        }

        let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
        let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
        let b = u8::from_str_radix(&hex[4..6], 16).ok()?;

        Some(Self::new(r, g, b))
    }

    /// Convert to hex string (without # prefix), as used by `a:srgbClr`.
    pub fn to_hex(&self) -> String {
        format!("{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}

impl fmt::Display for RGBColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.to_hex())
    }
}

impl FromStr for RGBColor {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_hex(s).ok_or_else(|| Error::InvalidColor(s.to_string()))
    }
}

impl Serialize for RGBColor {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_packed_literal() {
        let c = RGBColor::hex(0x1a1a2e);
        assert_eq!((c.r, c.g, c.b), (0x1a, 0x1a, 0x2e));
        assert_eq!(c.to_hex(), "1A1A2E");
    }

    #[test]
    fn test_from_hex() {
        assert_eq!(RGBColor::from_hex("#3B82F6"), Some(RGBColor::hex(0x3b82f6)));
        assert_eq!(RGBColor::from_hex("3b82f6"), Some(RGBColor::hex(0x3b82f6)));
        assert_eq!(RGBColor::from_hex("3b82f"), None);
        assert_eq!(RGBColor::from_hex("zzzzzz"), None);
        assert_eq!(RGBColor::from_hex("ééé"), None);
    }

    #[test]
    fn test_parse() {
        assert_eq!("#00d4ff".parse::<RGBColor>().unwrap(), RGBColor::hex(0x00d4ff));
        assert!(matches!("blue".parse::<RGBColor>(), Err(Error::InvalidColor(ref s)) if s == "blue"));
    }

    #[test]
    fn test_display() {
        assert_eq!(RGBColor::WHITE.to_string(), "#FFFFFF");
    }
}
