//! sRGB colors parsed from and formatted to hex strings.

use crate::error::TilingError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// sRGB color with components in [0, 1].
///
/// Serializes as a hex string `"#rrggbb"`. Colors parsed from hex compare
/// exactly equal to each other when their hex digits match, which is what
/// background exclusion relies on.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Srgb {
    pub r: f64,
    pub g: f64,
    pub b: f64,
}

impl Srgb {
    /// Black, the surface's initial fill color.
    pub const BLACK: Srgb = Srgb {
        r: 0.0,
        g: 0.0,
        b: 0.0,
    };

    /// Parses a hex color string like "#ff00aa", "ff00aa" or "#f0a" (case insensitive).
    ///
    /// Returns `TilingError::InvalidColor` if the input is not a 3- or 6-digit hex color.
    pub fn from_hex(hex: &str) -> Result<Srgb, TilingError> {
        let digits = hex.strip_prefix('#').unwrap_or(hex);
        if !digits.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(TilingError::InvalidColor(format!("non-hex digit in '{hex}'")));
        }
        let expanded;
        let digits = match digits.len() {
            6 => digits,
            3 => {
                expanded = digits.chars().flat_map(|c| [c, c]).collect::<String>();
                expanded.as_str()
            }
            n => {
                return Err(TilingError::InvalidColor(format!(
                    "expected 3 or 6 hex digits, got {n}"
                )))
            }
        };
        let r = u8::from_str_radix(&digits[0..2], 16)
            .map_err(|e| TilingError::InvalidColor(format!("invalid red component: {e}")))?;
        let g = u8::from_str_radix(&digits[2..4], 16)
            .map_err(|e| TilingError::InvalidColor(format!("invalid green component: {e}")))?;
        let b = u8::from_str_radix(&digits[4..6], 16)
            .map_err(|e| TilingError::InvalidColor(format!("invalid blue component: {e}")))?;
        Ok(Srgb::from_rgb8(r, g, b))
    }

    /// Builds a color from 8-bit components.
    pub fn from_rgb8(r: u8, g: u8, b: u8) -> Srgb {
        Srgb {
            r: f64::from(r) / 255.0,
            g: f64::from(g) / 255.0,
            b: f64::from(b) / 255.0,
        }
    }

    /// Quantizes to opaque RGBA8.
    pub fn to_rgba8(self) -> [u8; 4] {
        let q = |c: f64| (c.clamp(0.0, 1.0) * 255.0).round() as u8;
        [q(self.r), q(self.g), q(self.b), 255]
    }

    /// Converts the color to a hex string like `"#rrggbb"`.
    pub fn to_hex(self) -> String {
        let [r, g, b, _] = self.to_rgba8();
        format!("#{r:02x}{g:02x}{b:02x}")
    }
}

impl Serialize for Srgb {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex())
    }
}

impl<'de> Deserialize<'de> for Srgb {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Srgb::from_hex(&s).map_err(serde::de::Error::custom)
    }
}
