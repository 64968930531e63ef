//! Four-color palettes and the built-in palette list.
//!
//! A generation pass draws one palette, takes its background color from it,
//! and paints every shape with one of the remaining colors.

use crate::color::Srgb;
use crate::error::TilingError;
use serde::{Deserialize, Serialize};

/// Number of colors in every palette.
pub const PALETTE_SIZE: usize = 4;

/// Built-in palettes, in the order [`Palette::builtin`] returns them.
const BUILTIN: &[(&str, [&str; PALETTE_SIZE])] = &[
    ("ocean", ["#003366", "#005f73", "#0a9396", "#94d2bd"]),
    ("neon", ["#ff00ff", "#00ff41", "#ffff00", "#00ffff"]),
    ("earth", ["#5c4033", "#6b8e23", "#daa520", "#d2b48c"]),
    ("monochrome", ["#000000", "#555555", "#aaaaaa", "#ffffff"]),
    ("vapor", ["#7b2d8e", "#c77dff", "#ff9ebb", "#80ced6"]),
    ("fire", ["#800000", "#ff4500", "#ff8c00", "#ffd700"]),
    ("bauhaus", ["#e63946", "#f1c40f", "#1d3557", "#f1faee"]),
    ("pastel", ["#69d2e7", "#a7dbd8", "#e0e4cc", "#f38630"]),
];

/// An ordered list of exactly [`PALETTE_SIZE`] colors.
///
/// Serializes as a JSON array of hex strings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Srgb>", into = "Vec<Srgb>")]
pub struct Palette {
    colors: [Srgb; PALETTE_SIZE],
}

impl Palette {
    /// Creates a palette from four colors.
    pub fn new(colors: [Srgb; PALETTE_SIZE]) -> Self {
        Self { colors }
    }

    /// Creates a palette by parsing hex color strings.
    ///
    /// Requires exactly [`PALETTE_SIZE`] valid colors.
    pub fn from_hex(hexes: &[&str]) -> Result<Self, TilingError> {
        let colors = hexes
            .iter()
            .map(|h| Srgb::from_hex(h))
            .collect::<Result<Vec<_>, _>>()?;
        Self::try_from(colors)
    }

    /// The palette's colors, in order.
    pub fn colors(&self) -> &[Srgb; PALETTE_SIZE] {
        &self.colors
    }

    /// The palette's colors with every color that renders as `excluded` removed.
    ///
    /// Colors are compared after quantizing to RGBA8, so two nearly equal
    /// components that land on the same pixel value count as the same color.
    /// Order of the remaining colors is preserved.
    pub fn without(&self, excluded: Srgb) -> Vec<Srgb> {
        let excluded = excluded.to_rgba8();
        self.colors
            .iter()
            .copied()
            .filter(|c| c.to_rgba8() != excluded)
            .collect()
    }

    /// Looks up a built-in palette by name.
    ///
    /// Returns `TilingError::UnknownPalette` for unrecognized names.
    pub fn from_name(name: &str) -> Result<Self, TilingError> {
        BUILTIN
            .iter()
            .find(|(n, _)| *n == name)
            .ok_or_else(|| TilingError::UnknownPalette(name.to_string()))
            .and_then(|(_, hexes)| Self::from_hex(hexes))
    }

    /// Names of all built-in palettes.
    pub fn list_names() -> Vec<&'static str> {
        BUILTIN.iter().map(|(name, _)| *name).collect()
    }

    /// All built-in palettes.
    pub fn builtin() -> Vec<Palette> {
        BUILTIN
            .iter()
            .map(|(name, hexes)| {
                Self::from_hex(hexes)
                    .unwrap_or_else(|e| panic!("built-in palette '{name}' is invalid: {e}"))
            })
            .collect()
    }

    /// Parses a palette list: a JSON array of four-color hex arrays.
    ///
    /// Returns `TilingError::InvalidPalette` for malformed JSON, bad colors,
    /// wrong color counts, or an empty list.
    pub fn list_from_json(json: &str) -> Result<Vec<Palette>, TilingError> {
        let palettes: Vec<Palette> = serde_json::from_str(json)
            .map_err(|e| TilingError::InvalidPalette(e.to_string()))?;
        if palettes.is_empty() {
            return Err(TilingError::InvalidPalette(
                "palette list is empty".to_string(),
            ));
        }
        Ok(palettes)
    }
}

impl TryFrom<Vec<Srgb>> for Palette {
    type Error = TilingError;

    fn try_from(colors: Vec<Srgb>) -> Result<Self, Self::Error> {
        let len = colors.len();
        let colors: [Srgb; PALETTE_SIZE] = colors.try_into().map_err(|_| {
            TilingError::InvalidPalette(format!(
                "expected {PALETTE_SIZE} colors, got {len}"
            ))
        })?;
        Ok(Self { colors })
    }
}

impl From<Palette> for Vec<Srgb> {
    fn from(palette: Palette) -> Self {
        palette.colors.to_vec()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hex(s: &str) -> Srgb {
        Srgb::from_hex(s).unwrap()
    }

    #[test]
    fn from_hex_requires_exactly_four_colors() {
        assert!(Palette::from_hex(&["#000000", "#111111", "#222222"]).is_err());
        assert!(Palette::from_hex(&[
            "#000000", "#111111", "#222222", "#333333", "#444444"
        ])
        .is_err());
        assert!(Palette::from_hex(&["#000000", "#111111", "#222222", "#333333"]).is_ok());
    }

    #[test]
    fn from_hex_propagates_color_errors() {
        let result = Palette::from_hex(&["#000000", "#111111", "#222222", "bogus"]);
        assert!(matches!(result, Err(TilingError::InvalidColor(_))));
    }

    #[test]
    fn colors_preserve_order() {
        let p = Palette::from_hex(&["#010101", "#020202", "#030303", "#040404"]).unwrap();
        assert_eq!(p.colors()[0], hex("#010101"));
        assert_eq!(p.colors()[3], hex("#040404"));
    }

    #[test]
    fn without_removes_excluded_color() {
        let p = Palette::from_hex(&["#aa0000", "#00aa00", "#0000aa", "#aaaaaa"]).unwrap();
        let rest = p.without(hex("#0000aa"));
        assert_eq!(rest, vec![hex("#aa0000"), hex("#00aa00"), hex("#aaaaaa")]);
    }

    #[test]
    fn without_removes_duplicates_of_excluded_color() {
        let p = Palette::from_hex(&["#aa0000", "#00aa00", "#aa0000", "#aaaaaa"]).unwrap();
        assert_eq!(p.without(hex("#aa0000")).len(), 2);
    }

    #[test]
    fn without_removes_colors_that_quantize_to_the_excluded_pixel() {
        let white = Srgb { r: 1.0, g: 1.0, b: 1.0 };
        let near_white = Srgb { r: 0.999, g: 1.0, b: 0.9995 };
        assert_ne!(white, near_white);
        assert_eq!(white.to_rgba8(), near_white.to_rgba8());

        let p = Palette::new([white, hex("#123456"), near_white, hex("#654321")]);
        let rest = p.without(white);
        assert_eq!(rest, vec![hex("#123456"), hex("#654321")]);
        assert!(rest.iter().all(|c| c.to_rgba8() != white.to_rgba8()));
    }

    #[test]
    fn from_name_finds_builtin() {
        let p = Palette::from_name("monochrome").unwrap();
        assert_eq!(p.colors()[0], Srgb::BLACK);
    }

    #[test]
    fn from_name_unknown_returns_error() {
        assert!(matches!(
            Palette::from_name("plaid"),
            Err(TilingError::UnknownPalette(_))
        ));
    }

    #[test]
    fn builtin_palettes_are_valid_and_named() {
        let all = Palette::builtin();
        let names = Palette::list_names();
        assert_eq!(all.len(), names.len());
        assert!(!all.is_empty());
        for name in names {
            assert!(Palette::from_name(name).is_ok(), "{name} failed to load");
        }
    }

    #[test]
    fn builtin_palettes_have_distinct_colors() {
        for p in Palette::builtin() {
            for (i, a) in p.colors().iter().enumerate() {
                for b in &p.colors()[i + 1..] {
                    assert_ne!(a, b, "duplicate color in {p:?}");
                }
            }
        }
    }

    #[test]
    fn serde_round_trip_as_hex_array() {
        let p = Palette::from_name("fire").unwrap();
        let json = serde_json::to_string(&p).unwrap();
        assert!(json.starts_with("[\"#800000\""), "got: {json}");
        let back: Palette = serde_json::from_str(&json).unwrap();
        assert_eq!(back, p);
    }

    #[test]
    fn list_from_json_parses_palette_list() {
        let json = r##"[["#000000","#111111","#222222","#333333"],
                        ["#ffffff","#eeeeee","#dddddd","#cccccc"]]"##;
        let list = Palette::list_from_json(json).unwrap();
        assert_eq!(list.len(), 2);
        assert_eq!(list[1].colors()[0], hex("#ffffff"));
    }

    #[test]
    fn list_from_json_rejects_wrong_size_entry() {
        let json = r##"[["#000000","#111111","#222222"]]"##;
        assert!(matches!(
            Palette::list_from_json(json),
            Err(TilingError::InvalidPalette(_))
        ));
    }

    #[test]
    fn list_from_json_rejects_empty_list() {
        assert!(Palette::list_from_json("[]").is_err());
    }
}
