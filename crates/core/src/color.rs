//! sRGB color type used for stroke, background and palette colors.
//!
//! Colors are stored as `f64` components in [0, 1] and travel as
//! `"#rrggbb"` hex strings in JSON parameters.

use crate::error::EngineError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// sRGB color with components in [0, 1].
///
/// Serializes as a hex string `"#rrggbb"`. The hex round-trip has 8-bit
/// quantization, which is acceptable since hex colors are inherently 8-bit.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Srgb {
    pub r: f64,
    pub g: f64,
    pub b: f64,
}

impl Srgb {
    /// Opaque white, used for monochrome strokes and the debug overlay.
    pub const WHITE: Srgb = Srgb {
        r: 1.0,
        g: 1.0,
        b: 1.0,
    };

    /// Opaque black.
    pub const BLACK: Srgb = Srgb {
        r: 0.0,
        g: 0.0,
        b: 0.0,
    };

    /// Parses a hex color string like "#ff00aa" or "ff00aa" (case insensitive).
    ///
    /// Returns `EngineError::InvalidColor` if the input is not a valid 6-digit hex color.
    pub fn from_hex(hex: &str) -> Result<Srgb, EngineError> {
        let digits = hex.strip_prefix('#').unwrap_or(hex);
        if digits.len() != 6 || !digits.is_ascii() {
            return Err(EngineError::InvalidColor(format!(
                "expected 6 hex digits in '{hex}'"
            )));
        }
        let channel = |range: std::ops::Range<usize>, label: &str| {
            u8::from_str_radix(&digits[range], 16)
                .map(|v| v as f64 / 255.0)
                .map_err(|e| EngineError::InvalidColor(format!("invalid {label} component: {e}")))
        };
        Ok(Srgb {
            r: channel(0..2, "red")?,
            g: channel(2..4, "green")?,
            b: channel(4..6, "blue")?,
        })
    }

    /// Converts the color to a hex string like `"#rrggbb"`.
    pub fn to_hex(self) -> String {
        let [r, g, b, _] = self.to_rgba8(1.0);
        format!("#{r:02x}{g:02x}{b:02x}")
    }

    /// Quantizes to 8-bit RGBA with the given alpha in [0, 1].
    pub fn to_rgba8(self, alpha: f64) -> [u8; 4] {
        let q = |c: f64| (c.clamp(0.0, 1.0) * 255.0).round() as u8;
        [q(self.r), q(self.g), q(self.b), q(alpha)]
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_hex_parses_background_default() {
        let c = Srgb::from_hex("#212322").unwrap();
        assert!((c.r - 0x21 as f64 / 255.0).abs() < 1e-12);
        assert!((c.g - 0x23 as f64 / 255.0).abs() < 1e-12);
        assert!((c.b - 0x22 as f64 / 255.0).abs() < 1e-12);
    }

    #[test]
    fn from_hex_accepts_missing_hash_and_uppercase() {
        assert_eq!(Srgb::from_hex("FFFFFF").unwrap(), Srgb::WHITE);
    }

    #[test]
    fn from_hex_rejects_short_input() {
        assert!(matches!(
            Srgb::from_hex("#fff"),
            Err(EngineError::InvalidColor(_))
        ));
    }

    #[test]
    fn from_hex_rejects_non_hex_digits() {
        assert!(Srgb::from_hex("#gg0000").is_err());
    }

    #[test]
    fn from_hex_rejects_multibyte_input_without_panicking() {
        assert!(Srgb::from_hex("#ééé").is_err());
    }

    #[test]
    fn to_hex_round_trips_8bit_values() {
        for hex in ["#000000", "#ffffff", "#69d2e7", "#fa6900"] {
            assert_eq!(Srgb::from_hex(hex).unwrap().to_hex(), hex);
        }
    }

    #[test]
    fn to_rgba8_quantizes_alpha() {
        assert_eq!(Srgb::WHITE.to_rgba8(0.3), [255, 255, 255, 77]);
        assert_eq!(Srgb::BLACK.to_rgba8(1.0), [0, 0, 0, 255]);
    }

    #[test]
    fn serde_uses_hex_strings() {
        let c = Srgb::from_hex("#c44d58").unwrap();
        let json = serde_json::to_string(&c).unwrap();
        assert_eq!(json, "\"#c44d58\"");
        let back: Srgb = serde_json::from_str(&json).unwrap();
        assert_eq!(back.to_hex(), "#c44d58");
    }
}
