//! Fixed-size color palettes and the built-in palette bank.
//!
//! A [`Palette`] is an ordered set of swatches. Strokes pick a swatch
//! uniformly at random; there is no interpolation between entries.

use crate::color::Srgb;
use crate::error::EngineError;
use crate::prng::RandomSource;

/// Built-in five-color palettes, in bank order.
const BANK: &[(&str, [&str; 5])] = &[
    ("lagoon", ["#69d2e7", "#a7dbd8", "#e0e4cc", "#f38630", "#fa6900"]),
    ("blush", ["#fe4365", "#fc9d9a", "#f9cdad", "#c8c8a9", "#83af9b"]),
    ("autumn-wine", ["#ecd078", "#d95b43", "#c02942", "#542437", "#53777a"]),
    ("cheer", ["#556270", "#4ecdc4", "#c7f464", "#ff6b6b", "#c44d58"]),
    ("driftwood", ["#774f38", "#e08e79", "#f1d4af", "#ece5ce", "#c5e0dc"]),
    ("deep-sea", ["#e8ddcb", "#cdb380", "#036564", "#033649", "#031634"]),
    ("festival", ["#490a3d", "#bd1550", "#e97f02", "#f8ca00", "#8a9b0f"]),
    ("seafoam", ["#594f4f", "#547980", "#45ada8", "#9de0ad", "#e5fcc2"]),
    ("harbor", ["#00a0b0", "#6a4a3c", "#cc333f", "#eb6841", "#edc951"]),
    ("rosewater", ["#e94e77", "#d68189", "#c6a49a", "#c6e5d9", "#f4ead5"]),
    ("ocean", ["#001f3f", "#003366", "#005f73", "#0a9396", "#94d2bd"]),
    ("neon", ["#ff00ff", "#00ff41", "#ffff00", "#ff0080", "#00ffff"]),
    ("earth", ["#5c4033", "#8b6914", "#6b8e23", "#daa520", "#d2b48c"]),
    ("vapor", ["#7b2d8e", "#c77dff", "#ff9ebb", "#80ced6", "#a0e7e5"]),
    ("fire", ["#800000", "#cc0000", "#ff4500", "#ff8c00", "#ffd700"]),
];

/// An ordered, non-empty set of colors.
#[derive(Debug, Clone, PartialEq)]
pub struct Palette {
    name: String,
    colors: Vec<Srgb>,
}

impl Palette {
    /// Creates a palette from explicit colors. Requires at least one color.
    pub fn new(name: impl Into<String>, colors: Vec<Srgb>) -> Result<Self, EngineError> {
        if colors.is_empty() {
            return Err(EngineError::InvalidPalette(
                "palette requires at least 1 color".to_string(),
            ));
        }
        Ok(Self {
            name: name.into(),
            colors,
        })
    }

    /// Creates a palette by parsing `"#rrggbb"` strings.
    pub fn from_hex(name: impl Into<String>, hexes: &[&str]) -> Result<Self, EngineError> {
        let colors = hexes
            .iter()
            .map(|h| Srgb::from_hex(h))
            .collect::<Result<Vec<_>, _>>()?;
        Self::new(name, colors)
    }

    /// Looks up a palette in the built-in bank.
    pub fn from_name(name: &str) -> Result<Self, EngineError> {
        let (bank_name, hexes) = BANK
            .iter()
            .find(|(n, _)| *n == name)
            .ok_or_else(|| EngineError::UnknownPalette(name.to_string()))?;
        Self::from_hex(*bank_name, hexes)
    }

    /// Picks a palette uniformly at random from the bank.
    pub fn random(rng: &mut dyn RandomSource) -> Self {
        let (name, hexes) = BANK[rng.next_index(BANK.len())];
        Self::from_hex(name, &hexes).expect("bank palette hex values are valid")
    }

    /// Names of all built-in palettes, in bank order.
    pub fn list_names() -> Vec<&'static str> {
        BANK.iter().map(|(n, _)| *n).collect()
    }

    /// Whether `name` is in the built-in bank.
    pub fn exists(name: &str) -> bool {
        BANK.iter().any(|(n, _)| *n == name)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn colors(&self) -> &[Srgb] {
        &self.colors
    }

    pub fn len(&self) -> usize {
        self.colors.len()
    }

    /// Always false for a constructed palette.
    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    /// Picks one swatch uniformly at random.
    pub fn pick(&self, rng: &mut dyn RandomSource) -> Srgb {
        self.colors[rng.next_index(self.colors.len())]
    }
}
