//! Ordered, duplicate-free color sequences.

use serde::Serialize;

use super::error::{ColorError, ColorResult};
use super::{ColorFormat, RgbColor};

/// An ordered sequence of distinct colors.
///
/// Colors are stored as values (canonical hex form) and only turned into
/// text by [`Palette::render`], so the same palette can be shown in any
/// [`ColorFormat`] without regenerating it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Palette {
    colors: Vec<RgbColor>,
}

impl Palette {
    /// Creates an empty palette with room for `capacity` colors.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            colors: Vec::with_capacity(capacity),
        }
    }

    /// Parses a palette from hex strings, one color per entry.
    ///
    /// # Errors
    ///
    /// Returns [`ColorError::InvalidColorFormat`] for the first entry that is
    /// not a hex color, or [`ColorError::DuplicateColor`] for the first entry
    /// naming a color already listed.
    pub fn from_hex_strings<S: AsRef<str>>(hexes: &[S]) -> ColorResult<Self> {
        let mut palette = Self::with_capacity(hexes.len());
        for hex in hexes {
            let hex = hex.as_ref();
            if !palette.push_unique(RgbColor::from_hex(hex)?) {
                return Err(ColorError::DuplicateColor(hex.trim().to_string()));
            }
        }
        Ok(palette)
    }

    /// Appends `color` unless it is already present. Returns whether it was added.
    pub fn push_unique(&mut self, color: RgbColor) -> bool {
        if self.colors.contains(&color) {
            return false;
        }
        self.colors.push(color);
        true
    }

    /// The colors in order.
    #[must_use]
    pub fn colors(&self) -> &[RgbColor] {
        &self.colors
    }

    /// Number of colors.
    #[must_use]
    pub fn len(&self) -> usize {
        self.colors.len()
    }

    /// Whether the palette has no colors.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    /// Canonical `#rrggbb` strings in order.
    #[must_use]
    pub fn hex_strings(&self) -> Vec<String> {
        self.render(ColorFormat::Hex)
    }

    /// Formats every color for display. Does not modify the palette.
    #[must_use]
    pub fn render(&self, format: ColorFormat) -> Vec<String> {
        self.colors.iter().map(|c| format.render(c)).collect()
    }
}

impl From<Vec<RgbColor>> for Palette {
    fn from(colors: Vec<RgbColor>) -> Self {
        let mut palette = Self::with_capacity(colors.len());
        for color in colors {
            palette.push_unique(color);
        }
        palette
    }
}
