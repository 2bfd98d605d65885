//! Output formats for palette colors.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::error::ColorError;
use super::RgbColor;

/// Text encoding used when handing colors to a display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorFormat {
    /// `#rrggbb`
    #[default]
    Hex,
    /// `rgb(r, g, b)`
    Rgb,
}

impl ColorFormat {
    /// Lowercase label used on the command line and in config files.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Hex => "hex",
            Self::Rgb => "rgb",
        }
    }

    /// Formats a single color in this encoding.
    #[must_use]
    pub fn render(self, color: &RgbColor) -> String {
        match self {
            Self::Hex => color.to_hex(),
            Self::Rgb => color.to_rgb_string(),
        }
    }
}

impl FromStr for ColorFormat {
    type Err = ColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "hex" => Ok(Self::Hex),
            "rgb" => Ok(Self::Rgb),
            _ => Err(ColorError::UnknownFormat(s.to_string())),
        }
    }
}

impl fmt::Display for ColorFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
