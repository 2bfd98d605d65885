//! Harmony rule selection.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Color-theory rule used to derive related colors from a base color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HarmonyRule {
    /// Base plus the color opposite on the wheel.
    Complementary,
    /// Base flanked by its 30 degree neighbours.
    #[default]
    Analogous,
    /// One hue at evenly spaced lightness steps.
    Monochromatic,
    /// Three hues 120 degrees apart.
    #[serde(rename = "triad", alias = "triadic")]
    Triadic,
    /// No harmony: one random color per draw.
    Single,
}

impl HarmonyRule {
    /// All rules in menu order.
    pub const ALL: [Self; 5] = [
        Self::Complementary,
        Self::Analogous,
        Self::Monochromatic,
        Self::Triadic,
        Self::Single,
    ];

    /// Resolves a user-facing label, falling back to [`HarmonyRule::Single`].
    ///
    /// ```
    /// use hueforge::models::HarmonyRule;
    ///
    /// assert_eq!(HarmonyRule::from_label("triad"), HarmonyRule::Triadic);
    /// assert_eq!(HarmonyRule::from_label("Analogous"), HarmonyRule::Analogous);
    /// assert_eq!(HarmonyRule::from_label("tetradic"), HarmonyRule::Single);
    /// ```
    #[must_use]
    pub fn from_label(label: &str) -> Self {
        Self::try_from_label(label).unwrap_or(Self::Single)
    }

    /// Resolves a user-facing label, returning `None` when it is not recognised.
    #[must_use]
    pub fn try_from_label(label: &str) -> Option<Self> {
        match label.trim().to_lowercase().as_str() {
            "complementary" => Some(Self::Complementary),
            "analogous" => Some(Self::Analogous),
            "monochromatic" => Some(Self::Monochromatic),
            "triad" | "triadic" => Some(Self::Triadic),
            "single" => Some(Self::Single),
            _ => None,
        }
    }

    /// Canonical label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Complementary => "complementary",
            Self::Analogous => "analogous",
            Self::Monochromatic => "monochromatic",
            Self::Triadic => "triad",
            Self::Single => "single",
        }
    }
}

impl fmt::Display for HarmonyRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
