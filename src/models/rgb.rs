//! RGB color handling with hex parsing, HSL conversion and display strings.

// Allow small types passed by reference for API consistency
#![allow(clippy::trivially_copy_pass_by_ref)]
// Allow intentional type casts for color math
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::cast_lossless)]
// Allow float comparisons in HSL conversion (standard algorithms)
#![allow(clippy::float_cmp)]

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::error::{ColorError, ColorResult};
use super::hsl::Hsl;

/// RGB color value with hex string representation.
///
/// Represents a color using red, green, and blue channels (0-255 each).
/// The canonical text form is a lowercase `#rrggbb` hex string, so two
/// colors are equal exactly when their hex strings are equal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct RgbColor {
    /// Red channel (0-255)
    pub r: u8,
    /// Green channel (0-255)
    pub g: u8,
    /// Blue channel (0-255)
    pub b: u8,
}

impl RgbColor {
    /// Creates a new `RgbColor` from individual channel values.
    #[must_use]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Creates an `RgbColor` from a packed `0xRRGGBB` value.
    ///
    /// Bits above the low 24 are ignored.
    #[must_use]
    pub const fn from_u24(value: u32) -> Self {
        Self {
            r: ((value >> 16) & 0xFF) as u8,
            g: ((value >> 8) & 0xFF) as u8,
            b: (value & 0xFF) as u8,
        }
    }

    /// Parses an `RgbColor` from a hex string.
    ///
    /// Supports formats: "#RRGGBB", "RRGGBB", "#rrggbb", "rrggbb"
    ///
    /// # Examples
    ///
    /// ```
    /// use hueforge::models::RgbColor;
    ///
    /// let color = RgbColor::from_hex("#FF0000").unwrap();
    /// assert_eq!(color, RgbColor::new(255, 0, 0));
    ///
    /// let color = RgbColor::from_hex("00ff00").unwrap();
    /// assert_eq!(color, RgbColor::new(0, 255, 0));
    /// ```
    ///
    /// # Errors
    ///
    /// Returns [`ColorError::InvalidColorFormat`] unless the input is exactly
    /// six hex digits after trimming and removing an optional `#`.
    pub fn from_hex(hex: &str) -> ColorResult<Self> {
        let trimmed = hex.trim();
        let digits = trimmed.strip_prefix('#').unwrap_or(trimmed);

        if digits.len() != 6 || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(ColorError::InvalidColorFormat(hex.to_string()));
        }

        let value = u32::from_str_radix(digits, 16)
            .map_err(|_| ColorError::InvalidColorFormat(hex.to_string()))?;

        Ok(Self::from_u24(value))
    }

    /// Converts the color to a hex string in the format "#rrggbb" (lowercase).
    ///
    /// # Examples
    ///
    /// ```
    /// use hueforge::models::RgbColor;
    ///
    /// assert_eq!(RgbColor::new(255, 0, 0).to_hex(), "#ff0000");
    /// assert_eq!(RgbColor::new(0, 128, 255).to_hex(), "#0080ff");
    /// ```
    #[must_use]
    pub fn to_hex(&self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }

    /// Formats the color as a CSS-style `rgb(r, g, b)` string.
    ///
    /// ```
    /// use hueforge::models::RgbColor;
    ///
    /// assert_eq!(RgbColor::new(0, 128, 255).to_rgb_string(), "rgb(0, 128, 255)");
    /// ```
    #[must_use]
    pub fn to_rgb_string(&self) -> String {
        format!("rgb({}, {}, {})", self.r, self.g, self.b)
    }

    /// Converts the color to a crossterm color for terminal swatches.
    #[must_use]
    pub const fn to_crossterm_color(&self) -> crossterm::style::Color {
        crossterm::style::Color::Rgb {
            r: self.r,
            g: self.g,
            b: self.b,
        }
    }

    /// Converts the RGB color to integer HSL.
    ///
    /// Hue comes from the 6-sector formula on the largest channel, with ties
    /// resolved red, then green, then blue. All three components are rounded
    /// half-up; a hue that rounds to 360 wraps to 0.
    ///
    /// # Examples
    ///
    /// ```
    /// use hueforge::models::{Hsl, RgbColor};
    ///
    /// let hsl = RgbColor::new(0x33, 0x66, 0xcc).to_hsl();
    /// assert_eq!(hsl, Hsl::new(220, 60, 50));
    /// ```
    #[must_use]
    #[allow(clippy::many_single_char_names)] // Standard RGB/HSL color model uses single-char names
    pub fn to_hsl(&self) -> Hsl {
        let r = f64::from(self.r) / 255.0;
        let g = f64::from(self.g) / 255.0;
        let b = f64::from(self.b) / 255.0;

        let max = r.max(g).max(b);
        let min = r.min(g).min(b);
        let l = (max + min) / 2.0;

        let (h, s) = if max == min {
            (0.0, 0.0) // Achromatic
        } else {
            let d = max - min;
            let s = if l > 0.5 {
                d / (2.0 - max - min)
            } else {
                d / (max + min)
            };
            let sector = if max == r {
                (g - b) / d + if g < b { 6.0 } else { 0.0 }
            } else if max == g {
                (b - r) / d + 2.0
            } else {
                (r - g) / d + 4.0
            };
            (sector / 6.0, s)
        };

        Hsl::new(
            (h * 360.0).round() as i32,
            (s * 100.0).round() as u8,
            (l * 100.0).round() as u8,
        )
    }

    /// Creates an `RgbColor` from integer HSL.
    ///
    /// # Examples
    ///
    /// ```
    /// use hueforge::models::{Hsl, RgbColor};
    ///
    /// assert_eq!(RgbColor::from_hsl(Hsl::new(0, 100, 50)), RgbColor::new(255, 0, 0));
    /// assert_eq!(RgbColor::from_hsl(Hsl::new(0, 0, 50)), RgbColor::new(128, 128, 128));
    /// ```
    #[must_use]
    #[allow(clippy::many_single_char_names)]
    pub fn from_hsl(hsl: Hsl) -> Self {
        let h = f64::from(hsl.h) / 360.0;
        let s = f64::from(hsl.s) / 100.0;
        let l = f64::from(hsl.l) / 100.0;

        let (r, g, b) = if hsl.s == 0 {
            (l, l, l)
        } else {
            let q = if l < 0.5 { l * (1.0 + s) } else { l + s - l * s };
            let p = 2.0 * l - q;
            (
                hue_to_channel(p, q, h + 1.0 / 3.0),
                hue_to_channel(p, q, h),
                hue_to_channel(p, q, h - 1.0 / 3.0),
            )
        };

        Self {
            r: unit_to_byte(r),
            g: unit_to_byte(g),
            b: unit_to_byte(b),
        }
    }
}

/// Piecewise hue-to-channel helper for HSL conversion.
fn hue_to_channel(p: f64, q: f64, t: f64) -> f64 {
    let t = if t < 0.0 {
        t + 1.0
    } else if t > 1.0 {
        t - 1.0
    } else {
        t
    };

    if t < 1.0 / 6.0 {
        p + (q - p) * 6.0 * t
    } else if t < 1.0 / 2.0 {
        q
    } else if t < 2.0 / 3.0 {
        p + (q - p) * (2.0 / 3.0 - t) * 6.0
    } else {
        p
    }
}

fn unit_to_byte(v: f64) -> u8 {
    (v * 255.0).round().clamp(0.0, 255.0) as u8
}

impl FromStr for RgbColor {
    type Err = ColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_hex(s)
    }
}

impl fmt::Display for RgbColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_hex())
    }
}

impl From<Hsl> for RgbColor {
    fn from(hsl: Hsl) -> Self {
        Self::from_hsl(hsl)
    }
}
