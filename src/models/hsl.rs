//! Integer HSL triples.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Hue, saturation and lightness with integer precision.
///
/// Hue is in degrees `[0, 360)`, saturation and lightness are percentages
/// `[0, 100]`. Constructors normalise out-of-range values so every `Hsl`
/// upholds those bounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Hsl {
    /// Hue in degrees (0-359)
    pub h: u16,
    /// Saturation percentage (0-100)
    pub s: u8,
    /// Lightness percentage (0-100)
    pub l: u8,
}

impl Hsl {
    /// Creates a new `Hsl`, wrapping the hue and clamping saturation/lightness.
    ///
    /// # Examples
    ///
    /// ```
    /// use hueforge::models::Hsl;
    ///
    /// let hsl = Hsl::new(370, 120, 50);
    /// assert_eq!(hsl, Hsl::new(10, 100, 50));
    /// ```
    #[must_use]
    pub fn new(h: i32, s: u8, l: u8) -> Self {
        Self {
            h: wrap_hue(h),
            s: s.min(100),
            l: l.min(100),
        }
    }

    /// Returns the same color with the hue rotated by `degrees` (may be negative).
    ///
    /// ```
    /// use hueforge::models::Hsl;
    ///
    /// assert_eq!(Hsl::new(10, 50, 50).rotate(-30).h, 340);
    /// assert_eq!(Hsl::new(300, 50, 50).rotate(120).h, 60);
    /// ```
    #[must_use]
    pub fn rotate(&self, degrees: i32) -> Self {
        Self {
            h: wrap_hue(i32::from(self.h) + degrees),
            ..*self
        }
    }

    /// Returns the same hue and saturation at a different lightness.
    #[must_use]
    pub fn with_lightness(&self, l: u8) -> Self {
        Self {
            l: l.min(100),
            ..*self
        }
    }
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn wrap_hue(h: i32) -> u16 {
    h.rem_euclid(360) as u16
}

impl fmt::Display for Hsl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "hsl({}, {}%, {}%)", self.h, self.s, self.l)
    }
}
