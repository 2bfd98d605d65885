//! Uniform random colors.

use rand::Rng;

use crate::constants::MAX_HEX_VALUE;
use crate::models::{ColorFormat, RgbColor};

/// Draws one value in `[0, 0xFFFFFF]` and unpacks it into channels.
pub fn random_color<R: Rng + ?Sized>(rng: &mut R) -> RgbColor {
    RgbColor::from_u24(rng.random_range(0..=MAX_HEX_VALUE))
}

/// Generates a random color string in `format`.
///
/// `Rgb` draws each channel independently; `Hex` draws a single packed value.
pub fn generate<R: Rng + ?Sized>(rng: &mut R, format: ColorFormat) -> String {
    match format {
        ColorFormat::Rgb => {
            let color = RgbColor::new(
                rng.random_range(0..=255),
                rng.random_range(0..=255),
                rng.random_range(0..=255),
            );
            color.to_rgb_string()
        }
        ColorFormat::Hex => random_color(rng).to_hex(),
    }
}
