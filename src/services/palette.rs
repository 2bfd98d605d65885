//! Palette assembly from random base colors.

use rand::Rng;
use tracing::{debug, warn};

use crate::constants::DEFAULT_MAX_ATTEMPTS;
use crate::models::{ColorError, ColorFormat, ColorResult, HarmonyRule, Palette};

use super::{harmony, random};

/// Fills palettes of an exact size by drawing base colors and applying a harmony rule.
///
/// Every draw contributes the colors of one harmony set that are not yet in
/// the palette. Draws stop once the palette is full or after
/// `max_attempts` draws, whichever comes first.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PaletteBuilder {
    max_attempts: usize,
}

impl PaletteBuilder {
    /// Creates a builder that gives up after `max_attempts` base-color draws.
    #[must_use]
    pub const fn new(max_attempts: usize) -> Self {
        Self { max_attempts }
    }

    /// Builds a palette of exactly `count` distinct colors.
    ///
    /// Monochromatic palettes come from a single base color. Every other rule
    /// draws fresh base colors until enough distinct colors are collected.
    ///
    /// # Errors
    ///
    /// - [`ColorError::InvalidCount`] if `count` is zero, or too large for a
    ///   monochromatic palette.
    /// - [`ColorError::PaletteGenerationExhausted`] if the attempt cap is hit.
    pub fn build_palette<R: Rng + ?Sized>(
        &self,
        rng: &mut R,
        rule: HarmonyRule,
        count: usize,
    ) -> ColorResult<Palette> {
        if count == 0 {
            return Err(ColorError::invalid_count(count, "at least one color is required"));
        }

        if rule == HarmonyRule::Monochromatic {
            let base = random::random_color(rng);
            let colors = harmony::monochromatic(base, count)?;
            debug!(%rule, %base, count, "built monochromatic palette");
            return Ok(Palette::from(colors));
        }

        let mut palette = Palette::default();
        let mut attempts = 0;

        while palette.len() < count {
            if attempts >= self.max_attempts {
                warn!(
                    %rule,
                    attempts,
                    collected = palette.len(),
                    requested = count,
                    "palette generation exhausted"
                );
                return Err(ColorError::PaletteGenerationExhausted {
                    attempts,
                    collected: palette.len(),
                    requested: count,
                });
            }
            attempts += 1;

            let base = random::random_color(rng);
            for color in harmony::derive(rule, base) {
                if palette.len() >= count {
                    break;
                }
                palette.push_unique(color);
            }
        }

        debug!(%rule, count, attempts, "built palette");
        Ok(palette)
    }

    /// Builds a palette and formats it for display.
    ///
    /// # Errors
    ///
    /// Same as [`PaletteBuilder::build_palette`].
    pub fn build<R: Rng + ?Sized>(
        &self,
        rng: &mut R,
        rule: HarmonyRule,
        count: usize,
        format: ColorFormat,
    ) -> ColorResult<Vec<String>> {
        Ok(self.build_palette(rng, rule, count)?.render(format))
    }
}

impl Default for PaletteBuilder {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_ATTEMPTS)
    }
}

/// Holds the most recent palette and the format it is shown in.
///
/// Changing the format re-renders the stored palette without drawing new
/// colors.
#[derive(Debug, Clone, Default)]
pub struct PaletteSession {
    builder: PaletteBuilder,
    format: ColorFormat,
    current: Option<Palette>,
}

impl PaletteSession {
    /// Creates an empty session.
    #[must_use]
    pub fn new(builder: PaletteBuilder, format: ColorFormat) -> Self {
        Self {
            builder,
            format,
            current: None,
        }
    }

    /// Replaces the current palette with a freshly generated one and renders it.
    ///
    /// On error the previous palette is kept.
    ///
    /// # Errors
    ///
    /// Same as [`PaletteBuilder::build_palette`].
    pub fn generate<R: Rng + ?Sized>(
        &mut self,
        rng: &mut R,
        rule: HarmonyRule,
        count: usize,
    ) -> ColorResult<Vec<String>> {
        let palette = self.builder.build_palette(rng, rule, count)?;
        let rendered = palette.render(self.format);
        self.current = Some(palette);
        Ok(rendered)
    }

    /// Switches the display format, re-rendering the stored palette if there is one.
    pub fn set_format(&mut self, format: ColorFormat) -> Option<Vec<String>> {
        self.format = format;
        self.render()
    }

    /// Renders the stored palette in the current format.
    #[must_use]
    pub fn render(&self) -> Option<Vec<String>> {
        self.current.as_ref().map(|p| p.render(self.format))
    }

    /// The current display format.
    #[must_use]
    pub fn format(&self) -> ColorFormat {
        self.format
    }

    /// The stored palette, if one was generated.
    #[must_use]
    pub fn current(&self) -> Option<&Palette> {
        self.current.as_ref()
    }
}
