//! Data models for colors, palettes and harmony rules.
//!
//! Models are plain values with no dependency on the command line or on a
//! random source.

pub mod error;
pub mod format;
pub mod harmony;
pub mod hsl;
pub mod palette;
pub mod rgb;

// Re-export all model types
pub use error::{ColorError, ColorResult};
pub use format::ColorFormat;
pub use harmony::HarmonyRule;
pub use hsl::Hsl;
pub use palette::Palette;
pub use rgb::RgbColor;
