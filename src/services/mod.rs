//! Service layer for palette generation.
//!
//! This module holds the random source wrappers, the harmony rules and the
//! palette builder that ties them together.

pub mod harmony;
pub mod palette;
pub mod random;

// Re-export commonly used types
pub use palette::{PaletteBuilder, PaletteSession};
