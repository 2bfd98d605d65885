//! HueForge Library
//!
//! This library generates color palettes from color-theory harmony rules
//! (complementary, analogous, monochromatic, triadic). It provides hex/RGB/HSL
//! conversion, harmony derivation, palette assembly with deduplication, and
//! the command handlers used by the `hueforge` binary.

// Module declarations
pub mod cli;
pub mod config;
pub mod constants;
pub mod display;
pub mod models;
pub mod services;
