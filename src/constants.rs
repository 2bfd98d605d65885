//! Application-wide constants.
//!
//! This module defines constants used throughout the application,
//! including the application name and the harmony tuning values.

/// The display name of the application (human-readable, with proper capitalization).
pub const APP_NAME: &str = "HueForge";

/// The binary name of the application (used in command examples).
pub const APP_BINARY_NAME: &str = "hueforge";

/// Environment variable that overrides the configuration directory.
pub const CONFIG_DIR_ENV: &str = "HUEFORGE_CONFIG_DIR";

/// Darkest lightness used for monochromatic steps (avoids near-black).
pub const MONOCHROMATIC_MIN_LIGHTNESS: u8 = 15;

/// Lightest lightness used for monochromatic steps (avoids near-white).
pub const MONOCHROMATIC_MAX_LIGHTNESS: u8 = 85;

/// Step count when a monochromatic set is derived without an explicit count.
pub const DEFAULT_MONOCHROMATIC_STEPS: usize = 3;

/// Largest step count whose rounded lightness values are all distinct.
pub const MAX_MONOCHROMATIC_STEPS: usize =
    (MONOCHROMATIC_MAX_LIGHTNESS - MONOCHROMATIC_MIN_LIGHTNESS) as usize + 1;

/// Hue offset in degrees between analogous neighbours.
pub const ANALOGOUS_SPREAD: i32 = 30;

/// Largest palette the command line and configuration accept.
pub const MAX_PALETTE_COUNT: usize = 1000;

/// Default cap on base-color draws while filling a palette.
pub const DEFAULT_MAX_ATTEMPTS: usize = 10_000;

/// Largest value a random hex draw can produce (`#ffffff`).
pub const MAX_HEX_VALUE: u32 = 0xFF_FF_FF;
