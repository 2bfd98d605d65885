//! Error types for color parsing and palette generation.

use thiserror::Error;

/// Errors produced by color conversion, harmony derivation and palette building.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ColorError {
    /// Input was not a `#rrggbb` hex color.
    #[error("Invalid hex color format '{0}'. Expected 6 hex digits (#RRGGBB)")]
    InvalidColorFormat(String),

    /// A palette listed the same color twice.
    #[error("Duplicate color '{0}'. Palette colors must be distinct")]
    DuplicateColor(String),

    /// Output format label was neither `hex` nor `rgb`.
    #[error("Unknown color format '{0}'. Must be 'hex' or 'rgb'")]
    UnknownFormat(String),

    /// Requested palette size cannot be produced.
    #[error("Invalid color count {count}: {reason}")]
    InvalidCount {
        /// The count that was requested.
        count: usize,
        /// Why the count was rejected.
        reason: String,
    },

    /// The retry loop hit its attempt cap before the palette was full.
    #[error(
        "Palette generation exhausted after {attempts} attempts ({collected} of {requested} colors)"
    )]
    PaletteGenerationExhausted {
        /// Number of base colors drawn.
        attempts: usize,
        /// Distinct colors collected before giving up.
        collected: usize,
        /// Colors requested.
        requested: usize,
    },
}

impl ColorError {
    pub(crate) fn invalid_count(count: usize, reason: impl Into<String>) -> Self {
        Self::InvalidCount {
            count,
            reason: reason.into(),
        }
    }
}

/// Result alias for color operations.
pub type ColorResult<T> = std::result::Result<T, ColorError>;
