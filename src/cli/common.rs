//! Shared CLI plumbing: errors, exit codes and argument resolution.

use serde::Serialize;
use std::fmt;
use tracing::warn;

use crate::config::Config;
use crate::models::{ColorError, ColorFormat, HarmonyRule};

/// Process exit codes used by every command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
    /// Command finished normally
    Success = 0,
    /// Bad input (arguments, colors, configuration values)
    ValidationError = 1,
    /// File system, terminal or clipboard failure
    IoError = 2,
    /// Palette could not be filled within the attempt cap
    GenerationError = 3,
}

/// Error returned by command handlers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CliError {
    /// Exit code the process should terminate with
    pub code: ExitCode,
    /// Human-readable message printed to stderr
    pub message: String,
}

impl CliError {
    /// Invalid user input.
    pub fn validation(message: impl Into<String>) -> Self {
        Self {
            code: ExitCode::ValidationError,
            message: message.into(),
        }
    }

    /// I/O failure.
    pub fn io(message: impl Into<String>) -> Self {
        Self {
            code: ExitCode::IoError,
            message: message.into(),
        }
    }

    /// Palette generation failure.
    pub fn generation(message: impl Into<String>) -> Self {
        Self {
            code: ExitCode::GenerationError,
            message: message.into(),
        }
    }

    /// Numeric exit code.
    #[must_use]
    pub fn exit_code(&self) -> i32 {
        self.code as i32
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

impl std::error::Error for CliError {}

impl From<ColorError> for CliError {
    fn from(err: ColorError) -> Self {
        match err {
            ColorError::PaletteGenerationExhausted { .. } => Self::generation(err.to_string()),
            ColorError::InvalidColorFormat(_)
            | ColorError::DuplicateColor(_)
            | ColorError::UnknownFormat(_)
            | ColorError::InvalidCount { .. } => Self::validation(err.to_string()),
        }
    }
}

/// Result type for command handlers.
pub type CliResult<T> = Result<T, CliError>;

/// Loads the user configuration, falling back to defaults when it is unreadable.
pub fn load_config() -> Config {
    Config::load().unwrap_or_else(|e| {
        warn!("Ignoring configuration: {e:#}");
        Config::default()
    })
}

/// Resolves a `--harmony`/`--rule` value.
///
/// Unknown labels are not an error: they select [`HarmonyRule::Single`].
pub fn resolve_harmony(label: Option<&str>, fallback: HarmonyRule) -> HarmonyRule {
    match label {
        None => fallback,
        Some(label) => HarmonyRule::try_from_label(label).unwrap_or_else(|| {
            warn!(label, "Unrecognized harmony, drawing one random color at a time");
            HarmonyRule::Single
        }),
    }
}

/// Resolves a `--format` value.
pub fn resolve_format(label: Option<&str>, fallback: ColorFormat) -> CliResult<ColorFormat> {
    label.map_or(Ok(fallback), |label| Ok(label.parse()?))
}

/// Serializes `value` as pretty JSON on stdout.
pub fn print_json<T: Serialize>(value: &T) -> CliResult<()> {
    let json = serde_json::to_string_pretty(value)
        .map_err(|e| CliError::io(format!("Failed to serialize output to JSON: {e}")))?;
    println!("{json}");
    Ok(())
}
