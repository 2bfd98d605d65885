//! CLI command handlers for HueForge.
//!
//! Each subcommand is an `Args` struct with an `execute` method returning
//! [`CliResult`]. Output goes to stdout; logs and errors go to stderr.

pub mod common;
pub mod config;
pub mod convert;
pub mod generate;
pub mod harmony;
pub mod reformat;

// Re-export types used by main.rs and tests
pub use common::{CliError, CliResult, ExitCode};
pub use config::ConfigArgs;
pub use convert::ConvertArgs;
pub use generate::GenerateArgs;
pub use harmony::HarmonyArgs;
pub use reformat::ReformatArgs;
