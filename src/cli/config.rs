//! Configuration management CLI commands.

use crate::cli::common::{print_json, CliError, CliResult};
use crate::config::Config;
use crate::models::{ColorFormat, HarmonyRule};
use clap::{Args, Subcommand};
use serde::Serialize;

/// Configuration management commands
#[derive(Args, Debug)]
pub struct ConfigArgs {
    #[command(subcommand)]
    command: ConfigCommand,
}

#[derive(Subcommand, Debug)]
enum ConfigCommand {
    /// Display current configuration
    Show(ConfigShowArgs),
    /// Set configuration values
    Set(ConfigSetArgs),
}

/// Display current configuration
#[derive(Args, Debug)]
pub struct ConfigShowArgs {
    /// Output as JSON
    #[arg(long)]
    json: bool,
}

/// Set configuration values
#[derive(Args, Debug)]
pub struct ConfigSetArgs {
    /// Default number of colors per palette
    #[arg(long, value_name = "N")]
    count: Option<usize>,

    /// Default output format (hex or rgb)
    #[arg(long, value_name = "FORMAT")]
    format: Option<String>,

    /// Default harmony rule (complementary, analogous, monochromatic, triad)
    #[arg(long, value_name = "RULE")]
    harmony: Option<String>,

    /// Base-color draws allowed before generation gives up
    #[arg(long, value_name = "N")]
    max_attempts: Option<usize>,

    /// Draw colored blocks next to labels (true or false)
    #[arg(long, value_name = "BOOL")]
    swatches: Option<bool>,
}

/// JSON-serializable configuration for output
#[derive(Serialize, Debug)]
struct ConfigOutput {
    #[serde(skip_serializing_if = "Option::is_none")]
    path: Option<String>,
    palette: PaletteOutput,
    display: DisplayOutput,
}

#[derive(Serialize, Debug)]
struct PaletteOutput {
    count: usize,
    format: String,
    harmony: String,
    max_attempts: usize,
}

#[derive(Serialize, Debug)]
struct DisplayOutput {
    swatches: bool,
}

impl ConfigArgs {
    /// Execute config subcommand
    pub fn execute(&self) -> CliResult<()> {
        match &self.command {
            ConfigCommand::Show(args) => args.execute(),
            ConfigCommand::Set(args) => args.execute(),
        }
    }
}

impl ConfigShowArgs {
    /// Execute show command
    pub fn execute(&self) -> CliResult<()> {
        let config = Config::load()
            .map_err(|e| CliError::validation(format!("Failed to load configuration: {e:#}")))?;

        if self.json {
            output_json(&config)?;
        } else {
            output_human_readable(&config);
        }

        Ok(())
    }
}

impl ConfigSetArgs {
    /// Execute set command
    pub fn execute(&self) -> CliResult<()> {
        // At least one argument must be provided
        if self.count.is_none()
            && self.format.is_none()
            && self.harmony.is_none()
            && self.max_attempts.is_none()
            && self.swatches.is_none()
        {
            return Err(CliError::validation(
                "At least one configuration option must be specified: --count, --format, --harmony, --max-attempts, or --swatches",
            ));
        }

        // Load current configuration
        let mut config = Config::load().unwrap_or_default();

        if let Some(count) = self.count {
            config.palette.count = count;
        }

        if let Some(format) = &self.format {
            config.palette.format = format.parse::<ColorFormat>()?;
        }

        // Unlike generate, a stored default must name a real rule
        if let Some(label) = &self.harmony {
            config.palette.harmony = HarmonyRule::try_from_label(label).ok_or_else(|| {
                CliError::validation(format!(
                    "Invalid harmony '{label}'. Must be 'complementary', 'analogous', 'monochromatic', 'triad', or 'single'"
                ))
            })?;
        }

        if let Some(max_attempts) = self.max_attempts {
            config.palette.max_attempts = max_attempts;
        }

        if let Some(swatches) = self.swatches {
            config.display.swatches = swatches;
        }

        config
            .validate()
            .map_err(|e| CliError::validation(format!("{e:#}")))?;

        // Save configuration
        config
            .save()
            .map_err(|e| CliError::io(format!("Failed to save configuration: {e:#}")))?;

        println!("Configuration updated successfully.");

        Ok(())
    }
}

/// Output configuration in JSON format
fn output_json(config: &Config) -> CliResult<()> {
    let output = ConfigOutput {
        path: Config::config_file_path()
            .ok()
            .map(|p| p.to_string_lossy().to_string()),
        palette: PaletteOutput {
            count: config.palette.count,
            format: config.palette.format.label().to_string(),
            harmony: config.palette.harmony.label().to_string(),
            max_attempts: config.palette.max_attempts,
        },
        display: DisplayOutput {
            swatches: config.display.swatches,
        },
    };

    print_json(&output)
}

/// Output configuration in human-readable format
fn output_human_readable(config: &Config) {
    println!("HueForge Configuration");
    println!("======================");
    println!();

    if let Ok(path) = Config::config_file_path() {
        println!("File: {}", path.display());
        println!();
    }

    println!("Palette:");
    println!("  Count: {}", config.palette.count);
    println!("  Format: {}", config.palette.format);
    println!("  Harmony: {}", config.palette.harmony);
    println!("  Max Attempts: {}", config.palette.max_attempts);
    println!();

    println!("Display:");
    println!("  Swatches: {}", config.display.swatches);
    println!();
}
