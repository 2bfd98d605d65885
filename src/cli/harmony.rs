//! Harmony command: apply one rule to a chosen base color.

use crate::cli::common::{
    load_config, print_json, resolve_format, resolve_harmony, CliError, CliResult,
};
use crate::constants::DEFAULT_MONOCHROMATIC_STEPS;
use crate::display;
use crate::models::{HarmonyRule, RgbColor};
use crate::services::harmony;
use clap::Args;
use serde::Serialize;

/// Derive harmonious colors from a base color
#[derive(Debug, Clone, Args)]
pub struct HarmonyArgs {
    /// Base color (#rrggbb)
    #[arg(value_name = "BASE")]
    pub base: String,

    /// Harmony rule: complementary, analogous, monochromatic, or triad
    #[arg(short, long, value_name = "RULE")]
    pub rule: Option<String>,

    /// Number of lightness steps (monochromatic only)
    #[arg(short = 'n', long, value_name = "N")]
    pub count: Option<usize>,

    /// Output format: hex or rgb
    #[arg(short, long, value_name = "FORMAT")]
    pub format: Option<String>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,

    /// Print labels only, without colored blocks
    #[arg(long)]
    pub no_swatches: bool,
}

/// JSON output for a derived harmony
#[derive(Serialize, Debug)]
struct HarmonyOutput {
    base: String,
    rule: String,
    format: String,
    colors: Vec<String>,
}

impl HarmonyArgs {
    /// Execute the harmony command
    pub fn execute(&self) -> CliResult<()> {
        let config = load_config();

        let base = RgbColor::from_hex(&self.base)?;
        let rule = resolve_harmony(self.rule.as_deref(), config.palette.harmony);
        let format = resolve_format(self.format.as_deref(), config.palette.format)?;

        if self.count.is_some() && rule != HarmonyRule::Monochromatic {
            return Err(CliError::validation(format!(
                "--count only applies to monochromatic harmony, not '{rule}'"
            )));
        }

        let colors = match rule {
            HarmonyRule::Monochromatic => harmony::monochromatic(
                base,
                self.count.unwrap_or(DEFAULT_MONOCHROMATIC_STEPS),
            )?,
            _ => harmony::derive(rule, base),
        };
        let labels: Vec<String> = colors.iter().map(|c| format.render(c)).collect();

        if self.json {
            return print_json(&HarmonyOutput {
                base: base.to_hex(),
                rule: rule.label().to_string(),
                format: format.label().to_string(),
                colors: labels,
            });
        }

        let swatches = config.display.swatches && !self.no_swatches;
        display::print_palette(&colors, &labels, swatches)
            .map_err(|e| CliError::io(format!("Failed to write palette: {e}")))
    }
}
