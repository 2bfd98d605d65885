//! Reformat command: show an existing hex palette in another format.

use crate::cli::common::{load_config, print_json, CliError, CliResult};
use crate::display;
use crate::models::{ColorFormat, Palette};
use clap::Args;
use serde::Serialize;

/// Render an existing palette in another format without regenerating it
#[derive(Debug, Clone, Args)]
pub struct ReformatArgs {
    /// Target format: hex or rgb
    #[arg(short, long, value_name = "FORMAT")]
    pub to: String,

    /// Palette colors in order (#rrggbb)
    #[arg(value_name = "COLOR", required = true)]
    pub colors: Vec<String>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,

    /// Print labels only, without colored blocks
    #[arg(long)]
    pub no_swatches: bool,
}

/// JSON output for a reformatted palette
#[derive(Serialize, Debug)]
struct ReformatOutput {
    format: String,
    colors: Vec<String>,
}

impl ReformatArgs {
    /// Execute the reformat command
    pub fn execute(&self) -> CliResult<()> {
        let format: ColorFormat = self.to.parse()?;
        let palette = Palette::from_hex_strings(self.colors.as_slice())?;
        let labels = palette.render(format);

        if self.json {
            return print_json(&ReformatOutput {
                format: format.label().to_string(),
                colors: labels,
            });
        }

        let swatches = load_config().display.swatches && !self.no_swatches;
        display::print_palette(palette.colors(), &labels, swatches)
            .map_err(|e| CliError::io(format!("Failed to write palette: {e}")))
    }
}
