//! Convert command: show a color in every supported encoding.

use crate::cli::common::{print_json, CliResult};
use crate::models::{Hsl, RgbColor};
use clap::Args;
use serde::Serialize;

/// Show hex, rgb and hsl forms of colors
#[derive(Debug, Clone, Args)]
pub struct ConvertArgs {
    /// Colors to convert (#rrggbb)
    #[arg(value_name = "COLOR", required = true)]
    pub colors: Vec<String>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// JSON output for one converted color
#[derive(Serialize, Debug)]
struct ConvertedColor {
    input: String,
    hex: String,
    rgb: String,
    hsl: Hsl,
}

impl ConvertedColor {
    fn new(input: &str, color: RgbColor) -> Self {
        Self {
            input: input.to_string(),
            hex: color.to_hex(),
            rgb: color.to_rgb_string(),
            hsl: color.to_hsl(),
        }
    }
}

impl ConvertArgs {
    /// Execute the convert command
    pub fn execute(&self) -> CliResult<()> {
        let converted = self
            .colors
            .iter()
            .map(|input| -> CliResult<ConvertedColor> {
                Ok(ConvertedColor::new(input, RgbColor::from_hex(input)?))
            })
            .collect::<CliResult<Vec<_>>>()?;

        if self.json {
            return print_json(&converted);
        }

        for color in &converted {
            println!("{}  {}  {}", color.hex, color.rgb, color.hsl);
        }
        Ok(())
    }
}
