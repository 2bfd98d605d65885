//! Generate command for random harmony palettes.

use crate::cli::common::{
    load_config, print_json, resolve_format, resolve_harmony, CliError, CliResult,
};
use crate::constants::MAX_PALETTE_COUNT;
use crate::display;
use crate::services::PaletteSession;
use clap::Args;
use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::Serialize;

/// Generate a palette of random harmonious colors
#[derive(Debug, Clone, Args)]
pub struct GenerateArgs {
    /// Harmony rule: complementary, analogous, monochromatic, or triad.
    /// Any other value draws one random color at a time.
    #[arg(long, value_name = "RULE")]
    pub harmony: Option<String>,

    /// Number of colors in the palette
    #[arg(short = 'n', long, value_name = "N")]
    pub count: Option<usize>,

    /// Output format: hex or rgb
    #[arg(short, long, value_name = "FORMAT")]
    pub format: Option<String>,

    /// Seed the random source for reproducible palettes
    #[arg(long, value_name = "SEED")]
    pub seed: Option<u64>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,

    /// Copy the color at this 1-based position to the clipboard
    #[arg(long, value_name = "INDEX")]
    pub copy: Option<usize>,

    /// Print labels only, without colored blocks
    #[arg(long)]
    pub no_swatches: bool,
}

/// JSON output for a generated palette
#[derive(Serialize, Debug)]
struct GenerateOutput {
    harmony: String,
    format: String,
    count: usize,
    colors: Vec<String>,
    hex: Vec<String>,
}

impl GenerateArgs {
    /// Execute the generate command
    pub fn execute(&self) -> CliResult<()> {
        let config = load_config();

        let rule = resolve_harmony(self.harmony.as_deref(), config.palette.harmony);
        let format = resolve_format(self.format.as_deref(), config.palette.format)?;
        let count = self.count.unwrap_or(config.palette.count);
        if count > MAX_PALETTE_COUNT {
            return Err(CliError::validation(format!(
                "Invalid color count {count}: at most {MAX_PALETTE_COUNT} colors per palette"
            )));
        }

        let mut session = PaletteSession::new(config.palette.builder(), format);
        let colors = match self.seed {
            Some(seed) => session.generate(&mut StdRng::seed_from_u64(seed), rule, count)?,
            None => session.generate(&mut rand::rng(), rule, count)?,
        };
        let palette = session
            .current()
            .ok_or_else(|| CliError::generation("No palette was generated"))?;

        let copy_text = self
            .copy
            .map(|index| {
                display::select_for_copy(&colors, index).ok_or_else(|| {
                    CliError::validation(format!(
                        "Copy index {index} is out of range (1-{})",
                        colors.len()
                    ))
                })
            })
            .transpose()?;

        if self.json {
            print_json(&GenerateOutput {
                harmony: rule.label().to_string(),
                format: format.label().to_string(),
                count: colors.len(),
                colors: colors.clone(),
                hex: palette.hex_strings(),
            })?;
        } else {
            let swatches = config.display.swatches && !self.no_swatches;
            display::print_palette(palette.colors(), &colors, swatches)
                .map_err(|e| CliError::io(format!("Failed to write palette: {e}")))?;
        }

        if let Some(text) = copy_text {
            display::copy_to_clipboard(text).map_err(|e| CliError::io(format!("{e:#}")))?;
            if !self.json {
                println!("Copied {text}");
            }
        }

        Ok(())
    }
}
