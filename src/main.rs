//! HueForge - color palette generator
//!
//! Generates palettes from color-theory harmony rules and prints them as
//! terminal swatches, with hex/rgb/hsl conversion helpers.

use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use hueforge::cli::{
    CliResult, ConfigArgs, ConvertArgs, GenerateArgs, HarmonyArgs, ReformatArgs,
};
use hueforge::constants::APP_BINARY_NAME;

/// HueForge - harmony-based color palette generator
#[derive(Parser, Debug)]
#[command(name = APP_BINARY_NAME, author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Generate a palette of random harmonious colors
    Generate(GenerateArgs),
    /// Derive harmonious colors from a base color
    Harmony(HarmonyArgs),
    /// Show hex, rgb and hsl forms of colors
    Convert(ConvertArgs),
    /// Render an existing palette in another format
    Reformat(ReformatArgs),
    /// Manage configuration
    Config(ConfigArgs),
}

impl Commands {
    fn execute(&self) -> CliResult<()> {
        match self {
            Self::Generate(args) => args.execute(),
            Self::Harmony(args) => args.execute(),
            Self::Convert(args) => args.execute(),
            Self::Reformat(args) => args.execute(),
            Self::Config(args) => args.execute(),
        }
    }
}

/// Logs go to stderr so stdout stays parseable.
fn init_tracing(verbose: bool) {
    let filter = if verbose { "debug" } else { "info" };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    if let Err(err) = cli.command.execute() {
        eprintln!("Error: {err}");
        std::process::exit(err.exit_code());
    }
}
