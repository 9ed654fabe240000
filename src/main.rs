//! keymap-svg - ZMK keymap layer diagrams
//!
//! Reads a ZMK `.keymap` file and writes one SVG diagram per layer for a
//! 38-key Totem split keyboard.

use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use keymap_svg::cli::{CliResult, ConfigArgs, EraseArgs, ExitCode, InspectArgs, RenderArgs};

/// keymap-svg - Render ZMK keymap layers as SVG diagrams
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Render every layer as an SVG diagram
    Render(RenderArgs),
    /// Print the parsed labels of each layer
    Inspect(InspectArgs),
    /// Write a UF2 file that erases a flash region
    Erase(EraseArgs),
    /// Manage the configuration file
    Config(ConfigArgs),
}

impl Command {
    fn execute(&self) -> CliResult<()> {
        match self {
            Self::Render(args) => args.execute(),
            Self::Inspect(args) => args.execute(),
            Self::Erase(args) => args.execute(),
            Self::Config(args) => args.execute(),
        }
    }
}

fn main() {
    let cli = Cli::parse();

    // Initialize tracing
    let filter = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    if let Err(e) = cli.command.execute() {
        eprintln!("Error: {e}");
        std::process::exit(e.exit_code().code());
    }

    std::process::exit(ExitCode::Success.code());
}
