//! Configuration management CLI commands.

use crate::cli::common::{CliError, CliResult};
use crate::cli::render::load_config;
use crate::config::Config;
use clap::{Args, Subcommand};
use std::path::PathBuf;

/// Configuration management commands
#[derive(Args, Debug, Clone)]
pub struct ConfigArgs {
    /// Configuration file to use instead of the platform default
    #[arg(short, long, value_name = "FILE", global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: ConfigCommand,
}

#[derive(Subcommand, Debug, Clone)]
enum ConfigCommand {
    /// Write a configuration file with the default layer profiles
    Init(ConfigInitArgs),
    /// Display current configuration as TOML
    Show,
    /// Set configuration values
    Set(ConfigSetArgs),
}

/// Write a default configuration file
#[derive(Args, Debug, Clone)]
pub struct ConfigInitArgs {
    /// Overwrite an existing file
    #[arg(long)]
    force: bool,
}

/// Set configuration values
#[derive(Args, Debug, Clone)]
pub struct ConfigSetArgs {
    /// ZMK keymap file
    #[arg(long, value_name = "FILE")]
    keymap: Option<PathBuf>,

    /// Reference SVG template
    #[arg(long, value_name = "FILE")]
    template: Option<PathBuf>,

    /// Directory the layer SVGs are written to
    #[arg(long, value_name = "DIR")]
    output_dir: Option<PathBuf>,

    /// Number of layers the keymap should declare
    #[arg(long, value_name = "N")]
    expected_count: Option<usize>,
}

impl ConfigArgs {
    /// Execute config subcommand
    pub fn execute(&self) -> CliResult<()> {
        match &self.command {
            ConfigCommand::Init(args) => self.init(args),
            ConfigCommand::Show => self.show(),
            ConfigCommand::Set(args) => self.set(args),
        }
    }

    fn init(&self, args: &ConfigInitArgs) -> CliResult<()> {
        let exists = match &self.config {
            Some(path) => path.exists(),
            None => Config::exists(),
        };
        if exists && !args.force {
            return Err(CliError::validation(
                "Configuration file already exists. Use --force to overwrite",
            ));
        }

        self.save(&Config::new())
    }

    fn show(&self) -> CliResult<()> {
        let config = load_config(self.config.as_deref())?;
        let content = toml::to_string_pretty(&config)
            .map_err(|e| CliError::io(format!("Failed to serialize configuration: {e}")))?;
        print!("{content}");
        Ok(())
    }

    fn set(&self, args: &ConfigSetArgs) -> CliResult<()> {
        let mut config = load_config(self.config.as_deref())?;
        let mut changed = false;

        if let Some(keymap) = &args.keymap {
            config.paths.keymap = Some(keymap.clone());
            changed = true;
        }
        if let Some(template) = &args.template {
            config.paths.template = Some(template.clone());
            changed = true;
        }
        if let Some(output_dir) = &args.output_dir {
            config.paths.output_dir = output_dir.clone();
            changed = true;
        }
        if let Some(count) = args.expected_count {
            config.layers.expected_count = count;
            changed = true;
        }

        if !changed {
            return Err(CliError::validation(
                "No configuration values specified. Use --keymap, --template, --output-dir or --expected-count",
            ));
        }

        self.save(&config)
    }

    fn save(&self, config: &Config) -> CliResult<()> {
        let (result, target) = match &self.config {
            Some(path) => (config.save_to(path), path.clone()),
            None => (
                config.save(),
                Config::config_file_path().unwrap_or_default(),
            ),
        };
        result.map_err(|e| CliError::io(format!("Failed to save configuration: {e:#}")))?;

        println!("✓ Saved configuration to {}", target.display());
        Ok(())
    }
}
