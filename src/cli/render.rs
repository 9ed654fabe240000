//! Render command: one SVG diagram per keymap layer.

use crate::cli::common::{CliError, CliResult};
use crate::config::Config;
use crate::constants::APP_BINARY_NAME;
use crate::export::SvgTemplate;
use crate::labels::LabelTables;
use crate::parser::parse_keymap_file;
use crate::services::{render_keymap, write_layers, ConversionContext};
use clap::Args;
use std::path::{Path, PathBuf};

/// Render every layer of a ZMK keymap as an SVG diagram
#[derive(Debug, Clone, Args)]
pub struct RenderArgs {
    /// Path to the ZMK .keymap file (defaults to `paths.keymap` from config)
    #[arg(short, long, value_name = "FILE")]
    pub keymap: Option<PathBuf>,

    /// Reference SVG template (defaults to the built-in template)
    #[arg(short, long, value_name = "FILE")]
    pub template: Option<PathBuf>,

    /// Output directory (defaults to `paths.output_dir` from config)
    #[arg(short, long, value_name = "DIR")]
    pub output: Option<PathBuf>,

    /// Configuration file to use instead of the platform default
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,
}

impl RenderArgs {
    /// Execute the render command
    pub fn execute(&self) -> CliResult<()> {
        let config = load_config(self.config.as_deref())?;

        let keymap_path = self
            .keymap
            .clone()
            .or_else(|| config.paths.keymap.clone())
            .ok_or_else(|| {
                CliError::validation(format!(
                    "No keymap given. Run `{APP_BINARY_NAME} render --keymap FILE` or set paths.keymap in config"
                ))
            })?;

        let template = match self.template.as_ref().or(config.paths.template.as_ref()) {
            Some(path) => SvgTemplate::load(path),
            None => SvgTemplate::embedded(),
        }
        .map_err(|e| CliError::io(format!("Failed to load template: {e:#}")))?;

        let keymap = parse_keymap_file(&keymap_path)
            .map_err(|e| CliError::io(format!("Failed to load keymap: {e:#}")))?;

        let labels = LabelTables::new();
        let ctx = ConversionContext {
            labels: &labels,
            template: &template,
            profiles: &config.layers.profiles,
            expected_layers: config.layers.expected_count,
        };
        let rendered = render_keymap(ctx, &keymap);

        let out_dir = self
            .output
            .clone()
            .unwrap_or_else(|| config.paths.output_dir.clone());
        let report = write_layers(&rendered, &out_dir)
            .map_err(|e| CliError::io(format!("{e:#}")))?;

        for path in &report.written {
            println!("✓ Wrote {}", path.display());
        }

        if !report.is_complete() {
            for (stem, err) in &report.failed {
                eprintln!("✗ {stem}: {err:#}");
            }
            return Err(CliError::io(format!(
                "Failed to write {} of {} layers",
                report.failed.len(),
                rendered.len()
            )));
        }

        Ok(())
    }
}

/// Loads `path` if given, otherwise the platform config (or defaults).
pub(crate) fn load_config(path: Option<&Path>) -> CliResult<Config> {
    let result = match path {
        Some(path) => Config::load_from(path),
        None => Config::load(),
    };
    result.map_err(|e| CliError::validation(format!("Failed to load configuration: {e:#}")))
}
