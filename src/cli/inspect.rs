//! Inspect command: show how each binding of a keymap is labelled.

use crate::cli::common::{CliError, CliResult};
use crate::labels::LabelTables;
use crate::models::ParsedBinding;
use crate::parser::{parse_keymap_file, BindingParser};
use crate::services::conversion::parse_layer;
use clap::Args;
use serde::Serialize;
use std::path::PathBuf;

/// Print the parsed labels of a keymap's layers
#[derive(Debug, Clone, Args)]
pub struct InspectArgs {
    /// Path to the ZMK .keymap file
    #[arg(short, long, value_name = "FILE")]
    pub keymap: PathBuf,

    /// Only show the layer at this index
    #[arg(long, value_name = "N")]
    pub layer: Option<usize>,

    /// Output results as JSON
    #[arg(long)]
    pub json: bool,
}

/// One layer in the inspect output.
#[derive(Debug, Serialize)]
pub struct InspectLayer {
    /// Layer index in the keymap
    pub index: usize,
    /// Devicetree node name
    pub node_name: String,
    /// `display-name` property, if set
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    /// Parsed bindings in key-position order
    pub keys: Vec<InspectKey>,
}

/// One key in the inspect output.
#[derive(Debug, Serialize)]
pub struct InspectKey {
    /// Key position index
    pub position: usize,
    /// Raw binding text without the leading `&`
    pub raw: String,
    /// Resolved labels
    #[serde(flatten)]
    pub binding: ParsedBinding,
}

impl InspectArgs {
    /// Execute the inspect command
    pub fn execute(&self) -> CliResult<()> {
        let keymap = parse_keymap_file(&self.keymap)
            .map_err(|e| CliError::io(format!("Failed to load keymap: {e:#}")))?;

        if let Some(idx) = self.layer {
            if idx >= keymap.layers.len() {
                return Err(CliError::validation(format!(
                    "Layer {idx} out of range (keymap has {} layers)",
                    keymap.layers.len()
                )));
            }
        }

        let labels = LabelTables::new();
        let parser = BindingParser::new(&labels).with_layer_defines(keymap.layer_defines.clone());

        let layers: Vec<InspectLayer> = keymap
            .layers
            .iter()
            .enumerate()
            .filter(|(idx, _)| self.layer.is_none() || self.layer == Some(*idx))
            .map(|(index, layer)| InspectLayer {
                index,
                node_name: layer.node_name.clone(),
                display_name: layer.display_name.clone(),
                keys: layer
                    .bindings()
                    .into_iter()
                    .zip(parse_layer(&parser, layer))
                    .enumerate()
                    .map(|(position, (raw, binding))| InspectKey {
                        position,
                        raw: raw.to_string(),
                        binding,
                    })
                    .collect(),
            })
            .collect();

        if self.json {
            println!(
                "{}",
                serde_json::to_string_pretty(&layers)
                    .map_err(|e| CliError::io(format!("Failed to serialize JSON: {e}")))?
            );
            return Ok(());
        }

        for layer in &layers {
            match &layer.display_name {
                Some(name) => println!("Layer {}: {} ({name})", layer.index, layer.node_name),
                None => println!("Layer {}: {}", layer.index, layer.node_name),
            }
            println!("  {} keys", layer.keys.len());
            for key in &layer.keys {
                let binding = &key.binding;
                let hold = binding.hold.as_deref().unwrap_or("");
                let trans = if binding.is_transparent { " (trans)" } else { "" };
                println!(
                    "  {:>3}  {:<28} {:<10} {hold}{trans}",
                    key.position, key.raw, binding.tap
                );
            }
            println!();
        }

        Ok(())
    }
}
