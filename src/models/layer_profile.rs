//! Per-layer rendering settings: output name, caption and held key.

use crate::constants::KEY_COUNT;
use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// How one layer is named and marked in its rendered document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LayerProfile {
    /// Output file name without extension (e.g., "nav")
    pub file_stem: String,
    /// Caption drawn above the keys (e.g., "Nav")
    pub display_name: String,
    /// Short layer name drawn on the held-to-activate key
    pub short_name: String,
    /// Key position that activates this layer while held.
    /// `None` for the base layer and toggle-only layers.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub held_position: Option<usize>,
}

impl LayerProfile {
    /// Creates a profile without a held key.
    pub fn new(
        file_stem: impl Into<String>,
        display_name: impl Into<String>,
        short_name: impl Into<String>,
    ) -> Self {
        Self {
            file_stem: file_stem.into(),
            display_name: display_name.into(),
            short_name: short_name.into(),
            held_position: None,
        }
    }

    /// Sets the held-to-activate key position.
    #[must_use]
    pub fn held_at(mut self, position: usize) -> Self {
        self.held_position = Some(position);
        self
    }

    /// Profile used for a layer beyond the configured list.
    #[must_use]
    pub fn fallback(layer_idx: usize, display_name: Option<&str>) -> Self {
        let display = display_name.map_or_else(|| format!("Layer {layer_idx}"), str::to_string);
        Self::new(format!("layer{layer_idx}"), display, layer_idx.to_string())
    }
}

/// The Totem keymap's six layers.
#[must_use]
pub fn default_profiles() -> Vec<LayerProfile> {
    vec![
        LayerProfile::new("base", "Base (Gallium)", "Base"),
        LayerProfile::new("nav", "Nav", "Nav").held_at(33),
        LayerProfile::new("num", "Num", "Num").held_at(36),
        LayerProfile::new("fun", "Fun", "Fun").held_at(37),
        LayerProfile::new("util", "Util + Mouse", "Util").held_at(32),
        LayerProfile::new("game", "Game", "Game"),
    ]
}

/// Checks that profiles produce distinct files and valid held positions.
pub fn validate_profiles(profiles: &[LayerProfile]) -> Result<()> {
    let mut stems = HashSet::new();

    for (idx, profile) in profiles.iter().enumerate() {
        if profile.file_stem.trim().is_empty() {
            anyhow::bail!("Layer {idx} has an empty file name");
        }

        if !stems.insert(profile.file_stem.as_str()) {
            anyhow::bail!("Duplicate layer file name '{}'", profile.file_stem);
        }

        if let Some(pos) = profile.held_position {
            if pos >= KEY_COUNT {
                anyhow::bail!(
                    "Layer '{}' held position {} is out of range (0-{})",
                    profile.file_stem,
                    pos,
                    KEY_COUNT - 1
                );
            }
        }
    }

    Ok(())
}
