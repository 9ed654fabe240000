//! SVG layer diagrams.
//!
//! Each layer becomes one standalone SVG document: the reference template's
//! header (styles and outer containers), a caption, one `<g>` per physical
//! key, and the template's closing tags. Output depends only on the
//! template, the key positions and the parsed bindings, so rendering the
//! same keymap twice produces identical bytes.

use crate::models::{KeyPosition, LayerProfile, ParsedBinding};
use anyhow::{Context, Result};
use std::path::Path;
use tracing::warn;

/// Opening tag of the container that per-layer content is inserted into.
pub const LAYER_CONTAINER_MARKER: &str = r#"<g transform="translate(0, 56)">"#;

/// Closing tags of the layer container, the outer group and the document.
pub const TEMPLATE_FOOTER: &str = "    </g>\n  </g>\n</svg>";

/// Reference template embedded in the binary.
const EMBEDDED_TEMPLATE: &str = include_str!("blank.svg");

/// Header and footer shared by every rendered layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SvgTemplate {
    header: String,
    footer: String,
}

impl SvgTemplate {
    /// Slices a reference document at [`LAYER_CONTAINER_MARKER`].
    ///
    /// # Errors
    ///
    /// Fails if the marker does not occur in `text`.
    pub fn parse(text: &str) -> Result<Self> {
        let idx = text.find(LAYER_CONTAINER_MARKER).with_context(|| {
            format!("Template is missing the layer container marker '{LAYER_CONTAINER_MARKER}'")
        })?;

        let mut header = text[..idx + LAYER_CONTAINER_MARKER.len()].to_string();
        header.push('\n');

        Ok(Self {
            header,
            footer: TEMPLATE_FOOTER.to_string(),
        })
    }

    /// Reads and slices a reference document from disk.
    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read SVG template: {}", path.display()))?;

        Self::parse(&text)
            .with_context(|| format!("Failed to parse SVG template: {}", path.display()))
    }

    /// The template shipped with the binary.
    pub fn embedded() -> Result<Self> {
        Self::parse(EMBEDDED_TEMPLATE).context("Embedded SVG template is invalid")
    }

    /// Everything up to and including the layer container's opening tag.
    #[must_use]
    pub fn header(&self) -> &str {
        &self.header
    }

    /// Closing tags appended after the keys.
    #[must_use]
    pub fn footer(&self) -> &str {
        &self.footer
    }
}

/// Renders parsed layers onto a fixed physical layout.
#[derive(Debug, Clone, Copy)]
pub struct SvgRenderer<'a> {
    template: &'a SvgTemplate,
    positions: &'a [KeyPosition],
}

impl<'a> SvgRenderer<'a> {
    /// Creates a renderer for the given template and key positions.
    #[must_use]
    pub const fn new(template: &'a SvgTemplate, positions: &'a [KeyPosition]) -> Self {
        Self {
            template,
            positions,
        }
    }

    /// Renders one layer as a complete SVG document.
    ///
    /// `bindings` are in key-position order. If the profile names a held
    /// position, that key shows the layer's short name instead of its
    /// binding. A binding count that differs from the number of positions is
    /// logged and only the overlapping positions are drawn.
    #[must_use]
    pub fn render_layer(&self, profile: &LayerProfile, bindings: &[ParsedBinding]) -> String {
        if bindings.len() != self.positions.len() {
            warn!(
                "Layer '{}' has {} bindings, expected {}",
                profile.file_stem,
                bindings.len(),
                self.positions.len()
            );
        }

        let mut doc = String::from(self.template.header());
        doc.push_str(&format!(
            r#"      <text x="5" y="-20" class="label" font-size="16">{}</text>"#,
            escape_xml(&profile.display_name)
        ));
        doc.push('\n');

        for (pos_idx, (position, binding)) in self.positions.iter().zip(bindings).enumerate() {
            if profile.held_position == Some(pos_idx) {
                let held = ParsedBinding::tap(profile.short_name.as_str());
                doc.push_str(&render_key(pos_idx, position, &held, true));
            } else {
                doc.push_str(&render_key(pos_idx, position, binding, false));
            }
            doc.push('\n');
        }

        doc.push_str(self.template.footer());
        doc
    }
}

/// Renders one key as a `<g>` element with its rectangle and labels.
fn render_key(
    pos_idx: usize,
    position: &KeyPosition,
    key: &ParsedBinding,
    is_held: bool,
) -> String {
    let rect_class = if is_held { "key held" } else { "key" };
    let tap_class = if key.is_transparent {
        "key tap trans"
    } else {
        "key tap"
    };
    let tap = escape_xml(&key.tap);

    let mut lines = vec![
        format!(
            r#"      <g transform="{}" class="key keypos-{pos_idx}">"#,
            position.transform()
        ),
        format!(
            r#"        <rect rx="6" ry="6" x="-28" y="-26" width="55" height="52" class="{rect_class}" />"#
        ),
    ];

    if let Some(hold) = &key.hold {
        // Tap label moves up to make room for the smaller hold label
        lines.push(format!(
            r#"        <text x="0" y="-6" class="{tap_class}">{tap}</text>"#
        ));
        lines.push(format!(
            r#"        <text x="0" y="0" class="key hold small">{}</text>"#,
            escape_xml(hold)
        ));
    } else {
        lines.push(format!(
            r#"        <text x="0" y="0" class="{tap_class}">{tap}</text>"#
        ));
    }

    lines.push("      </g>".to_string());
    lines.join("\n")
}

/// Escapes text for use in SVG element content and attribute values.
#[must_use]
pub fn escape_xml(input: &str) -> String {
    input
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#x27;")
}
