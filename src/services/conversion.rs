//! Keymap to SVG conversion service.
//!
//! This module ties the pipeline together: layers found in the keymap are
//! split into bindings, resolved into labels and rendered one document per
//! layer. Layers are independent of each other, and a failed write for one
//! layer does not stop the others.

use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

use crate::{
    export::{SvgRenderer, SvgTemplate},
    labels::LabelTables,
    models::{LayerProfile, ParsedBinding, TOTEM_KEY_POSITIONS},
    parser::{BindingParser, Keymap, RawLayer},
};

/// Everything needed to turn a parsed keymap into documents.
#[derive(Debug, Clone, Copy)]
pub struct ConversionContext<'a> {
    /// Shared label tables
    pub labels: &'a LabelTables,
    /// Reference template
    pub template: &'a SvgTemplate,
    /// Per-layer output names, captions and held keys, by layer index
    pub profiles: &'a [LayerProfile],
    /// Number of layers the keymap is expected to contain
    pub expected_layers: usize,
}

/// One rendered layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedLayer {
    /// Layer index in the keymap
    pub index: usize,
    /// Output file name without extension
    pub file_stem: String,
    /// Complete SVG document
    pub document: String,
}

/// Outcome of writing rendered layers to disk.
#[derive(Debug, Default)]
pub struct WriteReport {
    /// Files written successfully, in layer order
    pub written: Vec<PathBuf>,
    /// Layers that could not be written, with the cause
    pub failed: Vec<(String, anyhow::Error)>,
}

impl WriteReport {
    /// True if every layer was written.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.failed.is_empty()
    }
}

/// Resolves every binding of a layer into display labels.
#[must_use]
pub fn parse_layer(parser: &BindingParser<'_>, layer: &RawLayer) -> Vec<ParsedBinding> {
    layer
        .bindings()
        .into_iter()
        .map(|binding| parser.parse(binding))
        .collect()
}

/// Profile for the layer at `index`, falling back to a generated one.
#[must_use]
pub fn profile_for(profiles: &[LayerProfile], index: usize, layer: &RawLayer) -> LayerProfile {
    profiles
        .get(index)
        .cloned()
        .unwrap_or_else(|| LayerProfile::fallback(index, layer.display_name.as_deref()))
}

/// Renders every layer of `keymap`.
///
/// A layer count other than `ctx.expected_layers` is logged as a warning and
/// whatever layers were found are rendered.
#[must_use]
pub fn render_keymap(ctx: ConversionContext<'_>, keymap: &Keymap) -> Vec<RenderedLayer> {
    if keymap.layers.len() != ctx.expected_layers {
        warn!(
            "Expected {} layers, found {}",
            ctx.expected_layers,
            keymap.layers.len()
        );
    }

    let parser = BindingParser::new(ctx.labels).with_layer_defines(keymap.layer_defines.clone());
    let renderer = SvgRenderer::new(ctx.template, &TOTEM_KEY_POSITIONS);

    keymap
        .layers
        .iter()
        .enumerate()
        .map(|(index, layer)| {
            let profile = profile_for(ctx.profiles, index, layer);
            let bindings = parse_layer(&parser, layer);
            RenderedLayer {
                index,
                file_stem: profile.file_stem.clone(),
                document: renderer.render_layer(&profile, &bindings),
            }
        })
        .collect()
}

/// Writes each rendered layer to `<out_dir>/<file_stem>.svg`.
///
/// The output directory is created if needed; failing to create it is the
/// only error returned. Per-layer write failures are collected in the
/// report instead.
pub fn write_layers(layers: &[RenderedLayer], out_dir: &Path) -> Result<WriteReport> {
    fs::create_dir_all(out_dir).with_context(|| {
        format!("Failed to create output directory: {}", out_dir.display())
    })?;

    let mut report = WriteReport::default();

    for layer in layers {
        let path = out_dir.join(format!("{}.svg", layer.file_stem));
        match write_atomic(&path, &layer.document) {
            Ok(()) => {
                debug!("Wrote layer {} to {}", layer.index, path.display());
                report.written.push(path);
            }
            Err(e) => {
                warn!("Failed to write layer {}: {e:#}", layer.index);
                report.failed.push((layer.file_stem.clone(), e));
            }
        }
    }

    Ok(report)
}

/// Writes via temp file + rename so a partial document is never left behind.
fn write_atomic(path: &Path, content: &str) -> Result<()> {
    let temp_path = path.with_extension("svg.tmp");

    fs::write(&temp_path, content)
        .with_context(|| format!("Failed to write temp file: {}", temp_path.display()))?;

    if let Err(e) = fs::rename(&temp_path, path) {
        let _ = fs::remove_file(&temp_path);
        return Err(e)
            .with_context(|| format!("Failed to rename temp file to: {}", path.display()));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::default_profiles;
    use crate::parser::parse_keymap;
    use tempfile::TempDir;

    fn keymap_source(layers: &[(&str, &str)]) -> String {
        let mut source = String::from("/ {\n    keymap {\n        compatible = \"zmk,keymap\";\n");
        for (name, binding) in layers {
            let bindings = vec![*binding; 38].join(" ");
            source.push_str(&format!("        {name}_layer {{ bindings = <{bindings}>; }};\n"));
        }
        source.push_str("    };\n};\n");
        source
    }

    fn render(source: &str) -> Vec<RenderedLayer> {
        let labels = LabelTables::new();
        let template = SvgTemplate::embedded().unwrap();
        let profiles = default_profiles();
        let ctx = ConversionContext {
            labels: &labels,
            template: &template,
            profiles: &profiles,
            expected_layers: 6,
        };
        render_keymap(ctx, &parse_keymap(source))
    }

    #[test]
    fn test_render_keymap_names_layers_from_profiles() {
        let source = keymap_source(&[("base", "&kp A"), ("nav", "&trans")]);
        let rendered = render(&source);

        assert_eq!(rendered.len(), 2);
        assert_eq!(rendered[0].file_stem, "base");
        assert_eq!(rendered[1].file_stem, "nav");
        assert!(rendered[1].document.contains(">Nav</text>"));
    }

    #[test]
    fn test_extra_layers_get_fallback_names() {
        let layers: Vec<(&str, &str)> = (0..8).map(|_| ("x", "&kp A")).collect();
        let rendered = render(&keymap_source(&layers));

        assert_eq!(rendered.len(), 8);
        assert_eq!(rendered[6].file_stem, "layer6");
        assert_eq!(rendered[7].file_stem, "layer7");
    }

    #[test]
    fn test_held_key_marks_layer() {
        let source = keymap_source(&[("base", "&kp A"), ("nav", "&kp B")]);
        let rendered = render(&source);

        assert!(!rendered[0].document.contains("key held"));
        assert!(rendered[1]
            .document
            .contains(r#"<text x="0" y="0" class="key tap">Nav</text>"#));
    }

    #[test]
    fn test_layer_defines_reach_parser() {
        let source = format!("#define SYM 2\n{}", keymap_source(&[("base", "&lt SYM TAB")]));
        let rendered = render(&source);

        assert!(rendered[0].document.contains(">Num</text>"));
    }

    #[test]
    fn test_render_is_idempotent() {
        let source = keymap_source(&[("base", "&hml LS(LC(LA(LGUI))) W"), ("nav", "&mmv MOVE_UP")]);
        assert_eq!(render(&source), render(&source));
    }

    #[test]
    fn test_write_layers() {
        let temp = TempDir::new().unwrap();
        let out_dir = temp.path().join("svg");
        let rendered = render(&keymap_source(&[("base", "&kp A"), ("nav", "&kp B")]));

        let report = write_layers(&rendered, &out_dir).unwrap();

        assert!(report.is_complete());
        assert_eq!(report.written.len(), 2);
        let base = fs::read_to_string(out_dir.join("base.svg")).unwrap();
        assert_eq!(base, rendered[0].document);
        assert!(!out_dir.join("base.svg.tmp").exists());
    }

    #[test]
    fn test_write_failure_does_not_block_other_layers() {
        let temp = TempDir::new().unwrap();
        let rendered = render(&keymap_source(&[("base", "&kp A"), ("nav", "&kp B")]));

        // A directory where the first file should go makes its rename fail
        fs::create_dir_all(temp.path().join("base.svg")).unwrap();

        let report = write_layers(&rendered, temp.path()).unwrap();

        assert!(!report.is_complete());
        assert_eq!(report.failed.len(), 1);
        assert_eq!(report.failed[0].0, "base");
        assert_eq!(report.written, vec![temp.path().join("nav.svg")]);
        assert!(!temp.path().join("base.svg.tmp").exists());
    }
}
