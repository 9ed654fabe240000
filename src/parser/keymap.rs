//! Layer extraction from ZMK `.keymap` devicetree source.
//!
//! Only the subset of devicetree needed to find layer nodes is understood:
//! nodes named `<something>_layer { ... }` and their top-level
//! `bindings = < ... >;` property. Block boundaries are found by brace depth,
//! so child nodes inside a layer do not cut the scan short.

use crate::parser::tokenizer::split_units;
use anyhow::{Context, Result};
use regex::Regex;
use serde::Serialize;
use std::collections::HashMap;
use std::path::Path;

/// One layer node as found in the keymap source.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RawLayer {
    /// Node name (e.g., "nav_layer")
    pub node_name: String,
    /// Value of `display-name`, if the node sets one
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    /// Text between `<` and `>` of the `bindings` property
    pub raw_bindings: String,
}

impl RawLayer {
    /// The layer's bindings, one per key position, without leading `&`.
    #[must_use]
    pub fn bindings(&self) -> Vec<&str> {
        split_units(&self.raw_bindings, '&')
    }
}

/// Layers and layer aliases found in a keymap.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Keymap {
    /// Layer nodes in source order
    pub layers: Vec<RawLayer>,
    /// `#define NAME <index>` aliases
    pub layer_defines: HashMap<String, usize>,
}

/// Reads and parses a keymap file.
pub fn parse_keymap_file(path: &Path) -> Result<Keymap> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read keymap file: {}", path.display()))?;

    Ok(parse_keymap(&content))
}

/// Parses keymap source text. Never fails; a keymap without layer nodes
/// simply yields no layers.
#[must_use]
pub fn parse_keymap(content: &str) -> Keymap {
    let source = strip_comments(content);

    Keymap {
        layers: extract_layers(&source),
        layer_defines: parse_layer_defines(&source),
    }
}

/// Finds every `*_layer { ... }` node that carries a `bindings` property.
#[must_use]
pub fn extract_layers(source: &str) -> Vec<RawLayer> {
    let node_re = Regex::new(r"\b(\w+_layer)\s*\{").expect("valid layer node regex");
    let mut layers = Vec::new();
    let mut search_from = 0;

    while let Some(cap) = node_re.captures(&source[search_from..]) {
        let (Some(whole), Some(name)) = (cap.get(0), cap.get(1)) else {
            break;
        };
        let open = search_from + whole.end() - 1;
        let close = matching_brace(source, open).unwrap_or(source.len());
        let body = &source[open + 1..close];

        let top_level = top_level_text(body);
        if let Some(raw_bindings) = property_value(&top_level, "bindings", '<', '>') {
            layers.push(RawLayer {
                node_name: name.as_str().to_string(),
                display_name: property_value(&top_level, "display-name", '"', '"'),
                raw_bindings,
            });
        }

        search_from = (close + 1).min(source.len());
    }

    layers
}

/// Collects `#define NAME <number>` lines.
#[must_use]
pub fn parse_layer_defines(source: &str) -> HashMap<String, usize> {
    let define_re = Regex::new(r"(?m)^\s*#define\s+(\w+)\s+(\d+)\s*$").expect("valid define regex");

    define_re
        .captures_iter(source)
        .filter_map(|cap| Some((cap[1].to_string(), cap[2].parse().ok()?)))
        .collect()
}

/// Byte offset of the `}` closing the `{` at `open`. Braces inside
/// quoted strings are ignored.
fn matching_brace(source: &str, open: usize) -> Option<usize> {
    let mut depth: usize = 0;
    let mut in_string = false;
    for (idx, ch) in source[open..].char_indices() {
        match ch {
            '"' => in_string = !in_string,
            _ if in_string => {}
            '{' => depth += 1,
            '}' => {
                depth = depth.saturating_sub(1);
                if depth == 0 {
                    return Some(open + idx);
                }
            }
            _ => {}
        }
    }
    None
}

/// `body` with every nested `{ ... }` block removed. Quoted strings are
/// kept intact, braces included.
fn top_level_text(body: &str) -> String {
    let mut text = String::with_capacity(body.len());
    let mut depth: usize = 0;
    let mut in_string = false;
    for ch in body.chars() {
        match ch {
            '"' => in_string = !in_string,
            '{' if !in_string => {
                depth += 1;
                continue;
            }
            '}' if !in_string => {
                depth = depth.saturating_sub(1);
                continue;
            }
            _ => {}
        }
        if depth == 0 {
            text.push(ch);
        }
    }
    text
}

/// Value of `name = <open>value<close>` at the start of a statement.
fn property_value(text: &str, name: &str, open: char, close: char) -> Option<String> {
    let pattern = format!(
        r"(?:^|[;\s]){}\s*=\s*{}([^{}]*){}",
        regex::escape(name),
        regex::escape(&open.to_string()),
        regex::escape(&close.to_string()),
        regex::escape(&close.to_string()),
    );
    let re = Regex::new(&pattern).ok()?;
    re.captures(text).map(|cap| cap[1].trim().to_string())
}

/// Removes `//` line comments and `/* */` block comments.
fn strip_comments(content: &str) -> String {
    let mut out = String::with_capacity(content.len());
    let mut chars = content.chars().peekable();
    let mut in_string = false;

    while let Some(ch) = chars.next() {
        if in_string {
            out.push(ch);
            if ch == '"' {
                in_string = false;
            }
            continue;
        }

        match (ch, chars.peek()) {
            ('"', _) => {
                in_string = true;
                out.push(ch);
            }
            ('/', Some('/')) => {
                for next in chars.by_ref() {
                    if next == '\n' {
                        out.push('\n');
                        break;
                    }
                }
            }
            ('/', Some('*')) => {
                chars.next();
                let mut prev = '\0';
                for next in chars.by_ref() {
                    if next == '\n' {
                        out.push('\n');
                    }
                    if prev == '*' && next == '/' {
                        break;
                    }
                    prev = next;
                }
                out.push(' ');
            }
            _ => out.push(ch),
        }
    }

    out
}
