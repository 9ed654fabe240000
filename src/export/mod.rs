//! Export of keymap layers as vector graphics.
//!
//! This module renders parsed layers onto the physical key layout, producing
//! one standalone SVG document per layer.

pub mod svg_renderer;

pub use svg_renderer::{escape_xml, SvgRenderer, SvgTemplate};
