//! Service layer for business logic.
//!
//! This module contains services that coordinate parsing, rendering and
//! file output.

pub mod conversion;

// Re-export commonly used types and functions
pub use conversion::{render_keymap, write_layers, ConversionContext, RenderedLayer, WriteReport};
