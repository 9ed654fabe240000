//! Parsing of ZMK keymap sources.
//!
//! This module finds layer nodes in `.keymap` files, splits their binding
//! lists, and resolves each binding into short display labels.

pub mod binding;
pub mod keymap;
pub mod tokenizer;

// Re-export commonly used types and functions
pub use binding::{tokenize_binding, Behavior, BindingParser, HYPER_LABEL, TRANSPARENT_GLYPH};
pub use keymap::{parse_keymap, parse_keymap_file, Keymap, RawLayer};
pub use tokenizer::{split_units, split_words};
