//! Application-wide constants.
//!
//! This module defines constants used throughout the application,
//! including the binary name and the fixed physical layout size.

/// The binary name of the application (used in command examples, lowercase with hyphens).
pub const APP_BINARY_NAME: &str = "keymap-svg";

/// Number of physical key positions on the supported split layout.
pub const KEY_COUNT: usize = 38;

/// Number of layers a complete keymap is expected to declare.
pub const EXPECTED_LAYER_COUNT: usize = 6;
