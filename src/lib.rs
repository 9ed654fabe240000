//! keymap-svg library
//!
//! This library turns ZMK `.keymap` source into per-layer SVG diagrams:
//! layer extraction, binding tokenizing and labelling, and rendering onto
//! the Totem key positions. It also builds UF2 images that erase flash
//! regions of the keyboard's controller.

// Module declarations
pub mod cli;
pub mod config;
pub mod constants;
pub mod export;
pub mod firmware;
pub mod labels;
pub mod models;
pub mod parser;
pub mod services;
