//! Firmware support images.
//!
//! This module generates UF2 files that reset flash regions of the
//! keyboard's nRF52840 controller.

pub mod uf2;

// Re-export firmware types
pub use uf2::{build_eraser, write_eraser, FlashRegion};
