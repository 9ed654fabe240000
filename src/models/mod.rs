//! Data models for bindings, key placement and layer rendering settings.
//!
//! Models are independent of parsing and rendering logic.

pub mod binding;
pub mod key_position;
pub mod layer_profile;

// Re-export all model types
pub use binding::{Binding, ParsedBinding};
pub use key_position::{KeyPosition, TOTEM_KEY_POSITIONS};
pub use layer_profile::{default_profiles, validate_profiles, LayerProfile};
