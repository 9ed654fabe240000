//! CLI command handlers for keymap-svg.
//!
//! Each subcommand is an `Args` struct with an `execute` method returning
//! [`CliResult`](common::CliResult).

pub mod common;
pub mod config;
pub mod erase;
pub mod inspect;
pub mod render;

// Re-export types used by main.rs and tests
pub use common::{CliError, CliResult, ExitCode};
pub use config::ConfigArgs;
pub use erase::EraseArgs;
pub use inspect::InspectArgs;
pub use render::RenderArgs;
