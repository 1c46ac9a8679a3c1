//! CLI command handlers for spritedye.
//!
//! Headless, scriptable access to color conversion and roster navigation.

pub mod color;
pub mod common;
pub mod config;
pub mod roster;

// Re-export types used by main.rs and tests
pub use color::ColorArgs;
pub use common::{CliError, CliResult, ExitCode};
pub use config::ConfigArgs;
pub use roster::RosterArgs;
