//! spritedye library
//!
//! Color-space conversion (hex, RGB, HSV, hue wheel geometry) and grouped
//! roster navigation for a character sprite color editor.

// Module declarations
pub mod cli;
pub mod config;
pub mod models;
pub mod services;
