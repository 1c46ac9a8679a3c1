//! Data models for colors, characters and their color slots.
//!
//! This module contains all the core data structures used throughout the application.
//! Models are designed to be independent of UI and business logic.

pub mod character;
pub mod color_category;
pub mod error;
pub mod hex;
pub mod hsv;
pub mod hue;
pub mod rgb;

// Re-export all model types
pub use character::{Character, ClassOrderings, GameId, RosterData};
pub use color_category::ColorCategory;
pub use error::ColorError;
pub use hex::HexColor;
pub use hsv::HsvColor;
pub use hue::{hue_from_offset, wrap_hue, HueWheel};
pub use rgb::RgbColor;
