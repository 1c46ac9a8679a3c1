//! Service layer for business logic.
//!
//! This module contains services that encapsulate grouping and navigation
//! logic and coordinate between the data models and the CLI.

pub mod grouping;
pub mod navigation;
pub mod roster;

// Re-export commonly used types and functions
pub use grouping::{group_characters, group_characters_with_report, GroupedIndex, GroupingReport};
pub use navigation::{find_next, Direction, GroupedNavigator, NavigationConfig};
pub use roster::RosterService;
