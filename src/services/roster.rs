//! Roster file I/O service.
//!
//! Roster files hold the payload delivered by the data source: the full
//! character list plus the per-game class orderings, as JSON.

use anyhow::{Context, Result};
use std::fs;
use std::path::Path;
use tracing::info;

use crate::models::RosterData;
use crate::services::grouping::{group_characters_with_report, GroupingReport};

/// Service for loading roster files.
pub struct RosterService;

impl RosterService {
    /// Loads a roster from a JSON file.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use std::path::Path;
    /// use spritedye::services::RosterService;
    ///
    /// let roster = RosterService::load(Path::new("roster.json"))?;
    /// # Ok::<(), anyhow::Error>(())
    /// ```
    pub fn load(path: &Path) -> Result<RosterData> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read roster file {}", path.display()))?;
        let roster = Self::parse(&content)
            .with_context(|| format!("Failed to load roster from {}", path.display()))?;

        info!(
            path = %path.display(),
            characters = roster.characters.len(),
            games = roster.class_orderings.len(),
            "loaded roster"
        );
        Ok(roster)
    }

    /// Parses roster JSON.
    pub fn parse(json: &str) -> Result<RosterData> {
        serde_json::from_str(json).context("Invalid roster JSON")
    }

    /// Loads a roster and groups it in one step.
    pub fn load_grouped(path: &Path) -> Result<(RosterData, GroupingReport)> {
        let roster = Self::load(path)?;
        let report = group_characters_with_report(&roster.characters, &roster.class_orderings);
        Ok((roster, report))
    }
}
