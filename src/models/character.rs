//! Character records and the game origins they belong to.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;

use crate::models::ColorCategory;

/// Game a character originates from.
///
/// Variants are declared in canonical order, which is also the order games
/// appear in a grouped index and during Up/Down traversal.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum GameId {
    /// Etrian Odyssey
    Eo1,
    /// Etrian Odyssey II: Heroes of Lagaard
    Eo2,
    /// Etrian Odyssey III: The Drowned City
    Eo3,
    /// Etrian Odyssey IV: Legends of the Titan
    Eo4,
    /// Etrian Odyssey Untold: The Millennium Girl
    Eou,
    /// Etrian Odyssey Untold 2: The Fafnir Knight
    Eou2,
    /// Etrian Odyssey V: Beyond the Myth
    Eo5,
    /// Etrian Odyssey Nexus
    Eon,
}

impl GameId {
    /// Every game in canonical order.
    pub const ALL: [GameId; 8] = [
        GameId::Eo1,
        GameId::Eo2,
        GameId::Eo3,
        GameId::Eo4,
        GameId::Eou,
        GameId::Eou2,
        GameId::Eo5,
        GameId::Eon,
    ];

    /// Short identifier as used in data files (e.g. "eo1").
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            GameId::Eo1 => "eo1",
            GameId::Eo2 => "eo2",
            GameId::Eo3 => "eo3",
            GameId::Eo4 => "eo4",
            GameId::Eou => "eou",
            GameId::Eou2 => "eou2",
            GameId::Eo5 => "eo5",
            GameId::Eon => "eon",
        }
    }
}

impl fmt::Display for GameId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for GameId {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        GameId::ALL
            .into_iter()
            .find(|game| game.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| anyhow::anyhow!("Unknown game '{s}'"))
    }
}

/// Per-game declared class order.
///
/// Defines both which classes exist for grouping and the order they are
/// shown and traversed in.
pub type ClassOrderings = HashMap<GameId, Vec<String>>;

/// A selectable character.
///
/// Identity is the `id`: two values with the same `id` compare equal and
/// hash the same even if other fields differ, so a selection survives a data
/// refresh that hands out fresh instances.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Character {
    /// Stable unique identifier, also the sort key within a class
    pub id: String,
    /// Originating game
    pub game: GameId,
    /// Class name, scoped per game
    pub class: String,
    /// Display name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Editable color slots
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub colors: Vec<ColorCategory>,
}

impl Character {
    /// Creates a character with no display name and no color slots.
    pub fn new(id: impl Into<String>, game: GameId, class: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            game,
            class: class.into(),
            name: None,
            colors: Vec::new(),
        }
    }

    /// Sets the display name.
    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Appends a color category.
    #[must_use]
    pub fn with_colors(mut self, category: ColorCategory) -> Self {
        self.colors.push(category);
        self
    }

    /// Name to show in menus, falling back to the id.
    #[must_use]
    pub fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or(&self.id)
    }
}

impl PartialEq for Character {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Character {}

impl Hash for Character {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

/// Roster payload as delivered by the data source.
///
/// ```json
/// { "characters": [...], "classOrderings": { "eo1": ["landsknecht", ...] } }
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RosterData {
    /// All characters, in any order
    pub characters: Vec<Character>,
    /// Declared class order per game
    pub class_orderings: ClassOrderings,
}
