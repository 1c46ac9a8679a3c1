//! Shared test fixtures for E2E CLI tests.
#![allow(dead_code)] // Not every test file uses every fixture

use spritedye::models::{Character, ClassOrderings, ColorCategory, GameId, RgbColor, RosterData};
use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;
use tempfile::TempDir;

/// Path to the spritedye binary (set by cargo at compile time)
pub fn spritedye_bin() -> &'static str {
    env!("CARGO_BIN_EXE_spritedye")
}

/// Creates a Command whose config directory is isolated in `config_dir`.
pub fn isolated_command(args: &[&str], config_dir: &Path) -> Command {
    let mut cmd = Command::new(spritedye_bin());
    cmd.env("SPRITEDYE_CONFIG_DIR", config_dir);
    cmd.env_remove("SPRITEDYE_LOG");
    cmd.args(args);
    cmd
}

/// Builds class orderings from string literals.
pub fn orderings(entries: Vec<(GameId, Vec<&str>)>) -> ClassOrderings {
    entries
        .into_iter()
        .map(|(game, classes)| (game, classes.into_iter().map(String::from).collect()))
        .collect()
}

/// Roster used throughout the CLI tests.
///
/// - eo1: `landsknecht` [1, 2, 3], `survivalist` [], `medic` [7]
/// - eo2: `protector` [20, 21]
/// - eo3: no ordering, so character 30 is dropped
/// - eo1 character 9 has an undeclared class and is dropped
pub fn test_roster() -> RosterData {
    let characters = vec![
        Character::new("3", GameId::Eo1, "landsknecht"),
        Character::new("1", GameId::Eo1, "landsknecht").with_name("Ren"),
        Character::new("2", GameId::Eo1, "landsknecht"),
        Character::new("7", GameId::Eo1, "medic").with_colors(ColorCategory::pair(
            "Hair",
            RgbColor::new(200, 100, 50),
            RgbColor::new(20, 10, 5),
        )),
        Character::new("9", GameId::Eo1, "ronin"),
        Character::new("21", GameId::Eo2, "protector"),
        Character::new("20", GameId::Eo2, "protector"),
        Character::new("30", GameId::Eo3, "gladiator"),
    ];

    RosterData {
        characters,
        class_orderings: orderings(vec![
            (GameId::Eo1, vec!["landsknecht", "survivalist", "medic"]),
            (GameId::Eo2, vec!["protector"]),
        ]),
    }
}

/// Roster where every character's class is declared.
pub fn test_roster_ordered() -> RosterData {
    let mut roster = test_roster();
    roster
        .characters
        .retain(|c| c.id != "9" && c.game != GameId::Eo3);
    roster
}

/// Writes roster JSON to `path`.
pub fn write_roster_file(roster: &RosterData, path: &Path) -> std::io::Result<()> {
    let json = serde_json::to_string_pretty(roster)?;
    fs::write(path, json)
}

/// Creates a roster file in a temp directory and returns the path.
pub fn create_temp_roster_file(roster: &RosterData) -> (PathBuf, TempDir) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let roster_path = temp_dir.path().join("roster.json");
    write_roster_file(roster, &roster_path).expect("Failed to write roster file");
    (roster_path, temp_dir)
}
