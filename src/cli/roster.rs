//! Roster commands: grouping and keyboard navigation.
//!
//! Both commands read a roster JSON file (`characters` + `classOrderings`)
//! and work on the grouped index built from it.

use crate::cli::common::{print_json, CliError, CliResult};
use crate::config::Config;
use crate::models::{Character, GameId};
use crate::services::{Direction, GroupedNavigator, NavigationConfig, RosterService};
use clap::{Args, Subcommand};
use serde::Serialize;
use std::path::PathBuf;

/// Group and navigate character rosters
#[derive(Debug, Clone, Args)]
pub struct RosterArgs {
    /// Roster subcommand
    #[command(subcommand)]
    pub command: RosterCommand,
}

/// Roster subcommands
#[derive(Debug, Clone, Subcommand)]
pub enum RosterCommand {
    /// Print characters grouped by game and class
    Group(GroupArgs),
    /// Find the character selected after an arrow-key press
    Navigate(NavigateArgs),
}

/// Print characters grouped by game and class
#[derive(Debug, Clone, Args)]
pub struct GroupArgs {
    /// Path to roster JSON file
    #[arg(short, long, value_name = "FILE")]
    pub data: PathBuf,

    /// Output results as JSON
    #[arg(long)]
    pub json: bool,

    /// Fail if any character's class is missing from its game's ordering
    #[arg(long)]
    pub strict: bool,
}

/// Find the character selected after an arrow-key press
#[derive(Debug, Clone, Args)]
pub struct NavigateArgs {
    /// Path to roster JSON file
    #[arg(short, long, value_name = "FILE")]
    pub data: PathBuf,

    /// Id of the currently selected character
    #[arg(long, value_name = "ID")]
    pub from: String,

    /// Direction to move (left, right, up, down)
    #[arg(long, value_name = "DIR")]
    pub direction: Direction,

    /// Wrap Left at the start of a class (overrides config)
    #[arg(long, value_name = "BOOL")]
    pub wrap_left: Option<bool>,

    /// Output results as JSON
    #[arg(long)]
    pub json: bool,
}

// JSON response types
#[derive(Debug, Serialize)]
struct ExcludedItem {
    id: String,
    game: GameId,
    class: String,
}

#[derive(Debug, Serialize)]
struct GroupResponse<'a> {
    groups: &'a crate::services::GroupedIndex,
    count: usize,
    excluded: Vec<ExcludedItem>,
}

#[derive(Debug, Serialize)]
struct NavigateResponse<'a> {
    from: &'a str,
    direction: Direction,
    next: Option<&'a Character>,
}

impl RosterArgs {
    /// Execute the roster command
    pub fn execute(&self) -> CliResult<()> {
        match &self.command {
            RosterCommand::Group(args) => args.execute(),
            RosterCommand::Navigate(args) => args.execute(),
        }
    }
}

impl GroupArgs {
    /// Execute the group command
    pub fn execute(&self) -> CliResult<()> {
        let config = load_config()?;
        let (_, report) = RosterService::load_grouped(&self.data)
            .map_err(|e| CliError::io(format!("Failed to load roster: {e:#}")))?;

        if config.grouping.warn_unordered || self.strict {
            for c in &report.excluded {
                eprintln!(
                    "Warning: character '{}' has class '{}' which is not declared for {}; excluded",
                    c.id, c.class, c.game
                );
            }
        }

        if self.strict && !report.excluded.is_empty() {
            return Err(CliError::validation(format!(
                "{} character(s) excluded from the grouped index",
                report.excluded.len()
            )));
        }

        if self.json {
            let excluded = report
                .excluded
                .iter()
                .map(|c| ExcludedItem {
                    id: c.id.clone(),
                    game: c.game,
                    class: c.class.clone(),
                })
                .collect();
            print_json(&GroupResponse {
                groups: &report.index,
                count: report.index.character_count(),
                excluded,
            })?;
            return Ok(());
        }

        if report.index.games().is_empty() {
            println!("No games with class orderings.");
            return Ok(());
        }

        for (game, classes) in report.index.games() {
            println!("{game}");
            for (class, bucket) in classes {
                let names: Vec<&str> = bucket.iter().map(Character::display_name).collect();
                if names.is_empty() {
                    println!("  {class:<20} (empty)");
                } else {
                    println!("  {class:<20} {}", names.join(", "));
                }
            }
        }

        Ok(())
    }
}

impl NavigateArgs {
    /// Execute the navigate command
    pub fn execute(&self) -> CliResult<()> {
        let mut navigation: NavigationConfig = load_config()?.navigation;
        if let Some(wrap_left) = self.wrap_left {
            navigation.wrap_left = wrap_left;
        }

        let (roster, report) = RosterService::load_grouped(&self.data)
            .map_err(|e| CliError::io(format!("Failed to load roster: {e:#}")))?;

        let current = roster
            .characters
            .iter()
            .find(|c| c.id == self.from)
            .ok_or_else(|| CliError::validation(format!("Character '{}' not found", self.from)))?;

        let mut navigator = GroupedNavigator::with_config(navigation);
        let next = navigator.find_next(&report.index, current, self.direction);

        if self.json {
            print_json(&NavigateResponse {
                from: &self.from,
                direction: self.direction,
                next,
            })?;
        } else if let Some(next) = next {
            println!("{}", next.id);
        }

        match next {
            Some(_) => Ok(()),
            None => Err(CliError::no_move(format!(
                "No character {} of '{}'",
                describe(self.direction),
                self.from
            ))),
        }
    }
}

fn load_config() -> CliResult<Config> {
    Config::load().map_err(|e| CliError::validation(format!("Failed to load configuration: {e:#}")))
}

fn describe(direction: Direction) -> &'static str {
    match direction {
        Direction::Left => "to the left",
        Direction::Right => "to the right",
        Direction::Up => "above",
        Direction::Down => "below",
    }
}
