//! Configuration management CLI commands.

use crate::cli::common::{CliError, CliResult};
use crate::config::Config;
use clap::{Args, Subcommand};
use serde::Serialize;

/// Configuration management commands
#[derive(Args, Debug)]
pub struct ConfigArgs {
    #[command(subcommand)]
    command: ConfigCommand,
}

#[derive(Subcommand, Debug)]
enum ConfigCommand {
    /// Display current configuration
    Show(ConfigShowArgs),
    /// Set configuration values
    Set(ConfigSetArgs),
    /// Print the configuration file path
    Path,
}

/// Display current configuration
#[derive(Args, Debug)]
pub struct ConfigShowArgs {
    /// Output as JSON
    #[arg(long)]
    json: bool,
}

/// Set configuration values
#[derive(Args, Debug)]
pub struct ConfigSetArgs {
    /// Wrap Left from the first character of a class to the last
    #[arg(long, value_name = "BOOL")]
    wrap_left: Option<bool>,

    /// Warn about characters whose class is not declared for their game
    #[arg(long, value_name = "BOOL")]
    warn_unordered: Option<bool>,
}

/// JSON-serializable configuration for output
#[derive(Serialize, Debug)]
struct ConfigOutput<'a> {
    path: Option<String>,
    #[serde(flatten)]
    config: &'a Config,
}

impl ConfigArgs {
    /// Execute config subcommand
    pub fn execute(&self) -> CliResult<()> {
        match &self.command {
            ConfigCommand::Show(args) => args.execute(),
            ConfigCommand::Set(args) => args.execute(),
            ConfigCommand::Path => execute_path(),
        }
    }
}

impl ConfigShowArgs {
    /// Execute show command
    pub fn execute(&self) -> CliResult<()> {
        let config = Config::load()
            .map_err(|e| CliError::validation(format!("Failed to load configuration: {e:#}")))?;

        if self.json {
            output_json(&config)?;
        } else {
            output_human_readable(&config);
        }

        Ok(())
    }
}

impl ConfigSetArgs {
    /// Execute set command
    pub fn execute(&self) -> CliResult<()> {
        if self.wrap_left.is_none() && self.warn_unordered.is_none() {
            return Err(CliError::validation(
                "At least one configuration option must be specified: --wrap-left or --warn-unordered",
            ));
        }

        let mut config = Config::load()
            .map_err(|e| CliError::validation(format!("Failed to load configuration: {e:#}")))?;
        self.apply(&mut config);

        config
            .save()
            .map_err(|e| CliError::io(format!("Failed to save configuration: {e:#}")))?;

        println!("Configuration updated successfully.");

        Ok(())
    }

    fn apply(&self, config: &mut Config) {
        if let Some(wrap_left) = self.wrap_left {
            config.navigation.wrap_left = wrap_left;
        }
        if let Some(warn_unordered) = self.warn_unordered {
            config.grouping.warn_unordered = warn_unordered;
        }
    }
}

fn execute_path() -> CliResult<()> {
    let path = Config::config_file_path()
        .map_err(|e| CliError::io(format!("Failed to resolve config path: {e:#}")))?;
    println!("{}", path.display());
    Ok(())
}

/// Output configuration in JSON format
fn output_json(config: &Config) -> CliResult<()> {
    let output = ConfigOutput {
        path: Config::config_file_path()
            .ok()
            .map(|p| p.to_string_lossy().to_string()),
        config,
    };

    let json = serde_json::to_string_pretty(&output)
        .map_err(|e| CliError::io(format!("Failed to serialize configuration to JSON: {e}")))?;

    println!("{json}");
    Ok(())
}

/// Output configuration in human-readable format
fn output_human_readable(config: &Config) {
    println!("spritedye Configuration");
    println!("=======================");
    println!();

    match Config::config_file_path() {
        Ok(path) if path.exists() => println!("File: {}", path.display()),
        Ok(path) => println!("File: {} (not created, using defaults)", path.display()),
        Err(_) => println!("File: (unavailable)"),
    }
    println!();

    println!("Navigation:");
    println!("  Wrap Left: {}", config.navigation.wrap_left);
    println!();

    println!("Grouping:");
    println!("  Warn Unordered: {}", config.grouping.warn_unordered);
    println!();
}
