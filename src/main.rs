//! spritedye - color conversion and roster navigation from the command line
//!
//! Every subcommand prints human-readable output by default and a single
//! JSON document with `--json`. Errors go to stderr and map to exit codes:
//! 1 validation, 2 I/O, 3 no navigation target.

use clap::{Parser, Subcommand};
use std::io::IsTerminal;
use spritedye::cli::{ColorArgs, ConfigArgs, RosterArgs};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Environment variable holding the log filter directive.
const LOG_ENV: &str = "SPRITEDYE_LOG";

/// spritedye - sprite color editor tooling
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable debug logging on stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Convert and normalize color values
    Color(ColorArgs),
    /// Group and navigate character rosters
    Roster(RosterArgs),
    /// Manage configuration
    Config(ConfigArgs),
}

fn main() {
    let cli = Cli::parse();

    let filter = if cli.verbose { "debug" } else { "warn" };
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| filter.into()))
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_ansi(std::io::stderr().is_terminal()),
        )
        .init();

    let result = match &cli.command {
        Commands::Color(args) => args.execute(),
        Commands::Roster(args) => args.execute(),
        Commands::Config(args) => args.execute(),
    };

    if let Err(err) = result {
        eprintln!("Error: {err}");
        std::process::exit(err.exit_code().code());
    }
}
