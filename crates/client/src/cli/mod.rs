//! CLI command definitions.

pub mod health;
pub mod items;

use clap::{Parser, Subcommand, ValueEnum};

/// CLI client for the lostfound API.
#[derive(Debug, Parser)]
#[command(name = "lostfound-client")]
#[command(about = "CLI client for the lostfound API", long_about = None)]
pub struct Cli {
    /// Server base URL.
    #[arg(long, env = "LOSTFOUND_URL", default_value = "http://localhost:5000")]
    pub base_url: String,

    /// Output format.
    #[arg(long, default_value = "pretty")]
    pub format: OutputFormat,

    /// Suppress non-essential output.
    #[arg(long)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Output format options.
#[derive(Debug, Clone, Copy, Default, ValueEnum)]
pub enum OutputFormat {
    /// Raw JSON output.
    Json,
    /// Human-readable output.
    #[default]
    Pretty,
}

/// Available commands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Lost-and-found item management.
    Items(items::ItemsCommand),
    /// Server health checks.
    Health(health::HealthCommand),
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_is_well_formed() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_search() {
        let cli = Cli::parse_from(["lostfound-client", "--format", "json", "items", "search", "phone"]);

        assert!(matches!(cli.format, OutputFormat::Json));
        match cli.command {
            Commands::Items(cmd) => {
                assert!(matches!(cmd.action, items::ItemsAction::Search { ref keyword } if keyword == "phone"))
            }
            _ => panic!("Expected items command"),
        }
    }
}
