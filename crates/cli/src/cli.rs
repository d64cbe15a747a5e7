//! Command-line interface definition using clap.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use stockledger_infra::DEFAULT_STORE_FILE;
use stockledger_inventory::DEFAULT_LOW_STOCK_THRESHOLD;
use stockledger_observability::LogFormat;

/// Stockledger - track named stock quantities in a JSON file
#[derive(Parser, Debug)]
#[command(name = "stockledger")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Path to the inventory file
    #[arg(short, long, env = "STOCKLEDGER_FILE", default_value = DEFAULT_STORE_FILE)]
    pub file: PathBuf,

    /// Log output format (pretty, json)
    #[arg(long, env = "STOCKLEDGER_LOG_FORMAT", default_value = "pretty")]
    pub log_format: LogFormat,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Run the sample session (the default when no command is given)
    Demo,

    /// Add stock for an item
    Add {
        item: String,
        #[arg(allow_negative_numbers = true)]
        qty: i64,
    },

    /// Remove stock for an item
    Remove {
        item: String,
        #[arg(allow_negative_numbers = true)]
        qty: i64,
    },

    /// Show the quantity on hand for an item
    Qty { item: String },

    /// List items below a threshold
    Low {
        #[arg(short, long, allow_negative_numbers = true, default_value_t = DEFAULT_LOW_STOCK_THRESHOLD as i64)]
        threshold: i64,
    },

    /// Print all items and quantities
    Report,
}

impl Cli {
    /// Default tracing level for the verbosity flag; `RUST_LOG` overrides it.
    pub fn log_level(&self) -> &'static str {
        match self.verbose {
            0 => "info",
            1 => "debug",
            _ => "trace",
        }
    }

    pub fn command(&self) -> Commands {
        self.command.clone().unwrap_or(Commands::Demo)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_demo_and_inventory_json() {
        let cli = Cli::parse_from(["stockledger"]);
        assert_eq!(cli.command(), Commands::Demo);
        assert_eq!(cli.file, PathBuf::from("inventory.json"));
        assert_eq!(cli.log_format, LogFormat::Pretty);
        assert_eq!(cli.log_level(), "info");
    }

    #[test]
    fn negative_quantities_reach_validation() {
        let cli = Cli::parse_from(["stockledger", "add", "banana", "-2"]);
        assert_eq!(
            cli.command(),
            Commands::Add {
                item: "banana".to_string(),
                qty: -2
            }
        );
    }

    #[test]
    fn non_integer_quantity_is_rejected_by_the_parser() {
        assert!(Cli::try_parse_from(["stockledger", "add", "banana", "ten"]).is_err());
    }

    #[test]
    fn flags_parse() {
        let cli = Cli::parse_from([
            "stockledger",
            "-vv",
            "--file",
            "/tmp/stock.json",
            "--log-format",
            "json",
            "low",
            "--threshold",
            "3",
        ]);
        assert_eq!(cli.log_level(), "trace");
        assert_eq!(cli.log_format, LogFormat::Json);
        assert_eq!(cli.command(), Commands::Low { threshold: 3 });
    }
}
