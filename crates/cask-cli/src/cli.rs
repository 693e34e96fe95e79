use std::path::PathBuf;

use cask_config::OutputFormat;
use cask_core::{FilterForm, SortKey};
use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
#[command(name = "cask")]
#[command(about = "Search the product catalog by alcohol and price", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Config file to use instead of the default location
    #[arg(long, global = true, env = "CASK_CONFIG")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Fetch catalog items matching the filters
    Search {
        #[command(flatten)]
        filters: FilterArgs,

        /// Sort key: name, name-ci, price, alcohol, volume (default from config)
        #[arg(long)]
        sort: Option<SortKey>,

        /// Output format: table, csv, json (default from config)
        #[arg(long)]
        format: Option<OutputFormat>,

        /// Show at most this many items
        #[arg(long)]
        limit: Option<usize>,
    },

    /// Print the query string the filters produce
    Query {
        #[command(flatten)]
        filters: FilterArgs,
    },

    /// Inspect configuration
    #[command(subcommand)]
    Config(ConfigCommands),
}

#[derive(Subcommand)]
pub enum ConfigCommands {
    /// Print the config file location
    Path,

    /// Print the effective configuration
    Show,
}

/// The four search form fields. Values are passed through as typed.
#[derive(Args, Debug, Clone, Default)]
pub struct FilterArgs {
    /// Minimum alcohol, in percent
    #[arg(long)]
    pub min_alcohol: Option<String>,

    /// Maximum alcohol, in percent
    #[arg(long)]
    pub max_alcohol: Option<String>,

    /// Minimum price
    #[arg(long)]
    pub min_price: Option<String>,

    /// Maximum price
    #[arg(long)]
    pub max_price: Option<String>,
}

impl From<FilterArgs> for FilterForm {
    fn from(args: FilterArgs) -> Self {
        FilterForm {
            min_alcohol: args.min_alcohol,
            max_alcohol: args.max_alcohol,
            min_price: args.min_price,
            max_price: args.max_price,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_search() {
        let cli = Cli::try_parse_from([
            "cask",
            "search",
            "--min-alcohol",
            "4.0",
            "--max-price",
            "200",
            "--sort",
            "name-ci",
            "--format",
            "csv",
        ])
        .unwrap();

        match cli.command {
            Commands::Search {
                filters,
                sort,
                format,
                limit,
            } => {
                let form = FilterForm::from(filters);
                assert_eq!(form.min_alcohol.as_deref(), Some("4.0"));
                assert_eq!(form.max_price.as_deref(), Some("200"));
                assert_eq!(form.min_price, None);
                assert_eq!(sort, Some(SortKey::NameCi));
                assert_eq!(format, Some(OutputFormat::Csv));
                assert_eq!(limit, None);
            }
            _ => panic!("expected search command"),
        }
    }

    #[test]
    fn test_unknown_sort_key_is_rejected() {
        assert!(Cli::try_parse_from(["cask", "search", "--sort", "colour"]).is_err());
    }

    #[test]
    fn test_unknown_format_is_rejected() {
        assert!(Cli::try_parse_from(["cask", "search", "--format", "yaml"]).is_err());
    }

    #[test]
    fn test_global_config_flag() {
        let cli = Cli::try_parse_from(["cask", "config", "path", "--config", "/tmp/c.toml"])
            .unwrap();
        assert_eq!(cli.config, Some(PathBuf::from("/tmp/c.toml")));
    }
}
