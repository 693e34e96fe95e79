mod cli;
mod commands;
mod output;

use anyhow::Result;
use cask_config::Config;
use clap::Parser;

fn main() -> Result<()> {
    // Logs go to stderr so piped csv/json output stays clean
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = cli::Cli::parse();

    let config_path = cli.config.unwrap_or_else(Config::config_path);
    let config = Config::load_from(&config_path)?;

    match cli.command {
        cli::Commands::Search {
            filters,
            sort,
            format,
            limit,
        } => commands::search::handle(filters.into(), sort, format, limit, &config),
        cli::Commands::Query { filters } => commands::query::handle(filters.into()),
        cli::Commands::Config(cmd) => commands::config::handle(cmd, &config_path, &config),
    }
}
