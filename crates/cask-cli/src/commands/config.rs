use std::path::Path;

use anyhow::Result;
use cask_config::Config;

use crate::cli::ConfigCommands;

pub fn handle(cmd: ConfigCommands, path: &Path, config: &Config) -> Result<()> {
    match cmd {
        ConfigCommands::Path => println!("{}", path.display()),
        ConfigCommands::Show => print!("{}", toml::to_string_pretty(config)?),
    }
    Ok(())
}
