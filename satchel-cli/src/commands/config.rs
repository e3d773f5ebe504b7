use anyhow::Result;
use owo_colors::OwoColorize;

use crate::config::SatchelConfig;

/// Print the config file location.
pub fn run_path() -> Result<()> {
    println!("{}", SatchelConfig::config_path()?.display());
    Ok(())
}

/// Set a config value and save it.
pub fn run_set(key: &str, value: &str) -> Result<()> {
    let mut config = SatchelConfig::load()?;

    match key {
        "from" => config.from = Some(value.to_string()),
        "organizer-name" | "organizer_name" => config.organizer_name = Some(value.to_string()),
        other => anyhow::bail!("Unknown config key \"{other}\", expected from or organizer-name"),
    }

    config.save()?;
    println!("{}", format!("Set {key} = {value}").green());
    Ok(())
}
