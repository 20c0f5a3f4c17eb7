use super::ui;
use anyhow::Result;
use discovery_config::Config;

/// Loading already validated the config; show what ended up effective
pub fn handle_config(config: &Config) -> Result<()> {
    ui::print_header("Effective configuration");
    println!("{}", toml::to_string_pretty(config)?);
    Ok(())
}
