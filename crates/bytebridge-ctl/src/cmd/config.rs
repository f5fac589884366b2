//! Configuration commands.

use anyhow::{Context, Result};

use bytebridge_core::BridgeConfig;

pub fn cmd_config_show(config: &BridgeConfig) -> Result<()> {
    println!("# {}", BridgeConfig::file_path().display());
    print!("{}", config.to_toml().context("failed to render config")?);
    Ok(())
}

pub fn cmd_config_init() -> Result<()> {
    let path = BridgeConfig::write_default_if_missing().context("failed to write default config")?;
    println!("Config file: {}", path.display());
    Ok(())
}
