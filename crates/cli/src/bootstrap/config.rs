use anyhow::Context;
use kube_extdns_domain::{CliOverrides, Config};
use tracing::info;

pub fn load_config(path: Option<&str>, overrides: CliOverrides) -> anyhow::Result<Config> {
    let config = Config::load(path, overrides).context("Failed to load configuration")?;
    config.validate().context("Invalid configuration")?;

    if let Some(path) = path.map(str::to_string).or_else(Config::get_config_path) {
        info!(path = %path, "Configuration loaded");
    } else {
        info!("No configuration file found, using defaults");
    }

    Ok(config)
}
