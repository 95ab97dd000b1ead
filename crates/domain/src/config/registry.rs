use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct RegistryConfig {
    /// JSON (`.json`) or TOML service snapshot. Without it the registry is
    /// never bound and every query passes through.
    #[serde(default)]
    pub services_file: Option<String>,

    /// Seconds between snapshot reloads; 0 disables reloading.
    #[serde(default = "default_reload_interval_secs")]
    pub reload_interval_secs: u64,
}

impl Default for RegistryConfig {
    fn default() -> Self {
        Self {
            services_file: None,
            reload_interval_secs: default_reload_interval_secs(),
        }
    }
}

fn default_reload_interval_secs() -> u64 {
    30
}
