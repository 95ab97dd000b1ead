use serde::{Deserialize, Serialize};
use std::net::SocketAddr;

use super::errors::ConfigError;
use super::extname::ExternalNameConfig;
use super::logging::LoggingConfig;
use super::registry::RegistryConfig;
use super::server::ServerConfig;
use super::upstream::UpstreamConfig;
use crate::ZoneSet;

const LOCAL_CONFIG_PATH: &str = "kube-extdns.toml";
const SYSTEM_CONFIG_PATH: &str = "/etc/kube-extdns/config.toml";

/// Main configuration structure for kube-extdns
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Listener configuration (port, bind address, server block origins)
    #[serde(default)]
    pub server: ServerConfig,

    /// External-name resolver configuration
    #[serde(default)]
    pub extname: ExternalNameConfig,

    /// Service registry source
    #[serde(default)]
    pub registry: RegistryConfig,

    /// Forwarder behind the resolver
    #[serde(default)]
    pub upstream: UpstreamConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Config {
    /// Load configuration from file or use defaults
    ///
    /// Priority order:
    /// 1. Explicitly provided path
    /// 2. kube-extdns.toml in current directory
    /// 3. /etc/kube-extdns/config.toml
    /// 4. Default configuration
    pub fn load(path: Option<&str>, cli_overrides: CliOverrides) -> Result<Self, ConfigError> {
        let mut config = if let Some(path) = path {
            Self::from_file(path)?
        } else if let Some(path) = Self::get_config_path() {
            Self::from_file(&path)?
        } else {
            Self::default()
        };

        config.apply_cli_overrides(cli_overrides);
        Ok(config)
    }

    /// Parse configuration from TOML text
    pub fn from_toml(contents: &str) -> Result<Self, ConfigError> {
        toml::from_str(contents).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    fn from_file(path: &str) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::FileRead(path.to_string(), e.to_string()))?;
        Self::from_toml(&contents)
    }

    fn apply_cli_overrides(&mut self, overrides: CliOverrides) {
        if let Some(port) = overrides.dns_port {
            self.server.dns_port = port;
        }
        if let Some(bind) = overrides.bind_address {
            self.server.bind_address = bind;
        }
        if let Some(file) = overrides.services_file {
            self.registry.services_file = Some(file);
        }
        if let Some(level) = overrides.log_level {
            self.logging.level = level;
        }
    }

    /// Zones the resolver answers for: `[extname].zones`, or the server
    /// block origins when none are listed.
    pub fn zone_set(&self) -> Result<ZoneSet, ConfigError> {
        let zones = if self.extname.zones.is_empty() {
            &self.server.origins
        } else {
            &self.extname.zones
        };

        ZoneSet::new(zones).map_err(|e| ConfigError::Validation(e.to_string()))
    }

    pub fn dns_bind_address(&self) -> Result<SocketAddr, ConfigError> {
        format!("{}:{}", self.server.bind_address, self.server.dns_port)
            .parse()
            .map_err(|e| {
                ConfigError::Validation(format!(
                    "Invalid bind address '{}:{}': {}",
                    self.server.bind_address, self.server.dns_port, e
                ))
            })
    }

    pub fn upstream_addresses(&self) -> Result<Vec<SocketAddr>, ConfigError> {
        self.upstream
            .servers
            .iter()
            .map(|server| {
                server.parse::<SocketAddr>().map_err(|e| {
                    ConfigError::Validation(format!("Invalid upstream '{}': {}", server, e))
                })
            })
            .collect()
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.server.dns_port == 0 {
            return Err(ConfigError::Validation("DNS port cannot be 0".to_string()));
        }

        let zones = self.zone_set()?;
        if zones.is_empty() {
            return Err(ConfigError::Validation(
                "No zones configured for extname".to_string(),
            ));
        }

        self.dns_bind_address()?;
        self.upstream_addresses()?;

        if self.upstream.timeout_ms == 0 {
            return Err(ConfigError::Validation(
                "Upstream timeout cannot be 0".to_string(),
            ));
        }

        Ok(())
    }

    /// Get the path to the configuration file being used
    pub fn get_config_path() -> Option<String> {
        if std::path::Path::new(LOCAL_CONFIG_PATH).exists() {
            Some(LOCAL_CONFIG_PATH.to_string())
        } else if std::path::Path::new(SYSTEM_CONFIG_PATH).exists() {
            Some(SYSTEM_CONFIG_PATH.to_string())
        } else {
            None
        }
    }
}

/// Command-line overrides for configuration
#[derive(Debug, Default)]
pub struct CliOverrides {
    pub dns_port: Option<u16>,
    pub bind_address: Option<String>,
    pub services_file: Option<String>,
    pub log_level: Option<String>,
}
