use kube_extdns_domain::{DomainError, Service};
use serde::Deserialize;
use std::path::Path;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ServiceFileFormat {
    /// A JSON array of services.
    Json,
    /// A TOML document with a `[[services]]` array.
    Toml,
}

impl ServiceFileFormat {
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("json") => Self::Json,
            _ => Self::Toml,
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct TomlServiceFile {
    #[serde(default)]
    services: Vec<Service>,
}

pub fn parse_services(contents: &str, format: ServiceFileFormat) -> Result<Vec<Service>, String> {
    match format {
        ServiceFileFormat::Json => serde_json::from_str(contents).map_err(|e| e.to_string()),
        ServiceFileFormat::Toml => toml::from_str::<TomlServiceFile>(contents)
            .map(|file| file.services)
            .map_err(|e| e.to_string()),
    }
}

pub async fn read_services(path: &Path) -> Result<Vec<Service>, DomainError> {
    let load_error = |reason: String| DomainError::RegistryLoad {
        source_path: path.display().to_string(),
        reason,
    };

    let contents = tokio::fs::read_to_string(path)
        .await
        .map_err(|e| load_error(e.to_string()))?;

    parse_services(&contents, ServiceFileFormat::from_path(path)).map_err(load_error)
}
