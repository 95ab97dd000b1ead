use thiserror::Error;

#[derive(Error, Debug, Clone)]
pub enum DomainError {
    #[error("Invalid domain name: {0}")]
    InvalidDomainName(String),

    #[error("Invalid DNS message: {0}")]
    InvalidDnsMessage(String),

    #[error("Failed to load service registry from {source_path}: {reason}")]
    RegistryLoad { source_path: String, reason: String },

    #[error("Transport timeout connecting to {server}")]
    TransportTimeout { server: String },

    #[error("Transport error with {server}: {reason}")]
    TransportError { server: String, reason: String },

    #[error("All upstream servers are unreachable")]
    TransportAllServersUnreachable,
}
