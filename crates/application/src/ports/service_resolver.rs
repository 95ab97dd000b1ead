use async_trait::async_trait;
use kube_extdns_domain::{DomainError, Service};

/// Read access to the cluster service registry.
///
/// Lookups never fail: an unknown key, or a registry that cannot be read,
/// yields an empty list.
#[async_trait]
pub trait ServiceResolver: Send + Sync {
    /// All services whose index key equals `key` exactly, in registry order.
    async fn resolve_by_key(&self, key: &str) -> Vec<Service>;

    /// Version of the data currently served. Used as the SOA serial.
    fn serial(&self) -> u32;
}

/// A registry whose contents can be refreshed from its source.
#[async_trait]
pub trait ServiceRegistryPort: ServiceResolver {
    /// Reloads the registry, returning the number of services now served.
    /// On failure the previous contents stay in place.
    async fn reload(&self) -> Result<usize, DomainError>;

    fn service_count(&self) -> usize;
}
