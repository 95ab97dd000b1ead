use super::service_file::read_services;
use arc_swap::ArcSwap;
use async_trait::async_trait;
use kube_extdns_application::ports::{ServiceRegistryPort, ServiceResolver};
use kube_extdns_domain::{DomainError, Service};
use rustc_hash::FxHashMap;
use smallvec::SmallVec;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::{SystemTime, UNIX_EPOCH};
use tracing::{error, info};

type ServiceList = SmallVec<[Service; 1]>;

/// Immutable `index key → services` view of the registry.
#[derive(Debug, Default)]
struct RegistrySnapshot {
    index: FxHashMap<String, ServiceList>,
    service_count: usize,
    serial: u32,
}

impl RegistrySnapshot {
    fn build(services: Vec<Service>, serial: u32) -> Self {
        let service_count = services.len();
        let mut index: FxHashMap<String, ServiceList> = FxHashMap::default();

        for service in services {
            index.entry(service.index_key()).or_default().push(service);
        }

        Self {
            index,
            service_count,
            serial,
        }
    }
}

/// Service registry served from atomically swapped snapshots.
///
/// Lookups read whichever snapshot is current; a reload publishes a complete
/// new snapshot or leaves the old one in place.
pub struct SnapshotServiceRegistry {
    source: Option<PathBuf>,
    snapshot: ArcSwap<RegistrySnapshot>,
}

impl SnapshotServiceRegistry {
    /// Registry with fixed contents and no source to reload from.
    pub fn from_services(services: Vec<Service>) -> Self {
        Self {
            source: None,
            snapshot: ArcSwap::from_pointee(RegistrySnapshot::build(services, unix_serial())),
        }
    }

    /// Loads `path` once; later reloads read it again.
    pub async fn from_file(path: impl Into<PathBuf>) -> Result<Self, DomainError> {
        let registry = Self {
            source: Some(path.into()),
            snapshot: ArcSwap::from_pointee(RegistrySnapshot::default()),
        };
        registry.reload().await?;
        Ok(registry)
    }

    pub fn source(&self) -> Option<&Path> {
        self.source.as_deref()
    }

    /// Publish `services` as the new snapshot.
    pub fn replace(&self, services: Vec<Service>) -> usize {
        let previous = self.snapshot.load().serial;
        let serial = unix_serial().max(previous.wrapping_add(1));
        let snapshot = RegistrySnapshot::build(services, serial);
        let count = snapshot.service_count;

        self.snapshot.store(Arc::new(snapshot));
        count
    }
}

#[async_trait]
impl ServiceResolver for SnapshotServiceRegistry {
    async fn resolve_by_key(&self, key: &str) -> Vec<Service> {
        self.snapshot
            .load()
            .index
            .get(key)
            .map(|services| services.to_vec())
            .unwrap_or_default()
    }

    fn serial(&self) -> u32 {
        self.snapshot.load().serial
    }
}

#[async_trait]
impl ServiceRegistryPort for SnapshotServiceRegistry {
    async fn reload(&self) -> Result<usize, DomainError> {
        let Some(path) = &self.source else {
            return Ok(self.service_count());
        };

        let services = read_services(path).await.map_err(|e| {
            error!(error = %e, "Service registry reload failed");
            e
        })?;

        let count = self.replace(services);
        info!(
            path = %path.display(),
            services = count,
            serial = self.serial(),
            "Service registry loaded"
        );
        Ok(count)
    }

    fn service_count(&self) -> usize {
        self.snapshot.load().service_count
    }
}

fn unix_serial() -> u32 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| elapsed.as_secs() as u32)
        .unwrap_or(0)
}
