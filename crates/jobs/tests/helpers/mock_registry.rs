#![allow(dead_code)]

use async_trait::async_trait;
use kube_extdns_application::ports::{ServiceRegistryPort, ServiceResolver};
use kube_extdns_domain::{DomainError, Service};
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

/// Registry that counts reloads and can be told to fail them.
pub struct MockRegistry {
    reloads: AtomicUsize,
    failing: AtomicBool,
}

impl MockRegistry {
    pub fn new() -> Self {
        Self {
            reloads: AtomicUsize::new(0),
            failing: AtomicBool::new(false),
        }
    }

    pub fn failing() -> Self {
        let registry = Self::new();
        registry.failing.store(true, Ordering::Relaxed);
        registry
    }

    pub fn reloads(&self) -> usize {
        self.reloads.load(Ordering::Relaxed)
    }
}

#[async_trait]
impl ServiceResolver for MockRegistry {
    async fn resolve_by_key(&self, _key: &str) -> Vec<Service> {
        Vec::new()
    }

    fn serial(&self) -> u32 {
        self.reloads() as u32
    }
}

#[async_trait]
impl ServiceRegistryPort for MockRegistry {
    async fn reload(&self) -> Result<usize, DomainError> {
        self.reloads.fetch_add(1, Ordering::Relaxed);
        if self.failing.load(Ordering::Relaxed) {
            return Err(DomainError::RegistryLoad {
                source_path: "mock".to_string(),
                reason: "unreadable".to_string(),
            });
        }
        Ok(0)
    }

    fn service_count(&self) -> usize {
        0
    }
}
