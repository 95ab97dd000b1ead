#![allow(dead_code)]

use async_trait::async_trait;
use kube_extdns_application::ports::ServiceResolver;
use kube_extdns_domain::Service;
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::RwLock;

pub struct MockServiceResolver {
    services: RwLock<HashMap<String, Vec<Service>>>,
    serial: u32,
    lookups: AtomicUsize,
}

impl MockServiceResolver {
    pub fn new() -> Self {
        Self {
            services: RwLock::new(HashMap::new()),
            serial: 1,
            lookups: AtomicUsize::new(0),
        }
    }

    pub fn with_serial(mut self, serial: u32) -> Self {
        self.serial = serial;
        self
    }

    pub fn add_service(&self, service: Service) {
        self.services
            .write()
            .unwrap()
            .entry(service.index_key())
            .or_default()
            .push(service);
    }

    pub fn lookup_count(&self) -> usize {
        self.lookups.load(Ordering::Relaxed)
    }
}

impl Default for MockServiceResolver {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ServiceResolver for MockServiceResolver {
    async fn resolve_by_key(&self, key: &str) -> Vec<Service> {
        self.lookups.fetch_add(1, Ordering::Relaxed);
        self.services
            .read()
            .unwrap()
            .get(key)
            .cloned()
            .unwrap_or_default()
    }

    fn serial(&self) -> u32 {
        self.serial
    }
}
