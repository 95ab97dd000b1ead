use crate::ports::ServiceResolver;
use kube_extdns_domain::zone::normalize_name;
use kube_extdns_domain::{AddressRecord, DnsRequest, RecordType, Service, ZoneSet};
use std::net::Ipv4Addr;
use std::sync::Arc;
use tracing::{debug, instrument};

/// Why a request is handed to the next handler.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DelegateReason {
    RegistryUnbound,
    NotApplicable,
    NoMatch,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExternalNameOutcome {
    /// Let the next handler answer.
    Delegate(DelegateReason),

    /// Answer authoritatively with these records, in order.
    Answer(Vec<AddressRecord>),

    /// Zone matched but nothing resolved, and the resolver must not fall
    /// through: reply with a backend error for `zone`.
    BackendError { zone: Arc<str>, serial: u32 },
}

/// Maps `<service-key>.<zone>` queries to the external IPs of the matching
/// registry services.
pub struct ResolveExternalNameUseCase {
    zones: ZoneSet,
    ttl_seconds: u32,
    continue_on_no_match: bool,
    registry: Option<Arc<dyn ServiceResolver>>,
}

impl ResolveExternalNameUseCase {
    pub fn new(zones: ZoneSet, ttl_seconds: u32, continue_on_no_match: bool) -> Self {
        Self {
            zones,
            ttl_seconds,
            continue_on_no_match,
            registry: None,
        }
    }

    pub fn with_registry(mut self, registry: Arc<dyn ServiceResolver>) -> Self {
        self.registry = Some(registry);
        self
    }

    pub fn zones(&self) -> &ZoneSet {
        &self.zones
    }

    pub fn ttl_seconds(&self) -> u32 {
        self.ttl_seconds
    }

    pub fn continue_on_no_match(&self) -> bool {
        self.continue_on_no_match
    }

    #[instrument(skip_all, fields(qname = %request.name, qtype = %request.record_type))]
    pub async fn execute(&self, request: &DnsRequest) -> ExternalNameOutcome {
        let Some(registry) = &self.registry else {
            return ExternalNameOutcome::Delegate(DelegateReason::RegistryUnbound);
        };

        let Some(zone) = self.zones.matches(&request.name) else {
            return ExternalNameOutcome::Delegate(DelegateReason::NotApplicable);
        };

        let records = match extract_service_key(&request.name, zone) {
            Some(service_key) => {
                debug!(zone = %zone, service_key = %service_key, "Looking up service");
                let services = registry.resolve_by_key(&service_key).await;
                synthesize_records(&services, request, self.ttl_seconds)
            }
            None => {
                debug!(zone = %zone, "Query names the zone itself, no service key");
                Vec::new()
            }
        };

        if !records.is_empty() {
            debug!(records = records.len(), "Answering from service registry");
            return ExternalNameOutcome::Answer(records);
        }

        if self.continue_on_no_match {
            ExternalNameOutcome::Delegate(DelegateReason::NoMatch)
        } else {
            ExternalNameOutcome::BackendError {
                zone: Arc::from(zone),
                serial: registry.serial(),
            }
        }
    }
}

/// The labels of `query_name` in front of `zone`, lowercased, without the
/// separating dot. `None` when the query is the zone itself or lies outside it.
pub fn extract_service_key(query_name: &str, zone: &str) -> Option<String> {
    let name = normalize_name(query_name);
    let zone = normalize_name(zone);

    if name.len() <= zone.len() || !name.ends_with(&zone) {
        return None;
    }

    let prefix = &name[..name.len() - zone.len()];
    let key = if zone == "." {
        prefix
    } else {
        prefix.strip_suffix('.')?
    };

    if key.is_empty() {
        None
    } else {
        Some(key.to_string())
    }
}

/// One record per usable external IP, in service order then IP order.
///
/// Only A queries produce records. External IPs that do not parse as IPv4
/// are skipped.
pub fn synthesize_records(
    services: &[Service],
    request: &DnsRequest,
    ttl_seconds: u32,
) -> Vec<AddressRecord> {
    let mut records = Vec::new();

    for service in services {
        for external_ip in &service.external_ips {
            match request.record_type {
                RecordType::A => match external_ip.parse::<Ipv4Addr>() {
                    Ok(address) => records.push(AddressRecord::a(
                        Arc::clone(&request.name),
                        address,
                        ttl_seconds,
                    )),
                    Err(_) => {
                        debug!(
                            service = %service.name,
                            external_ip = %external_ip,
                            "Skipping external IP that is not IPv4"
                        );
                    }
                },
                // IPv6 external IPs are not served yet
                RecordType::AAAA => {}
                RecordType::CNAME | RecordType::Other(_) => {}
            }
        }
    }

    records
}
