use kube_extdns_application::ports::{DnsHandler, ServiceRegistryPort};
use kube_extdns_application::use_cases::ResolveExternalNameUseCase;
use kube_extdns_domain::Config;
use kube_extdns_infrastructure::dns::{ExternalNameHandler, UpstreamForwarder};
use kube_extdns_infrastructure::registry::SnapshotServiceRegistry;
use std::sync::Arc;
use std::time::Duration;
use tracing::{info, warn};

pub struct DnsServices {
    pub registry: Option<Arc<SnapshotServiceRegistry>>,
    pub chain: Arc<dyn DnsHandler>,
}

impl DnsServices {
    pub async fn new(config: &Config) -> anyhow::Result<Self> {
        info!("Initializing DNS services");

        let registry = Self::build_registry(config).await?;
        let zones = config.zone_set()?;

        info!(
            zones = ?zones.zones(),
            ttl_seconds = config.extname.ttl_seconds,
            continue_on_no_match = config.extname.continue_on_no_match,
            "External-name resolver configured"
        );

        let mut use_case = ResolveExternalNameUseCase::new(
            zones,
            config.extname.ttl_seconds,
            config.extname.continue_on_no_match,
        );
        if let Some(registry) = &registry {
            use_case = use_case.with_registry(registry.clone());
        }

        let mut handler = ExternalNameHandler::new(Arc::new(use_case));
        if let Some(forwarder) = Self::build_forwarder(config)? {
            handler = handler.with_next(forwarder);
        }

        Ok(Self {
            registry,
            chain: Arc::new(handler),
        })
    }

    async fn build_registry(config: &Config) -> anyhow::Result<Option<Arc<SnapshotServiceRegistry>>> {
        let Some(path) = &config.registry.services_file else {
            warn!("No services file configured, every query is passed to the next handler");
            return Ok(None);
        };

        let registry = SnapshotServiceRegistry::from_file(path).await?;
        info!(
            path = %path,
            services = registry.service_count(),
            "Service registry ready"
        );
        Ok(Some(Arc::new(registry)))
    }

    fn build_forwarder(config: &Config) -> anyhow::Result<Option<Arc<dyn DnsHandler>>> {
        let upstreams = config.upstream_addresses()?;
        if upstreams.is_empty() {
            warn!("No upstream servers configured, unanswered queries get SERVFAIL");
            return Ok(None);
        }

        let forwarder = UpstreamForwarder::udp(
            &upstreams,
            Duration::from_millis(config.upstream.timeout_ms),
        );
        info!(
            servers = ?upstreams,
            upstreams = forwarder.upstream_count(),
            timeout_ms = config.upstream.timeout_ms,
            "Upstream forwarder configured"
        );
        Ok(Some(Arc::new(forwarder)))
    }
}
