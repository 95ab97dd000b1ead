use kube_extdns_application::ports::ServiceRegistryPort;
use std::sync::Arc;
use std::time::Duration;
use tokio_util::sync::CancellationToken;
use tracing::{error, info};

const MIN_INTERVAL: Duration = Duration::from_millis(1);

/// Background job that periodically reloads the service registry.
///
/// The first tick is consumed immediately: the registry has already loaded
/// once when it was built.
pub struct RegistrySyncJob {
    registry: Arc<dyn ServiceRegistryPort>,
    interval: Duration,
    shutdown: CancellationToken,
}

impl RegistrySyncJob {
    pub fn new(registry: Arc<dyn ServiceRegistryPort>) -> Self {
        Self {
            registry,
            interval: Duration::from_secs(30),
            shutdown: CancellationToken::new(),
        }
    }

    pub fn with_interval(mut self, interval: Duration) -> Self {
        self.interval = interval.max(MIN_INTERVAL);
        self
    }

    pub fn with_cancellation(mut self, token: CancellationToken) -> Self {
        self.shutdown = token;
        self
    }

    pub async fn start(self: Arc<Self>) {
        info!(
            interval_ms = self.interval.as_millis() as u64,
            "Starting registry sync job"
        );

        tokio::spawn(async move {
            let mut interval = tokio::time::interval(self.interval);
            interval.tick().await;

            loop {
                tokio::select! {
                    biased;
                    _ = self.shutdown.cancelled() => {
                        info!("RegistrySyncJob: shutting down");
                        break;
                    }
                    _ = interval.tick() => {
                        match self.registry.reload().await {
                            Ok(services) => info!(services, "RegistrySyncJob: reload completed"),
                            Err(e) => error!(error = %e, "RegistrySyncJob: reload failed, keeping previous snapshot"),
                        }
                    }
                }
            }
        });
    }
}
