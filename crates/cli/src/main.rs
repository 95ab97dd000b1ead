use clap::Parser;
use kube_extdns_domain::CliOverrides;
use kube_extdns_infrastructure::dns::DnsServerHandler;
use kube_extdns_jobs::{JobRunner, RegistrySyncJob};
use std::time::Duration;
use tokio_util::sync::CancellationToken;
use tracing::info;

mod bootstrap;
mod di;
mod server;

#[derive(Parser)]
#[command(name = "kube-extdns")]
#[command(version)]
#[command(about = "Answers DNS queries for cluster services with their external IPs")]
struct Cli {
    /// Configuration file path
    #[arg(short = 'c', long, value_name = "FILE")]
    config: Option<String>,

    /// DNS server port
    #[arg(short = 'd', long)]
    dns_port: Option<u16>,

    /// Bind address
    #[arg(short = 'b', long)]
    bind: Option<String>,

    /// Service registry file (JSON or TOML)
    #[arg(short = 's', long, value_name = "FILE")]
    services_file: Option<String>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long)]
    log_level: Option<String>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let cli_overrides = CliOverrides {
        dns_port: cli.dns_port,
        bind_address: cli.bind.clone(),
        services_file: cli.services_file.clone(),
        log_level: cli.log_level.clone(),
    };

    let config = bootstrap::load_config(cli.config.as_deref(), cli_overrides)?;

    bootstrap::init_logging(&config);

    info!("Starting kube-extdns v{}", env!("CARGO_PKG_VERSION"));

    let dns_services = di::DnsServices::new(&config).await?;
    let shutdown = CancellationToken::new();

    let mut jobs = JobRunner::new().with_shutdown_token(shutdown.clone());
    if let Some(registry) = &dns_services.registry {
        if config.registry.reload_interval_secs > 0 {
            jobs = jobs.with_registry_sync(
                RegistrySyncJob::new(registry.clone())
                    .with_interval(Duration::from_secs(config.registry.reload_interval_secs)),
            );
        }
    }
    jobs.start().await;

    let dns_addr = config.dns_bind_address()?;
    let dns_handler = DnsServerHandler::new(dns_services.chain);
    let mut dns_server = tokio::spawn(server::start_dns_server(
        dns_addr,
        dns_handler,
        shutdown.clone(),
    ));

    tokio::select! {
        result = tokio::signal::ctrl_c() => {
            result?;
            info!("Shutdown signal received");
            shutdown.cancel();
            dns_server.await??;
        }
        result = &mut dns_server => {
            shutdown.cancel();
            result??;
        }
    }

    info!("Server shutdown complete");
    Ok(())
}
