use kube_extdns_domain::config::LogFormat;
use kube_extdns_domain::Config;
use tracing_subscriber::EnvFilter;

/// `RUST_LOG` takes precedence over `[logging].level`.
pub fn init_logging(config: &Config) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.logging.level));

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true);

    let _ = match config.logging.format {
        LogFormat::Json => builder.json().try_init(),
        LogFormat::Text => builder.compact().try_init(),
    };
}
