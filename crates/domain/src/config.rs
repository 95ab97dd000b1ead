pub mod errors;
pub mod extname;
pub mod logging;
pub mod registry;
pub mod root;
pub mod server;
pub mod upstream;

pub use errors::ConfigError;
pub use extname::ExternalNameConfig;
pub use logging::{LogFormat, LoggingConfig};
pub use registry::RegistryConfig;
pub use root::{CliOverrides, Config};
pub use server::ServerConfig;
pub use upstream::UpstreamConfig;
