//! kube-extdns domain layer
pub mod config;
pub mod dns_record;
pub mod dns_request;
pub mod errors;
pub mod service;
pub mod zone;

pub use config::{CliOverrides, Config, ConfigError, ExternalNameConfig};
pub use dns_record::{AddressRecord, RecordType};
pub use dns_request::DnsRequest;
pub use errors::DomainError;
pub use service::Service;
pub use zone::ZoneSet;
