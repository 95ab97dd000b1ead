mod dns_handler;
mod service_resolver;

pub use dns_handler::{BufferedSink, DnsHandler, ResponseSink};
pub use service_resolver::{ServiceRegistryPort, ServiceResolver};
