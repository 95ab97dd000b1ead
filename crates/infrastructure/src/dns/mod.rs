pub mod forwarding;
pub mod handler;
pub mod message_builder;
pub mod record_type_map;
pub mod server;
pub mod transport;

pub use forwarding::UpstreamForwarder;
pub use handler::ExternalNameHandler;
pub use message_builder::MessageBuilder;
pub use record_type_map::RecordTypeMapper;
pub use server::DnsServerHandler;
