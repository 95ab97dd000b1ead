#![allow(dead_code, unused_imports)]

pub mod builders;
pub mod dns_server_mock;
pub mod mock_handlers;

pub use builders::{query, registry_with, use_case, REQUEST_ID};
pub use dns_server_mock::{MockBehavior, MockDnsServer};
pub use mock_handlers::StaticReplyHandler;
