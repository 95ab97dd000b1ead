#![allow(dead_code, unused_imports)]

mod mock_handlers;
mod mock_service_resolver;

pub use mock_handlers::RecordingHandler;
pub use mock_service_resolver::MockServiceResolver;
