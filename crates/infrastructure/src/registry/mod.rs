pub mod service_file;
pub mod snapshot;

pub use service_file::{parse_services, ServiceFileFormat};
pub use snapshot::SnapshotServiceRegistry;
