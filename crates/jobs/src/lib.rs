pub mod registry_sync;
pub mod runner;

pub use registry_sync::RegistrySyncJob;
pub use runner::JobRunner;
