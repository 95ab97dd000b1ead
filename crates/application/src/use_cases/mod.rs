pub mod dns;

pub use dns::{DelegateReason, ExternalNameOutcome, ResolveExternalNameUseCase};
