pub mod resolve_external_name;

pub use resolve_external_name::{
    extract_service_key, synthesize_records, DelegateReason, ExternalNameOutcome,
    ResolveExternalNameUseCase,
};
