use hickory_proto::op::{Message, MessageType, OpCode, Query};
use hickory_proto::rr::{DNSClass, Name, RecordType};
use kube_extdns_application::use_cases::ResolveExternalNameUseCase;
use kube_extdns_domain::{Service, ZoneSet};
use kube_extdns_infrastructure::registry::SnapshotServiceRegistry;
use std::sync::Arc;

pub const REQUEST_ID: u16 = 0x1234;

pub fn query(name: &str, record_type: RecordType) -> Message {
    let mut query = Query::new();
    query.set_name(Name::from_ascii(name).unwrap());
    query.set_query_type(record_type);
    query.set_query_class(DNSClass::IN);

    let mut message = Message::new(REQUEST_ID, MessageType::Query, OpCode::Query);
    message.set_recursion_desired(true);
    message.add_query(query);
    message
}

pub fn registry_with(services: Vec<Service>) -> Arc<SnapshotServiceRegistry> {
    Arc::new(SnapshotServiceRegistry::from_services(services))
}

pub fn use_case(
    zones: &[&str],
    registry: Arc<SnapshotServiceRegistry>,
    continue_on_no_match: bool,
) -> Arc<ResolveExternalNameUseCase> {
    Arc::new(
        ResolveExternalNameUseCase::new(ZoneSet::new(zones).unwrap(), 120, continue_on_no_match)
            .with_registry(registry),
    )
}
