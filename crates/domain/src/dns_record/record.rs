use super::RecordType;
use std::net::Ipv4Addr;
use std::sync::Arc;

/// A synthesized address answer. Class is always IN.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddressRecord {
    pub name: Arc<str>,

    pub record_type: RecordType,

    pub ttl: u32,

    pub address: Ipv4Addr,
}

impl AddressRecord {
    pub fn a(name: impl Into<Arc<str>>, address: Ipv4Addr, ttl: u32) -> Self {
        Self {
            name: name.into(),
            record_type: RecordType::A,
            ttl,
            address,
        }
    }
}
