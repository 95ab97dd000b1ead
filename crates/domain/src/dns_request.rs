use super::RecordType;
use std::sync::Arc;

/// The question of an incoming query, reduced to what resolution needs.
///
/// `name` is the ASCII wire form exactly as the client sent it, with case
/// and punycode labels untouched, so answers echo the original spelling.
#[derive(Debug, Clone)]
pub struct DnsRequest {
    pub name: Arc<str>,
    pub record_type: RecordType,
}

impl DnsRequest {
    pub fn new(name: impl Into<Arc<str>>, record_type: RecordType) -> Self {
        Self {
            name: name.into(),
            record_type,
        }
    }
}
