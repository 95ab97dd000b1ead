//! Mapping from `hickory_proto::rr::RecordType` to `kube_extdns_domain::RecordType`

use hickory_proto::rr::RecordType as HickoryRecordType;
use kube_extdns_domain::RecordType;

/// Maps hickory query types onto the domain record types
pub struct RecordTypeMapper;

impl RecordTypeMapper {
    /// Every hickory type maps to something; types the resolver does not
    /// distinguish keep their numeric code.
    pub fn from_hickory(hickory_type: HickoryRecordType) -> RecordType {
        match hickory_type {
            HickoryRecordType::A => RecordType::A,
            HickoryRecordType::AAAA => RecordType::AAAA,
            HickoryRecordType::CNAME => RecordType::CNAME,
            other => RecordType::Other(u16::from(other)),
        }
    }
}
