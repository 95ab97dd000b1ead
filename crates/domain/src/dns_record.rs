pub mod record;
pub mod record_type;

pub use record::AddressRecord;
pub use record_type::RecordType;
