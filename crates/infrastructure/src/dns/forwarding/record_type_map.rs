//! Mapping between `ferrous_resolver_domain::RecordType` and `hickory_proto::rr::RecordType`.
//!
//! Both sides agree on the IANA type codes, so the numeric code is the bridge.
//! Codes the domain has no mnemonic for survive as `RecordType::Unknown`.

use ferrous_resolver_domain::RecordType;
use hickory_proto::rr::RecordType as HickoryRecordType;

pub struct RecordTypeMapper;

impl RecordTypeMapper {
    pub fn to_hickory(record_type: RecordType) -> HickoryRecordType {
        HickoryRecordType::from(record_type.to_u16())
    }

    pub fn from_hickory(hickory_type: HickoryRecordType) -> RecordType {
        RecordType::from_u16(u16::from(hickory_type))
    }
}
