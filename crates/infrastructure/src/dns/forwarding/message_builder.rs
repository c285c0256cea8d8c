//! DNS Message Builder
//!
//! Constructs DNS query messages in wire format using `hickory-proto`.

use super::record_type_map::RecordTypeMapper;
use ferrous_resolver_domain::{DomainError, DomainName, RecordType};
use hickory_proto::op::{Message, MessageType, OpCode, Query};
use hickory_proto::rr::Name;
use hickory_proto::serialize::binary::{BinEncodable, BinEncoder};
use std::str::FromStr;

/// EDNS(0) OPT pseudo-record: root owner, TYPE 41, 1232-byte payload,
/// extended RCODE 0, version 0, DO bit set, no options.
const OPT_RECORD_DO: [u8; 11] = [
    0x00, 0x00, 0x29, 0x04, 0xD0, 0x00, 0x00, 0x80, 0x00, 0x00, 0x00,
];

const ARCOUNT_OFFSET: usize = 10;

/// Builds DNS query messages in wire format
pub struct MessageBuilder;

impl MessageBuilder {
    /// Build a single-question IN query and serialize it.
    ///
    /// Returns the random message ID with the bytes so the transport can
    /// match the reply. Iterative queries go out with `recursion_desired`
    /// clear; only bootstrap lookups set it.
    pub fn build_query(
        domain: &DomainName,
        record_type: RecordType,
        recursion_desired: bool,
        dnssec_ok: bool,
    ) -> Result<(u16, Vec<u8>), DomainError> {
        let name = Name::from_str(&domain.to_string()).map_err(|e| {
            DomainError::InvalidDomainName(format!("Invalid domain '{}': {}", domain, e))
        })?;

        let mut query = Query::new();
        query.set_name(name);
        query.set_query_type(RecordTypeMapper::to_hickory(record_type));
        query.set_query_class(hickory_proto::rr::DNSClass::IN);

        let id = fastrand::u16(..);

        let mut message = Message::new(id, MessageType::Query, OpCode::Query);
        message.set_recursion_desired(recursion_desired);
        message.add_query(query);

        let mut bytes = Self::serialize_message(&message)?;
        if dnssec_ok {
            Self::append_opt_record(&mut bytes);
        }
        Ok((id, bytes))
    }

    fn serialize_message(message: &Message) -> Result<Vec<u8>, DomainError> {
        let mut buf = Vec::with_capacity(512);
        let mut encoder = BinEncoder::new(&mut buf);

        message.emit(&mut encoder).map_err(|e| {
            DomainError::InvalidDnsResponse(format!("Failed to serialize DNS message: {}", e))
        })?;

        Ok(buf)
    }

    fn append_opt_record(bytes: &mut Vec<u8>) {
        let arcount = u16::from_be_bytes([bytes[ARCOUNT_OFFSET], bytes[ARCOUNT_OFFSET + 1]]);
        let [hi, lo] = (arcount + 1).to_be_bytes();
        bytes[ARCOUNT_OFFSET] = hi;
        bytes[ARCOUNT_OFFSET + 1] = lo;
        bytes.extend_from_slice(&OPT_RECORD_DO);
    }
}
