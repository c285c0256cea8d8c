use super::record_type_map::RecordTypeMapper;
use ferrous_resolver_domain::{
    DnsMessage, DnsQuery, DomainError, DomainName, RecordData, RecordSet, RecordType, ResponseCode,
};
use hickory_proto::op::Message;
use hickory_proto::rr::{RData, Record};
use std::str::FromStr;
use tracing::debug;

const HEADER_LEN: usize = 12;

/// Fixed header fields read straight from the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResponseHeader {
    pub id: u16,
    pub is_response: bool,
    pub authoritative: bool,
    pub truncated: bool,
    pub rcode: ResponseCode,
}

impl ResponseHeader {
    pub fn read(bytes: &[u8]) -> Result<Self, DomainError> {
        if bytes.len() < HEADER_LEN {
            return Err(DomainError::InvalidDnsResponse(format!(
                "message is {} bytes, shorter than a DNS header",
                bytes.len()
            )));
        }

        let flags = u16::from_be_bytes([bytes[2], bytes[3]]);
        Ok(Self {
            id: u16::from_be_bytes([bytes[0], bytes[1]]),
            is_response: flags & 0x8000 != 0,
            authoritative: flags & 0x0400 != 0,
            truncated: flags & 0x0200 != 0,
            rcode: ResponseCode::from_u16(flags & 0x000F),
        })
    }
}

pub struct ResponseParser;

impl ResponseParser {
    /// Decodes a reply into the resolver's message model.
    ///
    /// Records in each section are grouped into sets by (owner, type) in the
    /// order they first appear. EDNS OPT pseudo-records are dropped. Names
    /// keep their ASCII wire form, so `xn--` labels are never decoded.
    pub fn parse(response_bytes: &[u8]) -> Result<DnsMessage, DomainError> {
        let header = ResponseHeader::read(response_bytes)?;
        if !header.is_response {
            return Err(DomainError::InvalidDnsResponse(
                "QR bit not set in reply".to_string(),
            ));
        }

        let message = Message::from_vec(response_bytes).map_err(|e| {
            DomainError::InvalidDnsResponse(format!("Failed to parse DNS response: {}", e))
        })?;

        let question = message.queries().first().ok_or_else(|| {
            DomainError::InvalidDnsResponse("reply carries no question".to_string())
        })?;
        let query = DnsQuery::new(
            Self::domain_name(&question.name().to_ascii())?,
            RecordTypeMapper::from_hickory(question.query_type()),
        );

        if header.truncated {
            debug!(query = %query, "Truncated reply, keeping the records that arrived");
        }

        let mut response = DnsMessage::new(query, header.rcode);
        response.authoritative = header.authoritative;
        response.answers = Self::group(message.answers())?;
        response.authority = Self::group(message.name_servers())?;
        response.additional = Self::group(message.additionals())?;

        debug!(
            rcode = %response.rcode,
            authoritative = response.authoritative,
            answers = response.answers.len(),
            authority = response.authority.len(),
            additional = response.additional.len(),
            "DNS response parsed"
        );

        Ok(response)
    }

    fn group(records: &[Record]) -> Result<Vec<RecordSet>, DomainError> {
        let mut sets: Vec<RecordSet> = Vec::new();

        for record in records {
            let record_type = RecordTypeMapper::from_hickory(record.record_type());
            if record_type == RecordType::OPT {
                continue;
            }
            let owner = Self::domain_name(&record.name().to_ascii())?;
            let data = Self::record_data(record.data())?;

            match sets
                .iter_mut()
                .find(|set| set.name == owner && set.record_type == record_type)
            {
                Some(set) => set.push(data),
                None => sets.push(RecordSet::with_records(
                    owner,
                    record_type,
                    record.ttl(),
                    vec![data],
                )),
            }
        }

        Ok(sets)
    }

    fn record_data(rdata: &RData) -> Result<RecordData, DomainError> {
        let data = match rdata {
            RData::A(a) => RecordData::A(a.0),
            RData::AAAA(aaaa) => RecordData::Aaaa(aaaa.0),
            RData::NS(ns) => RecordData::Ns(Self::domain_name(&ns.to_ascii())?),
            RData::CNAME(canonical) => RecordData::Cname(Self::domain_name(&canonical.to_ascii())?),
            other => RecordData::Other(other.to_string()),
        };
        Ok(data)
    }

    fn domain_name(text: &str) -> Result<DomainName, DomainError> {
        DomainName::from_str(text)
            .map_err(|e| DomainError::InvalidDnsResponse(format!("bad name in reply: {}", e)))
    }
}
