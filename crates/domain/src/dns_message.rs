use super::{DnsQuery, RecordSet, RecordType};
use crate::DomainName;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResponseCode {
    NoError,
    FormErr,
    ServFail,
    NXDomain,
    NotImp,
    Refused,
    Other(u16),
}

impl ResponseCode {
    pub fn from_u16(code: u16) -> Self {
        match code {
            0 => ResponseCode::NoError,
            1 => ResponseCode::FormErr,
            2 => ResponseCode::ServFail,
            3 => ResponseCode::NXDomain,
            4 => ResponseCode::NotImp,
            5 => ResponseCode::Refused,
            other => ResponseCode::Other(other),
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, ResponseCode::NoError)
    }
}

impl fmt::Display for ResponseCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ResponseCode::NoError => f.write_str("NOERROR"),
            ResponseCode::FormErr => f.write_str("FORMERR"),
            ResponseCode::ServFail => f.write_str("SERVFAIL"),
            ResponseCode::NXDomain => f.write_str("NXDOMAIN"),
            ResponseCode::NotImp => f.write_str("NOTIMP"),
            ResponseCode::Refused => f.write_str("REFUSED"),
            ResponseCode::Other(code) => write!(f, "RCODE{}", code),
        }
    }
}

/// Decoded DNS response.
///
/// Equality is structural over every field. The wire message ID is not part
/// of the model, so two replies carrying the same sections compare equal even
/// when they answered different queries on the wire.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DnsMessage {
    pub query: DnsQuery,
    pub rcode: ResponseCode,
    pub authoritative: bool,
    pub answers: Vec<RecordSet>,
    pub authority: Vec<RecordSet>,
    pub additional: Vec<RecordSet>,
}

impl DnsMessage {
    pub fn new(query: DnsQuery, rcode: ResponseCode) -> Self {
        Self {
            query,
            rcode,
            authoritative: false,
            answers: Vec::new(),
            authority: Vec::new(),
            additional: Vec::new(),
        }
    }

    pub fn has_answers(&self) -> bool {
        self.answers.iter().any(|set| !set.is_empty())
    }

    /// NS record sets offered in the authority section, in order.
    pub fn referrals(&self) -> impl Iterator<Item = &RecordSet> {
        self.authority
            .iter()
            .filter(|set| set.record_type == RecordType::NS && !set.is_empty())
    }

    /// First CNAME target owned by `name` in the answer section.
    pub fn cname_target(&self, name: &DomainName) -> Option<&DomainName> {
        self.answers
            .iter()
            .filter(|set| set.record_type == RecordType::CNAME && &set.name == name)
            .find_map(|set| set.targets().next())
    }
}

impl fmt::Display for DnsMessage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            ";; ->>HEADER<<- status: {}{}",
            self.rcode,
            if self.authoritative { ", flags: aa" } else { "" }
        )?;
        writeln!(f, ";; QUESTION SECTION:")?;
        write!(f, ";{} IN {}", self.query.name, self.query.record_type)?;

        let sections = [
            ("ANSWER", &self.answers),
            ("AUTHORITY", &self.authority),
            ("ADDITIONAL", &self.additional),
        ];
        for (title, sets) in sections {
            if sets.is_empty() {
                continue;
            }
            write!(f, "\n;; {} SECTION:", title)?;
            for set in sets.iter() {
                write!(f, "\n{}", set)?;
            }
        }
        Ok(())
    }
}
