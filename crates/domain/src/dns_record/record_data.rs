use crate::DomainName;
use std::fmt;
use std::net::{Ipv4Addr, Ipv6Addr};

/// Type-specific payload of a single resource record.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum RecordData {
    A(Ipv4Addr),
    Aaaa(Ipv6Addr),
    Ns(DomainName),
    Cname(DomainName),
    /// Presentation text of rdata the resolver only carries around.
    Other(String),
}

impl RecordData {
    /// Target name of NS and CNAME records.
    pub fn target(&self) -> Option<&DomainName> {
        match self {
            RecordData::Ns(name) | RecordData::Cname(name) => Some(name),
            _ => None,
        }
    }

    pub fn ipv4(&self) -> Option<Ipv4Addr> {
        match self {
            RecordData::A(addr) => Some(*addr),
            _ => None,
        }
    }
}

impl fmt::Display for RecordData {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RecordData::A(addr) => write!(f, "{}", addr),
            RecordData::Aaaa(addr) => write!(f, "{}", addr),
            RecordData::Ns(name) | RecordData::Cname(name) => write!(f, "{}", name),
            RecordData::Other(text) => f.write_str(text),
        }
    }
}
