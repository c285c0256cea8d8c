use super::{RecordData, RecordType};
use crate::DomainName;
use std::fmt;
use std::net::Ipv4Addr;

/// Records sharing one (owner name, type) pair, in the order received.
///
/// The TTL is carried for display only; nothing in the resolver expires on it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordSet {
    pub name: DomainName,
    pub record_type: RecordType,
    pub ttl: u32,
    pub records: Vec<RecordData>,
}

impl RecordSet {
    pub fn new(name: DomainName, record_type: RecordType, ttl: u32) -> Self {
        Self {
            name,
            record_type,
            ttl,
            records: Vec::new(),
        }
    }

    pub fn with_records(
        name: DomainName,
        record_type: RecordType,
        ttl: u32,
        records: Vec<RecordData>,
    ) -> Self {
        Self {
            name,
            record_type,
            ttl,
            records,
        }
    }

    pub fn push(&mut self, data: RecordData) {
        self.records.push(data);
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// NS/CNAME targets in record order.
    pub fn targets(&self) -> impl Iterator<Item = &DomainName> {
        self.records.iter().filter_map(RecordData::target)
    }

    pub fn ipv4_addresses(&self) -> impl Iterator<Item = Ipv4Addr> + '_ {
        self.records.iter().filter_map(RecordData::ipv4)
    }

    /// Records rendered as `['a', 'b']`, the form used by the cache dump.
    pub fn items_text(&self) -> String {
        let items: Vec<String> = self.records.iter().map(|r| format!("'{}'", r)).collect();
        format!("[{}]", items.join(", "))
    }
}

impl fmt::Display for RecordSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (index, data) in self.records.iter().enumerate() {
            if index > 0 {
                writeln!(f)?;
            }
            write!(
                f,
                "{} {} IN {} {}",
                self.name, self.ttl, self.record_type, data
            )?;
        }
        Ok(())
    }
}
