use dashmap::DashMap;
use ferrous_resolver_domain::{DnsMessage, DomainName, RecordSet, RecordType};
use rustc_hash::{FxBuildHasher, FxHashMap};
use std::net::Ipv4Addr;
use std::sync::Arc;

type ReferralEntry = FxHashMap<RecordType, RecordSet>;
type AnswerEntry = FxHashMap<RecordType, Arc<DnsMessage>>;

#[derive(Debug, Clone)]
pub struct AnswerCacheEntry {
    pub name: DomainName,
    pub record_type: RecordType,
    pub response: Arc<DnsMessage>,
}

#[derive(Debug, Clone)]
pub struct ReferralCacheEntry {
    pub name: DomainName,
    pub record_type: RecordType,
    pub record_set: RecordSet,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CacheStats {
    pub referral_names: usize,
    pub referral_sets: usize,
    pub answer_names: usize,
    pub answers: usize,
}

/// Resolver context: the referral cache (delegation hints) and the answer
/// cache (final responses).
///
/// Entries never expire. Each map locks per key and the last writer wins,
/// which is all the consistency accumulated hints need.
pub struct ResolverCache {
    referrals: DashMap<DomainName, ReferralEntry, FxBuildHasher>,
    answers: DashMap<DomainName, AnswerEntry, FxBuildHasher>,
}

impl ResolverCache {
    pub fn new() -> Self {
        Self {
            referrals: DashMap::with_hasher(FxBuildHasher),
            answers: DashMap::with_hasher(FxBuildHasher),
        }
    }

    pub fn lookup_answer(
        &self,
        name: &DomainName,
        record_type: RecordType,
    ) -> Option<Arc<DnsMessage>> {
        self.answers
            .get(name)
            .and_then(|entry| entry.get(&record_type).map(Arc::clone))
    }

    pub fn insert_answer(
        &self,
        name: DomainName,
        record_type: RecordType,
        response: Arc<DnsMessage>,
    ) {
        self.answers
            .entry(name)
            .or_default()
            .insert(record_type, response);
    }

    pub fn lookup_referral(&self, name: &DomainName, record_type: RecordType) -> Option<RecordSet> {
        self.referrals
            .get(name)
            .and_then(|entry| entry.get(&record_type).cloned())
    }

    pub fn insert_delegation(&self, name: DomainName, record_type: RecordType, record_set: RecordSet) {
        self.referrals
            .entry(name)
            .or_default()
            .insert(record_type, record_set);
    }

    /// Closest cached NS set above `name`.
    ///
    /// The walk starts at the immediate parent and steps toward the root; the
    /// name itself is never considered. Returns the key the set was found
    /// under together with the set, or `None` when not even the root is known.
    pub fn lookup_delegation(&self, name: &DomainName) -> Option<(DomainName, RecordSet)> {
        name.ancestors()
            .chain(std::iter::once(DomainName::root()))
            .find_map(|ancestor| {
                self.lookup_referral(&ancestor, RecordType::NS)
                    .filter(|set| !set.is_empty())
                    .map(|set| (ancestor, set))
            })
    }

    /// First IPv4 address on record for a nameserver.
    pub fn nameserver_address(&self, nameserver: &DomainName) -> Option<Ipv4Addr> {
        self.referrals.get(nameserver).and_then(|entry| {
            entry
                .get(&RecordType::A)
                .and_then(|set| set.ipv4_addresses().next())
        })
    }

    pub fn answer_entries(&self) -> Vec<AnswerCacheEntry> {
        self.answers
            .iter()
            .flat_map(|entry| {
                let name = entry.key().clone();
                entry
                    .value()
                    .iter()
                    .map(|(record_type, response)| AnswerCacheEntry {
                        name: name.clone(),
                        record_type: *record_type,
                        response: Arc::clone(response),
                    })
                    .collect::<Vec<_>>()
            })
            .collect()
    }

    pub fn referral_entries(&self) -> Vec<ReferralCacheEntry> {
        self.referrals
            .iter()
            .flat_map(|entry| {
                let name = entry.key().clone();
                entry
                    .value()
                    .iter()
                    .map(|(record_type, record_set)| ReferralCacheEntry {
                        name: name.clone(),
                        record_type: *record_type,
                        record_set: record_set.clone(),
                    })
                    .collect::<Vec<_>>()
            })
            .collect()
    }

    pub fn stats(&self) -> CacheStats {
        CacheStats {
            referral_names: self.referrals.len(),
            referral_sets: self.referrals.iter().map(|entry| entry.len()).sum(),
            answer_names: self.answers.len(),
            answers: self.answers.iter().map(|entry| entry.len()).sum(),
        }
    }
}

impl Default for ResolverCache {
    fn default() -> Self {
        Self::new()
    }
}
