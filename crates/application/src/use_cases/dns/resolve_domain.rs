use crate::ports::NameserverClient;
use crate::services::{DispatchResult, NameserverDispatcher, QueryPhase, ResolverCache};
use ferrous_resolver_domain::config::ResolverConfig;
use ferrous_resolver_domain::{
    DnsMessage, DnsQuery, DomainError, DomainName, RecordData, RecordSet, RecordType,
};
use std::future::Future;
use std::net::SocketAddr;
use std::pin::Pin;
use std::sync::Arc;
use tracing::{debug, info, warn};

type ResolveFuture<'a> = Pin<Box<dyn Future<Output = Result<Resolution, DomainError>> + Send + 'a>>;

#[derive(Debug, Clone)]
pub struct Resolution {
    pub response: Arc<DnsMessage>,
    pub cache_hit: bool,
    /// Nameserver that produced the response; `None` on a cache hit.
    pub nameserver: Option<DomainName>,
    pub server: Option<SocketAddr>,
}

impl Resolution {
    fn cached(response: Arc<DnsMessage>) -> Self {
        Self {
            response,
            cache_hit: true,
            nameserver: None,
            server: None,
        }
    }
}

#[derive(Debug, Clone, Copy)]
struct Limits {
    max_referrals: u32,
    max_depth: u8,
    resolve_missing_glue: bool,
}

/// Iterative resolution engine.
///
/// Walks from the closest cached delegation down to an authoritative
/// nameserver, following referrals and CNAMEs, and records what it learns in
/// the shared [`ResolverCache`]. Only one query is ever in flight per
/// resolution.
pub struct ResolveDomainUseCase {
    cache: Arc<ResolverCache>,
    dispatcher: NameserverDispatcher,
    limits: Limits,
}

impl ResolveDomainUseCase {
    pub fn new(
        cache: Arc<ResolverCache>,
        client: Arc<dyn NameserverClient>,
        config: &ResolverConfig,
    ) -> Self {
        Self {
            dispatcher: NameserverDispatcher::new(
                Arc::clone(&cache),
                client,
                config.nameserver_port,
            ),
            cache,
            limits: Limits {
                max_referrals: config.max_referrals,
                max_depth: config.max_depth,
                resolve_missing_glue: config.resolve_missing_glue,
            },
        }
    }

    pub async fn execute(
        &self,
        name: &DomainName,
        record_type: RecordType,
    ) -> Result<Resolution, DomainError> {
        self.resolve(DnsQuery::new(name.clone(), record_type), 0)
            .await
    }

    fn resolve(&self, query: DnsQuery, depth: u8) -> ResolveFuture<'_> {
        Box::pin(async move { self.resolve_at_depth(query, depth).await })
    }

    async fn resolve_at_depth(&self, query: DnsQuery, depth: u8) -> Result<Resolution, DomainError> {
        if depth > self.limits.max_depth {
            return Err(DomainError::ResolutionDepthExceeded {
                domain: query.name.to_string(),
                max_depth: self.limits.max_depth,
            });
        }

        if let Some(cached) = self.cache.lookup_answer(&query.name, query.record_type) {
            info!(query = %query, "Answer found in cache");
            return Ok(Resolution::cached(cached));
        }

        let (zone, mut nameservers) = self
            .cache
            .lookup_delegation(&query.name)
            .ok_or(DomainError::MissingRootHints)?;
        info!(
            query = %query,
            zone = %zone,
            nameservers = %nameservers.items_text(),
            "NS records fetched from cache"
        );

        let mut current = self
            .query_nameservers(&query, &nameservers, QueryPhase::Referral, depth)
            .await
            .ok_or_else(|| resolution_failed(&query))?;

        let mut previous: Option<DnsMessage> = None;
        let mut referrals_followed = 0u32;

        while !current.response.has_answers() {
            if previous.as_ref() == Some(&current.response) {
                debug!(query = %query, "Referral made no progress, stopping");
                break;
            }
            if referrals_followed >= self.limits.max_referrals {
                warn!(query = %query, max_referrals = self.limits.max_referrals, "Referral limit reached");
                break;
            }
            referrals_followed += 1;

            self.cache_hints(&current.response);

            let delegations: Vec<RecordSet> = current.response.referrals().cloned().collect();
            if delegations.is_empty() {
                debug!(query = %query, rcode = %current.response.rcode, "No delegation offered, stopping");
                break;
            }

            let mut next = None;
            for delegation in delegations {
                info!(
                    zone = %delegation.name,
                    nameservers = %delegation.items_text(),
                    "Start next iteration"
                );
                if let Some(result) = self
                    .query_nameservers(&query, &delegation, QueryPhase::Referral, depth)
                    .await
                {
                    nameservers = delegation;
                    next = Some(result);
                    break;
                }
            }

            previous = Some(current.response);
            current = next.ok_or_else(|| resolution_failed(&query))?;
        }

        if query.record_type != RecordType::CNAME {
            if let Some(target) = current.response.cname_target(&query.name) {
                info!(query = %query, target = %target, "Chase CNAME");
                return self
                    .resolve(DnsQuery::new(target.clone(), query.record_type), depth + 1)
                    .await;
            }
        }

        let authoritative = self
            .query_nameservers(&query, &nameservers, QueryPhase::Final, depth)
            .await
            .ok_or_else(|| resolution_failed(&query))?;

        self.cache
            .insert_delegation(query.name.clone(), RecordType::NS, nameservers);
        let response = Arc::new(authoritative.response);
        self.cache
            .insert_answer(query.name.clone(), query.record_type, Arc::clone(&response));

        Ok(Resolution {
            response,
            cache_hit: false,
            nameserver: Some(authoritative.nameserver),
            server: Some(authoritative.server),
        })
    }

    /// Records every authority and additional set under its own name and type.
    fn cache_hints(&self, response: &DnsMessage) {
        for set in response.authority.iter().chain(response.additional.iter()) {
            self.cache
                .insert_delegation(set.name.clone(), set.record_type, set.clone());
        }
    }

    async fn query_nameservers(
        &self,
        query: &DnsQuery,
        nameservers: &RecordSet,
        phase: QueryPhase,
        depth: u8,
    ) -> Option<DispatchResult> {
        if self.limits.resolve_missing_glue && !self.has_any_address(nameservers) {
            self.resolve_missing_glue(nameservers, depth).await;
        }
        self.dispatcher.dispatch(query, nameservers, phase).await
    }

    fn has_any_address(&self, nameservers: &RecordSet) -> bool {
        nameservers
            .targets()
            .any(|ns| self.cache.nameserver_address(ns).is_some())
    }

    /// Looks up addresses for nameservers a referral named without glue.
    /// Stops at the first nameserver that resolves.
    async fn resolve_missing_glue(&self, nameservers: &RecordSet, depth: u8) {
        for nameserver in nameservers.targets() {
            info!(nameserver = %nameserver, "Resolving nameserver address missing from referral");
            let resolution = match self
                .resolve(DnsQuery::new(nameserver.clone(), RecordType::A), depth + 1)
                .await
            {
                Ok(resolution) => resolution,
                Err(e) => {
                    warn!(nameserver = %nameserver, error = %e, "Nameserver address lookup failed");
                    continue;
                }
            };

            let addresses: Vec<RecordData> = resolution
                .response
                .answers
                .iter()
                .filter(|set| set.record_type == RecordType::A)
                .flat_map(|set| set.records.iter().cloned())
                .collect();
            if addresses.is_empty() {
                warn!(nameserver = %nameserver, "Nameserver has no A records");
                continue;
            }

            let ttl = resolution
                .response
                .answers
                .iter()
                .filter(|set| set.record_type == RecordType::A)
                .map(|set| set.ttl)
                .min()
                .unwrap_or_default();
            self.cache.insert_delegation(
                nameserver.clone(),
                RecordType::A,
                RecordSet::with_records(nameserver.clone(), RecordType::A, ttl, addresses),
            );
            return;
        }
    }
}

fn resolution_failed(query: &DnsQuery) -> DomainError {
    DomainError::ResolutionFailed {
        domain: query.name.to_string(),
        record_type: query.record_type.to_string(),
    }
}
