use super::ResolverCache;
use crate::ports::{NameserverClient, QueryOutcome};
use ferrous_resolver_domain::{DnsMessage, DnsQuery, DomainName, RecordSet};
use std::net::{IpAddr, SocketAddr};
use std::sync::Arc;
use std::time::Instant;
use tracing::{debug, info, warn};

/// Which step of a resolution a query belongs to. Only affects reporting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QueryPhase {
    Referral,
    Final,
}

#[derive(Debug, Clone)]
pub struct DispatchResult {
    pub response: DnsMessage,
    pub nameserver: DomainName,
    pub server: SocketAddr,
    pub latency_ms: u64,
}

/// Tries the nameservers of one delegation step strictly in order.
///
/// One attempt per candidate, no backoff. The first candidate that replies at
/// all wins, whatever its response code; timeouts and socket failures move on
/// to the next candidate. Candidates without a cached address are skipped.
pub struct NameserverDispatcher {
    cache: Arc<ResolverCache>,
    client: Arc<dyn NameserverClient>,
    port: u16,
}

impl NameserverDispatcher {
    pub fn new(cache: Arc<ResolverCache>, client: Arc<dyn NameserverClient>, port: u16) -> Self {
        Self {
            cache,
            client,
            port,
        }
    }

    pub async fn dispatch(
        &self,
        query: &DnsQuery,
        nameservers: &RecordSet,
        phase: QueryPhase,
    ) -> Option<DispatchResult> {
        for (position, nameserver) in nameservers.targets().enumerate() {
            let Some(address) = self.cache.nameserver_address(nameserver) else {
                warn!(nameserver = %nameserver, position, "No cached address for nameserver, skipping");
                continue;
            };
            let server = SocketAddr::new(IpAddr::V4(address), self.port);

            if phase == QueryPhase::Referral {
                info!(nameserver = %nameserver, server = %server, query = %query, "Querying nameserver");
            }

            let start = Instant::now();
            let outcome = self.client.query(server, query).await;
            let latency_ms = start.elapsed().as_millis() as u64;

            let response = match outcome {
                QueryOutcome::Response(response) => response,
                QueryOutcome::DnsError { rcode, response } => {
                    warn!(nameserver = %nameserver, server = %server, rcode = %rcode, "Nameserver returned an error code");
                    response
                }
                QueryOutcome::Timeout => {
                    warn!(nameserver = %nameserver, server = %server, position, "Nameserver timed out, trying next");
                    continue;
                }
                QueryOutcome::Unreachable(error) => {
                    warn!(nameserver = %nameserver, server = %server, error = %error, position, "Nameserver unreachable, trying next");
                    continue;
                }
            };

            match phase {
                QueryPhase::Referral => {
                    info!(nameserver = %nameserver, latency_ms, "Response received")
                }
                QueryPhase::Final => {
                    info!(nameserver = %nameserver, latency_ms, query = %query, "Final response received")
                }
            }

            return Some(DispatchResult {
                response,
                nameserver: nameserver.clone(),
                server,
                latency_ms,
            });
        }

        debug!(query = %query, candidates = nameservers.len(), "No nameserver in the set answered");
        None
    }
}
