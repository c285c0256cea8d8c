use super::forwarding::{MessageBuilder, ResponseParser};
use super::transport::{udp::UdpTransport, DnsTransport};
use async_trait::async_trait;
use ferrous_resolver_application::ports::{NameserverClient, QueryOutcome};
use ferrous_resolver_domain::config::ResolverConfig;
use ferrous_resolver_domain::{DnsMessage, DnsQuery, DomainError};
use std::net::SocketAddr;
use std::time::Duration;
use tracing::debug;

/// Sends iterative (RD clear) queries to authoritative nameservers over UDP.
pub struct UdpNameserverClient {
    timeout: Duration,
    dnssec_ok: bool,
}

impl UdpNameserverClient {
    pub fn new(timeout: Duration, dnssec_ok: bool) -> Self {
        Self { timeout, dnssec_ok }
    }

    pub fn from_config(config: &ResolverConfig) -> Self {
        Self::new(
            Duration::from_millis(config.query_timeout_ms),
            config.dnssec_ok,
        )
    }

    async fn exchange(
        &self,
        server: SocketAddr,
        query: &DnsQuery,
    ) -> Result<DnsMessage, DomainError> {
        let (id, bytes) =
            MessageBuilder::build_query(&query.name, query.record_type, false, self.dnssec_ok)?;
        debug!(server = %server, id, query = %query, "Sending iterative query");

        let transport = UdpTransport::new(server);
        let reply = transport.send(&bytes, self.timeout).await?;
        debug!(
            server = %reply.server,
            protocol = transport.protocol_name(),
            bytes = reply.bytes.len(),
            "Nameserver replied"
        );
        let response = ResponseParser::parse(&reply.bytes)?;

        if response.query != *query {
            return Err(DomainError::InvalidDnsResponse(format!(
                "reply from {} answers '{}' instead of '{}'",
                server, response.query, query
            )));
        }
        Ok(response)
    }
}

#[async_trait]
impl NameserverClient for UdpNameserverClient {
    async fn query(&self, server: SocketAddr, query: &DnsQuery) -> QueryOutcome {
        match self.exchange(server, query).await {
            Ok(response) => QueryOutcome::from_response(response),
            Err(e) => QueryOutcome::from_error(e),
        }
    }
}
