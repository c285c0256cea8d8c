use super::forwarding::{MessageBuilder, ResponseParser};
use super::transport::{resolver::resolve_server, udp::UdpTransport, DnsTransport};
use async_trait::async_trait;
use ferrous_resolver_application::ports::BootstrapResolver;
use ferrous_resolver_domain::config::BootstrapConfig;
use ferrous_resolver_domain::{DomainError, DomainName, RecordSet, RecordType};
use std::net::SocketAddr;
use std::time::Duration;
use tracing::{debug, warn};

/// Recursive upstream used only to learn the root hints.
///
/// Servers are tried in configured order; the first usable answer wins.
pub struct UpstreamBootstrapResolver {
    servers: Vec<String>,
    timeout: Duration,
}

impl UpstreamBootstrapResolver {
    pub fn new(servers: Vec<String>, timeout: Duration) -> Self {
        Self { servers, timeout }
    }

    pub fn from_config(config: &BootstrapConfig) -> Self {
        Self::new(
            config.servers.clone(),
            Duration::from_millis(config.timeout_ms),
        )
    }

    async fn lookup_at(
        &self,
        server: SocketAddr,
        name: &DomainName,
        record_type: RecordType,
    ) -> Result<RecordSet, DomainError> {
        let (_, bytes) = MessageBuilder::build_query(name, record_type, true, false)?;
        let transport = UdpTransport::new(server);
        let reply = transport.send(&bytes, self.timeout).await?;
        debug!(
            server = %reply.server,
            protocol = transport.protocol_name(),
            name = %name,
            "Bootstrap server replied"
        );
        let response = ResponseParser::parse(&reply.bytes)?;

        if !response.rcode.is_success() {
            return Err(DomainError::InvalidDnsResponse(format!(
                "{} answered {} for {} {}",
                server, response.rcode, name, record_type
            )));
        }

        response
            .answers
            .into_iter()
            .find(|set| &set.name == name && set.record_type == record_type && !set.is_empty())
            .ok_or_else(|| {
                DomainError::InvalidDnsResponse(format!(
                    "{} returned no {} records for {}",
                    server, record_type, name
                ))
            })
    }
}

#[async_trait]
impl BootstrapResolver for UpstreamBootstrapResolver {
    async fn lookup(
        &self,
        name: &DomainName,
        record_type: RecordType,
    ) -> Result<RecordSet, DomainError> {
        let mut last_error = DomainError::TransportAllServersUnreachable;

        for (position, server) in self.servers.iter().enumerate() {
            let addrs = match resolve_server(server, self.timeout).await {
                Ok(addrs) => addrs,
                Err(e) => {
                    warn!(server = %server, error = %e, position, "Cannot resolve bootstrap server");
                    last_error = e;
                    continue;
                }
            };

            for addr in addrs {
                match self.lookup_at(addr, name, record_type).await {
                    Ok(set) => {
                        debug!(server = %addr, name = %name, record_type = %record_type, records = set.len(), "Bootstrap lookup answered");
                        return Ok(set);
                    }
                    Err(e) => {
                        warn!(server = %addr, error = %e, position, "Bootstrap lookup failed, failing over");
                        last_error = e;
                    }
                }
            }
        }

        warn!(name = %name, record_type = %record_type, "No bootstrap server produced an answer");
        Err(last_error)
    }
}
