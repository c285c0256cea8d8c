pub mod resolver;
pub mod udp;

use async_trait::async_trait;
use ferrous_resolver_domain::DomainError;
use std::net::SocketAddr;
use std::time::Duration;

#[derive(Debug)]
pub struct TransportResponse {
    pub bytes: Vec<u8>,
    /// Address the reply arrived from.
    pub server: SocketAddr,
}

#[async_trait]
pub trait DnsTransport: Send + Sync {
    /// Sends one query and waits for the matching reply, bounded by `timeout`.
    async fn send(
        &self,
        message_bytes: &[u8],
        timeout: Duration,
    ) -> Result<TransportResponse, DomainError>;

    fn protocol_name(&self) -> &'static str;
}
