//! UDP Transport for DNS queries (RFC 1035 §4.2.1)
//!
//! One datagram out, one matching datagram back. Replies are read into a
//! 4096-byte buffer; a truncated reply is returned as-is since there is no
//! TCP fallback.

use super::{DnsTransport, TransportResponse};
use async_trait::async_trait;
use ferrous_resolver_domain::DomainError;
use std::net::{Ipv4Addr, Ipv6Addr, SocketAddr};
use std::time::Duration;
use tokio::net::UdpSocket;
use tokio::time::Instant;
use tracing::debug;

/// Maximum UDP DNS response size with EDNS(0)
const MAX_UDP_RESPONSE_SIZE: usize = 4096;

/// DNS over UDP transport
pub struct UdpTransport {
    server_addr: SocketAddr,
}

impl UdpTransport {
    pub fn new(server_addr: SocketAddr) -> Self {
        Self { server_addr }
    }

    fn timeout_error(&self) -> DomainError {
        DomainError::TransportTimeout {
            server: self.server_addr.to_string(),
        }
    }

    fn failure(&self, reason: impl std::fmt::Display) -> DomainError {
        DomainError::TransportFailure {
            server: self.server_addr.to_string(),
            reason: reason.to_string(),
        }
    }
}

#[async_trait]
impl DnsTransport for UdpTransport {
    async fn send(
        &self,
        message_bytes: &[u8],
        timeout: Duration,
    ) -> Result<TransportResponse, DomainError> {
        if message_bytes.len() < 2 {
            return Err(self.failure("query shorter than a message ID"));
        }
        let query_id = [message_bytes[0], message_bytes[1]];
        let deadline = Instant::now() + timeout;

        // Bind to ephemeral port (0 = OS assigns)
        let bind_addr = if self.server_addr.is_ipv4() {
            SocketAddr::from((Ipv4Addr::UNSPECIFIED, 0))
        } else {
            SocketAddr::from((Ipv6Addr::UNSPECIFIED, 0))
        };

        let socket = UdpSocket::bind(bind_addr)
            .await
            .map_err(|e| self.failure(format!("failed to bind UDP socket: {}", e)))?;

        let bytes_sent =
            tokio::time::timeout_at(deadline, socket.send_to(message_bytes, self.server_addr))
                .await
                .map_err(|_| self.timeout_error())?
                .map_err(|e| self.failure(e))?;

        debug!(server = %self.server_addr, bytes_sent, "UDP query sent");

        let mut recv_buf = vec![0u8; MAX_UDP_RESPONSE_SIZE];

        loop {
            let (bytes_received, from_addr) =
                tokio::time::timeout_at(deadline, socket.recv_from(&mut recv_buf))
                    .await
                    .map_err(|_| self.timeout_error())?
                    .map_err(|e| self.failure(e))?;

            if from_addr.ip() != self.server_addr.ip() {
                debug!(expected = %self.server_addr, received_from = %from_addr, "Dropping datagram from unexpected source");
                continue;
            }
            if bytes_received < 2 || recv_buf[..2] != query_id {
                debug!(server = %self.server_addr, bytes_received, "Dropping reply with mismatched ID");
                continue;
            }

            recv_buf.truncate(bytes_received);
            debug!(server = %self.server_addr, bytes_received, "UDP response received");

            return Ok(TransportResponse {
                bytes: recv_buf,
                server: from_addr,
            });
        }
    }

    fn protocol_name(&self) -> &'static str {
        "UDP"
    }
}
