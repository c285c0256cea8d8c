use async_trait::async_trait;
use ferrous_resolver_domain::{DnsMessage, DnsQuery, DomainError, ResponseCode};
use std::net::SocketAddr;

/// Result of a single query to a single nameserver address.
#[derive(Debug, Clone)]
pub enum QueryOutcome {
    /// NOERROR reply.
    Response(DnsMessage),
    /// Reply carrying a non-success code (NXDOMAIN, SERVFAIL, ...).
    DnsError {
        rcode: ResponseCode,
        response: DnsMessage,
    },
    /// No reply within the per-query timeout.
    Timeout,
    /// Socket or decoding failure before any usable reply arrived.
    Unreachable(DomainError),
}

impl QueryOutcome {
    pub fn from_response(response: DnsMessage) -> Self {
        if response.rcode.is_success() {
            QueryOutcome::Response(response)
        } else {
            QueryOutcome::DnsError {
                rcode: response.rcode,
                response,
            }
        }
    }

    pub fn from_error(error: DomainError) -> Self {
        if error.is_timeout() {
            QueryOutcome::Timeout
        } else {
            QueryOutcome::Unreachable(error)
        }
    }
}

#[async_trait]
pub trait NameserverClient: Send + Sync {
    /// Sends one non-recursive query for `query` to `server` and waits for one reply.
    async fn query(&self, server: SocketAddr, query: &DnsQuery) -> QueryOutcome;
}
