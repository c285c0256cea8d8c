use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Invalid domain name: {0}")]
    InvalidDomainName(String),

    #[error("Invalid record type: {0}")]
    InvalidRecordType(String),

    #[error("Invalid DNS response: {0}")]
    InvalidDnsResponse(String),

    #[error("I/O error: {0}")]
    IoError(String),

    #[error("Transport timeout waiting for {server}")]
    TransportTimeout { server: String },

    #[error("Transport failure talking to {server}: {reason}")]
    TransportFailure { server: String, reason: String },

    #[error("All upstream servers are unreachable")]
    TransportAllServersUnreachable,

    #[error("No root hints cached; bootstrap has not run")]
    MissingRootHints,

    #[error("Bootstrap failed: {0}")]
    BootstrapFailed(String),

    #[error("No nameserver answered for {domain} {record_type}")]
    ResolutionFailed { domain: String, record_type: String },

    #[error("Resolution of {domain} exceeded the maximum nesting depth of {max_depth}")]
    ResolutionDepthExceeded { domain: String, max_depth: u8 },

    #[error("Configuration error: {0}")]
    ConfigError(String),
}

impl DomainError {
    pub fn is_timeout(&self) -> bool {
        matches!(self, DomainError::TransportTimeout { .. })
    }
}
