mod bootstrap_resolver;
mod nameserver_client;

pub use bootstrap_resolver::BootstrapResolver;
pub use nameserver_client::{NameserverClient, QueryOutcome};

// Re-export for convenience
pub use ferrous_resolver_domain::DnsQuery;
