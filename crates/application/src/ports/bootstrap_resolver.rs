use async_trait::async_trait;
use ferrous_resolver_domain::{DomainError, DomainName, RecordSet, RecordType};

/// Pre-trusted recursive resolver, used once to learn the root nameservers.
#[async_trait]
pub trait BootstrapResolver: Send + Sync {
    /// Returns the answer record set for (name, type).
    async fn lookup(
        &self,
        name: &DomainName,
        record_type: RecordType,
    ) -> Result<RecordSet, DomainError>;
}
