use crate::ports::BootstrapResolver;
use crate::services::ResolverCache;
use ferrous_resolver_domain::{DomainError, DomainName, RecordType};
use std::sync::Arc;
use tracing::{debug, info};

/// Seeds the referral cache with the root nameservers and their addresses.
///
/// This is the only step that trusts an outside recursive resolver. Any
/// failure is fatal: without root hints no resolution can start.
pub struct SeedRootHintsUseCase {
    cache: Arc<ResolverCache>,
    resolver: Arc<dyn BootstrapResolver>,
}

impl SeedRootHintsUseCase {
    pub fn new(cache: Arc<ResolverCache>, resolver: Arc<dyn BootstrapResolver>) -> Self {
        Self { cache, resolver }
    }

    /// Returns the number of root nameservers seeded.
    pub async fn execute(&self) -> Result<usize, DomainError> {
        let root = DomainName::root();
        let root_ns = self
            .resolver
            .lookup(&root, RecordType::NS)
            .await
            .map_err(|e| DomainError::BootstrapFailed(format!("root NS lookup failed: {}", e)))?;

        if root_ns.targets().next().is_none() {
            return Err(DomainError::BootstrapFailed(
                "root NS lookup returned no nameservers".to_string(),
            ));
        }

        info!(nameservers = %root_ns.items_text(), "Root nameservers received");

        let mut seeded = 0;
        for nameserver in root_ns.targets() {
            let addresses = self
                .resolver
                .lookup(nameserver, RecordType::A)
                .await
                .map_err(|e| {
                    DomainError::BootstrapFailed(format!(
                        "address lookup for {} failed: {}",
                        nameserver, e
                    ))
                })?;

            if addresses.ipv4_addresses().next().is_none() {
                return Err(DomainError::BootstrapFailed(format!(
                    "no IPv4 address for root nameserver {}",
                    nameserver
                )));
            }

            debug!(nameserver = %nameserver, addresses = %addresses.items_text(), "Root nameserver address cached");
            self.cache
                .insert_delegation(nameserver.clone(), RecordType::A, addresses);
            seeded += 1;
        }

        self.cache.insert_delegation(root, RecordType::NS, root_ns);
        info!(nameservers = seeded, "Root hints seeded");
        Ok(seeded)
    }
}
