use ferrous_resolver_application::ports::{BootstrapResolver, NameserverClient};
use ferrous_resolver_application::services::ResolverCache;
use ferrous_resolver_application::use_cases::{
    InspectCacheUseCase, ResolveDomainUseCase, SeedRootHintsUseCase,
};
use ferrous_resolver_domain::Config;
use ferrous_resolver_infrastructure::dns::{UdpNameserverClient, UpstreamBootstrapResolver};
use std::sync::Arc;

/// Everything the command loop needs, sharing one resolver context.
pub struct ResolverServices {
    pub seed_root_hints: Arc<SeedRootHintsUseCase>,
    pub resolve: Arc<ResolveDomainUseCase>,
    pub inspect_cache: Arc<InspectCacheUseCase>,
}

impl ResolverServices {
    pub fn new(config: &Config) -> Self {
        let client: Arc<dyn NameserverClient> =
            Arc::new(UdpNameserverClient::from_config(&config.resolver));
        let bootstrap: Arc<dyn BootstrapResolver> =
            Arc::new(UpstreamBootstrapResolver::from_config(&config.bootstrap));
        Self::with_ports(config, client, bootstrap)
    }

    pub fn with_ports(
        config: &Config,
        client: Arc<dyn NameserverClient>,
        bootstrap: Arc<dyn BootstrapResolver>,
    ) -> Self {
        let cache = Arc::new(ResolverCache::new());

        Self {
            seed_root_hints: Arc::new(SeedRootHintsUseCase::new(cache.clone(), bootstrap)),
            resolve: Arc::new(ResolveDomainUseCase::new(
                cache.clone(),
                client,
                &config.resolver,
            )),
            inspect_cache: Arc::new(InspectCacheUseCase::new(cache)),
        }
    }
}
