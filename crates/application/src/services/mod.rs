pub mod nameserver_dispatcher;
pub mod resolver_cache;

pub use nameserver_dispatcher::{DispatchResult, NameserverDispatcher, QueryPhase};
pub use resolver_cache::{AnswerCacheEntry, CacheStats, ReferralCacheEntry, ResolverCache};
