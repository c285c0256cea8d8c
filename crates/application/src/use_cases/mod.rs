pub mod bootstrap;
pub mod cache;
pub mod dns;

pub use bootstrap::SeedRootHintsUseCase;
pub use cache::{CacheSnapshot, InspectCacheUseCase};
pub use dns::{ResolveDomainUseCase, Resolution};
