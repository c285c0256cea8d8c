mod inspect_cache;

pub use inspect_cache::{CacheSnapshot, InspectCacheUseCase};
