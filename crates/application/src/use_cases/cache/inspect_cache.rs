use crate::services::{AnswerCacheEntry, CacheStats, ReferralCacheEntry, ResolverCache};
use std::sync::Arc;

/// Point-in-time copy of both caches, sorted by name then record type code.
#[derive(Debug, Clone, Default)]
pub struct CacheSnapshot {
    pub answers: Vec<AnswerCacheEntry>,
    pub referrals: Vec<ReferralCacheEntry>,
    pub stats: CacheStats,
}

pub struct InspectCacheUseCase {
    cache: Arc<ResolverCache>,
}

impl InspectCacheUseCase {
    pub fn new(cache: Arc<ResolverCache>) -> Self {
        Self { cache }
    }

    pub fn execute(&self) -> CacheSnapshot {
        let mut answers = self.cache.answer_entries();
        answers.sort_by_cached_key(|entry| (entry.name.to_string(), entry.record_type.to_u16()));

        let mut referrals = self.cache.referral_entries();
        referrals.sort_by_cached_key(|entry| (entry.name.to_string(), entry.record_type.to_u16()));

        CacheSnapshot {
            answers,
            referrals,
            stats: self.cache.stats(),
        }
    }
}
