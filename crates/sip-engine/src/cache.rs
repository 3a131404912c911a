//! Projection memoization using moka
//!
//! Keys are the bit patterns of the three inputs, so `0.0` and `-0.0` are
//! distinct entries and every NaN payload is its own key. Both cases only
//! cost a recomputation.

use crate::projector::Projector;
use moka::sync::Cache;
use sip_model::{ProjectionResult, SipParameters};
use std::sync::Arc;

/// Statistics for cache monitoring
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CacheStats {
    /// Number of entries in cache
    pub entry_count: u64,
}

/// Cache key built from the exact input bits
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ParamKey([u64; 3]);

impl From<&SipParameters> for ParamKey {
    fn from(params: &SipParameters) -> Self {
        Self([
            params.monthly_contribution.to_bits(),
            params.annual_growth_rate_percent.to_bits(),
            params.duration_years.to_bits(),
        ])
    }
}

/// Bounded cache of projection results
#[derive(Debug, Clone)]
pub struct ProjectionCache {
    inner: Cache<ParamKey, Arc<ProjectionResult>>,
    projector: Projector,
}

impl ProjectionCache {
    /// Create cache with max capacity
    #[inline]
    #[must_use]
    pub fn new(max_capacity: u64) -> Self {
        Self {
            inner: Cache::new(max_capacity),
            projector: Projector::new(),
        }
    }

    /// Cached result, projecting and storing it on a miss
    pub fn get_or_project(&self, params: &SipParameters) -> Arc<ProjectionResult> {
        let entry = self
            .inner
            .entry(ParamKey::from(params))
            .or_insert_with(|| Arc::new(self.projector.project(params)));

        if entry.is_fresh() {
            tracing::trace!(?params, "projection cache miss");
        } else {
            tracing::trace!(?params, "projection cache hit");
        }

        entry.into_value()
    }

    /// Cached result without computing
    #[inline]
    #[must_use]
    pub fn get(&self, params: &SipParameters) -> Option<Arc<ProjectionResult>> {
        self.inner.get(&ParamKey::from(params))
    }

    /// Check if a result is cached for these parameters
    #[inline]
    #[must_use]
    pub fn contains(&self, params: &SipParameters) -> bool {
        self.inner.contains_key(&ParamKey::from(params))
    }

    /// Invalidate all entries
    #[inline]
    pub fn invalidate_all(&self) {
        self.inner.invalidate_all();
    }

    /// Apply pending maintenance so counts are current
    #[inline]
    pub fn sync(&self) {
        self.inner.run_pending_tasks();
    }

    /// Get cache statistics
    #[inline]
    #[must_use]
    pub fn stats(&self) -> CacheStats {
        CacheStats {
            entry_count: self.inner.entry_count(),
        }
    }
}

impl Default for ProjectionCache {
    /// Create cache with default capacity (1,024 entries)
    fn default() -> Self {
        Self::new(1_024)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn caches_by_value() {
        let cache = ProjectionCache::new(16);
        let params = SipParameters::new(5_000.0, 12.0, 10.0);

        assert!(!cache.contains(&params));
        let first = cache.get_or_project(&params);
        assert!(cache.contains(&params));

        let second = cache.get_or_project(&params);
        assert!(Arc::ptr_eq(&first, &second));
        assert_eq!(first.maturity_value, 1_161_695);
    }

    #[test]
    fn distinct_inputs_are_distinct_entries() {
        let cache = ProjectionCache::new(16);
        let a = cache.get_or_project(&SipParameters::new(1_000.0, 8.0, 5.0));
        let b = cache.get_or_project(&SipParameters::new(1_000.0, 9.0, 5.0));
        assert!(b.maturity_value > a.maturity_value);

        cache.sync();
        assert_eq!(cache.stats().entry_count, 2);
    }

    #[test]
    fn invalidate_all_clears_entries() {
        let cache = ProjectionCache::default();
        let params = SipParameters::default();
        cache.get_or_project(&params);

        cache.invalidate_all();
        cache.sync();
        assert!(cache.get(&params).is_none());
        assert_eq!(cache.stats().entry_count, 0);
    }
}
