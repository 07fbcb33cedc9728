//! Cache statistics with atomic counters.
//!
//! [`CacheStats`] counts lookups against an
//! [`ExistenceIndex`](crate::ExistenceIndex); [`CacheStatsSnapshot`] is a
//! point-in-time copy for display.
//!
//! All counters use [`Relaxed`](std::sync::atomic::Ordering::Relaxed)
//! ordering. They are informational and never drive control flow.

use std::sync::atomic::{AtomicU64, Ordering};

use serde::{Deserialize, Serialize};

/// Atomic counters for existence index lookups.
///
/// # Examples
///
/// ```
/// use ovc_index::CacheStats;
///
/// let stats = CacheStats::new();
/// stats.increment_misses();
/// stats.increment_builds();
/// stats.increment_hits();
///
/// let snap = stats.snapshot();
/// assert_eq!(snap.lookups(), 2);
/// assert!((snap.hit_rate_percent() - 50.0).abs() < f64::EPSILON);
/// ```
#[derive(Debug, Default)]
pub struct CacheStats {
    /// Lookups answered from an existing entry.
    hits: AtomicU64,
    /// Lookups that found no entry.
    misses: AtomicU64,
    /// Combination sets decoded and built.
    builds: AtomicU64,
}

impl CacheStats {
    /// Creates a new [`CacheStats`] with all counters at zero.
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Increments the hit counter.
    #[inline]
    pub fn increment_hits(&self) {
        self.hits.fetch_add(1, Ordering::Relaxed);
    }

    /// Increments the miss counter.
    #[inline]
    pub fn increment_misses(&self) {
        self.misses.fetch_add(1, Ordering::Relaxed);
    }

    /// Increments the build counter.
    ///
    /// Concurrent misses on the same string may each build a set, so
    /// `builds` can exceed the number of entries.
    #[inline]
    pub fn increment_builds(&self) {
        self.builds.fetch_add(1, Ordering::Relaxed);
    }

    /// Returns a point-in-time snapshot of all counters.
    #[must_use]
    pub fn snapshot(&self) -> CacheStatsSnapshot {
        CacheStatsSnapshot {
            hits: self.hits.load(Ordering::Relaxed),
            misses: self.misses.load(Ordering::Relaxed),
            builds: self.builds.load(Ordering::Relaxed),
        }
    }
}

/// A point-in-time copy of [`CacheStats`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CacheStatsSnapshot {
    /// Lookups answered from an existing entry.
    pub hits: u64,
    /// Lookups that found no entry.
    pub misses: u64,
    /// Combination sets decoded and built.
    pub builds: u64,
}

impl CacheStatsSnapshot {
    /// Returns the total number of lookups.
    #[inline]
    #[must_use]
    pub const fn lookups(&self) -> u64 {
        self.hits + self.misses
    }

    /// Returns the share of lookups served from the cache, as a percentage.
    ///
    /// Returns 0.0 before the first lookup.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn hit_rate_percent(&self) -> f64 {
        let lookups = self.lookups();
        if lookups == 0 {
            return 0.0;
        }
        (self.hits as f64 / lookups as f64) * 100.0
    }
}
