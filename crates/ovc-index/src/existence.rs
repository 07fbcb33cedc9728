//! Memoized existence index over encoded variant fields.
//!
//! This module provides [`CombinationSet`], the prefix-closed set built from
//! one decoded string, and [`ExistenceIndex`], a thread-safe memo map from
//! encoded strings to their sets.
//!
//! # Cache Pattern
//!
//! Entries are never evicted: encoded strings are immutable snapshots and the
//! number of distinct strings seen by one process is bounded by the products
//! it renders. Population is optimistic:
//!
//! - **Read lock** to look for an existing set
//! - **No lock held** while decoding and building
//! - **Write lock** only to insert-if-absent
//!
//! Two threads missing on the same string may both build; the first insert
//! wins and both answer from identical sets.
//!
//! # Examples
//!
//! ```
//! use ovc_index::ExistenceIndex;
//!
//! let index = ExistenceIndex::new();
//! let encoded = "v1_0:0:0,,1:1:1,,2:2:2,,";
//!
//! assert!(index.contains(&[0, 0, 0], encoded)?);
//! assert!(index.contains(&[1], encoded)?);
//! assert!(!index.contains(&[0, 0, 1], encoded)?);
//! assert_eq!(index.len(), 1);
//! # Ok::<(), ovc_codec::CodecError>(())
//! ```

use std::sync::{Arc, OnceLock};

use ovc_codec::{CodecError, Decoder};
use ovc_core::{
    CacheConfig, DecodeConfig, DecodedOptionValues, FxHashMap, FxHashSet, OptionValueCombination,
    OptionValueIndex, fx_hash_map_with_capacity, fx_hash_set_with_capacity,
};
use parking_lot::RwLock;
use tracing::{debug, trace};

use crate::stats::{CacheStats, CacheStatsSnapshot};

/// Every decoded combination together with all of its non-empty prefixes.
///
/// A decoded `[a, b, c]` makes `[a]`, `[a, b]` and `[a, b, c]` members, so
/// partial targets answer "does any variant start with this?".
///
/// # Examples
///
/// ```
/// use ovc_codec::decode_encoded_variant;
/// use ovc_index::CombinationSet;
///
/// let decoded = decode_encoded_variant(Some("v1_0:1-2,"))?;
/// let set = CombinationSet::from_decoded(&decoded);
///
/// assert!(set.contains(&[0]));
/// assert!(set.contains(&[0, 2]));
/// assert!(!set.contains(&[0, 0]));
/// assert!(!set.contains(&[]));
/// assert_eq!(set.combination_count(), 2);
/// # Ok::<(), ovc_codec::CodecError>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct CombinationSet {
    keys: FxHashSet<OptionValueCombination>,
    combinations: usize,
}

impl CombinationSet {
    /// Builds the prefix-closed set for decoded combinations.
    #[must_use]
    pub fn from_decoded(decoded: &DecodedOptionValues) -> Self {
        let mut keys = fx_hash_set_with_capacity(decoded.len() * decoded.depth());

        for combination in decoded {
            for end in 1..=combination.len() {
                keys.insert(OptionValueCombination::from_slice(&combination[..end]));
            }
        }

        Self {
            keys,
            combinations: decoded.len(),
        }
    }

    /// Returns `true` if `target` is a decoded combination or a prefix of one.
    ///
    /// An empty target never matches.
    #[inline]
    #[must_use]
    pub fn contains(&self, target: &[OptionValueIndex]) -> bool {
        !target.is_empty() && self.keys.contains(target)
    }

    /// Returns the number of decoded combinations the set was built from.
    #[inline]
    #[must_use]
    pub fn combination_count(&self) -> usize {
        self.combinations
    }

    /// Returns the number of distinct combinations and prefixes stored.
    #[inline]
    #[must_use]
    pub fn key_count(&self) -> usize {
        self.keys.len()
    }
}

/// Thread-safe memo map from encoded strings to [`CombinationSet`]s.
///
/// `ExistenceIndex` is `Send` and `Sync`; share it by reference or use the
/// process-wide instance behind
/// [`is_option_value_combination_in_encoded_variant`].
#[derive(Debug, Default)]
pub struct ExistenceIndex {
    decoder: Decoder,
    sets: RwLock<FxHashMap<Arc<str>, Arc<CombinationSet>>>,
    stats: CacheStats,
}

impl ExistenceIndex {
    /// Creates an empty index with no decode limit.
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty index with the given decode limits and sizing.
    ///
    /// # Examples
    ///
    /// ```
    /// use ovc_core::{CacheConfig, DecodeConfig};
    /// use ovc_index::ExistenceIndex;
    ///
    /// let index = ExistenceIndex::with_config(
    ///     DecodeConfig { max_combinations: Some(3) },
    ///     CacheConfig::default(),
    /// );
    /// assert!(index.contains(&[2], "v1_0-2")?);
    /// assert!(index.contains(&[3], "v1_0-3").is_err());
    /// # Ok::<(), ovc_codec::CodecError>(())
    /// ```
    #[must_use]
    pub fn with_config(decode: DecodeConfig, cache: CacheConfig) -> Self {
        Self {
            decoder: Decoder::new(decode),
            sets: RwLock::new(fx_hash_map_with_capacity(cache.initial_capacity)),
            stats: CacheStats::new(),
        }
    }

    /// Returns the combination set for `encoded`, building it on first use.
    ///
    /// # Errors
    ///
    /// Returns the [`CodecError`] from decoding `encoded`. Failed decodes are
    /// not cached.
    pub fn combination_set(&self, encoded: &str) -> Result<Arc<CombinationSet>, CodecError> {
        if let Some(set) = self.sets.read().get(encoded) {
            self.stats.increment_hits();
            trace!(encoded_len = encoded.len(), "Existence index hit");
            return Ok(Arc::clone(set));
        }
        self.stats.increment_misses();

        let decoded = self.decoder.decode(Some(encoded))?;
        let built = Arc::new(CombinationSet::from_decoded(&decoded));
        self.stats.increment_builds();
        debug!(
            encoded_len = encoded.len(),
            combinations = built.combination_count(),
            keys = built.key_count(),
            "Built combination set"
        );

        let mut sets = self.sets.write();
        let entry = sets.entry(Arc::from(encoded)).or_insert(built);
        Ok(Arc::clone(entry))
    }

    /// Returns `true` if `target`, fully or as a prefix, is encoded in
    /// `encoded`.
    ///
    /// An empty target returns `false` without decoding.
    ///
    /// # Errors
    ///
    /// Returns the [`CodecError`] from decoding `encoded`, e.g. for an
    /// unsupported version tag.
    pub fn contains(
        &self,
        target: &[OptionValueIndex],
        encoded: &str,
    ) -> Result<bool, CodecError> {
        if target.is_empty() {
            return Ok(false);
        }
        Ok(self.combination_set(encoded)?.contains(target))
    }

    /// Returns the number of cached encoded strings.
    #[must_use]
    pub fn len(&self) -> usize {
        self.sets.read().len()
    }

    /// Returns `true` if nothing has been cached yet.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.sets.read().is_empty()
    }

    /// Returns a snapshot of the lookup counters.
    #[must_use]
    pub fn stats(&self) -> CacheStatsSnapshot {
        self.stats.snapshot()
    }
}

/// Process-wide index used by [`is_option_value_combination_in_encoded_variant`].
static GLOBAL_INDEX: OnceLock<ExistenceIndex> = OnceLock::new();

/// Returns the process-wide [`ExistenceIndex`].
///
/// Created empty on first use and never cleared.
pub fn global_index() -> &'static ExistenceIndex {
    GLOBAL_INDEX.get_or_init(ExistenceIndex::new)
}

/// Returns `true` if `target`, fully or as a prefix, is encoded in `encoded`.
///
/// Memoized per literal `encoded` value for the lifetime of the process.
///
/// # Errors
///
/// Returns the [`CodecError`] from decoding `encoded`.
///
/// # Examples
///
/// ```
/// use ovc_index::is_option_value_combination_in_encoded_variant;
///
/// let encoded = "v1_0:0:0,,1:1:1,,2:2:2,,";
/// assert!(is_option_value_combination_in_encoded_variant(&[2, 2], encoded)?);
/// assert!(!is_option_value_combination_in_encoded_variant(&[], encoded)?);
/// # Ok::<(), ovc_codec::CodecError>(())
/// ```
pub fn is_option_value_combination_in_encoded_variant(
    target: &[OptionValueIndex],
    encoded: &str,
) -> Result<bool, CodecError> {
    global_index().contains(target, encoded)
}

#[cfg(test)]
mod tests {
    use std::thread;

    use super::*;

    const FIELD: &str = "v1_0:0:0,,1:1:1,,2:2:2,,";

    #[test]
    fn test_exact_match() {
        let index = ExistenceIndex::new();
        assert!(index.contains(&[0, 0, 0], FIELD).unwrap());
        assert!(index.contains(&[2, 2, 2], FIELD).unwrap());
    }

    #[test]
    fn test_prefix_match() {
        let index = ExistenceIndex::new();
        assert!(index.contains(&[1], FIELD).unwrap());
        assert!(index.contains(&[0], FIELD).unwrap());
        assert!(index.contains(&[2, 2], FIELD).unwrap());
    }

    #[test]
    fn test_negative_match() {
        let index = ExistenceIndex::new();
        assert!(!index.contains(&[0, 0, 1], FIELD).unwrap());
        assert!(!index.contains(&[3], FIELD).unwrap());
        assert!(!index.contains(&[0, 0, 0, 0], FIELD).unwrap());
    }

    #[test]
    fn test_empty_target_never_matches() {
        let index = ExistenceIndex::new();
        assert!(!index.contains(&[], FIELD).unwrap());
        // Not even decoded: an unsupported field is not reported.
        assert!(!index.contains(&[], "v9_garbage").unwrap());
        assert!(index.is_empty());
    }

    #[test]
    fn test_empty_field_contains_nothing() {
        let index = ExistenceIndex::new();
        assert!(!index.contains(&[0], "").unwrap());
    }

    #[test]
    fn test_unsupported_encoding_propagates() {
        let index = ExistenceIndex::new();
        let err = index.contains(&[0], "v2_0:0").unwrap_err();
        assert!(matches!(err, CodecError::UnsupportedEncoding { .. }));
        assert!(index.is_empty());
    }

    #[test]
    fn test_repeated_lookups_match_baseline() {
        let baseline = ExistenceIndex::new();
        let targets: [&[u32]; 5] = [&[0, 0, 0], &[1], &[0, 0, 1], &[2, 2], &[1, 2]];
        let expected: Vec<bool> = targets
            .iter()
            .map(|t| baseline.contains(t, FIELD).unwrap())
            .collect();

        let index = ExistenceIndex::new();
        for _ in 0..50 {
            let actual: Vec<bool> = targets
                .iter()
                .map(|t| index.contains(t, FIELD).unwrap())
                .collect();
            assert_eq!(actual, expected);
        }

        assert_eq!(index.len(), 1);
        let stats = index.stats();
        assert_eq!(stats.builds, 1);
        assert_eq!(stats.misses, 1);
        assert_eq!(stats.hits, 249);
    }

    #[test]
    fn test_entries_keyed_by_literal_string() {
        let index = ExistenceIndex::new();
        index.contains(&[0], "v1_0-2").unwrap();
        index.contains(&[0], "v1_0-2 ").unwrap();
        index.contains(&[0], "v1_0-2").unwrap();
        assert_eq!(index.len(), 2);
    }

    #[test]
    fn test_concurrent_lookups_converge() {
        let index = ExistenceIndex::new();

        thread::scope(|scope| {
            for _ in 0..8 {
                scope.spawn(|| {
                    for _ in 0..100 {
                        assert!(index.contains(&[1, 1], FIELD).unwrap());
                        assert!(!index.contains(&[1, 0], FIELD).unwrap());
                    }
                });
            }
        });

        assert_eq!(index.len(), 1);
        let stats = index.stats();
        assert_eq!(stats.lookups(), 1600);
        assert!(stats.builds >= 1);
    }

    #[test]
    fn test_combination_set_counts() {
        let index = ExistenceIndex::new();
        let set = index.combination_set(FIELD).unwrap();
        assert_eq!(set.combination_count(), 3);
        // [a], [a,b], [a,b,c] for three disjoint paths
        assert_eq!(set.key_count(), 9);
    }

    #[test]
    fn test_global_index_is_shared() {
        let field = "v1_0:4-5,";
        assert!(is_option_value_combination_in_encoded_variant(&[0, 5], field).unwrap());
        assert!(global_index().combination_set(field).is_ok());
        assert!(std::ptr::eq(global_index(), global_index()));
    }
}
