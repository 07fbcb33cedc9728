//! Fast hash map and hash set type aliases.
//!
//! The codec keys its maps by encoded strings and short integer slices, both
//! produced internally or by a trusted storefront API, so the Fx hash from
//! `rustc-hash` is used instead of the DoS-resistant std hasher.
//!
//! ```
//! use ovc_core::{FxHashMap, fx_hash_map_with_capacity};
//!
//! let mut positions: FxHashMap<&str, u32> = fx_hash_map_with_capacity(8);
//! positions.insert("Red", 0);
//! assert_eq!(positions.get("Red"), Some(&0));
//! ```

/// A [`HashMap`](std::collections::HashMap) using the Fx hash algorithm.
pub type FxHashMap<K, V> = rustc_hash::FxHashMap<K, V>;

/// A [`HashSet`](std::collections::HashSet) using the Fx hash algorithm.
pub type FxHashSet<V> = rustc_hash::FxHashSet<V>;

/// Creates a new [`FxHashMap`] able to hold at least `capacity` entries
/// without reallocating.
#[inline]
#[must_use]
pub fn fx_hash_map_with_capacity<K, V>(capacity: usize) -> FxHashMap<K, V> {
    FxHashMap::with_capacity_and_hasher(capacity, rustc_hash::FxBuildHasher)
}

/// Creates a new [`FxHashSet`] able to hold at least `capacity` elements
/// without reallocating.
///
/// # Examples
///
/// ```
/// use ovc_core::fx_hash_set_with_capacity;
///
/// let set: ovc_core::FxHashSet<Vec<u32>> = fx_hash_set_with_capacity(16);
/// assert!(set.capacity() >= 16);
/// ```
#[inline]
#[must_use]
pub fn fx_hash_set_with_capacity<V>(capacity: usize) -> FxHashSet<V> {
    FxHashSet::with_capacity_and_hasher(capacity, rustc_hash::FxBuildHasher)
}
