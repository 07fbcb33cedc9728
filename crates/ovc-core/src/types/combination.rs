//! Option value combinations.
//!
//! An [`OptionValueCombination`] holds one [`OptionValueIndex`] per option,
//! ordered like the product's options. [`DecodedOptionValues`] is the list of
//! full-depth combinations one encoded string describes.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

/// Position of a value within one option's ordered value list (0-based).
pub type OptionValueIndex = u32;

/// One index per option, naming a variant (or a prefix of one).
///
/// Uses `SmallVec<[OptionValueIndex; 4]>` because products rarely have more
/// than four options, so typical combinations stay inline.
pub type OptionValueCombination = SmallVec<[OptionValueIndex; 4]>;

/// The combinations represented by one encoded variant field.
///
/// Combinations are kept in the order the decoder emits them, which for
/// encoder-produced strings is ascending lexicographic order.
///
/// # Examples
///
/// ```
/// use ovc_core::DecodedOptionValues;
/// use smallvec::smallvec;
///
/// let decoded = DecodedOptionValues::from(vec![smallvec![0, 1], smallvec![1, 0]]);
/// assert_eq!(decoded.len(), 2);
/// assert_eq!(decoded.to_nested_vec(), vec![vec![0, 1], vec![1, 0]]);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DecodedOptionValues {
    combinations: Vec<OptionValueCombination>,
}

impl DecodedOptionValues {
    /// Creates an empty set.
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a combination.
    #[inline]
    pub fn push(&mut self, combination: OptionValueCombination) {
        self.combinations.push(combination);
    }

    /// Returns the number of combinations.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.combinations.len()
    }

    /// Returns `true` if no combinations were decoded.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.combinations.is_empty()
    }

    /// Returns an iterator over the combinations.
    pub fn iter(&self) -> std::slice::Iter<'_, OptionValueCombination> {
        self.combinations.iter()
    }

    /// Returns the combinations as a slice.
    #[inline]
    #[must_use]
    pub fn as_slice(&self) -> &[OptionValueCombination] {
        &self.combinations
    }

    /// Returns the length of the longest combination, or 0 when empty.
    #[must_use]
    pub fn depth(&self) -> usize {
        self.combinations.iter().map(SmallVec::len).max().unwrap_or(0)
    }

    /// Copies the combinations into plain nested vectors.
    #[must_use]
    pub fn to_nested_vec(&self) -> Vec<Vec<OptionValueIndex>> {
        self.combinations.iter().map(|c| c.to_vec()).collect()
    }
}

impl From<Vec<OptionValueCombination>> for DecodedOptionValues {
    fn from(combinations: Vec<OptionValueCombination>) -> Self {
        Self { combinations }
    }
}

impl IntoIterator for DecodedOptionValues {
    type Item = OptionValueCombination;
    type IntoIter = std::vec::IntoIter<OptionValueCombination>;

    fn into_iter(self) -> Self::IntoIter {
        self.combinations.into_iter()
    }
}

impl<'a> IntoIterator for &'a DecodedOptionValues {
    type Item = &'a OptionValueCombination;
    type IntoIter = std::slice::Iter<'a, OptionValueCombination>;

    fn into_iter(self) -> Self::IntoIter {
        self.combinations.iter()
    }
}

#[cfg(test)]
mod tests {
    use smallvec::smallvec;

    use super::*;

    #[test]
    fn test_depth() {
        assert_eq!(DecodedOptionValues::new().depth(), 0);

        let decoded = DecodedOptionValues::from(vec![smallvec![0], smallvec![0, 1, 2]]);
        assert_eq!(decoded.depth(), 3);
    }

    #[test]
    fn test_serializes_as_nested_arrays() {
        let decoded = DecodedOptionValues::from(vec![smallvec![0, 0], smallvec![2, 1]]);
        insta::assert_snapshot!(serde_json::to_string(&decoded).unwrap(), @"[[0,0],[2,1]]");
    }

    #[test]
    fn test_push_and_iterate() {
        let mut decoded = DecodedOptionValues::new();
        decoded.push(smallvec![3]);
        decoded.push(smallvec![4]);

        let firsts: Vec<u32> = decoded.iter().map(|c| c[0]).collect();
        assert_eq!(firsts, vec![3, 4]);
        assert!(!decoded.is_empty());
    }
}
