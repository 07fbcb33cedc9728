//! Reference encoder for the v1 trie format.
//!
//! Produces the strings [`decode_encoded_variant`](crate::decode_encoded_variant)
//! reads. Encoding steps for
//! `[[0,0,0], [0,1,0], [0,1,1], [1,0,0], [1,0,1], [1,1,1], [2,0,1], [2,1,0]]`:
//!
//! 1. Build the trie of sorted, de-duplicated combinations.
//! 2. Write each inner node as `value:` followed by its children and a closing `,`.
//! 3. Write last-level values as runs (`0-1`) separated by gaps (` `).
//!
//! Result: `v1_0:0:0,1:0-1,,1:0:0-1,1:1,,2:0:1,1:0,,`. The root child list is
//! never closed, so one-dimensional sets look like `v1_0-2 4`.

use std::collections::BTreeSet;
use std::fmt::Write;

use ovc_core::OptionValueIndex;

use crate::error::CodecError;
use crate::version::EncodingVersion;

/// Encodes option value combinations as a v1 string.
///
/// Order and duplicates in the input do not matter. An empty input encodes to
/// `""`, which decodes back to an empty set.
///
/// # Errors
///
/// - [`CodecError::EmptyCombination`] if any combination has no indices
/// - [`CodecError::RaggedCombinations`] if combinations differ in length
///
/// # Examples
///
/// ```
/// use ovc_codec::{decode_encoded_variant, encode_option_values};
///
/// let combinations: [[u32; 2]; 4] = [[1, 2], [0, 0], [0, 1], [1, 0]];
/// let encoded = encode_option_values(&combinations)?;
/// assert_eq!(encoded, "v1_0:0-1,1:0 2,");
///
/// let decoded = decode_encoded_variant(Some(encoded.as_str()))?;
/// assert_eq!(decoded.to_nested_vec(), vec![vec![0, 0], vec![0, 1], vec![1, 0], vec![1, 2]]);
/// # Ok::<(), ovc_codec::CodecError>(())
/// ```
pub fn encode_option_values<C>(combinations: &[C]) -> Result<String, CodecError>
where
    C: AsRef<[OptionValueIndex]>,
{
    let Some(first) = combinations.first() else {
        return Ok(String::new());
    };

    let depth = first.as_ref().len();
    if depth == 0 {
        return Err(CodecError::EmptyCombination);
    }

    let mut unique = BTreeSet::new();
    for combination in combinations {
        let combination = combination.as_ref();
        match combination.len() {
            0 => return Err(CodecError::EmptyCombination),
            len if len != depth => {
                return Err(CodecError::RaggedCombinations {
                    expected: depth,
                    found: len,
                });
            }
            _ => {
                unique.insert(combination);
            }
        }
    }

    let sorted: Vec<&[OptionValueIndex]> = unique.into_iter().collect();
    let mut output = String::from(EncodingVersion::V1.tag());
    write_children(&mut output, &sorted, 0, depth);
    Ok(output)
}

/// Writes the children at `level` of the sorted `combinations`, which all
/// share the same prefix up to `level`.
fn write_children(
    output: &mut String,
    combinations: &[&[OptionValueIndex]],
    level: usize,
    depth: usize,
) {
    if level + 1 == depth {
        write_runs(output, combinations.iter().map(|c| c[level]));
        return;
    }

    for group in combinations.chunk_by(|a, b| a[level] == b[level]) {
        let _ = write!(output, "{}:", group[0][level]);
        write_children(output, group, level + 1, depth);
        output.push(',');
    }
}

/// Writes strictly increasing values as `a-b` runs separated by spaces.
fn write_runs(output: &mut String, values: impl Iterator<Item = OptionValueIndex>) {
    let mut run: Option<(OptionValueIndex, OptionValueIndex)> = None;

    for value in values {
        run = match run {
            Some((start, end)) if end.checked_add(1) == Some(value) => Some((start, value)),
            Some(done) => {
                write_run(output, done);
                output.push(' ');
                Some((value, value))
            }
            None => Some((value, value)),
        };
    }

    if let Some(done) = run {
        write_run(output, done);
    }
}

fn write_run(output: &mut String, (start, end): (OptionValueIndex, OptionValueIndex)) {
    if start == end {
        let _ = write!(output, "{start}");
    } else {
        let _ = write!(output, "{start}-{end}");
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;
    use crate::decode_encoded_variant;

    #[test]
    fn test_empty_input() {
        let none: [Vec<u32>; 0] = [];
        assert_eq!(encode_option_values(&none).unwrap(), "");
    }

    #[test]
    fn test_one_dimension() {
        let combinations: Vec<Vec<u32>> = vec![vec![8], vec![0], vec![1], vec![2], vec![4], vec![9], vec![5], vec![6]];
        insta::assert_snapshot!(encode_option_values(&combinations).unwrap(), @"v1_0-2 4-6 8-9");
    }

    #[test]
    fn test_three_dimensions() {
        let combinations: Vec<Vec<u32>> = vec![
            vec![0, 0, 0],
            vec![0, 1, 0],
            vec![0, 1, 1],
            vec![1, 0, 0],
            vec![1, 0, 1],
            vec![1, 1, 1],
            vec![2, 0, 1],
            vec![2, 1, 0],
        ];
        insta::assert_snapshot!(
            encode_option_values(&combinations).unwrap(),
            @"v1_0:0:0,1:0-1,,1:0:0-1,1:1,,2:0:1,1:0,,"
        );
    }

    #[test]
    fn test_duplicates_are_ignored() {
        let combinations: Vec<Vec<u32>> = vec![vec![1, 1], vec![0, 0], vec![1, 1]];
        assert_eq!(encode_option_values(&combinations).unwrap(), "v1_0:0,1:1,");
    }

    #[test]
    fn test_ragged_input() {
        let combinations: Vec<Vec<u32>> = vec![vec![0, 0, 0], vec![0, 1]];
        assert_eq!(
            encode_option_values(&combinations),
            Err(CodecError::RaggedCombinations {
                expected: 3,
                found: 2
            })
        );
    }

    #[test]
    fn test_empty_combination() {
        let combinations: Vec<Vec<u32>> = vec![vec![0], vec![]];
        assert_eq!(
            encode_option_values(&combinations),
            Err(CodecError::EmptyCombination)
        );
        let only_empty: Vec<Vec<u32>> = vec![vec![]];
        assert_eq!(
            encode_option_values(&only_empty),
            Err(CodecError::EmptyCombination)
        );
    }

    #[test]
    fn test_largest_index_does_not_overflow_runs() {
        let combinations: Vec<Vec<u32>> = vec![vec![u32::MAX - 1], vec![u32::MAX]];
        let encoded = encode_option_values(&combinations).unwrap();
        assert_eq!(encoded, format!("v1_{}-{}", u32::MAX - 1, u32::MAX));
    }

    fn combination_sets() -> impl Strategy<Value = Vec<Vec<u32>>> {
        (1usize..=4).prop_flat_map(|depth| {
            prop::collection::vec(prop::collection::vec(0u32..6, depth), 0..40)
        })
    }

    proptest! {
        #[test]
        fn test_round_trip(combinations in combination_sets()) {
            let encoded = encode_option_values(&combinations).unwrap();
            let decoded = decode_encoded_variant(Some(encoded.as_str())).unwrap().to_nested_vec();

            let mut expected = combinations.clone();
            expected.sort();
            expected.dedup();
            prop_assert_eq!(decoded, expected);
        }
    }
}
