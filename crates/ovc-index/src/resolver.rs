//! Option value label to index resolution.
//!
//! Converts labels such as `["Red", "Large"]` into positions within a
//! product's ordered option value lists, producing lookup keys for the
//! [`ExistenceIndex`](crate::ExistenceIndex).

use ovc_core::{OptionValueCombination, OptionValueIndex};

use crate::error::IndexError;

/// Resolves each target label to its position in the matching parent list.
///
/// `target_option_values[i]` is looked up in `parent_option_value_lists[i]`
/// with an exact, case-sensitive comparison; the first match wins. Fewer
/// targets than lists is a prefix lookup and only the first lists are read.
///
/// # Errors
///
/// - [`IndexError::InsufficientOptions`] if there are more targets than lists,
///   reported before any lookup
/// - [`IndexError::OptionValueNotFound`] naming the first label with no match
///
/// # Examples
///
/// ```
/// use ovc_index::get_option_value_indices;
///
/// let lists = [
///     vec!["red", "blue", "green"],
///     vec!["small", "medium", "large"],
///     vec!["cotton", "polyester", "wool"],
/// ];
///
/// let indices = get_option_value_indices(&["red", "medium", "cotton"], &lists)?;
/// assert_eq!(indices.as_slice(), &[0, 1, 0]);
///
/// let prefix = get_option_value_indices(&["red", "medium"], &lists)?;
/// assert_eq!(prefix.as_slice(), &[0, 1]);
/// # Ok::<(), ovc_index::IndexError>(())
/// ```
pub fn get_option_value_indices<T, L, S>(
    target_option_values: &[T],
    parent_option_value_lists: &[L],
) -> Result<OptionValueCombination, IndexError>
where
    T: AsRef<str>,
    L: AsRef<[S]>,
    S: AsRef<str>,
{
    if target_option_values.len() > parent_option_value_lists.len() {
        return Err(IndexError::InsufficientOptions {
            targets: target_option_values.len(),
            options: parent_option_value_lists.len(),
        });
    }

    target_option_values
        .iter()
        .zip(parent_option_value_lists)
        .map(|(target, parent)| -> Result<OptionValueIndex, IndexError> {
            let target = target.as_ref();
            let position = parent
                .as_ref()
                .iter()
                .position(|value| value.as_ref() == target)
                .ok_or_else(|| IndexError::OptionValueNotFound {
                    value: target.to_owned(),
                })?;

            OptionValueIndex::try_from(position)
                .map_err(|_| IndexError::PositionOverflow { position })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lists() -> Vec<Vec<&'static str>> {
        vec![
            vec!["red", "blue", "green"],
            vec!["small", "medium", "large"],
            vec!["cotton", "polyester", "wool"],
        ]
    }

    #[test]
    fn test_full_lookup() {
        let indices = get_option_value_indices(&["red", "medium", "cotton"], &lists()).unwrap();
        assert_eq!(indices.as_slice(), &[0, 1, 0]);

        let indices = get_option_value_indices(&["green", "large", "wool"], &lists()).unwrap();
        assert_eq!(indices.as_slice(), &[2, 2, 2]);
    }

    #[test]
    fn test_partial_lookup() {
        let indices = get_option_value_indices(&["red", "medium"], &lists()).unwrap();
        assert_eq!(indices.as_slice(), &[0, 1]);
    }

    #[test]
    fn test_empty_targets() {
        let none: [&str; 0] = [];
        assert!(get_option_value_indices(&none, &lists()).unwrap().is_empty());
    }

    #[test]
    fn test_value_not_found() {
        let err = get_option_value_indices(&["red", "fantastic", "cotton"], &lists()).unwrap_err();
        assert_eq!(
            err,
            IndexError::OptionValueNotFound {
                value: "fantastic".to_owned()
            }
        );
        assert!(err.to_string().contains("fantastic"));
    }

    #[test]
    fn test_lookup_is_case_sensitive() {
        let err = get_option_value_indices(&["Red"], &lists()).unwrap_err();
        assert!(matches!(err, IndexError::OptionValueNotFound { .. }));
    }

    #[test]
    fn test_too_many_targets() {
        let all = lists();
        let err = get_option_value_indices(&["red", "small", "cotton"], &all[..2]).unwrap_err();
        assert_eq!(
            err,
            IndexError::InsufficientOptions {
                targets: 3,
                options: 2
            }
        );
    }

    #[test]
    fn test_too_many_targets_reported_before_lookup() {
        // "fantastic" would fail the lookup, but the count check comes first.
        let all = lists();
        let err = get_option_value_indices(&["fantastic", "small", "cotton"], &all[..2]).unwrap_err();
        assert!(matches!(err, IndexError::InsufficientOptions { .. }));
    }

    #[test]
    fn test_first_match_wins() {
        let parents = [vec!["a".to_owned(), "b".to_owned(), "a".to_owned()]];
        let indices = get_option_value_indices(&[String::from("a")], &parents).unwrap();
        assert_eq!(indices.as_slice(), &[0]);
    }
}
