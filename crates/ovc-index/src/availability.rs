//! Existence and availability of every option value for a selection.
//!
//! For each option value the candidate selection is the current one with that
//! option swapped to the value. The labels of that option and all earlier
//! options are resolved to indices and checked top-down against the
//! product's two encoded fields, so a value is reported as existing when any
//! variant starts with that prefix.

use ovc_core::{OptionStates, OptionValueState, Product, SelectedOptions};

use crate::error::IndexError;
use crate::existence::ExistenceIndex;
use crate::resolver::get_option_value_indices;

/// Computes [`OptionStates`] for every option of `product`.
///
/// Missing encoded fields are treated as empty (nothing exists). When an
/// earlier option has no selected value the prefix is unknown and the value
/// is reported as neither existing nor available.
///
/// # Errors
///
/// - [`IndexError::OptionValueNotFound`] if a selected label is not one of
///   its option's values, checked for every option before any lookup
/// - [`IndexError::Codec`] if an encoded field cannot be decoded
///
/// # Examples
///
/// ```
/// use ovc_core::{Product, ProductOption, SelectedOptions};
/// use ovc_index::{ExistenceIndex, option_value_states};
///
/// let product = Product {
///     handle: "tee".to_owned(),
///     options: vec![
///         ProductOption::new("Color", ["Red", "Blue"]),
///         ProductOption::new("Size", ["S", "M"]),
///     ],
///     // Red/S, Red/M, Blue/M exist; only Red/M is in stock.
///     encoded_variant_existence: Some("v1_0:0-1,1:1,".to_owned()),
///     encoded_variant_availability: Some("v1_0:1,".to_owned()),
/// };
///
/// let mut selected = SelectedOptions::default();
/// selected.insert("Color".to_owned(), "Blue".to_owned());
///
/// let states = option_value_states(&product, &selected, &ExistenceIndex::new())?;
/// let sizes = &states[1];
/// assert!(!sizes.value("S").is_some_and(|s| s.exists));
/// assert!(sizes.value("M").is_some_and(|s| s.exists && !s.available));
/// # Ok::<(), ovc_index::IndexError>(())
/// ```
pub fn option_value_states(
    product: &Product,
    selected: &SelectedOptions,
    index: &ExistenceIndex,
) -> Result<Vec<OptionStates>, IndexError> {
    for option in &product.options {
        let unknown = selected
            .get(&option.name)
            .filter(|label| option.position_of(label).is_none());
        if let Some(label) = unknown {
            return Err(IndexError::OptionValueNotFound {
                value: label.clone(),
            });
        }
    }

    let lists = product.option_value_lists();
    let existence = product.encoded_variant_existence.as_deref().unwrap_or("");
    let availability = product
        .encoded_variant_availability
        .as_deref()
        .unwrap_or("");

    product
        .options
        .iter()
        .enumerate()
        .map(|(position, option)| -> Result<OptionStates, IndexError> {
            let prefix: Option<Vec<&str>> = product.options[..position]
                .iter()
                .map(|earlier| selected.get(&earlier.name).map(String::as_str))
                .collect();
            let current = selected.get(&option.name).map(String::as_str);

            let values = option
                .value_names()
                .map(|value| -> Result<OptionValueState, IndexError> {
                    let (exists, available) = match &prefix {
                        Some(prefix) => {
                            let mut labels = prefix.clone();
                            labels.push(value);
                            let key = get_option_value_indices(&labels, &lists)?;
                            (
                                index.contains(&key, existence)?,
                                index.contains(&key, availability)?,
                            )
                        }
                        None => (false, false),
                    };

                    Ok(OptionValueState {
                        name: value.to_owned(),
                        selected: current == Some(value),
                        exists,
                        available,
                    })
                })
                .collect::<Result<Vec<_>, _>>()?;

            Ok(OptionStates {
                name: option.name.clone(),
                values,
            })
        })
        .collect()
}
