//! Product option definitions.
//!
//! These mirror the subset of the storefront API product shape the codec
//! needs: ordered options with ordered value labels, and the two encoded
//! variant fields. Field names follow the API's camelCase JSON.

use serde::{Deserialize, Serialize};

use crate::hash::FxHashMap;

/// Selected value label per option name, e.g. `{"Color": "Red"}`.
pub type SelectedOptions = FxHashMap<String, String>;

/// One allowed value of a product option.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ProductOptionValue {
    /// Display label, e.g. `"Red"`.
    pub name: String,
}

/// One product customization axis with its ordered values.
///
/// # Examples
///
/// ```
/// use ovc_core::ProductOption;
///
/// let color = ProductOption::new("Color", ["Red", "Blue"]);
/// assert_eq!(color.position_of("Blue"), Some(1));
/// assert_eq!(color.position_of("blue"), None);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductOption {
    /// Option name, e.g. `"Color"`.
    pub name: String,

    /// Values in storefront order. Their positions are the option value indices.
    #[serde(default)]
    pub option_values: Vec<ProductOptionValue>,
}

impl ProductOption {
    /// Creates an option from a name and value labels.
    pub fn new<I, S>(name: impl Into<String>, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            name: name.into(),
            option_values: values
                .into_iter()
                .map(|value| ProductOptionValue { name: value.into() })
                .collect(),
        }
    }

    /// Returns the value labels in order.
    pub fn value_names(&self) -> impl Iterator<Item = &str> {
        self.option_values.iter().map(|value| value.name.as_str())
    }

    /// Returns the position of `label` (exact, case-sensitive match).
    #[must_use]
    pub fn position_of(&self, label: &str) -> Option<usize> {
        self.value_names().position(|name| name == label)
    }
}

/// A product's options and encoded variant fields.
///
/// # Examples
///
/// ```
/// use ovc_core::Product;
///
/// let json = r#"{
///     "handle": "tee",
///     "options": [{"name": "Size", "optionValues": [{"name": "S"}, {"name": "M"}]}],
///     "encodedVariantExistence": "v1_0-1",
///     "encodedVariantAvailability": "v1_1"
/// }"#;
///
/// let product: Product = serde_json::from_str(json)?;
/// assert_eq!(product.option_value_lists(), vec![vec!["S", "M"]]);
/// # Ok::<(), serde_json::Error>(())
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    /// Product handle.
    #[serde(default)]
    pub handle: String,

    /// Options in storefront order.
    #[serde(default)]
    pub options: Vec<ProductOption>,

    /// Encoded set of combinations that exist as variants.
    #[serde(default)]
    pub encoded_variant_existence: Option<String>,

    /// Encoded set of combinations that are available for sale.
    #[serde(default)]
    pub encoded_variant_availability: Option<String>,
}

impl Product {
    /// Returns each option's value labels, in option order.
    #[must_use]
    pub fn option_value_lists(&self) -> Vec<Vec<&str>> {
        self.options
            .iter()
            .map(|option| option.value_names().collect())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_position_of_first_match() {
        let option = ProductOption::new("Size", ["S", "M", "S"]);
        assert_eq!(option.position_of("S"), Some(0));
        assert_eq!(option.position_of("XL"), None);
    }

    #[test]
    fn test_product_deserialize_missing_fields() {
        let product: Product = serde_json::from_str(r#"{"options": []}"#).unwrap();
        assert!(product.handle.is_empty());
        assert_eq!(product.encoded_variant_existence, None);
        assert_eq!(product.encoded_variant_availability, None);
    }

    #[test]
    fn test_product_serializes_camel_case() {
        let product = Product {
            handle: "tee".to_owned(),
            options: vec![ProductOption::new("Size", ["S"])],
            encoded_variant_existence: Some("v1_0".to_owned()),
            encoded_variant_availability: None,
        };
        let json = serde_json::to_string(&product).unwrap();
        insta::assert_snapshot!(json, @r#"{"handle":"tee","options":[{"name":"Size","optionValues":[{"name":"S"}]}],"encodedVariantExistence":"v1_0","encodedVariantAvailability":null}"#);
    }
}
