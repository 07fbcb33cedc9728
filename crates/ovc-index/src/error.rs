//! Error types for the ovc-index crate.

use ovc_codec::CodecError;

/// Errors that can occur while resolving option values or querying an
/// encoded variant field.
///
/// # Examples
///
/// ```
/// use ovc_index::{IndexError, get_option_value_indices};
///
/// let lists = [vec!["red", "blue"]];
/// match get_option_value_indices(&["green"], &lists) {
///     Err(IndexError::OptionValueNotFound { value }) => assert_eq!(value, "green"),
///     other => panic!("unexpected result: {other:?}"),
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum IndexError {
    /// Fewer option value lists than target values were supplied.
    #[error(
        "one product option must be provided per target option value \
         ({targets} target values, {options} product options)"
    )]
    InsufficientOptions {
        /// Number of target values.
        targets: usize,
        /// Number of option value lists.
        options: usize,
    },

    /// A target value is not in its option's value list.
    #[error("option value not found in product options: {value}")]
    OptionValueNotFound {
        /// The missing value label.
        value: String,
    },

    /// A value position is too large for an option value index.
    #[error("option value position {position} does not fit an option value index")]
    PositionOverflow {
        /// The position within the option's value list.
        position: usize,
    },

    /// The encoded variant field could not be decoded.
    #[error(transparent)]
    Codec(#[from] CodecError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insufficient_options_display() {
        let err = IndexError::InsufficientOptions {
            targets: 3,
            options: 2,
        };
        insta::assert_snapshot!(
            err,
            @"one product option must be provided per target option value (3 target values, 2 product options)"
        );
    }

    #[test]
    fn test_not_found_names_value() {
        let err = IndexError::OptionValueNotFound {
            value: "fantastic".to_owned(),
        };
        assert!(err.to_string().contains("fantastic"));
    }

    #[test]
    fn test_codec_error_is_transparent() {
        let err = IndexError::from(CodecError::UnsupportedEncoding {
            prefix: "v2_".to_owned(),
        });
        assert!(err.to_string().starts_with("unsupported option value encoding"));
    }
}
