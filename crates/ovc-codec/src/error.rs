//! Error types for the ovc-codec crate.
//!
//! This module provides the [`CodecError`] type for errors that can occur
//! while decoding or encoding option value strings.

/// Errors that can occur while decoding or encoding option values.
///
/// An empty or absent encoded string is not an error: it decodes to an empty
/// set.
///
/// # Examples
///
/// ```
/// use ovc_codec::{CodecError, decode_encoded_variant};
///
/// match decode_encoded_variant(Some("v2_0:0")) {
///     Err(CodecError::UnsupportedEncoding { prefix }) => assert_eq!(prefix, "v2_0:0"),
///     other => panic!("unexpected result: {other:?}"),
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CodecError {
    /// The string does not start with a known version tag.
    #[error("unsupported option value encoding (starts with '{prefix}')")]
    UnsupportedEncoding {
        /// The first few characters of the rejected string.
        prefix: String,
    },

    /// A numeric literal does not fit an option value index.
    #[error("option value index at offset {offset} does not fit in 32 bits")]
    IndexOverflow {
        /// Byte offset of the literal within the encoded body.
        offset: usize,
    },

    /// Decoding would emit more combinations than the configured limit.
    #[error("encoded option values expand to more than {limit} combinations")]
    TooManyCombinations {
        /// The configured limit.
        limit: usize,
    },

    /// Combinations passed to the encoder have different lengths.
    #[error("cannot encode combinations of different lengths ({expected} and {found})")]
    RaggedCombinations {
        /// Length of the first combination.
        expected: usize,
        /// Length of the first combination that differs.
        found: usize,
    },

    /// A zero-length combination was passed to the encoder.
    #[error("cannot encode an empty option value combination")]
    EmptyCombination,
}
