//! Version tags of encoded option value strings.
//!
//! Every non-empty encoded string starts with a version tag. `v1_` is the only
//! version defined; matching is case- and separator-sensitive.

use crate::error::CodecError;

/// Number of characters kept from a rejected string for error reporting.
const REJECTED_PREFIX_CHARS: usize = 8;

/// A known encoding version.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum EncodingVersion {
    /// The trie encoding with `:`, `,`, ` ` and `-` control characters.
    V1,
}

impl EncodingVersion {
    /// Returns the tag that marks this version, e.g. `"v1_"`.
    #[inline]
    #[must_use]
    pub const fn tag(self) -> &'static str {
        match self {
            Self::V1 => "v1_",
        }
    }

    /// Splits a non-empty encoded string into its version and body.
    ///
    /// # Errors
    ///
    /// Returns [`CodecError::UnsupportedEncoding`] if the string does not
    /// start with a known tag.
    ///
    /// # Examples
    ///
    /// ```
    /// use ovc_codec::EncodingVersion;
    ///
    /// let (version, body) = EncodingVersion::split("v1_0:0-2,")?;
    /// assert_eq!(version, EncodingVersion::V1);
    /// assert_eq!(body, "0:0-2,");
    ///
    /// assert!(EncodingVersion::split("V1_0").is_err());
    /// assert!(EncodingVersion::split("0:0-2,").is_err());
    /// # Ok::<(), ovc_codec::CodecError>(())
    /// ```
    pub fn split(encoded: &str) -> Result<(Self, &str), CodecError> {
        if let Some(body) = encoded.strip_prefix(Self::V1.tag()) {
            return Ok((Self::V1, body));
        }

        Err(CodecError::UnsupportedEncoding {
            prefix: encoded.chars().take(REJECTED_PREFIX_CHARS).collect(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_v1() {
        assert_eq!(EncodingVersion::split("v1_"), Ok((EncodingVersion::V1, "")));
        assert_eq!(
            EncodingVersion::split("v1_0-9"),
            Ok((EncodingVersion::V1, "0-9"))
        );
    }

    #[test]
    fn test_split_rejects_unknown_tags() {
        for encoded in ["v2_0:0", "v1-0", "v10_0", "1_0", " v1_0"] {
            assert!(
                matches!(
                    EncodingVersion::split(encoded),
                    Err(CodecError::UnsupportedEncoding { .. })
                ),
                "{encoded} should be rejected"
            );
        }
    }

    #[test]
    fn test_rejected_prefix_is_truncated() {
        let err = EncodingVersion::split("v9_0:0:0,,1:1:1,,").unwrap_err();
        assert_eq!(
            err,
            CodecError::UnsupportedEncoding {
                prefix: "v9_0:0:0".to_owned()
            }
        );
    }
}
