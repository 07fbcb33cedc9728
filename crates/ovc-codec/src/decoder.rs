//! Decoding of encoded option value strings.
//!
//! This module provides the [`Decoder`] struct and the
//! [`decode_encoded_variant`] convenience function.
//!
//! # V1 Grammar
//!
//! The body after the `v1_` tag is a flattened trie of option value indices.
//! Decimal literals are separated by four control characters:
//!
//! | Char | Meaning |
//! |------|---------|
//! | `:`  | Descend: the next literal belongs to the next option |
//! | `,`  | End of a repeated prefix: emit (first comma only) and ascend one level |
//! | ` `  | Gap: emit the current value and continue at the same level |
//! | `-`  | Range: the literal starts a closed range ended by the next literal |
//!
//! `0:0-2,1:0 2,` therefore decodes to `[0,0] [0,1] [0,2] [1,0] [1,2]`.

use ovc_core::{DecodeConfig, DecodedOptionValues, OptionValueCombination, OptionValueIndex};

use crate::error::CodecError;
use crate::version::EncodingVersion;

/// A control character of the v1 grammar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Control {
    /// `:` - descend to the next option.
    Option,
    /// `,` - end of a repeated prefix.
    EndOfPrefix,
    /// ` ` - gap in the value sequence.
    SequenceGap,
    /// `-` - start of a closed range.
    Range,
}

impl Control {
    #[inline]
    const fn from_byte(byte: u8) -> Option<Self> {
        match byte {
            b':' => Some(Self::Option),
            b',' => Some(Self::EndOfPrefix),
            b' ' => Some(Self::SequenceGap),
            b'-' => Some(Self::Range),
            _ => None,
        }
    }
}

/// Decoder for encoded variant fields.
///
/// Holds the [`DecodeConfig`] limits; decoding itself is a pure function of
/// the input string.
///
/// # Examples
///
/// ```
/// use ovc_codec::Decoder;
/// use ovc_core::DecodeConfig;
///
/// let decoder = Decoder::new(DecodeConfig { max_combinations: Some(5) });
///
/// assert_eq!(decoder.decode(Some("v1_0-4"))?.len(), 5);
/// assert!(decoder.decode(Some("v1_0-5")).is_err());
/// # Ok::<(), ovc_codec::CodecError>(())
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Decoder {
    config: DecodeConfig,
}

impl Decoder {
    /// Creates a decoder with the given limits.
    #[inline]
    #[must_use]
    pub const fn new(config: DecodeConfig) -> Self {
        Self { config }
    }

    /// Returns the decoder's configuration.
    #[inline]
    #[must_use]
    pub const fn config(&self) -> &DecodeConfig {
        &self.config
    }

    /// Decodes an encoded variant field into full-depth combinations.
    ///
    /// `None` and `Some("")` both mean "no variants encoded" and decode to an
    /// empty set.
    ///
    /// # Errors
    ///
    /// - [`CodecError::UnsupportedEncoding`] if a non-empty string has no known version tag
    /// - [`CodecError::IndexOverflow`] if a literal does not fit a `u32`
    /// - [`CodecError::TooManyCombinations`] if the configured limit is exceeded
    pub fn decode(&self, encoded: Option<&str>) -> Result<DecodedOptionValues, CodecError> {
        let Some(encoded) = encoded.filter(|s| !s.is_empty()) else {
            return Ok(DecodedOptionValues::new());
        };

        match EncodingVersion::split(encoded)? {
            (EncodingVersion::V1, body) => V1Decoder::new(body, self.config.max_combinations).run(),
        }
    }
}

/// Decodes an encoded variant field with no combination limit.
///
/// # Errors
///
/// See [`Decoder::decode`].
///
/// # Examples
///
/// ```
/// use ovc_codec::decode_encoded_variant;
///
/// let decoded = decode_encoded_variant(Some("v1_0-2 4-6 8-9"))?;
/// assert_eq!(
///     decoded.to_nested_vec(),
///     vec![vec![0], vec![1], vec![2], vec![4], vec![5], vec![6], vec![8], vec![9]]
/// );
///
/// assert!(decode_encoded_variant(None)?.is_empty());
/// assert!(decode_encoded_variant(Some("v2_0:0")).is_err());
/// # Ok::<(), ovc_codec::CodecError>(())
/// ```
pub fn decode_encoded_variant(encoded: Option<&str>) -> Result<DecodedOptionValues, CodecError> {
    Decoder::default().decode(encoded)
}

/// Single-pass state machine over a v1 body.
///
/// State is the current path from the root (`path[..=depth]`), the current
/// depth, and the start of an open range.
struct V1Decoder<'a> {
    body: &'a str,
    limit: Option<usize>,
    path: OptionValueCombination,
    depth: usize,
    range_start: Option<OptionValueIndex>,
    output: DecodedOptionValues,
}

impl<'a> V1Decoder<'a> {
    fn new(body: &'a str, limit: Option<usize>) -> Self {
        Self {
            body,
            limit,
            path: OptionValueCombination::new(),
            depth: 0,
            range_start: None,
            output: DecodedOptionValues::new(),
        }
    }

    fn run(mut self) -> Result<DecodedOptionValues, CodecError> {
        let bytes = self.body.as_bytes();
        let mut literal_start = 0;

        for (offset, &byte) in bytes.iter().enumerate() {
            let Some(control) = Control::from_byte(byte) else {
                continue;
            };

            let value = parse_index(&self.body[literal_start..offset], literal_start)?.unwrap_or(0);
            let after_comma = offset > 0 && bytes[offset - 1] == b',';
            self.step(control, value, after_comma)?;
            literal_start = offset + 1;
        }

        self.finish(literal_start)?;
        Ok(self.output)
    }

    /// Applies one control character preceded by the literal `value`.
    fn step(
        &mut self,
        control: Control,
        value: OptionValueIndex,
        after_comma: bool,
    ) -> Result<(), CodecError> {
        // The range end itself is emitted by the boundary that follows it.
        if let Some(start) = self.range_start.take() {
            for index in start..value {
                self.set_current(index);
                self.emit()?;
            }
        }

        self.set_current(value);

        match control {
            Control::Range => self.range_start = Some(value),
            Control::Option => self.depth += 1,
            Control::SequenceGap => self.emit()?,
            Control::EndOfPrefix => {
                if !after_comma {
                    self.emit()?;
                }
                self.path.pop();
                // Extra commas past the root are ignored.
                self.depth = self.depth.saturating_sub(1);
            }
        }

        Ok(())
    }

    /// Handles digits after the last control character.
    ///
    /// A body such as `0-9` or `0 2` ends without a boundary, so the final
    /// literal (or the rest of an open range) has not been emitted yet.
    /// The literal is placed at the current depth, keeping the prefix. Real
    /// encoded fields only end this way at the root; trailing literals below
    /// it are not yet confirmed against production data.
    fn finish(&mut self, literal_start: usize) -> Result<(), CodecError> {
        let Some(last) = parse_index(&self.body[literal_start..], literal_start)? else {
            return Ok(());
        };

        match self.range_start.take() {
            Some(start) => {
                for index in start..=last {
                    self.set_current(index);
                    self.emit()?;
                }
            }
            None => {
                self.set_current(last);
                self.emit()?;
            }
        }

        Ok(())
    }

    /// Places `value` at the current depth of the path.
    fn set_current(&mut self, value: OptionValueIndex) {
        if let Some(slot) = self.path.get_mut(self.depth) {
            *slot = value;
        } else {
            self.path.resize(self.depth, 0);
            self.path.push(value);
        }
    }

    /// Emits the path up to and including the current depth.
    fn emit(&mut self) -> Result<(), CodecError> {
        match self.limit {
            Some(limit) if self.output.len() >= limit => {
                return Err(CodecError::TooManyCombinations { limit });
            }
            _ => {}
        }

        let end = self.path.len().min(self.depth + 1);
        self.output.push(OptionValueCombination::from_slice(&self.path[..end]));
        Ok(())
    }
}

/// Parses the leading decimal digits of a literal.
///
/// Returns `Ok(None)` when the literal has no leading digits (empty or
/// non-numeric); callers inside the body treat that as index 0.
fn parse_index(literal: &str, offset: usize) -> Result<Option<OptionValueIndex>, CodecError> {
    let digits = literal.strip_prefix('+').unwrap_or(literal);
    let end = digits
        .bytes()
        .position(|b| !b.is_ascii_digit())
        .unwrap_or(digits.len());

    if end == 0 {
        return Ok(None);
    }

    digits[..end]
        .parse()
        .map(Some)
        .map_err(|_| CodecError::IndexOverflow { offset })
}
