//! Trie codec for encoded product variant option values.
//!
//! The storefront API describes which option value combinations of a product
//! exist (or are available) as a compact string instead of a list of variants.
//! This crate decodes those strings into combinations and provides the
//! matching encoder.
//!
//! # Overview
//!
//! ```
//! use ovc_codec::decode_encoded_variant;
//!
//! // Color x Size, every size for every color
//! let decoded = decode_encoded_variant(Some("v1_0:0-2,1:0-2,2:0-2,"))?;
//! assert_eq!(decoded.len(), 9);
//! assert_eq!(decoded.as_slice()[4].as_slice(), &[1, 1]);
//! # Ok::<(), ovc_codec::CodecError>(())
//! ```
//!
//! # Format
//!
//! | Encoded | Combinations |
//! |---------|--------------|
//! | `""` or absent | none |
//! | `v1_0-9` | `[0]` .. `[9]` |
//! | `v1_0-2 4-6 8-9` | `[0] [1] [2] [4] [5] [6] [8] [9]` |
//! | `v1_0:0-1,1:0 2,` | `[0,0] [0,1] [1,0] [1,2]` |
//! | `v1_0:0:0,,1:1:1,,` | `[0,0,0] [1,1,1]` |
//!
//! See [`decoder`] for the grammar and [`encoder`] for how strings are built.
//!
//! # Errors
//!
//! Unknown version tags are rejected with [`CodecError::UnsupportedEncoding`].
//! Malformed bodies decode deterministically: empty or non-numeric literals
//! read as 0 and surplus commas are ignored.
//!
//! # Thread Safety
//!
//! Decoding and encoding are pure; [`Decoder`] is `Copy`, `Send` and `Sync`.

#![deny(clippy::all)]
#![warn(missing_docs)]

pub mod decoder;
pub mod encoder;
pub mod error;
pub mod version;

pub use decoder::{Decoder, decode_encoded_variant};
pub use encoder::encode_option_values;
pub use error::CodecError;
pub use version::EncodingVersion;
