//! Core types, configuration, and utilities for the option value codec.
//!
//! This crate provides the foundational types shared across the workspace:
//!
//! - Option value combinations and decoded combination sets
//! - Product option definitions as delivered by the storefront API
//! - Configuration structures for decoding, caching, and output
//! - Type aliases for `FxHashMap`/`FxHashSet` (faster than std)
//!
//! # Combinations
//!
//! A product with options `Color = [Red, Blue]` and `Size = [S, M, L]` has its
//! variants addressed by position. `Blue / M` is the combination `[1, 1]`:
//!
//! ```
//! use ovc_core::OptionValueCombination;
//! use smallvec::smallvec;
//!
//! let blue_medium: OptionValueCombination = smallvec![1, 1];
//! assert_eq!(blue_medium.as_slice(), &[1, 1]);
//! ```

#![deny(clippy::all)]
#![warn(missing_docs)]

pub mod config;
pub mod error;
pub mod hash;
pub mod types;

pub use config::{CacheConfig, Config, DecodeConfig, OutputConfig, OutputFormat};
pub use error::ConfigError;
pub use hash::{FxHashMap, FxHashSet, fx_hash_map_with_capacity, fx_hash_set_with_capacity};
pub use types::{
    DecodedOptionValues, OptionStates, OptionValueCombination, OptionValueIndex, OptionValueState,
    Product, ProductOption, ProductOptionValue, SelectedOptions,
};
