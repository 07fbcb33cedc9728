//! Existence lookups over encoded variant fields.
//!
//! Storefront products carry `encodedVariantExistence` and
//! `encodedVariantAvailability` strings instead of full variant lists. This
//! crate answers questions against them without decoding on every call:
//!
//! - [`get_option_value_indices`] turns option value labels into indices
//! - [`ExistenceIndex`] memoizes one [`CombinationSet`] per encoded string
//! - [`option_value_states`] reports, for a selection, which values of every
//!   option exist and which are in stock
//!
//! # Examples
//!
//! ```
//! use ovc_index::{get_option_value_indices, is_option_value_combination_in_encoded_variant};
//!
//! let lists = [vec!["Red", "Blue"], vec!["S", "M", "L"]];
//! let existence = "v1_0:0-2,1:1,";
//!
//! let blue_medium = get_option_value_indices(&["Blue", "M"], &lists)?;
//! assert!(is_option_value_combination_in_encoded_variant(&blue_medium, existence)?);
//!
//! let blue_small = get_option_value_indices(&["Blue", "S"], &lists)?;
//! assert!(!is_option_value_combination_in_encoded_variant(&blue_small, existence)?);
//! # Ok::<(), ovc_index::IndexError>(())
//! ```
//!
//! # Thread Safety
//!
//! [`ExistenceIndex`] is `Send` and `Sync`. The process-wide instance behind
//! [`global_index`] is safe to query from any thread.

#![deny(clippy::all)]
#![warn(missing_docs)]

pub mod availability;
pub mod error;
pub mod existence;
pub mod resolver;
pub mod stats;

pub use availability::option_value_states;
pub use error::IndexError;
pub use existence::{
    CombinationSet, ExistenceIndex, global_index, is_option_value_combination_in_encoded_variant,
};
pub use resolver::get_option_value_indices;
pub use stats::{CacheStats, CacheStatsSnapshot};
