//! Domain types for the option value codec.
//!
//! # Module Organization
//!
//! - [`combination`] - Option value indices, combinations, and decoded sets
//! - [`product`] - Product option definitions from the storefront API
//! - [`state`] - Per option value existence/availability results
//!
//! All public types are re-exported here and at the crate root:
//!
//! ```
//! use ovc_core::{DecodedOptionValues, OptionValueCombination, Product};
//! ```

mod combination;
mod product;
mod state;

pub use combination::{DecodedOptionValues, OptionValueCombination, OptionValueIndex};
pub use product::{Product, ProductOption, ProductOptionValue, SelectedOptions};
pub use state::{OptionStates, OptionValueState};
