//! Existence and availability results per option value.

use serde::{Deserialize, Serialize};

/// State of one option value given the current selection.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct OptionValueState {
    /// Value label.
    pub name: String,

    /// The value is part of the current selection.
    pub selected: bool,

    /// Some variant exists with the selection up to and including this value.
    pub exists: bool,

    /// Some such variant is also available for sale.
    pub available: bool,
}

/// States for every value of one option.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct OptionStates {
    /// Option name.
    pub name: String,

    /// One entry per option value, in option order.
    pub values: Vec<OptionValueState>,
}

impl OptionStates {
    /// Returns the state of the value labelled `name`, if present.
    ///
    /// # Examples
    ///
    /// ```
    /// use ovc_core::{OptionStates, OptionValueState};
    ///
    /// let states = OptionStates {
    ///     name: "Size".to_owned(),
    ///     values: vec![OptionValueState {
    ///         name: "M".to_owned(),
    ///         selected: true,
    ///         exists: true,
    ///         available: false,
    ///     }],
    /// };
    /// assert!(states.value("M").is_some_and(|v| v.exists && !v.available));
    /// assert!(states.value("L").is_none());
    /// ```
    #[must_use]
    pub fn value(&self, name: &str) -> Option<&OptionValueState> {
        self.values.iter().find(|value| value.name == name)
    }
}
