use serde::{Deserialize, Serialize};

use crate::core::Item;

/// One row of the filter list: a region label next to a checkbox.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterCheckbox {
    pub id: String,
    pub label: String,
    pub checked: bool,
}

impl FilterCheckbox {
    /// Builds one row per item in dataset order; a row is checked unless its
    /// id is excluded.
    pub fn rows<F>(items: &[Item], is_excluded: F) -> Vec<Self>
    where
        F: Fn(&str) -> bool,
    {
        items
            .iter()
            .map(|item| Self {
                id: item.id().to_owned(),
                label: item.region().to_owned(),
                checked: !is_excluded(item.id()),
            })
            .collect()
    }
}

/// Checkbox state change reported by the UI layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckboxChange {
    pub id: String,
    pub checked: bool,
}

impl CheckboxChange {
    #[must_use]
    pub fn new(id: impl Into<String>, checked: bool) -> Self {
        Self {
            id: id.into(),
            checked,
        }
    }

    /// Whether applying this change needs a toggle given the row's current state.
    #[must_use]
    pub fn requires_toggle(&self, currently_checked: bool) -> bool {
        self.checked != currently_checked
    }
}
