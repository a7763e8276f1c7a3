use serde::{Deserialize, Serialize};

/// Serializable view of the current selection, both lists in dataset order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectionSnapshot {
    pub visible_ids: Vec<String>,
    pub excluded_ids: Vec<String>,
}
