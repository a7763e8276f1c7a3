use std::fmt;

use indexmap::IndexSet;
use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::core::{DatasetStore, Item};

use super::SelectionSnapshot;

/// Observer invoked with the visible subset after every toggle.
pub type ChangeListener = Box<dyn FnMut(&[Item])>;

/// What a single `toggle` call did to the excluded set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ToggleOutcome {
    /// The id was visible and is now hidden.
    Excluded,
    /// The id was hidden and is visible again.
    Included,
    /// No item carries this id; the selection is unchanged.
    UnknownId,
}

impl ToggleOutcome {
    #[must_use]
    pub fn changed(self) -> bool {
        !matches!(self, Self::UnknownId)
    }
}

/// Keeps the visible subset consistent with the user's excluded ids.
///
/// The visible subset is never cached: every read filters the full dataset
/// again. Listener calls are synchronous; toggling from inside the listener
/// is not supported.
pub struct SelectionController {
    store: DatasetStore,
    excluded: IndexSet<String>,
    listener: Option<ChangeListener>,
}

impl fmt::Debug for SelectionController {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SelectionController")
            .field("store", &self.store)
            .field("excluded", &self.excluded)
            .field("has_listener", &self.listener.is_some())
            .finish()
    }
}

impl SelectionController {
    #[must_use]
    pub fn new(store: DatasetStore) -> Self {
        Self {
            store,
            excluded: IndexSet::new(),
            listener: None,
        }
    }

    #[must_use]
    pub fn store(&self) -> &DatasetStore {
        &self.store
    }

    /// Flips `id` between visible and excluded, then notifies the listener.
    ///
    /// Unknown ids leave the selection untouched but still notify, so the
    /// listener always sees one call per toggle.
    pub fn toggle(&mut self, id: &str) -> ToggleOutcome {
        let outcome = if !self.store.contains(id) {
            debug!(id, "toggle ignored for unknown item id");
            ToggleOutcome::UnknownId
        } else if self.excluded.swap_remove(id) {
            ToggleOutcome::Included
        } else {
            self.excluded.insert(id.to_owned());
            ToggleOutcome::Excluded
        };

        trace!(
            id,
            ?outcome,
            excluded_count = self.excluded.len(),
            "selection toggled"
        );
        self.notify();
        outcome
    }

    /// Full dataset minus excluded ids, in original order.
    #[must_use]
    pub fn visible_items(&self) -> Vec<Item> {
        self.store
            .all_items()
            .iter()
            .filter(|item| !self.excluded.contains(item.id()))
            .cloned()
            .collect()
    }

    /// Registers the change listener, replacing any previous one.
    pub fn on_change<F>(&mut self, callback: F)
    where
        F: FnMut(&[Item]) + 'static,
    {
        if self.listener.is_some() {
            debug!("replacing selection change listener");
        }
        self.listener = Some(Box::new(callback));
    }

    #[must_use]
    pub fn is_excluded(&self, id: &str) -> bool {
        self.excluded.contains(id)
    }

    /// Excluded ids in dataset order.
    #[must_use]
    pub fn excluded_ids(&self) -> Vec<&str> {
        self.store
            .all_items()
            .iter()
            .map(Item::id)
            .filter(|id| self.excluded.contains(*id))
            .collect()
    }

    #[must_use]
    pub fn excluded_len(&self) -> usize {
        self.excluded.len()
    }

    #[must_use]
    pub fn snapshot(&self) -> SelectionSnapshot {
        SelectionSnapshot {
            visible_ids: self
                .visible_items()
                .iter()
                .map(|item| item.id().to_owned())
                .collect(),
            excluded_ids: self
                .excluded_ids()
                .into_iter()
                .map(str::to_owned)
                .collect(),
        }
    }

    fn notify(&mut self) {
        if self.listener.is_none() {
            return;
        }
        let visible = self.visible_items();
        if let Some(listener) = self.listener.as_mut() {
            listener(&visible);
        }
    }
}
