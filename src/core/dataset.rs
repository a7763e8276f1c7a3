use indexmap::IndexSet;
use tracing::debug;

use crate::core::Item;
use crate::error::{ChartError, ChartResult};

/// Immutable, ordered dataset with constant-time id lookup.
///
/// `ids` mirrors `items` index for index, so `ids.get_index_of` doubles as
/// the position lookup.
#[derive(Debug, Clone, PartialEq)]
pub struct DatasetStore {
    items: Vec<Item>,
    ids: IndexSet<String>,
}

impl DatasetStore {
    /// Validates and loads the full dataset.
    ///
    /// Fails with `InvalidData` on the first duplicated id.
    pub fn load(items: Vec<Item>) -> ChartResult<Self> {
        let mut ids = IndexSet::with_capacity(items.len());
        for item in &items {
            if !ids.insert(item.id().to_owned()) {
                return Err(ChartError::InvalidData(format!(
                    "duplicate item id `{}`",
                    item.id()
                )));
            }
        }

        debug!(count = items.len(), "dataset loaded");
        Ok(Self { items, ids })
    }

    /// Full dataset in load order.
    #[must_use]
    pub fn all_items(&self) -> &[Item] {
        &self.items
    }

    #[must_use]
    pub fn get(&self, id: &str) -> Option<&Item> {
        self.position_of(id).map(|index| &self.items[index])
    }

    #[must_use]
    pub fn contains(&self, id: &str) -> bool {
        self.ids.contains(id)
    }

    #[must_use]
    pub fn position_of(&self, id: &str) -> Option<usize> {
        self.ids.get_index_of(id)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Largest value in the dataset, `None` when empty.
    #[must_use]
    pub fn max_value(&self) -> Option<f64> {
        self.items
            .iter()
            .map(Item::value)
            .max_by(|left, right| left.total_cmp(right))
    }

    /// Distinct regions in first-seen order.
    #[must_use]
    pub fn regions(&self) -> Vec<&str> {
        let regions: IndexSet<&str> = self.items.iter().map(Item::region).collect();
        regions.into_iter().collect()
    }
}

/// Reference dataset drawn by the demo chart.
pub fn sample_items() -> ChartResult<Vec<Item>> {
    [
        ("d1", 10.0, "USA"),
        ("d2", 11.0, "India"),
        ("d3", 12.0, "China"),
        ("d4", 6.0, "Germany"),
    ]
    .into_iter()
    .map(|(id, value, region)| Item::new(id, value, region))
    .collect()
}

/// Loads [`sample_items`] into a store.
pub fn sample_dataset() -> ChartResult<DatasetStore> {
    DatasetStore::load(sample_items()?)
}

#[cfg(test)]
mod tests {
    use super::{DatasetStore, sample_dataset, sample_items};
    use crate::core::Item;

    #[test]
    fn sample_items_keep_every_reference_record() {
        let items = sample_items().expect("sample items");
        let records: Vec<(&str, f64, &str)> = items
            .iter()
            .map(|item| (item.id(), item.value(), item.region()))
            .collect();
        assert_eq!(
            records,
            vec![
                ("d1", 10.0, "USA"),
                ("d2", 11.0, "India"),
                ("d3", 12.0, "China"),
                ("d4", 6.0, "Germany"),
            ]
        );
    }

    #[test]
    fn position_lookup_follows_load_order() {
        let store = sample_dataset().expect("sample");
        assert_eq!(store.position_of("d1"), Some(0));
        assert_eq!(store.position_of("d4"), Some(3));
        assert_eq!(store.position_of("d9"), None);
    }

    #[test]
    fn regions_are_deduplicated_in_first_seen_order() {
        let store = DatasetStore::load(vec![
            Item::new("a", 1.0, "north").expect("a"),
            Item::new("b", 2.0, "south").expect("b"),
            Item::new("c", 3.0, "north").expect("c"),
        ])
        .expect("store");
        assert_eq!(store.regions(), vec!["north", "south"]);
    }
}
