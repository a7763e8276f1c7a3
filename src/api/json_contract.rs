use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::core::{DatasetStore, Item};
use crate::error::{ChartError, ChartResult};

use super::SelectionSnapshot;

pub const SELECTION_SNAPSHOT_JSON_SCHEMA_V1: u32 = 1;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectionSnapshotJsonContractV1 {
    pub schema_version: u32,
    pub snapshot: SelectionSnapshot,
}

impl SelectionSnapshot {
    pub fn to_json_contract_v1_pretty(&self) -> ChartResult<String> {
        let payload = SelectionSnapshotJsonContractV1 {
            schema_version: SELECTION_SNAPSHOT_JSON_SCHEMA_V1,
            snapshot: self.clone(),
        };
        serde_json::to_string_pretty(&payload).map_err(|e| {
            ChartError::InvalidData(format!("failed to serialize selection contract v1: {e}"))
        })
    }

    /// Accepts either a bare snapshot or a versioned contract payload.
    pub fn from_json_compat_str(input: &str) -> ChartResult<Self> {
        if let Ok(snapshot) = serde_json::from_str::<SelectionSnapshot>(input) {
            return Ok(snapshot);
        }
        let payload: SelectionSnapshotJsonContractV1 = serde_json::from_str(input).map_err(|e| {
            ChartError::InvalidData(format!("failed to parse selection json payload: {e}"))
        })?;
        if payload.schema_version != SELECTION_SNAPSHOT_JSON_SCHEMA_V1 {
            return Err(ChartError::InvalidData(format!(
                "unsupported selection schema version: {}",
                payload.schema_version
            )));
        }
        Ok(payload.snapshot)
    }
}

/// Wire shape of one dataset record. `value` stays untyped so non-numeric
/// input is reported as a data error naming the offending item.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct ItemRecord {
    id: String,
    value: Value,
    region: String,
}

impl DatasetStore {
    /// Parses a JSON array of `{ "id", "value", "region" }` records.
    pub fn from_json_str(input: &str) -> ChartResult<Self> {
        let records: Vec<ItemRecord> = serde_json::from_str(input)
            .map_err(|e| ChartError::InvalidData(format!("failed to parse dataset json: {e}")))?;

        let items = records
            .into_iter()
            .map(|record| {
                let value = record.value.as_f64().ok_or_else(|| {
                    ChartError::InvalidData(format!(
                        "item `{}` value must be numeric, got {}",
                        record.id, record.value
                    ))
                })?;
                Item::new(record.id, value, record.region)
            })
            .collect::<ChartResult<Vec<_>>>()?;

        Self::load(items)
    }

    pub fn to_json_pretty(&self) -> ChartResult<String> {
        serde_json::to_string_pretty(self.all_items())
            .map_err(|e| ChartError::InvalidData(format!("failed to serialize dataset: {e}")))
    }
}
