use serde::{Deserialize, Serialize};

use crate::error::{ChartError, ChartResult};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Viewport {
    pub width: u32,
    pub height: u32,
}

impl Viewport {
    #[must_use]
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    #[must_use]
    pub fn is_valid(self) -> bool {
        self.width > 0 && self.height > 0
    }
}

/// Vertical plot margins in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Margins {
    pub top: f64,
    pub bottom: f64,
}

impl Margins {
    #[must_use]
    pub const fn new(top: f64, bottom: f64) -> Self {
        Self { top, bottom }
    }

    #[must_use]
    pub fn vertical_sum(self) -> f64 {
        self.top + self.bottom
    }
}

impl Default for Margins {
    fn default() -> Self {
        Self::new(20.0, 10.0)
    }
}

/// One record of the dataset.
///
/// Fields are private so an `Item` can only exist in validated form.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Item {
    id: String,
    value: f64,
    region: String,
}

impl Item {
    pub fn new(id: impl Into<String>, value: f64, region: impl Into<String>) -> ChartResult<Self> {
        let id = id.into();
        if id.is_empty() {
            return Err(ChartError::InvalidData("item id must not be empty".to_owned()));
        }
        if !value.is_finite() {
            return Err(ChartError::InvalidData(format!(
                "item `{id}` value must be a finite number"
            )));
        }

        Ok(Self {
            id,
            value,
            region: region.into(),
        })
    }

    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }

    #[must_use]
    pub fn value(&self) -> f64 {
        self.value
    }

    #[must_use]
    pub fn region(&self) -> &str {
        &self.region
    }
}

#[cfg(test)]
mod tests {
    use super::Item;
    use crate::error::ChartError;

    #[test]
    fn item_rejects_non_finite_value() {
        let err = Item::new("d1", f64::NAN, "USA").expect_err("nan must fail");
        assert!(matches!(err, ChartError::InvalidData(_)));
        let err = Item::new("d1", f64::INFINITY, "USA").expect_err("inf must fail");
        assert!(matches!(err, ChartError::InvalidData(_)));
    }

    #[test]
    fn item_rejects_empty_id() {
        let err = Item::new("", 1.0, "USA").expect_err("empty id must fail");
        assert!(matches!(err, ChartError::InvalidData(_)));
    }
}
