use serde::{Deserialize, Serialize};

use crate::core::{BandScale, Item, LinearScale};
use crate::error::{ChartError, ChartResult};

/// Vertical gap between the top of a bar and its value label anchor.
pub const VALUE_LABEL_OFFSET_PX: f64 = 20.0;

/// Deterministic bar and value-label geometry in pixel coordinates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BarGeometry {
    pub id: String,
    pub value: f64,
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub label_x: f64,
    pub label_y: f64,
}

/// Projects items into bar geometry anchored on the plot baseline.
///
/// `plot_height` is the baseline in pixels; bars grow upward from it.
pub fn project_bars(
    items: &[Item],
    x_scale: &BandScale,
    y_scale: LinearScale,
    plot_height: f64,
) -> ChartResult<Vec<BarGeometry>> {
    if !plot_height.is_finite() || plot_height <= 0.0 {
        return Err(ChartError::InvalidData(
            "plot height must be finite and > 0".to_owned(),
        ));
    }

    let width = x_scale.bandwidth();
    let mut projected = Vec::with_capacity(items.len());
    for item in items {
        let x = x_scale.position(item.region()).ok_or_else(|| {
            ChartError::InvalidData(format!(
                "region `{}` of item `{}` is not on the band axis",
                item.region(),
                item.id()
            ))
        })?;
        let y = y_scale.map(item.value())?;

        projected.push(BarGeometry {
            id: item.id().to_owned(),
            value: item.value(),
            x,
            y,
            width,
            height: plot_height - y,
            label_x: x + width * 0.5,
            label_y: y - VALUE_LABEL_OFFSET_PX,
        });
    }

    Ok(projected)
}
