use tracing::trace;

use crate::core::{BandScale, DatasetStore, Item, LinearScale, project_bars};
use crate::error::{ChartError, ChartResult};
use crate::render::{LinePrimitive, RectPrimitive, RenderFrame, TextHAlign, TextPrimitive};

use super::FilterChartConfig;

/// Gap between the end of an axis tick and the top of its label.
const AXIS_LABEL_GAP_PX: f64 = 3.0;

/// Scales for one chart session.
///
/// Both scales come from the full dataset, so hiding an item leaves every
/// other bar in its slot and keeps the value axis fixed.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartLayout {
    pub x_scale: BandScale,
    pub y_scale: LinearScale,
    pub plot_height: f64,
}

impl ChartLayout {
    pub fn from_dataset(config: &FilterChartConfig, store: &DatasetStore) -> ChartResult<Self> {
        let plot_height = config.plot_height();
        let x_scale = BandScale::new(store.regions(), 0.0, f64::from(config.width))?
            .with_padding(config.band_padding)?
            .with_round(true);

        // An all-zero (or all-negative) dataset still needs a non-empty domain.
        let top = store.max_value().unwrap_or(0.0) + config.value_headroom;
        let top = if top > 0.0 { top } else { 1.0 };
        let y_scale = LinearScale::new(0.0, top, plot_height, 0.0)?;
        for item in store.all_items() {
            if !y_scale.map(item.value())?.is_finite() {
                return Err(ChartError::InvalidData(format!(
                    "value {} of item `{}` cannot be placed on a value axis topping at {top}",
                    item.value(),
                    item.id()
                )));
            }
        }

        trace!(
            step = x_scale.step(),
            bandwidth = x_scale.bandwidth(),
            value_top = top,
            "chart layout resolved"
        );
        Ok(Self {
            x_scale,
            y_scale,
            plot_height,
        })
    }

    /// Builds the complete frame: region axis, one bar and one value label
    /// per visible item.
    pub fn build_frame(
        &self,
        config: &FilterChartConfig,
        visible: &[Item],
    ) -> ChartResult<RenderFrame> {
        let mut frame = RenderFrame::new(config.viewport());
        self.push_axis(config, &mut frame);

        for bar in project_bars(visible, &self.x_scale, self.y_scale, self.plot_height)? {
            // Values below zero hang under the baseline.
            let top = bar.y.min(bar.y + bar.height);
            frame.rects.push(
                RectPrimitive::new(bar.x, top, bar.width, bar.height.abs(), config.bar_color)
                    .with_key(bar.id.clone()),
            );
            frame.texts.push(
                TextPrimitive::new(
                    format_value_label(bar.value),
                    bar.label_x,
                    bar.label_y,
                    config.label_font_size_px,
                    config.label_color,
                    TextHAlign::Center,
                )
                .with_key(bar.id),
            );
        }

        Ok(frame)
    }

    fn push_axis(&self, config: &FilterChartConfig, frame: &mut RenderFrame) {
        let baseline = self.plot_height;
        let (range_start, range_end) = self.x_scale.range();
        frame.lines.push(LinePrimitive::new(
            range_start,
            baseline,
            range_end,
            baseline,
            config.axis_stroke_width,
            config.axis_color,
        ));

        let half_band = self.x_scale.bandwidth() * 0.5;
        let label_y =
            baseline + config.axis_tick_size_px + AXIS_LABEL_GAP_PX + config.axis_font_size_px;
        for region in self.x_scale.domain() {
            let Some(left) = self.x_scale.position(region) else {
                continue;
            };
            let center = left + half_band;
            if config.axis_tick_size_px > 0.0 {
                frame.lines.push(LinePrimitive::new(
                    center,
                    baseline,
                    center,
                    baseline + config.axis_tick_size_px,
                    config.axis_stroke_width,
                    config.axis_color,
                ));
            }
            if region.is_empty() {
                continue;
            }
            frame.texts.push(TextPrimitive::new(
                region,
                center,
                label_y,
                config.axis_font_size_px,
                config.axis_color,
                TextHAlign::Center,
            ));
        }
    }
}

/// Formats a bar value the way it is printed above the bar: integers without
/// a fractional part, everything else with the shortest exact representation.
/// Negative zero prints as `0`.
#[must_use]
pub fn format_value_label(value: f64) -> String {
    let value = if value == 0.0 { 0.0 } else { value };
    value.to_string()
}

#[cfg(test)]
mod tests {
    use super::{ChartLayout, format_value_label};
    use crate::api::FilterChartConfig;
    use crate::core::{DatasetStore, Item, sample_dataset};
    use crate::error::ChartError;

    #[test]
    fn value_labels_drop_trailing_zero_fraction() {
        assert_eq!(format_value_label(10.0), "10");
        assert_eq!(format_value_label(10.5), "10.5");
        assert_eq!(format_value_label(-6.0), "-6");
    }

    #[test]
    fn negative_zero_label_prints_as_zero() {
        assert_eq!(format_value_label(-0.0), "0");
        assert_eq!(format_value_label(0.0), "0");
    }

    #[test]
    fn layout_for_sample_dataset_matches_reference_bands() {
        let config = FilterChartConfig::default();
        let store = sample_dataset().expect("sample dataset");
        let layout = ChartLayout::from_dataset(&config, &store).expect("layout");

        assert_eq!(layout.x_scale.step(), 146.0);
        assert_eq!(layout.x_scale.bandwidth(), 131.0);
        assert_eq!(layout.x_scale.position("USA"), Some(15.0));
        assert_eq!(layout.y_scale.domain(), (0.0, 15.0));
        assert_eq!(layout.plot_height, 370.0);
    }

    #[test]
    fn layout_rejects_values_that_overflow_the_axis() {
        let config = FilterChartConfig::default().with_value_headroom(0.0);
        let store = DatasetStore::load(vec![
            Item::new("tiny", 1e-320, "a").expect("tiny"),
            Item::new("huge", -1e300, "b").expect("huge"),
        ])
        .expect("store");

        let err = ChartLayout::from_dataset(&config, &store).expect_err("overflow must fail");
        match err {
            ChartError::InvalidData(message) => assert!(message.contains("`huge`")),
            other => panic!("unexpected error: {other:?}"),
        }
    }
}
