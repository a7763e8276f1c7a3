use serde::{Deserialize, Serialize};

use crate::core::{Margins, Viewport};
use crate::error::{ChartError, ChartResult};
use crate::render::Color;

/// Public chart configuration.
///
/// Serializable so hosts can keep chart setup next to their data; every field
/// has a default, so partial JSON documents are accepted.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FilterChartConfig {
    pub width: u32,
    pub height: u32,
    pub margins: Margins,
    /// Inner and outer band padding as a ratio of the band step.
    pub band_padding: f64,
    /// Added on top of the largest value when sizing the value axis.
    pub value_headroom: f64,
    pub bar_color: Color,
    pub label_color: Color,
    pub axis_color: Color,
    pub label_font_size_px: f64,
    pub axis_font_size_px: f64,
    pub axis_tick_size_px: f64,
    pub axis_stroke_width: f64,
}

impl Default for FilterChartConfig {
    fn default() -> Self {
        Self {
            width: 600,
            height: 400,
            margins: Margins::default(),
            band_padding: 0.1,
            value_headroom: 3.0,
            bar_color: Color::rgb(114.0 / 255.0, 5.0 / 255.0, 112.0 / 255.0),
            label_color: Color::rgb(0.0, 0.0, 0.0),
            axis_color: Color::rgb(79.0 / 255.0, 0.0, 158.0 / 255.0),
            label_font_size_px: 14.0,
            axis_font_size_px: 10.0,
            axis_tick_size_px: 6.0,
            axis_stroke_width: 1.0,
        }
    }
}

impl FilterChartConfig {
    #[must_use]
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_margins(mut self, margins: Margins) -> Self {
        self.margins = margins;
        self
    }

    #[must_use]
    pub fn with_band_padding(mut self, band_padding: f64) -> Self {
        self.band_padding = band_padding;
        self
    }

    #[must_use]
    pub fn with_value_headroom(mut self, value_headroom: f64) -> Self {
        self.value_headroom = value_headroom;
        self
    }

    #[must_use]
    pub fn viewport(&self) -> Viewport {
        Viewport::new(self.width, self.height)
    }

    /// Height available to bars: the viewport minus vertical margins.
    #[must_use]
    pub fn plot_height(&self) -> f64 {
        f64::from(self.height) - self.margins.vertical_sum()
    }

    pub fn validate(self) -> ChartResult<Self> {
        if !self.viewport().is_valid() {
            return Err(ChartError::InvalidViewport {
                width: self.width,
                height: self.height,
            });
        }
        for (name, value) in [
            ("margins.top", self.margins.top),
            ("margins.bottom", self.margins.bottom),
            ("value_headroom", self.value_headroom),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(ChartError::InvalidData(format!(
                    "`{name}` must be finite and >= 0"
                )));
            }
        }
        if self.plot_height() <= 0.0 {
            return Err(ChartError::InvalidData(
                "margins leave no room for the plot".to_owned(),
            ));
        }
        if !self.band_padding.is_finite() || !(0.0..1.0).contains(&self.band_padding) {
            return Err(ChartError::InvalidData(
                "`band_padding` must be finite and in [0, 1)".to_owned(),
            ));
        }
        for (name, value) in [
            ("label_font_size_px", self.label_font_size_px),
            ("axis_font_size_px", self.axis_font_size_px),
            ("axis_stroke_width", self.axis_stroke_width),
        ] {
            if !value.is_finite() || value <= 0.0 {
                return Err(ChartError::InvalidData(format!(
                    "`{name}` must be finite and > 0"
                )));
            }
        }
        if !self.axis_tick_size_px.is_finite() || self.axis_tick_size_px < 0.0 {
            return Err(ChartError::InvalidData(
                "`axis_tick_size_px` must be finite and >= 0".to_owned(),
            ));
        }
        self.bar_color.validate()?;
        self.label_color.validate()?;
        self.axis_color.validate()?;

        Ok(self)
    }
}
