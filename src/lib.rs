//! filter-chart: a checkbox-filterable bar chart core.
//!
//! A [`core::DatasetStore`] holds the immutable dataset, an
//! [`api::SelectionController`] tracks which items the user has hidden, and
//! [`api::FilterChart`] redraws through a [`render::Renderer`] every time the
//! selection changes.

pub mod api;
pub mod core;
pub mod error;
pub mod extensions;
pub mod interaction;
pub mod render;
pub mod telemetry;

pub use api::{FilterChart, FilterChartConfig, SelectionController, ToggleOutcome};
pub use error::{ChartError, ChartResult};
