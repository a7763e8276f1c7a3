mod chart_config;
mod filter_chart;
mod json_contract;
mod plugin_dispatch;
mod plugin_registry;
mod render_frame_builder;
mod selection_controller;
mod selection_snapshot;

pub use chart_config::FilterChartConfig;
pub use filter_chart::FilterChart;
pub use json_contract::{SELECTION_SNAPSHOT_JSON_SCHEMA_V1, SelectionSnapshotJsonContractV1};
pub use render_frame_builder::{ChartLayout, format_value_label};
pub use selection_controller::{ChangeListener, SelectionController, ToggleOutcome};
pub use selection_snapshot::SelectionSnapshot;
