use serde::{Deserialize, Serialize};

/// Read-only selection summary passed to plugin hooks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PluginContext {
    pub total_len: usize,
    pub visible_len: usize,
    pub excluded_len: usize,
}

/// Event stream exposed to plugins.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PluginEvent {
    /// The visible subset was recomputed after a toggle.
    SelectionChanged { visible_len: usize },
    /// A frame reached the renderer successfully.
    Rendered { bar_count: usize },
}

/// Observer hook for host-side logic such as legends or analytics.
///
/// Plugins see events and counts only; they cannot mutate the selection.
pub trait ChartPlugin {
    fn id(&self) -> &str;
    fn on_event(&mut self, event: PluginEvent, context: PluginContext);
}
