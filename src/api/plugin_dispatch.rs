use crate::extensions::{PluginContext, PluginEvent};
use crate::render::Renderer;

use super::filter_chart::ChartView;

impl<R: Renderer> ChartView<R> {
    fn plugin_context(&self, visible_len: usize) -> PluginContext {
        PluginContext {
            total_len: self.total_len,
            visible_len,
            excluded_len: self.total_len.saturating_sub(visible_len),
        }
    }

    pub(super) fn emit_plugin_event(&mut self, event: PluginEvent, visible_len: usize) {
        let context = self.plugin_context(visible_len);
        for plugin in &mut self.plugins {
            plugin.on_event(event, context);
        }
    }
}
