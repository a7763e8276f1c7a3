mod plugins;

pub use plugins::{ChartPlugin, PluginContext, PluginEvent};
