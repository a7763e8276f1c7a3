use std::cell::RefCell;
use std::rc::Rc;

use tracing::{debug, warn};

use crate::core::{DatasetStore, Item};
use crate::error::{ChartError, ChartResult};
use crate::extensions::{ChartPlugin, PluginEvent};
use crate::interaction::{CheckboxChange, FilterCheckbox};
use crate::render::{RenderFrame, Renderer};

use super::{
    ChartLayout, FilterChartConfig, SelectionController, SelectionSnapshot, ToggleOutcome,
};

/// Rendering side of the chart, shared with the selection listener.
pub(super) struct ChartView<R: Renderer> {
    pub(super) renderer: R,
    pub(super) config: FilterChartConfig,
    pub(super) layout: ChartLayout,
    pub(super) plugins: Vec<Box<dyn ChartPlugin>>,
    pub(super) total_len: usize,
    pub(super) last_frame: Option<RenderFrame>,
    pub(super) last_render_error: Option<ChartError>,
}

impl<R: Renderer> ChartView<R> {
    fn draw(&mut self, visible: &[Item]) -> ChartResult<()> {
        let frame = self.layout.build_frame(&self.config, visible)?;
        self.renderer.render(&frame)?;
        let bar_count = frame.bar_count();
        self.last_frame = Some(frame);
        self.last_render_error = None;
        self.emit_plugin_event(PluginEvent::Rendered { bar_count }, visible.len());
        Ok(())
    }

    /// Listener entry point: errors cannot propagate through the selection
    /// callback, so they are logged and kept for the host to inspect.
    fn redraw(&mut self, visible: &[Item]) {
        self.emit_plugin_event(
            PluginEvent::SelectionChanged {
                visible_len: visible.len(),
            },
            visible.len(),
        );
        if let Err(err) = self.draw(visible) {
            warn!(error = %err, visible = visible.len(), "redraw after toggle failed");
            self.last_render_error = Some(err);
        }
    }
}

/// Bar chart whose visible bars follow a set of user-toggled filters.
///
/// The chart registers itself as the selection listener: every toggle
/// recomputes the visible subset and redraws through `R`.
pub struct FilterChart<R: Renderer + 'static> {
    controller: SelectionController,
    pub(super) view: Rc<RefCell<ChartView<R>>>,
}

impl<R: Renderer + 'static> FilterChart<R> {
    pub fn new(renderer: R, config: FilterChartConfig, store: DatasetStore) -> ChartResult<Self> {
        let config = config.validate()?;
        let layout = ChartLayout::from_dataset(&config, &store)?;
        debug!(
            items = store.len(),
            width = config.width,
            height = config.height,
            "filter chart created"
        );

        let view = Rc::new(RefCell::new(ChartView {
            renderer,
            config,
            layout,
            plugins: Vec::new(),
            total_len: store.len(),
            last_frame: None,
            last_render_error: None,
        }));

        let mut controller = SelectionController::new(store);
        let listener_view = Rc::clone(&view);
        controller.on_change(move |visible| listener_view.borrow_mut().redraw(visible));

        Ok(Self { controller, view })
    }

    /// Draws the current visible subset. Used for the initial frame.
    pub fn render(&mut self) -> ChartResult<()> {
        let visible = self.controller.visible_items();
        self.view.borrow_mut().draw(&visible)
    }

    /// Toggles one item and redraws.
    pub fn toggle(&mut self, id: &str) -> ToggleOutcome {
        self.controller.toggle(id)
    }

    /// Applies a checkbox change, toggling only when the requested state
    /// differs from the current one. Returns `None` when nothing was toggled.
    pub fn on_checkbox_change(&mut self, change: &CheckboxChange) -> Option<ToggleOutcome> {
        let currently_checked = !self.controller.is_excluded(&change.id);
        if !change.requires_toggle(currently_checked) {
            return None;
        }
        Some(self.toggle(&change.id))
    }

    #[must_use]
    pub fn checkbox_rows(&self) -> Vec<FilterCheckbox> {
        FilterCheckbox::rows(self.controller.store().all_items(), |id| {
            self.controller.is_excluded(id)
        })
    }

    #[must_use]
    pub fn visible_items(&self) -> Vec<Item> {
        self.controller.visible_items()
    }

    #[must_use]
    pub fn controller(&self) -> &SelectionController {
        &self.controller
    }

    #[must_use]
    pub fn snapshot(&self) -> SelectionSnapshot {
        self.controller.snapshot()
    }

    #[must_use]
    pub fn config(&self) -> FilterChartConfig {
        self.view.borrow().config
    }

    #[must_use]
    pub fn layout(&self) -> ChartLayout {
        self.view.borrow().layout.clone()
    }

    /// Frame handed to the renderer by the most recent successful draw.
    #[must_use]
    pub fn last_frame(&self) -> Option<RenderFrame> {
        self.view.borrow().last_frame.clone()
    }

    /// Error from the most recent draw, cleared by the next successful one.
    #[must_use]
    pub fn last_render_error(&self) -> Option<ChartError> {
        self.view.borrow().last_render_error.clone()
    }

    pub fn with_renderer<T>(&self, f: impl FnOnce(&R) -> T) -> T {
        f(&self.view.borrow().renderer)
    }

    pub fn with_renderer_mut<T>(&mut self, f: impl FnOnce(&mut R) -> T) -> T {
        f(&mut self.view.borrow_mut().renderer)
    }
}
