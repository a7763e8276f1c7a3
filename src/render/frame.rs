use crate::core::Viewport;
use crate::error::{ChartError, ChartResult};
use crate::render::{LinePrimitive, RectPrimitive, TextPrimitive};

/// Everything one redraw of the filter chart paints.
///
/// Axis strokes live in `lines`, bars in `rects`, axis and value labels in
/// `texts`. Renderers paint the three lists in that order, so labels always
/// sit on top of the bars they annotate. Bars and value labels carry their
/// item id as `key`; axis primitives are unkeyed.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderFrame {
    pub viewport: Viewport,
    pub lines: Vec<LinePrimitive>,
    pub rects: Vec<RectPrimitive>,
    pub texts: Vec<TextPrimitive>,
}

impl RenderFrame {
    #[must_use]
    pub fn new(viewport: Viewport) -> Self {
        Self {
            viewport,
            lines: Vec::new(),
            rects: Vec::new(),
            texts: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_line(mut self, line: LinePrimitive) -> Self {
        self.lines.push(line);
        self
    }

    #[must_use]
    pub fn with_rect(mut self, rect: RectPrimitive) -> Self {
        self.rects.push(rect);
        self
    }

    #[must_use]
    pub fn with_text(mut self, text: TextPrimitive) -> Self {
        self.texts.push(text);
        self
    }

    /// Rejects a zero-sized viewport and any primitive with non-finite
    /// geometry, reporting the first offender.
    pub fn validate(&self) -> ChartResult<()> {
        let Viewport { width, height } = self.viewport;
        if !self.viewport.is_valid() {
            return Err(ChartError::InvalidViewport { width, height });
        }

        self.lines.iter().try_for_each(|line| line.validate())?;
        self.rects.iter().try_for_each(RectPrimitive::validate)?;
        self.texts.iter().try_for_each(TextPrimitive::validate)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty() && self.rects.is_empty() && self.texts.is_empty()
    }

    /// Number of bars painted, i.e. keyed rects.
    #[must_use]
    pub fn bar_count(&self) -> usize {
        self.rect_keys().count()
    }

    /// Item ids of the painted bars, left to right in dataset order.
    pub fn rect_keys(&self) -> impl Iterator<Item = &str> {
        self.rects.iter().filter_map(|rect| rect.key.as_deref())
    }

    /// Item ids of the painted value labels.
    pub fn text_keys(&self) -> impl Iterator<Item = &str> {
        self.texts.iter().filter_map(|text| text.key.as_deref())
    }
}
