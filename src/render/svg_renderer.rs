use std::fmt::Write as _;

use tracing::trace;

use crate::error::{ChartError, ChartResult};
use crate::render::{Color, RenderFrame, Renderer, TextHAlign};

/// Renders frames into a standalone SVG document.
///
/// Keyed rects are emitted with class `bar` and keyed texts with class
/// `label`; the key is written as `data-id`.
#[derive(Debug, Default)]
pub struct SvgRenderer {
    document: String,
    render_count: usize,
}

impl SvgRenderer {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Document produced by the most recent render, empty before the first one.
    #[must_use]
    pub fn document(&self) -> &str {
        &self.document
    }

    #[must_use]
    pub fn into_document(self) -> String {
        self.document
    }

    #[must_use]
    pub fn render_count(&self) -> usize {
        self.render_count
    }
}

impl Renderer for SvgRenderer {
    fn render(&mut self, frame: &RenderFrame) -> ChartResult<()> {
        frame.validate()?;
        let document = write_document(frame).map_err(|err| {
            ChartError::InvalidData(format!("failed to format svg document: {err}"))
        })?;
        trace!(bytes = document.len(), "svg frame rendered");
        self.document = document;
        self.render_count += 1;
        Ok(())
    }
}

fn write_document(frame: &RenderFrame) -> Result<String, std::fmt::Error> {
    let mut out = String::new();
    writeln!(
        out,
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{}" height="{}">"#,
        frame.viewport.width, frame.viewport.height
    )?;
    writeln!(out, "  <g>")?;

    for line in &frame.lines {
        writeln!(
            out,
            r#"    <line x1="{}" y1="{}" x2="{}" y2="{}" stroke="{}"{} stroke-width="{}"/>"#,
            line.x1,
            line.y1,
            line.x2,
            line.y2,
            line.color.to_hex(),
            opacity_attr("stroke-opacity", line.color),
            line.stroke_width
        )?;
    }

    for rect in &frame.rects {
        let class = if rect.key.is_some() { r#" class="bar""# } else { "" };
        writeln!(
            out,
            r#"    <rect{class}{} x="{}" y="{}" width="{}" height="{}" fill="{}"{}/>"#,
            data_id_attr(rect.key.as_deref()),
            rect.x,
            rect.y,
            rect.width,
            rect.height,
            rect.fill_color.to_hex(),
            opacity_attr("fill-opacity", rect.fill_color)
        )?;
    }

    for text in &frame.texts {
        let class = if text.key.is_some() {
            r#" class="label""#
        } else {
            ""
        };
        writeln!(
            out,
            r#"    <text{class}{} x="{}" y="{}" font-size="{}" fill="{}"{} text-anchor="{}">{}</text>"#,
            data_id_attr(text.key.as_deref()),
            text.x,
            text.y,
            text.font_size_px,
            text.color.to_hex(),
            opacity_attr("fill-opacity", text.color),
            text_anchor(text.h_align),
            escape_xml(&text.text)
        )?;
    }

    writeln!(out, "  </g>")?;
    writeln!(out, "</svg>")?;
    Ok(out)
}

fn text_anchor(align: TextHAlign) -> &'static str {
    match align {
        TextHAlign::Left => "start",
        TextHAlign::Center => "middle",
        TextHAlign::Right => "end",
    }
}

fn opacity_attr(name: &str, color: Color) -> String {
    if color.alpha >= 1.0 {
        String::new()
    } else {
        format!(r#" {name}="{}""#, color.alpha)
    }
}

fn data_id_attr(key: Option<&str>) -> String {
    key.map(|key| format!(r#" data-id="{}""#, escape_xml(key)))
        .unwrap_or_default()
}

fn escape_xml(input: &str) -> String {
    let mut escaped = String::with_capacity(input.len());
    for ch in input.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&apos;"),
            _ => escaped.push(ch),
        }
    }
    escaped
}
