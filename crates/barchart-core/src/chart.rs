// File: crates/barchart-core/src/chart.rs
// Summary: Render pass: compute bar geometry from a config and mount it as an SVG surface in a document.

use crate::config::ChartConfig;
use crate::dom::{Document, NodeId, Selector};
use crate::error::{ChartError, Result};
use crate::geometry::{layout_bars, BarGeometry};
use crate::types::CanvasSpec;

const SVG_NS: &str = "http://www.w3.org/2000/svg";

/// Description of one render pass: the surface size and one rectangle per datum.
#[derive(Clone, Debug, PartialEq)]
pub struct RenderedSurface {
    pub canvas: CanvasSpec,
    pub bars: Vec<BarGeometry>,
}

/// Compute the surface for `config`. Pure; the same config always yields the same bars.
pub fn render(config: &ChartConfig) -> RenderedSurface {
    let _span = tracing::debug_span!("render", bars = config.dataset.len()).entered();
    let canvas = config.canvas();
    let bars = layout_bars(&config.dataset, &canvas, config.bar_padding, config.scale_factor);

    for (i, bar) in bars.iter().enumerate().filter(|(_, b)| b.is_degenerate()) {
        tracing::warn!(
            index = i,
            x = bar.x,
            y = bar.y,
            width = bar.width,
            height = bar.height,
            "degenerate bar geometry"
        );
    }
    RenderedSurface { canvas, bars }
}

/// Render `dataset` with the default scale factor and mount it under `parent_selector`.
/// Returns the new `svg` element. Calling this twice appends a second surface.
pub fn render_into(
    doc: &mut Document,
    parent_selector: &str,
    dataset: &[f64],
    canvas: CanvasSpec,
    padding: f64,
) -> Result<NodeId> {
    let config = ChartConfig {
        svg_height: canvas.height,
        svg_width: canvas.width,
        bar_padding: padding,
        dataset: dataset.to_vec(),
        ..ChartConfig::default()
    };
    render(&config).mount(doc, parent_selector)
}

impl RenderedSurface {
    pub fn len(&self) -> usize { self.bars.len() }
    pub fn is_empty(&self) -> bool { self.bars.is_empty() }

    pub fn degenerate_count(&self) -> usize {
        self.bars.iter().filter(|b| b.is_degenerate()).count()
    }

    /// Append the surface under the first element matching `parent_selector`.
    pub fn mount(&self, doc: &mut Document, parent_selector: &str) -> Result<NodeId> {
        let parent = doc
            .query(parent_selector)?
            .ok_or_else(|| ChartError::MissingContainer { selector: parent_selector.to_string() })?;
        let svg = self.attach(doc, parent);
        tracing::debug!(selector = parent_selector, rects = self.bars.len(), "mounted surface");
        Ok(svg)
    }

    /// Standalone SVG document for the surface.
    pub fn to_svg(&self) -> String {
        let mut doc = Document::with_root("body");
        let root = doc.root();
        let svg = self.attach(&mut doc, root);
        doc.set_attr(svg, "xmlns", SVG_NS);
        doc.outer_html(svg)
    }

    fn attach(&self, doc: &mut Document, parent: NodeId) -> NodeId {
        let svg = doc.append_element(parent, "svg");
        doc.selection(svg)
            .attr("height", self.canvas.height)
            .attr("width", self.canvas.width)
            .select_all(Selector::tag("rect"))
            .data(&self.bars)
            .enter()
            .append("rect")
            .attr_with("x", |b, _| b.x)
            .attr_with("y", |b, _| b.y)
            .attr_with("width", |b, _| b.width)
            .attr_with("height", |b, _| b.height);
        svg
    }
}
