// File: crates/barchart-core/src/geometry.rs
// Summary: Per-bar pixel math. Values are never clamped.

use crate::types::CanvasSpec;

/// Rectangle of one bar in surface coordinates (origin top-left, y down).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BarGeometry {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl BarGeometry {
    pub const fn from_xywh(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self { x, y, width, height }
    }

    /// Geometry of the bar at `index` holding `value`, out of `count` bars.
    ///
    /// The operation order matches the browser reference exactly so the
    /// emitted attribute strings are identical.
    #[inline]
    pub fn compute(index: usize, value: f64, count: usize, canvas: &CanvasSpec, padding: f64, scale: f64) -> Self {
        let band = canvas.band(count);
        let height = value * scale;
        Self::from_xywh(index as f64 * band, canvas.height - height, band - padding, height)
    }

    pub fn right(&self) -> f64 { self.x + self.width }
    pub fn bottom(&self) -> f64 { self.y + self.height }

    /// True when the bar cannot be drawn as a visible, in-bounds rectangle.
    pub fn is_degenerate(&self) -> bool {
        let finite = self.x.is_finite() && self.y.is_finite() && self.width.is_finite() && self.height.is_finite();
        !finite || self.width <= 0.0 || self.height <= 0.0 || self.y < 0.0
    }
}

/// Compute one bar per value, in dataset order.
pub fn layout_bars(dataset: &[f64], canvas: &CanvasSpec, padding: f64, scale: f64) -> Vec<BarGeometry> {
    let n = dataset.len();
    dataset
        .iter()
        .enumerate()
        .map(|(i, &d)| BarGeometry::compute(i, d, n, canvas, padding, scale))
        .collect()
}
