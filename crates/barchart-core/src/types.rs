// File: crates/barchart-core/src/types.rs
// Summary: Shared types and constants (canvas size, padding, scale, reference dataset).

/// Default surface width in pixels.
pub const SVG_WIDTH: f64 = 600.0;
/// Default surface height in pixels.
pub const SVG_HEIGHT: f64 = 100.0;
/// Default gap subtracted from every bar's width.
pub const BAR_PADDING: f64 = 1.0;
/// Pixels per data unit on the vertical axis.
pub const SCALE_FACTOR: f64 = 4.0;

/// Reference dataset rendered when no configuration is given.
pub const DATASET: [f64; 11] = [12.0, 19.0, 8.0, 17.0, 12.0, 9.0, 15.0, 12.0, 22.0, 25.0, 17.0];

/// Selector of the container the page adapter mounts into.
pub const DEFAULT_SELECTOR: &str = "#graph";

/// Pixel dimensions of the drawing surface.
/// Contract: none. Non-positive sizes are carried through and yield degenerate bars.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CanvasSpec {
    pub height: f64,
    pub width: f64,
}

impl CanvasSpec {
    pub const fn new(height: f64, width: f64) -> Self {
        Self { height, width }
    }

    /// Horizontal band allotted to each of `n` bars, before padding.
    #[inline]
    pub fn band(&self, n: usize) -> f64 {
        self.width / n as f64
    }
}

impl Default for CanvasSpec {
    fn default() -> Self {
        Self::new(SVG_HEIGHT, SVG_WIDTH)
    }
}
