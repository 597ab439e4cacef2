// File: crates/barchart-render-skia/src/lib.rs
// Summary: Headless PNG rendering of a bar surface using Skia CPU raster surfaces.

use std::path::Path;

use barchart_core::{BarGeometry, RenderedSurface};
use skia_safe as skia;

#[derive(Debug, thiserror::Error)]
pub enum RasterError {
    /// Canvas rounds to zero or negative pixels.
    #[error("cannot allocate a {width}x{height} raster surface")]
    EmptySurface { width: f64, height: f64 },
    #[error("failed to create raster surface")]
    Surface,
    #[error("encode PNG failed")]
    Encode,
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

pub type Result<T, E = RasterError> = std::result::Result<T, E>;

/// Paint settings. Defaults follow SVG: transparent background, black fill.
#[derive(Clone, Copy, Debug)]
pub struct RasterOptions {
    pub background: skia::Color,
    pub bar_fill: skia::Color,
    pub anti_alias: bool,
}

impl Default for RasterOptions {
    fn default() -> Self {
        Self {
            background: skia::Color::from_argb(0, 0, 0, 0),
            bar_fill: skia::Color::from_argb(255, 0, 0, 0),
            anti_alias: true,
        }
    }
}

#[derive(Clone, Copy, Debug, Default)]
pub struct SkiaRenderer;

impl SkiaRenderer {
    pub fn new() -> Self { Self }

    /// Render `surface` to PNG bytes.
    pub fn render_png_bytes(&self, surface: &RenderedSurface, opts: &RasterOptions) -> Result<Vec<u8>> {
        let (w, h) = pixel_size(surface)?;
        let mut raster = skia::surfaces::raster_n32_premul((w, h)).ok_or(RasterError::Surface)?;
        let canvas = raster.canvas();
        canvas.clear(opts.background);

        let mut paint = skia::Paint::default();
        paint.set_anti_alias(opts.anti_alias);
        paint.set_style(skia::paint::Style::Fill);
        paint.set_color(opts.bar_fill);

        let mut painted = 0usize;
        for bar in surface.bars.iter().filter(|b| paintable(b)) {
            let rect = skia::Rect::from_xywh(bar.x as f32, bar.y as f32, bar.width as f32, bar.height as f32);
            canvas.draw_rect(rect, &paint);
            painted += 1;
        }
        tracing::debug!(width = w, height = h, painted, skipped = surface.bars.len() - painted, "rasterized surface");

        let image = raster.image_snapshot();
        #[allow(deprecated)]
        let data = image
            .encode_to_data(skia::EncodedImageFormat::PNG)
            .ok_or(RasterError::Encode)?;
        Ok(data.as_bytes().to_vec())
    }

    /// Render `surface` to a PNG file at `output_png_path`, creating parent directories.
    pub fn render_png(
        &self,
        surface: &RenderedSurface,
        opts: &RasterOptions,
        output_png_path: impl AsRef<Path>,
    ) -> Result<()> {
        let bytes = self.render_png_bytes(surface, opts)?;
        if let Some(parent) = output_png_path.as_ref().parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(output_png_path, bytes)?;
        Ok(())
    }
}

fn pixel_size(surface: &RenderedSurface) -> Result<(i32, i32)> {
    let c = surface.canvas;
    let empty = || RasterError::EmptySurface { width: c.width, height: c.height };
    if !(c.width.is_finite() && c.height.is_finite()) || c.width <= 0.0 || c.height <= 0.0 {
        return Err(empty());
    }
    let w = c.width.ceil();
    let h = c.height.ceil();
    if w > i32::MAX as f64 || h > i32::MAX as f64 {
        return Err(empty());
    }
    Ok((w as i32, h as i32))
}

// SVG draws nothing for rectangles with non-positive extent.
fn paintable(b: &BarGeometry) -> bool {
    [b.x, b.y, b.width, b.height].iter().all(|v| v.is_finite()) && b.width > 0.0 && b.height > 0.0
}
