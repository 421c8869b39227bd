use crate::PlotBytes;
use crate::options::BasePlotOptions;
use anyhow::{Result, anyhow, bail};
use plotters::{
    backend::BitMapBackend, coord::Shift, drawing::DrawingArea, prelude::IntoDrawingArea,
    style::WHITE,
};
use std::time::Instant;
use tracing::debug;

/// Render into an in-memory RGB bitmap and encode it
///
/// The buffer is sized from `base`, filled white, handed to `draw`, and
/// encoded with `base.format` once plotters has released it.
pub fn render_bitmap<F>(base: &BasePlotOptions, draw: F) -> Result<PlotBytes>
where
    F: FnOnce(&DrawingArea<BitMapBackend<'_>, Shift>) -> Result<()>,
{
    let (width, height) = (base.width, base.height);
    if width == 0 || height == 0 {
        bail!("cannot render a {width}x{height} plot");
    }

    let draw_start = Instant::now();
    // RGB buffer (3 bytes per pixel), JPEG has no alpha channel
    let mut pixel_buffer = vec![255; width as usize * height as usize * 3];
    {
        let root = BitMapBackend::with_buffer(&mut pixel_buffer, (width, height)).into_drawing_area();
        root.fill(&WHITE)
            .map_err(|e| anyhow!("failed to fill plot background: {e}"))?;

        draw(&root)?;

        root.present()
            .map_err(|e| anyhow!("failed to present plotters buffer: {e}"))?;
    }
    debug!(width, height, elapsed = ?draw_start.elapsed(), "drew plot");

    let encode_start = Instant::now();
    let encoded = base.format.encode_rgb(&pixel_buffer, width, height)?;
    debug!(
        format = %base.format,
        bytes = encoded.len(),
        elapsed = ?encode_start.elapsed(),
        "encoded plot"
    );
    Ok(encoded)
}
