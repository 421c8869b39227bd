use crate::PlotBytes;
use crate::options::PlotOptions;
use crate::render::render_bitmap;
use anyhow::Result;
use plotters::coord::Shift;
use plotters::drawing::DrawingArea;
use plotters::prelude::DrawingBackend;

/// Trait for plot types
///
/// This trait defines the interface that all plot types must implement.
/// Each plot type specifies its own options type and data type, draws onto
/// any plotters drawing area, and gets bitmap rendering for free.
///
/// # Example
///
/// ```rust
/// use rank_plots::PlotBytes;
/// use rank_plots::options::{BasePlotOptions, PlotOptions};
/// use rank_plots::plots::traits::Plot;
/// use anyhow::{Result, anyhow};
/// use plotters::coord::Shift;
/// use plotters::prelude::*;
///
/// struct MyPlotOptions {
///     base: BasePlotOptions,
/// }
///
/// impl PlotOptions for MyPlotOptions {
///     fn base(&self) -> &BasePlotOptions { &self.base }
/// }
///
/// struct MyPlot;
///
/// impl Plot for MyPlot {
///     type Options = MyPlotOptions;
///     type Data = RGBColor;
///
///     fn draw<DB: DrawingBackend>(
///         &self,
///         area: &DrawingArea<DB, Shift>,
///         data: &Self::Data,
///         _options: &Self::Options,
///     ) -> Result<()> {
///         area.fill(data).map_err(|e| anyhow!("failed to fill: {e}"))
///     }
/// }
///
/// # fn main() -> Result<()> {
/// let options = MyPlotOptions { base: BasePlotOptions::default() };
/// let bytes: PlotBytes = MyPlot.render(&RED, &options)?;
/// assert!(!bytes.is_empty());
/// # Ok(())
/// # }
/// ```
pub trait Plot {
    /// The options type for this plot
    type Options: PlotOptions;

    /// The data type this plot accepts
    type Data;

    /// Draw the plot onto an existing drawing area
    ///
    /// Nothing is filled beforehand; callers composing several plots decide
    /// the background themselves.
    fn draw<DB: DrawingBackend>(
        &self,
        area: &DrawingArea<DB, Shift>,
        data: &Self::Data,
        options: &Self::Options,
    ) -> Result<()>;

    /// Render the plot to an encoded image
    ///
    /// # Returns
    ///
    /// PNG or JPEG bytes, following `options.base().format`
    fn render(&self, data: &Self::Data, options: &Self::Options) -> Result<PlotBytes> {
        render_bitmap(options.base(), |area| self.draw(area, data, options))
    }
}
