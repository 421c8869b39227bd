//! # rank-plots
//!
//! Plots over percentile ranks, drawn with plotters on a
//! reciprocal-logarithmic rank axis from [`rank_axis`].
//!
//! ## Overview
//!
//! Every plot type implements [`Plot`]: it draws onto any plotters
//! [`DrawingArea`](plotters::drawing::DrawingArea), and renders to PNG or
//! JPEG bytes through an in-memory bitmap.
//!
//! ## Basic Usage
//!
//! ```rust,no_run
//! use plotters::style::BLUE;
//! use rank_plots::{CurveStyle, Plot, RankCurveData, RankCurvePlot, RankCurvePlotOptions};
//!
//! # fn main() -> anyhow::Result<()> {
//! let ranks = vec![50.0, 90.0, 99.0, 99.9];
//! let data = RankCurveData::new(ranks).curve(vec![1.0, 2.5, 4.0, 7.0], CurveStyle::new(BLUE, 2));
//! let options = RankCurvePlotOptions::new().build()?;
//! let bytes = RankCurvePlot::new().render(&data, &options)?;
//! # Ok(())
//! # }
//! ```
//!
//! ## Architecture
//!
//! The library is organized into several modules:
//!
//! - `options`: Plot configuration types using the builder pattern
//! - `plots`: Plot implementations (`RankCurvePlot`, `JointHistogramPlot`, `ProfilePlot`)
//! - `render`: Bitmap rendering and image encoding
//! - `colormap`: Color maps and value normalizations

pub mod colormap;
pub mod options;
pub mod plots;
pub mod render;


// Re-export commonly used types
pub use colormap::{ColorMaps, Normalization};
pub use options::{
    AxisOptions, BasePlotOptions, HistogramScale, JointHistogramOptions, PlotOptions,
    ProfilePlotOptions, RankAxisOptions, RankAxisSide, RankCurvePlotOptions,
};
pub use plots::{
    CurveStyle, JointHistogram, JointHistogramPlot, Plot, ProfileFamily, ProfilePlot,
    RankCurveData, RankCurvePlot,
};
pub use render::ImageFormat;

// Type aliases
pub type PlotBytes = Vec<u8>;
pub type PlotRange = std::ops::RangeInclusive<f64>;

/// Round `[min, max]` outwards to multiples of the power of ten below its width
pub(crate) fn nice_bounds(min: f64, max: f64) -> (f64, f64) {
    if min.is_infinite() || max.is_infinite() || min.is_nan() || max.is_nan() {
        return (0.0, 1.0); // Fallback for invalid ranges
    }

    let range = max - min;
    if range == 0.0 {
        return (min - 0.5, min + 0.5); // Handle single-point case
    }

    // Find nice step size
    let step_size = 10_f64.powf(range.log10().floor());
    let nice_min = (min / step_size).floor() * step_size;
    let nice_max = (max / step_size).ceil() * step_size;

    (nice_min, nice_max)
}
