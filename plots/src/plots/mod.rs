pub mod curves;
pub mod histogram;
pub mod profiles;
mod series;
pub mod traits;

pub use curves::{
    Band, CurveStyle, Highlight, RankCurve, RankCurveData, RankCurvePlot, RankSpan, ReferenceLine,
};
pub use histogram::{JointHistogram, JointHistogramPlot};
pub use profiles::{ProfileFamily, ProfilePlot, profile_colors};
pub use traits::Plot;

use crate::options::BasePlotOptions;
use plotters::chart::ChartBuilder;
use plotters::coord::Shift;
use plotters::drawing::DrawingArea;
use plotters::prelude::{DrawingBackend, IntoFont};
use rank_axis::tick_label_at;

/// Chart builder laid out from the base options
pub(crate) fn chart_builder<'a, 'b, DB: DrawingBackend>(
    area: &'a DrawingArea<DB, Shift>,
    base: &BasePlotOptions,
) -> ChartBuilder<'a, 'b, DB> {
    let mut builder = ChartBuilder::on(area);
    builder
        .margin(base.margin)
        .x_label_area_size(base.x_label_area_size)
        .y_label_area_size(base.y_label_area_size);
    if !base.title.is_empty() {
        builder.caption(&base.title, ("sans-serif", 20).into_font());
    }
    builder
}

/// Label formatter for a rank axis: rank labels at decades, blank elsewhere
pub(crate) fn rank_label(coordinate: &f64, tolerance: f64) -> String {
    tick_label_at(*coordinate, tolerance).unwrap_or_default()
}
