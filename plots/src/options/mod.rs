pub mod axis;
pub mod base;
pub mod curves;
pub mod histogram;
pub mod profiles;

pub use axis::{AxisOptions, AxisOptionsBuilder, RankAxisOptions, RankAxisOptionsBuilder};
pub use base::{BasePlotOptions, BasePlotOptionsBuilder};
pub use curves::{RankAxisSide, RankCurvePlotOptions, RankCurvePlotOptionsBuilder};
pub use histogram::{HistogramScale, JointHistogramOptions, JointHistogramOptionsBuilder};
pub use profiles::{ProfilePlotOptions, ProfilePlotOptionsBuilder};

/// Trait for plot options types
///
/// All plot-specific options structs should implement this trait to provide
/// access to the base options.
pub trait PlotOptions {
    /// Get a reference to the base plot options
    fn base(&self) -> &BasePlotOptions;
}
