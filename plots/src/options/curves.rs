use crate::options::{AxisOptions, BasePlotOptions, PlotOptions, RankAxisOptions};
use derive_builder::Builder;
use strum_macros::{Display, EnumString};

/// Which chart axis carries the ranks
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, EnumString, Display)]
#[strum(serialize_all = "lowercase")]
pub enum RankAxisSide {
    /// Ranks along x, values up the y axis
    #[default]
    X,
    /// Ranks up the y axis, values along x
    Y,
}

/// Options for curves drawn over ranks
///
/// By default the x axis is the reciprocal-logarithmic rank axis and the y
/// axis holds the curve values; `rank_on` swaps the two.
///
/// # Example
///
/// ```rust
/// use rank_plots::options::{AxisOptions, RankAxisOptions, RankAxisSide, RankCurvePlotOptions};
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let options = RankCurvePlotOptions::new()
///     .rank_axis(RankAxisOptions::new().rank_range(0.0..=99.99).build()?)
///     .value_axis(AxisOptions::new().label("Scaling (%/K)").build()?)
///     .rank_on("y".parse::<RankAxisSide>()?)
///     .build()?;
/// assert_eq!(options.rank_on, RankAxisSide::Y);
/// # Ok(())
/// # }
/// ```
#[derive(Builder, Clone, Debug, Default)]
#[builder(setter(into, strip_option), default)]
pub struct RankCurvePlotOptions {
    /// Base plot options (layout, dimensions, etc.)
    #[builder(default)]
    pub base: BasePlotOptions,

    /// Rank axis configuration
    #[builder(default)]
    pub rank_axis: RankAxisOptions,

    /// Value axis configuration
    #[builder(default)]
    pub value_axis: AxisOptions,

    /// Axis the ranks are drawn on
    #[builder(default)]
    pub rank_on: RankAxisSide,
}

impl PlotOptions for RankCurvePlotOptions {
    fn base(&self) -> &BasePlotOptions {
        &self.base
    }
}

impl RankCurvePlotOptions {
    /// Create a new builder for RankCurvePlotOptions
    pub fn new() -> RankCurvePlotOptionsBuilder {
        RankCurvePlotOptionsBuilder::default()
    }
}
