use crate::colormap::{ColorMaps, Normalization};
use crate::options::{BasePlotOptions, PlotOptions, RankAxisOptions};
use derive_builder::Builder;
use strum_macros::{Display, EnumString};

/// Color scaling of histogram cell values
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, EnumString, Display)]
#[strum(serialize_all = "lowercase")]
pub enum HistogramScale {
    #[default]
    Linear,
    Log,
}

impl HistogramScale {
    pub fn normalization(&self) -> Normalization {
        match self {
            HistogramScale::Linear => Normalization::Linear,
            HistogramScale::Log => Normalization::Log,
        }
    }
}

/// Options for joint histograms on two rank axes
///
/// # Example
///
/// ```rust
/// use rank_plots::colormap::ColorMaps;
/// use rank_plots::options::{HistogramScale, JointHistogramOptions};
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let options = JointHistogramOptions::new()
///     .colormap(ColorMaps::Magma)
///     .scale("log".parse::<HistogramScale>()?)
///     .vmin(1e-4)
///     .build()?;
/// assert_eq!(options.vmax, 1.0);
/// # Ok(())
/// # }
/// ```
#[derive(Builder, Clone, Debug)]
#[builder(setter(into, strip_option), default)]
pub struct JointHistogramOptions {
    /// Base plot options (layout, dimensions, etc.)
    #[builder(default)]
    pub base: BasePlotOptions,

    /// Rank axis along the histogram columns
    #[builder(default)]
    pub x_axis: RankAxisOptions,

    /// Rank axis along the histogram rows
    #[builder(default)]
    pub y_axis: RankAxisOptions,

    /// Color map for cell values
    #[builder(default = "ColorMaps::Viridis")]
    pub colormap: ColorMaps,

    /// Linear or logarithmic color scaling
    #[builder(default)]
    pub scale: HistogramScale,

    /// Value mapped to the low end of the color map
    #[builder(default = "1e-3")]
    pub vmin: f64,

    /// Value mapped to the high end of the color map
    #[builder(default = "1.0")]
    pub vmax: f64,
}

impl Default for JointHistogramOptions {
    fn default() -> Self {
        Self {
            base: BasePlotOptions::default(),
            x_axis: RankAxisOptions::default(),
            y_axis: RankAxisOptions::default(),
            colormap: ColorMaps::Viridis,
            scale: HistogramScale::Linear,
            vmin: 1e-3,
            vmax: 1.0,
        }
    }
}

impl PlotOptions for JointHistogramOptions {
    fn base(&self) -> &BasePlotOptions {
        &self.base
    }
}

impl JointHistogramOptions {
    /// Create a new builder for JointHistogramOptions
    pub fn new() -> JointHistogramOptionsBuilder {
        JointHistogramOptionsBuilder::default()
    }
}
