use crate::colormap::{ColorMaps, Normalization};
use crate::options::{AxisOptions, BasePlotOptions, PlotOptions};
use derive_builder::Builder;

/// Options for families of vertical profiles colored by a reference value
///
/// # Example
///
/// ```rust
/// use rank_plots::colormap::Normalization;
/// use rank_plots::options::ProfilePlotOptions;
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let options = ProfilePlotOptions::new()
///     .normalization(Normalization::Midpoint { midpoint: 300.0 })
///     .reference_min(290.0)
///     .reference_max(310.0)
///     .build()?;
/// # Ok(())
/// # }
/// ```
#[derive(Builder, Clone, Debug)]
#[builder(setter(into, strip_option), default)]
pub struct ProfilePlotOptions {
    /// Base plot options (layout, dimensions, etc.)
    #[builder(default)]
    pub base: BasePlotOptions,

    /// Profile value (x) axis
    #[builder(default)]
    pub x_axis: AxisOptions,

    /// Vertical coordinate (y) axis
    #[builder(default)]
    pub z_axis: AxisOptions,

    /// Color map indexed by the normalized reference value
    #[builder(default = "ColorMaps::Spectral")]
    pub colormap: ColorMaps,

    /// How reference values are normalized
    #[builder(default)]
    pub normalization: Normalization,

    /// Reference value at the low end of the color map; the first reference when unset
    pub reference_min: Option<f64>,

    /// Reference value at the high end of the color map; the last reference when unset
    pub reference_max: Option<f64>,

    /// Line width of each profile
    #[builder(default = "2")]
    pub line_width: u32,
}

impl Default for ProfilePlotOptions {
    fn default() -> Self {
        Self {
            base: BasePlotOptions::default(),
            x_axis: AxisOptions::default(),
            z_axis: AxisOptions::default(),
            colormap: ColorMaps::Spectral,
            normalization: Normalization::Linear,
            reference_min: None,
            reference_max: None,
            line_width: 2,
        }
    }
}

impl PlotOptions for ProfilePlotOptions {
    fn base(&self) -> &BasePlotOptions {
        &self.base
    }
}

impl ProfilePlotOptions {
    /// Create a new builder for ProfilePlotOptions
    pub fn new() -> ProfilePlotOptionsBuilder {
        ProfilePlotOptionsBuilder::default()
    }
}
