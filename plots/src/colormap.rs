use colorgrad::Gradient;
use plotters::style::RGBColor;
use serde::{Deserialize, Serialize};
use strum_macros::EnumIter;

/// Color map options for histograms and profile families
///
/// All maps come from colorgrad presets and are categorized into:
///
/// - **Perceptually uniform sequential**: Viridis, Plasma, Inferno, Magma, Turbo, Cividis
///   (excellent for continuous data, colorblind-friendly)
/// - **Diverging**: Spectral (the default for profile families)
/// - **Traditional**: Rainbow, Sinebow (colorful but less perceptually uniform)
/// - **Other**: Warm, Cool, CubehelixDefault
///
/// # Recommendations
///
/// - **Joint histograms**: `Viridis` - perceptually uniform, colorblind-friendly
/// - **Profiles ordered by a reference value**: `Spectral`
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize, EnumIter)]
pub enum ColorMaps {
    /// Viridis - perceptually uniform, colorblind-friendly (default)
    #[default]
    Viridis,
    /// Plasma - perceptually uniform, high contrast
    Plasma,
    /// Inferno - perceptually uniform, dark background friendly
    Inferno,
    /// Magma - perceptually uniform, dark to bright
    Magma,
    /// Turbo - vibrant rainbow replacement
    Turbo,
    /// Cividis - colorblind-friendly, optimized for printing
    Cividis,
    /// Warm - warm color palette
    Warm,
    /// Cool - cool color palette
    Cool,
    /// Cubehelix - monotonic lightness
    CubehelixDefault,
    /// Rainbow - traditional rainbow colors (use with caution)
    Rainbow,
    /// Sinebow - smooth cyclic rainbow
    Sinebow,
    /// Spectral - diverging colormap
    Spectral,
}

impl ColorMaps {
    /// Map a normalized value (0.0 to 1.0) to an RGB color
    ///
    /// Values outside [0, 1] are clamped; NaN maps to the low end.
    pub fn map(&self, value: f64) -> RGBColor {
        let t = if value.is_nan() {
            0.0
        } else {
            value.clamp(0.0, 1.0) as f32
        };

        // colorgrad Color has r, g, b, a as f32 in range [0.0, 1.0]
        let color = match self {
            ColorMaps::Viridis => colorgrad::preset::viridis().at(t),
            ColorMaps::Plasma => colorgrad::preset::plasma().at(t),
            ColorMaps::Inferno => colorgrad::preset::inferno().at(t),
            ColorMaps::Magma => colorgrad::preset::magma().at(t),
            ColorMaps::Turbo => colorgrad::preset::turbo().at(t),
            ColorMaps::Cividis => colorgrad::preset::cividis().at(t),
            ColorMaps::Warm => colorgrad::preset::warm().at(t),
            ColorMaps::Cool => colorgrad::preset::cool().at(t),
            ColorMaps::CubehelixDefault => colorgrad::preset::cubehelix_default().at(t),
            ColorMaps::Rainbow => colorgrad::preset::rainbow().at(t),
            ColorMaps::Sinebow => colorgrad::preset::sinebow().at(t),
            ColorMaps::Spectral => colorgrad::preset::spectral().at(t),
        };

        RGBColor(
            (color.r.clamp(0.0, 1.0) * 255.0) as u8,
            (color.g.clamp(0.0, 1.0) * 255.0) as u8,
            (color.b.clamp(0.0, 1.0) * 255.0) as u8,
        )
    }
}

/// How data values are mapped onto [0, 1] before a colormap lookup
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub enum Normalization {
    /// `(v - vmin) / (vmax - vmin)`
    #[default]
    Linear,
    /// Linear in `ln(v)`; non-positive values and bounds cannot be mapped
    Log,
    /// Diverging: `vmin -> 0`, `midpoint -> 0.5`, `vmax -> 1`, piecewise linear and clamped
    Midpoint { midpoint: f64 },
}

impl Normalization {
    /// Normalize `value` against `[vmin, vmax]`.
    ///
    /// Returns `None` for NaN, for bounds that cannot describe a range, and for
    /// values a log scale cannot represent. Linear and log results are not
    /// clamped; [`ColorMaps::map`] clamps.
    pub fn normalize(&self, value: f64, vmin: f64, vmax: f64) -> Option<f64> {
        if value.is_nan() || !vmin.is_finite() || !vmax.is_finite() {
            return None;
        }
        match self {
            Normalization::Linear => {
                let span = vmax - vmin;
                if span == 0.0 {
                    return Some(0.0);
                }
                Some((value - vmin) / span)
            }
            Normalization::Log => {
                if value <= 0.0 || vmin <= 0.0 || vmax <= 0.0 {
                    return None;
                }
                let span = vmax.ln() - vmin.ln();
                if span == 0.0 {
                    return Some(0.0);
                }
                Some((value.ln() - vmin.ln()) / span)
            }
            Normalization::Midpoint { midpoint } => {
                let midpoint = *midpoint;
                if !(vmin < midpoint && midpoint < vmax) {
                    return None;
                }
                let t = if value <= midpoint {
                    0.5 * (value - vmin) / (midpoint - vmin)
                } else {
                    0.5 + 0.5 * (value - midpoint) / (vmax - midpoint)
                };
                Some(t.clamp(0.0, 1.0))
            }
        }
    }
}
