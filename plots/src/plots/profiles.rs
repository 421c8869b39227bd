use crate::options::{PlotOptions, ProfilePlotOptions};
use crate::plots::chart_builder;
use crate::plots::series::finite_runs;
use crate::plots::traits::Plot;
use anyhow::{Result, anyhow, bail};
use ndarray::Array2;
use plotters::coord::Shift;
use plotters::prelude::*;
use std::time::Instant;
use tracing::{debug, warn};

/// Vertical profiles sharing one vertical coordinate
///
/// Column `j` of `profiles` is one profile over `z`, colored by
/// `reference[j]`.
#[derive(Clone, Debug)]
pub struct ProfileFamily {
    pub z: Vec<f64>,
    pub profiles: Array2<f64>,
    pub reference: Vec<f64>,
}

impl ProfileFamily {
    pub fn new(z: Vec<f64>, profiles: Array2<f64>, reference: Vec<f64>) -> Result<Self> {
        let family = Self {
            z,
            profiles,
            reference,
        };
        family.validate()?;
        Ok(family)
    }

    pub fn validate(&self) -> Result<()> {
        let (nz, nprof) = self.profiles.dim();
        if nz != self.z.len() {
            bail!(
                "profiles have {nz} levels but z has {} entries",
                self.z.len()
            );
        }
        if nprof != self.reference.len() {
            bail!(
                "there are {nprof} profiles but {} reference values",
                self.reference.len()
            );
        }
        if nprof == 0 {
            bail!("a profile plot needs at least one profile");
        }
        Ok(())
    }
}

/// Color of each profile, from its reference value
///
/// The reference range defaults to the first and last reference value. A
/// value the normalization cannot place falls back to the low end of the
/// colormap.
pub fn profile_colors(reference: &[f64], options: &ProfilePlotOptions) -> Vec<RGBColor> {
    let (Some(&first), Some(&last)) = (reference.first(), reference.last()) else {
        return Vec::new();
    };
    let vmin = options.reference_min.unwrap_or(first);
    let vmax = options.reference_max.unwrap_or(last);

    reference
        .iter()
        .map(|&value| {
            let t = options
                .normalization
                .normalize(value, vmin, vmax)
                .unwrap_or_else(|| {
                    warn!(value, vmin, vmax, "reference value cannot be normalized");
                    f64::NAN
                });
            options.colormap.map(t)
        })
        .collect()
}

/// A family of vertical profiles, each colored by a reference value
///
/// Profiles are drawn last to first so the first one ends up on top.
#[derive(Clone, Copy, Debug, Default)]
pub struct ProfilePlot;

impl ProfilePlot {
    /// Create a new ProfilePlot instance
    pub fn new() -> Self {
        Self
    }
}

impl Plot for ProfilePlot {
    type Options = ProfilePlotOptions;
    type Data = ProfileFamily;

    fn draw<DB: DrawingBackend>(
        &self,
        area: &DrawingArea<DB, Shift>,
        data: &Self::Data,
        options: &Self::Options,
    ) -> Result<()> {
        let start = Instant::now();
        data.validate()?;

        let x_range = options
            .x_axis
            .resolve_range(data.profiles.iter().copied())
            .ok_or_else(|| anyhow!("a profile plot needs a finite value or an explicit x range"))?;
        let z_range = options
            .z_axis
            .resolve_range(data.z.iter().copied())
            .ok_or_else(|| anyhow!("a profile plot needs a finite level or an explicit z range"))?;

        let mut chart = chart_builder(area, options.base())
            .build_cartesian_2d(x_range, z_range)
            .map_err(|e| anyhow!("failed to build profile chart: {e}"))?;

        let mut mesh = chart.configure_mesh();
        mesh.x_max_light_lines(4).y_max_light_lines(4);
        if let Some(ref x_label) = options.x_axis.label {
            mesh.x_desc(x_label);
        }
        if let Some(ref z_label) = options.z_axis.label {
            mesh.y_desc(z_label);
        }
        mesh.draw()
            .map_err(|e| anyhow!("failed to draw plot mesh: {e}"))?;

        let colors = profile_colors(&data.reference, options);
        let mut segments = 0usize;
        for j in (0..data.reference.len()).rev() {
            // a level without a finite z breaks the profile like a missing value
            let values: Vec<f64> = data
                .profiles
                .column(j)
                .iter()
                .zip(&data.z)
                .map(|(&v, z)| if z.is_finite() { v } else { f64::NAN })
                .collect();
            let style = colors[j].stroke_width(options.line_width);
            for run in finite_runs(&values).into_iter().filter(|run| run.len() >= 2) {
                chart
                    .draw_series(LineSeries::new(
                        run.map(|i| (values[i], data.z[i])),
                        style,
                    ))
                    .map_err(|e| anyhow!("failed to draw profile {j}: {e}"))?;
                segments += 1;
            }
        }

        debug!(
            profiles = data.reference.len(),
            levels = data.z.len(),
            segments,
            elapsed = ?start.elapsed(),
            "drew profile family"
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::colormap::{ColorMaps, Normalization};

    #[test]
    fn test_shape_mismatch() {
        let profiles = Array2::zeros((3, 2));
        assert!(ProfileFamily::new(vec![0.0, 1.0, 2.0], profiles.clone(), vec![1.0, 2.0]).is_ok());
        assert!(ProfileFamily::new(vec![0.0, 1.0], profiles.clone(), vec![1.0, 2.0]).is_err());
        assert!(ProfileFamily::new(vec![0.0, 1.0, 2.0], profiles, vec![1.0]).is_err());
        assert!(ProfileFamily::new(vec![0.0], Array2::zeros((1, 0)), vec![]).is_err());
    }

    #[test]
    fn test_colors_follow_reference_bounds() {
        let options = ProfilePlotOptions::default();
        let colors = profile_colors(&[280.0, 290.0, 300.0], &options);
        assert_eq!(colors[0], ColorMaps::Spectral.map(0.0));
        assert_eq!(colors[1], ColorMaps::Spectral.map(0.5));
        assert_eq!(colors[2], ColorMaps::Spectral.map(1.0));
    }

    #[test]
    fn test_colors_with_midpoint_and_explicit_bounds() {
        let options = ProfilePlotOptions::new()
            .colormap(ColorMaps::Viridis)
            .normalization(Normalization::Midpoint { midpoint: 0.0 })
            .reference_min(-10.0)
            .reference_max(40.0)
            .build()
            .unwrap();
        let colors = profile_colors(&[-10.0, 0.0, 20.0], &options);
        assert_eq!(colors[0], ColorMaps::Viridis.map(0.0));
        assert_eq!(colors[1], ColorMaps::Viridis.map(0.5));
        assert_eq!(colors[2], ColorMaps::Viridis.map(0.75));
    }

    #[test]
    fn test_unplaceable_reference_uses_low_end() {
        let options = ProfilePlotOptions::new()
            .normalization(Normalization::Log)
            .build()
            .unwrap();
        let colors = profile_colors(&[1.0, -5.0, 100.0], &options);
        assert_eq!(colors[1], ColorMaps::Spectral.map(0.0));
    }
}
