use crate::options::{JointHistogramOptions, PlotOptions};
use crate::plots::series::clip_interval;
use crate::plots::traits::Plot;
use crate::plots::{chart_builder, rank_label};
use anyhow::{Result, anyhow, bail};
use ndarray::Array2;
use plotters::coord::Shift;
use plotters::prelude::*;
use rank_axis::to_coordinate;
use std::time::Instant;
use tracing::{debug, warn};

/// Two-dimensional histogram over rank bins
///
/// `values[[iy, ix]]` is the cell between `x_edges[ix]..x_edges[ix + 1]` and
/// `y_edges[iy]..y_edges[iy + 1]`, so `values` has shape `(ny, nx)` for
/// `nx + 1` x edges and `ny + 1` y edges.
#[derive(Clone, Debug)]
pub struct JointHistogram {
    pub x_edges: Vec<f64>,
    pub y_edges: Vec<f64>,
    pub values: Array2<f64>,
}

impl JointHistogram {
    pub fn new(x_edges: Vec<f64>, y_edges: Vec<f64>, values: Array2<f64>) -> Result<Self> {
        let histogram = Self {
            x_edges,
            y_edges,
            values,
        };
        histogram.validate()?;
        Ok(histogram)
    }

    /// `(ny, nx)` implied by the edges
    pub fn shape(&self) -> (usize, usize) {
        (
            self.y_edges.len().saturating_sub(1),
            self.x_edges.len().saturating_sub(1),
        )
    }

    pub fn validate(&self) -> Result<()> {
        for (axis, edges) in [("x", &self.x_edges), ("y", &self.y_edges)] {
            if edges.len() < 2 {
                bail!("{axis} edges need at least two entries, got {}", edges.len());
            }
            if let Some(i) = edges.windows(2).position(|w| w[0] >= w[1]) {
                bail!(
                    "{axis} edges must be strictly ascending, found {} after {}",
                    edges[i + 1],
                    edges[i]
                );
            }
        }
        if self.values.dim() != self.shape() {
            bail!(
                "histogram values have shape {:?}, the edges need {:?}",
                self.values.dim(),
                self.shape()
            );
        }
        Ok(())
    }
}

/// Joint histogram of two ranked quantities, both axes reciprocal-logarithmic
///
/// Every finite cell that the chosen scale can normalise becomes one filled
/// rectangle colored through the colormap. Empty (NaN) cells and, on a log
/// scale, non-positive cells are left blank.
#[derive(Clone, Copy, Debug, Default)]
pub struct JointHistogramPlot;

impl JointHistogramPlot {
    /// Create a new JointHistogramPlot instance
    pub fn new() -> Self {
        Self
    }
}

impl Plot for JointHistogramPlot {
    type Options = JointHistogramOptions;
    type Data = JointHistogram;

    fn draw<DB: DrawingBackend>(
        &self,
        area: &DrawingArea<DB, Shift>,
        data: &Self::Data,
        options: &Self::Options,
    ) -> Result<()> {
        let start = Instant::now();
        data.validate()?;

        let x_coordinates = to_coordinate(&data.x_edges)?;
        let y_coordinates = to_coordinate(&data.y_edges)?;
        let (x_lo, x_hi) = options.x_axis.extent(&data.x_edges)?;
        let (y_lo, y_hi) = options.y_axis.extent(&data.y_edges)?;

        let mut chart = chart_builder(area, options.base())
            .build_cartesian_2d((x_lo..x_hi).log_scale(), (y_lo..y_hi).log_scale())
            .map_err(|e| anyhow!("failed to build joint histogram chart: {e}"))?;

        let (x_tolerance, y_tolerance) = (options.x_axis.tick_tolerance, options.y_axis.tick_tolerance);
        let x_formatter = |x: &f64| rank_label(x, x_tolerance);
        let y_formatter = |y: &f64| rank_label(y, y_tolerance);

        let mut mesh = chart.configure_mesh();
        mesh.disable_mesh()
            .x_label_formatter(&x_formatter)
            .y_label_formatter(&y_formatter);
        if let Some(ref x_label) = options.x_axis.label {
            mesh.x_desc(x_label);
        }
        if let Some(ref y_label) = options.y_axis.label {
            mesh.y_desc(y_label);
        }
        mesh.draw()
            .map_err(|e| anyhow!("failed to draw plot mesh: {e}"))?;

        let normalization = options.scale.normalization();
        let mut skipped = 0usize;
        let mut cells = Vec::with_capacity(data.values.len());
        for ((iy, ix), &value) in data.values.indexed_iter() {
            let normalized = value
                .is_finite()
                .then(|| normalization.normalize(value, options.vmin, options.vmax))
                .flatten();
            let Some(t) = normalized else {
                skipped += 1;
                continue;
            };
            let x = clip_interval(x_coordinates[ix], x_coordinates[ix + 1], x_lo, x_hi);
            let y = clip_interval(y_coordinates[iy], y_coordinates[iy + 1], y_lo, y_hi);
            let (Some((x0, x1)), Some((y0, y1))) = (x, y) else {
                continue;
            };
            cells.push(Rectangle::new(
                [(x0, y0), (x1, y1)],
                options.colormap.map(t).filled(),
            ));
        }

        let drawn = cells.len();
        if drawn == 0 && !data.values.is_empty() {
            warn!(
                scale = %options.scale,
                vmin = options.vmin,
                vmax = options.vmax,
                "no histogram cell could be colored"
            );
        }
        chart
            .draw_series(cells)
            .map_err(|e| anyhow!("failed to draw histogram cells: {e}"))?;

        debug!(
            cells = drawn,
            skipped,
            elapsed = ?start.elapsed(),
            "drew joint histogram"
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    #[test]
    fn test_shape_must_match_edges() {
        let edges = vec![0.0, 90.0, 99.0];
        assert!(JointHistogram::new(edges.clone(), edges.clone(), Array2::zeros((2, 2))).is_ok());

        let err = JointHistogram::new(edges.clone(), vec![0.0, 90.0], Array2::zeros((2, 2)))
            .unwrap_err();
        assert!(err.to_string().contains("shape"));
    }

    #[test]
    fn test_edges_must_ascend() {
        let values = array![[1.0]];
        assert!(JointHistogram::new(vec![90.0, 0.0], vec![0.0, 90.0], values.clone()).is_err());
        assert!(JointHistogram::new(vec![0.0], vec![0.0, 90.0], values).is_err());
    }
}
