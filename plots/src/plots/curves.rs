use crate::options::{PlotOptions, RankAxisSide, RankCurvePlotOptions};
use crate::plots::series::{band_segments, clip_interval, finite_runs};
use crate::plots::traits::Plot;
use crate::plots::{chart_builder, rank_label};
use anyhow::{Result, anyhow, bail};
use plotters::coord::Shift;
use plotters::prelude::*;
use rank_axis::{coordinate_of, span_polygon, to_coordinate};
use std::ops::Range;
use std::time::Instant;
use tracing::{debug, warn};

/// Opacity of bands and spans unless set otherwise
pub const DEFAULT_FILL_ALPHA: f64 = 0.3;

/// Relative slack when deciding whether a coordinate lies on the axis extent
const EDGE_SLACK: f64 = 1e-9;

/// Line color and width
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CurveStyle {
    pub color: RGBColor,
    pub width: u32,
}

impl Default for CurveStyle {
    fn default() -> Self {
        Self {
            color: BLACK,
            width: 2,
        }
    }
}

impl CurveStyle {
    pub fn new(color: RGBColor, width: u32) -> Self {
        Self { color, width }
    }

    fn shape(&self) -> ShapeStyle {
        self.color.stroke_width(self.width)
    }
}

/// One value per rank; NaN breaks the line
#[derive(Clone, Debug)]
pub struct RankCurve {
    pub values: Vec<f64>,
    pub style: CurveStyle,
}

/// Filled region between two value sequences, drawn where `upper >= lower`
#[derive(Clone, Debug)]
pub struct Band {
    pub lower: Vec<f64>,
    pub upper: Vec<f64>,
    pub color: RGBColor,
    pub alpha: f64,
}

/// Shaded span between two rank indices, across the full value range
#[derive(Clone, Debug)]
pub struct RankSpan {
    pub start: usize,
    pub end: usize,
    pub color: RGBColor,
    pub alpha: f64,
}

/// Line at a fixed value across the whole rank axis
#[derive(Clone, Debug)]
pub struct ReferenceLine {
    pub value: f64,
    pub style: CurveStyle,
}

/// A marked point with guide lines down to the rank axis and across to the value axis
#[derive(Clone, Debug)]
pub struct Highlight {
    pub rank: f64,
    pub value: f64,
    pub color: RGBColor,
}

/// Everything drawn on a rank curve plot
///
/// Every curve and band holds one value per entry of `ranks`, which must be
/// ascending.
///
/// # Example
///
/// ```rust
/// use plotters::style::{BLUE, RED};
/// use rank_plots::plots::{CurveStyle, RankCurveData};
///
/// let ranks = vec![0.0, 90.0, 99.0, 99.9];
/// let data = RankCurveData::new(ranks)
///     .curve(vec![1.0, 2.0, 4.0, 8.0], CurveStyle::new(BLUE, 2))
///     .band(vec![0.5, 1.5, 3.0, 6.0], vec![1.5, 2.5, 5.0, 10.0], BLUE)
///     .span(2, 3, RED)
///     .reference_line(7.0, CurveStyle::default());
/// assert!(data.validate().is_ok());
/// ```
#[derive(Clone, Debug, Default)]
pub struct RankCurveData {
    pub ranks: Vec<f64>,
    pub curves: Vec<RankCurve>,
    pub bands: Vec<Band>,
    pub spans: Vec<RankSpan>,
    pub reference_lines: Vec<ReferenceLine>,
    pub highlights: Vec<Highlight>,
}

impl RankCurveData {
    pub fn new(ranks: impl Into<Vec<f64>>) -> Self {
        Self {
            ranks: ranks.into(),
            ..Self::default()
        }
    }

    pub fn curve(mut self, values: impl Into<Vec<f64>>, style: CurveStyle) -> Self {
        self.curves.push(RankCurve {
            values: values.into(),
            style,
        });
        self
    }

    pub fn band(
        mut self,
        lower: impl Into<Vec<f64>>,
        upper: impl Into<Vec<f64>>,
        color: RGBColor,
    ) -> Self {
        self.bands.push(Band {
            lower: lower.into(),
            upper: upper.into(),
            color,
            alpha: DEFAULT_FILL_ALPHA,
        });
        self
    }

    /// Shade the ranks from index `start` through index `end`
    pub fn span(mut self, start: usize, end: usize, color: RGBColor) -> Self {
        self.spans.push(RankSpan {
            start,
            end,
            color,
            alpha: DEFAULT_FILL_ALPHA,
        });
        self
    }

    pub fn reference_line(mut self, value: f64, style: CurveStyle) -> Self {
        self.reference_lines.push(ReferenceLine { value, style });
        self
    }

    pub fn highlight(mut self, rank: f64, value: f64, color: RGBColor) -> Self {
        self.highlights.push(Highlight { rank, value, color });
        self
    }

    /// Check that every sequence lines up with the ranks
    pub fn validate(&self) -> Result<()> {
        let n = self.ranks.len();
        if n == 0 {
            bail!("a rank curve plot needs at least one rank");
        }
        if let Some(i) = self.ranks.windows(2).position(|w| w[0] > w[1]) {
            bail!(
                "ranks must be ascending, found {} after {}",
                self.ranks[i + 1],
                self.ranks[i]
            );
        }
        for (i, curve) in self.curves.iter().enumerate() {
            if curve.values.len() != n {
                bail!(
                    "curve {i} has {} values for {n} ranks",
                    curve.values.len()
                );
            }
        }
        for (i, band) in self.bands.iter().enumerate() {
            if band.lower.len() != n || band.upper.len() != n {
                bail!(
                    "band {i} has {} lower and {} upper values for {n} ranks",
                    band.lower.len(),
                    band.upper.len()
                );
            }
        }
        for span in &self.spans {
            if span.start > span.end {
                bail!("span starts at index {} after it ends at {}", span.start, span.end);
            }
        }
        Ok(())
    }

    /// Values that have to fit on the value axis
    fn drawn_values(&self, window: &Range<usize>) -> Vec<f64> {
        let mut values = Vec::new();
        for curve in &self.curves {
            values.extend_from_slice(&curve.values[window.clone()]);
        }
        for band in &self.bands {
            values.extend_from_slice(&band.lower[window.clone()]);
            values.extend_from_slice(&band.upper[window.clone()]);
        }
        values.extend(self.reference_lines.iter().map(|line| line.value));
        values.extend(self.highlights.iter().map(|point| point.value));
        values
    }
}

/// Indices of `window` whose coordinate lies on `[lo, hi]`
///
/// Coordinates ascend with rank, so the result is contiguous.
fn visible(window: Range<usize>, coordinates: &[f64], lo: f64, hi: f64) -> Range<usize> {
    let start = window
        .clone()
        .find(|&i| coordinates[i] >= lo * (1.0 - EDGE_SLACK))
        .unwrap_or(window.end);
    let end = window
        .rev()
        .find(|&i| coordinates[i] <= hi * (1.0 + EDGE_SLACK))
        .map_or(start, |i| i + 1);
    start..end.max(start)
}

/// Everything a rank curve plot draws inside its chart, in (coordinate, value) space
struct Layers<'a> {
    data: &'a RankCurveData,
    coordinates: &'a [f64],
    window: Range<usize>,
    extent: (f64, f64),
    values: Range<f64>,
}

impl Layers<'_> {
    /// Draw spans, bands, curves, reference lines and highlights.
    ///
    /// `place` turns a (coordinate, value) pair into chart (x, y), so the same
    /// layers serve a rank axis on either side.
    fn draw<DB, X, Y>(
        &self,
        chart: &mut ChartContext<'_, DB, Cartesian2d<X, Y>>,
        place: impl Fn(f64, f64) -> (f64, f64),
    ) -> Result<()>
    where
        DB: DrawingBackend,
        X: Ranged<ValueType = f64>,
        Y: Ranged<ValueType = f64>,
    {
        let data = self.data;
        let (c_lo, c_hi) = self.extent;
        let (v_lo, v_hi) = (self.values.start, self.values.end);

        for span in &data.spans {
            let Some(corners) = span_polygon(self.coordinates, span.start, span.end, v_lo, v_hi)
            else {
                debug!(start = span.start, "span starts past the last rank, skipped");
                continue;
            };
            if clip_interval(corners[0].0, corners[1].0, c_lo, c_hi).is_none() {
                debug!(start = span.start, end = span.end, "span outside the rank axis, skipped");
                continue;
            }
            let outline: Vec<(f64, f64)> = corners
                .iter()
                .map(|&(c, v)| place(c.clamp(c_lo, c_hi), v))
                .collect();
            chart
                .draw_series(std::iter::once(Polygon::new(
                    outline,
                    span.color.mix(span.alpha).filled(),
                )))
                .map_err(|e| anyhow!("failed to draw span: {e}"))?;
        }

        let window = self.window.clone();
        let cs = &self.coordinates[window.clone()];
        for band in &data.bands {
            let segments = band_segments(
                cs,
                &band.lower[window.clone()],
                &band.upper[window.clone()],
            );
            let fill = band.color.mix(band.alpha).filled();
            chart
                .draw_series(segments.into_iter().map(|outline| {
                    let outline: Vec<(f64, f64)> =
                        outline.into_iter().map(|(c, v)| place(c, v)).collect();
                    Polygon::new(outline, fill)
                }))
                .map_err(|e| anyhow!("failed to draw band: {e}"))?;
        }

        for curve in &data.curves {
            let values = &curve.values[window.clone()];
            for run in finite_runs(values).into_iter().filter(|run| run.len() >= 2) {
                chart
                    .draw_series(LineSeries::new(
                        run.map(|i| place(cs[i], values[i])),
                        curve.style.shape(),
                    ))
                    .map_err(|e| anyhow!("failed to draw curve: {e}"))?;
            }
        }

        for line in &data.reference_lines {
            if !line.value.is_finite() {
                debug!(value = line.value, "reference line without a finite value, skipped");
                continue;
            }
            chart
                .draw_series(LineSeries::new(
                    [place(c_lo, line.value), place(c_hi, line.value)],
                    line.style.shape(),
                ))
                .map_err(|e| anyhow!("failed to draw reference line: {e}"))?;
        }

        for point in &data.highlights {
            let c = coordinate_of(point.rank)?;
            if !point.value.is_finite()
                || c < c_lo * (1.0 - EDGE_SLACK)
                || c > c_hi * (1.0 + EDGE_SLACK)
            {
                debug!(rank = point.rank, value = point.value, "highlight off the chart, skipped");
                continue;
            }
            let guide = point.color.stroke_width(1);
            chart
                .draw_series([
                    PathElement::new(vec![place(c_lo, point.value), place(c, point.value)], guide),
                    PathElement::new(vec![place(c, v_lo), place(c, point.value)], guide),
                ])
                .map_err(|e| anyhow!("failed to draw highlight guides: {e}"))?;
            chart
                .draw_series(std::iter::once(Circle::new(
                    place(c, point.value),
                    4,
                    point.color.filled(),
                )))
                .map_err(|e| anyhow!("failed to draw highlight: {e}"))?;
        }
        Ok(())
    }
}

/// Curves over percentile ranks on a reciprocal-logarithmic rank axis
///
/// Ranks 90, 99, 99.9, ... are evenly spaced decades on the axis and
/// labelled as ranks. The rank axis runs along x unless
/// [`RankCurvePlotOptions::rank_on`] puts it on y.
///
/// # Example
///
/// ```rust,no_run
/// use plotters::style::BLUE;
/// use rank_plots::options::{RankAxisOptions, RankCurvePlotOptions};
/// use rank_plots::plots::{CurveStyle, Plot, RankCurveData, RankCurvePlot};
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let ranks = rank_axis::build_axis_frame(0.0, 99.99, 0.1)?;
/// let values: Vec<f64> = ranks.iter().map(|r| r / 10.0).collect();
/// let data = RankCurveData::new(ranks).curve(values, CurveStyle::new(BLUE, 2));
///
/// let options = RankCurvePlotOptions::new()
///     .rank_axis(RankAxisOptions::new().label("Percentile rank (%)").build()?)
///     .build()?;
/// let bytes = RankCurvePlot::new().render(&data, &options)?;
/// # Ok(())
/// # }
/// ```
#[derive(Clone, Copy, Debug, Default)]
pub struct RankCurvePlot;

impl RankCurvePlot {
    /// Create a new RankCurvePlot instance
    pub fn new() -> Self {
        Self
    }
}

impl Plot for RankCurvePlot {
    type Options = RankCurvePlotOptions;
    type Data = RankCurveData;

    fn draw<DB: DrawingBackend>(
        &self,
        area: &DrawingArea<DB, Shift>,
        data: &Self::Data,
        options: &Self::Options,
    ) -> Result<()> {
        let start = Instant::now();
        data.validate()?;

        let coordinates = to_coordinate(&data.ranks)?;
        let (c_lo, c_hi) = options.rank_axis.extent(&data.ranks)?;
        let window = match options.rank_axis.window(&data.ranks) {
            Some(window) => visible(window, &coordinates, c_lo, c_hi),
            None => {
                warn!(
                    ranks = data.ranks.len(),
                    "no rank inside the rank range, drawing axes only"
                );
                0..0
            }
        };

        let values = options
            .value_axis
            .resolve_range(data.drawn_values(&window))
            .ok_or_else(|| {
                anyhow!("a rank curve plot needs a finite value or an explicit value range")
            })?;

        let layers = Layers {
            data,
            coordinates: &coordinates,
            window,
            extent: (c_lo, c_hi),
            values: values.clone(),
        };

        let tolerance = options.rank_axis.tick_tolerance;
        let rank_formatter = |c: &f64| rank_label(c, tolerance);

        match options.rank_on {
            RankAxisSide::X => {
                let mut chart = chart_builder(area, options.base())
                    .build_cartesian_2d((c_lo..c_hi).log_scale(), values)
                    .map_err(|e| anyhow!("failed to build rank curve chart: {e}"))?;

                let mut mesh = chart.configure_mesh();
                mesh.y_max_light_lines(4)
                    .y_labels(10)
                    .x_label_formatter(&rank_formatter);
                if let Some(ref desc) = options.rank_axis.label {
                    mesh.x_desc(desc);
                }
                if let Some(ref desc) = options.value_axis.label {
                    mesh.y_desc(desc);
                }
                mesh.draw()
                    .map_err(|e| anyhow!("failed to draw plot mesh: {e}"))?;

                layers.draw(&mut chart, |c, v| (c, v))?;
            }
            RankAxisSide::Y => {
                let mut chart = chart_builder(area, options.base())
                    .build_cartesian_2d(values, (c_lo..c_hi).log_scale())
                    .map_err(|e| anyhow!("failed to build rank curve chart: {e}"))?;

                let mut mesh = chart.configure_mesh();
                mesh.x_max_light_lines(4)
                    .x_labels(10)
                    .y_label_formatter(&rank_formatter);
                if let Some(ref desc) = options.value_axis.label {
                    mesh.x_desc(desc);
                }
                if let Some(ref desc) = options.rank_axis.label {
                    mesh.y_desc(desc);
                }
                mesh.draw()
                    .map_err(|e| anyhow!("failed to draw plot mesh: {e}"))?;

                layers.draw(&mut chart, |c, v| (v, c))?;
            }
        }

        debug!(
            ranks = layers.window.len(),
            rank_on = %options.rank_on,
            curves = data.curves.len(),
            bands = data.bands.len(),
            spans = data.spans.len(),
            elapsed = ?start.elapsed(),
            "drew rank curve plot"
        );
        Ok(())
    }
}
