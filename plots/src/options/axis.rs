use crate::{PlotRange, nice_bounds};
use anyhow::{Result, bail};
use derive_builder::Builder;
use rank_axis::{DEFAULT_TICK_TOLERANCE, covering_extent, rank_window};
use std::ops::Range;

/// Options for a plain value axis
///
/// # Example
///
/// ```rust
/// use rank_plots::options::AxisOptions;
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let axis = AxisOptions::new()
///     .range(0.0..=50.0)
///     .label("Precipitation (mm/day)")
///     .build()?;
/// # Ok(())
/// # }
/// ```
#[derive(Builder, Clone, Debug, Default)]
#[builder(setter(into, strip_option), default)]
pub struct AxisOptions {
    /// Fixed data range; computed from the data with "nice" bounds when unset
    pub range: Option<PlotRange>,

    /// Optional axis label
    pub label: Option<String>,
}

impl AxisOptions {
    /// Create a new builder for AxisOptions
    pub fn new() -> AxisOptionsBuilder {
        AxisOptionsBuilder::default()
    }

    /// Range to draw: the configured one, or nice bounds around the finite values.
    ///
    /// `None` when there is no finite value or the configured range is empty.
    pub fn resolve_range(&self, values: impl IntoIterator<Item = f64>) -> Option<Range<f64>> {
        if let Some(range) = &self.range {
            let (start, end) = (*range.start(), *range.end());
            return (start.is_finite() && end.is_finite() && start < end).then_some(start..end);
        }
        let (min, max) = values
            .into_iter()
            .filter(|v| v.is_finite())
            .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), v| {
                (lo.min(v), hi.max(v))
            });
        if min > max {
            return None;
        }
        let (lo, hi) = nice_bounds(min, max);
        Some(lo..hi)
    }
}

/// Options for a reciprocal-logarithmic rank axis
///
/// # Example
///
/// ```rust
/// use rank_plots::options::RankAxisOptions;
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let axis = RankAxisOptions::new()
///     .rank_range(0.0..=99.99)
///     .label("Percentile rank (%)")
///     .build()?;
/// assert_eq!(axis.extent(&[])?, (1.0, 10_000.0));
/// # Ok(())
/// # }
/// ```
#[derive(Builder, Clone, Debug)]
#[builder(setter(into, strip_option), default)]
pub struct RankAxisOptions {
    /// Ranks spanned by the axis frame; the data's own range when unset
    pub rank_range: Option<PlotRange>,

    /// Tolerance used to decide which coordinates get a tick label
    #[builder(default = "DEFAULT_TICK_TOLERANCE")]
    pub tick_tolerance: f64,

    /// Optional axis label
    pub label: Option<String>,
}

impl Default for RankAxisOptions {
    fn default() -> Self {
        Self {
            rank_range: None,
            tick_tolerance: DEFAULT_TICK_TOLERANCE,
            label: None,
        }
    }
}

impl RankAxisOptions {
    /// Create a new builder for RankAxisOptions
    pub fn new() -> RankAxisOptionsBuilder {
        RankAxisOptionsBuilder::default()
    }

    /// Rank bounds of the frame, from the options or from the data
    fn rank_bounds(&self, ranks: &[f64]) -> Result<(f64, f64)> {
        if let Some(range) = &self.rank_range {
            return Ok((*range.start(), *range.end()));
        }
        let (min, max) = ranks
            .iter()
            .copied()
            .filter(|r| r.is_finite())
            .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), r| {
                (lo.min(r), hi.max(r))
            });
        if min >= max {
            bail!("a rank axis needs at least two distinct ranks, or an explicit rank range");
        }
        Ok((min, max))
    }

    /// Coordinate extent of the axis, widened outwards to whole decades
    ///
    /// Every rank between the bounds lands inside the extent, so no sample
    /// in the window is cut off by the chart.
    pub fn extent(&self, ranks: &[f64]) -> Result<(f64, f64)> {
        let (min, max) = self.rank_bounds(ranks)?;
        Ok(covering_extent(min, max)?)
    }

    /// Indices of the ranks that fall inside the configured rank range
    pub fn window(&self, ranks: &[f64]) -> Option<Range<usize>> {
        match &self.rank_range {
            Some(range) => rank_window(ranks, Some(*range.start()), Some(*range.end())),
            None => rank_window(ranks, None, None),
        }
    }
}
