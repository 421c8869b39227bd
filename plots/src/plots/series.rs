//! Index bookkeeping shared by the plot types: contiguous runs of drawable
//! samples and the polygons of filled bands.

use itertools::Itertools;
use std::ops::Range;

/// Maximal runs of consecutive `true` flags
pub(crate) fn runs_where(flags: impl IntoIterator<Item = bool>) -> Vec<Range<usize>> {
    let mut runs = Vec::new();
    for (keep, mut run) in &flags.into_iter().enumerate().chunk_by(|(_, flag)| *flag) {
        if !keep {
            continue;
        }
        if let Some((first, _)) = run.next() {
            let last = run.last().map_or(first, |(i, _)| i);
            runs.push(first..last + 1);
        }
    }
    runs
}

/// Maximal runs of finite values; a NaN or infinity breaks a line
pub(crate) fn finite_runs(values: &[f64]) -> Vec<Range<usize>> {
    runs_where(values.iter().map(|v| v.is_finite()))
}

/// Closed outlines of a band between `lower` and `upper`
///
/// One polygon per run of at least two samples where `x`, `lower` and `upper`
/// are finite and `upper >= lower`: the upper edge left to right, then the
/// lower edge back.
pub(crate) fn band_segments(x: &[f64], lower: &[f64], upper: &[f64]) -> Vec<Vec<(f64, f64)>> {
    let drawable = x
        .iter()
        .zip(lower.iter().zip(upper))
        .map(|(x, (lo, hi))| x.is_finite() && lo.is_finite() && hi.is_finite() && hi >= lo);

    runs_where(drawable)
        .into_iter()
        .filter(|run| run.len() >= 2)
        .map(|run| {
            let upper_edge = run.clone().map(|i| (x[i], upper[i]));
            let lower_edge = run.rev().map(|i| (x[i], lower[i]));
            upper_edge.chain(lower_edge).collect()
        })
        .collect()
}

/// `[a, b]` clipped to `[lo, hi]`, `None` when nothing is left
pub(crate) fn clip_interval(a: f64, b: f64, lo: f64, hi: f64) -> Option<(f64, f64)> {
    let (a, b) = (a.max(lo), b.min(hi));
    (a < b).then_some((a, b))
}
