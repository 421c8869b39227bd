//! Axis frames: evenly log-spaced rank samples and the coordinate extent they
//! span, so a chart's bounds can be fixed independently of the data drawn on it.

use crate::error::{DomainError, Result};
use crate::transform::{RANK_MAX, coordinate_of};
use std::ops::Range;
use tracing::debug;

/// Default spacing of frame samples, in decades of the rank coordinate
pub const DEFAULT_FRAME_STEP: f64 = 0.1;

/// Upper limit on the number of samples a frame may produce
pub const MAX_FRAME_SAMPLES: usize = 100_000;

/// Slack when deciding whether the last step still reaches `k_max`
const STEP_SLACK: f64 = 1e-9;

/// Exponent of the decade nearest to a rank: `-round(log10(1 - rank / 100))`
fn nearest_exponent(rank: f64) -> Result<f64> {
    // validates the rank, including ranks whose coordinate is not finite
    coordinate_of(rank)?;
    Ok(-(1.0 - rank / RANK_MAX).log10().round())
}

fn exponent_bounds(rankmin: f64, rankmax: f64) -> Result<(f64, f64)> {
    let k_min = nearest_exponent(rankmin)?;
    let k_max = nearest_exponent(rankmax)?;
    if rankmin >= rankmax {
        return Err(DomainError::RankRange {
            min: rankmin,
            max: rankmax,
        });
    }
    Ok((k_min, k_max))
}

/// Ranks spaced evenly in the log of the rank coordinate.
///
/// Both bounds are snapped to the nearest decade, then sampled every
/// `step_in_log` decades and mapped back with `rank = (1 - 10^-k) * 100`.
/// The output is strictly increasing; when both bounds snap to the same
/// decade it holds a single rank.
pub fn build_axis_frame(rankmin: f64, rankmax: f64, step_in_log: f64) -> Result<Vec<f64>> {
    if !step_in_log.is_finite() || step_in_log <= 0.0 {
        return Err(DomainError::Step(step_in_log));
    }
    let (k_min, k_max) = exponent_bounds(rankmin, rankmax)?;

    let steps = ((k_max - k_min) / step_in_log + STEP_SLACK).floor();
    if steps >= MAX_FRAME_SAMPLES as f64 {
        return Err(DomainError::TooManySamples {
            requested: steps as usize + 1,
            max: MAX_FRAME_SAMPLES,
        });
    }
    let n_samples = steps as usize + 1;
    debug!(k_min, k_max, n_samples, "sampling rank axis frame");

    // multiply rather than accumulate so the last sample lands on k_max
    Ok((0..n_samples)
        .map(|i| k_min + i as f64 * step_in_log)
        .map(|k| (1.0 - 10f64.powf(-k)) * RANK_MAX)
        .collect())
}

/// Coordinate extent `(10^k_min, 10^k_max)` of the frame between two ranks.
///
/// When both bounds snap to the same decade the extent is widened by one
/// decade upwards so that a chart never gets an empty axis.
pub fn frame_extent(rankmin: f64, rankmax: f64) -> Result<(f64, f64)> {
    let (k_min, k_max) = exponent_bounds(rankmin, rankmax)?;
    let k_max = if k_max > k_min { k_max } else { k_min + 1.0 };
    Ok((10f64.powi(k_min as i32), 10f64.powi(k_max as i32)))
}

/// Smallest decade-aligned coordinate extent holding every rank in `[rankmin, rankmax]`.
///
/// The lower bound is floored and the upper bound ceiled to a power of ten,
/// so unlike [`frame_extent`] no rank in the interval falls outside the
/// extent. Bounds already on a decade stay there. Widened by one decade
/// upwards when both bounds land on the same power.
pub fn covering_extent(rankmin: f64, rankmax: f64) -> Result<(f64, f64)> {
    let c_min = coordinate_of(rankmin)?;
    let c_max = coordinate_of(rankmax)?;
    if rankmin >= rankmax {
        return Err(DomainError::RankRange {
            min: rankmin,
            max: rankmax,
        });
    }
    let k_min = (c_min.log10() + STEP_SLACK).floor();
    let k_max = (c_max.log10() - STEP_SLACK).ceil().max(k_min + 1.0);
    debug!(k_min, k_max, "covering extent");
    Ok((10f64.powi(k_min as i32), 10f64.powi(k_max as i32)))
}

/// Index range of the ranks within `[rankmin, rankmax]`.
///
/// Starts at the first rank `>= rankmin` and ends after the last rank
/// `<= rankmax`; a missing bound leaves that side open. Assumes ascending
/// ranks. Returns `None` when no rank qualifies.
pub fn rank_window(ranks: &[f64], rankmin: Option<f64>, rankmax: Option<f64>) -> Option<Range<usize>> {
    let start = match rankmin {
        Some(min) => ranks.iter().position(|&r| r >= min)?,
        None => 0,
    };
    let end = match rankmax {
        Some(max) => ranks.iter().rposition(|&r| r <= max)? + 1,
        None => ranks.len(),
    };
    (start < end).then_some(start..end)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::transform::to_coordinate;
    use approx::assert_relative_eq;

    #[test]
    fn test_frame_sampling_by_decade() {
        let ranks = build_axis_frame(0.0, 99.9, 1.0).unwrap();
        assert_eq!(ranks.len(), 4);
        let coordinates = to_coordinate(&ranks).unwrap();
        for (c, e) in coordinates.iter().zip([1.0, 10.0, 100.0, 1000.0]) {
            assert_relative_eq!(*c, e, max_relative = 1e-9);
        }
        assert!(ranks.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_frame_default_step() {
        let ranks = build_axis_frame(90.0, 99.99, DEFAULT_FRAME_STEP).unwrap();
        // decades 1..=4 every 0.1
        assert_eq!(ranks.len(), 31);
        assert_relative_eq!(ranks[0], 90.0, max_relative = 1e-12);
        assert_relative_eq!(ranks[30], 99.99, max_relative = 1e-12);

        // evenly spaced in log coordinate
        let logs: Vec<f64> = to_coordinate(&ranks)
            .unwrap()
            .iter()
            .map(|c| c.log10())
            .collect();
        for w in logs.windows(2) {
            assert_relative_eq!(w[1] - w[0], 0.1, epsilon = 1e-9);
        }
    }

    #[test]
    fn test_frame_snaps_bounds_to_decades() {
        // 95 snaps to decade 1 (coordinate 20, log10 1.3), 99.95 to decade 3 (log10 3.3)
        let ranks = build_axis_frame(95.0, 99.95, 1.0).unwrap();
        assert_eq!(ranks.len(), 3);
        assert_relative_eq!(ranks[0], 90.0, max_relative = 1e-12);
        assert_relative_eq!(ranks[2], 99.9, max_relative = 1e-12);
    }

    #[test]
    fn test_frame_single_decade() {
        let ranks = build_axis_frame(0.0, 50.0, 0.1).unwrap();
        assert_eq!(ranks, vec![0.0]);
    }

    #[test]
    fn test_frame_rejects_bad_input() {
        assert_eq!(build_axis_frame(0.0, 99.0, 0.0), Err(DomainError::Step(0.0)));
        assert!(build_axis_frame(0.0, 99.0, f64::NAN).is_err());
        assert!(build_axis_frame(0.0, 100.0, 0.1).is_err());
        assert!(build_axis_frame(-1.0, 99.0, 0.1).is_err());
        assert_eq!(
            build_axis_frame(99.0, 90.0, 0.1),
            Err(DomainError::RankRange {
                min: 99.0,
                max: 90.0
            })
        );
        assert!(matches!(
            build_axis_frame(0.0, 99.9, 1e-6),
            Err(DomainError::TooManySamples { .. })
        ));
    }

    #[test]
    fn test_frame_extent() {
        assert_eq!(frame_extent(0.0, 99.9).unwrap(), (1.0, 1000.0));
        assert_eq!(frame_extent(90.0, 99.0).unwrap(), (10.0, 100.0));
        // both bounds in the first decade
        assert_eq!(frame_extent(0.0, 50.0).unwrap(), (1.0, 10.0));
        assert!(frame_extent(50.0, 50.0).is_err());
    }

    #[test]
    fn test_covering_extent() {
        // 99.95 is coordinate 2000: nearest decade is 10^3, covering is 10^4
        assert_eq!(frame_extent(0.0, 99.95).unwrap(), (1.0, 1000.0));
        assert_eq!(covering_extent(0.0, 99.95).unwrap(), (1.0, 10_000.0));
        // 97 is coordinate 33.3, which sits above 10
        assert_eq!(covering_extent(97.0, 99.0).unwrap(), (10.0, 100.0));
        assert_eq!(frame_extent(97.0, 99.0).unwrap(), (100.0, 1000.0));
        // bounds already on a decade are kept
        assert_eq!(covering_extent(90.0, 99.9).unwrap(), (10.0, 1000.0));
        assert_eq!(covering_extent(0.0, 99.99).unwrap(), (1.0, 10_000.0));
        assert_eq!(covering_extent(0.0, 50.0).unwrap(), (1.0, 10.0));
        assert_eq!(
            covering_extent(90.0, 90.0),
            Err(DomainError::RankRange {
                min: 90.0,
                max: 90.0
            })
        );
        assert!(covering_extent(0.0, 100.0).is_err());
    }

    #[test]
    fn test_covering_extent_contains_every_rank() {
        let ranks = [0.0, 12.5, 90.0, 97.0, 99.0, 99.9, 99.95, 99.995];
        let (lo, hi) = covering_extent(ranks[0], ranks[ranks.len() - 1]).unwrap();
        for c in to_coordinate(&ranks).unwrap() {
            assert!(lo <= c && c <= hi, "{c} outside ({lo}, {hi})");
        }
    }

    #[test]
    fn test_rank_window() {
        let ranks = [0.0, 50.0, 90.0, 99.0, 99.9, 99.99];
        assert_eq!(rank_window(&ranks, None, None), Some(0..6));
        assert_eq!(rank_window(&ranks, Some(90.0), None), Some(2..6));
        assert_eq!(rank_window(&ranks, Some(60.0), Some(99.9)), Some(2..5));
        assert_eq!(rank_window(&ranks, None, Some(95.0)), Some(0..3));
        assert_eq!(rank_window(&ranks, Some(99.999), None), None);
        assert_eq!(rank_window(&ranks, Some(60.0), Some(70.0)), None);
        assert_eq!(rank_window(&[], None, None), None);
    }
}
