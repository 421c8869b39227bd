//! Tick candidates and tick labels for rank axes.
//!
//! On a log-scaled display of the rank coordinate, the "round" positions are
//! the powers of ten: coordinate `10^k` is rank `(1 - 10^-k) * 100`, i.e.
//! 90, 99, 99.9, ... The functions here find those positions in a sequence of
//! ranks and turn their exponents into labels.

use crate::error::{DomainError, Result};
use crate::transform::{RANK_MAX, to_coordinate};
use itertools::Itertools;
use serde::{Deserialize, Serialize};

/// Default tolerance on the fractional part of `log10(coordinate)`
pub const DEFAULT_TICK_TOLERANCE: f64 = 1e-5;

/// Largest exponent whose label differs from 100 in `f64`.
///
/// At `k = 17`, `1 - 10^-17` already rounds to `1.0`.
pub const MAX_EXPONENT: i32 = 16;

/// A rank whose coordinate sits on a power of ten
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TickPosition {
    /// Index of the rank in the input sequence
    pub index: usize,
    /// Coordinate as computed from the rank, before snapping
    pub coordinate: f64,
    /// Integer exponent `k` with `coordinate ≈ 10^k`
    pub exponent: i32,
}

impl TickPosition {
    /// The exact power of ten this tick stands for
    pub fn snapped(&self) -> f64 {
        10f64.powi(self.exponent)
    }
}

/// A labelled tick ready to hand to a drawing surface
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TickMark {
    /// Position on the coordinate axis (`10^exponent`)
    pub position: f64,
    pub exponent: i32,
    pub label: String,
}

/// Number of decimal places the log value is rounded to for a given tolerance
fn rounding_digits(tolerance: f64) -> Result<i32> {
    if !tolerance.is_finite() || tolerance <= 0.0 || tolerance >= 1.0 {
        return Err(DomainError::Tolerance(tolerance));
    }
    // 1e-5 -> 5 digits; the small offset keeps exact powers of ten from rounding up
    let digits = (-tolerance.log10() - 1e-9).ceil() as i32;
    Ok(digits.clamp(1, MAX_EXPONENT))
}

fn exponent_of(coordinate: f64, tolerance: f64, digits: i32) -> Option<i32> {
    if !coordinate.is_finite() || coordinate <= 0.0 {
        return None;
    }
    let scale = 10f64.powi(digits);
    let rounded = (coordinate.log10() * scale).round() / scale;
    let k = rounded.round();
    ((rounded - k).abs() < tolerance).then_some(k as i32)
}

/// Find the ranks whose coordinates land on powers of ten.
///
/// Each rank is transformed, `log10` of the coordinate is rounded to the
/// precision implied by `tolerance` and kept when the result is integral.
/// Output follows input order; duplicates in the input give duplicate ticks.
pub fn compute_tick_positions(ranks: &[f64], tolerance: f64) -> Result<Vec<TickPosition>> {
    let digits = rounding_digits(tolerance)?;
    let coordinates = to_coordinate(ranks)?;

    Ok(coordinates
        .into_iter()
        .enumerate()
        .filter_map(|(index, coordinate)| {
            exponent_of(coordinate, tolerance, digits).map(|exponent| TickPosition {
                index,
                coordinate,
                exponent,
            })
        })
        .collect())
}

/// Label for the tick at coordinate `10^k`.
///
/// The value is `(1 - 10^-k) * 100` printed with `max(0, k - 2)` decimals:
/// 1 -> "90", 2 -> "99", 3 -> "99.9", 5 -> "99.999".
pub fn format_tick_label(k: i32) -> Result<String> {
    if !(1..=MAX_EXPONENT).contains(&k) {
        return Err(DomainError::Exponent {
            k,
            max: MAX_EXPONENT,
        });
    }
    let value = (1.0 - 10f64.powi(-k)) * RANK_MAX;
    let decimals = (k - 2).max(0) as usize;
    Ok(format!("{value:.decimals$}"))
}

/// Labelled ticks for a sequence of ranks.
///
/// Keeps one mark per exponent (the first rank that reaches it) and skips the
/// origin (`k = 0`, rank 0), which has no label.
pub fn axis_ticks(ranks: &[f64], tolerance: f64) -> Result<Vec<TickMark>> {
    compute_tick_positions(ranks, tolerance)?
        .into_iter()
        .filter(|tick| (1..=MAX_EXPONENT).contains(&tick.exponent))
        .unique_by(|tick| tick.exponent)
        .map(|tick| {
            Ok(TickMark {
                position: tick.snapped(),
                exponent: tick.exponent,
                label: format_tick_label(tick.exponent)?,
            })
        })
        .collect()
}

/// Label for a single axis coordinate, if it is a labelled tick position.
///
/// Meant as an axis label formatter: every other coordinate gets `None`.
pub fn tick_label_at(coordinate: f64, tolerance: f64) -> Option<String> {
    let digits = rounding_digits(tolerance).ok()?;
    if coordinate < 1.0 {
        return None;
    }
    let k = exponent_of(coordinate, tolerance, digits)?;
    format_tick_label(k).ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tick_snapping() {
        let ticks = compute_tick_positions(&[0.0, 90.0, 99.0, 99.9], DEFAULT_TICK_TOLERANCE)
            .unwrap();
        let exponents: Vec<i32> = ticks.iter().map(|t| t.exponent).collect();
        assert_eq!(exponents, vec![0, 1, 2, 3]);
        let snapped: Vec<f64> = ticks.iter().map(TickPosition::snapped).collect();
        assert_eq!(snapped, vec![1.0, 10.0, 100.0, 1000.0]);
    }

    #[test]
    fn test_non_round_coordinates_are_excluded() {
        let ticks =
            compute_tick_positions(&[50.0, 75.0, 90.0, 95.0], DEFAULT_TICK_TOLERANCE).unwrap();
        assert_eq!(ticks.len(), 1);
        assert_eq!(ticks[0].index, 2);
        assert_eq!(ticks[0].exponent, 1);
    }

    #[test]
    fn test_tolerance_controls_snapping() {
        // coordinate 1/(1 - 0.90001) = 10.001..., log10 off by ~4.3e-5
        let ranks = [90.001];
        assert!(
            compute_tick_positions(&ranks, DEFAULT_TICK_TOLERANCE)
                .unwrap()
                .is_empty()
        );
        let loose = compute_tick_positions(&ranks, 1e-3).unwrap();
        assert_eq!(loose.len(), 1);
        assert_eq!(loose[0].exponent, 1);
    }

    #[test]
    fn test_invalid_tolerance() {
        assert_eq!(
            compute_tick_positions(&[90.0], 0.0),
            Err(DomainError::Tolerance(0.0))
        );
        assert!(compute_tick_positions(&[90.0], 1.5).is_err());
        assert!(compute_tick_positions(&[90.0], f64::NAN).is_err());
    }

    #[test]
    fn test_invalid_ranks_propagate() {
        assert!(compute_tick_positions(&[90.0, 100.0], DEFAULT_TICK_TOLERANCE).is_err());
    }

    #[test]
    fn test_format_tick_label() {
        assert_eq!(format_tick_label(1).unwrap(), "90");
        assert_eq!(format_tick_label(2).unwrap(), "99");
        assert_eq!(format_tick_label(3).unwrap(), "99.9");
        assert_eq!(format_tick_label(4).unwrap(), "99.99");
        assert_eq!(format_tick_label(5).unwrap(), "99.999");
        assert_eq!(format_tick_label(7).unwrap(), "99.99999");
    }

    #[test]
    fn test_format_tick_label_domain() {
        assert_eq!(
            format_tick_label(0),
            Err(DomainError::Exponent {
                k: 0,
                max: MAX_EXPONENT
            })
        );
        assert!(format_tick_label(-2).is_err());
        assert!(format_tick_label(MAX_EXPONENT + 1).is_err());
        assert!(format_tick_label(MAX_EXPONENT).is_ok());
    }

    #[test]
    fn test_format_tick_label_near_precision_limit() {
        assert_eq!(MAX_EXPONENT, 16);
        assert_eq!(format_tick_label(15).unwrap(), "99.9999999999999");
        // still short of 100 at the largest exponent
        let label = format_tick_label(16).unwrap();
        assert_eq!(label, "99.99999999999999");
        assert!(label.parse::<f64>().unwrap() < 100.0);
        // one more decade collapses onto 100
        assert_eq!(1.0 - 10f64.powi(-17), 1.0);
        assert_eq!(
            format_tick_label(17),
            Err(DomainError::Exponent { k: 17, max: 16 })
        );
    }

    #[test]
    fn test_axis_ticks_skip_origin_and_duplicates() {
        let ranks = [0.0, 50.0, 90.0, 90.0, 99.0, 99.9];
        let marks = axis_ticks(&ranks, DEFAULT_TICK_TOLERANCE).unwrap();
        let labels: Vec<&str> = marks.iter().map(|m| m.label.as_str()).collect();
        assert_eq!(labels, vec!["90", "99", "99.9"]);
        let positions: Vec<f64> = marks.iter().map(|m| m.position).collect();
        assert_eq!(positions, vec![10.0, 100.0, 1000.0]);
    }

    #[test]
    fn test_tick_label_at() {
        assert_eq!(tick_label_at(10.0, DEFAULT_TICK_TOLERANCE).as_deref(), Some("90"));
        assert_eq!(
            tick_label_at(999.9999999999991, DEFAULT_TICK_TOLERANCE).as_deref(),
            Some("99.9")
        );
        assert_eq!(tick_label_at(1.0, DEFAULT_TICK_TOLERANCE), None);
        assert_eq!(tick_label_at(20.0, DEFAULT_TICK_TOLERANCE), None);
        assert_eq!(tick_label_at(0.1, DEFAULT_TICK_TOLERANCE), None);
        assert_eq!(tick_label_at(10.0, -1.0), None);
    }

    #[test]
    fn test_tick_mark_serializes() {
        let marks = axis_ticks(&[99.0], DEFAULT_TICK_TOLERANCE).unwrap();
        let json = serde_json::to_value(&marks[0]).unwrap();
        assert_eq!(json["label"], "99");
        assert_eq!(json["exponent"], 2);
    }
}
