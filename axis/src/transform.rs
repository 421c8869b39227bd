use crate::error::{DomainError, Result};
use serde::{Deserialize, Serialize};
use std::hash::Hash;

/// Upper bound (exclusive) of the rank domain, in percent
pub const RANK_MAX: f64 = 100.0;

/// Map a single rank to its reciprocal-logarithmic coordinate.
///
/// `coordinate = 1 / (1 - rank / 100)`
///
/// Fails for ranks outside [0, 100) and for ranks so close to 100 that the
/// coordinate is no longer finite in `f64`.
pub fn coordinate_of(rank: f64) -> Result<f64> {
    if !rank.is_finite() || !(0.0..RANK_MAX).contains(&rank) {
        return Err(DomainError::rank(rank));
    }
    let coordinate = 1.0 / (1.0 - rank / RANK_MAX);
    if !coordinate.is_finite() {
        return Err(DomainError::rank(rank));
    }
    Ok(coordinate)
}

/// Map a single coordinate back to its rank.
///
/// `rank = (1 - 1 / coordinate) * 100`
pub fn rank_of(coordinate: f64) -> Result<f64> {
    if !coordinate.is_finite() || coordinate < 1.0 {
        return Err(DomainError::Coordinate {
            index: 0,
            value: coordinate,
        });
    }
    Ok((1.0 - 1.0 / coordinate) * RANK_MAX)
}

/// Transform a sequence of ranks into coordinates, preserving order.
///
/// The first out-of-domain rank aborts the whole call; the error carries its
/// index.
pub fn to_coordinate(ranks: &[f64]) -> Result<Vec<f64>> {
    ranks
        .iter()
        .enumerate()
        .map(|(index, &value)| {
            coordinate_of(value).map_err(|_| DomainError::Rank { index, value })
        })
        .collect()
}

/// Inverse of [`to_coordinate`].
pub fn to_rank(coordinates: &[f64]) -> Result<Vec<f64>> {
    coordinates
        .iter()
        .enumerate()
        .map(|(index, &value)| {
            rank_of(value).map_err(|_| DomainError::Coordinate { index, value })
        })
        .collect()
}

/// Scale applied to a plot axis
///
/// `RankInverseLog` is the reciprocal-logarithmic rank scale; it is meant to be
/// displayed on a log-scaled axis so that 90, 99, 99.9, ... are evenly spaced.
#[derive(Clone, Copy, Serialize, Deserialize, Debug, PartialEq)]
pub enum AxisScale {
    /// Identity, values are drawn as they are
    Linear,
    /// `1 / (1 - rank / 100)`, ranks in [0, 100)
    RankInverseLog,
}

impl AxisScale {
    /// Create an AxisScale from a string. Unknown or missing names fall back to the default rank scale.
    pub fn create_from_str(s: Option<&str>) -> Self {
        match s {
            Some("linear") => AxisScale::Linear,
            Some("rank") | Some("inverse-log") => AxisScale::RankInverseLog,
            _ => AxisScale::default(),
        }
    }

    /// Whether the transformed values should be displayed on a log-scaled axis
    pub fn is_logarithmic(&self) -> bool {
        matches!(self, AxisScale::RankInverseLog)
    }
}

impl Default for AxisScale {
    fn default() -> Self {
        AxisScale::RankInverseLog
    }
}

impl Hash for AxisScale {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        match self {
            AxisScale::Linear => "linear".hash(state),
            AxisScale::RankInverseLog => "rank-inverse-log".hash(state),
        }
    }
}

/// Trait for scales that map data values to display coordinates and back
pub trait Transformable {
    fn transform(&self, value: f64) -> Result<f64>;
    fn inverse_transform(&self, value: f64) -> Result<f64>;
}

impl Transformable for AxisScale {
    fn transform(&self, value: f64) -> Result<f64> {
        match self {
            AxisScale::Linear => Ok(value),
            AxisScale::RankInverseLog => coordinate_of(value),
        }
    }

    fn inverse_transform(&self, value: f64) -> Result<f64> {
        match self {
            AxisScale::Linear => Ok(value),
            AxisScale::RankInverseLog => rank_of(value),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_to_coordinate_known_values() {
        let coordinates = to_coordinate(&[0.0, 50.0, 90.0, 99.0, 99.9]).unwrap();
        let expected = [1.0, 2.0, 10.0, 100.0, 1000.0];
        for (c, e) in coordinates.iter().zip(expected) {
            assert_relative_eq!(*c, e, max_relative = 1e-12);
        }
    }

    #[test]
    fn test_round_trip() {
        let ranks: Vec<f64> = (0..=99_999).step_by(7).map(|i| i as f64 / 1000.0).collect();
        let back = to_rank(&to_coordinate(&ranks).unwrap()).unwrap();
        for (r, b) in ranks.iter().zip(back) {
            assert!((r - b).abs() < 1e-9, "rank {r} came back as {b}");
        }
    }

    #[test]
    fn test_monotonic() {
        let ranks: Vec<f64> = (0..1000).map(|i| i as f64 * 0.0999).collect();
        let coordinates = to_coordinate(&ranks).unwrap();
        assert!(coordinates.windows(2).all(|w| w[0] < w[1]));
        assert!(coordinates.iter().all(|&c| c >= 1.0));
    }

    #[test]
    fn test_rejects_out_of_domain_ranks() {
        assert_eq!(
            to_coordinate(&[100.0]),
            Err(DomainError::Rank {
                index: 0,
                value: 100.0
            })
        );
        assert!(to_coordinate(&[100.5]).is_err());
        assert!(to_coordinate(&[-0.1]).is_err());
        assert!(to_coordinate(&[f64::NAN]).is_err());

        // the index of the first bad sample is reported
        match to_coordinate(&[10.0, 20.0, 101.0, 102.0]) {
            Err(DomainError::Rank { index, .. }) => assert_eq!(index, 2),
            other => panic!("unexpected result {other:?}"),
        }
    }

    #[test]
    fn test_rejects_rank_rounding_to_hundred() {
        let almost = f64::from_bits(RANK_MAX.to_bits() - 1);
        // almost / 100 rounds to exactly 1.0, the coordinate would be infinite
        if almost / RANK_MAX == 1.0 {
            assert!(coordinate_of(almost).is_err());
        } else {
            assert!(coordinate_of(almost).unwrap().is_finite());
        }
    }

    #[test]
    fn test_rejects_out_of_domain_coordinates() {
        assert_eq!(
            to_rank(&[0.5]),
            Err(DomainError::Coordinate {
                index: 0,
                value: 0.5
            })
        );
        assert!(to_rank(&[f64::INFINITY]).is_err());
        assert_eq!(to_rank(&[1.0]).unwrap(), vec![0.0]);
    }

    #[test]
    fn test_axis_scale() {
        let scale = AxisScale::default();
        assert!(scale.is_logarithmic());
        assert_relative_eq!(scale.transform(99.0).unwrap(), 100.0, max_relative = 1e-12);
        assert_relative_eq!(scale.inverse_transform(100.0).unwrap(), 99.0, max_relative = 1e-12);
        assert!(scale.transform(100.0).is_err());

        let linear = AxisScale::create_from_str(Some("linear"));
        assert_eq!(linear, AxisScale::Linear);
        assert_eq!(linear.transform(150.0).unwrap(), 150.0);
        assert_eq!(linear.inverse_transform(-3.0).unwrap(), -3.0);

        assert_eq!(
            AxisScale::create_from_str(Some("inverse-log")),
            AxisScale::RankInverseLog
        );
        assert_eq!(AxisScale::create_from_str(None), AxisScale::RankInverseLog);
    }

    #[test]
    fn test_axis_scale_serde() {
        let json = serde_json::to_string(&AxisScale::RankInverseLog).unwrap();
        assert_eq!(json, "\"RankInverseLog\"");
        let back: AxisScale = serde_json::from_str("\"Linear\"").unwrap();
        assert_eq!(back, AxisScale::Linear);
    }
}
