//! Error type for rank-axis operations.
//!
//! Every operation in this crate is a pure function over numbers, so the only
//! way it can fail is an input outside its domain. `DomainError` names the
//! offending value so a caller can tell which sample of a sequence was wrong.

use thiserror::Error;

/// An input rank, coordinate, exponent or sampling parameter fell outside its
/// valid domain.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum DomainError {
    /// Ranks must be finite and lie in [0, 100)
    #[error("rank {value} at index {index} is outside [0, 100)")]
    Rank { index: usize, value: f64 },

    /// Coordinates must be finite and at least 1
    #[error("coordinate {value} at index {index} is below 1 or not finite")]
    Coordinate { index: usize, value: f64 },

    /// Tick exponents must lie in [1, MAX_EXPONENT]
    #[error("tick exponent {k} is outside [1, {max}]")]
    Exponent { k: i32, max: i32 },

    /// Tick tolerance must be finite and in (0, 1)
    #[error("tick tolerance {0} must be finite and in (0, 1)")]
    Tolerance(f64),

    /// Frame step must be finite and positive
    #[error("frame step {0} must be finite and positive")]
    Step(f64),

    /// The lower bound of a rank range must be below the upper bound
    #[error("rank range {min}..{max} is empty")]
    RankRange { min: f64, max: f64 },

    /// Frame sampling would produce more samples than allowed
    #[error("frame would need {requested} samples, at most {max} are allowed")]
    TooManySamples { requested: usize, max: usize },
}

impl DomainError {
    /// Rank error for a single scalar input
    pub fn rank(value: f64) -> Self {
        Self::Rank { index: 0, value }
    }
}

pub type Result<T> = std::result::Result<T, DomainError>;
