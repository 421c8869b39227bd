//! # rank-axis
//!
//! Reciprocal-logarithmic axes for percentile ranks.
//!
//! Ranks close to 100 (99.9, 99.99, ...) crowd together on a linear axis. The
//! transform `1 / (1 - rank / 100)` spreads them out: on a log-scaled axis the
//! ranks 90, 99, 99.9, 99.99 become evenly spaced decades.
//!
//! ```rust
//! use rank_axis::{DEFAULT_TICK_TOLERANCE, axis_ticks, to_coordinate};
//!
//! # fn main() -> rank_axis::Result<()> {
//! let ranks = [50.0, 90.0, 99.0, 99.9];
//! let coordinates = to_coordinate(&ranks)?;
//! assert!((coordinates[3] - 1000.0).abs() < 1e-9);
//!
//! let labels: Vec<String> = axis_ticks(&ranks, DEFAULT_TICK_TOLERANCE)?
//!     .into_iter()
//!     .map(|tick| tick.label)
//!     .collect();
//! assert_eq!(labels, ["90", "99", "99.9"]);
//! # Ok(())
//! # }
//! ```
//!
//! Every function is pure. Input outside its domain (a rank at or above 100, a
//! coordinate below 1, an exponent below 1) is rejected with a [`DomainError`]
//! instead of turning into NaN or infinity further down a chart.
//!
//! ## Modules
//!
//! - `transform`: rank <-> coordinate, and the [`AxisScale`] description
//! - `ticks`: tick candidates and labels
//! - `frame`: evenly log-spaced frames, coordinate extents and rank windows
//! - `span`: shaded span geometry

pub mod error;
pub mod frame;
pub mod span;
pub mod ticks;
pub mod transform;

pub use error::{DomainError, Result};
pub use frame::{
    DEFAULT_FRAME_STEP, MAX_FRAME_SAMPLES, build_axis_frame, covering_extent, frame_extent,
    rank_window,
};
pub use span::{span_polygon, x_span};
pub use ticks::{
    DEFAULT_TICK_TOLERANCE, MAX_EXPONENT, TickMark, TickPosition, axis_ticks,
    compute_tick_positions, format_tick_label, tick_label_at,
};
pub use transform::{
    AxisScale, RANK_MAX, Transformable, coordinate_of, rank_of, to_coordinate, to_rank,
};
