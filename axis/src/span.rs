//! Shaded spans between two positions of a coordinate sequence.

/// Coordinates bounding a span between indices `i_lo` and `i_hi`.
///
/// `None` when `i_lo` is past the end of `coordinates`; an `i_hi` past the end
/// is clamped to the last coordinate so a span can run "to the edge".
pub fn x_span(coordinates: &[f64], i_lo: usize, i_hi: usize) -> Option<(f64, f64)> {
    let lo = *coordinates.get(i_lo)?;
    let hi = coordinates.get(i_hi).or(coordinates.last()).copied()?;
    Some((lo, hi))
}

/// Corners of a vertical shaded span in transformed-coordinate space.
///
/// `[(x_lo, y_lo), (x_hi, y_lo), (x_hi, y_hi), (x_lo, y_hi)]`, a rectangle
/// whose x extent comes from [`x_span`].
pub fn span_polygon(
    coordinates: &[f64],
    i_lo: usize,
    i_hi: usize,
    y_lo: f64,
    y_hi: f64,
) -> Option<[(f64, f64); 4]> {
    let (x_lo, x_hi) = x_span(coordinates, i_lo, i_hi)?;
    Some([(x_lo, y_lo), (x_hi, y_lo), (x_hi, y_hi), (x_lo, y_hi)])
}
