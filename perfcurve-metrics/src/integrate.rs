//! Numeric integration helpers.

/// Area of one trapezoid strip between `(x1, y1)` and `(x2, y2)`.
///
/// The strip width is `|x1 - x2|`, so argument order along x does not matter.
#[inline]
pub fn trapz(x1: f64, x2: f64, y1: f64, y2: f64) -> f64 {
    0.5 * (x1 - x2).abs() * (y1 + y2)
}
