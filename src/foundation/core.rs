pub use kurbo::{Affine, BezPath, Point, Rect, Size, Vec2};

/// Default tolerance used by approximate comparisons on transform coefficients.
pub const EPSILON: f64 = 1e-9;

/// Returns `true` when `a` and `b` differ by at most `eps`.
#[inline]
pub fn approx_eq(a: f64, b: f64, eps: f64) -> bool {
    (a - b).abs() <= eps
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
