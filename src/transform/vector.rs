//! Point and vector helpers on top of kurbo's primitives.

use crate::foundation::core::{Point, Vec2};

#[inline]
/// Rotate `v` by `radians` (clockwise on a Y-down screen).
pub fn rotate_vec2(v: Vec2, radians: f64) -> Vec2 {
    let (s, c) = radians.sin_cos();
    Vec2::new(c * v.x - s * v.y, s * v.x + c * v.y)
}

#[inline]
/// Linearly interpolate between two vectors with clamped parameter `t`.
pub fn lerp_vec2(a: Vec2, b: Vec2, t: f64) -> Vec2 {
    let t = t.clamp(0.0, 1.0);
    Vec2::new(a.x + ((b.x - a.x) * t), a.y + ((b.y - a.y) * t))
}

#[inline]
/// Linearly interpolate between two points with clamped parameter `t`.
pub fn lerp_point(a: Point, b: Point, t: f64) -> Point {
    lerp_vec2(a.to_vec2(), b.to_vec2(), t).to_point()
}

#[inline]
/// Linearly interpolate between two scalars with clamped parameter `t`.
pub fn lerp(a: f64, b: f64, t: f64) -> f64 {
    a + (b - a) * t.clamp(0.0, 1.0)
}

/// Unit vector in the direction of `v`, or `None` for the zero vector.
pub fn normalize(v: Vec2) -> Option<Vec2> {
    let len = v.hypot();
    (len > 0.0 && len.is_finite()).then(|| v / len)
}

#[cfg(test)]
#[path = "../../tests/unit/transform/vector.rs"]
mod tests;
