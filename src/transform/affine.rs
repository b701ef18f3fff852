//! 2D affine matrices.
//!
//! An [`AffineTransform`] holds six coefficients `(a, b, c, d, tx, ty)` mapping
//!
//! ```text
//! x' = a*x + c*y + tx
//! y' = b*x + d*y + ty
//! ```
//!
//! Products are read left to right: `m * n` means "apply `m`, then `n`". The
//! mutating [`translate`](AffineTransform::translate),
//! [`rotate`](AffineTransform::rotate) and [`scale`](AffineTransform::scale)
//! methods post-multiply (the new operation is applied to points before the
//! existing matrix), so `identity.translate().rotate().scale()` scales first,
//! rotates second and translates last.
//!
//! The Y axis grows downward, so a positive angle turns clockwise on screen.
//!
//! Every composing operation in this module, mutating or not, goes through the
//! same product routine; results agree bit-for-bit whichever entry point built
//! them.

use crate::foundation::core::{Affine, Point, Vec2, approx_eq};
use crate::foundation::error::{SceneError, SceneResult};

/// A 2D affine matrix.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct AffineTransform {
    /// X scale / rotation term.
    pub a: f64,
    /// Y shear / rotation term.
    pub b: f64,
    /// X shear / rotation term.
    pub c: f64,
    /// Y scale / rotation term.
    pub d: f64,
    /// X translation.
    pub tx: f64,
    /// Y translation.
    pub ty: f64,
}

impl Default for AffineTransform {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl AffineTransform {
    /// The identity matrix `(1, 0, 0, 1, 0, 0)`.
    pub const IDENTITY: Self = Self::new(1.0, 0.0, 0.0, 1.0, 0.0, 0.0);

    /// Builds a matrix from its six coefficients.
    #[must_use]
    pub const fn new(a: f64, b: f64, c: f64, d: f64, tx: f64, ty: f64) -> Self {
        Self { a, b, c, d, tx, ty }
    }

    /// Pure translation.
    #[must_use]
    pub const fn translation(tx: f64, ty: f64) -> Self {
        Self::new(1.0, 0.0, 0.0, 1.0, tx, ty)
    }

    /// Pure rotation by `radians` (clockwise on a Y-down screen).
    #[must_use]
    pub fn rotation(radians: f64) -> Self {
        let (s, c) = radians.sin_cos();
        Self::new(c, s, -s, c, 0.0, 0.0)
    }

    /// Pure (possibly non-uniform) scale.
    #[must_use]
    pub const fn scaling(sx: f64, sy: f64) -> Self {
        Self::new(sx, 0.0, 0.0, sy, 0.0, 0.0)
    }

    /// Resets to the identity matrix.
    pub fn to_identity(&mut self) {
        *self = Self::IDENTITY;
    }

    /// Overwrites all six coefficients.
    pub fn set_components(&mut self, a: f64, b: f64, c: f64, d: f64, tx: f64, ty: f64) {
        *self = Self::new(a, b, c, d, tx, ty);
    }

    /// Copies `other` into `self`.
    pub fn set_from(&mut self, other: &Self) {
        *self = *other;
    }

    /// Maps a point through the matrix. `p` itself is left untouched.
    #[inline]
    #[must_use]
    pub fn transform_point(&self, p: Point) -> Point {
        Point::new(
            self.a * p.x + self.c * p.y + self.tx,
            self.b * p.x + self.d * p.y + self.ty,
        )
    }

    /// Maps a vector through the linear part only (no translation).
    #[inline]
    #[must_use]
    pub fn transform_vector(&self, v: Vec2) -> Vec2 {
        Vec2::new(self.a * v.x + self.c * v.y, self.b * v.x + self.d * v.y)
    }

    /// Composes a translation onto the matrix.
    pub fn translate(&mut self, tx: f64, ty: f64) {
        multiply_post(&Self::translation(tx, ty), self);
    }

    /// Composes a rotation onto the matrix.
    pub fn rotate(&mut self, radians: f64) {
        multiply_post(&Self::rotation(radians), self);
    }

    /// Composes a scale onto the matrix.
    pub fn scale(&mut self, sx: f64, sy: f64) {
        multiply_post(&Self::scaling(sx, sy), self);
    }

    /// Discards the current state and becomes a pure translation.
    pub fn make_translate(&mut self, tx: f64, ty: f64) {
        *self = Self::translation(tx, ty);
    }

    /// Discards the current state and becomes a pure rotation.
    pub fn make_rotate(&mut self, radians: f64) {
        *self = Self::rotation(radians);
    }

    /// Discards the current state and becomes a pure scale.
    pub fn make_scale(&mut self, sx: f64, sy: f64) {
        *self = Self::scaling(sx, sy);
    }

    /// `a*d - b*c`.
    #[inline]
    #[must_use]
    pub fn determinant(&self) -> f64 {
        self.a * self.d - self.b * self.c
    }

    /// Returns the inverse matrix.
    ///
    /// # Errors
    ///
    /// [`SceneError::SingularMatrix`] when the determinant is zero or not finite.
    pub fn invert_to(&self) -> SceneResult<Self> {
        let det = self.determinant();
        if det == 0.0 || !det.is_finite() {
            return Err(SceneError::SingularMatrix { det });
        }
        Ok(Self::new(
            self.d / det,
            -self.b / det,
            -self.c / det,
            self.a / det,
            (self.c * self.ty - self.d * self.tx) / det,
            (self.b * self.tx - self.a * self.ty) / det,
        ))
    }

    /// Inverts in place. On error the matrix is left unchanged.
    ///
    /// # Errors
    ///
    /// [`SceneError::SingularMatrix`] when the determinant is zero or not finite.
    pub fn invert(&mut self) -> SceneResult<()> {
        *self = self.invert_to()?;
        Ok(())
    }

    /// Swaps the off-diagonal `b` and `c` terms.
    ///
    /// This flips between the row-major and column-major reading of the linear
    /// part; translation is untouched.
    pub fn transpose(&mut self) {
        std::mem::swap(&mut self.b, &mut self.c);
    }

    /// Returns `self` followed by `next`.
    #[must_use]
    pub fn then(&self, next: &Self) -> Self {
        multiply(self, next)
    }

    /// Translation part as a vector.
    #[must_use]
    pub fn translation_part(&self) -> Vec2 {
        Vec2::new(self.tx, self.ty)
    }

    /// Component-wise comparison within `eps`.
    #[must_use]
    pub fn approx_eq(&self, other: &Self, eps: f64) -> bool {
        approx_eq(self.a, other.a, eps)
            && approx_eq(self.b, other.b, eps)
            && approx_eq(self.c, other.c, eps)
            && approx_eq(self.d, other.d, eps)
            && approx_eq(self.tx, other.tx, eps)
            && approx_eq(self.ty, other.ty, eps)
    }

    /// Is every coefficient finite?
    #[must_use]
    pub fn is_finite(&self) -> bool {
        self.a.is_finite()
            && self.b.is_finite()
            && self.c.is_finite()
            && self.d.is_finite()
            && self.tx.is_finite()
            && self.ty.is_finite()
    }

    /// Coefficients in `[a, b, c, d, tx, ty]` order.
    #[must_use]
    pub const fn as_coeffs(&self) -> [f64; 6] {
        [self.a, self.b, self.c, self.d, self.tx, self.ty]
    }
}

impl From<AffineTransform> for Affine {
    fn from(m: AffineTransform) -> Self {
        Self::new(m.as_coeffs())
    }
}

impl From<Affine> for AffineTransform {
    fn from(m: Affine) -> Self {
        let [a, b, c, d, tx, ty] = m.as_coeffs();
        Self::new(a, b, c, d, tx, ty)
    }
}

/// `m` then `n`.
#[inline]
fn product(m: &AffineTransform, n: &AffineTransform) -> AffineTransform {
    AffineTransform::new(
        m.a * n.a + m.b * n.c,
        m.a * n.b + m.b * n.d,
        m.c * n.a + m.d * n.c,
        m.c * n.b + m.d * n.d,
        m.tx * n.a + m.ty * n.c + n.tx,
        m.tx * n.b + m.ty * n.d + n.ty,
    )
}

/// `n := n * m`: accumulates `n` (a child) into the established matrix `m`.
#[inline]
pub fn multiply_pre(m: &AffineTransform, n: &mut AffineTransform) {
    *n = product(n, m);
}

/// `n := m * n`: applies `m` on top of the running composite `n`.
#[inline]
pub fn multiply_post(m: &AffineTransform, n: &mut AffineTransform) {
    *n = product(m, n);
}

/// `m * n` without mutating either operand.
#[inline]
#[must_use]
pub fn multiply(m: &AffineTransform, n: &AffineTransform) -> AffineTransform {
    product(m, n)
}

#[cfg(test)]
#[path = "../../tests/unit/transform/affine.rs"]
mod tests;
