//! Pan/zoom about a focal point.

use crate::foundation::core::{Point, Vec2};
use crate::foundation::error::SceneResult;
use crate::transform::affine::AffineTransform;

/// Accumulating pan/zoom transform.
///
/// `acc_transform` is the cumulative zoom state. `scale` is only ever a pending
/// delta: [`update`](Self::update) folds it into `acc_transform` about `zoom_at`
/// and resets it to `(1, 1)`. The derived [`transform`](Self::transform) applies
/// the pan `position` (in content units) and then the accumulated zoom.
///
/// Rotation is never applied, and scaling is kept uniform, so the `a`
/// coefficient of `acc_transform` is the current absolute zoom level.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct ZoomTransform {
    position: Vec2,
    scale: Vec2,
    zoom_at: Point,
    acc_transform: AffineTransform,
    transform: AffineTransform,
}

impl Default for ZoomTransform {
    fn default() -> Self {
        Self::new()
    }
}

impl ZoomTransform {
    /// Identity zoom with no pan and the focal point at the origin.
    #[must_use]
    pub fn new() -> Self {
        Self {
            position: Vec2::ZERO,
            scale: Vec2::new(1.0, 1.0),
            zoom_at: Point::ORIGIN,
            acc_transform: AffineTransform::IDENTITY,
            transform: AffineTransform::IDENTITY,
        }
    }

    /// Folds the pending scale delta into the accumulated transform and
    /// rebuilds the derived transform.
    pub fn update(&mut self) {
        self.acc_transform.translate(self.zoom_at.x, self.zoom_at.y);
        self.acc_transform.scale(self.scale.x, self.scale.y);
        self.acc_transform.translate(-self.zoom_at.x, -self.zoom_at.y);
        self.scale = Vec2::new(1.0, 1.0);

        self.transform = self.acc_transform;
        self.transform.translate(self.position.x, self.position.y);
    }

    /// Sets the absolute zoom level.
    ///
    /// Pending deltas are flushed first; the requested level is then stored as
    /// the relative delta that takes the accumulated zoom to `absolute`.
    pub fn set_scale(&mut self, absolute: f64) {
        self.update();
        let relative = absolute / self.zoom_level();
        self.scale = Vec2::new(relative, relative);
    }

    /// Multiplies the pending zoom delta by `factor`.
    pub fn scale_by(&mut self, factor: f64) {
        self.scale = Vec2::new(self.scale.x * factor, self.scale.y * factor);
    }

    /// Current accumulated zoom level, excluding pending deltas.
    #[must_use]
    pub fn zoom_level(&self) -> f64 {
        self.acc_transform.a
    }

    /// Pending (not yet folded) scale delta.
    #[must_use]
    pub fn pending_scale(&self) -> Vec2 {
        self.scale
    }

    /// Sets the pan offset.
    pub fn set_position(&mut self, position: Vec2) {
        self.position = position;
    }

    /// Adds to the pan offset.
    pub fn pan_by(&mut self, delta: Vec2) {
        self.position += delta;
    }

    /// Pan offset.
    #[must_use]
    pub fn position(&self) -> Vec2 {
        self.position
    }

    /// Sets the point zooming happens about.
    pub fn set_zoom_at(&mut self, zoom_at: Point) {
        self.zoom_at = zoom_at;
    }

    /// Point zooming happens about.
    #[must_use]
    pub fn zoom_at(&self) -> Point {
        self.zoom_at
    }

    /// Accumulated zoom, without pan.
    #[must_use]
    pub fn acc_transform(&self) -> &AffineTransform {
        &self.acc_transform
    }

    /// Derived pan-then-zoom transform as of the last [`update`](Self::update).
    #[must_use]
    pub fn transform(&self) -> &AffineTransform {
        &self.transform
    }

    /// Maps a point from zoomed content space to the outer space.
    #[must_use]
    pub fn map_point(&self, p: Point) -> Point {
        self.transform.transform_point(p)
    }

    /// Maps a point from the outer space back into zoomed content space.
    ///
    /// # Errors
    ///
    /// Fails when the accumulated zoom has collapsed to zero.
    pub fn unmap_point(&self, p: Point) -> SceneResult<Point> {
        Ok(self.transform.invert_to()?.transform_point(p))
    }

    /// Drops all accumulated zoom and pan.
    pub fn reset(&mut self) {
        *self = Self {
            zoom_at: self.zoom_at,
            ..Self::new()
        };
    }
}

#[cfg(test)]
#[path = "../../tests/unit/transform/zoom.rs"]
mod tests;
