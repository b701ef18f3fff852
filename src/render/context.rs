use crate::foundation::core::BezPath;
use crate::transform::affine::AffineTransform;

/// Drawing surface the tree renders into.
///
/// Implemented by the host's graphics-device binding. The tree only relies on
/// the transform stack: [`save`](Self::save)/[`restore`](Self::restore) nest
/// to arbitrary depth, and [`apply`](Self::apply) composes a node's matrix onto
/// the running transform so it acts before everything applied earlier.
/// Primitive calls are issued by node behaviors and are opaque to the tree.
pub trait RenderContext {
    /// Pushes the current transform state.
    fn save(&mut self);

    /// Pops the state pushed by the matching [`save`](Self::save).
    fn restore(&mut self);

    /// Composes `transform` onto the running transform.
    fn apply(&mut self, transform: &AffineTransform);

    /// Running local-to-device transform.
    fn transform(&self) -> AffineTransform;

    /// Strokes a path in the current local space.
    fn stroke_path(&mut self, _path: &BezPath) {}
}
