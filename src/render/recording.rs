//! Headless render context that records primitives instead of rasterizing.

use kurbo::Shape as _;

use crate::foundation::core::{Affine, BezPath, Rect};
use crate::render::context::RenderContext;
use crate::transform::affine::{AffineTransform, multiply_post};

/// One recorded primitive.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct DrawCommand {
    /// Local-to-device transform in effect when the primitive was issued.
    pub transform: AffineTransform,
    /// Device-space bounding box of the primitive.
    pub bounds: Rect,
    /// Transform-stack depth at the time of the call.
    pub depth: usize,
}

/// [`RenderContext`] that keeps a transform stack and a list of
/// [`DrawCommand`]s.
#[derive(Clone, Debug, Default, serde::Serialize)]
pub struct RecordingContext {
    base: AffineTransform,
    current: AffineTransform,
    stack: Vec<AffineTransform>,
    max_depth: usize,
    unbalanced_restores: usize,
    commands: Vec<DrawCommand>,
}

impl RecordingContext {
    /// Context whose device transform starts at identity.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Context whose device transform starts at `base` (usually the view
    /// transform of the window).
    #[must_use]
    pub fn with_base(base: AffineTransform) -> Self {
        Self {
            base,
            current: base,
            ..Self::default()
        }
    }

    /// Primitives recorded so far.
    #[must_use]
    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    /// Takes the recorded primitives, leaving the list empty.
    pub fn take_commands(&mut self) -> Vec<DrawCommand> {
        std::mem::take(&mut self.commands)
    }

    /// Current save depth.
    #[must_use]
    pub fn depth(&self) -> usize {
        self.stack.len()
    }

    /// Deepest save depth reached since creation or the last [`reset`](Self::reset).
    #[must_use]
    pub fn max_depth(&self) -> usize {
        self.max_depth
    }

    /// Number of `restore` calls that had no matching `save`.
    #[must_use]
    pub fn unbalanced_restores(&self) -> usize {
        self.unbalanced_restores
    }

    /// Starts a new frame: back to the base transform, nothing recorded.
    pub fn reset(&mut self) {
        self.current = self.base;
        self.stack.clear();
        self.max_depth = 0;
        self.unbalanced_restores = 0;
        self.commands.clear();
    }
}

impl RenderContext for RecordingContext {
    fn save(&mut self) {
        self.stack.push(self.current);
        self.max_depth = self.max_depth.max(self.stack.len());
    }

    fn restore(&mut self) {
        match self.stack.pop() {
            Some(saved) => self.current = saved,
            None => {
                self.unbalanced_restores += 1;
                tracing::warn!("restore without matching save");
            }
        }
    }

    fn apply(&mut self, transform: &AffineTransform) {
        multiply_post(transform, &mut self.current);
    }

    fn transform(&self) -> AffineTransform {
        self.current
    }

    fn stroke_path(&mut self, path: &BezPath) {
        let device = Affine::from(self.current) * path.clone();
        self.commands.push(DrawCommand {
            transform: self.current,
            bounds: device.bounding_box(),
            depth: self.stack.len(),
        });
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/recording.rs"]
mod tests;
