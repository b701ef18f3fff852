//! Node-level types: local pose, node kinds and the behavior capability.
//!
//! A node's *kind* is a closed set of variants the tree itself understands
//! (plain groups, filters, zoom controllers, scenes). Everything a concrete
//! shape or scene does on top of that (drawing, per-tick updates, input
//! handling, lifecycle notifications) goes through the [`NodeBehavior`] trait.

use std::fmt;

use crate::foundation::core::{Point, Vec2};
use crate::foundation::ids::NodeId;
use crate::render::context::RenderContext;
use crate::scene::event::InputEvent;
use crate::scene::filter::Filter;
use crate::scene::transition::{Transition, TransitionAction};
use crate::transform::affine::AffineTransform;
use crate::transform::vector::{lerp, lerp_point};
use crate::transform::zoom::ZoomTransform;

/// Local position, rotation and uniform scale of a node.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct Pose {
    /// Offset from the parent's origin.
    pub position: Point,
    /// Rotation in radians, clockwise on a Y-down screen.
    pub rotation: f64,
    /// Uniform scale factor.
    pub scale: f64,
}

impl Default for Pose {
    fn default() -> Self {
        Self {
            position: Point::ORIGIN,
            rotation: 0.0,
            scale: 1.0,
        }
    }
}

impl Pose {
    /// Pose at `position` with no rotation and unit scale.
    #[must_use]
    pub fn at(position: Point) -> Self {
        Self {
            position,
            ..Self::default()
        }
    }

    /// Builder-style rotation.
    #[must_use]
    pub fn with_rotation(self, rotation: f64) -> Self {
        Self { rotation, ..self }
    }

    /// Builder-style scale.
    #[must_use]
    pub fn with_scale(self, scale: f64) -> Self {
        Self { scale, ..self }
    }

    /// Builds the local matrix: translate, then rotate, then scale.
    ///
    /// A zero rotation and a unit scale are skipped outright rather than
    /// multiplied in.
    #[must_use]
    pub fn to_affine(&self) -> AffineTransform {
        let mut m = AffineTransform::IDENTITY;
        m.make_translate(self.position.x, self.position.y);
        if self.rotation != 0.0 {
            m.rotate(self.rotation);
        }
        if self.scale != 1.0 {
            m.scale(self.scale, self.scale);
        }
        m
    }

    /// Blends two poses with clamped parameter `t`.
    #[must_use]
    pub fn lerp(&self, other: &Self, t: f64) -> Self {
        Self {
            position: lerp_point(self.position, other.position, t),
            rotation: lerp(self.rotation, other.rotation, t),
            scale: lerp(self.scale, other.scale, t),
        }
    }

    /// Moves the pose by `delta`.
    pub fn translate_by(&mut self, delta: Vec2) {
        self.position += delta;
    }
}

/// Closed set of node kinds understood by the tree.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize)]
pub enum NodeKind {
    /// Plain node: draws through its behavior, if any, then its children.
    #[default]
    Group,
    /// Rebuilds its children's inherited transform from a subset of the
    /// parent's components.
    Filter(Filter),
    /// Applies a pan/zoom transform on top of its own pose.
    Zoom(ZoomTransform),
    /// Scene root with a transition policy for the scene stack.
    Scene(Transition),
}

impl NodeKind {
    /// Short label used in diagnostics.
    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            Self::Group => "group",
            Self::Filter(_) => "filter",
            Self::Zoom(_) => "zoom",
            Self::Scene(_) => "scene",
        }
    }

    /// Whether this is a filter node.
    #[must_use]
    pub fn is_filter(&self) -> bool {
        matches!(self, Self::Filter(_))
    }

    /// Transition policy of a scene node.
    #[must_use]
    pub fn transition(&self) -> Option<&Transition> {
        match self {
            Self::Scene(t) => Some(t),
            _ => None,
        }
    }
}

/// Information handed to [`NodeBehavior::draw`].
#[derive(Clone, Copy, Debug)]
pub struct DrawInfo<'a> {
    /// Node being drawn.
    pub id: NodeId,
    /// Its diagnostic name.
    pub name: &'a str,
    /// Whether the node's rendered output went stale since it last drew
    /// (its own pose or an ancestor's changed). Leaf caches of transformed
    /// geometry should be rebuilt when this is set.
    pub render_stale: bool,
}

/// Mutable view of a node's state handed to behavior hooks.
///
/// Pose changes made through this handle ripple dirtiness through the node's
/// subtree once the hook returns.
pub struct NodeMut<'a> {
    pub(crate) id: NodeId,
    pub(crate) pose: &'a mut Pose,
    pub(crate) visible: &'a mut bool,
    pub(crate) transition: Option<&'a mut Transition>,
}

impl fmt::Debug for NodeMut<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NodeMut")
            .field("id", &self.id)
            .field("pose", &self.pose)
            .field("visible", &self.visible)
            .field("transition", &self.transition)
            .finish()
    }
}

impl NodeMut<'_> {
    /// Node the hook runs for.
    #[must_use]
    pub fn id(&self) -> NodeId {
        self.id
    }

    /// Current pose.
    #[must_use]
    pub fn pose(&self) -> Pose {
        *self.pose
    }

    /// Replaces the whole pose.
    pub fn set_pose(&mut self, pose: Pose) {
        *self.pose = pose;
    }

    /// Sets the position.
    pub fn set_position(&mut self, position: Point) {
        self.pose.position = position;
    }

    /// Sets the rotation in radians.
    pub fn set_rotation(&mut self, rotation: f64) {
        self.pose.rotation = rotation;
    }

    /// Sets the uniform scale.
    pub fn set_scale(&mut self, scale: f64) {
        self.pose.scale = scale;
    }

    /// Whether the node is drawn.
    #[must_use]
    pub fn visible(&self) -> bool {
        *self.visible
    }

    /// Shows or hides the node and its subtree.
    pub fn set_visible(&mut self, visible: bool) {
        *self.visible = visible;
    }

    /// Transition policy, for scene nodes.
    #[must_use]
    pub fn transition(&self) -> Option<Transition> {
        self.transition.as_deref().copied()
    }

    /// Asks the scene stack to act on this scene at the next visit.
    ///
    /// Returns `false` (and does nothing) when the node is not a scene.
    pub fn request_transition(
        &mut self,
        action: TransitionAction,
        replacement: Option<NodeId>,
    ) -> bool {
        match self.transition.as_deref_mut() {
            Some(t) => {
                t.request(action, replacement);
                true
            }
            None => false,
        }
    }
}

/// Capability implemented by concrete shapes, scenes and controllers.
///
/// Every hook has a no-op default, so a behavior only implements what it uses.
pub trait NodeBehavior: fmt::Debug {
    /// Blends time-based properties for the upcoming draw.
    ///
    /// `interpolation` is the fraction of a fixed update step elapsed since the
    /// last update, in `[0, 1)`.
    fn interpolate(&mut self, _interpolation: f64, _node: &mut NodeMut<'_>) {}

    /// Advances state by one fixed step of `dt` seconds.
    ///
    /// Only called when [`receives_updates`](Self::receives_updates) was true
    /// while the node entered the running scene (or the node was registered
    /// manually).
    fn update(&mut self, _dt: f64, _node: &mut NodeMut<'_>) {}

    /// Offers an input event. Returning `true` stops routing.
    fn handle(&mut self, _event: &InputEvent, _node: &mut NodeMut<'_>) -> bool {
        false
    }

    /// Issues draw calls. The context already carries this node's transform.
    fn draw(&mut self, _ctx: &mut dyn RenderContext, _info: &DrawInfo<'_>) {}

    /// Called when the node becomes part of the running scene.
    fn on_enter(&mut self, _id: NodeId) {}

    /// Called when the node leaves the running scene.
    fn on_exit(&mut self, _id: NodeId) {}

    /// Whether the node wants fixed-step [`update`](Self::update) calls.
    fn receives_updates(&self) -> bool {
        false
    }

    /// Whether the node wants input events.
    fn receives_events(&self) -> bool {
        false
    }
}

#[cfg(test)]
#[path = "../../tests/unit/scene/node.rs"]
mod tests;
