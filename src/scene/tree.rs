//! Arena-backed node tree.
//!
//! Nodes live in a slot vector indexed by [`NodeId`]. Children are owned by
//! their parent (destroying a node destroys its subtree); the parent link is a
//! plain id and never keeps anything alive.
//!
//! # Dirty tracking
//!
//! Each node carries two flags:
//!
//! - `dirty`: the cached local matrix and its inverse are stale.
//!   [`calc_transform`](SceneTree::calc_transform) clears it.
//! - `render_stale`: the node's rendered output is stale because its own pose
//!   or an ancestor's changed. Drawing clears it.
//!
//! Pose mutators [ripple](SceneTree::ripple_dirty) both flags through the whole
//! subtree.

use crate::foundation::core::Point;
use crate::foundation::error::{SceneError, SceneResult};
use crate::foundation::ids::{IdAllocator, NodeId};
use crate::render::context::RenderContext;
use crate::scene::event::InputEvent;
use crate::scene::filter::Filter;
use crate::scene::node::{DrawInfo, NodeBehavior, NodeKind, NodeMut, Pose};
use crate::scene::stats::FrameStats;
use crate::scene::transition::Transition;
use crate::transform::affine::{AffineTransform, multiply_post};
use crate::transform::zoom::ZoomTransform;

struct NodeData {
    name: String,
    visible: bool,
    dirty: bool,
    render_stale: bool,
    parent: Option<NodeId>,
    children: Vec<NodeId>,
    pose: Pose,
    affine: AffineTransform,
    inverse: AffineTransform,
    kind: NodeKind,
    behavior: Option<Box<dyn NodeBehavior>>,
}

impl std::fmt::Debug for NodeData {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NodeData")
            .field("name", &self.name)
            .field("kind", &self.kind.label())
            .field("visible", &self.visible)
            .field("dirty", &self.dirty)
            .field("parent", &self.parent)
            .field("children", &self.children)
            .field("pose", &self.pose)
            .field("behavior", &self.behavior)
            .finish_non_exhaustive()
    }
}

/// Lifecycle notification delivered to a whole subtree.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Lifecycle {
    Enter,
    Exit,
}

/// Registry interest a node declared while entering.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub(crate) struct Interest {
    pub(crate) updates: bool,
    pub(crate) events: bool,
}

/// Owner of every node.
#[derive(Debug, Default)]
pub struct SceneTree {
    nodes: Vec<Option<NodeData>>,
    ids: IdAllocator,
    live: usize,
    stats: FrameStats,
}

fn slot(nodes: &[Option<NodeData>], id: NodeId) -> SceneResult<&NodeData> {
    nodes
        .get(id.index())
        .and_then(Option::as_ref)
        .ok_or(SceneError::UnknownNode(id))
}

fn slot_mut(nodes: &mut [Option<NodeData>], id: NodeId) -> SceneResult<&mut NodeData> {
    nodes
        .get_mut(id.index())
        .and_then(Option::as_mut)
        .ok_or(SceneError::UnknownNode(id))
}

impl SceneTree {
    /// Creates an empty tree.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    // -- Allocation --

    /// Creates a detached node of `kind` and returns its id.
    ///
    /// The node starts visible and dirty, at the default pose, without a
    /// behavior.
    pub fn create_node(&mut self, name: impl Into<String>, kind: NodeKind) -> NodeId {
        let id = self.ids.allocate();
        let data = NodeData {
            name: name.into(),
            visible: true,
            dirty: true,
            render_stale: true,
            parent: None,
            children: Vec::new(),
            pose: Pose::default(),
            affine: AffineTransform::IDENTITY,
            inverse: AffineTransform::IDENTITY,
            kind,
            behavior: None,
        };
        debug_assert_eq!(id.index(), self.nodes.len());
        self.nodes.push(Some(data));
        self.live += 1;
        id
    }

    /// Creates a plain group node.
    pub fn create_group(&mut self, name: impl Into<String>) -> NodeId {
        self.create_node(name, NodeKind::Group)
    }

    /// Creates a scene root with the given transition policy.
    pub fn create_scene(&mut self, name: impl Into<String>, transition: Transition) -> NodeId {
        self.create_node(name, NodeKind::Scene(transition))
    }

    /// Creates a node of `kind` driven by `behavior`.
    pub fn create_with_behavior(
        &mut self,
        name: impl Into<String>,
        kind: NodeKind,
        behavior: impl NodeBehavior + 'static,
    ) -> NodeId {
        let id = self.create_node(name, kind);
        if let Some(Some(node)) = self.nodes.get_mut(id.index()) {
            node.behavior = Some(Box::new(behavior));
        }
        id
    }

    /// Installs (or replaces) the behavior of a node.
    ///
    /// # Errors
    ///
    /// [`SceneError::UnknownNode`] for a dead handle.
    pub fn set_behavior(
        &mut self,
        id: NodeId,
        behavior: impl NodeBehavior + 'static,
    ) -> SceneResult<()> {
        let node = slot_mut(&mut self.nodes, id)?;
        node.behavior = Some(Box::new(behavior));
        node.render_stale = true;
        Ok(())
    }

    /// Destroys `id` and its whole subtree, detaching it from its parent first.
    ///
    /// Returns the number of nodes removed.
    ///
    /// # Errors
    ///
    /// [`SceneError::UnknownNode`] for a dead handle.
    pub fn destroy(&mut self, id: NodeId) -> SceneResult<usize> {
        if slot(&self.nodes, id)?.parent.is_some() {
            self.detach(id)?;
        }
        let doomed = self.preorder(id)?;
        for n in &doomed {
            if let Some(entry) = self.nodes.get_mut(n.index()) {
                *entry = None;
            }
        }
        self.live -= doomed.len();
        tracing::debug!(node = %id, removed = doomed.len(), "destroyed subtree");
        Ok(doomed.len())
    }

    /// First live node named `name`, in creation order.
    #[must_use]
    pub fn find(&self, name: &str) -> Option<NodeId> {
        self.nodes
            .iter()
            .enumerate()
            .find_map(|(i, slot)| match slot {
                Some(node) if node.name == name => u32::try_from(i).ok().map(NodeId),
                _ => None,
            })
    }

    /// Whether `id` refers to a live node.
    #[must_use]
    pub fn contains(&self, id: NodeId) -> bool {
        slot(&self.nodes, id).is_ok()
    }

    /// Number of live nodes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.live
    }

    /// Whether the tree holds no live nodes.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.live == 0
    }

    // -- Topology --

    /// Appends `child` to `parent`'s children.
    ///
    /// The child's subtree is rippled dirty, since its ancestry changed.
    ///
    /// # Errors
    ///
    /// [`SceneError::AlreadyParented`] if `child` has a parent,
    /// [`SceneError::WouldCycle`] if `child` is `parent` or one of its
    /// ancestors, [`SceneError::UnknownNode`] for dead handles.
    pub fn add_child(&mut self, parent: NodeId, child: NodeId) -> SceneResult<()> {
        slot(&self.nodes, parent)?;
        if let Some(existing) = slot(&self.nodes, child)?.parent {
            return Err(SceneError::AlreadyParented {
                child,
                parent: existing,
            });
        }
        let mut cursor = Some(parent);
        while let Some(n) = cursor {
            if n == child {
                return Err(SceneError::WouldCycle { child, parent });
            }
            cursor = slot(&self.nodes, n)?.parent;
        }

        slot_mut(&mut self.nodes, parent)?.children.push(child);
        slot_mut(&mut self.nodes, child)?.parent = Some(parent);
        self.ripple_dirty(child)
    }

    /// Detaches `child` from its parent, leaving it as a live root.
    ///
    /// Does nothing for a node that has no parent.
    ///
    /// # Errors
    ///
    /// [`SceneError::UnknownNode`] for a dead handle.
    pub fn detach(&mut self, child: NodeId) -> SceneResult<()> {
        let Some(parent) = slot_mut(&mut self.nodes, child)?.parent.take() else {
            return Ok(());
        };
        slot_mut(&mut self.nodes, parent)?
            .children
            .retain(|&c| c != child);
        self.ripple_dirty(child)
    }

    /// Parent of `id`, if attached.
    ///
    /// # Errors
    ///
    /// [`SceneError::UnknownNode`] for a dead handle.
    pub fn parent(&self, id: NodeId) -> SceneResult<Option<NodeId>> {
        Ok(slot(&self.nodes, id)?.parent)
    }

    /// Children of `id` in draw order.
    ///
    /// # Errors
    ///
    /// [`SceneError::UnknownNode`] for a dead handle.
    pub fn children(&self, id: NodeId) -> SceneResult<&[NodeId]> {
        Ok(&slot(&self.nodes, id)?.children)
    }

    /// `id` followed by its descendants, parents before children, siblings
    /// in draw order.
    ///
    /// # Errors
    ///
    /// [`SceneError::UnknownNode`] for a dead handle.
    pub fn preorder(&self, id: NodeId) -> SceneResult<Vec<NodeId>> {
        let mut out = Vec::new();
        let mut stack = vec![id];
        while let Some(n) = stack.pop() {
            let node = slot(&self.nodes, n)?;
            out.push(n);
            stack.extend(node.children.iter().rev().copied());
        }
        Ok(out)
    }

    /// Number of ancestors above `id`.
    ///
    /// # Errors
    ///
    /// [`SceneError::UnknownNode`] for a dead handle.
    pub fn depth(&self, id: NodeId) -> SceneResult<usize> {
        let mut depth = 0;
        let mut cursor = slot(&self.nodes, id)?.parent;
        while let Some(n) = cursor {
            depth += 1;
            cursor = slot(&self.nodes, n)?.parent;
        }
        Ok(depth)
    }

    // -- Properties --

    /// Diagnostic name.
    ///
    /// # Errors
    ///
    /// [`SceneError::UnknownNode`] for a dead handle.
    pub fn name(&self, id: NodeId) -> SceneResult<&str> {
        Ok(&slot(&self.nodes, id)?.name)
    }

    /// Renames a node.
    ///
    /// # Errors
    ///
    /// [`SceneError::UnknownNode`] for a dead handle.
    pub fn set_name(&mut self, id: NodeId, name: impl Into<String>) -> SceneResult<()> {
        slot_mut(&mut self.nodes, id)?.name = name.into();
        Ok(())
    }

    /// Node kind.
    ///
    /// # Errors
    ///
    /// [`SceneError::UnknownNode`] for a dead handle.
    pub fn kind(&self, id: NodeId) -> SceneResult<&NodeKind> {
        Ok(&slot(&self.nodes, id)?.kind)
    }

    /// Whether the node (and so its subtree) is drawn.
    ///
    /// # Errors
    ///
    /// [`SceneError::UnknownNode`] for a dead handle.
    pub fn visible(&self, id: NodeId) -> SceneResult<bool> {
        Ok(slot(&self.nodes, id)?.visible)
    }

    /// Shows or hides a node and its subtree.
    ///
    /// # Errors
    ///
    /// [`SceneError::UnknownNode`] for a dead handle.
    pub fn set_visible(&mut self, id: NodeId, visible: bool) -> SceneResult<()> {
        slot_mut(&mut self.nodes, id)?.visible = visible;
        Ok(())
    }

    /// Local pose.
    ///
    /// # Errors
    ///
    /// [`SceneError::UnknownNode`] for a dead handle.
    pub fn pose(&self, id: NodeId) -> SceneResult<Pose> {
        Ok(slot(&self.nodes, id)?.pose)
    }

    /// Replaces the local pose and ripples dirtiness.
    ///
    /// # Errors
    ///
    /// [`SceneError::UnknownNode`] for a dead handle.
    pub fn set_pose(&mut self, id: NodeId, pose: Pose) -> SceneResult<()> {
        slot_mut(&mut self.nodes, id)?.pose = pose;
        self.ripple_dirty(id)
    }

    /// Sets the position and ripples dirtiness.
    ///
    /// # Errors
    ///
    /// [`SceneError::UnknownNode`] for a dead handle.
    pub fn set_position(&mut self, id: NodeId, position: Point) -> SceneResult<()> {
        slot_mut(&mut self.nodes, id)?.pose.position = position;
        self.ripple_dirty(id)
    }

    /// Sets the rotation (radians) and ripples dirtiness.
    ///
    /// # Errors
    ///
    /// [`SceneError::UnknownNode`] for a dead handle.
    pub fn set_rotation(&mut self, id: NodeId, rotation: f64) -> SceneResult<()> {
        slot_mut(&mut self.nodes, id)?.pose.rotation = rotation;
        self.ripple_dirty(id)
    }

    /// Sets the uniform scale and ripples dirtiness.
    ///
    /// # Errors
    ///
    /// [`SceneError::UnknownNode`] for a dead handle.
    pub fn set_scale(&mut self, id: NodeId, scale: f64) -> SceneResult<()> {
        slot_mut(&mut self.nodes, id)?.pose.scale = scale;
        self.ripple_dirty(id)
    }

    /// Transition policy of a scene node (`None` for other kinds).
    ///
    /// # Errors
    ///
    /// [`SceneError::UnknownNode`] for a dead handle.
    pub fn transition(&self, id: NodeId) -> SceneResult<Option<Transition>> {
        Ok(slot(&self.nodes, id)?.kind.transition().copied())
    }

    /// Overwrites the transition policy of a scene node.
    ///
    /// # Errors
    ///
    /// [`SceneError::Validation`] when `id` is not a scene,
    /// [`SceneError::UnknownNode`] for a dead handle.
    pub fn set_transition(&mut self, id: NodeId, transition: Transition) -> SceneResult<()> {
        match &mut slot_mut(&mut self.nodes, id)?.kind {
            NodeKind::Scene(t) => {
                *t = transition;
                Ok(())
            }
            other => Err(SceneError::validation(format!(
                "node {id} is a {}, not a scene",
                other.label()
            ))),
        }
    }

    /// Edits a filter node's policy, then ripples its subtree dirty.
    ///
    /// # Errors
    ///
    /// [`SceneError::Validation`] when `id` is not a filter,
    /// [`SceneError::UnknownNode`] for a dead handle.
    pub fn with_filter<R>(&mut self, id: NodeId, f: impl FnOnce(&mut Filter) -> R) -> SceneResult<R> {
        let out = match &mut slot_mut(&mut self.nodes, id)?.kind {
            NodeKind::Filter(filter) => f(filter),
            other => {
                return Err(SceneError::validation(format!(
                    "node {id} is a {}, not a filter",
                    other.label()
                )));
            }
        };
        self.ripple_dirty(id)?;
        Ok(out)
    }

    /// Edits a zoom node's transform, folds pending deltas with
    /// [`ZoomTransform::update`] and ripples its subtree dirty.
    ///
    /// # Errors
    ///
    /// [`SceneError::Validation`] when `id` is not a zoom node,
    /// [`SceneError::UnknownNode`] for a dead handle.
    pub fn with_zoom<R>(
        &mut self,
        id: NodeId,
        f: impl FnOnce(&mut ZoomTransform) -> R,
    ) -> SceneResult<R> {
        let out = match &mut slot_mut(&mut self.nodes, id)?.kind {
            NodeKind::Zoom(zoom) => {
                let out = f(zoom);
                zoom.update();
                out
            }
            other => {
                return Err(SceneError::validation(format!(
                    "node {id} is a {}, not a zoom controller",
                    other.label()
                )));
            }
        };
        self.ripple_dirty(id)?;
        Ok(out)
    }

    // -- Dirty tracking and matrices --

    /// Whether the cached local matrix is stale.
    ///
    /// # Errors
    ///
    /// [`SceneError::UnknownNode`] for a dead handle.
    pub fn is_dirty(&self, id: NodeId) -> SceneResult<bool> {
        Ok(slot(&self.nodes, id)?.dirty)
    }

    /// Whether the rendered output is stale.
    ///
    /// # Errors
    ///
    /// [`SceneError::UnknownNode`] for a dead handle.
    pub fn is_render_stale(&self, id: NodeId) -> SceneResult<bool> {
        Ok(slot(&self.nodes, id)?.render_stale)
    }

    /// Marks `id` and every descendant dirty and render-stale.
    ///
    /// # Errors
    ///
    /// [`SceneError::UnknownNode`] for a dead handle.
    pub fn ripple_dirty(&mut self, id: NodeId) -> SceneResult<()> {
        let mut stack = vec![id];
        while let Some(n) = stack.pop() {
            let node = slot_mut(&mut self.nodes, n)?;
            node.dirty = true;
            node.render_stale = true;
            stack.extend(node.children.iter().copied());
        }
        Ok(())
    }

    /// Local matrix of `id`, rebuilt only if the node is dirty.
    ///
    /// A rebuild translates, rotates (unless the angle is zero) and scales
    /// (unless the factor is one), folds in the zoom transform for zoom nodes,
    /// caches the inverse and clears `dirty`.
    ///
    /// # Errors
    ///
    /// [`SceneError::SingularTransform`] when the matrix cannot be inverted
    /// (the node stays dirty), [`SceneError::UnknownNode`] for a dead handle.
    pub fn calc_transform(&mut self, id: NodeId) -> SceneResult<AffineTransform> {
        let node = slot_mut(&mut self.nodes, id)?;
        if !node.dirty {
            return Ok(node.affine);
        }

        let mut m = node.pose.to_affine();
        if let NodeKind::Zoom(zoom) = &node.kind {
            multiply_post(zoom.transform(), &mut m);
        }
        let inverse = m
            .invert_to()
            .map_err(|_| SceneError::singular_transform(id, node.name.clone()))?;

        node.affine = m;
        node.inverse = inverse;
        node.dirty = false;
        self.stats.transforms_recomputed += 1;
        tracing::trace!(node = %id, ?m, "recomputed local transform");
        Ok(m)
    }

    /// Cached inverse of the local matrix (recomputed first if dirty).
    ///
    /// # Errors
    ///
    /// As [`calc_transform`](Self::calc_transform).
    pub fn inverse_transform(&mut self, id: NodeId) -> SceneResult<AffineTransform> {
        self.calc_transform(id)?;
        Ok(slot(&self.nodes, id)?.inverse)
    }

    /// Parent matrix rebuilt from the components filter `id` admits.
    ///
    /// # Errors
    ///
    /// [`SceneError::OrphanFilter`] when the filter has no parent,
    /// [`SceneError::Validation`] when `id` is not a filter,
    /// [`SceneError::UnknownNode`] for a dead handle.
    pub fn filtered_parent_transform(&mut self, id: NodeId) -> SceneResult<AffineTransform> {
        let node = slot(&self.nodes, id)?;
        let parent = node
            .parent
            .ok_or_else(|| SceneError::orphan_filter(id, node.name.clone()));
        let parent_pose = match parent {
            Ok(p) => Some(slot(&self.nodes, p)?.pose),
            Err(_) if !node.kind.is_filter() => None,
            Err(e) => return Err(e),
        };
        match (&mut slot_mut(&mut self.nodes, id)?.kind, parent_pose) {
            (NodeKind::Filter(filter), Some(pose)) => Ok(filter.filter_parent(&pose)),
            (other, _) => Err(SceneError::validation(format!(
                "node {id} is a {}, not a filter",
                other.label()
            ))),
        }
    }

    // -- Traversal --

    /// Draws `id` and its subtree into `ctx`.
    ///
    /// Invisible nodes are skipped without touching their matrices or
    /// descending. Visible nodes run, in order: behavior interpolation, filter
    /// reconstruction, [`calc_transform`](Self::calc_transform), `ctx.apply`,
    /// behavior draw, then each child. The context is saved on entry and
    /// restored on exit, including when a descendant fails.
    ///
    /// # Errors
    ///
    /// The first invariant violation met in the subtree; traversal stops there.
    pub fn visit(
        &mut self,
        id: NodeId,
        ctx: &mut dyn RenderContext,
        interpolation: f64,
    ) -> SceneResult<()> {
        if !slot(&self.nodes, id)?.visible {
            self.stats.skipped_invisible += 1;
            return Ok(());
        }
        ctx.save();
        let result = self.visit_visible(id, ctx, interpolation);
        ctx.restore();
        result
    }

    fn visit_visible(
        &mut self,
        id: NodeId,
        ctx: &mut dyn RenderContext,
        interpolation: f64,
    ) -> SceneResult<()> {
        self.stats.nodes_visited += 1;
        self.with_behavior(id, |behavior, node| {
            behavior.interpolate(interpolation, node);
        })?;

        if slot(&self.nodes, id)?.kind.is_filter() {
            let filtered = self.filtered_parent_transform(id)?;
            let parent = self.parent(id)?.ok_or(SceneError::UnknownNode(id))?;
            let parent_inverse = self.inverse_transform(parent)?;
            ctx.apply(&parent_inverse);
            ctx.apply(&filtered);
        }

        let m = self.calc_transform(id)?;
        ctx.apply(&m);
        self.draw_node(id, ctx)?;

        let mut i = 0;
        loop {
            let Some(child) = slot(&self.nodes, id)?.children.get(i).copied() else {
                return Ok(());
            };
            self.visit(child, ctx, interpolation)?;
            i += 1;
        }
    }

    fn draw_node(&mut self, id: NodeId, ctx: &mut dyn RenderContext) -> SceneResult<()> {
        let node = slot_mut(&mut self.nodes, id)?;
        if let Some(behavior) = node.behavior.as_deref_mut() {
            let info = DrawInfo {
                id,
                name: &node.name,
                render_stale: node.render_stale,
            };
            behavior.draw(ctx, &info);
            self.stats.nodes_drawn += 1;
        }
        node.render_stale = false;
        Ok(())
    }

    /// Runs one fixed-step update on `id`'s behavior.
    ///
    /// # Errors
    ///
    /// [`SceneError::UnknownNode`] for a dead handle.
    pub fn update_node(&mut self, id: NodeId, dt: f64) -> SceneResult<()> {
        if self
            .with_behavior(id, |behavior, node| behavior.update(dt, node))?
            .is_some()
        {
            self.stats.updates += 1;
        }
        Ok(())
    }

    /// Offers `event` to `id`'s behavior; `true` when it was handled.
    ///
    /// # Errors
    ///
    /// [`SceneError::UnknownNode`] for a dead handle.
    pub fn handle_node(&mut self, id: NodeId, event: &InputEvent) -> SceneResult<bool> {
        Ok(self
            .with_behavior(id, |behavior, node| behavior.handle(event, node))?
            .unwrap_or(false))
    }

    /// Delivers an enter or exit notification to `root` and its descendants,
    /// parents before children, and reports each node's registry interest.
    pub(crate) fn notify_subtree(
        &mut self,
        root: NodeId,
        lifecycle: Lifecycle,
    ) -> SceneResult<Vec<(NodeId, Interest)>> {
        let order = self.preorder(root)?;
        let mut out = Vec::with_capacity(order.len());
        for id in order {
            let node = slot_mut(&mut self.nodes, id)?;
            let Some(behavior) = node.behavior.as_deref_mut() else {
                continue;
            };
            match lifecycle {
                Lifecycle::Enter => behavior.on_enter(id),
                Lifecycle::Exit => behavior.on_exit(id),
            }
            out.push((
                id,
                Interest {
                    updates: behavior.receives_updates(),
                    events: behavior.receives_events(),
                },
            ));
        }
        Ok(out)
    }

    /// Runs `f` against `id`'s behavior with a mutable view of the node, then
    /// ripples if the pose changed. `Ok(None)` when the node has no behavior.
    fn with_behavior<R>(
        &mut self,
        id: NodeId,
        f: impl FnOnce(&mut dyn NodeBehavior, &mut NodeMut<'_>) -> R,
    ) -> SceneResult<Option<R>> {
        let node = slot_mut(&mut self.nodes, id)?;
        let before = node.pose;
        let NodeData {
            behavior,
            pose,
            visible,
            kind,
            ..
        } = &mut *node;
        let Some(behavior) = behavior.as_deref_mut() else {
            return Ok(None);
        };
        let transition = match kind {
            NodeKind::Scene(t) => Some(t),
            _ => None,
        };
        let mut handle = NodeMut {
            id,
            pose,
            visible,
            transition,
        };
        let out = f(behavior, &mut handle);
        if node.pose != before {
            self.ripple_dirty(id)?;
        }
        Ok(Some(out))
    }

    // -- Statistics --

    /// Counters accumulated since the last [`reset_stats`](Self::reset_stats).
    #[must_use]
    pub fn stats(&self) -> FrameStats {
        self.stats
    }

    /// Zeroes the counters.
    pub fn reset_stats(&mut self) {
        self.stats = FrameStats::default();
    }

    pub(crate) fn stats_mut(&mut self) -> &mut FrameStats {
        &mut self.stats
    }
}

#[cfg(test)]
#[path = "../../tests/unit/scene/tree.rs"]
mod tests;
