//! Conversions between device, view, world and node spaces.
//!
//! - *device*: pixels of the graphics surface;
//! - *view*: logical coordinates of the window, related to device space by
//!   [`World::view_transform`];
//! - *world*: the space of a tree root, which the root scene draws in;
//! - *node*: a node's local space.
//!
//! Node matrices are read through [`SceneTree::calc_transform`], so mapping a
//! freshly moved node recomputes (and caches) what the next draw would.
//! Filters are honored: where the upward walk steps from a filter node to its
//! parent, the parent contributes its filtered matrix rather than its full one,
//! matching what the draw traversal composes.

use crate::foundation::core::Point;
use crate::foundation::error::SceneResult;
use crate::foundation::ids::NodeId;
use crate::scene::tree::SceneTree;
use crate::space::world::World;
use crate::transform::affine::{AffineTransform, multiply_pre};

/// Maps a device point into view space.
///
/// # Errors
///
/// [`SingularMatrix`](crate::SceneError::SingularMatrix) when the view matrix
/// is not invertible.
pub fn device_to_view(world: &dyn World, p: Point) -> SceneResult<Point> {
    Ok(world.view_transform().invert_to()?.transform_point(p))
}

/// Maps a view point into device space.
#[must_use]
pub fn view_to_device(world: &dyn World, p: Point) -> Point {
    world.view_transform().transform_point(p)
}

/// Composite node-to-world matrix of `node`.
///
/// Accumulates the node's matrix and then each ancestor's, stopping at the root
/// or just below `pseudo_root`, in which case the result maps into the pseudo
/// root's local space. Mapping a node relative to itself yields identity.
///
/// # Errors
///
/// Dead handles, singular node matrices and orphaned filters on the path.
pub fn node_to_world(
    tree: &mut SceneTree,
    node: NodeId,
    pseudo_root: Option<NodeId>,
) -> SceneResult<AffineTransform> {
    if pseudo_root == Some(node) {
        return Ok(AffineTransform::IDENTITY);
    }
    let mut comp = tree.calc_transform(node)?;
    let mut cursor = node;
    while let Some(parent) = tree.parent(cursor)? {
        if pseudo_root == Some(parent) {
            break;
        }
        let step = if tree.kind(cursor)?.is_filter() {
            tree.filtered_parent_transform(cursor)?
        } else {
            tree.calc_transform(parent)?
        };
        multiply_pre(&step, &mut comp);
        cursor = parent;
    }
    Ok(comp)
}

/// Composite world-to-node matrix of `node`, the inverse of
/// [`node_to_world`].
///
/// # Errors
///
/// As [`node_to_world`], plus
/// [`SingularMatrix`](crate::SceneError::SingularMatrix) for a collapsed chain.
pub fn world_to_node(
    tree: &mut SceneTree,
    node: NodeId,
    pseudo_root: Option<NodeId>,
) -> SceneResult<AffineTransform> {
    node_to_world(tree, node, pseudo_root)?.invert_to()
}

/// Maps a device point into `node`'s local space.
///
/// The tree root is taken to draw in view space.
///
/// # Errors
///
/// As [`device_to_view`] and [`world_to_node`].
pub fn device_to_node(
    world: &dyn World,
    tree: &mut SceneTree,
    node: NodeId,
    p: Point,
) -> SceneResult<Point> {
    let view = device_to_view(world, p)?;
    Ok(world_to_node(tree, node, None)?.transform_point(view))
}

/// Maps a point in `node`'s local space to device space.
///
/// # Errors
///
/// As [`node_to_world`].
pub fn node_to_device(
    world: &dyn World,
    tree: &mut SceneTree,
    node: NodeId,
    p: Point,
) -> SceneResult<Point> {
    let view = node_to_world(tree, node, None)?.transform_point(p);
    Ok(view_to_device(world, view))
}

/// Maps `p` from `from`'s local space into `to`'s local space.
///
/// # Errors
///
/// As [`node_to_world`] and [`world_to_node`].
pub fn node_to_node(
    tree: &mut SceneTree,
    from: NodeId,
    to: NodeId,
    p: Point,
) -> SceneResult<Point> {
    let world = node_to_world(tree, from, None)?.transform_point(p);
    Ok(world_to_node(tree, to, None)?.transform_point(world))
}

/// Position of `from`'s origin in `to`'s local space.
///
/// # Errors
///
/// As [`node_to_node`].
pub fn node_origin_to_node(tree: &mut SceneTree, from: NodeId, to: NodeId) -> SceneResult<Point> {
    node_to_node(tree, from, to, Point::ORIGIN)
}

#[cfg(test)]
#[path = "../../tests/unit/space/mapping.rs"]
mod tests;
