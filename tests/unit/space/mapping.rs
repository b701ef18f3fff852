use super::*;
use crate::foundation::core::Size;
use crate::scene::filter::{Filter, FilterPreset};
use crate::scene::node::{NodeKind, Pose};
use crate::space::world::Viewport;
use std::f64::consts::FRAC_PI_2;

fn close(p: Point, q: Point) -> bool {
    (p - q).hypot() < 1e-9
}

/// root(translate 100,50) -> mid(rotate 90deg, scale 2) -> leaf(translate 3,0)
fn three_levels(tree: &mut SceneTree) -> (NodeId, NodeId, NodeId) {
    let root = tree.create_group("root");
    let mid = tree.create_group("mid");
    let leaf = tree.create_group("leaf");
    tree.add_child(root, mid).unwrap();
    tree.add_child(mid, leaf).unwrap();
    tree.set_position(root, Point::new(100.0, 50.0)).unwrap();
    tree.set_pose(mid, Pose::default().with_rotation(FRAC_PI_2).with_scale(2.0))
        .unwrap();
    tree.set_position(leaf, Point::new(3.0, 0.0)).unwrap();
    (root, mid, leaf)
}

#[test]
fn node_to_world_composes_the_parent_chain() {
    let mut tree = SceneTree::new();
    let (_, _, leaf) = three_levels(&mut tree);
    let m = node_to_world(&mut tree, leaf, None).unwrap();
    // (1,0) -> leaf (4,0) -> mid: scale (8,0), rotate cw (0,8) -> root (100,58)
    assert!(close(m.transform_point(Point::new(1.0, 0.0)), Point::new(100.0, 58.0)));
}

#[test]
fn world_to_node_inverts_node_to_world() {
    let mut tree = SceneTree::new();
    let (_, mid, leaf) = three_levels(&mut tree);
    tree.set_rotation(leaf, 0.3).unwrap();
    for node in [mid, leaf] {
        let fwd = node_to_world(&mut tree, node, None).unwrap();
        let back = world_to_node(&mut tree, node, None).unwrap();
        assert!(fwd.then(&back).approx_eq(&AffineTransform::IDENTITY, 1e-9));
        assert!(back.then(&fwd).approx_eq(&AffineTransform::IDENTITY, 1e-9));
    }
}

#[test]
fn pseudo_root_is_excluded_from_the_walk() {
    let mut tree = SceneTree::new();
    let (root, mid, leaf) = three_levels(&mut tree);
    let m = node_to_world(&mut tree, leaf, Some(root)).unwrap();
    let expected = tree
        .calc_transform(leaf)
        .unwrap()
        .then(&tree.calc_transform(mid).unwrap());
    assert!(m.approx_eq(&expected, 1e-12));
    assert_eq!(
        node_to_world(&mut tree, mid, Some(mid)).unwrap(),
        AffineTransform::IDENTITY
    );
}

#[test]
fn node_to_node_round_trips_between_branches() {
    let mut tree = SceneTree::new();
    let (root, _, leaf) = three_levels(&mut tree);
    let other = tree.create_group("other");
    tree.add_child(root, other).unwrap();
    tree.set_pose(other, Pose::at(Point::new(-20.0, 7.0)).with_rotation(1.1))
        .unwrap();

    let p = Point::new(2.5, -4.0);
    let q = node_to_node(&mut tree, leaf, other, p).unwrap();
    let back = node_to_node(&mut tree, other, leaf, q).unwrap();
    assert!(close(back, p), "{back:?}");

    // Leaf's origin lands at world (100, 56), which is (0, 6) in root's frame.
    let origin = node_origin_to_node(&mut tree, leaf, root).unwrap();
    assert!(close(origin, Point::new(0.0, 6.0)), "{origin:?}");
}

#[test]
fn translation_only_filter_drops_parent_rotation_and_scale() {
    let mut tree = SceneTree::new();
    let parent = tree.create_group("parent");
    tree.set_pose(
        parent,
        Pose::at(Point::new(10.0, 20.0))
            .with_rotation(0.8)
            .with_scale(3.0),
    )
    .unwrap();
    let filter = tree.create_node(
        "filter",
        NodeKind::Filter(Filter::with_preset(
            crate::scene::filter::FilterKind::Transform,
            FilterPreset::InheritOnlyTranslation,
        )),
    );
    tree.add_child(parent, filter).unwrap();
    let child = tree.create_group("child");
    tree.add_child(filter, child).unwrap();
    tree.set_position(child, Point::new(1.0, 2.0)).unwrap();

    let world = node_to_world(&mut tree, child, None)
        .unwrap()
        .transform_point(Point::new(5.0, 0.0));
    assert!(close(world, Point::new(16.0, 22.0)), "{world:?}");

    let local = world_to_node(&mut tree, child, None)
        .unwrap()
        .transform_point(world);
    assert!(close(local, Point::new(5.0, 0.0)));
}

#[test]
fn device_round_trip_through_a_letterboxed_view() {
    let mut tree = SceneTree::new();
    let (_, _, leaf) = three_levels(&mut tree);
    let view = Viewport::fit(400.0, 300.0, Size::new(1200.0, 600.0)).unwrap();

    assert_eq!(
        device_to_view(&view, Point::new(200.0, 0.0)).unwrap(),
        Point::ORIGIN
    );
    assert_eq!(view_to_device(&view, Point::ORIGIN), Point::new(200.0, 0.0));

    let p = Point::new(0.5, 0.25);
    let device = node_to_device(&view, &mut tree, leaf, p).unwrap();
    let local = device_to_node(&view, &mut tree, leaf, device).unwrap();
    assert!(close(local, p), "{local:?}");
}

#[test]
fn singular_chain_is_an_error() {
    let mut tree = SceneTree::new();
    let (_, mid, leaf) = three_levels(&mut tree);
    tree.set_scale(mid, 0.0).unwrap();
    assert!(node_to_world(&mut tree, leaf, None).is_err());
}
