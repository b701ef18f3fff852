use super::*;
use crate::render::recording::RecordingContext;
use crate::scene::filter::FilterPreset;
use std::f64::consts::FRAC_PI_2;

#[derive(Debug, Default)]
struct Spinner {
    draws: usize,
    saw_stale: Vec<bool>,
}

impl NodeBehavior for Spinner {
    fn update(&mut self, dt: f64, node: &mut NodeMut<'_>) {
        let r = node.pose().rotation;
        node.set_rotation(r + dt);
    }

    fn draw(&mut self, _ctx: &mut dyn RenderContext, info: &DrawInfo<'_>) {
        self.draws += 1;
        self.saw_stale.push(info.render_stale);
    }

    fn receives_updates(&self) -> bool {
        true
    }
}

fn chain(tree: &mut SceneTree) -> (NodeId, NodeId, NodeId) {
    let a = tree.create_group("a");
    let b = tree.create_group("b");
    let c = tree.create_group("c");
    tree.add_child(a, b).unwrap();
    tree.add_child(b, c).unwrap();
    (a, b, c)
}

#[test]
fn create_and_destroy_subtree() {
    let mut tree = SceneTree::new();
    let (a, b, c) = chain(&mut tree);
    let d = tree.create_group("d");
    tree.add_child(a, d).unwrap();
    assert_eq!(tree.len(), 4);
    assert_eq!(tree.children(a).unwrap(), &[b, d]);

    assert_eq!(tree.destroy(b).unwrap(), 2);
    assert!(!tree.contains(b));
    assert!(!tree.contains(c));
    assert_eq!(tree.children(a).unwrap(), &[d]);
    assert_eq!(tree.len(), 2);

    // Ids are never reused.
    let e = tree.create_group("e");
    assert_ne!(e, b);
    assert_ne!(e, c);
    assert!(matches!(tree.name(b), Err(SceneError::UnknownNode(id)) if id == b));
}

#[test]
fn add_child_rejects_second_parent_and_cycles() {
    let mut tree = SceneTree::new();
    let (a, b, c) = chain(&mut tree);
    let other = tree.create_group("other");

    let err = tree.add_child(other, c).unwrap_err();
    assert!(matches!(err, SceneError::AlreadyParented { child, parent } if child == c && parent == b));

    let err = tree.add_child(c, a).unwrap_err();
    assert!(matches!(err, SceneError::WouldCycle { .. }));
    let err = tree.add_child(a, a).unwrap_err();
    assert!(matches!(err, SceneError::WouldCycle { .. }));

    tree.detach(c).unwrap();
    assert_eq!(tree.parent(c).unwrap(), None);
    tree.add_child(other, c).unwrap();
    assert_eq!(tree.parent(c).unwrap(), Some(other));
    assert_eq!(tree.depth(c).unwrap(), 1);
}

#[test]
fn ripple_marks_whole_subtree() {
    let mut tree = SceneTree::new();
    let (a, b, c) = chain(&mut tree);
    for n in [a, b, c] {
        tree.calc_transform(n).unwrap();
        assert!(!tree.is_dirty(n).unwrap());
    }

    tree.set_position(b, Point::new(3.0, 4.0)).unwrap();
    assert!(!tree.is_dirty(a).unwrap());
    assert!(tree.is_dirty(b).unwrap());
    assert!(tree.is_dirty(c).unwrap());
    assert!(tree.is_render_stale(c).unwrap());

    let m = tree.calc_transform(b).unwrap();
    assert_eq!(m, AffineTransform::translation(3.0, 4.0));
    assert!(!tree.is_dirty(b).unwrap());
    assert!(tree.is_dirty(c).unwrap());
}

#[test]
fn clean_nodes_are_not_recomputed() {
    let mut tree = SceneTree::new();
    let a = tree.create_group("a");
    tree.calc_transform(a).unwrap();
    tree.calc_transform(a).unwrap();
    assert_eq!(tree.stats().transforms_recomputed, 1);
}

#[test]
fn zero_scale_is_a_singular_transform() {
    let mut tree = SceneTree::new();
    let a = tree.create_group("flat");
    tree.set_scale(a, 0.0).unwrap();
    let err = tree.calc_transform(a).unwrap_err();
    assert!(matches!(err, SceneError::SingularTransform { id, ref name } if id == a && name == "flat"));
    assert!(tree.is_dirty(a).unwrap());
}

#[test]
fn inverse_undoes_local_matrix() {
    let mut tree = SceneTree::new();
    let a = tree.create_group("a");
    tree.set_pose(
        a,
        Pose::at(Point::new(5.0, -2.0))
            .with_rotation(0.7)
            .with_scale(1.5),
    )
    .unwrap();
    let m = tree.calc_transform(a).unwrap();
    let inv = tree.inverse_transform(a).unwrap();
    assert!(m.then(&inv).approx_eq(&AffineTransform::IDENTITY, 1e-12));
}

#[test]
fn zoom_node_folds_zoom_before_pose() {
    let mut tree = SceneTree::new();
    let z = tree.create_node("zoom", NodeKind::Zoom(ZoomTransform::new()));
    tree.set_position(z, Point::new(100.0, 0.0)).unwrap();
    tree.calc_transform(z).unwrap();

    tree.with_zoom(z, |zoom| zoom.set_scale(2.0)).unwrap();
    assert!(tree.is_dirty(z).unwrap());
    let m = tree.calc_transform(z).unwrap();
    let p = m.transform_point(Point::new(1.0, 1.0));
    assert!((p - Point::new(102.0, 2.0)).hypot() < 1e-9, "{p:?}");

    let err = tree.with_filter(z, |_| ()).unwrap_err();
    assert!(matches!(err, SceneError::Validation(_)));
}

#[test]
fn orphan_filter_is_reported() {
    let mut tree = SceneTree::new();
    let f = tree.create_node("f", NodeKind::Filter(Filter::translate_filter()));
    let err = tree.filtered_parent_transform(f).unwrap_err();
    assert!(matches!(err, SceneError::OrphanFilter { id, .. } if id == f));

    let mut ctx = RecordingContext::new();
    let err = tree.visit(f, &mut ctx, 0.0).unwrap_err();
    assert!(matches!(err, SceneError::OrphanFilter { .. }));
    assert_eq!(ctx.depth(), 0);
}

#[test]
fn filter_visit_keeps_only_admitted_components() {
    let mut tree = SceneTree::new();
    let parent = tree.create_group("parent");
    tree.set_pose(
        parent,
        Pose::at(Point::new(10.0, 0.0))
            .with_rotation(FRAC_PI_2)
            .with_scale(2.0),
    )
    .unwrap();
    let f = tree.create_node("f", NodeKind::Filter(Filter::translate_filter()));
    tree.add_child(parent, f).unwrap();
    let leaf = tree.create_with_behavior("leaf", NodeKind::Group, Spinner::default());
    tree.add_child(f, leaf).unwrap();

    #[derive(Debug)]
    struct Probe(std::rc::Rc<std::cell::Cell<Option<AffineTransform>>>);
    impl NodeBehavior for Probe {
        fn draw(&mut self, ctx: &mut dyn RenderContext, _info: &DrawInfo<'_>) {
            self.0.set(Some(ctx.transform()));
        }
    }
    let seen = std::rc::Rc::new(std::cell::Cell::new(None));
    tree.set_behavior(leaf, Probe(seen.clone())).unwrap();

    let mut ctx = RecordingContext::new();
    tree.visit(parent, &mut ctx, 0.0).unwrap();
    let m = seen.get().unwrap();
    assert!(m.approx_eq(&AffineTransform::translation(10.0, 0.0), 1e-9), "{m:?}");
    assert_eq!(ctx.depth(), 0);

    tree.with_filter(f, |filter| filter.set_preset(FilterPreset::InheritAll))
        .unwrap();
    tree.visit(parent, &mut ctx, 0.0).unwrap();
    let full = tree.calc_transform(parent).unwrap();
    assert!(seen.get().unwrap().approx_eq(&full, 1e-9));
}

#[test]
fn invisible_subtree_is_skipped() {
    let mut tree = SceneTree::new();
    let root = tree.create_group("root");
    let hidden = tree.create_with_behavior("hidden", NodeKind::Group, Spinner::default());
    let shown = tree.create_with_behavior("shown", NodeKind::Group, Spinner::default());
    tree.add_child(root, hidden).unwrap();
    tree.add_child(root, shown).unwrap();
    tree.set_visible(hidden, false).unwrap();

    let mut ctx = RecordingContext::new();
    tree.visit(root, &mut ctx, 0.0).unwrap();
    let stats = tree.stats();
    assert_eq!(stats.nodes_visited, 2);
    assert_eq!(stats.nodes_drawn, 1);
    assert_eq!(stats.skipped_invisible, 1);
    // The hidden node's matrix was never rebuilt.
    assert!(tree.is_dirty(hidden).unwrap());
    assert_eq!(ctx.max_depth(), 2);
    assert_eq!(ctx.unbalanced_restores(), 0);
}

#[test]
fn draw_clears_render_stale() {
    let mut tree = SceneTree::new();
    let n = tree.create_with_behavior("n", NodeKind::Group, Spinner::default());
    let mut ctx = RecordingContext::new();
    tree.visit(n, &mut ctx, 0.0).unwrap();
    assert!(!tree.is_render_stale(n).unwrap());
    tree.set_rotation(n, 0.3).unwrap();
    assert!(tree.is_render_stale(n).unwrap());
    tree.visit(n, &mut ctx, 0.0).unwrap();
    assert!(!tree.is_render_stale(n).unwrap());
}

#[test]
fn update_through_behavior_ripples_pose() {
    let mut tree = SceneTree::new();
    let (a, b, c) = chain(&mut tree);
    tree.set_behavior(b, Spinner::default()).unwrap();
    for n in [a, b, c] {
        tree.calc_transform(n).unwrap();
    }
    tree.update_node(b, 0.5).unwrap();
    assert_eq!(tree.pose(b).unwrap().rotation, 0.5);
    assert!(tree.is_dirty(b).unwrap());
    assert!(tree.is_dirty(c).unwrap());
    assert!(!tree.is_dirty(a).unwrap());
    assert_eq!(tree.stats().updates, 1);

    // No behavior: nothing happens and nothing is counted.
    tree.update_node(a, 0.5).unwrap();
    assert_eq!(tree.stats().updates, 1);
    assert!(!tree.handle_node(a, &InputEvent::KeyDown { key: "x".into() }).unwrap());
}

#[test]
fn notify_subtree_reports_interest_in_preorder() {
    let mut tree = SceneTree::new();
    let root = tree.create_scene("scene", Transition::default());
    let spinner = tree.create_with_behavior("spin", NodeKind::Group, Spinner::default());
    let plain = tree.create_group("plain");
    tree.add_child(root, plain).unwrap();
    tree.add_child(plain, spinner).unwrap();

    let seen = tree.notify_subtree(root, Lifecycle::Enter).unwrap();
    assert_eq!(
        seen,
        vec![(
            spinner,
            Interest {
                updates: true,
                events: false
            }
        )]
    );
    assert_eq!(tree.preorder(root).unwrap(), vec![root, plain, spinner]);
}

#[test]
fn transition_only_on_scenes() {
    let mut tree = SceneTree::new();
    let s = tree.create_scene("s", Transition::default());
    let g = tree.create_group("g");
    tree.set_transition(s, Transition::replace_and_take(Some(g)))
        .unwrap();
    assert_eq!(
        tree.transition(s).unwrap().map(|t| t.replacement),
        Some(Some(g))
    );
    assert_eq!(tree.transition(g).unwrap(), None);
    assert!(tree.set_transition(g, Transition::default()).is_err());
}
