use super::*;
use std::f64::consts::FRAC_PI_2;

#[test]
fn default_pose_is_identity() {
    assert_eq!(Pose::default().to_affine(), AffineTransform::IDENTITY);
}

#[test]
fn pose_matrix_is_translate_rotate_scale() {
    let pose = Pose::at(Point::new(10.0, 5.0))
        .with_rotation(FRAC_PI_2)
        .with_scale(2.0);
    let m = pose.to_affine();

    let mut expected = AffineTransform::IDENTITY;
    expected.translate(10.0, 5.0);
    expected.rotate(FRAC_PI_2);
    expected.scale(2.0, 2.0);
    assert_eq!(m, expected);

    // (1, 0) -> scaled (2, 0) -> rotated (0, 2) -> translated (10, 7).
    let p = m.transform_point(Point::new(1.0, 0.0));
    assert!((p - Point::new(10.0, 7.0)).hypot() < 1e-9, "{p:?}");
}

#[test]
fn pure_translation_skips_rotation_and_scale() {
    let m = Pose::at(Point::new(-3.0, 4.0)).to_affine();
    assert_eq!(m, AffineTransform::translation(-3.0, 4.0));
}

#[test]
fn pose_lerp_blends_every_component() {
    let a = Pose::default();
    let b = Pose::at(Point::new(10.0, 0.0))
        .with_rotation(1.0)
        .with_scale(3.0);
    let mid = a.lerp(&b, 0.5);
    assert_eq!(mid.position, Point::new(5.0, 0.0));
    assert_eq!(mid.rotation, 0.5);
    assert_eq!(mid.scale, 2.0);
}

#[test]
fn node_mut_requests_transition_only_on_scenes() {
    let mut pose = Pose::default();
    let mut visible = true;
    let mut transition = Transition::default();

    let mut scene = NodeMut {
        id: NodeId::from_raw(1),
        pose: &mut pose,
        visible: &mut visible,
        transition: Some(&mut transition),
    };
    assert!(scene.request_transition(TransitionAction::ReplaceAndTake, None));
    assert_eq!(
        scene.transition().map(|t| t.action),
        Some(TransitionAction::ReplaceAndTake)
    );

    let mut pose = Pose::default();
    let mut visible = true;
    let mut group = NodeMut {
        id: NodeId::from_raw(2),
        pose: &mut pose,
        visible: &mut visible,
        transition: None,
    };
    assert!(!group.request_transition(TransitionAction::Replace, None));
    group.set_visible(false);
    assert!(!group.visible());
}

#[test]
fn kind_labels() {
    assert_eq!(NodeKind::default().label(), "group");
    assert!(NodeKind::Filter(Filter::transform_filter()).is_filter());
    assert!(NodeKind::Scene(Transition::default()).transition().is_some());
    assert!(NodeKind::Zoom(ZoomTransform::new()).transition().is_none());
}
