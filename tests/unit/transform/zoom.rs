use super::*;

#[test]
fn repeated_absolute_scale_does_not_compound() {
    let mut z = ZoomTransform::new();
    z.set_scale(2.0);
    z.set_scale(2.0);
    z.update();
    assert!((z.zoom_level() - 2.0).abs() < 1e-12);
    assert!((z.transform().a - 2.0).abs() < 1e-12);
    assert!((z.transform().d - 2.0).abs() < 1e-12);
}

#[test]
fn update_consumes_pending_delta() {
    let mut z = ZoomTransform::new();
    z.scale_by(3.0);
    assert_eq!(z.pending_scale(), Vec2::new(3.0, 3.0));
    z.update();
    assert_eq!(z.pending_scale(), Vec2::new(1.0, 1.0));
    z.update();
    assert!((z.zoom_level() - 3.0).abs() < 1e-12);
}

#[test]
fn zoom_keeps_focal_point_fixed() {
    let mut z = ZoomTransform::new();
    let focus = Point::new(100.0, 50.0);
    z.set_zoom_at(focus);
    z.set_scale(4.0);
    z.update();
    let mapped = z.map_point(focus);
    assert!((mapped - focus).hypot() < 1e-9, "{mapped:?}");

    let other = z.map_point(Point::new(110.0, 50.0));
    assert!((other.x - 140.0).abs() < 1e-9);
}

#[test]
fn pan_is_measured_in_content_units() {
    let mut z = ZoomTransform::new();
    z.set_scale(2.0);
    z.set_position(Vec2::new(5.0, -5.0));
    z.update();
    let p = z.map_point(Point::new(1.0, 1.0));
    assert!((p - Point::new(12.0, -8.0)).hypot() < 1e-12, "{p:?}");

    let back = z.unmap_point(p).unwrap();
    assert!((back - Point::new(1.0, 1.0)).hypot() < 1e-12);
}

#[test]
fn set_scale_from_zoomed_state_is_absolute() {
    let mut z = ZoomTransform::new();
    z.set_scale(4.0);
    z.update();
    z.set_scale(0.5);
    z.update();
    assert!((z.zoom_level() - 0.5).abs() < 1e-12);
}

#[test]
fn reset_keeps_focal_point() {
    let mut z = ZoomTransform::new();
    z.set_zoom_at(Point::new(1.0, 2.0));
    z.set_scale(3.0);
    z.pan_by(Vec2::new(1.0, 1.0));
    z.update();
    z.reset();
    assert_eq!(z.transform(), &AffineTransform::IDENTITY);
    assert_eq!(z.zoom_at(), Point::new(1.0, 2.0));
    assert_eq!(z.position(), Vec2::ZERO);
}
