use super::*;
use std::f64::consts::FRAC_PI_4;

#[test]
fn rotate_matches_affine_rotation() {
    let v = rotate_vec2(Vec2::new(1.0, 0.0), FRAC_PI_4);
    let w = crate::AffineTransform::rotation(FRAC_PI_4).transform_vector(Vec2::new(1.0, 0.0));
    assert!((v.x - 0.707_106_781).abs() < 1e-6);
    assert!((v.y - 0.707_106_781).abs() < 1e-6);
    assert!((v - w).hypot() < 1e-15);
}

#[test]
fn lerp_clamps_parameter() {
    let a = Vec2::new(0.0, 0.0);
    let b = Vec2::new(10.0, -10.0);
    assert_eq!(lerp_vec2(a, b, 0.5), Vec2::new(5.0, -5.0));
    assert_eq!(lerp_vec2(a, b, 2.0), b);
    assert_eq!(lerp_point(Point::ORIGIN, Point::new(4.0, 4.0), -1.0), Point::ORIGIN);
    assert_eq!(lerp(1.0, 3.0, 0.25), 1.5);
}

#[test]
fn normalize_rejects_zero() {
    assert!(normalize(Vec2::ZERO).is_none());
    let n = normalize(Vec2::new(3.0, 4.0)).unwrap();
    assert!((n.hypot() - 1.0).abs() < 1e-12);
}
