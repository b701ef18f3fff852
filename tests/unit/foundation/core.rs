use super::*;

#[test]
fn approx_eq_respects_tolerance() {
    assert!(approx_eq(1.0, 1.0 + 1e-12, EPSILON));
    assert!(!approx_eq(1.0, 1.001, EPSILON));
    assert!(approx_eq(-0.0, 0.0, 0.0));
}
