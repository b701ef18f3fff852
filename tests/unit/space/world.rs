use super::*;
use crate::foundation::core::Point;

#[test]
fn plain_viewport_is_identity() {
    let v = Viewport::new(640.0, 480.0).unwrap();
    assert_eq!(v.view_size(), Size::new(640.0, 480.0));
    assert_eq!(v.view_transform(), AffineTransform::IDENTITY);
}

#[test]
fn fit_letterboxes_along_the_slack_axis() {
    // 4:3 content in a 16:9 surface: pillarboxed, scaled by 2.
    let v = Viewport::fit(400.0, 300.0, Size::new(1200.0, 600.0)).unwrap();
    let m = v.view_transform();
    assert_eq!(m.transform_point(Point::ORIGIN), Point::new(200.0, 0.0));
    assert_eq!(
        m.transform_point(Point::new(400.0, 300.0)),
        Point::new(1000.0, 600.0)
    );
}

#[test]
fn rejects_degenerate_sizes() {
    assert!(matches!(
        Viewport::new(0.0, 10.0),
        Err(SceneError::Validation(_))
    ));
    assert!(Viewport::new(f64::NAN, 10.0).is_err());
    assert!(Viewport::fit(10.0, 10.0, Size::new(-1.0, 5.0)).is_err());
}
