use proptest::prelude::*;
use vectorcut_core::Point2D;
use vectorcut_svg::Transform;

proptest! {
    #[test]
    fn translate_only_shifts_points(
        x in -1e4..1e4f64,
        y in -1e4..1e4f64,
        tx in -1e4..1e4f64,
        ty in -1e4..1e4f64,
    ) {
        let t = Transform::parse(&format!("translate({}, {})", tx, ty));
        let moved = t.apply(Point2D::new(x, y));
        prop_assert!((moved.x - (x + tx)).abs() < 1e-6);
        prop_assert!((moved.y - (y + ty)).abs() < 1e-6);
    }

    #[test]
    fn rotation_preserves_distance_to_center(
        x in -100.0..100.0f64,
        y in -100.0..100.0f64,
        angle in -360.0..360.0f64,
    ) {
        let center = Point2D::new(3.0, -4.0);
        let t = Transform::rotate(angle, center);
        let before = Point2D::new(x, y).distance_to(&center);
        let after = t.apply(Point2D::new(x, y)).distance_to(&center);
        prop_assert!((before - after).abs() < 1e-9);
    }
}
