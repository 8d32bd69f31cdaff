use proptest::prelude::*;
use vectorcut_core::Point2D;
use vectorcut_svg::{cubic_bezier_points, quadratic_bezier_points};

fn coord() -> impl Strategy<Value = f64> {
    -1000.0..1000.0f64
}

fn point() -> impl Strategy<Value = Point2D> {
    (coord(), coord()).prop_map(|(x, y)| Point2D::new(x, y))
}

fn close(a: Point2D, b: Point2D) -> bool {
    (a.x - b.x).abs() < 1e-9 && (a.y - b.y).abs() < 1e-9
}

proptest! {
    #[test]
    fn cubic_bezier_hits_both_endpoints(
        p0 in point(),
        p1 in point(),
        p2 in point(),
        p3 in point(),
        steps in 1usize..200,
    ) {
        let points = cubic_bezier_points(p0, p1, p2, p3, steps);
        prop_assert_eq!(points.len(), steps + 1);
        prop_assert!(close(points[0], p0));
        prop_assert!(close(points[steps], p3));
    }

    #[test]
    fn quadratic_bezier_hits_both_endpoints(
        p0 in point(),
        p1 in point(),
        p2 in point(),
        steps in 1usize..200,
    ) {
        let points = quadratic_bezier_points(p0, p1, p2, steps);
        prop_assert_eq!(points.len(), steps + 1);
        prop_assert!(close(points[0], p0));
        prop_assert!(close(points[steps], p2));
    }
}
