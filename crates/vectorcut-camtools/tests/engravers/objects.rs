use vectorcut_camtools::{GCodeGenerator, GCodeSettings};
use vectorcut_core::Point2D;
use vectorcut_svg::{DrawableObject, Flattening, Shape};

fn quiet() -> GCodeSettings {
    GCodeSettings {
        include_comments: false,
        decimal_places: 1,
        ..GCodeSettings::default()
    }
}

#[test]
fn test_objects_are_cut_at_their_position() {
    let star = DrawableObject::new(
        "star",
        Shape::Star {
            center: Point2D::ZERO,
            outer_radius: 10.0,
            inner_radius: 5.0,
            points: 5,
        },
    )
    .with_position(Point2D::new(20.0, 20.0));

    let gcode = GCodeGenerator::new(quiet()).generate(&vec![star]);

    // First tip sits at angle zero on the outer radius.
    assert!(gcode.contains("G0 X30.0 Y20.0\n"));
    // Ten vertices plus the closing repeat.
    assert_eq!(gcode.matches("G1 ").count(), 10);
    assert!(gcode.contains("G1 X30.0 Y20.0 F1000\n"));
}

#[test]
fn test_object_labels_in_comments() {
    let line = DrawableObject::new(
        "edge",
        Shape::Line {
            start: Point2D::ZERO,
            end: Point2D::new(4.0, 0.0),
        },
    )
    .with_position(Point2D::new(1.5, 2.0));

    let gcode = GCodeGenerator::new(GCodeSettings::default()).generate(&vec![line]);
    assert!(gcode.contains("; Contour 1: edge (Type: line) at X1.5 Y2"));
}

#[test]
fn test_flattening_controls_object_density() {
    let circle = DrawableObject::new(
        "hole",
        Shape::Circle {
            center: Point2D::ZERO,
            radius: 3.0,
        },
    );
    let coarse = Flattening {
        curve_steps: 10,
        ellipse_segments: 8,
    };

    let gcode = GCodeGenerator::new(quiet())
        .with_flattening(coarse)
        .generate(&vec![circle.clone()]);
    assert_eq!(gcode.matches("G1 ").count(), 8);

    let gcode = GCodeGenerator::new(quiet()).generate(&vec![circle]);
    assert_eq!(gcode.matches("G1 ").count(), 50);
}

#[test]
fn test_hidden_objects_between_visible_ones() {
    let shape = Shape::Line {
        start: Point2D::ZERO,
        end: Point2D::new(1.0, 0.0),
    };
    let objects = vec![
        DrawableObject::new("a", shape.clone()),
        DrawableObject::new("b", shape.clone()).with_visible(false),
        DrawableObject::new("c", shape),
    ];
    let gcode = GCodeGenerator::new(GCodeSettings::default()).generate(&objects);

    assert!(gcode.contains("; Contour 1: a "));
    assert!(gcode.contains("; Contour 2: c "));
    assert!(!gcode.contains(": b "));
}
