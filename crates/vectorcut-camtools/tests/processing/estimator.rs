use vectorcut_camtools::{
    estimate_breakdown, estimate_execution_time, GCodeGenerator, GCodeSettings,
};
use vectorcut_core::Point2D;

#[test]
fn test_square_estimate() {
    let settings = GCodeSettings {
        cut_feed_rate: 600.0,
        rapid_feed_rate: 6000.0,
        ..GCodeSettings::default()
    };
    let square = vec![
        Point2D::new(10.0, 0.0),
        Point2D::new(20.0, 0.0),
        Point2D::new(20.0, 10.0),
        Point2D::new(10.0, 10.0),
        Point2D::new(10.0, 0.0),
    ];
    let gcode = GCodeGenerator::new(settings.clone()).generate(&square);
    let estimate = estimate_breakdown(&gcode, &settings);

    // Out to the start and back home from the last point.
    assert!((estimate.rapid_distance - 20.0).abs() < 1e-9);
    assert!((estimate.cut_distance - 40.0).abs() < 1e-9);
    assert!((estimate.rapid_seconds - 0.2).abs() < 1e-9);
    assert!((estimate.cut_seconds - 4.0).abs() < 1e-9);
    assert!((estimate_execution_time(&gcode, &settings) - 4.2).abs() < 1e-9);
}

#[test]
fn test_estimate_follows_scaled_output() {
    let settings = GCodeSettings {
        scale_factor: 3.0,
        ..GCodeSettings::default()
    };
    let line = vec![Point2D::new(0.0, 0.0), Point2D::new(10.0, 0.0)];
    let gcode = GCodeGenerator::new(settings.clone()).generate(&line);
    let estimate = estimate_breakdown(&gcode, &settings);
    assert!((estimate.cut_distance - 30.0).abs() < 1e-9);
}

#[test]
fn test_program_without_motion() {
    let settings = GCodeSettings::default();
    assert_eq!(estimate_execution_time("G21\nG90\nM30\n", &settings), 0.0);
    assert_eq!(estimate_execution_time("", &settings), 0.0);
}

#[test]
fn test_lowercase_words_and_missing_axes() {
    let settings = GCodeSettings::default();
    let estimate = estimate_breakdown("g0 x3\ng0 y4\ng1 x0 y0", &settings);
    assert!((estimate.rapid_distance - 7.0).abs() < 1e-9);
    assert!((estimate.cut_distance - 5.0).abs() < 1e-9);
}
