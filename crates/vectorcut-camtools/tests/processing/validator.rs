use proptest::prelude::*;
use vectorcut_camtools::{GCodeGenerator, GCodeSettings, GCodeValidator, ValidationError};
use vectorcut_core::Point2D;
use vectorcut_svg::{SvgElementData, SvgStyle};

#[test]
fn test_valid_line() {
    let validator = GCodeValidator::default();
    assert!(validator.validate("G0 X10 Y20 Z0"));
    assert!(validator.check("  m30  ").is_ok());
}

#[test]
fn test_comment_only_program_is_valid() {
    let validator = GCodeValidator::default();
    assert!(validator.validate("; header\n(note)\n"));
}

#[test]
fn test_unknown_word_is_invalid() {
    let validator = GCodeValidator::default();
    let err = validator.check("G21\nG90\nT2\n").unwrap_err();
    assert_eq!(
        err,
        ValidationError::InvalidLine {
            line_number: 3,
            line: "T2".to_string()
        }
    );
    assert_eq!(err.to_string(), "Invalid G-Code at line 3: T2");
}

#[test]
fn test_blank_program_is_invalid() {
    let validator = GCodeValidator::default();
    assert!(!validator.validate(""));
    assert!(!validator.validate("\n\n"));
}

fn element() -> impl Strategy<Value = SvgElementData> {
    prop::collection::vec((-500.0..500.0f64, -500.0..500.0f64), 0..12).prop_map(|coords| {
        SvgElementData {
            points: coords
                .into_iter()
                .map(|(x, y)| Point2D::new(x, y))
                .collect(),
            style: SvgStyle::default(),
            element_type: "path".to_string(),
        }
    })
}

fn any_settings() -> impl Strategy<Value = GCodeSettings> {
    (
        (any::<f64>(), any::<f64>(), any::<u32>()),
        (any::<f64>(), any::<f64>()),
        (any::<bool>(), any::<bool>()),
        (any::<f64>(), any::<f64>(), any::<f64>()),
        prop_oneof![0usize..12, any::<usize>()],
    )
        .prop_map(
            |(
                (cut_feed_rate, rapid_feed_rate, laser_power),
                (safe_height, work_height),
                (use_laser_mode, include_comments),
                (scale_factor, x_offset, y_offset),
                decimal_places,
            )| GCodeSettings {
                cut_feed_rate,
                rapid_feed_rate,
                laser_power,
                safe_height,
                work_height,
                use_laser_mode,
                include_comments,
                scale_factor,
                x_offset,
                y_offset,
                decimal_places,
            },
        )
}

proptest! {
    #[test]
    fn generated_programs_always_validate(
        elements in prop::collection::vec(element(), 0..6),
        settings in any_settings(),
    ) {
        let gcode = GCodeGenerator::new(settings).generate(&elements);
        prop_assert!(GCodeValidator::new().validate(&gcode));
    }

    #[test]
    fn one_cut_per_point_after_the_first(
        elements in prop::collection::vec(element(), 0..6),
    ) {
        let gcode = GCodeGenerator::new(GCodeSettings::default()).generate(&elements);
        let expected: usize = elements
            .iter()
            .map(|e| e.points.len().saturating_sub(1))
            .sum();
        prop_assert_eq!(gcode.matches("\nG1 ").count(), expected);
    }
}
