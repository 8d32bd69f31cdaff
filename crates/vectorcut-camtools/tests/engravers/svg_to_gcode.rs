use std::io::Write;
use vectorcut_camtools::{convert_svg_file, GCodeGenerator, GCodeSettings, GCodeValidator};
use vectorcut_svg::{Flattening, SvgParser};

fn settings(decimals: usize) -> GCodeSettings {
    GCodeSettings {
        decimal_places: decimals,
        ..GCodeSettings::default()
    }
}

/// X/Y words of every positioned move, excluding the trips home.
fn positions(gcode: &str) -> Vec<String> {
    gcode
        .lines()
        .map(|line| line.split(';').next().unwrap_or("").trim())
        .filter(|code| code.contains('X') && code.contains('Y'))
        .filter(|code| *code != "G0 X0 Y0")
        .map(|code| {
            code.split_whitespace()
                .filter(|word| word.starts_with('X') || word.starts_with('Y'))
                .collect::<Vec<_>>()
                .join(" ")
        })
        .collect()
}

#[test]
fn test_rect_outline() {
    let svg = r##"<svg xmlns="http://www.w3.org/2000/svg" width="10mm" height="10mm">
        <rect x="0" y="0" width="10" height="10" fill="#FF0000"/>
    </svg>"##;
    let elements = SvgParser::new().parse_str(svg).unwrap();
    let gcode = GCodeGenerator::new(settings(2)).generate(&elements);

    assert_eq!(
        positions(&gcode),
        vec![
            "X0.00 Y0.00",
            "X10.00 Y0.00",
            "X10.00 Y10.00",
            "X0.00 Y10.00",
            "X0.00 Y0.00",
        ]
    );
    assert!(GCodeValidator::new().validate(&gcode));
}

#[test]
fn test_every_element_is_cut_in_document_order() {
    let svg = r#"<svg>
        <line x1="0" y1="0" x2="5" y2="0"/>
        <g transform="translate(100,0)">
            <polyline points="0,0 1,1 2,0"/>
        </g>
        <circle cx="50" cy="50" r="5"/>
    </svg>"#;
    let elements = SvgParser::new().parse_str(svg).unwrap();
    let gcode = GCodeGenerator::new(settings(3)).generate(&elements);

    let line = gcode.find("; Contour 1: line (2 points)").unwrap();
    let polyline = gcode.find("; Contour 2: polyline (3 points)").unwrap();
    let circle = gcode.find("; Contour 3: circle (51 points)").unwrap();
    assert!(line < polyline && polyline < circle);
    assert!(gcode.contains("G0 X100.000 Y0.000"));
    assert!(gcode.contains("G1 X102.000 Y0.000 F1000"));
}

#[test]
fn test_empty_drawing_has_no_cutting_moves() {
    let elements = SvgParser::new().parse_str("<svg/>").unwrap();
    let gcode = GCodeGenerator::new(settings(3)).generate(&elements);

    assert!(!gcode.contains("G1"));
    assert!(gcode.starts_with("; G-Code generated by vectorcut"));
    assert!(gcode.trim_end().ends_with("M30 ; Program end"));
    assert!(GCodeValidator::new().validate(&gcode));
}

#[test]
fn test_convert_file() {
    let mut file = tempfile::Builder::new().suffix(".svg").tempfile().unwrap();
    write!(
        file,
        r#"<?xml version="1.0"?><svg><path d="M0,0 L10,0 L10,10 Z"/></svg>"#
    )
    .unwrap();

    let report =
        convert_svg_file(file.path(), &settings(3), &Flattening::default()).unwrap();
    assert_eq!(report.element_count, 1);
    assert!(report.valid);
    assert_eq!(report.gcode.matches("\nG1 ").count(), 3);
    assert!(report.estimated_seconds() > 0.0);
}

#[test]
fn test_convert_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    let result = convert_svg_file(
        dir.path().join("absent.svg"),
        &settings(3),
        &Flattening::default(),
    );
    assert!(matches!(
        result,
        Err(vectorcut_camtools::CamToolError::Svg(
            vectorcut_svg::SvgError::NotFound { .. }
        ))
    ));
}
