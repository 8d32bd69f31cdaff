use vectorcut_core::{Point2D, Rgba8};
use vectorcut_svg::{Flattening, SvgParser};

const DRAWING: &str = r##"<?xml version="1.0" encoding="UTF-8"?>
<svg xmlns="http://www.w3.org/2000/svg" xmlns:inkscape="http://www.inkscape.org/namespaces/inkscape" width="100mm" height="100mm">
  <inkscape:metadata/>
  <g id="layer1" transform="translate(10, 10)">
    <rect x="0" y="0" width="20" height="10" fill="none" stroke="#00F" stroke-width="0.5mm"/>
    <circle cx="50" cy="50" r="5" fill="rgb(0, 128, 0)"/>
    <g transform="scale(2)">
      <path d="M 0 0 h 5 v 5 h -5 z" fill="orange"/>
    </g>
  </g>
  <ellipse cx="0" cy="0" rx="3" ry="2" transform="rotate(90)"/>
  <polygon points="0,0 4,0 2,3" stroke="black"/>
</svg>"##;

#[test]
fn test_document_element_order_and_types() {
    let elements = SvgParser::new().parse_str(DRAWING).unwrap();
    let types: Vec<&str> = elements.iter().map(|e| e.element_type.as_str()).collect();
    assert_eq!(types, vec!["rect", "circle", "path", "ellipse", "polygon"]);
}

#[test]
fn test_document_styles() {
    let elements = SvgParser::new().parse_str(DRAWING).unwrap();

    let rect = &elements[0];
    assert!(!rect.style.has_fill);
    assert!(rect.style.has_stroke);
    assert_eq!(rect.style.stroke_color, Rgba8::BLUE);
    assert_eq!(rect.style.stroke_width, 0.5);

    assert_eq!(elements[1].style.fill_color, Rgba8::GREEN);
    assert_eq!(elements[2].style.fill_color, Rgba8::ORANGE);
    assert_eq!(elements[4].style.stroke_color, Rgba8::BLACK);
}

#[test]
fn test_document_transforms() {
    let elements = SvgParser::new().parse_str(DRAWING).unwrap();

    assert_eq!(elements[0].points[0], Point2D::new(10.0, 10.0));
    assert_eq!(elements[0].points[2], Point2D::new(30.0, 20.0));

    // Inner scale first, then the outer translate.
    let path = &elements[2].points;
    assert_eq!(path[0], Point2D::new(10.0, 10.0));
    assert_eq!(path[2], Point2D::new(20.0, 20.0));

    // rotate(90) swaps the axes; 50 segments land exactly on the rx tips.
    let ellipse = elements[3].bounds().unwrap();
    assert!((ellipse.height() - 6.0).abs() < 1e-9);
    assert!(ellipse.width() > 3.9 && ellipse.width() <= 4.0 + 1e-9);
}

#[test]
fn test_custom_flattening() {
    let parser = SvgParser::with_flattening(Flattening {
        curve_steps: 10,
        ellipse_segments: 12,
    });
    let elements = parser.parse_str(DRAWING).unwrap();
    assert_eq!(elements[1].points.len(), 13);

    let arc = parser.parse_path("M 0 0 A 5 5 0 0 1 10 0").unwrap();
    assert_eq!(arc.len(), 12);
}

#[test]
fn test_elements_serialize_to_json() {
    let elements = SvgParser::new()
        .parse_str(r#"<svg><line x1="0" y1="0" x2="3" y2="4" stroke="red"/></svg>"#)
        .unwrap();
    let json = serde_json::to_value(&elements).unwrap();

    assert_eq!(json[0]["element_type"], "line");
    assert_eq!(json[0]["points"][1]["x"], 3.0);
    assert_eq!(json[0]["style"]["stroke_color"]["r"], 255);
    assert_eq!(json[0]["style"]["has_stroke"], true);

    let back: Vec<vectorcut_svg::SvgElementData> = serde_json::from_value(json).unwrap();
    assert_eq!(back, elements);
}
