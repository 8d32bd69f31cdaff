use std::io::Write;
use tempfile::NamedTempFile;
use vectorcut_svg::{is_valid_svg_file, SvgError, SvgParser};

fn temp_svg(content: &str) -> NamedTempFile {
    let mut file = tempfile::Builder::new()
        .suffix(".svg")
        .tempfile()
        .unwrap();
    file.write_all(content.as_bytes()).unwrap();
    file.flush().unwrap();
    file
}

#[test]
fn test_missing_file_is_not_found() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("absent.svg");

    let err = SvgParser::new().parse_file(&path).unwrap_err();
    assert!(matches!(err, SvgError::NotFound { .. }));
    assert!(!is_valid_svg_file(&path));
}

#[test]
fn test_malformed_file_is_distinct_from_missing() {
    let file = temp_svg("<svg><rect width='1'</svg>");

    let err = SvgParser::new().parse_file(file.path()).unwrap_err();
    assert!(matches!(err, SvgError::MalformedXml(_)));
    assert!(!is_valid_svg_file(file.path()));
}

#[test]
fn test_parse_file_to_points() {
    let file = temp_svg(
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="20" height="20">
            <rect x="1" y="1" width="4" height="4"/>
            <polyline points="0,0 1,1 2,0"/>
        </svg>"#,
    );

    assert!(is_valid_svg_file(file.path()));
    let points = SvgParser::new().parse_file_to_points(file.path()).unwrap();
    assert_eq!(points.len(), 8);
}

#[test]
fn test_non_svg_root_in_file() {
    let file = temp_svg("<?xml version='1.0'?><drawing><rect/></drawing>");

    let err = SvgParser::new().parse_file(file.path()).unwrap_err();
    assert!(matches!(err, SvgError::NotSvg { .. }));
    assert!(!is_valid_svg_file(file.path()));
}
