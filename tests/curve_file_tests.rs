use spline_curve_editor::{
    load_curve_file, parse_curve_file, save_curve_file, write_curve_file, CurveColor,
    CurveDocument, CurveFileError, FormatError, Point,
};

fn fixture_path(name: &str) -> std::path::PathBuf {
    std::path::Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests/fixtures")
        .join(name)
}

#[test]
fn test_load_canonical_fixture() {
    let doc = load_curve_file(&fixture_path("three_points.json")).expect("Fixture ladbar");

    assert_eq!(
        doc.points(),
        &[
            Point::new(100.0, 120.0),
            Point::new(250.5, 80.25),
            Point::new(400.0, 300.0),
        ]
    );
    assert_eq!(doc.stroke_color(), CurveColor::rgb(0xff, 0x80, 0x00));
    assert_eq!(doc.stroke_width(), 4);
    assert!(doc.show_points());
    assert_eq!(doc.selected_index(), None);
}

#[test]
fn test_load_legacy_object_forms() {
    let doc = load_curve_file(&fixture_path("legacy_objects.json")).expect("Fixture ladbar");

    assert_eq!(
        doc.points(),
        &[Point::new(12.5, 40.0), Point::new(60.0, 75.5)]
    );
    assert_eq!(doc.stroke_color(), CurveColor::rgb(0, 128, 64));
    assert_eq!(doc.stroke_width(), 6);
    assert!(!doc.show_points());
}

#[test]
fn test_legacy_file_is_rewritten_in_canonical_form() {
    let doc = load_curve_file(&fixture_path("legacy_objects.json")).expect("Fixture ladbar");
    let json = write_curve_file(&doc).expect("Serialisierung");
    let value: serde_json::Value = serde_json::from_str(&json).expect("gültiges JSON");

    assert_eq!(value["color"], "#008040");
    assert_eq!(value["points"][0][0], 12.5);
    assert_eq!(value["points"][1][1], 75.5);
    assert_eq!(value["width"], 6);
    assert_eq!(value["show_points"], false);
}

#[test]
fn test_missing_width_is_format_error_with_path() {
    let path = fixture_path("missing_width.json");
    let err = load_curve_file(&path).expect_err("width fehlt");

    assert!(err.is_format_error());
    assert_eq!(err.path(), path.display().to_string());
}

#[test]
fn test_invalid_color_is_rejected() {
    let err = parse_curve_file(r#"{"points": [], "color": "blau", "width": 2, "show_points": true}"#)
        .expect_err("Farbe ungültig");
    assert!(matches!(err, FormatError::InvalidColor(ref c) if c == "blau"));
}

#[test]
fn test_named_color_is_accepted_and_written_as_hex() {
    let doc = parse_curve_file(r#"{"points": [[1, 2]], "color": "blue", "width": 2, "show_points": true}"#)
        .expect("Farbname gültig");
    assert_eq!(doc.stroke_color(), CurveColor::BLUE);

    let json = write_curve_file(&doc).expect("Serialisierung");
    assert!(json.contains("\"#0000ff\""), "JSON: {json}");
}

#[test]
fn test_empty_points_are_valid() {
    let doc = parse_curve_file(r##"{"points": [], "color": "#0000ff", "width": 2, "show_points": true}"##)
        .expect("leere Kurve ist gültig");
    assert!(doc.is_empty());
}

#[test]
fn test_roundtrip_preserves_exact_coordinates() {
    let doc = CurveDocument::from_parts(
        vec![
            Point::new(0.1, 0.2),
            Point::new(1.0 / 3.0, -2.0 / 7.0),
            Point::new(1e-9, 12345.678),
        ],
        CurveColor::rgba(1, 2, 3, 200),
        9,
        false,
    );
    let path = std::env::temp_dir().join(format!(
        "spline_curve_editor_{}_exact.json",
        std::process::id()
    ));

    save_curve_file(&path, &doc).expect("Speichern");
    let loaded = load_curve_file(&path).expect("Laden");

    assert_eq!(loaded, doc);
    let _ = std::fs::remove_file(&path);
}

#[test]
fn test_save_into_missing_directory_is_io_error() {
    let path = std::env::temp_dir()
        .join("spline_curve_editor_missing_dir")
        .join("nested")
        .join("curve.json");
    let err = save_curve_file(&path, &CurveDocument::new()).expect_err("Verzeichnis fehlt");

    assert!(matches!(err, CurveFileError::Io { .. }));
}
