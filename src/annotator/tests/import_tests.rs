//! GeoJSON and WKT import through the annotator.

use super::*;
use crate::import::ImportFormat;
use crate::model::FeatureKind;

const GEOJSON_LINE: &str = r#"{
    "type": "Feature",
    "properties": {"name": "road"},
    "geometry": {"type": "LineString", "coordinates": [[0, 0], [1, 1]]}
}"#;

fn type_text(a: &mut Annotator, text: &str) {
    a.update(Message::ImportTextChanged {
        text: text.to_string(),
    });
}

fn submit(a: &mut Annotator) -> Outcome {
    a.update(Message::SubmitImport)
}

#[test]
fn test_same_geojson_twice_gets_distinct_ids() {
    let mut a = Annotator::new();
    let mut committed = Vec::new();
    for _ in 0..2 {
        select(&mut a, ActiveAction::AddGeoJson);
        type_text(&mut a, GEOJSON_LINE);
        committed.push(submit(&mut a).committed.expect("import committed"));
    }

    assert_eq!(committed[0].kind, FeatureKind::Imported);
    assert_ne!(committed[0].id, committed[1].id);
    let stored = a.store().imported();
    assert_eq!(stored.len(), 2);
    assert_eq!(stored[0].geojson, stored[1].geojson);
}

#[test]
fn test_successful_submit_returns_to_idle() {
    let mut a = Annotator::new();
    select(&mut a, ActiveAction::AddGeoJson);
    type_text(&mut a, GEOJSON_LINE);

    let outcome = submit(&mut a);

    assert!(outcome.committed.is_some());
    assert_eq!(outcome.mode_change, Some(ActiveAction::Idle));
    assert_eq!(a.action(), ActiveAction::Idle);
    assert!(a.draft().is_none());
}

#[test]
fn test_failed_submit_keeps_tool_open() {
    let mut a = Annotator::new();
    select(&mut a, ActiveAction::AddWkt);
    type_text(&mut a, "POINT (1");

    let outcome = submit(&mut a);

    assert!(outcome.mode_change.is_none());
    assert_eq!(a.action(), ActiveAction::AddWkt);
    assert_eq!(a.draft().expect("draft").text(), "POINT (1");
}

#[test]
fn test_invalid_geojson_sets_flag_and_leaves_store() {
    let mut a = Annotator::new();
    select(&mut a, ActiveAction::AddGeoJson);
    type_text(&mut a, "{ not json");

    let outcome = submit(&mut a);

    assert_eq!(outcome, Outcome::default());
    assert!(a.store().is_empty());
    let draft = a.draft().expect("draft");
    assert!(draft.is_invalid());
    assert!(draft.error().is_some());

    // Editing clears the flag
    type_text(&mut a, GEOJSON_LINE);
    assert!(!a.draft().expect("draft").is_invalid());
}

#[test]
fn test_out_of_range_geojson_rejected() {
    let mut a = Annotator::new();
    select(&mut a, ActiveAction::AddGeoJson);
    type_text(&mut a, r#"{"type":"Point","coordinates":[200, 10]}"#);
    submit(&mut a);

    assert!(a.store().is_empty());
    assert!(a.draft().expect("draft").is_invalid());
}

#[test]
fn test_empty_geometries_rejected() {
    let inputs = [
        (ImportFormat::GeoJson, r#"{"type":"GeometryCollection","geometries":[]}"#),
        (ImportFormat::GeoJson, r#"{"type":"MultiPoint","coordinates":[]}"#),
        (ImportFormat::GeoJson, r#"{"type":"MultiLineString","coordinates":[]}"#),
        (ImportFormat::Wkt, "GEOMETRYCOLLECTION EMPTY"),
    ];
    for (format, text) in inputs {
        let mut a = Annotator::new();
        select(&mut a, format.action());
        type_text(&mut a, text);

        let outcome = submit(&mut a);

        assert!(outcome.committed.is_none(), "{} accepted", text);
        assert!(a.store().is_empty());
        assert!(a.draft().expect("draft").is_invalid());
    }
}

#[test]
fn test_empty_text_rejected() {
    let mut a = Annotator::new();
    select(&mut a, ActiveAction::AddWkt);
    submit(&mut a);
    assert!(a.store().is_empty());
    assert!(a.draft().expect("draft").is_invalid());
}

#[test]
fn test_wkt_import() {
    let mut a = Annotator::new();
    select(&mut a, ActiveAction::AddWkt);
    type_text(&mut a, "POLYGON ((0 0, 4 0, 4 4, 0 4, 0 0))");

    let outcome = submit(&mut a);
    let committed = outcome.committed.expect("imported");
    assert_eq!(committed.id.as_str(), "wkt_1");
    assert_eq!(a.store().imported()[0].format, ImportFormat::Wkt);
}

#[test]
fn test_invalid_wkt_rejected() {
    let mut a = Annotator::new();
    select(&mut a, ActiveAction::AddWkt);
    type_text(&mut a, "LINESTRING (0 0,");
    submit(&mut a);
    assert!(a.store().is_empty());
    assert!(a.draft().expect("draft").is_invalid());
}

#[test]
fn test_submit_without_import_tool_is_ignored() {
    let mut a = Annotator::new();
    type_text(&mut a, GEOJSON_LINE);
    assert_eq!(submit(&mut a), Outcome::default());
    assert!(a.store().is_empty());
}

#[test]
fn test_live_preview_follows_text() {
    let mut a = Annotator::new();
    select(&mut a, ActiveAction::AddGeoJson);
    type_text(&mut a, GEOJSON_LINE);
    assert!(a.draft().and_then(|d| d.preview()).is_none());

    a.update(Message::ToggleLivePreview);
    assert!(a.draft().and_then(|d| d.preview()).is_some());

    type_text(&mut a, "{");
    assert!(a.draft().and_then(|d| d.preview()).is_none());
    assert!(a.store().is_empty());
}

#[test]
fn test_live_preview_default_from_config() {
    let mut a = Annotator::new().with_live_preview(true);
    select(&mut a, ActiveAction::AddGeoJson);
    type_text(&mut a, GEOJSON_LINE);
    assert!(a.draft().and_then(|d| d.preview()).is_some());

    submit(&mut a);
    assert!(crate::LayerProjector::project(&a).preview.is_none());
}

#[test]
fn test_file_import_flags_matching_draft() {
    let mut a = Annotator::new();
    select(&mut a, ActiveAction::AddWkt);

    // A bad GeoJSON file does not touch the WKT draft
    a.update(Message::ImportFile {
        format: ImportFormat::GeoJson,
        contents: "nope".to_string(),
    });
    assert!(!a.draft().expect("draft").is_invalid());

    a.update(Message::ImportFile {
        format: ImportFormat::Wkt,
        contents: "nope".to_string(),
    });
    assert!(a.draft().expect("draft").is_invalid());
    assert!(a.store().is_empty());
}

#[test]
fn test_file_import_closes_matching_tool_only() {
    let mut a = Annotator::new();
    select(&mut a, ActiveAction::AddWkt);
    a.update(Message::ImportFile {
        format: ImportFormat::GeoJson,
        contents: GEOJSON_LINE.to_string(),
    });
    assert_eq!(a.action(), ActiveAction::AddWkt);

    let outcome = a.update(Message::ImportFile {
        format: ImportFormat::Wkt,
        contents: "POINT (1 2)".to_string(),
    });
    assert_eq!(outcome.mode_change, Some(ActiveAction::Idle));
    assert_eq!(a.action(), ActiveAction::Idle);
    assert_eq!(a.store().imported().len(), 2);
}

#[test]
fn test_upload_resolves_format_from_file_name() {
    let mut a = Annotator::new();
    let format = a
        .parsers()
        .for_file_name("parcels.wkt")
        .map(|p| p.format())
        .expect("wkt parser");

    let outcome = a.update(Message::ImportFile {
        format,
        contents: "POINT (3 4)".to_string(),
    });

    assert_eq!(outcome.committed.expect("imported").id.as_str(), "wkt_1");
}

#[test]
fn test_leaving_import_tool_discards_draft() {
    let mut a = Annotator::new();
    select(&mut a, ActiveAction::AddGeoJson);
    type_text(&mut a, GEOJSON_LINE);
    select(&mut a, ActiveAction::AddGeoJson);
    assert!(a.draft().is_none());

    select(&mut a, ActiveAction::AddGeoJson);
    assert_eq!(a.draft().expect("fresh draft").text(), "");
}
