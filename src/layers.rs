//! Projection of annotation state into renderable map layers.
//!
//! Each source is a GeoJSON feature collection, or `None` when the layer has
//! nothing to draw. Style descriptors for the renderer are in
//! [`layer_styles`].

use geojson::{Feature, FeatureCollection, Value};
use serde::Serialize;
use serde_json::json;

use crate::annotator::Annotator;
use crate::constants::{MARKER_IMAGE_NAME, MIN_LINE_VERTICES};
use crate::model::{FeatureKind, FeatureRef, collection, feature, line_string};
use crate::store::CollectionStore;

/// Source data for every map layer.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct LayerData {
    /// Committed points.
    pub points: Option<FeatureCollection>,
    /// Committed lines.
    pub lines: Option<FeatureCollection>,
    /// Line being drawn, including the ghost vertex.
    pub drawing_line: Option<FeatureCollection>,
    /// Ghost point following the pointer.
    pub ghost: Option<FeatureCollection>,
    /// All imported geometries.
    pub imported: Option<FeatureCollection>,
    /// Live preview of the import text.
    pub preview: Option<FeatureCollection>,
}

/// Derives [`LayerData`] from annotator state.
pub struct LayerProjector;

impl LayerProjector {
    pub fn project(annotator: &Annotator) -> LayerData {
        let store = annotator.store();
        let session = annotator.session();

        let drawing_line = session
            .and_then(|s| s.preview_line())
            .filter(|vertices| vertices.len() >= MIN_LINE_VERTICES)
            .and_then(|vertices| collection(vec![feature(line_string(&vertices), Default::default())]));

        let ghost = annotator.tool().ghost().and_then(|c| {
            collection(vec![feature(
                Value::Point(c.to_position()),
                Default::default(),
            )])
        });

        let imported = store
            .imported()
            .iter()
            .flat_map(|geometry| {
                let target = FeatureRef::new(FeatureKind::Imported, &geometry.id);
                geometry.geojson.features.iter().cloned().map(move |mut f| {
                    f.properties
                        .get_or_insert_with(Default::default)
                        .insert("importId".to_string(), geometry.id.as_str().into());
                    with_highlight(f, &target, store)
                })
            })
            .collect::<Vec<Feature>>();

        let points = store
            .points()
            .iter()
            .map(|p| {
                let target = FeatureRef::new(FeatureKind::Point, &p.id);
                with_highlight(p.to_feature(), &target, store)
            })
            .collect();
        let lines = store
            .lines()
            .iter()
            .map(|l| {
                let target = FeatureRef::new(FeatureKind::Line, &l.id);
                with_highlight(l.to_feature(), &target, store)
            })
            .collect();

        LayerData {
            points: collection(points),
            lines: collection(lines),
            drawing_line,
            ghost,
            imported: collection(imported),
            preview: annotator.draft().and_then(|d| d.preview()).cloned(),
        }
    }
}

/// Tag a committed feature with its `selected` and `hovered` state.
fn with_highlight(mut feature: Feature, target: &FeatureRef, store: &CollectionStore) -> Feature {
    let properties = feature.properties.get_or_insert_with(Default::default);
    properties.insert(
        "selected".to_string(),
        (store.selected() == Some(target)).into(),
    );
    properties.insert(
        "hovered".to_string(),
        (store.hovered() == Some(target)).into(),
    );
    feature
}

/// Kind of map layer, as understood by the renderer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LayerKind {
    Line,
    Fill,
    Symbol,
    Circle,
}

/// Style descriptor for one renderer layer.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LayerStyle {
    pub id: &'static str,
    /// Name of the [`LayerData`] field this layer draws.
    pub source: &'static str,
    #[serde(rename = "type")]
    pub kind: LayerKind,
    pub paint: serde_json::Value,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub layout: Option<serde_json::Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filter: Option<serde_json::Value>,
}

fn geometry_filter(geometry_type: &str) -> Option<serde_json::Value> {
    Some(json!(["==", ["geometry-type"], geometry_type]))
}

fn highlight_filter() -> Option<serde_json::Value> {
    Some(json!([
        "any",
        ["==", ["get", "selected"], true],
        ["==", ["get", "hovered"], true]
    ]))
}

const HIGHLIGHT_COLOR: &str = "#2563eb";

/// Layer descriptors in draw order (bottom first).
pub fn layer_styles() -> Vec<LayerStyle> {
    vec![
        LayerStyle {
            id: "importedFillLayer",
            source: "imported",
            kind: LayerKind::Fill,
            paint: json!({ "fill-color": "#61616180" }),
            layout: None,
            filter: geometry_filter("Polygon"),
        },
        LayerStyle {
            id: "importedLineLayer",
            source: "imported",
            kind: LayerKind::Line,
            paint: json!({ "line-color": "#616161", "line-width": 2 }),
            layout: None,
            filter: None,
        },
        LayerStyle {
            id: "importedSymbolLayer",
            source: "imported",
            kind: LayerKind::Symbol,
            paint: json!({ "icon-color": "#616161" }),
            layout: Some(json!({ "icon-image": MARKER_IMAGE_NAME })),
            filter: geometry_filter("Point"),
        },
        LayerStyle {
            id: "importedHighlightLayer",
            source: "imported",
            kind: LayerKind::Line,
            paint: json!({ "line-color": HIGHLIGHT_COLOR, "line-width": 6, "line-opacity": 0.4 }),
            layout: None,
            filter: highlight_filter(),
        },
        LayerStyle {
            id: "previewLineLayer",
            source: "preview",
            kind: LayerKind::Line,
            paint: json!({ "line-color": "#2563eb", "line-width": 2, "line-dasharray": [2, 2] }),
            layout: None,
            filter: None,
        },
        LayerStyle {
            id: "lineHighlightLayer",
            source: "lines",
            kind: LayerKind::Line,
            paint: json!({ "line-color": HIGHLIGHT_COLOR, "line-width": 6, "line-opacity": 0.4 }),
            layout: None,
            filter: highlight_filter(),
        },
        LayerStyle {
            id: "lineLayer",
            source: "lines",
            kind: LayerKind::Line,
            paint: json!({ "line-color": "#000000", "line-width": 2 }),
            layout: None,
            filter: None,
        },
        LayerStyle {
            id: "drawingLineLayer",
            source: "drawing_line",
            kind: LayerKind::Line,
            paint: json!({ "line-color": "#000000", "line-width": 2 }),
            layout: None,
            filter: None,
        },
        LayerStyle {
            id: "pointHighlightLayer",
            source: "points",
            kind: LayerKind::Circle,
            paint: json!({ "circle-radius": 10, "circle-color": HIGHLIGHT_COLOR, "circle-opacity": 0.4 }),
            layout: None,
            filter: highlight_filter(),
        },
        LayerStyle {
            id: "pointLayer",
            source: "points",
            kind: LayerKind::Symbol,
            paint: json!({ "icon-color": "#737373" }),
            layout: Some(json!({ "icon-image": MARKER_IMAGE_NAME, "icon-anchor": "bottom" })),
            filter: None,
        },
        LayerStyle {
            id: "ghostLayer",
            source: "ghost",
            kind: LayerKind::Circle,
            paint: json!({ "circle-radius": 4, "circle-color": "#000000", "circle-opacity": 0.5 }),
            layout: None,
            filter: None,
        },
    ]
}
