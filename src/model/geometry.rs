//! Geometry types for map annotations.
//!
//! Coordinates are geographic (WGS84 as reported by the map renderer) and are
//! stored verbatim: no wraparound or normalization is applied.

use std::fmt;

use geojson::{Feature, FeatureCollection, Geometry, JsonObject, Value};
use serde::{Deserialize, Serialize};

use crate::import::ImportFormat;

// ============================================================================
// Core Geometry Types
// ============================================================================

/// A geographic coordinate as resolved by the map renderer.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    pub latitude: f64,
    pub longitude: f64,
}

impl Coordinate {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    /// GeoJSON position for this coordinate (`[longitude, latitude]`).
    pub fn to_position(self) -> Vec<f64> {
        vec![self.longitude, self.latitude]
    }
}

impl From<(f64, f64)> for Coordinate {
    fn from((latitude, longitude): (f64, f64)) -> Self {
        Self::new(latitude, longitude)
    }
}

/// Identifier of a stored feature, e.g. `point_3` or `line_1`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FeatureId(String);

impl FeatureId {
    /// Build an id from a kind prefix and a sequence number.
    pub fn new(prefix: &str, sequence: u64) -> Self {
        Self(format!("{prefix}_{sequence}"))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for FeatureId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for FeatureId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

/// The collection a stored feature belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FeatureKind {
    Point,
    Line,
    Imported,
}

impl FeatureKind {
    /// Get the display name for this kind.
    pub fn name(&self) -> &'static str {
        match self {
            FeatureKind::Point => "Point",
            FeatureKind::Line => "Line",
            FeatureKind::Imported => "Imported geometry",
        }
    }

    /// Get all feature kinds.
    pub fn all() -> &'static [FeatureKind] {
        &[FeatureKind::Point, FeatureKind::Line, FeatureKind::Imported]
    }
}

/// Reference to a stored feature, used for selection, hover and deletion.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FeatureRef {
    pub kind: FeatureKind,
    pub id: FeatureId,
}

impl FeatureRef {
    pub fn new(kind: FeatureKind, id: impl Into<FeatureId>) -> Self {
        Self {
            kind,
            id: id.into(),
        }
    }
}

impl From<&FeatureId> for FeatureId {
    fn from(id: &FeatureId) -> Self {
        id.clone()
    }
}

// ============================================================================
// Stored Features
// ============================================================================

/// A placed point marker.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub id: FeatureId,
    pub position: Coordinate,
}

impl Point {
    pub fn new(id: FeatureId, position: Coordinate) -> Self {
        Self { id, position }
    }

    /// Render this point as a GeoJSON feature tagged with its id.
    pub fn to_feature(&self) -> Feature {
        feature(
            Value::Point(self.position.to_position()),
            id_properties(&self.id),
        )
    }
}

/// A committed polyline. Always has at least two vertices.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Line {
    pub id: FeatureId,
    pub points: Vec<Coordinate>,
}

impl Line {
    pub fn new(id: FeatureId, points: Vec<Coordinate>) -> Self {
        Self { id, points }
    }

    /// Render this line as a GeoJSON feature tagged with its id.
    pub fn to_feature(&self) -> Feature {
        feature(line_string(&self.points), id_properties(&self.id))
    }
}

/// A validated geometry imported from GeoJSON or WKT text.
///
/// The payload is opaque to the interaction logic; it is only handed on to
/// the layer projector.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImportedGeometry {
    pub id: FeatureId,
    pub format: ImportFormat,
    pub geojson: FeatureCollection,
}

impl ImportedGeometry {
    pub fn new(id: FeatureId, format: ImportFormat, geojson: FeatureCollection) -> Self {
        Self {
            id,
            format,
            geojson,
        }
    }
}

/// Any stored feature, as returned from removal.
#[derive(Debug, Clone, PartialEq)]
pub enum StoredFeature {
    Point(Point),
    Line(Line),
    Imported(ImportedGeometry),
}

impl StoredFeature {
    pub fn id(&self) -> &FeatureId {
        match self {
            StoredFeature::Point(p) => &p.id,
            StoredFeature::Line(l) => &l.id,
            StoredFeature::Imported(g) => &g.id,
        }
    }

    pub fn kind(&self) -> FeatureKind {
        match self {
            StoredFeature::Point(_) => FeatureKind::Point,
            StoredFeature::Line(_) => FeatureKind::Line,
            StoredFeature::Imported(_) => FeatureKind::Imported,
        }
    }
}

// ============================================================================
// GeoJSON helpers
// ============================================================================

/// GeoJSON `LineString` value through the given coordinates.
pub fn line_string(points: &[Coordinate]) -> Value {
    Value::LineString(points.iter().map(|c| c.to_position()).collect())
}

/// Wrap a geometry value into a feature with the given properties.
pub fn feature(value: Value, properties: JsonObject) -> Feature {
    Feature {
        bbox: None,
        geometry: Some(Geometry::new(value)),
        id: None,
        properties: Some(properties),
        foreign_members: None,
    }
}

/// Build a feature collection, or `None` when there is nothing to show.
pub fn collection(features: Vec<Feature>) -> Option<FeatureCollection> {
    if features.is_empty() {
        return None;
    }
    Some(FeatureCollection {
        bbox: None,
        features,
        foreign_members: None,
    })
}

fn id_properties(id: &FeatureId) -> JsonObject {
    let mut properties = JsonObject::new();
    properties.insert("id".to_string(), id.as_str().into());
    properties
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_position_is_lng_lat() {
        let c = Coordinate::new(10.0, 20.0);
        assert_eq!(c.to_position(), vec![20.0, 10.0]);
    }

    #[test]
    fn test_feature_id_format() {
        let id = FeatureId::new("point", 7);
        assert_eq!(id.as_str(), "point_7");
        assert_eq!(id.to_string(), "point_7");
    }

    #[test]
    fn test_point_feature_carries_id() {
        let point = Point::new(FeatureId::new("point", 1), Coordinate::new(1.0, 2.0));
        let feature = point.to_feature();
        let props = feature.properties.expect("properties set");
        assert_eq!(props.get("id").and_then(|v| v.as_str()), Some("point_1"));
        match feature.geometry.map(|g| g.value) {
            Some(Value::Point(pos)) => assert_eq!(pos, vec![2.0, 1.0]),
            other => panic!("Expected point geometry, got {:?}", other),
        }
    }

    #[test]
    fn test_empty_collection_is_none() {
        assert!(collection(Vec::new()).is_none());
    }
}
