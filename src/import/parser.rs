//! Parser implementations for importable text formats.

use geojson::{Feature, FeatureCollection, GeoJson, Geometry};
use wkt::TryFromWkt;

use super::{ImportError, ImportFormat, validate};

/// Trait for turning raw text into a validated geometry collection.
///
/// Implementations never inspect the store or tool state; they are the
/// validation seam between the import panel and the rest of the crate.
pub trait GeometryParser: Send + Sync {
    /// The format handled by this parser.
    fn format(&self) -> ImportFormat;

    /// Human-readable name for UI display.
    fn display_name(&self) -> &'static str {
        self.format().name()
    }

    /// File extensions accepted by the upload dialog (without the dot).
    fn extensions(&self) -> &[&'static str];

    /// Parse and validate `text`, normalizing it to a feature collection.
    fn parse(&self, text: &str) -> Result<FeatureCollection, ImportError>;
}

/// GeoJSON parser. Accepts a bare geometry, a feature or a feature collection.
#[derive(Debug, Clone, Copy, Default)]
pub struct GeoJsonParser;

impl GeometryParser for GeoJsonParser {
    fn format(&self) -> ImportFormat {
        ImportFormat::GeoJson
    }

    fn extensions(&self) -> &[&'static str] {
        &["geojson", "json"]
    }

    fn parse(&self, text: &str) -> Result<FeatureCollection, ImportError> {
        let text = non_empty(text)?;
        let geojson: GeoJson = text
            .parse()
            .map_err(|e: geojson::Error| ImportError::syntax(self.display_name(), e.to_string()))?;

        let collection = match geojson {
            GeoJson::Geometry(geometry) => single(geometry),
            GeoJson::Feature(feature) => FeatureCollection {
                bbox: None,
                features: vec![feature],
                foreign_members: None,
            },
            GeoJson::FeatureCollection(collection) => collection,
        };

        validate::collection(&collection)?;
        Ok(collection)
    }
}

/// Well-Known Text parser. The geometry is converted to GeoJSON on success.
#[derive(Debug, Clone, Copy, Default)]
pub struct WktParser;

impl GeometryParser for WktParser {
    fn format(&self) -> ImportFormat {
        ImportFormat::Wkt
    }

    fn extensions(&self) -> &[&'static str] {
        &["wkt", "txt"]
    }

    fn parse(&self, text: &str) -> Result<FeatureCollection, ImportError> {
        let text = non_empty(text)?;
        let geometry = geo_types::Geometry::<f64>::try_from_wkt_str(text)
            .map_err(|e| ImportError::syntax(self.display_name(), e.to_string()))?;

        let collection = single(Geometry::new(geojson::Value::from(&geometry)));
        validate::collection(&collection)?;
        Ok(collection)
    }
}

fn non_empty(text: &str) -> Result<&str, ImportError> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        Err(ImportError::Empty)
    } else {
        Ok(trimmed)
    }
}

fn single(geometry: Geometry) -> FeatureCollection {
    let feature = Feature {
        bbox: None,
        geometry: Some(geometry),
        id: None,
        properties: None,
        foreign_members: None,
    };
    FeatureCollection {
        bbox: None,
        features: vec![feature],
        foreign_members: None,
    }
}
