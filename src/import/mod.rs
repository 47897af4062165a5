//! Geometry import from GeoJSON and Well-Known Text.
//!
//! Text entered in the import panel (or read from an uploaded file) is handed
//! to a [`GeometryParser`], which either returns a normalized
//! [`geojson::FeatureCollection`] or an [`ImportError`]. The rest of the crate
//! treats the resulting collection as an opaque payload.

mod draft;
mod error;
mod parser;
mod registry;
mod validate;

use serde::{Deserialize, Serialize};

use crate::model::ActiveAction;

pub use draft::ImportDraft;
pub use error::ImportError;
pub use parser::{GeoJsonParser, GeometryParser, WktParser};
pub use registry::ParserRegistry;

/// Text formats that can be imported as geometry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ImportFormat {
    GeoJson,
    Wkt,
}

impl ImportFormat {
    /// Get the display name for this format.
    pub fn name(&self) -> &'static str {
        match self {
            ImportFormat::GeoJson => "GeoJSON",
            ImportFormat::Wkt => "WKT",
        }
    }

    /// Prefix used for ids of geometries imported in this format.
    pub fn id_prefix(&self) -> &'static str {
        match self {
            ImportFormat::GeoJson => "geojson",
            ImportFormat::Wkt => "wkt",
        }
    }

    /// The tool that accepts this format.
    pub fn action(&self) -> ActiveAction {
        match self {
            ImportFormat::GeoJson => ActiveAction::AddGeoJson,
            ImportFormat::Wkt => ActiveAction::AddWkt,
        }
    }

    /// Get all import formats.
    pub fn all() -> &'static [ImportFormat] {
        &[ImportFormat::GeoJson, ImportFormat::Wkt]
    }
}
