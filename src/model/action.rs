//! The active tool selected in the sidebar.

use serde::{Deserialize, Serialize};

/// Interaction mode selected in the tool sidebar.
///
/// Exactly one is active for the whole UI at any time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum ActiveAction {
    /// No tool selected; the map only pans and zooms.
    #[default]
    Idle,
    /// Place a single point marker.
    AddPoint,
    /// Draw a polyline vertex by vertex.
    AddLine,
    /// Polygon drawing (not available yet)
    AddPolygon,
    /// Paste or upload GeoJSON text
    AddGeoJson,
    /// Paste or upload Well-Known Text
    AddWkt,
    /// Show the erase controls for stored features
    Erase,
}

impl ActiveAction {
    /// Get the display name for this action.
    pub fn name(&self) -> &'static str {
        match self {
            ActiveAction::Idle => "Pan",
            ActiveAction::AddPoint => "Add point",
            ActiveAction::AddLine => "Add line",
            ActiveAction::AddPolygon => "Add polygon",
            ActiveAction::AddGeoJson => "Add GeoJSON",
            ActiveAction::AddWkt => "Add Wellknown Text (WKT)",
            ActiveAction::Erase => "Erase",
        }
    }

    /// Get all actions in sidebar order.
    pub fn all() -> &'static [ActiveAction] {
        &[
            ActiveAction::Idle,
            ActiveAction::AddPoint,
            ActiveAction::AddLine,
            ActiveAction::AddPolygon,
            ActiveAction::AddGeoJson,
            ActiveAction::AddWkt,
            ActiveAction::Erase,
        ]
    }

    /// Look up an action by its variant name (as used in JSON messages).
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "Idle" | "Pan" => Some(ActiveAction::Idle),
            "AddPoint" => Some(ActiveAction::AddPoint),
            "AddLine" => Some(ActiveAction::AddLine),
            "AddPolygon" => Some(ActiveAction::AddPolygon),
            "AddGeoJson" => Some(ActiveAction::AddGeoJson),
            "AddWkt" => Some(ActiveAction::AddWkt),
            "Erase" => Some(ActiveAction::Erase),
            _ => None,
        }
    }

    /// Check if this tool collects pointer input into a drawing session.
    pub fn is_drawing_tool(&self) -> bool {
        matches!(self, ActiveAction::AddPoint | ActiveAction::AddLine)
    }

    /// Check if this tool takes text input instead of pointer input.
    pub fn is_import_tool(&self) -> bool {
        matches!(self, ActiveAction::AddGeoJson | ActiveAction::AddWkt)
    }

    /// Reachable from the sidebar, but does nothing yet.
    pub fn is_placeholder(&self) -> bool {
        matches!(self, ActiveAction::AddPolygon)
    }

    /// Instruction shown in the map toast while this tool is active.
    pub fn hint(&self) -> Option<&'static str> {
        match self {
            ActiveAction::AddPoint => {
                Some("Left click the map to place a point at the cursor's location")
            }
            ActiveAction::AddLine => {
                Some("Click to add vertices, double click to place the last one")
            }
            ActiveAction::AddGeoJson => Some("Paste GeoJSON or upload a .geojson file"),
            ActiveAction::AddWkt => Some("Paste Well-Known Text or upload a .wkt file"),
            ActiveAction::Erase => Some("Pick a feature from the list to erase it"),
            ActiveAction::Idle | ActiveAction::AddPolygon => None,
        }
    }
}
