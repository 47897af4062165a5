//! Tool state and the transient drawing session scoped to it.
//!
//! The active tool and its mode-specific state are a single enum, so a ghost
//! vertex or an import draft cannot outlive the tool that owns it.

use crate::constants::MIN_LINE_VERTICES;
use crate::import::{ImportDraft, ImportFormat};
use crate::model::{ActiveAction, Coordinate};

// ============================================================================
// Drawing Session
// ============================================================================

/// Transient state of the point and line tools.
///
/// Holds the vertices placed so far (when a line is in progress) and the
/// ghost coordinate following the pointer.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DrawingSession {
    line: Option<Vec<Coordinate>>,
    ghost: Option<Coordinate>,
}

impl DrawingSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// Vertices of the line being drawn, if one has been started.
    pub fn line(&self) -> Option<&[Coordinate]> {
        self.line.as_deref()
    }

    pub fn ghost(&self) -> Option<Coordinate> {
        self.ghost
    }

    /// Whether at least one line vertex has been placed.
    pub fn is_drawing(&self) -> bool {
        self.line.is_some()
    }

    /// Move the ghost coordinate.
    pub fn set_ghost(&mut self, coordinate: Coordinate) {
        self.ghost = Some(coordinate);
    }

    /// Place a line vertex, starting the line if none is in progress.
    pub fn push_vertex(&mut self, coordinate: Coordinate) {
        self.line.get_or_insert_with(Vec::new).push(coordinate);
    }

    /// Take the line vertices if there are enough to commit, emptying the
    /// session either way.
    pub fn finish_line(&mut self) -> Option<Vec<Coordinate>> {
        let vertices = self.line.take();
        self.ghost = None;
        vertices.filter(|v| v.len() >= MIN_LINE_VERTICES)
    }

    /// Drop any in-progress geometry and the ghost.
    pub fn cancel(&mut self) {
        self.line = None;
        self.ghost = None;
    }

    /// Preview polyline: placed vertices followed by the ghost. Never stored.
    pub fn preview_line(&self) -> Option<Vec<Coordinate>> {
        let mut vertices = self.line.clone()?;
        if let Some(ghost) = self.ghost {
            vertices.push(ghost);
        }
        Some(vertices)
    }
}

// ============================================================================
// Tool State
// ============================================================================

/// The active tool together with the state that only exists while it is
/// active.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum ToolState {
    #[default]
    Idle,
    AddPoint(DrawingSession),
    AddLine(DrawingSession),
    AddPolygon,
    AddGeoJson(ImportDraft),
    AddWkt(ImportDraft),
    Erase,
}

impl ToolState {
    /// Fresh state for entering `action`.
    pub fn enter(action: ActiveAction, live_preview: bool) -> Self {
        match action {
            ActiveAction::Idle => ToolState::Idle,
            ActiveAction::AddPoint => ToolState::AddPoint(DrawingSession::new()),
            ActiveAction::AddLine => ToolState::AddLine(DrawingSession::new()),
            ActiveAction::AddPolygon => ToolState::AddPolygon,
            ActiveAction::AddGeoJson => {
                ToolState::AddGeoJson(ImportDraft::new(ImportFormat::GeoJson, live_preview))
            }
            ActiveAction::AddWkt => {
                ToolState::AddWkt(ImportDraft::new(ImportFormat::Wkt, live_preview))
            }
            ActiveAction::Erase => ToolState::Erase,
        }
    }

    /// The sidebar action this state belongs to.
    pub fn action(&self) -> ActiveAction {
        match self {
            ToolState::Idle => ActiveAction::Idle,
            ToolState::AddPoint(_) => ActiveAction::AddPoint,
            ToolState::AddLine(_) => ActiveAction::AddLine,
            ToolState::AddPolygon => ActiveAction::AddPolygon,
            ToolState::AddGeoJson(_) => ActiveAction::AddGeoJson,
            ToolState::AddWkt(_) => ActiveAction::AddWkt,
            ToolState::Erase => ActiveAction::Erase,
        }
    }

    /// Toolbar selection: re-selecting the active tool turns it off,
    /// anything else switches to a fresh instance of the chosen tool.
    pub fn select(self, action: ActiveAction, live_preview: bool) -> Self {
        if self.action() == action {
            ToolState::Idle
        } else {
            ToolState::enter(action, live_preview)
        }
    }

    pub fn session(&self) -> Option<&DrawingSession> {
        match self {
            ToolState::AddPoint(session) | ToolState::AddLine(session) => Some(session),
            _ => None,
        }
    }

    pub fn draft(&self) -> Option<&ImportDraft> {
        match self {
            ToolState::AddGeoJson(draft) | ToolState::AddWkt(draft) => Some(draft),
            _ => None,
        }
    }

    pub fn draft_mut(&mut self) -> Option<&mut ImportDraft> {
        match self {
            ToolState::AddGeoJson(draft) | ToolState::AddWkt(draft) => Some(draft),
            _ => None,
        }
    }

    /// Ghost coordinate of the active drawing tool.
    pub fn ghost(&self) -> Option<Coordinate> {
        self.session().and_then(DrawingSession::ghost)
    }
}
