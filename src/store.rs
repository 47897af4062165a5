//! Storage for committed map features.
//!
//! Points, lines and imported geometries each live in their own ordered list.
//! Ids come from per-kind counters that only ever increase, so an id is never
//! handed out twice in a session even after the feature is erased.

use geojson::FeatureCollection;

use crate::constants::{LINE_ID_PREFIX, MIN_LINE_VERTICES, POINT_ID_PREFIX};
use crate::import::ImportFormat;
use crate::model::{
    Coordinate, FeatureId, FeatureKind, FeatureRef, ImportedGeometry, Line, Point, StoredFeature,
};

/// Counters for generating unique ids, one per collection.
#[derive(Debug, Clone)]
struct IdCounters {
    point: u64,
    line: u64,
    imported: u64,
}

impl Default for IdCounters {
    fn default() -> Self {
        Self {
            point: 1,
            line: 1,
            imported: 1,
        }
    }
}

fn next(counter: &mut u64) -> u64 {
    let id = *counter;
    *counter += 1;
    id
}

/// Ordered collections of committed features plus selection state.
#[derive(Debug, Clone)]
pub struct CollectionStore {
    points: Vec<Point>,
    lines: Vec<Line>,
    imported: Vec<ImportedGeometry>,
    next_id: IdCounters,
    /// Feature shown in the context panel.
    selected: Option<FeatureRef>,
    /// Feature under the pointer in the erase list.
    hovered: Option<FeatureRef>,
    /// Set when anything visible changes. Used to avoid rebuilding layers
    /// every frame.
    dirty: bool,
}

impl Default for CollectionStore {
    fn default() -> Self {
        Self::new()
    }
}

impl CollectionStore {
    pub fn new() -> Self {
        Self {
            points: Vec::new(),
            lines: Vec::new(),
            imported: Vec::new(),
            next_id: IdCounters::default(),
            selected: None,
            hovered: None,
            dirty: true, // Start dirty so the first layer build happens
        }
    }

    /// Check if the store has been modified since last clear_dirty().
    #[inline]
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Clear the dirty flag. Call after rebuilding the layers.
    #[inline]
    pub fn clear_dirty(&mut self) {
        self.dirty = false;
    }

    #[inline]
    pub fn mark_dirty(&mut self) {
        self.dirty = true;
    }

    // ========================================================================
    // Adding
    // ========================================================================

    /// Append a point and return its id.
    pub fn add_point(&mut self, position: Coordinate) -> FeatureId {
        let id = FeatureId::new(POINT_ID_PREFIX, next(&mut self.next_id.point));
        self.points.push(Point::new(id.clone(), position));
        self.mark_dirty();
        id
    }

    /// Append a line and return its id. Lines with fewer than two vertices
    /// are refused.
    pub fn add_line(&mut self, points: Vec<Coordinate>) -> Option<FeatureId> {
        if points.len() < MIN_LINE_VERTICES {
            return None;
        }
        let id = FeatureId::new(LINE_ID_PREFIX, next(&mut self.next_id.line));
        self.lines.push(Line::new(id.clone(), points));
        self.mark_dirty();
        Some(id)
    }

    /// Append a validated imported geometry and return its id.
    pub fn add_imported(&mut self, format: ImportFormat, geojson: FeatureCollection) -> FeatureId {
        let id = FeatureId::new(format.id_prefix(), next(&mut self.next_id.imported));
        self.imported
            .push(ImportedGeometry::new(id.clone(), format, geojson));
        self.mark_dirty();
        id
    }

    // ========================================================================
    // Removing
    // ========================================================================

    /// Remove a feature by id. Unknown ids are ignored.
    ///
    /// Selection and hover pointing at the removed feature are cleared.
    pub fn remove(&mut self, kind: FeatureKind, id: &FeatureId) -> Option<StoredFeature> {
        let removed = match kind {
            FeatureKind::Point => take_by_id(&mut self.points, |p| &p.id, id).map(StoredFeature::Point),
            FeatureKind::Line => take_by_id(&mut self.lines, |l| &l.id, id).map(StoredFeature::Line),
            FeatureKind::Imported => {
                take_by_id(&mut self.imported, |g| &g.id, id).map(StoredFeature::Imported)
            }
        };

        if removed.is_some() {
            let target = FeatureRef::new(kind, id);
            if self.selected.as_ref() == Some(&target) {
                self.selected = None;
            }
            if self.hovered.as_ref() == Some(&target) {
                self.hovered = None;
            }
            self.mark_dirty();
        }
        removed
    }

    /// Remove every feature of one kind. Returns how many were removed.
    pub fn clear(&mut self, kind: FeatureKind) -> usize {
        let removed = match kind {
            FeatureKind::Point => std::mem::take(&mut self.points).len(),
            FeatureKind::Line => std::mem::take(&mut self.lines).len(),
            FeatureKind::Imported => std::mem::take(&mut self.imported).len(),
        };

        if self.selected.as_ref().is_some_and(|s| s.kind == kind) {
            self.selected = None;
        }
        if self.hovered.as_ref().is_some_and(|h| h.kind == kind) {
            self.hovered = None;
        }
        if removed > 0 {
            self.mark_dirty();
        }
        removed
    }

    /// Remove every feature of every kind.
    pub fn clear_all(&mut self) -> usize {
        FeatureKind::all().iter().map(|kind| self.clear(*kind)).sum()
    }

    // ========================================================================
    // Lookup
    // ========================================================================

    pub fn points(&self) -> &[Point] {
        &self.points
    }

    pub fn lines(&self) -> &[Line] {
        &self.lines
    }

    pub fn imported(&self) -> &[ImportedGeometry] {
        &self.imported
    }

    pub fn point(&self, id: &FeatureId) -> Option<&Point> {
        self.points.iter().find(|p| &p.id == id)
    }

    pub fn line(&self, id: &FeatureId) -> Option<&Line> {
        self.lines.iter().find(|l| &l.id == id)
    }

    pub fn imported_geometry(&self, id: &FeatureId) -> Option<&ImportedGeometry> {
        self.imported.iter().find(|g| &g.id == id)
    }

    /// Check if a referenced feature exists.
    pub fn contains(&self, target: &FeatureRef) -> bool {
        match target.kind {
            FeatureKind::Point => self.point(&target.id).is_some(),
            FeatureKind::Line => self.line(&target.id).is_some(),
            FeatureKind::Imported => self.imported_geometry(&target.id).is_some(),
        }
    }

    /// Number of features of one kind.
    pub fn len(&self, kind: FeatureKind) -> usize {
        match kind {
            FeatureKind::Point => self.points.len(),
            FeatureKind::Line => self.lines.len(),
            FeatureKind::Imported => self.imported.len(),
        }
    }

    /// Number of features across all kinds.
    pub fn total_len(&self) -> usize {
        self.points.len() + self.lines.len() + self.imported.len()
    }

    pub fn is_empty(&self) -> bool {
        self.total_len() == 0
    }

    // ========================================================================
    // Selection
    // ========================================================================

    /// Select a feature. Selecting a feature that does not exist clears the
    /// selection.
    pub fn select(&mut self, target: Option<FeatureRef>) {
        let target = target.filter(|t| self.contains(t));
        if self.selected != target {
            self.selected = target;
            self.mark_dirty();
        }
    }

    pub fn selected(&self) -> Option<&FeatureRef> {
        self.selected.as_ref()
    }

    /// Set the hovered feature, with the same rules as [`Self::select`].
    pub fn hover(&mut self, target: Option<FeatureRef>) {
        let target = target.filter(|t| self.contains(t));
        if self.hovered != target {
            self.hovered = target;
            self.mark_dirty();
        }
    }

    pub fn hovered(&self) -> Option<&FeatureRef> {
        self.hovered.as_ref()
    }
}

/// Remove the first item with a matching id, keeping the order of the rest.
fn take_by_id<T>(items: &mut Vec<T>, id_of: impl Fn(&T) -> &FeatureId, id: &FeatureId) -> Option<T> {
    let index = items.iter().position(|item| id_of(item) == id)?;
    Some(items.remove(index))
}

// ============================================================================
// Tests
// ============================================================================
