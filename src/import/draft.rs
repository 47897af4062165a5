//! Text buffer state of the import panel.

use geojson::FeatureCollection;

use super::{GeometryParser, ImportError, ImportFormat};

/// In-progress import text for the GeoJSON or WKT tool.
///
/// Lives only while the matching tool is active. The `invalid` flag is set
/// by a failed submit and cleared by the next edit.
#[derive(Debug, Clone, PartialEq)]
pub struct ImportDraft {
    format: ImportFormat,
    text: String,
    invalid: bool,
    error: Option<String>,
    live_preview: bool,
    preview: Option<FeatureCollection>,
}

impl ImportDraft {
    pub fn new(format: ImportFormat, live_preview: bool) -> Self {
        Self {
            format,
            text: String::new(),
            invalid: false,
            error: None,
            live_preview,
            preview: None,
        }
    }

    pub fn format(&self) -> ImportFormat {
        self.format
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// Whether the last submit failed validation.
    pub fn is_invalid(&self) -> bool {
        self.invalid
    }

    /// Message of the last failed submit, for the input tooltip.
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn live_preview(&self) -> bool {
        self.live_preview
    }

    /// Latest valid parse of the text while live preview is on.
    pub fn preview(&self) -> Option<&FeatureCollection> {
        self.preview.as_ref()
    }

    /// Replace the text. Clears the invalid flag and refreshes the preview.
    pub fn edit(&mut self, text: String, parser: &dyn GeometryParser) {
        self.text = text;
        self.invalid = false;
        self.error = None;
        if self.live_preview {
            self.refresh_preview(parser);
        }
    }

    /// Turn live preview on or off. Turning it on parses the current text.
    pub fn set_live_preview(&mut self, enabled: bool, parser: &dyn GeometryParser) {
        self.live_preview = enabled;
        if enabled {
            self.refresh_preview(parser);
        } else {
            self.preview = None;
        }
    }

    /// Record a failed submit.
    pub fn mark_invalid(&mut self, error: &ImportError) {
        self.invalid = true;
        self.error = Some(error.to_string());
    }

    fn refresh_preview(&mut self, parser: &dyn GeometryParser) {
        self.preview = parser.parse(&self.text).ok();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::import::GeoJsonParser;

    const POINT: &str = r#"{"type":"Point","coordinates":[1.0,2.0]}"#;

    #[test]
    fn test_edit_clears_invalid_flag() {
        let mut draft = ImportDraft::new(ImportFormat::GeoJson, false);
        draft.mark_invalid(&ImportError::Empty);
        assert!(draft.is_invalid());
        assert_eq!(draft.error(), Some("Input is empty"));

        draft.edit("{".to_string(), &GeoJsonParser);
        assert!(!draft.is_invalid());
        assert!(draft.error().is_none());
    }

    #[test]
    fn test_live_preview_tracks_validity() {
        let mut draft = ImportDraft::new(ImportFormat::GeoJson, true);
        draft.edit(POINT.to_string(), &GeoJsonParser);
        assert!(draft.preview().is_some());

        draft.edit("{\"type\":".to_string(), &GeoJsonParser);
        assert!(draft.preview().is_none());
        // Previewing never flags the input as invalid
        assert!(!draft.is_invalid());
    }

    #[test]
    fn test_preview_off_by_default() {
        let mut draft = ImportDraft::new(ImportFormat::GeoJson, false);
        draft.edit(POINT.to_string(), &GeoJsonParser);
        assert!(draft.preview().is_none());

        draft.set_live_preview(true, &GeoJsonParser);
        assert!(draft.preview().is_some());

        draft.set_live_preview(false, &GeoJsonParser);
        assert!(draft.preview().is_none());
    }
}
