//! The annotation state machine.
//!
//! [`Annotator`] owns the active tool (with its drawing session or import
//! draft), the collection store and the parser registry. It is only changed
//! through [`Annotator::update`], one message at a time.

mod handlers;

#[cfg(test)]
mod tests;

use crate::config::AppConfig;
use crate::import::{ImportDraft, ParserRegistry};
use crate::message::{Message, Outcome};
use crate::model::ActiveAction;
use crate::session::{DrawingSession, ToolState};
use crate::store::CollectionStore;

/// Consolidated application state: active tool, drawing state and features.
#[derive(Debug)]
pub struct Annotator {
    tool: ToolState,
    store: CollectionStore,
    parsers: ParserRegistry,
    /// Initial live-preview setting for new import drafts.
    live_preview: bool,
    /// Set when the tool state changes. The store tracks its own changes.
    tool_dirty: bool,
}

impl Default for Annotator {
    fn default() -> Self {
        Self::new()
    }
}

impl Annotator {
    pub fn new() -> Self {
        Self {
            tool: ToolState::Idle,
            store: CollectionStore::new(),
            parsers: ParserRegistry::new(),
            live_preview: false,
            tool_dirty: true,
        }
    }

    /// Create an annotator using the preferences from `config`.
    pub fn from_config(config: &AppConfig) -> Self {
        Self::new().with_live_preview(config.preferences.live_preview)
    }

    /// Set whether new import drafts start with live preview enabled.
    pub fn with_live_preview(mut self, enabled: bool) -> Self {
        self.live_preview = enabled;
        self
    }

    /// Process a single message to completion.
    pub fn update(&mut self, message: Message) -> Outcome {
        match message {
            Message::SelectTool { action } => self.handle_select_tool(action),
            Message::Cancel => self.handle_cancel(),
            Message::Pointer { event } => self.handle_pointer(event),
            Message::ViewportChanged {
                latitude,
                longitude,
                zoom,
            } => {
                log::trace!(
                    "Viewport at ({:.5}, {:.5}) zoom {:.2} ignored",
                    latitude,
                    longitude,
                    zoom
                );
                Outcome::default()
            }
            Message::ImportTextChanged { text } => self.handle_import_text(text),
            Message::ToggleLivePreview => self.handle_toggle_live_preview(),
            Message::SubmitImport => self.handle_submit_import(),
            Message::ImportFile { format, contents } => self.handle_import_file(format, &contents),
            Message::Delete { target } => self.handle_delete(&target),
            Message::ClearAll { kind } => self.handle_clear(Some(kind)),
            Message::ClearEverything => self.handle_clear(None),
            Message::Select { target } => {
                self.store.select(target);
                Outcome::default()
            }
            Message::Hover { target } => {
                self.store.hover(target);
                Outcome::default()
            }
        }
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    pub fn tool(&self) -> &ToolState {
        &self.tool
    }

    pub fn action(&self) -> ActiveAction {
        self.tool.action()
    }

    /// Drawing session of the point or line tool, if one is active.
    pub fn session(&self) -> Option<&DrawingSession> {
        self.tool.session()
    }

    /// Import draft of the GeoJSON or WKT tool, if one is active.
    pub fn draft(&self) -> Option<&ImportDraft> {
        self.tool.draft()
    }

    pub fn store(&self) -> &CollectionStore {
        &self.store
    }

    pub fn parsers(&self) -> &ParserRegistry {
        &self.parsers
    }

    /// Whether the erase list and "erase all" controls should be shown.
    pub fn erase_controls_visible(&self) -> bool {
        self.tool.action() == ActiveAction::Erase
    }

    /// Toast text for the active tool.
    pub fn hint(&self) -> Option<&'static str> {
        self.tool.action().hint()
    }

    /// Whether layers need rebuilding since the last [`Self::clear_dirty`].
    pub fn is_dirty(&self) -> bool {
        self.tool_dirty || self.store.is_dirty()
    }

    pub fn clear_dirty(&mut self) {
        self.tool_dirty = false;
        self.store.clear_dirty();
    }
}
