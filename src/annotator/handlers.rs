//! Message handlers for the annotator.
//!
//! Each handler processes one category of messages, keeping
//! [`Annotator::update`] a plain dispatch.

use super::Annotator;
use crate::import::{ImportError, ImportFormat};
use crate::interaction::{Commit, PointerEvent, apply_pointer};
use crate::message::Outcome;
use crate::model::{ActiveAction, FeatureId, FeatureKind, FeatureRef};
use crate::session::ToolState;

impl Annotator {
    /// Handle a tool button press.
    pub(super) fn handle_select_tool(&mut self, action: ActiveAction) -> Outcome {
        let before = self.tool.action();
        let tool = std::mem::take(&mut self.tool);
        self.tool = tool.select(action, self.live_preview);
        self.tool_dirty = true;

        let after = self.tool.action();
        log::debug!("Tool: {} -> {}", before.name(), after.name());
        if after.is_placeholder() {
            log::info!("{} is not available yet", after.name());
        }

        Outcome {
            mode_change: (after != before).then_some(after),
            ..Outcome::default()
        }
    }

    /// Drop the active tool and its session.
    pub(super) fn handle_cancel(&mut self) -> Outcome {
        let before = self.tool.action();
        if before == ActiveAction::Idle {
            return Outcome::default();
        }
        self.tool = ToolState::Idle;
        self.tool_dirty = true;
        log::debug!("Cancelled {}", before.name());
        Outcome {
            mode_change: Some(ActiveAction::Idle),
            ..Outcome::default()
        }
    }

    /// Run a pointer event through the interaction rules and store any
    /// finished geometry.
    pub(super) fn handle_pointer(&mut self, event: PointerEvent) -> Outcome {
        let tool = std::mem::take(&mut self.tool);
        let transition = apply_pointer(tool, event);
        self.tool = transition.state;
        if self.tool.session().is_some() || transition.mode_change.is_some() {
            self.tool_dirty = true;
        }

        let committed = transition.commit.and_then(|commit| match commit {
            Commit::Point(position) => {
                let id = self.store.add_point(position);
                log::info!("Added {}", id);
                Some(FeatureRef::new(FeatureKind::Point, id))
            }
            Commit::Line(points) => {
                let vertices = points.len();
                let id = self.store.add_line(points)?;
                log::info!("Added {} with {} vertices", id, vertices);
                Some(FeatureRef::new(FeatureKind::Line, id))
            }
        });

        Outcome {
            committed,
            removed: 0,
            mode_change: transition.mode_change,
        }
    }

    /// Replace the import text of the active import tool.
    pub(super) fn handle_import_text(&mut self, text: String) -> Outcome {
        let Some(draft) = self.tool.draft_mut() else {
            log::warn!("Import text ignored: no import tool active");
            return Outcome::default();
        };
        let Some(parser) = self.parsers.get(draft.format()) else {
            return Outcome::default();
        };
        draft.edit(text, parser);
        self.tool_dirty = true;
        Outcome::default()
    }

    pub(super) fn handle_toggle_live_preview(&mut self) -> Outcome {
        let Some(draft) = self.tool.draft_mut() else {
            return Outcome::default();
        };
        let Some(parser) = self.parsers.get(draft.format()) else {
            return Outcome::default();
        };
        let enabled = !draft.live_preview();
        draft.set_live_preview(enabled, parser);
        self.tool_dirty = true;
        log::debug!("Live preview {}", if enabled { "on" } else { "off" });
        Outcome::default()
    }

    /// Validate the draft text and store it on success, which completes the
    /// import and returns to `Idle`. Failures only set the draft's invalid
    /// flag.
    pub(super) fn handle_submit_import(&mut self) -> Outcome {
        let Some(draft) = self.tool.draft_mut() else {
            log::warn!("Import submitted with no import tool active");
            return Outcome::default();
        };
        let format = draft.format();

        match self.parsers.parse(format, draft.text()) {
            Ok(collection) => {
                let id = self.store.add_imported(format, collection);
                log::info!("Imported {} as {}", format.name(), id);
                self.finish_import(id)
            }
            Err(e) => {
                log::warn!("Rejected {} input: {}", format.name(), e);
                draft.mark_invalid(&e);
                self.tool_dirty = true;
                Outcome::default()
            }
        }
    }

    /// Import an uploaded file. Works from any tool. When the matching import
    /// tool is active, success closes it and a failure is flagged on its
    /// draft.
    pub(super) fn handle_import_file(&mut self, format: ImportFormat, contents: &str) -> Outcome {
        match self.parsers.parse(format, contents) {
            Ok(collection) => {
                let id = self.store.add_imported(format, collection);
                log::info!("Imported {} file as {}", format.name(), id);
                if self.tool.action() == format.action() {
                    return self.finish_import(id);
                }
                Outcome {
                    committed: Some(FeatureRef::new(FeatureKind::Imported, id)),
                    ..Outcome::default()
                }
            }
            Err(e) => {
                log::warn!("Rejected {} file: {}", format.name(), e);
                self.flag_invalid(format, &e);
                Outcome::default()
            }
        }
    }

    fn flag_invalid(&mut self, format: ImportFormat, error: &ImportError) {
        if self.tool.action() != format.action() {
            return;
        }
        if let Some(draft) = self.tool.draft_mut() {
            draft.mark_invalid(error);
            self.tool_dirty = true;
        }
    }

    /// Close the import tool after a committed import.
    fn finish_import(&mut self, id: FeatureId) -> Outcome {
        self.tool = ToolState::Idle;
        self.tool_dirty = true;
        Outcome {
            committed: Some(FeatureRef::new(FeatureKind::Imported, id)),
            removed: 0,
            mode_change: Some(ActiveAction::Idle),
        }
    }

    /// Delete one feature. Unknown ids are a no-op.
    pub(super) fn handle_delete(&mut self, target: &FeatureRef) -> Outcome {
        let removed = self.store.remove(target.kind, &target.id);
        match &removed {
            Some(feature) => log::info!("Erased {}", feature.id()),
            None => log::debug!("Erase ignored: {} not found", target.id),
        }
        Outcome {
            removed: usize::from(removed.is_some()),
            ..Outcome::default()
        }
    }

    /// Erase all features of one kind, or everything when `kind` is `None`.
    pub(super) fn handle_clear(&mut self, kind: Option<FeatureKind>) -> Outcome {
        let removed = match kind {
            Some(kind) => self.store.clear(kind),
            None => self.store.clear_all(),
        };
        log::info!(
            "Erased {} {}",
            removed,
            kind.map_or("features", |k| k.name())
        );
        Outcome {
            removed,
            ..Outcome::default()
        }
    }
}
