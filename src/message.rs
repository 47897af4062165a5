//! Application message types for mapnote.
//!
//! All UI events and actions are represented as messages in the Elm
//! architecture style. Messages are serde-tagged so the browser side and the
//! replay binary can send them as JSON.

use serde::{Deserialize, Serialize};

use crate::import::ImportFormat;
use crate::interaction::PointerEvent;
use crate::model::{ActiveAction, FeatureKind, FeatureRef};

/// Messages that can be sent to update application state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Message {
    // Tool sidebar
    /// Tool button pressed. Pressing the active tool turns it off.
    SelectTool { action: ActiveAction },
    /// Abandon the active tool and anything drawn with it (Escape)
    Cancel,

    // Map
    /// Pointer moved, clicked or double clicked on the map
    Pointer { event: PointerEvent },
    /// Camera moved. Owned by the renderer; accepted and ignored here.
    ViewportChanged {
        latitude: f64,
        longitude: f64,
        zoom: f64,
    },

    // Import panel
    /// Import text edited
    ImportTextChanged { text: String },
    /// Live preview checkbox toggled
    ToggleLivePreview,
    /// Import button pressed
    SubmitImport,
    /// File uploaded through the import panel
    ImportFile {
        format: ImportFormat,
        contents: String,
    },

    // Context panel and erase list
    /// Delete one feature
    Delete { target: FeatureRef },
    /// "Erase all" for one kind of feature
    ClearAll { kind: FeatureKind },
    /// Erase every feature
    ClearEverything,
    /// Feature clicked on the map or in a list
    Select { target: Option<FeatureRef> },
    /// Pointer entered or left a feature in the erase list
    Hover { target: Option<FeatureRef> },
}

/// What a processed message changed, for UI feedback.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Outcome {
    /// Feature added to the store by this message.
    pub committed: Option<FeatureRef>,
    /// Number of features removed from the store.
    pub removed: usize,
    /// New active tool, if the message changed it.
    pub mode_change: Option<ActiveAction>,
}
