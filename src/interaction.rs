//! Pointer interaction rules.
//!
//! [`apply_pointer`] is a pure function from the current tool state and a
//! pointer event to the next tool state plus an optional geometry to commit.
//! It never touches the collection store; the caller applies the commit.

use serde::{Deserialize, Serialize};

use crate::model::{ActiveAction, Coordinate};
use crate::session::ToolState;

/// Pointer input from the map, already resolved to a geographic coordinate.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "coordinate")]
pub enum PointerEvent {
    Move(Coordinate),
    Click(Coordinate),
    DoubleClick(Coordinate),
}

impl PointerEvent {
    pub fn coordinate(&self) -> Coordinate {
        match self {
            PointerEvent::Move(c) | PointerEvent::Click(c) | PointerEvent::DoubleClick(c) => *c,
        }
    }
}

/// Geometry produced by finishing a drawing.
#[derive(Debug, Clone, PartialEq)]
pub enum Commit {
    Point(Coordinate),
    Line(Vec<Coordinate>),
}

/// Result of applying one pointer event.
#[derive(Debug, Clone, PartialEq)]
pub struct Transition {
    /// The tool state after the event.
    pub state: ToolState,
    /// Geometry to append to the store, if the event finished a drawing.
    pub commit: Option<Commit>,
    /// The new action, when the event changed the active tool.
    pub mode_change: Option<ActiveAction>,
}

/// Apply a pointer event to the current tool state.
pub fn apply_pointer(state: ToolState, event: PointerEvent) -> Transition {
    let before = state.action();
    let (state, commit) = match (state, event) {
        (ToolState::AddPoint(mut session), PointerEvent::Move(c)) => {
            session.set_ghost(c);
            (ToolState::AddPoint(session), None)
        }
        (ToolState::AddPoint(_), PointerEvent::Click(c) | PointerEvent::DoubleClick(c)) => {
            log::debug!("Point placed at ({}, {})", c.latitude, c.longitude);
            (ToolState::Idle, Some(Commit::Point(c)))
        }

        (ToolState::AddLine(mut session), PointerEvent::Move(c)) => {
            // The ghost only follows the pointer once a line has been started
            if session.is_drawing() {
                session.set_ghost(c);
            }
            (ToolState::AddLine(session), None)
        }
        (ToolState::AddLine(mut session), PointerEvent::Click(c)) => {
            session.push_vertex(c);
            log::debug!(
                "Line vertex {} placed",
                session.line().map_or(0, |v| v.len())
            );
            (ToolState::AddLine(session), None)
        }
        (ToolState::AddLine(mut session), PointerEvent::DoubleClick(c)) => {
            session.push_vertex(c);
            match session.finish_line() {
                Some(vertices) => (ToolState::Idle, Some(Commit::Line(vertices))),
                None => {
                    log::debug!("Line discarded: not enough vertices");
                    (ToolState::Idle, None)
                }
            }
        }

        // Erase acts through the feature list only; the remaining tools
        // ignore the map.
        (state, _) => (state, None),
    };

    let after = state.action();
    Transition {
        state,
        commit,
        mode_change: (after != before).then_some(after),
    }
}
