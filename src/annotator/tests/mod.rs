//! Behavioural tests for the annotator.
//!
//! These drive the annotator through messages only, the way the UI does.

mod import_tests;
mod scenario_tests;

use crate::annotator::Annotator;
use crate::interaction::PointerEvent;
use crate::message::{Message, Outcome};
use crate::model::{ActiveAction, Coordinate};

/// Shorthand for a coordinate.
fn c(latitude: f64, longitude: f64) -> Coordinate {
    Coordinate::new(latitude, longitude)
}

fn select(annotator: &mut Annotator, action: ActiveAction) -> Outcome {
    annotator.update(Message::SelectTool { action })
}

fn click(annotator: &mut Annotator, at: Coordinate) -> Outcome {
    annotator.update(Message::Pointer {
        event: PointerEvent::Click(at),
    })
}

fn double_click(annotator: &mut Annotator, at: Coordinate) -> Outcome {
    annotator.update(Message::Pointer {
        event: PointerEvent::DoubleClick(at),
    })
}

fn hover(annotator: &mut Annotator, at: Coordinate) -> Outcome {
    annotator.update(Message::Pointer {
        event: PointerEvent::Move(at),
    })
}
