//! Data models for mapnote.

mod action;
mod geometry;

pub use action::ActiveAction;
pub use geometry::{
    Coordinate, FeatureId, FeatureKind, FeatureRef, ImportedGeometry, Line, Point, StoredFeature,
    collection, feature, line_string,
};
