//! mapnote - Map Annotation Tool
//!
//! The interaction core of a browser map annotation tool: tool selection,
//! point and line drawing, GeoJSON/WKT import, and projection of the result
//! into renderable layers. Rendering itself is left to the map library.

pub mod annotator;
pub mod config;
pub mod constants;
pub mod error;
pub mod import;
pub mod interaction;
pub mod layers;
pub mod marker;
pub mod message;
pub mod model;
pub mod session;
pub mod store;

pub use annotator::Annotator;
pub use error::AppError;
pub use layers::{LayerData, LayerProjector, layer_styles};
pub use message::{Message, Outcome};

// WASM entry point
#[cfg(target_arch = "wasm32")]
mod wasm;

#[cfg(target_arch = "wasm32")]
pub use wasm::*;
