//! Custom marker icon used by the point symbol layer.
//!
//! The icon is decoded once at startup. A failure is returned to the caller
//! and is fatal there; there is no retry.

use thiserror::Error;

use crate::constants::MARKER_IMAGE_NAME;

/// Errors that can occur while loading the marker icon.
#[derive(Error, Debug)]
pub enum MarkerError {
    /// I/O error reading the icon file
    #[error("Failed to read marker icon: {0}")]
    Io(#[from] std::io::Error),

    /// The bytes are not a supported image
    #[error("Failed to decode marker icon: {0}")]
    Decode(#[from] image::ImageError),

    /// Decoded image has no pixels
    #[error("Marker icon is empty")]
    Empty,
}

/// A decoded RGBA marker image, registered with the renderer under `name`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MarkerIcon {
    pub name: String,
    pub width: u32,
    pub height: u32,
    pub rgba: Vec<u8>,
}

impl MarkerIcon {
    /// Decode an icon from encoded image bytes (PNG, JPEG, ...).
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, MarkerError> {
        let image = image::load_from_memory(bytes)?.to_rgba8();
        let (width, height) = image.dimensions();
        if width == 0 || height == 0 {
            return Err(MarkerError::Empty);
        }
        log::debug!("Decoded marker icon {}x{}", width, height);
        Ok(Self {
            name: MARKER_IMAGE_NAME.to_string(),
            width,
            height,
            rgba: image.into_raw(),
        })
    }

    /// Load and decode an icon file.
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load(path: &std::path::Path) -> Result<Self, MarkerError> {
        let bytes = std::fs::read(path)?;
        let icon = Self::from_bytes(&bytes)?;
        log::info!("Loaded marker icon from {:?}", path);
        Ok(icon)
    }
}
